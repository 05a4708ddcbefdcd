use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "fossilmapped")]
#[command(about = "A CLI tool for browsing and sharing crowd-sourced fossil find records")]
#[command(version = "1.0")]
pub(crate) struct Args {
    /// Supabase project base URL (falls back to SUPABASE_URL)
    #[arg(long)]
    pub base_url: Option<String>,

    /// Supabase anon API key (falls back to SUPABASE_ANON_KEY)
    #[arg(long)]
    pub api_key: Option<String>,

    /// Request timeout in milliseconds
    #[arg(short, long, default_value = "10000")]
    pub timeout: u64,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub(crate) enum Command {
    /// Fetch all shared finds, save them to CSV and print a catalogue summary
    Fetch {
        /// Output CSV filename
        #[arg(short, long, default_value = "finds.csv")]
        output: String,
    },

    /// Share a new find to the community table
    Share {
        /// Collector's display name
        #[arg(long)]
        collector: String,

        /// Collector contact email
        #[arg(long)]
        email: Option<String>,

        /// Taxon name, e.g. "Hildoceras bifrons"
        #[arg(long)]
        taxon: String,

        /// Skeletal element or preservation, e.g. "Left Valve"
        #[arg(long)]
        element: Option<String>,

        /// Geological period, optionally qualified, e.g. "Jurassic (Toarcian)"
        #[arg(long)]
        period: Option<String>,

        /// Locality name
        #[arg(long)]
        location: String,

        /// Latitude in decimal degrees
        #[arg(long)]
        lat: f64,

        /// Longitude in decimal degrees
        #[arg(long)]
        lon: f64,

        /// Collection date (YYYY-MM-DD)
        #[arg(long)]
        date: String,

        /// Specimen length in mm
        #[arg(long)]
        length: Option<f64>,

        /// Specimen width in mm
        #[arg(long)]
        width: Option<f64>,

        /// Specimen thickness in mm
        #[arg(long)]
        thickness: Option<f64>,

        /// Specimen weight in grams
        #[arg(long)]
        weight: Option<f64>,

        /// Free-text notes
        #[arg(long)]
        notes: Option<String>,
    },

    /// Print the BibTeX citation for one record
    Cite {
        /// Record identifier, e.g. FMP-2026-001
        id: String,
    },
}
