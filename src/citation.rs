use crate::dates::parse_year;
use crate::record::FindRecord;

const DATABASE_NAME: &str = "FossilMapped Online Database";
const DATABASE_URL: &str = "https://Fenlanddavid.github.io/fossilmapped/";

/// Render a find as a BibTeX `@misc` entry. Records with an unparseable
/// collection date are cited as "n.d.".
pub fn bibtex_citation(record: &FindRecord) -> String {
    let key = format!("fossilmap_{}", record.id.replace('-', "_"));
    let year = parse_year(&record.date_collected)
        .map(|y| y.to_string())
        .unwrap_or_else(|| "n.d.".to_string());
    let period = record.period.as_deref().unwrap_or("Unknown");

    format!(
        "@misc{{{key},\n  author = {{{author}}},\n  title = {{Record of {taxon}}},\n  howpublished = {{{database}}},\n  year = {{{year}}},\n  note = {{Retrieved from {url}}},\n  location = {{{location}}},\n  keywords = {{{period}, {taxon}}}\n}}",
        key = key,
        author = record.collector_name,
        taxon = record.taxon,
        database = DATABASE_NAME,
        year = year,
        url = DATABASE_URL,
        location = record.location_name,
        period = period,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_citation_renders_template() {
        let record = FindRecord {
            id: "FMP-2026-001".to_string(),
            collector_name: "D. Johnston".to_string(),
            taxon: "Hildoceras bifrons".to_string(),
            period: Some("Jurassic (Toarcian)".to_string()),
            location_name: "Whitby, North Yorkshire".to_string(),
            date_collected: "2026-02-15".to_string(),
            ..FindRecord::default()
        };

        let expected = "@misc{fossilmap_FMP_2026_001,\n  \
             author = {D. Johnston},\n  \
             title = {Record of Hildoceras bifrons},\n  \
             howpublished = {FossilMapped Online Database},\n  \
             year = {2026},\n  \
             note = {Retrieved from https://Fenlanddavid.github.io/fossilmapped/},\n  \
             location = {Whitby, North Yorkshire},\n  \
             keywords = {Jurassic (Toarcian), Hildoceras bifrons}\n}";

        assert_eq!(bibtex_citation(&record), expected);
    }

    #[test]
    fn test_unparseable_date_cites_no_date() {
        let record = FindRecord {
            id: "FMP-X".to_string(),
            date_collected: "last summer".to_string(),
            ..FindRecord::default()
        };
        assert!(bibtex_citation(&record).contains("year = {n.d.}"));
    }

    #[test]
    fn test_missing_period_keyword_is_unknown() {
        let record = FindRecord {
            id: "FMP-Y".to_string(),
            taxon: "Dactylioceras".to_string(),
            date_collected: "2025-08-01".to_string(),
            ..FindRecord::default()
        };
        assert!(bibtex_citation(&record).contains("keywords = {Unknown, Dactylioceras}"));
    }
}
