use std::fs::File;

use csv::Writer;
use log::info;
use serde::Serialize;

use crate::record::FindRecord;

/// Flat CSV shape for a find. Photos collapse to one `;`-separated column
/// and measurements spread into per-dimension columns, since the CSV
/// writer cannot serialize nested fields.
#[derive(Debug, Serialize)]
pub struct CsvFindRow {
    pub id: String,
    pub collector_name: String,
    pub collector_email: Option<String>,
    pub taxon: String,
    pub element: Option<String>,
    pub period: Option<String>,
    pub location_name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub date_collected: String,
    pub shared_at: String,
    pub photos: String,
    pub length_mm: Option<f64>,
    pub width_mm: Option<f64>,
    pub thickness_mm: Option<f64>,
    pub weight_g: Option<f64>,
    pub notes: Option<String>,
}

impl From<&FindRecord> for CsvFindRow {
    fn from(record: &FindRecord) -> Self {
        let measurements = record.measurements.clone().unwrap_or_default();
        Self {
            id: record.id.clone(),
            collector_name: record.collector_name.clone(),
            collector_email: record.collector_email.clone(),
            taxon: record.taxon.clone(),
            element: record.element.clone(),
            period: record.period.clone(),
            location_name: record.location_name.clone(),
            latitude: record.latitude,
            longitude: record.longitude,
            date_collected: record.date_collected.clone(),
            shared_at: record.shared_at.clone(),
            photos: record.photos.join("; "),
            length_mm: measurements.length,
            width_mm: measurements.width,
            thickness_mm: measurements.thickness,
            weight_g: measurements.weight,
            notes: record.notes.clone(),
        }
    }
}

/// Save records to CSV file
pub fn save_to_csv(
    records: &[FindRecord],
    filename: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let file = File::create(filename)?;
    let mut writer = Writer::from_writer(file);

    for record in records {
        writer.serialize(CsvFindRow::from(record))?;
    }

    writer.flush()?;
    info!("Data saved to {}", filename);
    Ok(())
}
