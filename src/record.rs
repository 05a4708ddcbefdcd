use serde::{Deserialize, Serialize};

/// Named specimen measurements, all optional. Lengths are millimetres,
/// weight is grams.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Measurements {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thickness: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

/// One catalogued fossil find as used throughout the crate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FindRecord {
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
    pub photos: Vec<String>,
    pub measurements: Option<Measurements>,
    pub notes: Option<String>,
    pub is_public: bool,
}

impl Default for FindRecord {
    fn default() -> Self {
        Self {
            id: String::new(),
            collector_name: String::new(),
            collector_email: None,
            taxon: String::new(),
            element: None,
            period: None,
            location_name: String::new(),
            latitude: 0.0,
            longitude: 0.0,
            date_collected: String::new(),
            shared_at: String::new(),
            photos: Vec::new(),
            measurements: None,
            notes: None,
            is_public: true,
        }
    }
}

/// A row of the hosted `shared_finds` table, column names as stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SharedFindRow {
    pub fossilmap_id: String,
    pub collector_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collector_email: Option<String>,
    pub taxon: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period: Option<String>,
    pub location_name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub date_collected: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photos: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub measurements: Option<Measurements>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub shared_at: String,
}

impl From<SharedFindRow> for FindRecord {
    fn from(row: SharedFindRow) -> Self {
        Self {
            id: row.fossilmap_id,
            collector_name: row.collector_name,
            collector_email: row.collector_email,
            taxon: row.taxon,
            element: row.element,
            period: row.period,
            location_name: row.location_name,
            latitude: row.latitude,
            longitude: row.longitude,
            date_collected: row.date_collected,
            shared_at: row.shared_at,
            photos: row.photos.unwrap_or_default(),
            measurements: row.measurements,
            notes: row.notes,
            // everything read from the shared table is public
            is_public: true,
        }
    }
}

impl From<&FindRecord> for SharedFindRow {
    fn from(record: &FindRecord) -> Self {
        Self {
            fossilmap_id: record.id.clone(),
            collector_name: record.collector_name.clone(),
            collector_email: record.collector_email.clone(),
            taxon: record.taxon.clone(),
            element: record.element.clone(),
            period: record.period.clone(),
            location_name: record.location_name.clone(),
            latitude: record.latitude,
            longitude: record.longitude,
            date_collected: record.date_collected.clone(),
            photos: if record.photos.is_empty() {
                None
            } else {
                Some(record.photos.clone())
            },
            measurements: record.measurements.clone(),
            notes: record.notes.clone(),
            shared_at: record.shared_at.clone(),
        }
    }
}
