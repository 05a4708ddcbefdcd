use crate::record::{FindRecord, Measurements};

/// Built-in sample records, substituted whenever the remote store cannot
/// be reached so the catalogue is never empty.
pub fn sample_finds() -> Vec<FindRecord> {
    vec![
        FindRecord {
            id: "FMP-2026-001".to_string(),
            collector_name: "D. Johnston".to_string(),
            collector_email: None,
            taxon: "Hildoceras bifrons".to_string(),
            element: Some("Complete Phragmocone".to_string()),
            period: Some("Jurassic (Toarcian)".to_string()),
            location_name: "Whitby, North Yorkshire".to_string(),
            latitude: 54.4858,
            longitude: -0.6206,
            date_collected: "2026-02-15".to_string(),
            shared_at: "2026-02-16".to_string(),
            photos: Vec::new(),
            measurements: Some(Measurements {
                length: Some(45.0),
                width: Some(38.0),
                thickness: Some(12.0),
                weight: Some(85.0),
            }),
            notes: Some(
                "Found in situ within the Alum Shale Member. Excellent suturing preserved."
                    .to_string(),
            ),
            is_public: true,
        },
        FindRecord {
            id: "FMP-2026-002".to_string(),
            collector_name: "S. Miller".to_string(),
            collector_email: None,
            taxon: "Gryphaea arcuata".to_string(),
            element: Some("Left Valve".to_string()),
            period: Some("Jurassic (Sinemurian)".to_string()),
            location_name: "Lyme Regis, Dorset".to_string(),
            latitude: 50.7252,
            longitude: -2.9345,
            date_collected: "2026-02-20".to_string(),
            shared_at: "2026-02-21".to_string(),
            photos: Vec::new(),
            measurements: Some(Measurements {
                length: Some(55.0),
                width: Some(42.0),
                thickness: Some(25.0),
                weight: Some(120.0),
            }),
            notes: None,
            is_public: true,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_ids_are_unique() {
        let finds = sample_finds();
        assert_eq!(finds.len(), 2);
        assert_ne!(finds[0].id, finds[1].id);
        assert!(finds.iter().all(|f| f.is_public));
    }
}
