use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum GridError {
    #[error("latitude {0} is outside [-90, 90]")]
    LatitudeOutOfRange(f64),
    #[error("longitude {0} is outside [-180, 180]")]
    LongitudeOutOfRange(f64),
}

/// An approximate grid-square label: two zone letters plus 3-digit
/// easting/northing fragments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridReference {
    pub zone: String,
    pub easting: String,
    pub northing: String,
}

impl fmt::Display for GridReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.zone, self.easting, self.northing)
    }
}

// TODO: derive the zone from zone_letters once region detection exists;
// until then every reference is labelled with this fixed square.
const ZONE_PLACEHOLDER: &str = "SY";

/// Derive a display grid reference from decimal-degree coordinates.
///
/// This is a coarse linear approximation, not a geodetic transform: the
/// output is suitable for map labels and detail copy only and must never
/// be treated as an accurate national-grid position. Rejects latitudes
/// outside [-90, 90] and longitudes outside [-180, 180] (non-finite input
/// fails the same check).
pub fn derive_grid_reference(lat: f64, lon: f64) -> Result<GridReference, GridError> {
    if !(-90.0..=90.0).contains(&lat) {
        return Err(GridError::LatitudeOutOfRange(lat));
    }
    if !(-180.0..=180.0).contains(&lon) {
        return Err(GridError::LongitudeOutOfRange(lon));
    }

    let easting = ((lon + 3.0) * 100_000.0).rem_euclid(700_000.0).floor() as u32;
    let northing = ((lat - 49.0) * 111_000.0).rem_euclid(1_300_000.0).floor() as u32;

    let easting_digits = format!("{:05}", easting % 100_000);
    let northing_digits = format!("{:05}", northing % 100_000);

    Ok(GridReference {
        zone: ZONE_PLACEHOLDER.to_string(),
        easting: easting_digits[..3].to_string(),
        northing: northing_digits[..3].to_string(),
    })
}

/// Letter pair for the 500 km/100 km square containing the given
/// pseudo-projected easting/northing, skipping 'I' in the classic scheme.
///
/// Expects values in the deriver's projection range (easting below 700 km,
/// northing below 1300 km). Not yet wired into `derive_grid_reference`,
/// which pins the zone to a placeholder.
pub fn zone_letters(easting: u32, northing: u32) -> String {
    let e1 = easting / 100_000;
    let n1 = northing / 100_000;

    let block = 21u32.saturating_sub(n1);
    let first = (block / 5) * 5 + (e1 + 10) / 5 + 65;
    let second = (block % 5) * 5 + (e1 + 10) % 5 + 65;

    let skip_i = |code: u32| -> char {
        let adjusted = if code >= 'I' as u32 { code + 1 } else { code };
        adjusted as u8 as char
    };

    format!("{}{}", skip_i(first), skip_i(second))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deriver_is_deterministic() {
        let a = derive_grid_reference(54.4858, -0.6206).unwrap();
        let b = derive_grid_reference(54.4858, -0.6206).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_known_reference() {
        // (50.5, -0.5): easting 250000, northing 166500 exactly
        let grid = derive_grid_reference(50.5, -0.5).unwrap();
        assert_eq!(grid.zone, "SY");
        assert_eq!(grid.easting, "500");
        assert_eq!(grid.northing, "665");
        assert_eq!(grid.to_string(), "SY 500 665");
    }

    #[test]
    fn test_western_coordinates_stay_defined() {
        // west of 3°W the projected easting goes negative before the
        // euclidean mod; output must still be three digits each
        let grid = derive_grid_reference(50.1, -5.5).unwrap();
        assert_eq!(grid.easting.len(), 3);
        assert_eq!(grid.northing.len(), 3);
        assert!(grid.easting.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_out_of_range_is_rejected() {
        assert_eq!(
            derive_grid_reference(90.5, 0.0),
            Err(GridError::LatitudeOutOfRange(90.5))
        );
        assert_eq!(
            derive_grid_reference(0.0, -180.5),
            Err(GridError::LongitudeOutOfRange(-180.5))
        );
        assert!(derive_grid_reference(f64::NAN, 0.0).is_err());
        assert!(derive_grid_reference(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_zone_letters_known_squares() {
        assert_eq!(zone_letters(250_000, 166_500), "XC");
        assert_eq!(zone_letters(0, 0), "XF");
    }

    #[test]
    fn test_zone_letters_skip_i() {
        // second letter lands on 'I' and must shift to 'J'
        assert_eq!(zone_letters(300_000, 0), "XJ");
    }
}
