use serde::{Deserialize, Serialize};
use validator::Validate;

/// One data row of a forecast file: `timestamp,latitude,longitude,temperature,temperature_stddev`.
///
/// Temperature fields are kept as their original text (validated to parse as
/// finite numbers by the reader) so the merged output reproduces them exactly.
/// The derive checks coordinate ranges; finiteness is the reader's job, since
/// a range comparison never fails for NaN. Rows are consumed one at a time
/// during the join and never retained.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ForecastRecord {
    #[validate(length(min = 1))]
    pub timestamp: String,

    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,

    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,

    #[validate(length(min = 1))]
    pub temperature: String,

    #[validate(length(min = 1))]
    pub temperature_stddev: String,
}

impl ForecastRecord {
    pub fn new(
        timestamp: String,
        latitude: f64,
        longitude: f64,
        temperature: String,
        temperature_stddev: String,
    ) -> Self {
        Self {
            timestamp,
            latitude,
            longitude,
            temperature,
            temperature_stddev,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_record() {
        let record = ForecastRecord::new(
            "2024-01-15T00:00".to_string(),
            37.62,
            -122.33,
            "12.5".to_string(),
            "0.3".to_string(),
        );
        assert!(record.validate().is_ok());
    }

    #[test]
    fn test_out_of_range_latitude() {
        let record = ForecastRecord::new(
            "2024-01-15T00:00".to_string(),
            91.0,
            -122.33,
            "12.5".to_string(),
            "0.3".to_string(),
        );
        assert!(record.validate().is_err());
    }

}
