use crate::models::{CoordinateKey, ForecastRecord};

/// A forecast row enriched with the population value matched at its key.
///
/// Carries the normalized (rounded) coordinates, not the raw forecast ones,
/// and the forecast's original timestamp and temperature text. Produced by the
/// join engine and serialized immediately; never retained.
#[derive(Debug, Clone)]
pub struct MergedRecord {
    pub timestamp: String,
    pub key: CoordinateKey,
    pub population: f64,
    pub temperature: String,
    pub temperature_stddev: String,
}

impl MergedRecord {
    pub fn from_match(forecast: &ForecastRecord, key: CoordinateKey, population: f64) -> Self {
        Self {
            timestamp: forecast.timestamp.clone(),
            key,
            population,
            temperature: forecast.temperature.clone(),
            temperature_stddev: forecast.temperature_stddev.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn test_from_match_carries_normalized_coordinates() {
        let forecast = ForecastRecord::new(
            "2024-01-15T00:00".to_string(),
            37.6201,
            -122.3299,
            "12.5".to_string(),
            "0.3".to_string(),
        );
        let key = CoordinateKey::normalize(forecast.latitude, forecast.longitude).unwrap();

        let merged = MergedRecord::from_match(&forecast, key, 850_000.0);
        assert_eq!(merged.timestamp, "2024-01-15T00:00");
        assert!((merged.key.latitude() - 37.62).abs() < 1e-9);
        assert!((merged.key.longitude() - 237.67).abs() < 1e-9);
        assert_eq!(merged.temperature, "12.5");
    }
}
