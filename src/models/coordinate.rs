use crate::error::{MergeError, Result};

/// Canonical join key: a coordinate pair rounded to 2 decimal places.
///
/// Stored as centi-degree integers so the key is `Hash + Eq` without any
/// float-tolerance tricks. Two raw coordinates within half the rounding unit
/// (0.005 degrees) of the same grid point produce the same key, which is the
/// deliberate fuzzy-match granularity of the join.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CoordinateKey {
    lat_centi: i64,
    lon_centi: i64,
}

impl CoordinateKey {
    /// Normalize a raw coordinate pair into the canonical key.
    ///
    /// Keys live in the population grid's 0-360 longitude system. A negative
    /// longitude can only come from the signed +/-180 convention, so it is
    /// shifted by +360 before rounding no matter which dataset supplied it;
    /// that way a population row published as `-122.33` and a forecast row at
    /// `-122.33` derive the identical key `237.67`. Rounds half-away-from-zero
    /// on both axes. Fails only for non-finite inputs, which callers treat as
    /// a malformed row.
    pub fn normalize(latitude: f64, longitude: f64) -> Result<Self> {
        if !latitude.is_finite() || !longitude.is_finite() {
            return Err(MergeError::InvalidCoordinate(format!(
                "non-finite coordinate ({}, {})",
                latitude, longitude
            )));
        }

        let longitude = if longitude < 0.0 {
            longitude + 360.0
        } else {
            longitude
        };

        Ok(Self {
            lat_centi: round_centi(latitude),
            lon_centi: round_centi(longitude),
        })
    }

    pub fn latitude(&self) -> f64 {
        self.lat_centi as f64 / 100.0
    }

    pub fn longitude(&self) -> f64 {
        self.lon_centi as f64 / 100.0
    }
}

fn round_centi(value: f64) -> i64 {
    (value * 100.0).round() as i64
}

/// Round a value to 2 decimal places, half away from zero.
///
/// Same granularity as [`CoordinateKey`]; used by the bounding-box filter
/// which compares rounded coordinates without building a key.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounding_to_two_decimals() {
        let key = CoordinateKey::normalize(37.6249, 237.6701).unwrap();
        assert!((key.latitude() - 37.62).abs() < 1e-9);
        assert!((key.longitude() - 237.67).abs() < 1e-9);
    }

    #[test]
    fn test_rounds_half_away_from_zero() {
        let key = CoordinateKey::normalize(1.115, 11.5).unwrap();
        assert!((key.latitude() - 1.12).abs() < 1e-9);

        let key = CoordinateKey::normalize(-1.115, 11.5).unwrap();
        assert!((key.latitude() - -1.12).abs() < 1e-9);
    }

    #[test]
    fn test_negative_longitude_shifted_onto_grid() {
        let key = CoordinateKey::normalize(37.62, -122.33).unwrap();
        assert!((key.longitude() - 237.67).abs() < 1e-9);

        // Longitudes already in the 0-360 system are left alone
        let key = CoordinateKey::normalize(37.62, 122.33).unwrap();
        assert!((key.longitude() - 122.33).abs() < 1e-9);
    }

    #[test]
    fn test_signed_and_grid_longitudes_share_a_key() {
        // The same point, as a signed population row and a grid-native one
        let signed = CoordinateKey::normalize(37.62, -122.33).unwrap();
        let grid = CoordinateKey::normalize(37.62, 237.67).unwrap();
        assert_eq!(signed, grid);
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let first = CoordinateKey::normalize(48.8567, -2.3508).unwrap();
        let second = CoordinateKey::normalize(first.latitude(), first.longitude()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_fuzzy_tolerance_near_grid_point() {
        // Anything within half the rounding unit of a grid point lands on it
        let target = CoordinateKey::normalize(37.62, 237.67).unwrap();
        for delta in [-0.004, -0.002, 0.0, 0.002, 0.004] {
            let key = CoordinateKey::normalize(37.62 + delta, 237.67 + delta).unwrap();
            assert_eq!(key, target, "delta {} should round onto the grid point", delta);
        }
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(CoordinateKey::normalize(f64::NAN, 0.0).is_err());
        assert!(CoordinateKey::normalize(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_round2() {
        assert!((round2(24.2549) - 24.25).abs() < 1e-9);
        assert!((round2(-125.004) - -125.0).abs() < 1e-9);
    }
}
