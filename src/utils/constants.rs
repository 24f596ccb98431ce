/// Default population grid file
pub const DEFAULT_POPULATION_FILE: &str = "population_2020.csv";

/// Filename prefixes of the filter passes
pub const FILTERED_PREFIX: &str = "filtered_";
pub const US_PREFIX: &str = "us_";

/// Position of the population column in master records
pub const POPULATION_COLUMN: usize = 3;

/// Contiguous-US bounding box, compared on 2-decimal rounded coordinates
pub const US_MIN_LAT: f64 = 24.25;
pub const US_MAX_LAT: f64 = 49.25;
pub const US_MIN_LON: f64 = -125.00;
pub const US_MAX_LON: f64 = -67.00;
