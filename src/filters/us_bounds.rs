use crate::error::{MergeError, Result};
use crate::filters::FilterStats;
use crate::models::round2;
use crate::utils::constants::{US_MAX_LAT, US_MAX_LON, US_MIN_LAT, US_MIN_LON};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Is a rounded coordinate inside the contiguous-US bounding box?
///
/// Expects signed +/-180 longitude; rows that carry the 0-360 grid
/// convention never fall inside the box.
pub fn in_us_bounds(latitude: f64, longitude: f64) -> bool {
    let latitude = round2(latitude);
    let longitude = round2(longitude);
    (US_MIN_LAT..=US_MAX_LAT).contains(&latitude)
        && (US_MIN_LON..=US_MAX_LON).contains(&longitude)
}

/// Keeps only rows whose `latitude,longitude` columns fall inside the
/// contiguous-US bounding box. Independent of the join; may run before or
/// after it. Kept lines are copied verbatim.
pub struct UsBoundsFilter;

impl UsBoundsFilter {
    pub fn new() -> Self {
        Self
    }

    pub fn apply(&self, input: &Path, output: &Path) -> Result<FilterStats> {
        let file = File::open(input).map_err(|_| MergeError::MissingInputFile {
            path: input.to_path_buf(),
        })?;
        let reader = BufReader::new(file);
        let mut writer = BufWriter::new(File::create(output)?);

        let mut stats = FilterStats::default();
        let mut lines = reader.lines();

        if let Some(header) = lines.next() {
            writeln!(writer, "{}", header?)?;
        }

        for line in lines {
            let line = line?;
            if self.keep(&line) {
                writeln!(writer, "{}", line)?;
                stats.kept += 1;
            } else {
                debug!(row = %line, "dropped row outside US bounds");
                stats.removed += 1;
            }
        }

        writer.flush()?;
        Ok(stats)
    }

    fn keep(&self, line: &str) -> bool {
        let mut fields = line.split(',');
        let latitude = fields.nth(1).and_then(|f| f.trim().parse::<f64>().ok());
        let longitude = fields.next().and_then(|f| f.trim().parse::<f64>().ok());

        match (latitude, longitude) {
            (Some(latitude), Some(longitude)) => in_us_bounds(latitude, longitude),
            _ => false,
        }
    }
}

impl Default for UsBoundsFilter {
    fn default() -> Self {
        Self::new()
    }
}
