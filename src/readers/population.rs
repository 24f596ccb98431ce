use crate::error::{MergeError, Result};
use crate::models::{CoordinateKey, PopulationIndex};
use std::fs::File;
use std::path::Path;
use tracing::{debug, info};

/// Loads the population grid into a [`PopulationIndex`].
///
/// The source file is CSV with a header row and columns
/// `longitude,latitude,population` — note the swapped field order relative to
/// output records. Longitude is nominally 0-360 but rows published in the
/// signed convention index under the same key normalization puts forecast
/// rows at. A missing or unreadable file aborts the run; without the grid
/// every subsequent join is meaningless.
pub struct PopulationReader {
    skip_headers: bool,
}

impl PopulationReader {
    pub fn new() -> Self {
        Self { skip_headers: true }
    }

    pub fn read_index(&self, path: &Path) -> Result<PopulationIndex> {
        let file = File::open(path).map_err(|_| MergeError::MissingInputFile {
            path: path.to_path_buf(),
        })?;

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(self.skip_headers)
            .flexible(true)
            .from_reader(file);

        let mut index = PopulationIndex::new();
        let mut skipped = 0u64;

        for row in reader.records() {
            let record = match row {
                Ok(record) => record,
                Err(e) if matches!(e.kind(), csv::ErrorKind::Io(_)) => return Err(e.into()),
                Err(e) => {
                    debug!(error = %e, "skipping unreadable population row");
                    skipped += 1;
                    continue;
                }
            };

            match self.parse_cell(&record) {
                Some((key, population)) => index.insert(key, population),
                None => {
                    debug!(row = ?record, "skipping malformed population row");
                    skipped += 1;
                }
            }
        }

        info!(
            entries = index.len(),
            collisions = index.collisions(),
            skipped,
            "population index built"
        );

        Ok(index)
    }

    /// Parse one `longitude,latitude,population` row into an index entry.
    fn parse_cell(&self, record: &csv::StringRecord) -> Option<(CoordinateKey, f64)> {
        if record.len() < 3 {
            return None;
        }

        let longitude: f64 = record[0].trim().parse().ok()?;
        let latitude: f64 = record[1].trim().parse().ok()?;
        let population: f64 = record[2].trim().parse().ok()?;
        if !population.is_finite() {
            return None;
        }

        let key = CoordinateKey::normalize(latitude, longitude).ok()?;
        Some((key, population))
    }
}

impl Default for PopulationReader {
    fn default() -> Self {
        Self::new()
    }
}
