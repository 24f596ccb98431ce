use crate::error::{MergeError, Result};
use crate::filters::FilterStats;
use crate::utils::constants::POPULATION_COLUMN;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Drops master rows whose population is zero (or unparseable).
///
/// Operates positionally on the population column and copies kept lines
/// verbatim, so it works on any CSV that puts population at that index.
pub struct PopulationThresholdFilter;

impl PopulationThresholdFilter {
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
                debug!(row = %line, "dropped row with zero or unparseable population");
                stats.removed += 1;
            }
        }

        writer.flush()?;
        Ok(stats)
    }

    fn keep(&self, line: &str) -> bool {
        line.split(',')
            .nth(POPULATION_COLUMN)
            .and_then(|field| field.trim().parse::<f64>().ok())
            .map(|population| population > 0.0)
            .unwrap_or(false)
    }
}

impl Default for PopulationThresholdFilter {
    fn default() -> Self {
        Self::new()
    }
}
