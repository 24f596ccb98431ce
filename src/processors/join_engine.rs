use crate::error::Result;
use crate::models::{CoordinateKey, MergedRecord, PopulationIndex};
use crate::readers::{ForecastReader, ParsedRow};
use crate::utils::ProgressReporter;
use crate::writers::MasterWriter;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Counters accumulated across all forecast files of a run.
///
/// `total` counts every data row read, matched or not, so `matched <= total`
/// always holds. Malformed rows are reported inside `total` like any other
/// unmatched row (the original behavior of the dataset); `malformed` tracks
/// them separately so the log can tell the two apart.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct JoinStats {
    pub matched: u64,
    pub total: u64,
    pub malformed: u64,
}

impl JoinStats {
    pub fn summary(&self) -> String {
        format!("Matched {} out of {} locations", self.matched, self.total)
    }
}

/// Streams every row of the selected forecast files against the population
/// index, writing a merged record per hit.
pub struct JoinEngine<'a> {
    index: &'a PopulationIndex,
    reader: ForecastReader,
}

impl<'a> JoinEngine<'a> {
    pub fn new(index: &'a PopulationIndex) -> Self {
        Self {
            index,
            reader: ForecastReader::new(),
        }
    }

    pub fn run<W: Write>(
        &self,
        files: &[PathBuf],
        writer: &mut MasterWriter<W>,
        progress: Option<&ProgressReporter>,
    ) -> Result<JoinStats> {
        let mut stats = JoinStats::default();

        for path in files {
            self.process_file(path, writer, &mut stats)?;
            if let Some(progress) = progress {
                progress.increment(1);
            }
        }

        info!(
            matched = stats.matched,
            total = stats.total,
            malformed = stats.malformed,
            "join complete"
        );
        Ok(stats)
    }

    fn process_file<W: Write>(
        &self,
        path: &Path,
        writer: &mut MasterWriter<W>,
        stats: &mut JoinStats,
    ) -> Result<()> {
        debug!(file = %path.display(), "processing forecast file");

        for row in self.reader.open(path)? {
            match row? {
                ParsedRow::Record(forecast) => {
                    match CoordinateKey::normalize(forecast.latitude, forecast.longitude) {
                        Ok(key) => {
                            if let Some(population) = self.index.lookup(&key) {
                                let merged = MergedRecord::from_match(&forecast, key, population);
                                writer.write_record(&merged)?;
                                stats.matched += 1;
                            }
                        }
                        // The reader rejects non-finite coordinates; if one
                        // slips through it counts as a bad row
                        Err(_) => stats.malformed += 1,
                    }
                }
                ParsedRow::Malformed => stats.malformed += 1,
            }
            stats.total += 1;
        }

        Ok(())
    }
}
