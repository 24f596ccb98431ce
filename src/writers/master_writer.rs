use crate::error::{MergeError, Result};
use crate::models::MergedRecord;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

pub const MASTER_HEADER: [&str; 6] = [
    "forecast_time",
    "latitude",
    "longitude",
    "population",
    "temp_2m",
    "temp_2m_stddev",
];

/// Append-only writer for the master dataset.
///
/// Writes the header once at creation, then one comma-delimited line per
/// merged record: coordinates at the 2-decimal key precision, population with
/// exactly 6 decimal digits, timestamp and temperature text reproduced from
/// the forecast row. Flushed explicitly at the end of a run and again on drop.
pub struct MasterWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl MasterWriter<BufWriter<File>> {
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path)?;
        Self::from_writer(BufWriter::new(file))
    }
}

impl<W: Write> MasterWriter<W> {
    pub fn from_writer(inner: W) -> Result<Self> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(inner);
        writer.write_record(MASTER_HEADER)?;
        Ok(Self { writer })
    }

    pub fn write_record(&mut self, record: &MergedRecord) -> Result<()> {
        let latitude = format!("{:.2}", record.key.latitude());
        let longitude = format!("{:.2}", record.key.longitude());
        let population = format!("{:.6}", record.population);

        self.writer.write_record([
            record.timestamp.as_str(),
            latitude.as_str(),
            longitude.as_str(),
            population.as_str(),
            record.temperature.as_str(),
            record.temperature_stddev.as_str(),
        ])?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> Result<W> {
        self.writer.into_inner().map_err(|e| {
            MergeError::Io(io::Error::new(io::ErrorKind::Other, e.to_string()))
        })
    }
}
