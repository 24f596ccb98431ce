use crate::error::{MergeError, Result};
use crate::models::ForecastRecord;
use std::fs::File;
use std::path::Path;
use validator::Validate;

/// Outcome of parsing one forecast data row.
///
/// Malformed rows are not fatal: the join drops them and counts them as
/// unmatched, the same way a valid row with no population hit is counted.
#[derive(Debug)]
pub enum ParsedRow {
    Record(ForecastRecord),
    Malformed,
}

/// Streams rows of a forecast file: `timestamp,latitude,longitude,temperature,temperature_stddev`
/// with a header row. Rows are yielded one at a time and never buffered.
pub struct ForecastReader {
    skip_headers: bool,
}

impl ForecastReader {
    pub fn new() -> Self {
        Self { skip_headers: true }
    }

    pub fn open(&self, path: &Path) -> Result<ForecastRows> {
        let file = File::open(path).map_err(|_| MergeError::MissingInputFile {
            path: path.to_path_buf(),
        })?;

        let reader = csv::ReaderBuilder::new()
            .has_headers(self.skip_headers)
            .flexible(true)
            .from_reader(file);

        Ok(ForecastRows {
            records: reader.into_records(),
        })
    }
}

impl Default for ForecastReader {
    fn default() -> Self {
        Self::new()
    }
}

pub struct ForecastRows {
    records: csv::StringRecordsIntoIter<File>,
}

impl Iterator for ForecastRows {
    type Item = Result<ParsedRow>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.records.next()? {
            Ok(record) => Some(Ok(parse_row(&record))),
            // I/O failures abort the file; anything else is just a bad row
            Err(e) if matches!(e.kind(), csv::ErrorKind::Io(_)) => Some(Err(e.into())),
            Err(_) => Some(Ok(ParsedRow::Malformed)),
        }
    }
}

fn parse_row(record: &csv::StringRecord) -> ParsedRow {
    if record.len() < 5 {
        return ParsedRow::Malformed;
    }

    let latitude: f64 = match record[1].trim().parse() {
        Ok(v) => v,
        Err(_) => return ParsedRow::Malformed,
    };
    let longitude: f64 = match record[2].trim().parse() {
        Ok(v) => v,
        Err(_) => return ParsedRow::Malformed,
    };
    // The range validation below is a bounds comparison and lets NaN through,
    // so finiteness is checked here like the temperature fields
    if !latitude.is_finite() || !longitude.is_finite() {
        return ParsedRow::Malformed;
    }

    let temperature = record[3].trim();
    let temperature_stddev = record[4].trim();
    // Temperature fields stay textual in the output, but they still have to
    // be finite numbers for the row to count as well formed
    if !is_finite_number(temperature) || !is_finite_number(temperature_stddev) {
        return ParsedRow::Malformed;
    }

    let forecast = ForecastRecord::new(
        record[0].to_string(),
        latitude,
        longitude,
        temperature.to_string(),
        temperature_stddev.to_string(),
    );

    match forecast.validate() {
        Ok(()) => ParsedRow::Record(forecast),
        Err(_) => ParsedRow::Malformed,
    }
}

fn is_finite_number(field: &str) -> bool {
    field.parse::<f64>().map(|v| v.is_finite()).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn rows_from(content: &str) -> Vec<ParsedRow> {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", content).unwrap();
        ForecastReader::new()
            .open(temp_file.path())
            .unwrap()
            .map(|row| row.unwrap())
            .collect()
    }

    #[test]
    fn test_reads_data_rows_after_header() {
        let rows = rows_from(
            "timestamp,latitude,longitude,temperature,temperature_stddev\n\
             2024-01-15T00:00,37.62,-122.33,12.5,0.3\n",
        );
        assert_eq!(rows.len(), 1);
        match &rows[0] {
            ParsedRow::Record(record) => {
                assert_eq!(record.timestamp, "2024-01-15T00:00");
                assert!((record.latitude - 37.62).abs() < 1e-9);
                assert!((record.longitude - -122.33).abs() < 1e-9);
                assert_eq!(record.temperature, "12.5");
                assert_eq!(record.temperature_stddev, "0.3");
            }
            other => panic!("expected a record, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_rows_are_flagged_not_fatal() {
        let rows = rows_from(
            "timestamp,latitude,longitude,temperature,temperature_stddev\n\
             2024-01-15T00:00,not-a-lat,-122.33,12.5,0.3\n\
             2024-01-15T01:00,37.62,-122.33,12.1\n\
             2024-01-15T02:00,37.62,-122.33,12.1,0.4\n",
        );
        assert_eq!(rows.len(), 3);
        assert!(matches!(rows[0], ParsedRow::Malformed));
        assert!(matches!(rows[1], ParsedRow::Malformed));
        assert!(matches!(rows[2], ParsedRow::Record(_)));
    }

    #[test]
    fn test_non_finite_coordinate_is_malformed() {
        let rows = rows_from(
            "timestamp,latitude,longitude,temperature,temperature_stddev\n\
             2024-01-15T00:00,NaN,-122.33,12.5,0.3\n\
             2024-01-15T01:00,37.62,inf,12.5,0.3\n",
        );
        assert!(matches!(rows[0], ParsedRow::Malformed));
        assert!(matches!(rows[1], ParsedRow::Malformed));
    }

    #[test]
    fn test_non_finite_temperature_is_malformed() {
        let rows = rows_from(
            "timestamp,latitude,longitude,temperature,temperature_stddev\n\
             2024-01-15T00:00,37.62,-122.33,inf,0.3\n",
        );
        assert!(matches!(rows[0], ParsedRow::Malformed));
    }

    #[test]
    fn test_missing_file() {
        let result = ForecastReader::new().open(Path::new("no_such_forecast.csv"));
        assert!(matches!(result, Err(MergeError::MissingInputFile { .. })));
    }
}
