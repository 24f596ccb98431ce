use crate::error::{MergeError, Result};
use chrono::{Local, NaiveDate};
use std::path::{Path, PathBuf};

/// Today's date in the external `MM-DD-YYYY` format, local time.
pub fn today_date_string() -> String {
    Local::now().format("%m-%d-%Y").to_string()
}

/// Validate an `MM-DD-YYYY` date string and derive the `MM_DD_YYYY` filename
/// prefix used to select forecast files for that date.
pub fn date_prefix(date: &str) -> Result<String> {
    let parsed = NaiveDate::parse_from_str(date, "%m-%d-%Y").map_err(|_| {
        MergeError::InvalidDate {
            value: date.to_string(),
        }
    })?;

    // Reject unpadded inputs like "1-5-2024": the prefix must match the
    // zero-padded filenames exactly
    if parsed.format("%m-%d-%Y").to_string() != date {
        return Err(MergeError::InvalidDate {
            value: date.to_string(),
        });
    }

    Ok(parsed.format("%m_%d_%Y").to_string())
}

/// Default output path for a run date: `master_<MM-DD-YYYY>.csv`.
pub fn master_filename(date: &str) -> PathBuf {
    PathBuf::from(format!("master_{}.csv", date))
}

/// Prefix a file's name, keeping it in the same directory
/// (e.g. `filtered_master_01-15-2024.csv`).
pub fn prefixed_filename(input: &Path, prefix: &str) -> PathBuf {
    let name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    input.with_file_name(format!("{}{}", prefix, name))
}
