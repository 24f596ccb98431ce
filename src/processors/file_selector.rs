use crate::error::{MergeError, Result};
use crate::utils::date_prefix;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Picks the forecast files for a run date.
///
/// A date `MM-DD-YYYY` selects every file in the directory whose name starts
/// with `MM_DD_YYYY`, in directory-iteration order. The order is not stable
/// across platforms and nothing downstream may rely on it; the selection is
/// logged so a run stays auditable.
pub struct ForecastFileSelector;

impl ForecastFileSelector {
    pub fn new() -> Self {
        Self
    }

    /// Lazily yield matching files. Entries that are not regular files and
    /// entries that fail to stat are skipped.
    pub fn scan(
        &self,
        directory: &Path,
        date: &str,
    ) -> Result<impl Iterator<Item = PathBuf>> {
        let prefix = date_prefix(date)?;

        if !directory.is_dir() {
            return Err(MergeError::MissingInputDirectory {
                path: directory.to_path_buf(),
            });
        }

        let entries = fs::read_dir(directory)?;
        Ok(entries.filter_map(move |entry| {
            let entry = entry.ok()?;
            if !entry.file_type().ok()?.is_file() {
                return None;
            }
            let name = entry.file_name();
            if name.to_string_lossy().starts_with(&prefix) {
                Some(entry.path())
            } else {
                None
            }
        }))
    }

    /// Collect the selection, logging each file. An empty selection is not an
    /// error, only a warning: the run still produces a header-only output.
    pub fn select(&self, directory: &Path, date: &str) -> Result<Vec<PathBuf>> {
        let files: Vec<PathBuf> = self.scan(directory, date)?.collect();

        for file in &files {
            debug!(file = %file.display(), "selected forecast file");
        }
        if files.is_empty() {
            warn!(
                directory = %directory.display(),
                date, "no forecast files match the date prefix"
            );
        }

        Ok(files)
    }
}

impl Default for ForecastFileSelector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str) {
        File::create(dir.join(name)).unwrap();
    }

    #[test]
    fn test_selects_by_date_prefix() -> Result<()> {
        let dir = TempDir::new()?;
        touch(dir.path(), "01_15_2024_run1.csv");
        touch(dir.path(), "01_15_2024_run2.csv");
        touch(dir.path(), "01_16_2024_run1.csv");
        touch(dir.path(), "notes.txt");

        let mut files = ForecastFileSelector::new().select(dir.path(), "01-15-2024")?;
        files.sort();

        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["01_15_2024_run1.csv", "01_15_2024_run2.csv"]);
        Ok(())
    }

    #[test]
    fn test_empty_selection_is_not_an_error() -> Result<()> {
        let dir = TempDir::new()?;
        touch(dir.path(), "02_01_2024_run1.csv");

        let files = ForecastFileSelector::new().select(dir.path(), "01-15-2024")?;
        assert!(files.is_empty());
        Ok(())
    }

    #[test]
    fn test_missing_directory_is_fatal() {
        let result =
            ForecastFileSelector::new().select(Path::new("no_such_directory"), "01-15-2024");
        assert!(matches!(
            result,
            Err(MergeError::MissingInputDirectory { .. })
        ));
    }

    #[test]
    fn test_invalid_date_rejected_before_scanning() {
        let dir = TempDir::new().unwrap();
        let result = ForecastFileSelector::new().select(dir.path(), "2024-01-15");
        assert!(matches!(result, Err(MergeError::InvalidDate { .. })));
    }

    #[test]
    fn test_subdirectories_are_skipped() -> Result<()> {
        let dir = TempDir::new()?;
        std::fs::create_dir(dir.path().join("01_15_2024_subdir"))?;
        touch(dir.path(), "01_15_2024_run1.csv");

        let files = ForecastFileSelector::new().select(dir.path(), "01-15-2024")?;
        assert_eq!(files.len(), 1);
        Ok(())
    }
}
