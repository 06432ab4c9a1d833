//! Dataset loading - maps the analysis JSON into typed releases at the boundary.

use std::fs;
use std::path::{Path, PathBuf};

use crate::core::schema::{Dataset, Release};
use crate::{VizError, VizResult};

/// Reader for the analysis dataset file.
///
/// The whole dataset is read in one pass; releases come back in file order.
#[derive(Debug, Clone)]
pub struct DatasetReader {
    path: PathBuf,
}

impl DatasetReader {
    pub fn new(path: impl AsRef<Path>) -> Self {
        DatasetReader {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Get the path to the dataset file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read all releases from the dataset.
    ///
    /// # Errors
    /// Returns `VizError::Data` if:
    /// - The file doesn't exist or can't be read
    /// - The contents are not valid JSON under the expected structure
    pub fn read_releases(&self) -> VizResult<Vec<Release>> {
        if !self.path.exists() {
            return Err(VizError::Data(format!(
                "dataset not found: {}",
                self.path.display()
            )));
        }

        let raw = fs::read_to_string(&self.path).map_err(|e| {
            VizError::Data(format!("failed to read {}: {e}", self.path.display()))
        })?;

        let dataset: Dataset = serde_json::from_str(&raw).map_err(|e| {
            VizError::Data(format!("failed to parse {}: {e}", self.path.display()))
        })?;

        Ok(dataset.all_releases)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_dataset(dir: &TempDir, contents: &str) -> PathBuf {
        let path = dir.path().join("analysis.json");
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_read_releases() {
        let dir = TempDir::new().unwrap();
        let path = write_dataset(
            &dir,
            r#"{"all_releases": [
                {"release": "2021 Bowman", "year": 2021, "set": "Paper", "players": [
                    {"name": "A", "debut": "2022-04-01", "war": 3.5, "career_length": 4.0}
                ]},
                {"release": "2020 Bowman Chrome", "year": 2020, "set": "Chrome", "players": []}
            ]}"#,
        );

        let releases = DatasetReader::new(&path).read_releases().unwrap();
        assert_eq!(releases.len(), 2);
        assert_eq!(releases[0].name, "2021 Bowman");
        assert_eq!(releases[0].players.len(), 1);
        assert_eq!(releases[1].players.len(), 0);
    }

    #[test]
    fn test_read_preserves_file_order() {
        let dir = TempDir::new().unwrap();
        let path = write_dataset(
            &dir,
            r#"{"all_releases": [
                {"release": "B"}, {"release": "A"}, {"release": "C"}
            ]}"#,
        );

        let releases = DatasetReader::new(&path).read_releases().unwrap();
        let names: Vec<&str> = releases.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["B", "A", "C"]);
    }

    #[test]
    fn test_missing_file_is_data_error() {
        let dir = TempDir::new().unwrap();
        let result = DatasetReader::new(dir.path().join("nope.json")).read_releases();
        match result {
            Err(VizError::Data(msg)) => assert!(msg.contains("nope.json")),
            other => panic!("expected Data error, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_json_is_data_error() {
        let dir = TempDir::new().unwrap();
        let path = write_dataset(&dir, "{not json");
        let result = DatasetReader::new(&path).read_releases();
        assert!(matches!(result, Err(VizError::Data(_))));
    }

    #[test]
    fn test_wrong_top_level_shape_is_data_error() {
        let dir = TempDir::new().unwrap();
        let path = write_dataset(&dir, r#"["not", "an", "object"]"#);
        let result = DatasetReader::new(&path).read_releases();
        assert!(matches!(result, Err(VizError::Data(_))));
    }

    #[test]
    fn test_missing_collection_yields_zero_releases() {
        let dir = TempDir::new().unwrap();
        let path = write_dataset(&dir, r#"{"other_key": 1}"#);
        let releases = DatasetReader::new(&path).read_releases().unwrap();
        assert!(releases.is_empty());
    }
}
