use crate::config::Dataset;
use crate::error::ImportError;
use std::path::{Path, PathBuf};

/// Name of the export file inside the application's data directory.
pub const DATA_FILE_NAME: &str = "data.txt";

/// `<input_dir>/<dataset>.txt`
pub fn input_path(input_dir: &Path, dataset: Dataset) -> PathBuf {
    input_dir.join(format!("{}.txt", dataset.name()))
}

/// Return the first candidate that exists as a directory.
pub fn resolve_data_dir(candidates: &[PathBuf]) -> Result<PathBuf, ImportError> {
    candidates
        .iter()
        .find(|p| p.is_dir())
        .cloned()
        .ok_or_else(|| ImportError::DataDirNotFound { candidates: candidates.to_vec() })
}

/// `<data_dir>/<app>/data.txt`
pub fn data_file_path(data_dir: &Path, app: &str) -> PathBuf {
    data_dir.join(app).join(DATA_FILE_NAME)
}
