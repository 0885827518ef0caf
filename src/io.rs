//! Loader and writer: whole-file read of the input dumps, buffered write of the export.

use crate::config::Dataset;
use crate::paths::input_path;
use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Read one input dump fully into memory.
pub fn load_dataset(input_dir: &Path, dataset: Dataset) -> Result<Vec<u8>> {
    let path = input_path(input_dir, dataset);
    let data = fs::read(&path).with_context(|| format!("read {} from {}", dataset.name(), path.display()))?;
    tracing::info!(path = %path.display(), bytes = data.len(), "loaded {}", dataset.name());
    Ok(data)
}

/// Create/truncate `path` and write `contents` in full. Returns bytes written.
pub fn write_export(path: &Path, contents: &str, buf_bytes: usize) -> Result<u64> {
    let f = File::create(path).with_context(|| format!("create {}", path.display()))?;
    let mut w = BufWriter::with_capacity(buf_bytes.max(8 * 1024), f);
    w.write_all(contents.as_bytes()).with_context(|| format!("write {}", path.display()))?;
    w.flush().with_context(|| format!("flush {}", path.display()))?;
    Ok(contents.len() as u64)
}
