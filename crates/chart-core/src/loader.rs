// File: crates/chart-core/src/loader.rs
// Summary: One-shot dataset loading from a JSON file or string.

use std::path::Path;

use tracing::{debug, info};

use crate::dataset::Dataset;
use crate::error::LoadError;

/// Parse a dataset from JSON text of shape `{ "events": [ { id, name, series: [ { name, data } ] } ] }`.
pub fn parse_dataset(text: &str) -> Result<Dataset, LoadError> {
    let dataset: Dataset = serde_json::from_str(text)?;
    debug!(events = dataset.len(), "parsed dataset");
    Ok(dataset)
}

/// Read and parse the dataset file at `path`.
pub fn load_dataset(path: impl AsRef<Path>) -> Result<Dataset, LoadError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .map_err(|source| LoadError::Io { path: path.to_path_buf(), source })?;
    let dataset = parse_dataset(&text)?;
    info!(path = %path.display(), events = dataset.len(), "loaded dataset");
    Ok(dataset)
}
