// File: crates/heatmap-data/src/lib.rs
// Summary: Fetches and decodes the remote monthly temperature dataset.

use heatmap_core::dataset::{DatasetError, TemperatureDataset};
use thiserror::Error;

/// Fixed public endpoint for the dataset.
pub const DATASET_URL: &str =
    "https://raw.githubusercontent.com/freeCodeCamp/ProjectReferenceData/master/global-temperature.json";

#[derive(Debug, Error)]
pub enum DataError {
    /// Network failure, non-success status, or a body reqwest could not
    /// decode. Callers are expected to let this propagate; there is no retry.
    #[error("dataset unavailable: {0}")]
    Unavailable(#[from] reqwest::Error),
    #[error("dataset body is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error(transparent)]
    Invalid(#[from] DatasetError),
}

/// Fetch and validate the dataset from the fixed endpoint. Exactly one
/// outbound request; suspends until the response body is decoded.
pub async fn load() -> Result<TemperatureDataset, DataError> {
    load_from(DATASET_URL).await
}

/// Same as [`load`], against an explicit URL.
pub async fn load_from(url: &str) -> Result<TemperatureDataset, DataError> {
    let response = reqwest::get(url).await?.error_for_status()?;
    let dataset: TemperatureDataset = response.json().await?;
    dataset.validate()?;
    Ok(dataset)
}

/// Decode and validate a dataset from a JSON string (fixtures, tests).
pub fn parse(body: &str) -> Result<TemperatureDataset, DataError> {
    let dataset: TemperatureDataset = serde_json::from_str(body)?;
    dataset.validate()?;
    Ok(dataset)
}
