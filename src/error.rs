use std::path::PathBuf;

use reel::SpinError;

/// Everything that can stop the demo.
#[derive(Debug, thiserror::Error)]
pub enum DemoError {
    #[error(transparent)]
    Spin(#[from] SpinError),
    #[error("failed to read items file {path}: {source}")]
    ReadItems { path: PathBuf, source: std::io::Error },
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid setting `{name}`: {reason}")]
    InvalidSetting { name: &'static str, reason: String },
    #[error("spin ended without an item under the indicator")]
    NoLanding,
}
