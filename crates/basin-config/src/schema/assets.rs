//! Asset location configuration.

use serde::{Deserialize, Serialize};

/// Placeholder in `model_file_pattern` replaced by the item index.
pub const MODEL_INDEX_PLACEHOLDER: &str = "{N}";

/// Where model and texture files are read from.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetsConfig {
    /// Base directory; relative paths resolve against the working directory.
    pub base_dir: String,
    /// Model directory, relative to `base_dir`.
    pub models_dir: String,
    /// File name pattern; must contain `{N}`.
    pub model_file_pattern: String,
    /// Water normal map, relative to `base_dir`.
    pub water_normals: String,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            base_dir: ".".into(),
            models_dir: "models".into(),
            model_file_pattern: "text{N}.obj".into(),
            water_normals: "img/waternormals.jpg".into(),
        }
    }
}
