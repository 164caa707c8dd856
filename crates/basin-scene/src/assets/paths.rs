//! Asset path resolution.

use std::path::{Path, PathBuf};

use basin_config::schema::{AssetsConfig, MODEL_INDEX_PLACEHOLDER};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetPaths {
    models_dir: PathBuf,
    model_pattern: String,
    water_normals: PathBuf,
}

impl AssetPaths {
    /// Resolve paths from config. `base_override` replaces `assets.base_dir`.
    pub fn from_config(config: &AssetsConfig, base_override: Option<&Path>) -> Self {
        let base = base_override
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(&config.base_dir));
        Self {
            models_dir: base.join(&config.models_dir),
            model_pattern: config.model_file_pattern.clone(),
            water_normals: base.join(&config.water_normals),
        }
    }

    /// File for model `index`, e.g. `models/text3.obj`.
    pub fn model_path(&self, index: usize) -> PathBuf {
        let file = self
            .model_pattern
            .replace(MODEL_INDEX_PLACEHOLDER, &index.to_string());
        self.models_dir.join(file)
    }

    pub fn water_normals_path(&self) -> &Path {
        &self.water_normals
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout() {
        let paths = AssetPaths::from_config(&AssetsConfig::default(), None);
        assert_eq!(paths.model_path(0), Path::new(".").join("models").join("text0.obj"));
        assert_eq!(paths.model_path(11), Path::new(".").join("models").join("text11.obj"));
        assert_eq!(
            paths.water_normals_path(),
            Path::new(".").join("img/waternormals.jpg")
        );
    }

    #[test]
    fn base_override_wins() {
        let paths = AssetPaths::from_config(&AssetsConfig::default(), Some(Path::new("/srv/basin")));
        assert_eq!(paths.model_path(2), PathBuf::from("/srv/basin/models/text2.obj"));
    }

    #[test]
    fn custom_pattern() {
        let config = AssetsConfig {
            models_dir: "glyphs".into(),
            model_file_pattern: "glyph_{N}_hi.obj".into(),
            ..AssetsConfig::default()
        };
        let paths = AssetPaths::from_config(&config, Some(Path::new("assets")));
        assert_eq!(paths.model_path(7), PathBuf::from("assets/glyphs/glyph_7_hi.obj"));
    }
}
