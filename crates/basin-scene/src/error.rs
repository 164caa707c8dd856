use std::path::PathBuf;

use basin_common::BasinError;

#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    #[error("layout radius must be positive and finite, got {0}")]
    InvalidRadius(f32),

    #[error("layout step must be positive and finite, got {0}")]
    InvalidStep(f32),

    #[error("layout needs at least one item")]
    EmptyLayout,

    #[error("reference axis must be non-zero")]
    ZeroReferenceAxis,

    #[error("palette must contain at least one color")]
    EmptyPalette,

    #[error("scene needs at least one ring")]
    NoRings,

    #[error("invalid color for {field}: {value:?}")]
    InvalidColor { field: String, value: String },
}

#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse OBJ {path}: {message}")]
    Obj { path: PathBuf, message: String },

    #[error("OBJ {0} contains no triangles")]
    EmptyMesh(PathBuf),

    #[error("failed to decode image {path}: {message}")]
    Image { path: PathBuf, message: String },
}

impl From<SceneError> for BasinError {
    fn from(err: SceneError) -> Self {
        BasinError::Scene(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scene_error_display() {
        assert_eq!(
            SceneError::InvalidRadius(0.0).to_string(),
            "layout radius must be positive and finite, got 0"
        );
        assert_eq!(
            SceneError::EmptyLayout.to_string(),
            "layout needs at least one item"
        );
        let err = SceneError::InvalidColor {
            field: "palette[2]".into(),
            value: "blue".into(),
        };
        assert_eq!(err.to_string(), "invalid color for palette[2]: \"blue\"");
    }

    #[test]
    fn asset_error_display() {
        let err = AssetError::EmptyMesh(PathBuf::from("models/text0.obj"));
        assert_eq!(err.to_string(), "OBJ models/text0.obj contains no triangles");
    }

    #[test]
    fn converts_into_basin_error() {
        let err: BasinError = SceneError::NoRings.into();
        assert!(matches!(err, BasinError::Scene(_)));
        assert!(err.to_string().contains("at least one ring"));
    }
}
