//! Wavefront OBJ loading via `tobj`.

use std::io::BufReader;
use std::path::Path;

use crate::error::AssetError;

/// Triangle mesh with one index buffer; sub-objects are merged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModelMesh {
    pub positions: Vec<[f32; 3]>,
    pub indices: Vec<u32>,
}

impl ModelMesh {
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

pub fn load_obj(path: &Path) -> Result<ModelMesh, AssetError> {
    let bytes = std::fs::read(path).map_err(|source| AssetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_obj(&bytes, path)
}

/// Parse OBJ text. `path` is only used in error messages. Material
/// libraries are ignored; items are colored from the palette.
pub fn parse_obj(bytes: &[u8], path: &Path) -> Result<ModelMesh, AssetError> {
    let mut reader = BufReader::new(bytes);
    let (models, _materials) = tobj::load_obj_buf(&mut reader, &tobj::GPU_LOAD_OPTIONS, |_| {
        Err(tobj::LoadError::OpenFileFailed)
    })
    .map_err(|e| AssetError::Obj {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let mut mesh = ModelMesh::default();
    for model in models {
        let base = mesh.positions.len() as u32;
        mesh.positions.extend(
            model
                .mesh
                .positions
                .chunks_exact(3)
                .map(|p| [p[0], p[1], p[2]]),
        );
        mesh.indices
            .extend(model.mesh.indices.iter().map(|&i| base + i));
    }

    if mesh.is_empty() {
        return Err(AssetError::EmptyMesh(path.to_path_buf()));
    }
    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;

    const QUAD: &str = "\
o quad
v 0 0 0
v 1 0 0
v 1 1 0
v 0 1 0
f 1 2 3 4
";

    const TWO_OBJECTS: &str = "\
o a
v 0 0 0
v 1 0 0
v 0 1 0
f 1 2 3
o b
v 0 0 1
v 1 0 1
v 0 1 1
f 4 5 6
";

    #[test]
    fn quad_is_triangulated() {
        let mesh = parse_obj(QUAD.as_bytes(), Path::new("quad.obj")).unwrap();
        assert_eq!(mesh.positions.len(), 4);
        assert_eq!(mesh.triangle_count(), 2);
        assert!(mesh.indices.iter().all(|&i| (i as usize) < mesh.positions.len()));
    }

    #[test]
    fn objects_are_merged_with_offset_indices() {
        let mesh = parse_obj(TWO_OBJECTS.as_bytes(), Path::new("two.obj")).unwrap();
        assert_eq!(mesh.positions.len(), 6);
        assert_eq!(mesh.triangle_count(), 2);
        let second: Vec<u32> = mesh.indices[3..].to_vec();
        assert!(second.iter().all(|&i| i >= 3));
        assert_eq!(mesh.positions[second[0] as usize][2], 1.0);
    }

    #[test]
    fn empty_file_is_an_error() {
        let err = parse_obj(b"# nothing here\n", Path::new("empty.obj")).unwrap_err();
        assert!(matches!(err, AssetError::EmptyMesh(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_obj(Path::new("/nonexistent/text0.obj")).unwrap_err();
        assert!(matches!(err, AssetError::Io { .. }));
    }

    #[test]
    fn loads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("text0.obj");
        std::fs::write(&path, QUAD).unwrap();
        let mesh = load_obj(&path).unwrap();
        assert_eq!(mesh.triangle_count(), 2);
    }

    #[test]
    fn missing_material_library_is_ignored() {
        let src = format!("mtllib nowhere.mtl\n{QUAD}");
        let mesh = parse_obj(src.as_bytes(), Path::new("mtl.obj")).unwrap();
        assert_eq!(mesh.triangle_count(), 2);
    }
}
