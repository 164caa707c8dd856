//! Water normal map decoding via `image`.

use std::path::Path;

use crate::error::AssetError;

/// Tightly packed RGBA8 pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalMap {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl NormalMap {
    /// A single texel encoding the unperturbed normal `(0, 0, 1)`.
    pub fn flat() -> Self {
        Self {
            width: 1,
            height: 1,
            rgba: vec![128, 128, 255, 255],
        }
    }
}

pub fn load_normal_map(path: &Path) -> Result<NormalMap, AssetError> {
    let bytes = std::fs::read(path).map_err(|source| AssetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    decode_normal_map(&bytes, path)
}

/// Decode any supported image format. `path` is only used in errors.
pub fn decode_normal_map(bytes: &[u8], path: &Path) -> Result<NormalMap, AssetError> {
    let image = image::load_from_memory(bytes).map_err(|e| AssetError::Image {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    let rgba = image.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(NormalMap {
        width,
        height,
        rgba: rgba.into_raw(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = image::RgbaImage::from_pixel(width, height, image::Rgba([10, 20, 250, 255]));
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, image::ImageFormat::Png).unwrap();
        out.into_inner()
    }

    #[test]
    fn decodes_png() {
        let map = decode_normal_map(&png_bytes(4, 2), Path::new("n.png")).unwrap();
        assert_eq!((map.width, map.height), (4, 2));
        assert_eq!(map.rgba.len(), 4 * 2 * 4);
        assert_eq!(&map.rgba[0..4], &[10, 20, 250, 255]);
    }

    #[test]
    fn rejects_garbage() {
        let err = decode_normal_map(b"not an image", Path::new("bad.jpg")).unwrap_err();
        assert!(matches!(err, AssetError::Image { .. }));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_normal_map(Path::new("/nonexistent/waternormals.jpg")).unwrap_err();
        assert!(matches!(err, AssetError::Io { .. }));
    }

    #[test]
    fn flat_map_is_one_texel() {
        let map = NormalMap::flat();
        assert_eq!(map.rgba.len(), 4);
        assert_eq!(map.rgba[2], 255);
    }
}
