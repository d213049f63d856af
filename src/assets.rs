//! Texture decoding with explicit per-asset results.
//!
//! A missing or corrupt asset never aborts startup: the caller receives a
//! flat placeholder instead and the failure is logged.

use std::path::{Path, PathBuf};

use log::warn;

/// Failure to turn an asset file into pixels.
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("unable to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unable to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Decoded RGBA8 texture data ready for GPU upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl TextureImage {
    /// Single-color texture used when an asset fails to load.
    pub fn flat(color: [u8; 4]) -> Self {
        Self {
            width: 1,
            height: 1,
            rgba: color.to_vec(),
        }
    }

    /// Neutral tangent-space normal, for bodies without a normal map.
    pub fn flat_normal() -> Self {
        Self::flat([128, 128, 255, 255])
    }
}

/// Reads and decodes one image file.
pub fn load_texture(path: &Path) -> Result<TextureImage, AssetError> {
    let bytes = std::fs::read(path).map_err(|source| AssetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let decoded = image::load_from_memory(&bytes).map_err(|source| AssetError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    let rgba = decoded.to_rgba8();
    Ok(TextureImage {
        width: rgba.width(),
        height: rgba.height(),
        rgba: rgba.into_raw(),
    })
}

/// Resolves texture files relative to an asset directory.
#[derive(Debug, Clone)]
pub struct TextureCatalog {
    root: PathBuf,
}

impl TextureCatalog {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Loads a named texture, falling back to `placeholder` on failure.
    pub fn load_or(&self, name: &str, placeholder: TextureImage) -> TextureImage {
        let path = self.root.join(name);
        match load_texture(&path) {
            Ok(texture) => texture,
            Err(err) => {
                warn!("texture {name} unavailable, using placeholder: {err}");
                placeholder
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_texture(Path::new("/nonexistent/earth.jpg")).unwrap_err();
        assert!(matches!(err, AssetError::Io { .. }));
    }

    #[test]
    fn garbage_bytes_are_a_decode_error() {
        let mut tmp = NamedTempFile::new().expect("temp texture");
        tmp.write_all(b"definitely not a jpeg").unwrap();
        let err = load_texture(tmp.path()).unwrap_err();
        assert!(matches!(err, AssetError::Decode { .. }));
    }

    #[test]
    fn catalog_falls_back_to_the_placeholder() {
        let catalog = TextureCatalog::new("/nonexistent");
        let texture = catalog.load_or("venus.jpg", TextureImage::flat([200, 180, 120, 255]));
        assert_eq!(texture.width, 1);
        assert_eq!(texture.rgba, vec![200, 180, 120, 255]);
    }

    #[test]
    fn flat_normal_points_out_of_the_surface() {
        let normal = TextureImage::flat_normal();
        assert_eq!(&normal.rgba[..3], &[128, 128, 255]);
    }
}
