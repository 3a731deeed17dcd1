//! Image file loading for the terminal front end
//!
//! The browser hands the flow a data URL straight from the file input; here
//! the file is read from disk, its format sniffed from the magic bytes, and
//! the same data-URL form produced.

use std::path::Path;

use anyhow::{bail, Context, Result};
use image::ImageFormat;

use al_core::media::{encode_data_url, ImageMimeType};

/// Read an image file and return it as a `data:image/...;base64,...` URL.
///
/// Only the formats the analysis accepts (PNG, JPEG, WebP) are allowed;
/// anything else is rejected before it reaches the flow.
pub fn load_image_as_data_url(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("read image failed: {}", path.display()))?;

    let format = image::guess_format(&bytes)
        .with_context(|| format!("unrecognized image format: {}", path.display()))?;

    let mime_type = match format {
        ImageFormat::Png => ImageMimeType::Png,
        ImageFormat::Jpeg => ImageMimeType::Jpeg,
        ImageFormat::WebP => ImageMimeType::Webp,
        other => bail!(
            "unsupported image format {:?}: {} (use PNG, JPEG, or WebP)",
            other,
            path.display()
        ),
    };

    Ok(encode_data_url(mime_type, &bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use al_core::media::decode_data_url;
    use tempfile::TempDir;

    const PNG_MAGIC: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
    const JPEG_MAGIC: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0];

    #[test]
    fn png_file_becomes_a_png_data_url() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("photo.png");
        std::fs::write(&path, PNG_MAGIC).unwrap();

        let url = load_image_as_data_url(&path).unwrap();
        let content = decode_data_url(&url).unwrap();
        assert_eq!(content.mime_type, ImageMimeType::Png);
        assert_eq!(content.data, PNG_MAGIC);
    }

    #[test]
    fn jpeg_file_is_sniffed_from_magic_bytes_not_extension() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("photo.dat");
        std::fs::write(&path, JPEG_MAGIC).unwrap();

        let url = load_image_as_data_url(&path).unwrap();
        assert!(url.starts_with("data:image/jpeg;base64,"));
    }

    #[test]
    fn unrecognized_bytes_are_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, b"plain text").unwrap();

        assert!(load_image_as_data_url(&path).is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(load_image_as_data_url(Path::new("/nonexistent/photo.png")).is_err());
    }
}
