//! Image payload handling
//!
//! The Upload step hands the image around as a `data:` URL; the model
//! adapter needs the MIME type and the raw bytes. Only the three image
//! types the model accepts are allowed through.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use thiserror::Error;

/// Image types accepted by the analysis request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageMimeType {
    Png,
    Jpeg,
    Webp,
}

impl ImageMimeType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
            Self::Webp => "image/webp",
        }
    }

    pub fn from_mime(mime: &str) -> Option<Self> {
        match mime {
            "image/png" => Some(Self::Png),
            "image/jpeg" => Some(Self::Jpeg),
            "image/webp" => Some(Self::Webp),
            _ => None,
        }
    }
}

/// Decoded image: MIME type plus raw payload bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageContent {
    pub mime_type: ImageMimeType,
    pub data: Vec<u8>,
}

#[derive(Debug, Error)]
pub enum ImageDecodeError {
    #[error("image is not a base64 data URL")]
    NotADataUrl,

    #[error("unsupported image type `{0}`")]
    UnsupportedMime(String),

    #[error("image payload is not valid base64")]
    InvalidPayload(#[from] base64::DecodeError),
}

/// Decode a `data:image/{png,jpeg,webp};base64,...` URL.
///
/// Anything that does not match that exact pattern, or whose payload fails
/// base64 decoding, is rejected.
pub fn decode_data_url(url: &str) -> Result<ImageContent, ImageDecodeError> {
    let rest = url.strip_prefix("data:").ok_or(ImageDecodeError::NotADataUrl)?;
    let (mime, payload) = rest
        .split_once(";base64,")
        .ok_or(ImageDecodeError::NotADataUrl)?;

    let mime_type = ImageMimeType::from_mime(mime)
        .ok_or_else(|| ImageDecodeError::UnsupportedMime(mime.to_string()))?;

    let data = BASE64.decode(payload)?;
    Ok(ImageContent { mime_type, data })
}

/// Encode raw image bytes back into the data-URL form the flow carries.
pub fn encode_data_url(mime_type: ImageMimeType, data: &[u8]) -> String {
    format!("data:{};base64,{}", mime_type.as_str(), BASE64.encode(data))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_png_data_url() {
        let content = decode_data_url("data:image/png;base64,aGVsbG8=").unwrap();
        assert_eq!(content.mime_type, ImageMimeType::Png);
        assert_eq!(content.data, b"hello");
    }

    #[test]
    fn decodes_jpeg_and_webp() {
        assert_eq!(
            decode_data_url("data:image/jpeg;base64,aGk=")
                .unwrap()
                .mime_type,
            ImageMimeType::Jpeg
        );
        assert_eq!(
            decode_data_url("data:image/webp;base64,aGk=")
                .unwrap()
                .mime_type,
            ImageMimeType::Webp
        );
    }

    #[test]
    fn rejects_missing_data_prefix() {
        assert!(matches!(
            decode_data_url("image/png;base64,aGk="),
            Err(ImageDecodeError::NotADataUrl)
        ));
    }

    #[test]
    fn rejects_unsupported_mime() {
        assert!(matches!(
            decode_data_url("data:image/gif;base64,aGk="),
            Err(ImageDecodeError::UnsupportedMime(_))
        ));
    }

    #[test]
    fn rejects_non_image_payload() {
        assert!(matches!(
            decode_data_url("data:text/plain;base64,aGk="),
            Err(ImageDecodeError::UnsupportedMime(_))
        ));
    }

    #[test]
    fn rejects_invalid_base64() {
        assert!(matches!(
            decode_data_url("data:image/png;base64,not-base64!!"),
            Err(ImageDecodeError::InvalidPayload(_))
        ));
    }

    #[test]
    fn encode_round_trips() {
        let url = encode_data_url(ImageMimeType::Webp, b"payload");
        let content = decode_data_url(&url).unwrap();
        assert_eq!(content.mime_type, ImageMimeType::Webp);
        assert_eq!(content.data, b"payload");
    }
}
