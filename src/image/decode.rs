use super::mime::{declared_mime, detect_image_mime};
use crate::models::DecodedImage;
use crate::{Error, Result};
use base64::Engine as _;

const DATA_URL_SCHEME: &str = "data:";

/// Decode an image URL returned by the provider into a bitmap.
///
/// Every failure, whether a malformed data URL, bad Base64 or an
/// undecodable image, is reported as [`Error::Decode`].
pub fn decode_image_url(url: &str) -> Result<DecodedImage> {
    let (declared, payload) = split_data_url(url)?;

    // Line-wrapped Base64 is still valid Base64.
    let payload: String = payload
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();

    let bytes = base64::engine::general_purpose::STANDARD
        .decode(payload.as_bytes())
        .map_err(|e| Error::Decode(format!("invalid base64 payload: {}", e)))?;

    let detected_mime = detect_image_mime(&bytes);
    if let Some(declared) = declared {
        if declared != detected_mime {
            tracing::warn!(
                "Data URL declares {} but payload looks like {}",
                declared,
                detected_mime
            );
        }
    }

    let image = image::load_from_memory(&bytes).map_err(|e| Error::Decode(e.to_string()))?;

    tracing::debug!(
        "Decoded {}x{} image ({})",
        image.width(),
        image.height(),
        detected_mime
    );

    Ok(DecodedImage {
        image,
        declared_mime: declared.map(str::to_string),
        detected_mime,
    })
}

/// Split off the `data:` header, returning the declared MIME type and the
/// Base64 payload. Strings without the scheme are treated as bare payloads.
fn split_data_url(url: &str) -> Result<(Option<&str>, &str)> {
    if !url.starts_with(DATA_URL_SCHEME) {
        return Ok((None, url));
    }

    let (header, payload) = url.split_once(',').ok_or_else(|| {
        Error::Decode("data URL is missing the ',' before its payload".to_string())
    })?;

    Ok((declared_mime(header), payload))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FailureKind;
    use image::{DynamicImage, ImageFormat, RgbaImage};

    fn create_test_image() -> RgbaImage {
        RgbaImage::from_fn(4, 3, |x, y| {
            image::Rgba([(x * 60) as u8, (y * 80) as u8, 200, 255 - (x * 10) as u8])
        })
    }

    fn encode(img: &RgbaImage, format: ImageFormat) -> Vec<u8> {
        let mut bytes = Vec::new();
        img.write_to(&mut std::io::Cursor::new(&mut bytes), format)
            .unwrap();
        bytes
    }

    fn to_base64(bytes: &[u8]) -> String {
        base64::engine::general_purpose::STANDARD.encode(bytes)
    }

    #[test]
    fn test_png_data_url_round_trip_is_pixel_identical() {
        let original = create_test_image();
        let url = format!(
            "data:image/png;base64,{}",
            to_base64(&encode(&original, ImageFormat::Png))
        );

        let decoded = decode_image_url(&url).unwrap();

        assert_eq!(decoded.declared_mime.as_deref(), Some("image/png"));
        assert_eq!(decoded.detected_mime, "image/png");
        assert_eq!(decoded.image.to_rgba8(), original);
    }

    #[test]
    fn test_bare_base64_payload() {
        let original = create_test_image();
        let decoded = decode_image_url(&to_base64(&encode(&original, ImageFormat::Png))).unwrap();

        assert!(decoded.declared_mime.is_none());
        assert_eq!(decoded.image.to_rgba8(), original);
    }

    #[test]
    fn test_line_wrapped_payload() {
        let original = create_test_image();
        let b64 = to_base64(&encode(&original, ImageFormat::Png));
        let wrapped: String = b64
            .as_bytes()
            .chunks(16)
            .map(|chunk| std::str::from_utf8(chunk).unwrap())
            .collect::<Vec<_>>()
            .join("\n");

        let decoded = decode_image_url(&format!("data:image/png;base64,{}", wrapped)).unwrap();
        assert_eq!(decoded.image.to_rgba8(), original);
    }

    #[test]
    fn test_only_first_comma_splits_header() {
        let err = decode_image_url("data:image/png;base64,abc,def").unwrap_err();
        // the payload keeps the second comma, which is invalid Base64
        assert_eq!(err.kind(), FailureKind::DecodeError);
    }

    #[test]
    fn test_invalid_base64_is_decode_error() {
        let err = decode_image_url("data:image/png;base64,!!!invalid-base64!!!").unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
        assert!(err.to_string().starts_with("image decode failed: "));
    }

    #[test]
    fn test_data_url_without_comma_is_decode_error() {
        let err = decode_image_url("data:image/png;base64").unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }

    #[test]
    fn test_valid_base64_non_image_is_decode_error() {
        let url = format!("data:image/png;base64,{}", to_base64(b"definitely not a png"));
        let err = decode_image_url(&url).unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }

    #[test]
    fn test_mislabelled_jpeg_still_decodes() {
        let rgb = DynamicImage::ImageRgba8(create_test_image()).to_rgb8();
        let mut bytes = Vec::new();
        rgb.write_to(&mut std::io::Cursor::new(&mut bytes), ImageFormat::Jpeg)
            .unwrap();

        let url = format!("data:image/png;base64,{}", to_base64(&bytes));
        let decoded = decode_image_url(&url).unwrap();

        assert_eq!(decoded.declared_mime.as_deref(), Some("image/png"));
        assert_eq!(decoded.detected_mime, "image/jpeg");
        assert_eq!((decoded.width(), decoded.height()), (4, 3));
    }
}
