const UNKNOWN_MIME: &str = "application/octet-stream";

/// Sniff the MIME type of encoded image bytes from their magic number.
pub fn detect_image_mime(bytes: &[u8]) -> &'static str {
    match bytes {
        [0xFF, 0xD8, 0xFF, ..] => "image/jpeg",
        [0x89, 0x50, 0x4E, 0x47, ..] => "image/png",
        [0x52, 0x49, 0x46, 0x46, _, _, _, _, 0x57, 0x45, 0x42, 0x50, ..] => "image/webp",
        [0x47, 0x49, 0x46, 0x38, ..] => "image/gif",
        [0x42, 0x4D, ..] => "image/bmp",
        _ => {
            tracing::warn!(
                "Unrecognized image format (first 4 bytes: {:02X?})",
                &bytes[..bytes.len().min(4)]
            );
            UNKNOWN_MIME
        }
    }
}

/// MIME type from a data URL header such as `data:image/png;base64`.
///
/// Returns `None` for bare payloads and headers without a media type.
pub fn declared_mime(header: &str) -> Option<&str> {
    let media = header.strip_prefix("data:")?;
    let mime = media.split(';').next().unwrap_or_default().trim();
    (!mime.is_empty()).then_some(mime)
}
