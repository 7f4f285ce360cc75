//! Decoding of provider-returned images
//!
//! Providers return generated images as Base64 data URLs
//! (`data:<mime>;base64,<payload>`) or as bare Base64 payloads.

pub mod decode;
pub mod mime;

pub use decode::decode_image_url;
