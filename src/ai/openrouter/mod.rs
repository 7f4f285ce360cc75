pub mod client;
pub mod image;
pub mod request;
pub mod response;
pub mod types;

pub use client::OpenRouterHttpClient;
pub use image::OpenRouterImageClient;
pub use request::{build_request, PreparedRequest};
pub use response::decode_response;
