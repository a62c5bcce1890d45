//! Chat backend transport for caramelchat
//!
//! This crate maps session intents onto HTTP calls: text chat, file upload,
//! health probe, and the one-time branding fetch.

pub mod branding;
pub mod config;
pub mod http;
pub mod transport;

pub use branding::fetch_branding;
pub use config::{normalize_base_url, ApiConfig, DEFAULT_API_URL};
pub use http::HttpChatClient;
pub use transport::ChatTransport;
