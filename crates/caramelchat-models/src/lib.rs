//! Core data structures for caramelchat
//!
//! This crate provides the message model, the wire types shared with the
//! chat backend, and the branding descriptor.

// Models module - data structures for API communication
pub mod attachment;
pub mod branding;
pub mod requests;
pub mod responses;
pub mod types;

// Re-export commonly used types
pub use attachment::FileAttachment;
pub use branding::Branding;
pub use requests::ChatRequest;
pub use responses::{ChatResponse, FileUploadResponse, HealthResponse};
pub use types::{ChatMessage, FileInfo, Sender};

// ============================================================================
// Constants
// ============================================================================

/// Hard ceiling for attachment size (10 MiB)
pub const MAX_FILE_BYTES: u64 = 10 * 1024 * 1024;

/// Extensions the backend knows how to parse, matched case-insensitively
pub const ALLOWED_EXTENSIONS: [&str; 4] = [".pdf", ".txt", ".docx", ".csv"];

/// Delay before the single connectivity-check retry
pub const HEALTH_RETRY_DELAY_SECS: u64 = 2;
