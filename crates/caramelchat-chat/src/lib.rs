//! Chat session controller for caramelchat
//!
//! Owns the message thread, the pending input, the single attachment slot,
//! and the UI flags, and mediates between user actions and the transport.

pub mod session;
pub mod validation;

pub use session::{ChatSession, Key, FILE_ONLY_PLACEHOLDER, SEND_ERROR_MESSAGE, WELCOME_MESSAGE};
pub use validation::{validate_attachment, FileRejection};
