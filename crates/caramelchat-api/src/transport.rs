use anyhow::Result;
use async_trait::async_trait;

use caramelchat_models::{ChatResponse, FileAttachment, FileUploadResponse, HealthResponse};

/// Stateless mapping from a session intent to a backend call
///
/// All three operations are single-shot and cancellation-unaware; an
/// in-flight request is never aborted by the caller.
#[async_trait]
pub trait ChatTransport {
    /// Send a plain text message and return the bot reply.
    async fn send_message(&self, message: &str) -> Result<ChatResponse>;

    /// Send a message together with a file attachment.
    async fn send_message_with_file(
        &self,
        file: &FileAttachment,
        message: &str,
    ) -> Result<FileUploadResponse>;

    /// Probe backend connectivity. Any error signals disconnection.
    async fn check_health(&self) -> Result<HealthResponse>;
}
