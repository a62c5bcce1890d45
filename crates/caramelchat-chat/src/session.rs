use std::time::Duration;

use caramelchat_api::ChatTransport;
use caramelchat_models::{ChatMessage, FileAttachment, HEALTH_RETRY_DELAY_SECS};

use crate::validation::validate_attachment;

/// Seeded as the first message of every session
pub const WELCOME_MESSAGE: &str =
    "Hello! I'm Caramel AI, your document-savvy assistant. Ask me anything, \
     or attach a .pdf, .txt, .docx or .csv file to chat about it. 🚀";

/// Posted in place of a bot reply when a send fails
pub const SEND_ERROR_MESSAGE: &str = "Sorry, I encountered an error. Please try again.";

/// Echo text for a submission that carries a file but no message
pub const FILE_ONLY_PLACEHOLDER: &str = "📎 Sent a file";

/// Keys the session cares about at the input layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Other,
}

/// The chat session controller
///
/// All state is mutated only through the methods below; the view layer
/// reads it through the accessors. `is_loading` gates submissions so at
/// most one send is in flight at a time.
pub struct ChatSession<T: ChatTransport> {
    transport: T,
    messages: Vec<ChatMessage>,
    pending_input: String,
    attached_file: Option<FileAttachment>,
    is_loading: bool,
    is_connected: bool,
    drag_over: bool,
}

impl<T: ChatTransport> ChatSession<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            messages: Vec::new(),
            pending_input: String::new(),
            attached_file: None,
            is_loading: false,
            is_connected: false,
            drag_over: false,
        }
    }

    /// Seed the welcome message and probe connectivity.
    ///
    /// A failed probe is retried exactly once after a fixed delay; after
    /// that the flag stays as last observed.
    pub async fn initialize(&mut self) {
        self.add_welcome_message();
        self.check_connection().await;
    }

    async fn check_connection(&mut self) {
        if self.transport.check_health().await.is_ok() {
            self.is_connected = true;
            return;
        }
        self.is_connected = false;

        tokio::time::sleep(Duration::from_secs(HEALTH_RETRY_DELAY_SECS)).await;
        self.is_connected = self.transport.check_health().await.is_ok();
    }

    /// Send the pending input (and attachment, if any) to the backend.
    ///
    /// No-op when there is nothing to send or a send is already in
    /// flight. The user message is echoed into the thread before the
    /// request goes out; exactly one bot message (reply or apology) is
    /// appended when it resolves, and the attachment slot is cleared
    /// either way.
    pub async fn submit(&mut self) {
        let text = self.pending_input.trim().to_string();
        if (text.is_empty() && self.attached_file.is_none()) || self.is_loading {
            return;
        }

        let file = self.attached_file.clone();
        let echo = if text.is_empty() {
            FILE_ONLY_PLACEHOLDER.to_string()
        } else {
            text.clone()
        };
        self.messages
            .push(ChatMessage::user(echo, file.as_ref().map(|f| f.file_info())));
        self.pending_input.clear();
        self.is_loading = true;

        let reply = match &file {
            Some(f) => self
                .transport
                .send_message_with_file(f, &text)
                .await
                .map(|r| r.message),
            None => self.transport.send_message(&text).await.map(|r| r.response),
        };

        match reply {
            Ok(reply_text) => {
                self.messages.push(ChatMessage::bot(reply_text));
                self.is_connected = true;
            }
            Err(e) => {
                eprintln!("Chat error: {}", e);
                self.messages.push(ChatMessage::bot(SEND_ERROR_MESSAGE));
                self.is_connected = false;
            }
        }

        self.is_loading = false;
        self.attached_file = None;
    }

    /// Validate and stage a file for the next submission.
    ///
    /// A rejected file never lands in the slot; the violation is posted
    /// into the thread as a bot message. A valid file replaces whatever
    /// was staged before (single slot, last wins).
    pub fn attach_file(&mut self, file: FileAttachment) {
        match validate_attachment(&file) {
            Ok(()) => self.attached_file = Some(file),
            Err(rejection) => self.messages.push(ChatMessage::bot(rejection.to_string())),
        }
    }

    /// Drop the staged attachment without sending it.
    pub fn detach_file(&mut self) {
        self.attached_file = None;
    }

    /// Reset the thread to just the welcome message. Idempotent.
    pub fn clear(&mut self) {
        self.messages.clear();
        self.attached_file = None;
        self.add_welcome_message();
    }

    /// Input-layer key handling: plain Enter submits and suppresses the
    /// key's default behavior; anything else is a no-op here.
    ///
    /// Returns true when the default behavior should be suppressed.
    pub async fn handle_key(&mut self, key: Key, shift_held: bool) -> bool {
        match key {
            Key::Enter if !shift_held => {
                self.submit().await;
                true
            }
            _ => false,
        }
    }

    fn add_welcome_message(&mut self) {
        self.messages.push(ChatMessage::bot(WELCOME_MESSAGE));
    }

    // ------------------------------------------------------------------
    // State accessors (read-only view of SessionState)
    // ------------------------------------------------------------------

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn pending_input(&self) -> &str {
        &self.pending_input
    }

    pub fn set_pending_input(&mut self, text: impl Into<String>) {
        self.pending_input = text.into();
    }

    pub fn attached_file(&self) -> Option<&FileAttachment> {
        self.attached_file.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn is_connected(&self) -> bool {
        self.is_connected
    }

    pub fn drag_over(&self) -> bool {
        self.drag_over
    }

    /// Drop-target hover flag, flipped by the view around drop-style attach.
    pub fn set_drag_over(&mut self, drag_over: bool) {
        self.drag_over = drag_over;
    }
}
