use anyhow::{anyhow, Result};
use async_trait::async_trait;

use caramelchat_logging::{log_request, log_response};
use caramelchat_models::{
    ChatRequest, ChatResponse, FileAttachment, FileUploadResponse, HealthResponse,
};

use crate::config::ApiConfig;
use crate::transport::ChatTransport;

/// HTTP implementation of [`ChatTransport`] backed by a single reqwest client
pub struct HttpChatClient {
    config: ApiConfig,
    client: reqwest::Client,
    verbose: bool,
}

impl HttpChatClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
            verbose: false,
        }
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Read the body, turning non-2xx statuses into errors that carry the
    /// status and whatever text the backend returned.
    async fn read_body(&self, url: &str, response: reqwest::Response) -> Result<String> {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        log_response(url, status.as_u16(), &body, self.verbose);

        if !status.is_success() {
            return Err(anyhow!("API request failed: {} - {}", status, body));
        }
        Ok(body)
    }
}

#[async_trait]
impl ChatTransport for HttpChatClient {
    async fn send_message(&self, message: &str) -> Result<ChatResponse> {
        let url = self.config.chat_url();
        let request = ChatRequest::new(message);
        log_request("POST", &url, Some(&request), self.verbose);

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        let body = self.read_body(&url, response).await?;
        let chat_response: ChatResponse = serde_json::from_str(&body)?;
        Ok(chat_response)
    }

    async fn send_message_with_file(
        &self,
        file: &FileAttachment,
        message: &str,
    ) -> Result<FileUploadResponse> {
        let url = self.config.upload_url();
        log_request("POST", &url, None, self.verbose);

        let part = reqwest::multipart::Part::bytes(file.bytes.clone())
            .file_name(file.name.clone())
            .mime_str(&file.content_type)?;
        let form = reqwest::multipart::Form::new()
            .part("file", part)
            .text("message", message.to_string());

        let response = self.client.post(&url).multipart(form).send().await?;

        let body = self.read_body(&url, response).await?;
        let upload_response: FileUploadResponse = serde_json::from_str(&body)?;
        Ok(upload_response)
    }

    async fn check_health(&self) -> Result<HealthResponse> {
        let url = self.config.health_url();
        log_request("GET", &url, None, self.verbose);

        let response = self.client.get(&url).send().await?;

        let body = self.read_body(&url, response).await?;
        let health: HealthResponse = serde_json::from_str(&body)?;
        Ok(health)
    }
}
