use caramelchat_api::{ApiConfig, DEFAULT_API_URL};

/// Configuration for the caramelchat client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the chat backend
    pub api_url: String,

    /// Override for the branding descriptor URL; defaults to
    /// `<api_url>/branding.json`
    pub branding_url: Option<String>,

    /// Echo HTTP requests/responses to the console
    pub verbose: bool,

    /// Write a conversation transcript under ~/.caramelchat/logs
    pub log_enabled: bool,
}

impl ClientConfig {
    pub fn api_config(&self) -> ApiConfig {
        ApiConfig::new(&self.api_url)
    }

    /// Resolved branding URL (explicit override or server-root default)
    pub fn branding_url(&self) -> String {
        self.branding_url
            .clone()
            .unwrap_or_else(|| self.api_config().branding_url())
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            branding_url: None,
            verbose: false,
            log_enabled: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_branding_url_sits_at_server_root() {
        let config = ClientConfig::default();
        assert_eq!(config.branding_url(), "http://localhost:8001/branding.json");
    }

    #[test]
    fn test_explicit_branding_url_wins() {
        let config = ClientConfig {
            branding_url: Some("http://cdn.example.com/branding.json".to_string()),
            ..ClientConfig::default()
        };
        assert_eq!(config.branding_url(), "http://cdn.example.com/branding.json");
    }

    #[test]
    fn test_api_config_normalizes_base_url() {
        let config = ClientConfig {
            api_url: "http://localhost:9000/api/".to_string(),
            ..ClientConfig::default()
        };
        assert_eq!(config.api_config().chat_url(), "http://localhost:9000/api/chat");
    }
}
