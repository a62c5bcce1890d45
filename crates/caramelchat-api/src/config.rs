/// Default backend base URL
pub const DEFAULT_API_URL: &str = "http://localhost:8001";

/// Endpoint configuration for the chat backend
#[derive(Debug, Clone)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: normalize_base_url(base_url),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn chat_url(&self) -> String {
        format!("{}/api/chat", self.base_url)
    }

    pub fn upload_url(&self) -> String {
        format!("{}/api/chat/upload", self.base_url)
    }

    pub fn health_url(&self) -> String {
        format!("{}/api/health", self.base_url)
    }

    /// The branding descriptor is served at the server root, not under /api
    pub fn branding_url(&self) -> String {
        format!("{}/branding.json", self.base_url)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

/// Normalize a user-supplied base URL
///
/// Trailing slashes and a trailing "/api" segment are tolerated; endpoints
/// always append their own "/api/..." path.
pub fn normalize_base_url(url: &str) -> String {
    let mut base = url.trim().trim_end_matches('/');
    if base.ends_with("/api") {
        base = &base[..base.len() - "/api".len()];
    }
    base.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_host_is_kept() {
        assert_eq!(normalize_base_url("http://localhost:8001"), "http://localhost:8001");
    }

    #[test]
    fn test_trailing_slash_is_stripped() {
        assert_eq!(normalize_base_url("http://localhost:8001/"), "http://localhost:8001");
    }

    #[test]
    fn test_trailing_api_segment_is_stripped() {
        assert_eq!(normalize_base_url("http://localhost:8001/api"), "http://localhost:8001");
        assert_eq!(normalize_base_url("http://localhost:8001/api/"), "http://localhost:8001");
    }

    #[test]
    fn test_endpoint_urls() {
        let config = ApiConfig::new("http://localhost:8001/");
        assert_eq!(config.chat_url(), "http://localhost:8001/api/chat");
        assert_eq!(config.upload_url(), "http://localhost:8001/api/chat/upload");
        assert_eq!(config.health_url(), "http://localhost:8001/api/health");
        assert_eq!(config.branding_url(), "http://localhost:8001/branding.json");
    }
}
