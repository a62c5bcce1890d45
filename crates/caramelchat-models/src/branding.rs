use serde::{Deserialize, Serialize};

/// Organization display fields served as a static `branding.json`
///
/// Fetched once at startup and held for the lifetime of the application.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Branding {
    pub organization: String,
    pub website: String,
    pub email: String,
    pub mobile: String,
    pub slogan: String,
    pub logo_title: String,
    pub logo_favicon: String,
    pub github: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_branding_decodes_descriptor() {
        let json = r#"{
            "organization": "HereAndNow AI",
            "website": "https://hereandnowai.com",
            "email": "info@hereandnowai.com",
            "mobile": "+91 996 296 1000",
            "slogan": "designed with passion for innovation",
            "logo_title": "/assets/logo-title.png",
            "logo_favicon": "/assets/favicon.ico",
            "github": "https://github.com/hereandnowai"
        }"#;
        let branding: Branding = serde_json::from_str(json).unwrap();
        assert_eq!(branding.organization, "HereAndNow AI");
        assert_eq!(branding.slogan, "designed with passion for innovation");
    }
}
