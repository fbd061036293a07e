//! Application configuration. Delivery credentials, content path.

use serde::Deserialize;

/// Inbox that receives contact submissions when nothing else is configured.
pub const DEFAULT_RECIPIENT: &str = "nikhilbhorkade1234@gmail.com";

/// EmailJS REST send endpoint.
pub const DEFAULT_EMAILJS_API_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// Path of the content document, relative to the working directory.
pub const DEFAULT_DATA_PATH: &str = "data.json";

/// Static delivery-service credentials. Built once at startup from
/// [`AppConfig`]; immutable for the process lifetime.
#[derive(Debug, Clone)]
pub struct EmailServiceConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    /// Fixed recipient for both the delivery template and the mailto fallback.
    pub recipient: String,
}

impl EmailServiceConfig {
    /// False when any credential is empty or still a `your_*` placeholder.
    /// An uninitialized service fails every send attempt, which callers
    /// fold into the mail-client fallback.
    pub fn is_initialized(&self) -> bool {
        let filled = |s: &str| !s.is_empty() && !s.starts_with("your_");
        filled(&self.service_id) && filled(&self.template_id) && filled(&self.public_key)
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// EmailJS service ID. Read from FOLIO_EMAILJS_SERVICE_ID.
    #[serde(default)]
    pub emailjs_service_id: Option<String>,

    /// EmailJS template ID. Read from FOLIO_EMAILJS_TEMPLATE_ID.
    #[serde(default)]
    pub emailjs_template_id: Option<String>,

    /// EmailJS public key. Read from FOLIO_EMAILJS_PUBLIC_KEY.
    #[serde(default)]
    pub emailjs_public_key: Option<String>,

    /// Recipient inbox for submissions. Read from FOLIO_RECIPIENT.
    #[serde(default)]
    pub recipient: Option<String>,

    /// Override for the EmailJS endpoint (proxies, tests). Read from
    /// FOLIO_EMAILJS_API_URL.
    #[serde(default)]
    pub emailjs_api_url: Option<String>,

    /// Content document path (default data.json). Read from FOLIO_DATA_PATH.
    #[serde(default)]
    pub data_path: Option<String>,

    /// Route submissions through the in-process mock delivery adapter
    /// instead of EmailJS. Read from FOLIO_MOCK_DELIVERY.
    #[serde(default)]
    pub mock_delivery: Option<bool>,

    /// Typewriter intro animation (default true). Read from FOLIO_TYPEWRITER.
    #[serde(default)]
    pub typewriter: Option<bool>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        c = c.add_source(config::Environment::with_prefix("FOLIO"));
        if let Ok(path) = std::env::var("FOLIO_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        c.build()?.try_deserialize()
    }

    /// Returns the content document path. Defaults to `data.json`.
    pub fn data_path_or_default(&self) -> String {
        self.data_path
            .clone()
            .unwrap_or_else(|| DEFAULT_DATA_PATH.to_string())
    }

    /// Returns the EmailJS send endpoint. Defaults to the hosted API.
    pub fn emailjs_api_url_or_default(&self) -> String {
        self.emailjs_api_url
            .clone()
            .unwrap_or_else(|| DEFAULT_EMAILJS_API_URL.to_string())
    }

    /// Returns true if submissions should use the mock delivery adapter.
    pub fn mock_delivery(&self) -> bool {
        self.mock_delivery.unwrap_or(false)
    }

    /// Returns true if the typewriter intro is enabled.
    pub fn typewriter(&self) -> bool {
        self.typewriter.unwrap_or(true)
    }

    /// Assemble the immutable delivery-service configuration.
    pub fn email_service_config(&self) -> EmailServiceConfig {
        EmailServiceConfig {
            service_id: self.emailjs_service_id.clone().unwrap_or_default(),
            template_id: self.emailjs_template_id.clone().unwrap_or_default(),
            public_key: self.emailjs_public_key.clone().unwrap_or_default(),
            recipient: self
                .recipient
                .clone()
                .unwrap_or_else(|| DEFAULT_RECIPIENT.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_credentials_are_uninitialized() {
        let cfg = EmailServiceConfig {
            service_id: "your_service_id".to_string(),
            template_id: "your_template_id".to_string(),
            public_key: "your_public_key".to_string(),
            recipient: DEFAULT_RECIPIENT.to_string(),
        };
        assert!(!cfg.is_initialized());
    }

    #[test]
    fn test_empty_credentials_are_uninitialized() {
        let cfg = AppConfig::default().email_service_config();
        assert!(!cfg.is_initialized());
        assert_eq!(cfg.recipient, DEFAULT_RECIPIENT);
    }

    #[test]
    fn test_real_credentials_are_initialized() {
        let cfg = EmailServiceConfig {
            service_id: "service_abc123".to_string(),
            template_id: "template_xyz".to_string(),
            public_key: "pk_456".to_string(),
            recipient: "owner@example.com".to_string(),
        };
        assert!(cfg.is_initialized());
    }
}
