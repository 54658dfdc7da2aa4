//! Application Configuration
//!
//! Defaults with an optional API base override read from
//! `<body data-api-base="...">`.

use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Prefix for every API path ("" = same origin)
    pub api_base: String,
    /// Lifetime of a transient notification
    pub notification_ttl: Duration,
    /// Pause before leaving the reset-password page
    pub reset_redirect_delay: Duration,
    pub min_password_length: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            notification_ttl: Duration::from_secs(5),
            reset_redirect_delay: Duration::from_secs(2),
            min_password_length: 6,
        }
    }
}

impl AppConfig {
    pub fn with_api_base(mut self, api_base: Option<String>) -> Self {
        if let Some(base) = api_base.map(|b| b.trim().to_string()).filter(|b| !b.is_empty()) {
            self.api_base = base.trim_end_matches('/').to_string();
        }
        self
    }

    /// Defaults plus overrides from the page
    pub fn from_document() -> Self {
        let api_base = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
            .and_then(|body| body.get_attribute("data-api-base"));
        Self::default().with_api_base(api_base)
    }
}
