use serde::{Deserialize, Serialize};

/// Where submissions go when nothing else is configured.
pub const DEFAULT_ENDPOINT_URL: &str = "https://script.google.com/macros/s/AKfycbypIQWKvFDiAVAQZZCWlFGdU61YdXr9WKLHrH7DJqnC7fURvKX4qBu0W4dzmaEu3Yx69g/exec";

/// Settings for the signup form. `endpoint_url` is the only option.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IntakeConfig {
    #[serde(default = "default_endpoint_url", alias = "endpointUrl")]
    pub endpoint_url: String,
}

fn default_endpoint_url() -> String {
    DEFAULT_ENDPOINT_URL.to_string()
}

impl Default for IntakeConfig {
    fn default() -> Self {
        Self {
            endpoint_url: default_endpoint_url(),
        }
    }
}

impl IntakeConfig {
    /// Replace the endpoint, ignoring blank values.
    pub fn with_endpoint(mut self, url: &str) -> Self {
        let url = url.trim();
        if !url.is_empty() {
            self.endpoint_url = url.to_string();
        }
        self
    }

    /// Blank endpoints fall back to the default.
    pub fn normalized(self) -> Self {
        if self.endpoint_url.trim().is_empty() {
            Self::default()
        } else {
            self
        }
    }
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub form: IntakeConfig,
}
