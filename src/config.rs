//! Relay configuration.
//!
//! The form-relay access key is deployment configuration, never a literal
//! in code or content. Lookup order:
//! 1. `FOLIO_RELAY_ACCESS_KEY` / `FOLIO_RELAY_TO_EMAIL` (and optionally
//!    `FOLIO_RELAY_ENDPOINT`) environment variables
//! 2. `<config-dir>/folio/relay.json`
//! Missing configuration is not an error: the app runs with submission
//! disabled and reports a fixed message if a send is attempted.

use serde::Deserialize;
use std::path::PathBuf;

/// Default form-relay endpoint (Web3Forms)
pub const DEFAULT_ENDPOINT: &str = "https://api.web3forms.com/submit";

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

/// Where and how to deliver contact-form submissions
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RelayConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    pub access_key: String,
    pub to_email: String,
}

impl RelayConfig {
    /// Resolve relay configuration from the environment, then the user
    /// config file. Returns None when neither source is present.
    pub fn load() -> Option<Self> {
        if let Some(cfg) = Self::from_env() {
            return Some(cfg);
        }
        Self::from_config_file()
    }

    fn from_env() -> Option<Self> {
        let access_key = std::env::var("FOLIO_RELAY_ACCESS_KEY").ok()?;
        let to_email = std::env::var("FOLIO_RELAY_TO_EMAIL").ok()?;
        let endpoint =
            std::env::var("FOLIO_RELAY_ENDPOINT").unwrap_or_else(|_| default_endpoint());
        Some(Self {
            endpoint,
            access_key,
            to_email,
        })
    }

    fn from_config_file() -> Option<Self> {
        let path = Self::config_path()?;
        let content = std::fs::read_to_string(path).ok()?;
        Self::parse(&content)
    }

    /// `<config-dir>/folio/relay.json`, platform config dir per `dirs`
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("folio").join("relay.json"))
    }

    fn parse(content: &str) -> Option<Self> {
        serde_json::from_str(content).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let cfg = RelayConfig::parse(
            r#"{"endpoint":"https://relay.example/submit","accessKey":"k","toEmail":"me@example.com"}"#,
        )
        .unwrap();
        assert_eq!(cfg.endpoint, "https://relay.example/submit");
        assert_eq!(cfg.access_key, "k");
        assert_eq!(cfg.to_email, "me@example.com");
    }

    #[test]
    fn test_parse_defaults_endpoint() {
        let cfg = RelayConfig::parse(r#"{"accessKey":"k","toEmail":"me@example.com"}"#).unwrap();
        assert_eq!(cfg.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_parse_rejects_missing_key() {
        assert!(RelayConfig::parse(r#"{"toEmail":"me@example.com"}"#).is_none());
    }
}
