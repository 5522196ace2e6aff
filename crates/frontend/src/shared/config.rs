//! Client configuration.
//!
//! Defaults are compiled in. A JSON object stored in localStorage under
//! [`CONFIG_STORAGE_KEY`] overrides any subset of the fields, e.g.
//! `{"role": "teacher", "default_per_page": 25}`.

use super::api_utils::api_base;
use contracts::domain::common::Role;
use leptos::prelude::*;
use serde::{Deserialize, Serialize};

pub const CONFIG_STORAGE_KEY: &str = "school_admin_config";

const DEFAULT_PAGE_SIZES: [u32; 4] = [10, 25, 50, 100];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Empty means "derive from window.location"
    pub api_base: String,
    pub default_per_page: u32,
    pub page_size_options: Vec<u32>,
    pub role: Role,
    pub notification_timeout_ms: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            default_per_page: 10,
            page_size_options: DEFAULT_PAGE_SIZES.to_vec(),
            role: Role::default(),
            notification_timeout_ms: 4000,
        }
    }
}

impl ClientConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Self>(json).map(Self::normalized)
    }

    /// Page sizes sorted and unique, zero removed, default size always offered
    pub fn normalized(mut self) -> Self {
        self.page_size_options.retain(|size| *size > 0);
        if self.page_size_options.is_empty() {
            self.page_size_options = DEFAULT_PAGE_SIZES.to_vec();
        }
        if self.default_per_page == 0 {
            self.default_per_page = self.page_size_options[0];
        }
        if !self.page_size_options.contains(&self.default_per_page) {
            self.page_size_options.push(self.default_per_page);
        }
        self.page_size_options.sort_unstable();
        self.page_size_options.dedup();
        self.api_base = self.api_base.trim().trim_end_matches('/').to_string();
        self
    }

    /// Defaults merged with the localStorage override; invalid JSON is logged and ignored
    pub fn load() -> Self {
        let stored = web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .and_then(|s| s.get_item(CONFIG_STORAGE_KEY).ok().flatten());

        let mut config = match stored {
            Some(json) => Self::from_json(&json).unwrap_or_else(|e| {
                log::warn!("Ignoring invalid {}: {}", CONFIG_STORAGE_KEY, e);
                Self::default()
            }),
            None => Self::default(),
        };
        if config.api_base.is_empty() {
            config.api_base = api_base();
        }
        log::debug!(
            "Client config: api_base={}, role={}, per_page={}",
            config.api_base,
            config.role.label(),
            config.default_per_page
        );
        config
    }
}

pub fn use_config() -> ClientConfig {
    use_context::<ClientConfig>().expect("ClientConfig not provided")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = ClientConfig::from_json(r#"{"role": "teacher", "default_per_page": 25}"#)
            .unwrap();
        assert_eq!(config.role, Role::Teacher);
        assert_eq!(config.default_per_page, 25);
        assert_eq!(config.page_size_options, vec![10, 25, 50, 100]);
        assert_eq!(config.notification_timeout_ms, 4000);
    }

    #[test]
    fn test_default_page_size_is_always_an_option() {
        let config = ClientConfig::from_json(
            r#"{"default_per_page": 20, "page_size_options": [50, 0, 10, 50]}"#,
        )
        .unwrap();
        assert_eq!(config.page_size_options, vec![10, 20, 50]);
    }

    #[test]
    fn test_api_base_trailing_slash_is_trimmed() {
        let config = ClientConfig::from_json(r#"{"api_base": "http://api.school.test/"}"#).unwrap();
        assert_eq!(config.api_base, "http://api.school.test");
    }

    #[test]
    fn test_unknown_role_is_rejected() {
        assert!(ClientConfig::from_json(r#"{"role": "janitor"}"#).is_err());
    }
}
