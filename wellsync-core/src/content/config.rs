// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration for the content sync layer

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use super::types::DomainKind;

/// Prefix of every environment variable read by [`ContentConfig::from_env`]
pub const ENV_PREFIX: &str = "WELLSYNC_";

/// Configuration for the content sync layer
#[derive(Debug, Clone)]
pub struct ContentConfig {
    /// Language used when a requested language has no text
    pub default_language: String,

    /// Document id bound to each domain; unbound domains stay empty
    pub documents: BTreeMap<DomainKind, String>,

    /// Local directory holding `<document-id>.json` files
    pub content_dir: Option<PathBuf>,

    /// Remote document endpoint (e.g., "https://content.example.com/documents")
    pub remote_url: Option<String>,

    /// Bearer token for the remote endpoint
    pub remote_token: Option<String>,

    /// Interval of the background refresh; `None` disables it
    pub refresh_interval: Option<Duration>,

    /// HTTP timeout for remote reads and writes
    pub timeout: Duration,

    /// Maximum document size (bytes)
    pub max_content_size: u64,

    /// Proxy URL for the remote endpoint
    pub proxy_url: Option<String>,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            default_language: "en".to_string(),
            documents: BTreeMap::new(),
            content_dir: None,
            remote_url: None,
            remote_token: None,
            refresh_interval: Some(Duration::from_secs(3600)), // 1 hour
            timeout: Duration::from_secs(30),
            max_content_size: 5 * 1024 * 1024, // 5 MB
            proxy_url: None,
        }
    }
}

impl ContentConfig {
    /// Reads configuration from `WELLSYNC_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Reads configuration through a variable lookup function.
    ///
    /// Recognized keys (all prefixed with `WELLSYNC_`): `DEFAULT_LANGUAGE`,
    /// `CONTENT_DIR`, `REMOTE_URL`, `REMOTE_TOKEN`, `PROXY_URL`,
    /// `REFRESH_SECS` (0 disables refresh), `TIMEOUT_SECS` (must be positive),
    /// `MAX_CONTENT_SIZE` and `DOC_<DOMAIN>` per domain.
    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| {
            lookup(&format!("{}{}", ENV_PREFIX, name))
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let number = |name: &str| -> Result<Option<u64>, ConfigError> {
            var(name)
                .map(|value| {
                    value.parse::<u64>().map_err(|_| ConfigError::InvalidNumber {
                        key: format!("{}{}", ENV_PREFIX, name),
                        value,
                    })
                })
                .transpose()
        };

        let mut config = Self::default();

        if let Some(language) = var("DEFAULT_LANGUAGE") {
            config.default_language = language;
        }
        config.content_dir = var("CONTENT_DIR").map(PathBuf::from);
        config.remote_url = var("REMOTE_URL");
        config.remote_token = var("REMOTE_TOKEN");
        config.proxy_url = var("PROXY_URL");

        if let Some(secs) = number("REFRESH_SECS")? {
            config.refresh_interval = (secs > 0).then(|| Duration::from_secs(secs));
        }
        if let Some(secs) = number("TIMEOUT_SECS")? {
            if secs == 0 {
                return Err(ConfigError::MustBePositive {
                    key: format!("{}TIMEOUT_SECS", ENV_PREFIX),
                });
            }
            config.timeout = Duration::from_secs(secs);
        }
        if let Some(size) = number("MAX_CONTENT_SIZE")? {
            config.max_content_size = size;
        }

        for kind in DomainKind::ALL {
            if let Some(document_id) = var(&format!("DOC_{}", kind.env_suffix())) {
                config.documents.insert(kind, document_id);
            }
        }

        Ok(config)
    }

    /// Document id bound to a domain, if any
    pub fn document_id(&self, kind: DomainKind) -> Option<&str> {
        self.documents
            .get(&kind)
            .map(String::as_str)
            .filter(|id| !id.is_empty())
    }

    /// Binds a domain to a document id
    pub fn with_document(mut self, kind: DomainKind, document_id: &str) -> Self {
        self.documents.insert(kind, document_id.to_string());
        self
    }

    /// Binds every unbound domain to its default document id
    pub fn with_default_documents(mut self) -> Self {
        for kind in DomainKind::ALL {
            self.documents
                .entry(kind)
                .or_insert_with(|| kind.dir_name().to_string());
        }
        self
    }

    /// Sets the fallback language
    pub fn with_default_language(mut self, language: &str) -> Self {
        self.default_language = language.to_string();
        self
    }

    /// Reads documents from a local directory
    pub fn with_content_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.content_dir = Some(dir.into());
        self
    }

    /// Reads documents from a remote HTTP endpoint
    pub fn with_remote(mut self, url: &str, token: Option<String>) -> Self {
        self.remote_url = Some(url.trim_end_matches('/').to_string());
        self.remote_token = token;
        self
    }

    /// Configure with custom proxy
    pub fn with_proxy(mut self, proxy_url: String) -> Self {
        self.proxy_url = Some(proxy_url);
        self
    }

    /// Disable the background refresh (reload only on demand)
    pub fn without_refresh(mut self) -> Self {
        self.refresh_interval = None;
        self
    }
}

/// Errors that can occur while reading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A numeric variable did not parse
    #[error("{key} must be a non-negative integer, got {value:?}")]
    InvalidNumber {
        /// Variable name
        key: String,
        /// Raw value
        value: String,
    },

    /// A duration variable was zero where zero makes no sense
    #[error("{key} must be greater than zero")]
    MustBePositive {
        /// Variable name
        key: String,
    },
}
