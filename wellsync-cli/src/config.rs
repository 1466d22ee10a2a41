//! CLI Configuration

use std::path::PathBuf;

use anyhow::{Context, Result};
use wellsync_core::{ContentConfig, ContentManager};

/// CLI configuration.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Directory holding `<document-id>.json` files.
    pub content_dir: PathBuf,
    /// Language requested with `--lang`.
    pub language: Option<String>,
    /// Fallback language override.
    pub default_language: Option<String>,
    /// Print JSON output.
    pub json: bool,
}

impl CliConfig {
    /// Builds the content configuration: environment first, flags on top.
    ///
    /// Every domain is bound to its default document unless a
    /// `WELLSYNC_DOC_<DOMAIN>` variable says otherwise. The CLI is
    /// short-lived, so background refresh is always off.
    pub fn content_config(&self) -> Result<ContentConfig> {
        let mut config = ContentConfig::from_env()
            .context("Invalid WELLSYNC_* environment")?
            .with_content_dir(&self.content_dir)
            .with_default_documents()
            .without_refresh();

        if let Some(language) = &self.default_language {
            config = config.with_default_language(language);
        }

        Ok(config)
    }

    /// Opens a content manager over the configured source.
    pub fn manager(&self) -> Result<ContentManager> {
        Ok(ContentManager::from_config(self.content_config()?)?)
    }

    /// Language used to render text.
    ///
    /// Formatted output always resolves text; JSON output keeps the raw
    /// language maps unless `--lang` was given.
    pub fn display_language<'a>(&'a self, config: &'a ContentConfig) -> Option<&'a str> {
        match (&self.language, self.json) {
            (Some(language), _) => Some(language.as_str()),
            (None, true) => None,
            (None, false) => Some(config.default_language.as_str()),
        }
    }

    /// Creates the content directory if it does not exist yet.
    pub fn ensure_content_dir(&self) -> Result<()> {
        std::fs::create_dir_all(&self.content_dir).with_context(|| {
            format!(
                "Failed to create content directory {}",
                self.content_dir.display()
            )
        })
    }
}
