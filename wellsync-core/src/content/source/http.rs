// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! HTTP document source
//!
//! Reads documents with `GET {base_url}/{document_id}` and replaces them with
//! `PUT {base_url}/{document_id}`, with:
//! - Size limits
//! - Bearer token authentication
//! - Proxy support
//! - Timeout configuration

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use super::{DocumentSource, SourceError};
use crate::content::config::ContentConfig;

/// Document source talking to a remote HTTP document endpoint
pub struct HttpDocumentSource {
    client: Client,
    base_url: String,
    token: Option<String>,
    max_content_size: u64,
}

impl HttpDocumentSource {
    /// Create a new HTTP source from config
    ///
    /// Returns `None` when no remote URL is configured.
    pub fn from_config(config: &ContentConfig) -> Result<Option<Self>, SourceError> {
        let Some(base_url) = config.remote_url.as_deref() else {
            return Ok(None);
        };

        let mut builder = Client::builder().timeout(config.timeout).user_agent(format!(
            "Wellsync/{}",
            option_env!("CARGO_PKG_VERSION").unwrap_or("0.1.0")
        ));

        if let Some(proxy_url) = &config.proxy_url {
            builder = builder.proxy(reqwest::Proxy::all(proxy_url).map_err(transport)?);
        }

        Ok(Some(Self {
            client: builder.build().map_err(transport)?,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: config.remote_token.clone(),
            max_content_size: config.max_content_size,
        }))
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, document_id: &str) -> Result<String, SourceError> {
        if document_id.is_empty() || document_id.contains(['/', '?', '#']) {
            return Err(SourceError::InvalidDocumentId(document_id.to_string()));
        }
        Ok(format!("{}/{}", self.base_url, document_id))
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}

#[async_trait]
impl DocumentSource for HttpDocumentSource {
    fn is_available(&self) -> bool {
        !self.base_url.is_empty()
    }

    async fn read(&self, document_id: &str) -> Result<Value, SourceError> {
        let url = self.url(document_id)?;
        let response = self
            .authorize(self.client.get(&url))
            .send()
            .await
            .map_err(transport)?;

        match response.status() {
            status if status == reqwest::StatusCode::NOT_FOUND => {
                return Err(SourceError::NotFound(document_id.to_string()))
            }
            status if !status.is_success() => return Err(SourceError::Http(status.as_u16())),
            _ => {}
        }

        // Check content length before downloading
        if let Some(len) = response.content_length() {
            if len > self.max_content_size {
                return Err(SourceError::TooLarge {
                    size: len,
                    max: self.max_content_size,
                });
            }
        }

        let data = response.bytes().await.map_err(transport)?;

        // Verify size after download (in case content-length was missing)
        if data.len() as u64 > self.max_content_size {
            return Err(SourceError::TooLarge {
                size: data.len() as u64,
                max: self.max_content_size,
            });
        }

        Ok(serde_json::from_slice(&data)?)
    }

    async fn write(&self, document_id: &str, document: &Value) -> Result<(), SourceError> {
        let url = self.url(document_id)?;
        let response = self
            .authorize(self.client.put(&url))
            .json(document)
            .send()
            .await
            .map_err(transport)?;

        if !response.status().is_success() {
            return Err(SourceError::Http(response.status().as_u16()));
        }
        Ok(())
    }
}

fn transport(err: reqwest::Error) -> SourceError {
    SourceError::Transport(err.to_string())
}
