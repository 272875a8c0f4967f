//! Docs page retrieval.

use crate::config::DocsConfig;
use crate::error::DocbotError;
use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::debug;

/// Source of raw documentation markup, one page per module.
#[async_trait]
pub trait DocsSource: Send + Sync {
    async fn fetch_page(&self, module: &str) -> Result<String, DocbotError>;
}

/// Fetches pages over HTTP(S) from a `{module}` URL template.
#[derive(Clone)]
pub struct HttpDocsSource {
    client: reqwest::Client,
    url_template: String,
}

impl HttpDocsSource {
    /// Build from config; the timeout is applied only when configured.
    pub fn from_config(config: &DocsConfig) -> Result<Self, DocbotError> {
        let mut builder = reqwest::Client::builder()
            .user_agent(concat!("docbot/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        Ok(Self::with_client(builder.build()?, &config.url_template))
    }

    pub fn with_client(client: reqwest::Client, url_template: &str) -> Self {
        Self {
            client,
            url_template: url_template.to_string(),
        }
    }

    pub fn docs_url(&self, module: &str) -> String {
        self.url_template.replace("{module}", module)
    }
}

#[async_trait]
impl DocsSource for HttpDocsSource {
    async fn fetch_page(&self, module: &str) -> Result<String, DocbotError> {
        let url = self.docs_url(module);
        debug!(url = %url, "Fetching docs page");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if status != StatusCode::OK {
            return Err(DocbotError::HttpStatus {
                url,
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        debug!(url = %url, bytes = body.len(), "Fetched docs page");
        Ok(body)
    }
}
