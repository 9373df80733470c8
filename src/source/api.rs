//! HTTP source backed by the public character API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::catalog::Character;
use crate::config::SourceConfig;
use crate::source::{payload, CharacterSource, FetchError};

/// Fetches the collection with a single GET.
#[derive(Debug, Clone)]
pub struct ApiSource {
    client: Client,
    url: String,
}

impl ApiSource {
    /// Build a source from config (timeout and user agent applied to the client).
    pub fn from_config(config: &SourceConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            client,
            url: config.url.clone(),
        })
    }
}

#[async_trait]
impl CharacterSource for ApiSource {
    async fn fetch_characters(&self) -> Result<Vec<Character>, FetchError> {
        tracing::debug!(url = %self.url, "Fetching characters");

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|source| FetchError::Transport {
                url: self.url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|source| FetchError::Transport {
            url: self.url.clone(),
            source,
        })?;

        payload::decode(&body)
    }

    fn describe(&self) -> String {
        format!("api:{}", self.url)
    }
}
