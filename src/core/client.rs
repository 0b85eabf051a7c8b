//! HTTP client for the scripture API

use reqwest::RequestBuilder;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

use crate::core::config::ApiConfig;
use crate::core::errors::{BibleError, Result};
use crate::core::models::{PassageOptions, TranslationsResponse};

/// Header carrying the API key
pub const API_KEY_HEADER: &str = "api-key";

/// Client for the translations and passages endpoints
#[derive(Debug, Clone)]
pub struct BibleClient {
    client: reqwest::Client,
    config: ApiConfig,
}

impl BibleClient {
    /// Create a new client
    pub fn new(config: ApiConfig) -> Result<Self> {
        config.validate().map_err(|e| BibleError::Config {
            message: e.to_string(),
        })?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()?;

        Ok(Self { client, config })
    }

    /// List translations for a language code
    ///
    /// Only the `data` envelope is checked here; entries are decoded one at
    /// a time with `Translation::from_entry`.
    pub async fn translations(&self, language: &str) -> Result<Vec<Value>> {
        let url = self.config.endpoint("/bibles");
        debug!("Fetching translations for language {}", language);

        let body = self
            .get_json(self.client.get(&url).query(&[("language", language)]))
            .await?;

        let response: TranslationsResponse =
            serde_json::from_value(body).map_err(BibleError::shape)?;

        debug!("Received {} translations", response.data.len());
        Ok(response.data)
    }

    /// Fetch a passage document
    ///
    /// `bible_id` and `passage` are interpolated into the path untouched.
    pub async fn passage(
        &self,
        bible_id: &str,
        passage: &str,
        options: &PassageOptions,
    ) -> Result<Value> {
        let url = self
            .config
            .endpoint(&format!("/bibles/{}/passages/{}", bible_id, passage));
        debug!("Fetching passage {} from {}", passage, bible_id);

        self.get_json(self.client.get(&url).query(&options.query_pairs()))
            .await
    }

    /// Send a GET request and decode the JSON body
    async fn get_json(&self, request: RequestBuilder) -> Result<Value> {
        let response = request
            .header(API_KEY_HEADER, &self.config.api_key)
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let status_code = status.as_u16();
            let message = response.text().await.unwrap_or_default();
            warn!("Request failed with status {}", status_code);

            return Err(BibleError::Api {
                status: status_code,
                message,
            });
        }

        Ok(response.json::<Value>().await?)
    }
}
