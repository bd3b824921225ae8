use std::time::Duration;

use reqwest::Client;

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::hive::models::{HiveId, RawRecord};

pub struct HiveClient {
    http_client: Client,
    hive1_url: String,
    hive2_url: String,
}

impl HiveClient {
    #[must_use]
    pub fn new(config: &Config) -> Self {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            http_client,
            hive1_url: config.hive1_endpoint_url.clone(),
            hive2_url: config.hive2_endpoint_url.clone(),
        }
    }

    fn endpoint(&self, hive: HiveId) -> &str {
        match hive {
            HiveId::Hive1 => &self.hive1_url,
            HiveId::Hive2 => &self.hive2_url,
        }
    }

    /// Fetch the full raw record series for a hive.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Network` if the transport fails or the response has a
    /// non-success status, and `AppError::Decode` if the body is not a JSON
    /// array of records (the endpoint replies `{"error": ...}` when its backing
    /// sheet has no data; that counts as a decode failure, not an empty series).
    pub async fn fetch_records(&self, hive: HiveId) -> AppResult<Vec<RawRecord>> {
        let url = self.endpoint(hive);

        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|e| AppError::Network(format!("Request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(AppError::Network(format!(
                "HTTP {}: {}",
                response.status(),
                response.text().await.unwrap_or_default()
            )));
        }

        let text = response
            .text()
            .await
            .map_err(|e| AppError::Network(format!("Failed to read response body: {e}")))?;

        let body: serde_json::Value = serde_json::from_str(&text).map_err(|e| {
            tracing::error!(
                error = %e,
                hive = %hive,
                body_preview = %text.chars().take(500).collect::<String>(),
                "Failed to parse hive response"
            );
            AppError::Decode(format!("Invalid JSON: {e}"))
        })?;

        if let Some(err) = body.as_object().and_then(|o| o.get("error")) {
            return Err(AppError::Decode(format!("Endpoint reported an error: {err}")));
        }

        serde_json::from_value(body)
            .map_err(|e| AppError::Decode(format!("Expected a JSON array of records: {e}")))
    }
}
