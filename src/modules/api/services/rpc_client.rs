use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::debug;

use crate::config::BackendConfig;
use crate::core::{AppError, Result};
use crate::modules::dashboard::models::{Delivery, Merchant, Service};

/// Client for the EcoDeli backend RPC protocol.
///
/// Procedures are invoked by name with a JSON input wrapped in a `json`
/// field; responses carry either `result.data` or an `error` envelope.
/// Any non-2xx status, error envelope or malformed payload surfaces as a
/// fetch failure, which the dashboard service turns into the mock-data
/// fallback.
pub struct RpcClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl RpcClient {
    pub fn new(config: &BackendConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    /// Invoke a named backend procedure and return its `result.data` payload.
    pub async fn call(&self, procedure: &str, input: Value) -> Result<Value> {
        #[derive(Deserialize)]
        struct Envelope {
            result: Option<ResultEnvelope>,
            error: Option<ErrorEnvelope>,
        }

        #[derive(Deserialize)]
        struct ResultEnvelope {
            data: Value,
        }

        #[derive(Deserialize)]
        struct ErrorEnvelope {
            message: String,
            #[serde(default)]
            code: i64,
        }

        let url = format!("{}/{}", self.base_url, procedure);
        debug!(procedure, "Calling backend procedure");

        let response = self
            .client
            .post(&url)
            .header("x-api-key", &self.api_key)
            .json(&json!({ "json": input }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::rpc(
                format!("{} returned {}: {}", procedure, status, body),
                status.as_u16() as i64,
            ));
        }

        let envelope: Envelope = response.json().await?;
        if let Some(error) = envelope.error {
            return Err(AppError::rpc(error.message, error.code));
        }

        envelope.result.map(|r| r.data).ok_or_else(|| {
            AppError::rpc(
                format!("{}: envelope carried neither result nor error", procedure),
                0,
            )
        })
    }

    pub async fn fetch_merchants(&self) -> Result<Vec<Merchant>> {
        let data = self.call("merchants.list", json!({})).await?;
        Ok(serde_json::from_value(data)?)
    }

    pub async fn fetch_deliveries(&self) -> Result<Vec<Delivery>> {
        let data = self.call("deliveries.list", json!({})).await?;
        Ok(serde_json::from_value(data)?)
    }

    pub async fn fetch_services(&self) -> Result<Vec<Service>> {
        let data = self.call("services.list", json!({})).await?;
        Ok(serde_json::from_value(data)?)
    }
}
