use std::time::Duration;

use anyhow::Context;
use reqwest::header::AUTHORIZATION;
use reqwest::StatusCode;
use serde_json::Value;

use crate::config::Config;
use crate::error::{BotError, Result};
use crate::models::ApiResponse;

/// Client for the homework status endpoint. One request per call, no retries.
#[derive(Clone)]
pub struct PracticumClient {
    http: reqwest::Client,
    endpoint: String,
    token: String,
    timeout: Duration,
}

impl PracticumClient {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .context("Failed to build Practicum HTTP client")?;
        Ok(Self {
            http,
            endpoint: config.endpoint.clone(),
            token: config.practicum_token.clone(),
            timeout: config.request_timeout,
        })
    }

    pub async fn homework_statuses(&self, from_date: i64) -> Result<ApiResponse> {
        tracing::debug!(endpoint = %self.endpoint, from_date, "Requesting homework statuses");

        let resp = self
            .http
            .get(&self.endpoint)
            .header(AUTHORIZATION, format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .send()
            .await
            .map_err(|err| self.request_error(err))?;

        let status = resp.status();
        if status != StatusCode::OK {
            return Err(BotError::UnexpectedStatus {
                endpoint: self.endpoint.clone(),
                code: status.as_u16(),
            });
        }

        let body = resp.text().await.map_err(|err| self.request_error(err))?;
        let value: Value = serde_json::from_str(&body)?;
        Ok(ApiResponse(value))
    }

    fn request_error(&self, err: reqwest::Error) -> BotError {
        if err.is_timeout() {
            BotError::ApiTimeout {
                endpoint: self.endpoint.clone(),
                timeout_secs: self.timeout.as_secs(),
            }
        } else {
            BotError::ApiTransport(err)
        }
    }
}
