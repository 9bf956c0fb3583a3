use anyhow::{anyhow, bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::config::Config;

#[derive(Clone)]
pub struct TelegramNotifier {
    http: reqwest::Client,
    api_url: String,
    token: String,
    chat_id: String,
}

#[derive(Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
}

#[derive(Deserialize)]
struct TelegramResponse {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
}

impl TelegramNotifier {
    pub fn new(config: &Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .context("Failed to build Telegram HTTP client")?;
        Ok(Self {
            http,
            api_url: config.telegram_api_url.trim_end_matches('/').to_string(),
            token: config.telegram_token.clone(),
            chat_id: config.telegram_chat_id.clone(),
        })
    }

    /// Sends `text` to the configured chat as plain text.
    pub async fn send_message(&self, text: &str) -> Result<()> {
        let url = format!("{}/bot{}/sendMessage", self.api_url, self.token);
        let request = SendMessageRequest {
            chat_id: &self.chat_id,
            text,
        };

        // Keep the token out of the error chain: reqwest errors embed the URL.
        let resp = self
            .http
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|err| anyhow!("Telegram request failed: {}", err.without_url()))?;

        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|err| anyhow!("Telegram response read failed: {}", err.without_url()))?;

        if !status.is_success() {
            return Err(anyhow!("Telegram API error: {} - {}", status, body));
        }

        let parsed: TelegramResponse =
            serde_json::from_str(&body).context("Telegram response parse failed")?;
        if !parsed.ok {
            bail!(
                "Telegram rejected the message: {}",
                parsed.description.unwrap_or_default()
            );
        }
        Ok(())
    }

    /// Delivers `text`, logging instead of failing. Used from error reporting
    /// paths, so a delivery failure must not produce another report.
    pub async fn notify(&self, text: &str) {
        tracing::info!(text, "Sending Telegram notification");
        match self.send_message(text).await {
            Ok(()) => tracing::debug!(text, "Telegram notification sent"),
            Err(err) => {
                tracing::error!(error = %err, text, "Failed to send Telegram notification")
            }
        }
    }
}
