use std::env;
use std::time::Duration;

use anyhow::{bail, Result};

use crate::response::EmptyPolicy;

pub const DEFAULT_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";
pub const DEFAULT_TELEGRAM_API_URL: &str = "https://api.telegram.org";
const DEFAULT_RETRY_PERIOD_SECS: u64 = 600;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

// (primary name, legacy name)
const PRACTICUM_TOKEN: (&str, &str) = ("PRACTICUM_TOKEN", "pract_token");
const TELEGRAM_TOKEN: (&str, &str) = ("TELEGRAM_TOKEN", "tg_token");
const TELEGRAM_CHAT_ID: (&str, &str) = ("TELEGRAM_CHAT_ID", "chat_id");

#[derive(Debug, Clone)]
pub struct Config {
    pub practicum_token: String,
    pub telegram_token: String,
    pub telegram_chat_id: String,
    pub endpoint: String,
    pub telegram_api_url: String,
    pub retry_period: Duration,
    pub request_timeout: Duration,
    pub empty_policy: EmptyPolicy,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Reads configuration through `lookup`. Fails when any secret is missing,
    /// naming all of them at once.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let secret = |(name, legacy): (&str, &str)| {
            lookup(name)
                .or_else(|| lookup(legacy))
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let practicum_token = secret(PRACTICUM_TOKEN);
        let telegram_token = secret(TELEGRAM_TOKEN);
        let telegram_chat_id = secret(TELEGRAM_CHAT_ID);

        let (Some(practicum_token), Some(telegram_token), Some(telegram_chat_id)) =
            (practicum_token.clone(), telegram_token.clone(), telegram_chat_id.clone())
        else {
            let missing: Vec<_> = [
                (PRACTICUM_TOKEN.0, practicum_token.is_none()),
                (TELEGRAM_TOKEN.0, telegram_token.is_none()),
                (TELEGRAM_CHAT_ID.0, telegram_chat_id.is_none()),
            ]
            .into_iter()
            .filter(|(_, missing)| *missing)
            .map(|(name, _)| name)
            .collect();
            bail!(
                "Missing required environment variables: {}",
                missing.join(", ")
            );
        };

        let secs = |key: &str, default: u64| {
            lookup(key)
                .and_then(|val| val.trim().parse::<u64>().ok())
                .filter(|secs| *secs > 0)
                .unwrap_or(default)
        };

        Ok(Self {
            practicum_token,
            telegram_token,
            telegram_chat_id,
            endpoint: lookup("PRACTICUM_ENDPOINT").unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            telegram_api_url: lookup("TELEGRAM_API_URL")
                .unwrap_or_else(|| DEFAULT_TELEGRAM_API_URL.to_string()),
            retry_period: Duration::from_secs(secs("RETRY_PERIOD_SECS", DEFAULT_RETRY_PERIOD_SECS)),
            request_timeout: Duration::from_secs(secs(
                "REQUEST_TIMEOUT_SECS",
                DEFAULT_REQUEST_TIMEOUT_SECS,
            )),
            empty_policy: lookup("EMPTY_HOMEWORKS")
                .and_then(|val| val.parse().ok())
                .unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(pairs: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_with_all_secrets() {
        let config = load(&[
            ("PRACTICUM_TOKEN", "p"),
            ("TELEGRAM_TOKEN", "t"),
            ("TELEGRAM_CHAT_ID", "42"),
        ])
        .unwrap();
        assert_eq!(config.practicum_token, "p");
        assert_eq!(config.telegram_chat_id, "42");
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.retry_period, Duration::from_secs(600));
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(config.empty_policy, EmptyPolicy::Lenient);
    }

    #[test]
    fn legacy_names_are_accepted() {
        let config = load(&[("pract_token", "p"), ("tg_token", "t"), ("chat_id", "42")]).unwrap();
        assert_eq!(config.telegram_token, "t");
    }

    #[test]
    fn any_missing_secret_is_fatal() {
        let err = load(&[("PRACTICUM_TOKEN", "p")]).unwrap_err().to_string();
        assert!(err.contains("TELEGRAM_TOKEN"));
        assert!(err.contains("TELEGRAM_CHAT_ID"));
        assert!(!err.contains("PRACTICUM_TOKEN"));

        let err = load(&[]).unwrap_err().to_string();
        assert!(err.contains("PRACTICUM_TOKEN"));
    }

    #[test]
    fn blank_secret_counts_as_missing() {
        let err = load(&[
            ("PRACTICUM_TOKEN", "  "),
            ("TELEGRAM_TOKEN", "t"),
            ("TELEGRAM_CHAT_ID", "42"),
        ])
        .unwrap_err();
        assert!(err.to_string().contains("PRACTICUM_TOKEN"));
    }

    #[test]
    fn overrides_and_bad_numbers() {
        let config = load(&[
            ("PRACTICUM_TOKEN", "p"),
            ("TELEGRAM_TOKEN", "t"),
            ("TELEGRAM_CHAT_ID", "42"),
            ("RETRY_PERIOD_SECS", "5"),
            ("REQUEST_TIMEOUT_SECS", "soon"),
            ("EMPTY_HOMEWORKS", "strict"),
            ("PRACTICUM_ENDPOINT", "http://localhost/api/"),
        ])
        .unwrap();
        assert_eq!(config.retry_period, Duration::from_secs(5));
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(config.empty_policy, EmptyPolicy::Strict);
        assert_eq!(config.endpoint, "http://localhost/api/");
    }

    #[test]
    fn zero_periods_fall_back_to_defaults() {
        let config = load(&[
            ("PRACTICUM_TOKEN", "p"),
            ("TELEGRAM_TOKEN", "t"),
            ("TELEGRAM_CHAT_ID", "42"),
            ("RETRY_PERIOD_SECS", "0"),
            ("REQUEST_TIMEOUT_SECS", "0"),
        ])
        .unwrap();
        assert_eq!(config.retry_period, Duration::from_secs(600));
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }
}
