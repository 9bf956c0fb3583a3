//! Failures a single polling cycle can run into.
//!
//! The display text of every variant ends up in the operator's chat, so it is
//! written for a human reader rather than for logs.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BotError {
    #[error("Ошибка в запросе к API: {0}")]
    ApiTransport(#[source] reqwest::Error),

    #[error("API {endpoint} не ответил за {timeout_secs} с")]
    ApiTimeout { endpoint: String, timeout_secs: u64 },

    #[error("API {endpoint} недоступен, код ошибки {code}")]
    UnexpectedStatus { endpoint: String, code: u16 },

    #[error("Ошибка json: {0}")]
    PayloadDecode(#[from] serde_json::Error),

    #[error("Ответ пришел в некорректном формате: {0}")]
    MalformedResponse(String),

    #[error("В ответе отсутствует ключ '{0}'")]
    MissingKey(&'static str),

    #[error("Список домашних работ пуст")]
    EmptyResult,

    #[error("Неизвестный статус работы: {0}")]
    UnrecognizedStatus(String),
}

pub type Result<T, E = BotError> = std::result::Result<T, E>;
