use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde_json::Value;

use crate::error::{BotError, Result};
use crate::models::HomeworkRecord;

static HOMEWORK_VERDICTS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("approved", "Работа проверена: ревьюеру всё понравилось. Ура!"),
        ("reviewing", "Работа взята на проверку ревьюером."),
        ("rejected", "Работа проверена: у ревьюера есть замечания."),
    ])
});

fn string_field(homework: &Value, key: &'static str) -> Result<String> {
    match homework.get(key) {
        None | Some(Value::Null) => Err(BotError::MissingKey(key)),
        Some(Value::String(value)) => Ok(value.clone()),
        Some(other) => Err(BotError::MalformedResponse(format!(
            "поле '{key}' должно быть строкой: {other}"
        ))),
    }
}

pub fn parse_record(homework: &Value) -> Result<HomeworkRecord> {
    Ok(HomeworkRecord {
        name: string_field(homework, "homework_name")?,
        status: string_field(homework, "status")?,
    })
}

/// Builds the notification text for a record. The text doubles as the dedup key.
pub fn interpret(record: &HomeworkRecord) -> Result<String> {
    let verdict = HOMEWORK_VERDICTS
        .get(record.status.as_str())
        .ok_or_else(|| BotError::UnrecognizedStatus(record.status.clone()))?;
    Ok(format!(
        "Изменился статус проверки работы \"{}\". {}",
        record.name, verdict
    ))
}

pub fn parse_status(homework: &Value) -> Result<String> {
    interpret(&parse_record(homework)?)
}
