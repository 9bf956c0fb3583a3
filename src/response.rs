use std::str::FromStr;

use serde_json::Value;

use crate::error::{BotError, Result};
use crate::models::ApiResponse;

/// What to do when the API answers with an empty `homeworks` list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EmptyPolicy {
    /// Nothing changed since `from_date`; report nothing.
    #[default]
    Lenient,
    /// Treat the empty list as a failure and report it.
    Strict,
}

impl FromStr for EmptyPolicy {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "lenient" => Ok(Self::Lenient),
            "strict" => Ok(Self::Strict),
            other => Err(format!("unknown empty homeworks policy: {other}")),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Checks the response shape and returns the `homeworks` list untouched.
pub fn check_response(response: &ApiResponse) -> Result<&[Value]> {
    let Value::Object(map) = &response.0 else {
        return Err(BotError::MalformedResponse(format!(
            "ожидался словарь, получен {}",
            json_kind(&response.0)
        )));
    };

    let homeworks = map.get("homeworks").ok_or(BotError::MissingKey("homeworks"))?;

    match homeworks {
        Value::Array(items) => Ok(items),
        other => Err(BotError::MalformedResponse(format!(
            "'homeworks' должен быть списком, получен {}",
            json_kind(other)
        ))),
    }
}

/// Picks the most recent submission, which the API lists first.
pub fn latest(homeworks: &[Value], policy: EmptyPolicy) -> Result<Option<&Value>> {
    match (homeworks.first(), policy) {
        (Some(homework), _) => Ok(Some(homework)),
        (None, EmptyPolicy::Lenient) => Ok(None),
        (None, EmptyPolicy::Strict) => Err(BotError::EmptyResult),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn returns_homeworks_unchanged() {
        let response = ApiResponse(json!({
            "homeworks": [{"homework_name": "hw1", "status": "approved", "extra": 1}],
            "current_date": 10
        }));
        let homeworks = check_response(&response).unwrap();
        assert_eq!(homeworks.len(), 1);
        assert_eq!(homeworks[0]["extra"], json!(1));
    }

    #[test]
    fn non_mapping_is_malformed() {
        for body in [json!([]), json!("homeworks"), json!(42), json!(null)] {
            let err = check_response(&ApiResponse(body)).unwrap_err();
            assert!(matches!(err, BotError::MalformedResponse(_)), "{err:?}");
        }
    }

    #[test]
    fn missing_homeworks_key() {
        let err = check_response(&ApiResponse(json!({"current_date": 1}))).unwrap_err();
        assert!(matches!(err, BotError::MissingKey("homeworks")));
    }

    #[test]
    fn homeworks_must_be_a_list() {
        let err = check_response(&ApiResponse(json!({"homeworks": {"a": 1}}))).unwrap_err();
        assert!(matches!(err, BotError::MalformedResponse(_)));
    }

    #[test]
    fn empty_list_depends_on_policy() {
        assert!(latest(&[], EmptyPolicy::Lenient).unwrap().is_none());
        assert!(matches!(
            latest(&[], EmptyPolicy::Strict),
            Err(BotError::EmptyResult)
        ));
    }

    #[test]
    fn latest_takes_head() {
        let items = vec![json!({"homework_name": "new"}), json!({"homework_name": "old"})];
        let head = latest(&items, EmptyPolicy::Strict).unwrap().unwrap();
        assert_eq!(head["homework_name"], "new");
    }

    #[test]
    fn policy_parses_case_insensitively() {
        assert_eq!("Strict".parse::<EmptyPolicy>(), Ok(EmptyPolicy::Strict));
        assert_eq!(" lenient ".parse::<EmptyPolicy>(), Ok(EmptyPolicy::Lenient));
        assert!("sometimes".parse::<EmptyPolicy>().is_err());
    }
}
