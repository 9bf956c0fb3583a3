use serde_json::Value;

/// Decoded body of a homework status response. Nothing about its shape is
/// trusted until it has been through `response::check_response`.
#[derive(Debug, Clone)]
pub struct ApiResponse(pub Value);

impl ApiResponse {
    /// Server time the response was produced at, used as the next `from_date`.
    pub fn current_date(&self) -> Option<i64> {
        self.0.get("current_date").and_then(Value::as_i64)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeworkRecord {
    pub name: String,
    pub status: String,
}
