//! Request and response shaping for the HTTP boundary
//!
//! Transport-agnostic: a server framework hands the raw JSON body to
//! [`handle_calculate`] and writes back the returned [`ApiResponse`].
//! `POST /api/calculate` and `GET /api/health` map onto the two handlers.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value as Json;

use crate::compute::compute;
use crate::error::{CalcError, ErrorKind};

/// HTTP 200
pub const STATUS_OK: u16 = 200;

/// HTTP 400
pub const STATUS_BAD_REQUEST: u16 = 400;

/// Body of `POST /api/calculate`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CalculateRequest {
    /// Expression to evaluate; `None` when missing, `null` or not a string
    #[serde(default, deserialize_with = "string_or_none")]
    pub expression: Option<String>,
}

fn string_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Json::deserialize(deserializer)? {
        Json::String(s) => Ok(Some(s)),
        _ => Ok(None),
    }
}

/// Success body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculateResponse {
    /// Computed value
    pub result: f64,
}

/// Failure body. Never carries a `result` field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorBody {
    /// Human-readable message
    pub error: String,

    /// Taxonomy entry, absent for request-shape failures
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<ErrorKind>,
}

/// Body of `GET /api/health`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HealthResponse {
    /// Always `"ok"`
    pub status: &'static str,
    /// Service description
    pub message: &'static str,
}

/// Status code plus JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    /// HTTP status code
    pub status: u16,
    /// JSON body
    pub body: Json,
}

impl ApiResponse {
    fn new(status: u16, body: impl Serialize) -> Self {
        // Serializing these plain structs into a `Value` cannot fail.
        let body = serde_json::to_value(body).unwrap_or(Json::Null);
        Self { status, body }
    }

    fn bad_request(message: &str) -> Self {
        Self::new(
            STATUS_BAD_REQUEST,
            ErrorBody {
                error: message.to_string(),
                kind: None,
            },
        )
    }

    /// Whether the status is 2xx.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Compact JSON rendering of the body.
    pub fn to_json_string(&self) -> String {
        self.body.to_string()
    }
}

impl From<CalcError> for ApiResponse {
    fn from(err: CalcError) -> Self {
        Self::new(
            STATUS_BAD_REQUEST,
            ErrorBody {
                error: err.to_string(),
                kind: Some(err.kind()),
            },
        )
    }
}

/// Handle `POST /api/calculate` given the raw request body.
pub fn handle_calculate(body: &str) -> ApiResponse {
    let request: CalculateRequest = match serde_json::from_str(body) {
        Ok(request) => request,
        Err(err) => {
            log::debug!("rejecting request body: {}", err);
            return ApiResponse::bad_request("Invalid request body");
        }
    };

    let expression = match request.expression {
        Some(s) if !s.is_empty() => s,
        _ => return ApiResponse::bad_request("Expression is required"),
    };

    match compute(&expression) {
        Ok(result) => ApiResponse::new(STATUS_OK, CalculateResponse { result }),
        Err(err) => err.into(),
    }
}

/// Handle `GET /api/health`.
pub fn handle_health() -> ApiResponse {
    ApiResponse::new(
        STATUS_OK,
        HealthResponse {
            status: "ok",
            message: "Calculator API is running",
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_body() {
        let resp = handle_calculate(r#"{"expression": "(3 + 4) * 2"}"#);
        assert_eq!(resp.status, STATUS_OK);
        assert_eq!(resp.body, json!({ "result": 14.0 }));
    }

    #[test]
    fn test_request_expression_only_accepts_strings() {
        let parse = |body: &str| -> CalculateRequest { serde_json::from_str(body).unwrap() };
        assert_eq!(parse(r#"{"expression": "1+1"}"#).expression.as_deref(), Some("1+1"));
        assert_eq!(parse(r#"{"expression": 7}"#).expression, None);
        assert_eq!(parse(r#"{"expression": ["1"]}"#).expression, None);
        assert_eq!(parse(r#"{"expression": null}"#).expression, None);
        assert_eq!(parse(r#"{}"#).expression, None);
    }

    #[test]
    fn test_error_body_has_no_result() {
        let resp = handle_calculate(r#"{"expression": "8 / 0"}"#);
        assert_eq!(resp.status, STATUS_BAD_REQUEST);
        assert_eq!(resp.body["kind"], json!("DivisionByZero"));
        assert!(resp.body.get("result").is_none());
    }
}
