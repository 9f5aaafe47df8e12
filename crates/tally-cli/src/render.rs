//! Presentation of results and errors

use tally::CalcError;

/// Display a computed value. Negative zero prints as `0`.
pub fn value(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}

/// `error[Kind]: message`, plus the input with a caret line under the
/// offending span when there is one.
pub fn error(input: &str, err: &CalcError) -> String {
    let mut out = format!("error[{}]: {}", err.kind(), err);

    if let Some(span) = err.span() {
        let pad = input[..span.start.min(input.len())].chars().count();
        let width = input
            .get(span.start..span.end)
            .map(|s| s.chars().count())
            .unwrap_or(1)
            .max(1);
        out.push_str(&format!(
            "\n  {}\n  {}{}",
            input,
            " ".repeat(pad),
            "^".repeat(width)
        ));
    }

    out
}

/// Wrap raw input as a `/api/calculate` JSON body.
pub fn request_body(input: &str) -> String {
    serde_json::json!({ "expression": input }).to_string()
}
