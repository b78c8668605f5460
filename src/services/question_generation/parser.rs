use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("could not extract a JSON array from model response")]
pub(crate) struct ParseError;

/// Reads the model's reply as a JSON array, falling back to the span between
/// the first `[` and the last `]` when the reply is wrapped in prose.
pub(crate) fn parse_question_array(raw: &str) -> Result<Vec<Value>, ParseError> {
    if let Ok(Value::Array(items)) = serde_json::from_str::<Value>(raw) {
        return Ok(items);
    }

    let (Some(start), Some(end)) = (raw.find('['), raw.rfind(']')) else {
        return Err(ParseError);
    };
    if end <= start {
        return Err(ParseError);
    }

    match serde_json::from_str::<Value>(&raw[start..=end]) {
        Ok(Value::Array(items)) => Ok(items),
        _ => Err(ParseError),
    }
}
