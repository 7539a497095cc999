//! View Errors
//!
//! Every failure a user action can run into. All of them are caught at the
//! controller boundary and shown in the error region.

use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewError {
    /// The host bridge never became callable during startup
    #[error("{0}")]
    BridgeUnavailable(String),

    /// Client-side precondition failed; no call was issued
    #[error("{0}")]
    Validation(String),

    /// The host rejected or failed the call
    #[error("{0}")]
    RemoteCall(String),

    /// Arguments or response did not match the command contract
    #[error("`{command}`: {message}")]
    Codec { command: String, message: String },
}

impl ViewError {
    pub fn codec(command: &str, err: impl std::fmt::Display) -> Self {
        ViewError::Codec {
            command: command.to_string(),
            message: err.to_string(),
        }
    }
}

/// Text of a host rejection: the string itself, else its `message`
/// field, else its JSON form.
pub fn remote_message(value: &Value) -> String {
    match value {
        Value::String(message) => message.clone(),
        Value::Object(fields) => match fields.get("message") {
            Some(Value::String(message)) => message.clone(),
            _ => value.to_string(),
        },
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_remote_message_plain_string() {
        assert_eq!(remote_message(&json!("Todo not found")), "Todo not found");
    }

    #[test]
    fn test_remote_message_field() {
        let value = json!({"name": "Error", "message": "Database connection is closed."});
        assert_eq!(remote_message(&value), "Database connection is closed.");
    }

    #[test]
    fn test_remote_message_string_conversion() {
        assert_eq!(remote_message(&json!({"code": 23505})), r#"{"code":23505}"#);
        assert_eq!(remote_message(&json!({"message": 42})), r#"{"message":42}"#);
        assert_eq!(remote_message(&json!(404)), "404");
    }

    #[test]
    fn test_messages_are_shown_verbatim() {
        assert_eq!(ViewError::RemoteCall("Todo not found".into()).to_string(), "Todo not found");
        assert_eq!(ViewError::Validation("Title cannot be empty".into()).to_string(), "Title cannot be empty");
        assert_eq!(
            ViewError::codec("list_todos", "invalid type").to_string(),
            "`list_todos`: invalid type"
        );
    }
}
