//! Mapping of non-success responses into `HelpdeskError`.
//!
//! The service answers rejected payloads with HTTP 400 and a JSON object keyed
//! by field name, e.g. `{"title": ["Ensure this field has no more than 200
//! characters."]}`. Those become `HelpdeskError::Validation`; every other
//! failure status becomes `HelpdeskError::Api`.

use std::fmt;

use reqwest::StatusCode;
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::HelpdeskError;

/// Messages reported against one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub messages: Vec<String>,
}

/// Field-keyed validation errors, in the order the service reported them
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(pub Vec<FieldError>);

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.messages.as_slice())
    }

    /// Parse a response body, returning `None` unless it is a non-empty JSON object
    pub fn parse(body: &str) -> Option<Self> {
        serde_json::from_str::<FieldErrors>(body)
            .ok()
            .filter(|errors| !errors.is_empty())
    }
}

/// Renders as `field: msg1, msg2; field2: msg`
impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self
            .0
            .iter()
            .map(|e| format!("{}: {}", e.field, e.messages.join(", ")))
            .collect();
        write!(f, "{}", rendered.join("; "))
    }
}

fn value_to_messages(value: Value) -> Vec<String> {
    match value {
        Value::String(s) => vec![s],
        Value::Array(items) => items
            .into_iter()
            .map(|item| match item {
                Value::String(s) => s,
                other => other.to_string(),
            })
            .collect(),
        other => vec![other.to_string()],
    }
}

impl<'de> Deserialize<'de> for FieldErrors {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct FieldErrorsVisitor;

        impl<'de> Visitor<'de> for FieldErrorsVisitor {
            type Value = FieldErrors;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object of field names to messages")
            }

            fn visit_map<M: MapAccess<'de>>(self, mut access: M) -> Result<FieldErrors, M::Error> {
                let mut errors = Vec::new();
                while let Some((field, value)) = access.next_entry::<String, Value>()? {
                    errors.push(FieldError {
                        field,
                        messages: value_to_messages(value),
                    });
                }
                Ok(FieldErrors(errors))
            }
        }

        deserializer.deserialize_map(FieldErrorsVisitor)
    }
}

/// Pick a human-readable message out of an error body
fn error_message(status: StatusCode, body: &str) -> String {
    if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(body) {
        for key in ["detail", "error", "message"] {
            if let Some(Value::String(msg)) = map.get(key) {
                return msg.clone();
            }
        }
    }

    let trimmed = body.trim();
    if trimmed.is_empty() || trimmed.starts_with('<') {
        status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_string()
    } else {
        trimmed.to_string()
    }
}

/// Classify a failed response
pub fn error_from_response(status: StatusCode, body: &str) -> HelpdeskError {
    if status == StatusCode::BAD_REQUEST
        && let Some(errors) = FieldErrors::parse(body)
    {
        return HelpdeskError::Validation(errors);
    }

    HelpdeskError::Api {
        status,
        message: error_message(status, body),
    }
}
