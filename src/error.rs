use thiserror::Error;

use crate::api::FieldErrors;

#[derive(Error, Debug)]
pub enum HelpdeskError {
    #[error("invalid category '{0}'")]
    InvalidCategory(String),

    #[error("invalid priority '{0}'")]
    InvalidPriority(String),

    #[error("invalid status '{0}'")]
    InvalidStatus(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml_ng::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid URL '{0}': {1}")]
    InvalidUrl(String, url::ParseError),

    #[error("configuration error: {0}")]
    Config(String),

    // Service errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("validation failed: {0}")]
    Validation(FieldErrors),

    #[error("API error ({status}): {message}")]
    Api {
        status: reqwest::StatusCode,
        message: String,
    },

    #[error("{0}")]
    Other(String),
}

impl HelpdeskError {
    /// Field-keyed validation errors, if the service rejected the payload
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            HelpdeskError::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, HelpdeskError>;
