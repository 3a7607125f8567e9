use thiserror::Error;

use crate::models::ResourceKind;

/// Failure of a single call against one of the Games REST APIs.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP {code}: {message}")]
    Status { code: u16, message: String },
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("invalid endpoint url: {0}")]
    Url(#[from] url::ParseError),
    #[error("could not decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ApiError::Status { code, .. } => Some(*code),
            ApiError::Transport(err) => err.status().map(|status| status.as_u16()),
            _ => None,
        }
    }
}

/// Aggregate failure of a batch; individual results are not surfaced.
#[derive(Debug, Error)]
#[error("{failed} of {total} batched request(s) failed: {message}")]
pub struct BatchError {
    pub failed: usize,
    pub total: usize,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
#[strum(serialize_all = "lowercase")]
pub enum MutationAction {
    Insert,
    Delete,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("could not list {kind} configurations: {source}")]
    RemoteList {
        kind: ResourceKind,
        #[source]
        source: ApiError,
    },
    #[error("{kind} {action} batch failed: {source}")]
    RemoteMutation {
        kind: ResourceKind,
        action: MutationAction,
        #[source]
        source: BatchError,
    },
}

impl ConfigError {
    pub fn missing_application_id() -> Self {
        ConfigError::Validation(String::from("Please enter your App ID"))
    }
}

#[derive(Debug, Error)]
pub enum AdminError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("could not {action}: {source}")]
    Api {
        action: &'static str,
        #[source]
        source: ApiError,
    },
}
