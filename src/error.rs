use std::fmt;

use serde_json::Value;
use thiserror::Error;

/// Body of a 4xx/5xx response, kept verbatim for the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorBody {
    Json(Value),
    Text(String),
}

impl ErrorBody {
    pub fn from_text(text: String) -> Self {
        match serde_json::from_str::<Value>(&text) {
            Ok(json) => ErrorBody::Json(json),
            Err(_) => ErrorBody::Text(text),
        }
    }

    pub fn into_value(self) -> Value {
        match self {
            ErrorBody::Json(json) => json,
            ErrorBody::Text(text) => Value::String(text),
        }
    }
}

impl fmt::Display for ErrorBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorBody::Json(json) => write!(f, "{}", json),
            ErrorBody::Text(text) => write!(f, "{}", text),
        }
    }
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: ErrorBody },
    #[error("request to {url} timed out")]
    Timeout { url: String },
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
    #[error("invalid header: {0}")]
    InvalidHeader(String),
    #[error("malformed response body (HTTP {status}): {source}")]
    MalformedBody {
        status: u16,
        #[source]
        source: serde_json::Error,
    },
}
