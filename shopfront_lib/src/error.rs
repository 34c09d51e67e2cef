//! Error types for the library layer.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Message shown when a failure carries no server-provided text.
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong";

/// Errors produced by the library layer, wrapping upstream API errors
/// and adding serialization, configuration, and input validation failures.
#[derive(Debug)]
pub enum ShopfrontError {
    /// An error from the underlying API client.
    Api(shopfront_api::Error),
    /// JSON serialization or deserialization failed.
    Serialization(serde_json::Error),
    /// User-provided input failed validation.
    InvalidInput(String),
    /// Configuration or locale data could not be loaded.
    Config(String),
}

impl fmt::Display for ShopfrontError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Api(e) => write!(f, "API error: {}", e),
            Self::Serialization(e) => write!(f, "Serialization error: {}", e),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Self::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for ShopfrontError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Api(e) => Some(e),
            Self::Serialization(e) => Some(e),
            _ => None,
        }
    }
}

impl From<shopfront_api::Error> for ShopfrontError {
    fn from(e: shopfront_api::Error) -> Self {
        Self::Api(e)
    }
}

impl From<serde_json::Error> for ShopfrontError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e)
    }
}

/// Where a failure came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// No usable response: connectivity, timeout, or an unreadable body.
    Transport,
    /// The server answered with a non-success status.
    Application,
}

/// The single error shape handed to the presentation layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    pub kind: ErrorKind,
    #[serde(default)]
    pub status: Option<u16>,
    pub message: String,
}

impl ErrorInfo {
    pub fn transport() -> Self {
        Self {
            kind: ErrorKind::Transport,
            status: None,
            message: GENERIC_ERROR_MESSAGE.to_string(),
        }
    }
}

impl From<&ShopfrontError> for ErrorInfo {
    fn from(err: &ShopfrontError) -> Self {
        match err {
            ShopfrontError::Api(api_err) => match api_err.status() {
                Some(status) => Self {
                    kind: ErrorKind::Application,
                    status: Some(status),
                    message: api_err
                        .server_message()
                        .unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_string()),
                },
                None => Self::transport(),
            },
            _ => Self::transport(),
        }
    }
}
