//! Error types for the API client.

use serde::Deserialize;

/// Errors that can occur when making API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// An HTTP request failed (network error, timeout, or unreadable response).
    #[error("Request failed")]
    RequestFailed,
    /// The API returned a non-success status with a body snippet.
    #[error("Request failed with status {status}")]
    HttpStatus { status: u16, body: String },
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

impl Error {
    /// Returns the human-readable `message` carried by a JSON error body, if any.
    pub fn server_message(&self) -> Option<String> {
        match self {
            Self::RequestFailed => None,
            Self::HttpStatus { body, .. } => serde_json::from_str::<ErrorBody>(body)
                .ok()
                .and_then(|b| b.message)
                .filter(|m| !m.trim().is_empty()),
        }
    }

    /// HTTP status of an application error.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::RequestFailed => None,
            Self::HttpStatus { status, .. } => Some(*status),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_message_from_json_body() {
        let err = Error::HttpStatus {
            status: 422,
            body: r#"{"message":"Shop not found"}"#.to_string(),
        };
        assert_eq!(err.server_message().as_deref(), Some("Shop not found"));
        assert_eq!(err.status(), Some(422));
    }

    #[test]
    fn server_message_missing_for_plain_body() {
        let err = Error::HttpStatus {
            status: 500,
            body: "Internal Server Error".to_string(),
        };
        assert_eq!(err.server_message(), None);
    }

    #[test]
    fn server_message_ignores_blank_message() {
        let err = Error::HttpStatus {
            status: 400,
            body: r#"{"message":"  "}"#.to_string(),
        };
        assert_eq!(err.server_message(), None);
    }

    #[test]
    fn transport_error_has_no_message() {
        assert_eq!(Error::RequestFailed.server_message(), None);
        assert_eq!(Error::RequestFailed.status(), None);
    }
}
