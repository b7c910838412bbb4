//! Typed error for non-success TMDB responses.

use thiserror::Error;

/// HTTP status failure raised by the TMDB API.
///
/// Carried inside `anyhow::Error` so callers can `downcast_ref` to
/// recover the numeric status code. Never retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("TMDB API error (HTTP {status}): {message}")]
pub struct StatusError {
    /// HTTP status code of the failed response.
    pub status: u16,
    /// TMDB `status_message` when the body parsed, raw body otherwise.
    pub message: String,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_display_includes_status_and_message() {
        // Arrange
        let err = StatusError {
            status: 401,
            message: String::from("Invalid API key"),
        };

        // Act
        let rendered = err.to_string();

        // Assert
        assert!(rendered.contains("401"));
        assert!(rendered.contains("Invalid API key"));
    }

    #[test]
    fn test_downcast_from_anyhow() {
        // Arrange
        let err: anyhow::Error = StatusError {
            status: 404,
            message: String::from("not found"),
        }
        .into();

        // Act
        let status = err.downcast_ref::<StatusError>().map(|e| e.status);

        // Assert
        assert_eq!(status, Some(404));
    }
}
