//! Error types for the API client.

const SERVICE_ERROR: &str = "SERVICE_ERROR";

/// Errors that can occur when calling the tour API.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Required configuration is missing or malformed (service key, base URL).
    #[error("Configuration error: {0}")]
    Configuration(String),
    /// A required identifier or keyword was missing or blank after trimming.
    #[error("Invalid argument: {0} must not be empty")]
    InvalidArgument(&'static str),
    /// The request never produced an HTTP response (connect, DNS, timeout).
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
    /// The API answered with a non-2xx status and a body snippet.
    #[error("Request failed with status {status}")]
    HttpStatus { status: u16, body: String },
    /// The envelope carried a result code other than `0000`.
    #[error("Upstream error {code}: {message}")]
    Upstream { code: String, message: String },
    /// The body was not a recognizable envelope.
    #[error("Failed to decode response: {0}")]
    Decode(String),
    /// A single-entity lookup returned zero items.
    #[error("Not found: {0}")]
    NotFound(String),
    /// The retry loop finished without capturing an error.
    #[error("Request failed after retries")]
    RetriesExhausted,
}

impl Error {
    /// Whether the retry loop should make another attempt after this error.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Error::Transport(_)
                | Error::HttpStatus { .. }
                | Error::Upstream { .. }
                | Error::Decode(_)
        )
    }

    /// True for the upstream's transient `SERVICE_ERROR` application failure.
    pub fn is_service_error(&self) -> bool {
        match self {
            Error::Upstream { code, message } => {
                code.trim() == SERVICE_ERROR || message.trim() == SERVICE_ERROR
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn retryable_classification() {
        assert!(Error::HttpStatus {
            status: 500,
            body: String::new()
        }
        .is_retryable());
        assert!(Error::Upstream {
            code: "10".to_string(),
            message: "INVALID_REQUEST_PARAMETER_ERROR".to_string()
        }
        .is_retryable());
        assert!(Error::Decode("eof".to_string()).is_retryable());

        assert!(!Error::InvalidArgument("contentId").is_retryable());
        assert!(!Error::Configuration("missing".to_string()).is_retryable());
        assert!(!Error::NotFound("detail".to_string()).is_retryable());
    }

    #[tokio::test]
    async fn transport_errors_are_retryable() {
        let source = reqwest::Client::new()
            .get("http://127.0.0.1:1/")
            .send()
            .await
            .unwrap_err();
        let err = Error::from(source);
        assert!(matches!(err, Error::Transport(_)));
        assert!(err.is_retryable());
    }

    #[test]
    fn service_error_matches_code_or_message() {
        let by_message = Error::Upstream {
            code: "99".to_string(),
            message: "SERVICE_ERROR".to_string(),
        };
        assert!(by_message.is_service_error());

        let by_code = Error::Upstream {
            code: "SERVICE_ERROR".to_string(),
            message: "unknown".to_string(),
        };
        assert!(by_code.is_service_error());

        let other = Error::Upstream {
            code: "22".to_string(),
            message: "LIMITED_NUMBER_OF_SERVICE_REQUESTS_EXCEEDS_ERROR".to_string(),
        };
        assert!(!other.is_service_error());

        let unknown_service = Error::Upstream {
            code: "12".to_string(),
            message: "NO_OPENAPI_SERVICE_ERROR".to_string(),
        };
        assert!(!unknown_service.is_service_error());
    }

    #[test]
    fn display_messages() {
        assert_eq!(
            Error::InvalidArgument("keyword").to_string(),
            "Invalid argument: keyword must not be empty"
        );
        assert_eq!(
            Error::HttpStatus {
                status: 503,
                body: String::new()
            }
            .to_string(),
            "Request failed with status 503"
        );
    }
}
