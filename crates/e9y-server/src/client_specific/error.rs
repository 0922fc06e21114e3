//! Client-specific error types.

use std::collections::BTreeMap;
use std::time::Duration;

use crate::client_specific::caller::ResponseContext;
use crate::models::ClientSpecificImplementation;
use crate::query::StoreError;

/// Which stage of a partner call failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClientSpecificErrorKind {
    /// Non-2xx response from the partner.
    Upstream,
    /// Non-JSON content type whose bytes do not decode as text.
    InvalidResponseType,
    /// Body is not JSON.
    ResponseDecode,
    /// Body is JSON but does not fit the partner's response schema.
    ResponseValidation,
    /// No bearer token could be obtained.
    Auth,
}

impl ClientSpecificErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClientSpecificErrorKind::Upstream => "ClientSpecificError",
            ClientSpecificErrorKind::InvalidResponseType => "InvalidResponseType",
            ClientSpecificErrorKind::ResponseDecode => "ResponseDecodeError",
            ClientSpecificErrorKind::ResponseValidation => "ResponseValidationError",
            ClientSpecificErrorKind::Auth => "AuthError",
        }
    }
}

/// A partner call that completed but cannot be used.
///
/// `context` is attached to the verification span and always carries
/// `error.message` and `error.type`, plus the `response.*` keys when a
/// response was received.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct ClientSpecificError {
    pub kind: ClientSpecificErrorKind,
    pub message: String,
    pub context: BTreeMap<String, String>,
}

impl ClientSpecificError {
    pub fn new(kind: ClientSpecificErrorKind, message: impl Into<String>) -> Self {
        let message = message.into();
        let context = BTreeMap::from([
            ("error.message".to_string(), message.clone()),
            ("error.type".to_string(), kind.as_str().to_string()),
        ]);
        Self { kind, message, context }
    }

    pub fn upstream(message: impl Into<String>) -> Self {
        Self::new(ClientSpecificErrorKind::Upstream, message)
    }

    pub fn auth(message: impl Into<String>) -> Self {
        Self::new(ClientSpecificErrorKind::Auth, message)
    }

    /// Merge the `response.*` keys of a received response.
    pub fn with_response(mut self, response: &ResponseContext) -> Self {
        self.context.extend(response.to_context());
        self
    }

    /// Add a context key. `error.*` keys cannot be overwritten.
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into();
        if !key.starts_with("error.") {
            self.context.insert(key, value.into());
        }
        self
    }

    pub fn error_type(&self) -> &'static str {
        self.kind.as_str()
    }
}

/// Failure inside [`ClientSpecificCaller::call`](crate::client_specific::ClientSpecificCaller::call).
#[derive(Debug, thiserror::Error)]
pub enum CallError {
    #[error(transparent)]
    ClientSpecific(#[from] ClientSpecificError),

    #[error("HTTP transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Blocking task failed: {0}")]
    Task(String),
}

/// Unexpected failure of a verification. Known partner-side failures never
/// surface here: they make the verification return no match instead.
#[derive(Debug, thiserror::Error)]
pub enum VerifyError {
    #[error("HTTP transport failure: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Verification timed out after {0:?}")]
    Timeout(Duration),

    #[error("Blocking task failed: {0}")]
    Task(String),

    #[error("Failed to encode partner response: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Outcome of a failed client-specific verification request.
#[derive(Debug, thiserror::Error)]
pub enum ClientSpecificServiceError {
    #[error("Could not find a member with provided credentials.")]
    Match { implementation: ClientSpecificImplementation },

    #[error(
        "This client specific check is currently unavailable due to an upstream error: [{}] {source}",
        .implementation.as_str()
    )]
    Upstream {
        implementation: ClientSpecificImplementation,
        #[source]
        source: VerifyError,
    },

    #[error("{} is not a configured client specific implementation", .0.as_str())]
    NotConfigured(ClientSpecificImplementation),

    #[error("Census lookup failed: {0}")]
    Census(#[from] StoreError),
}

impl ClientSpecificServiceError {
    pub fn is_match_error(&self) -> bool {
        matches!(self, ClientSpecificServiceError::Match { .. })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_context_always_names_the_error() {
        let err = ClientSpecificError::upstream("No match found for user.")
            .with_context("authority", "https://login.example.com")
            .with_context("error.type", "spoofed");
        assert_eq!(err.context["error.message"], "No match found for user.");
        assert_eq!(err.context["error.type"], "ClientSpecificError");
        assert_eq!(err.context["authority"], "https://login.example.com");
        assert_eq!(err.to_string(), "No match found for user.");
    }

    #[test]
    fn test_service_error_messages() {
        let miss = ClientSpecificServiceError::Match {
            implementation: ClientSpecificImplementation::Microsoft,
        };
        assert_eq!(miss.to_string(), "Could not find a member with provided credentials.");
        assert!(miss.is_match_error());

        let upstream = ClientSpecificServiceError::Upstream {
            implementation: ClientSpecificImplementation::Microsoft,
            source: VerifyError::Timeout(Duration::from_secs(6)),
        };
        assert_eq!(
            upstream.to_string(),
            "This client specific check is currently unavailable due to an upstream error: \
             [MICROSOFT] Verification timed out after 6s"
        );
        assert!(!upstream.is_match_error());
    }
}
