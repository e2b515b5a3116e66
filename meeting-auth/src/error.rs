//! Error types for the `meeting-auth` crate.
//!
//! Follows the same pattern as domain::error with a root Error struct and error kind enums.

use std::error::Error as StdError;
use std::fmt;

/// Top-level error type for meeting-auth crate.
/// Holds error kind and optional source for error chaining.
#[derive(Debug)]
pub struct Error {
    pub source: Option<Box<dyn StdError + Send + Sync>>,
    pub error_kind: ErrorKind,
}

/// Major categories of errors in meeting-auth.
#[derive(Debug, PartialEq)]
pub enum ErrorKind {
    OAuth(OAuthErrorKind),
}

/// Errors from OAuth operations.
#[derive(Debug, PartialEq)]
pub enum OAuthErrorKind {
    /// The token endpoint answered with a non-success status. Holds the
    /// provider's error payload as returned on the wire.
    TokenRequestRejected(serde_json::Value),
    /// The token endpoint answered with success but the body was unusable.
    InvalidResponse,
    /// The token request never produced a response.
    Network,
}

impl Error {
    /// The payload to hand back to callers for this error: the provider's
    /// own error body when there is one, otherwise the underlying message.
    pub fn payload(&self) -> serde_json::Value {
        match &self.error_kind {
            ErrorKind::OAuth(OAuthErrorKind::TokenRequestRejected(payload)) => payload.clone(),
            _ => serde_json::Value::String(
                self.source
                    .as_ref()
                    .map(|source| source.to_string())
                    .unwrap_or_else(|| self.to_string()),
            ),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.error_kind {
            ErrorKind::OAuth(kind) => write!(f, "OAuth error: {:?}", kind),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn StdError + 'static))
    }
}

/// Helper function to create OAuth errors.
pub fn oauth_error(kind: OAuthErrorKind, message: &str) -> Error {
    Error {
        source: Some(message.to_string().into()),
        error_kind: ErrorKind::OAuth(kind),
    }
}
