//! Error types for the `domain` layer.
use meeting_auth::error::Error as MeetingAuthError;
use serde_json::Value;
use std::error::Error as StdError;
use std::fmt;

/// Top-level domain error type.
/// Errors in the Domain layer are modeled as a tree structure
/// with `domain::error::Error` as the root type holding a tree of `error_kind`
/// enums that represent the kinds of errors that can occur in the domain layer or
/// in lower layers. The `source` field is used to hold the original error that caused
/// the domain error. Errors from `meeting_auth` and `reqwest` are translated here so that
/// `web` only ever matches on domain error kinds when choosing HTTP status codes and bodies.
#[derive(Debug)]
pub struct Error {
    pub source: Option<Box<dyn StdError + Send + Sync>>,
    pub error_kind: DomainErrorKind,
}

/// Enum representing the major categories of errors that can occur in the `domain` layer.
#[derive(Debug, PartialEq)]
pub enum DomainErrorKind {
    Internal(InternalErrorKind),
    External(ExternalErrorKind),
}

/// Enum representing the various kinds of internal errors that can occur in the `domain` layer.
#[derive(Debug, PartialEq)]
pub enum InternalErrorKind {
    /// Caller input failed validation. Holds the message shown to the caller.
    Validation(String),
    Config,
    Other(String),
}

/// Enum representing the various kinds of external errors that can occur in the `domain` layer.
/// Each holds the payload to echo back: the provider's error body when there was one,
/// otherwise the transport error message.
#[derive(Debug, PartialEq)]
pub enum ExternalErrorKind {
    /// Obtaining an access token failed.
    Auth(Value),
    /// A meeting API call failed after authentication.
    Upstream(Value),
}

impl Error {
    pub fn validation(message: &str) -> Self {
        Error {
            source: None,
            error_kind: DomainErrorKind::Internal(InternalErrorKind::Validation(
                message.to_string(),
            )),
        }
    }

    pub fn upstream(payload: Value) -> Self {
        Error {
            source: None,
            error_kind: DomainErrorKind::External(ExternalErrorKind::Upstream(payload)),
        }
    }

    pub fn config(message: &str) -> Self {
        Error {
            source: Some(message.to_string().into()),
            error_kind: DomainErrorKind::Internal(InternalErrorKind::Config),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Domain Error: {self:?}")
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn StdError + 'static))
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        // Errors that result from issues building the reqwest::Client instance. This
        // type of error will occur prior to any network calls being made.
        if err.is_builder() {
            Error {
                source: Some(Box::new(err)),
                error_kind: DomainErrorKind::Internal(InternalErrorKind::Other(
                    "Failed to build reqwest client".to_string(),
                )),
            }
        // Errors that result from issues with the network call itself.
        } else {
            Error {
                error_kind: DomainErrorKind::External(ExternalErrorKind::Upstream(
                    Value::String(err.to_string()),
                )),
                source: Some(Box::new(err)),
            }
        }
    }
}

impl From<MeetingAuthError> for Error {
    fn from(err: MeetingAuthError) -> Self {
        Error {
            error_kind: DomainErrorKind::External(ExternalErrorKind::Auth(err.payload())),
            source: Some(Box::new(err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use meeting_auth::error::{oauth_error, OAuthErrorKind};
    use serde_json::json;

    #[test]
    fn test_meeting_auth_rejection_becomes_auth_error_with_payload() {
        let body = json!({"reason": "Invalid client_id or client_secret", "error": "invalid_client"});
        let err: Error =
            oauth_error(OAuthErrorKind::TokenRequestRejected(body.clone()), "401").into();

        assert_eq!(
            err.error_kind,
            DomainErrorKind::External(ExternalErrorKind::Auth(body))
        );
        assert!(err.source.is_some());
    }

    #[test]
    fn test_meeting_auth_network_error_becomes_auth_error_with_message() {
        let err: Error = oauth_error(OAuthErrorKind::Network, "connection refused").into();

        assert_eq!(
            err.error_kind,
            DomainErrorKind::External(ExternalErrorKind::Auth(json!("connection refused")))
        );
    }

    #[test]
    fn test_validation_constructor() {
        let err = Error::validation("Meeting ID is required.");

        assert_eq!(
            err.error_kind,
            DomainErrorKind::Internal(InternalErrorKind::Validation(
                "Meeting ID is required.".to_string()
            ))
        );
        assert!(err.source.is_none());
    }
}
