use std::error::Error as StdError;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::Value;

use domain::error::{DomainErrorKind, Error as DomainError, ExternalErrorKind, InternalErrorKind};
use log::*;

use crate::response::ErrorResponse;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug)]
pub struct Error(DomainError);

impl StdError for Error {}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> core::result::Result<(), std::fmt::Error> {
        write!(fmt, "{self:?}")
    }
}

// Caller mistakes are 400s. Everything else, including provider failures, is a 500
// whose body echoes the provider's error payload.
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, error) = match self.0.error_kind {
            DomainErrorKind::Internal(internal_error_kind) => match internal_error_kind {
                InternalErrorKind::Validation(message) => {
                    (StatusCode::BAD_REQUEST, Value::String(message))
                }
                InternalErrorKind::Config => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Value::String("Server configuration error".to_string()),
                ),
                InternalErrorKind::Other(message) => {
                    (StatusCode::INTERNAL_SERVER_ERROR, Value::String(message))
                }
            },
            DomainErrorKind::External(external_error_kind) => match external_error_kind {
                ExternalErrorKind::Auth(payload) | ExternalErrorKind::Upstream(payload) => {
                    (StatusCode::INTERNAL_SERVER_ERROR, payload)
                }
            },
        };

        if status.is_server_error() {
            error!("Request failed: {error}");
        } else {
            debug!("Rejected request: {error}");
        }

        (status, Json(ErrorResponse { error })).into_response()
    }
}

impl<E> From<E> for Error
where
    E: Into<DomainError>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
