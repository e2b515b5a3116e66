//! Response bodies returned by the endpoints.

use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;

pub(crate) mod meeting;

/// Body of every error response.
#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct ErrorResponse {
    /// Validation message, or the provider's error payload
    #[schema(value_type = Object)]
    pub(crate) error: Value,
}
