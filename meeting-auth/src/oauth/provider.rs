//! OAuth token provider trait.

use async_trait::async_trait;

use super::token::Tokens;
use crate::error::Error;

/// Trait for sources of bearer credentials.
///
/// Each call to [`TokenProvider::access_token`] performs a fresh token
/// request. Implementations hold no token state between calls, so a token
/// is only ever used for the request that obtained it.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait TokenProvider: Send + Sync {
    /// Obtain a new access token from the provider.
    async fn access_token(&self) -> Result<Tokens, Error>;
}
