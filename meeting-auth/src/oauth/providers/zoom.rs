//! Zoom server-to-server OAuth provider.

use async_trait::async_trait;
use log::*;

use crate::credentials::ClientCredentials;
use crate::error::{oauth_error, Error, ErrorKind, OAuthErrorKind};
use crate::http::error_payload;
use crate::oauth::token::{TokenResponse, Tokens};
use crate::oauth::TokenProvider;

const GRANT_TYPE: &str = "account_credentials";

/// Zoom OAuth provider.
///
/// Exchanges account-level client credentials for an access token using the
/// `account_credentials` grant. Every call goes to the token endpoint.
pub struct Provider {
    credentials: ClientCredentials,
    token_url: String,
    http_client: reqwest::Client,
}

impl Provider {
    /// Create a new Zoom OAuth provider.
    ///
    /// # Arguments
    ///
    /// * `credentials` - Client id, client secret and account id of the app
    /// * `oauth_base_url` - Host serving `/oauth/token`
    /// * `http_client` - Client used for the token requests
    pub fn new(
        credentials: ClientCredentials,
        oauth_base_url: &str,
        http_client: reqwest::Client,
    ) -> Self {
        Self {
            credentials,
            token_url: format!("{}/oauth/token", oauth_base_url.trim_end_matches('/')),
            http_client,
        }
    }
}

#[async_trait]
impl TokenProvider for Provider {
    async fn access_token(&self) -> Result<Tokens, Error> {
        debug!(
            "Requesting Zoom access token for account {}",
            self.credentials.account_id()
        );

        let response = self
            .http_client
            .post(&self.token_url)
            .basic_auth(
                self.credentials.client_id(),
                Some(self.credentials.client_secret()),
            )
            .form(&[
                ("grant_type", GRANT_TYPE),
                ("account_id", self.credentials.account_id()),
            ])
            .send()
            .await
            .map_err(|e| {
                warn!("Failed to request Zoom access token: {:?}", e);
                Error {
                    source: Some(Box::new(e)),
                    error_kind: ErrorKind::OAuth(OAuthErrorKind::Network),
                }
            })?;

        let status = response.status();
        if status.is_success() {
            let token: TokenResponse = response.json().await.map_err(|e| {
                warn!("Failed to parse Zoom token response: {:?}", e);
                Error {
                    source: Some(Box::new(e)),
                    error_kind: ErrorKind::OAuth(OAuthErrorKind::InvalidResponse),
                }
            })?;
            let tokens = Tokens::from(token);
            debug!("Obtained Zoom access token expiring at {:?}", tokens.expires_at);
            Ok(tokens)
        } else {
            let payload = error_payload(response).await;
            warn!("Zoom token request rejected ({}): {}", status, payload);
            Err(oauth_error(
                OAuthErrorKind::TokenRequestRejected(payload),
                &format!("Token request failed with status {status}"),
            ))
        }
    }
}
