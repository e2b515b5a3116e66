//! Account-level client credentials.

use secrecy::{ExposeSecret, SecretString};

/// Client credentials for a server-to-server OAuth app.
///
/// Built once at startup and shared read-only for the life of the process.
#[derive(Clone)]
pub struct ClientCredentials {
    client_id: String,
    client_secret: SecretString,
    account_id: String,
}

impl ClientCredentials {
    pub fn new(client_id: String, client_secret: SecretString, account_id: String) -> Self {
        Self {
            client_id,
            client_secret,
            account_id,
        }
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn client_secret(&self) -> &str {
        self.client_secret.expose_secret()
    }

    pub fn account_id(&self) -> &str {
        &self.account_id
    }
}

impl std::fmt::Debug for ClientCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientCredentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"[REDACTED]")
            .field("account_id", &self.account_id)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_client_secret() {
        let credentials = ClientCredentials::new(
            "client-abc".to_string(),
            SecretString::new("super-secret".to_string()),
            "account-xyz".to_string(),
        );

        let debug = format!("{credentials:?}");
        assert!(debug.contains("client-abc"));
        assert!(debug.contains("account-xyz"));
        assert!(!debug.contains("super-secret"));
    }

    #[test]
    fn test_accessors() {
        let credentials = ClientCredentials::new(
            "client-abc".to_string(),
            SecretString::new("super-secret".to_string()),
            "account-xyz".to_string(),
        );

        assert_eq!(credentials.client_id(), "client-abc");
        assert_eq!(credentials.client_secret(), "super-secret");
        assert_eq!(credentials.account_id(), "account-xyz");
    }
}
