//! # meeting-auth
//!
//! Authentication for the meeting provider APIs:
//! - Account-level client credentials
//! - OAuth 2.0 token types and the `TokenProvider` seam
//! - The Zoom server-to-server (`account_credentials`) token provider
//! - HTTP client building shared by every outbound caller
//!
//! ## Usage
//!
//! ```rust,ignore
//! use meeting_auth::{
//!     credentials::ClientCredentials,
//!     oauth::{providers::zoom, TokenProvider},
//! };
//!
//! let provider = zoom::Provider::new(credentials, "https://zoom.us", client);
//! let tokens = provider.access_token().await?;
//! ```

pub mod credentials;
pub mod error;
pub mod http;
pub mod oauth;

// Re-export commonly used types
pub use error::{Error, ErrorKind};
