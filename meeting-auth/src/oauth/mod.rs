//! OAuth 2.0 authentication infrastructure.
//!
//! Provides the token provider seam and the client-credentials flow used to
//! authorize calls to video meeting platforms.

mod provider;

pub mod providers;
pub mod token;

pub use provider::TokenProvider;

#[cfg(any(test, feature = "mock"))]
pub use provider::MockTokenProvider;
