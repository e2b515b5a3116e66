//! HTTP client building and response helpers for outbound provider calls.

mod client;
mod payload;

pub use client::HttpClientBuilder;
pub use payload::error_payload;
