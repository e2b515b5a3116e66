//! Meeting scheduling domain.
//!
//! `meeting` holds the operations exposed to the web layer; `gateway` holds
//! the outbound meeting API client they delegate to. Token acquisition comes
//! from `meeting_auth`.

pub mod error;
pub mod gateway;
pub mod meeting;
