//! This module holds typed parameters for various endpoint inputs.
//!
//! Request bodies are deserialized leniently (every field optional) so that incomplete
//! input reaches domain validation and is answered with a 400 and a message, rather than
//! being rejected by the extractor.

pub(crate) mod meeting;
