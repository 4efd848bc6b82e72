//! Embedding client for searchsync.
//!
//! Sends text to an Azure OpenAI style embeddings deployment and returns the
//! vector of the first result. One request per call: no batching, caching or
//! retry.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod client;
pub mod error;

pub use client::{embed_text, EmbeddingClient, EmbeddingConfig};
pub use error::{EmbedError, EmbedResult};
