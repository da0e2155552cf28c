//! Core components of the `vantage-rs` client.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The main [`AvClient`] and its builder.
//! - The primary [`AvError`] type.
//! - Wire helpers shared by every endpoint, and the fallback combinator.

/// The main client (`AvClient`), builder, and configuration.
pub mod client;
/// The primary error type (`AvError`) for the crate.
pub mod error;
pub(crate) mod fallback;
pub(crate) mod net;
pub(crate) mod wire;

#[cfg(feature = "test-mode")]
pub(crate) mod fixtures;

// convenient re-exports so most code can just `use crate::core::AvClient`
pub use client::{AvClient, AvClientBuilder, Backoff, RetryConfig};
pub use error::AvError;
