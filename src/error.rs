// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Collector error types.

/// Errors produced by a collection cycle.
///
/// Every variant is recoverable at the scheduler boundary: the failed cycle
/// is logged and the loop waits for the next scheduled tick.
#[derive(Debug, thiserror::Error)]
pub enum CollectorError {
    #[error("Token issuance failed: {0}")]
    Auth(String),

    #[error("Location fetch failed: {0}")]
    Fetch(String),

    #[error("CSV persistence failed: {0}")]
    Persistence(String),
}

/// Result type alias for collector operations
pub type Result<T> = std::result::Result<T, CollectorError>;
