// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Engine error types.

/// Engine error type.
///
/// Every public engine operation is total over its documented input domain;
/// the only surfaced error is a taxonomy lookup miss, which indicates a data
/// or configuration bug upstream (e.g. a POI tagged with a category the
/// taxonomy does not know).
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("Unknown POI category: {0}")]
    UnknownCategory(String),
}

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
