//! # AppError
//!
//! Centralized error handling for the board backend.
//! Maps domain-specific failures to actionable error types.

use std::fmt;
use thiserror::Error;

/// The kinds of record a lookup can miss.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Board,
    Thread,
    Reply,
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Entity::Board => "board",
            Entity::Thread => "thread",
            Entity::Reply => "reply",
        })
    }
}

/// The primary error type for all rb-core operations.
#[derive(Error, Debug)]
pub enum AppError {
    /// Board, thread or reply missing
    #[error("{0} not found")]
    NotFound(Entity),

    /// Infrastructure failure (store down, hash primitive rejected its input)
    #[error("internal service error: {0}")]
    Internal(String),
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(format!("{err:#}"))
    }
}

/// A specialized Result type for board logic.
pub type Result<T> = std::result::Result<T, AppError>;
