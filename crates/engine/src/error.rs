//! Errors the engine can surface.
//!
//! The pure report functions never fail; errors come from the store side:
//! write-time validation, lookups of unknown ids, and the database itself.

use sea_orm::DbErr;
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug)]
pub enum EngineError {
    /// A field failed write-time validation (bad amount, empty description,
    /// unknown enum value).
    #[error("validation failed: {0}")]
    Validation(String),
    /// The referenced record does not exist in the store.
    #[error("\"{0}\" not found")]
    KeyNotFound(String),
    #[error(transparent)]
    Database(#[from] DbErr),
}

impl PartialEq for EngineError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Validation(a), Self::Validation(b)) => a == b,
            (Self::KeyNotFound(a), Self::KeyNotFound(b)) => a == b,
            (Self::Database(a), Self::Database(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}
