//! # AppError
//!
//! Centralized error handling for the catalog.
//! Everything that is not a missing record or an empty catalog is a store
//! failure, and store failures are never retried here.

use thiserror::Error;

/// The primary error type for all igf-core operations.
#[derive(Error, Debug)]
pub enum AppError {
    /// No record with this id, or the id is not well-formed for the store
    #[error("game not found with ID {0}")]
    NotFound(String),

    /// A random pick was requested while the catalog holds no records
    #[error("the catalog is empty")]
    EmptyCatalog,

    /// Infrastructure failure (e.g., store unreachable)
    #[error("store error: {0}")]
    Store(#[from] anyhow::Error),
}

/// A specialized Result type for catalog logic.
pub type Result<T> = std::result::Result<T, AppError>;
