//! Custom error types for the common library
//!
//! This module defines application-specific error types that can be used
//! throughout the application.

use mongodb::error::Error as MongoError;
use thiserror::Error;

/// Custom error type for document-store operations
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Storage was never configured for this process
    #[error("Database not configured")]
    Unconfigured,

    /// Error occurred while building the database client
    #[error("Database connection error: {0}")]
    Connection(#[source] MongoError),

    /// Error occurred during an operation against the store
    #[error("Database query error: {0}")]
    Query(#[source] MongoError),
}

/// Type alias for Result with DatabaseError
pub type DatabaseResult<T> = Result<T, DatabaseError>;
