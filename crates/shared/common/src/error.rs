//! Unified error handling for the data-access layer.
//!
//! Every failure surfaces as a single [`OperationError`]: storage failures,
//! missing generated keys, missing rows, and invalid identifiers are message
//! flavors of one kind rather than separate types.

use thiserror::Error;

/// Data-access error type.
#[derive(Error, Debug)]
pub enum OperationError {
    /// The backing store failed to acquire a connection or execute a statement
    #[cfg(feature = "database")]
    #[error("storage error: {0}")]
    Storage(#[from] sea_orm::DbErr),

    /// The insert completed but the store returned no generated key
    #[error("saving the product returned no generated key")]
    KeyNotGenerated,

    /// No row matched the requested identifier
    #[error("product with id = {0} does not exist")]
    NotFound(i64),

    /// The entity carries no identifier
    #[error("cannot address a product without an id")]
    MissingId,

    /// The identifier is non-positive and can match no row
    #[error("product with id = {0} does not exist")]
    InvalidId(i64),
}

impl OperationError {
    /// Get user-facing message (hides backend details).
    pub fn user_message(&self) -> String {
        match self {
            #[cfg(feature = "database")]
            OperationError::Storage(e) => {
                tracing::error!("storage error: {:?}", e);
                "a storage error occurred".to_string()
            }
            other => other.to_string(),
        }
    }
}

/// Result type alias
pub type OperationResult<T> = Result<T, OperationError>;
