//! Error handling for `kintree`.
//!
//! Entity operations themselves are total and never fail; errors only arise
//! at the store boundary (unknown identifiers, snapshot serialization, IO).

use crate::models::types::PersonId;

/// Errors that can occur in store and export operations
#[derive(Debug, thiserror::Error)]
pub enum KintreeError {
    /// No person registered under the given identifier
    #[error("no person registered with id {0}")]
    UnknownPerson(PersonId),

    /// A handle referenced by the store could not be resolved to an id
    #[error("unregistered handle encountered: {0}")]
    UnregisteredHandle(String),

    /// Error serializing a snapshot
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Error writing a snapshot
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Alias for Result with `KintreeError`
pub type Result<T> = std::result::Result<T, KintreeError>;
