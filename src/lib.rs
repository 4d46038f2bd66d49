//! A Rust library for modeling family relationship graphs: persons, parents,
//! and children linked by shared, mutable, non-owning references, with a
//! registry, consistency auditing, and JSON snapshot export.

pub mod config;
pub mod error;
pub mod models;
pub mod store;

// Re-export the most common types for easier use
// Core types
pub use config::StoreConfig;
pub use error::{KintreeError, Result};

// Entity models
pub use models::traits::PersonLike;
pub use models::types::{ChildRef, ParentRef, PersonId};
pub use models::{Child, Family, FamilyType, Parent, Person};

// Registry and reporting
pub use store::FamilyStore;
pub use store::consistency::{ConsistencyIssue, ConsistencyReport};
pub use store::snapshot::StoreSnapshot;
