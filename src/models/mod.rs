//! Domain models for family relationship graphs
//!
//! This module contains the core entity models: `Person` as the plain value
//! entity, `Parent` and `Child` as relational entities composed over it, and
//! `Family` as a unit grouping them. Cross-entity links are shared, mutable,
//! and non-owning; see [`types`] for the handle aliases.

// Re-export entity models
pub mod child;
pub mod family;
pub mod parent;
pub mod person;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use child::Child;
pub use family::{Family, FamilyType};
pub use parent::Parent;
pub use person::Person;
pub use traits::PersonLike;
