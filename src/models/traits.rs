//! Shared traits for domain models
//!
//! This module defines the capability interface common to every person-like
//! entity. `Parent` and `Child` are composed over an embedded [`Person`]
//! rather than inheriting from it; this trait is the shared face of that
//! composition, and doubles as the compile-time contract for the identity
//! accessors every entity must expose.
//!
//! [`Person`]: super::person::Person

/// Capability interface over the identity attributes of a person-like entity
pub trait PersonLike {
    /// Get the name
    fn name(&self) -> &str;

    /// Replace the name unconditionally; no validation is performed
    fn set_name(&mut self, name: String);

    /// Get the age
    fn age(&self) -> i32;

    /// Replace the age unconditionally; any value is accepted, including
    /// negatives
    fn set_age(&mut self, age: i32);
}
