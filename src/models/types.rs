//! Common domain type definitions
//!
//! This module contains the shared handle aliases and identifier types used
//! across the domain models.
//!
//! Relational links between entities are shared and mutable: a mutation
//! performed through one handle is visible through every clone of it. The
//! model is single-threaded by design, so handles are `Rc<RefCell<_>>`
//! rather than thread-safe wrappers; callers that move the graph across
//! threads must add their own synchronization.

use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use super::child::Child;
use super::parent::Parent;

/// Shared, mutable handle to a `Parent`
pub type ParentRef = Rc<RefCell<Parent>>;

/// Shared, mutable handle to a `Child`
pub type ChildRef = Rc<RefCell<Child>>;

/// Identifier assigned to a person by a `FamilyStore`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PersonId(pub u64);

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Compare two parent handles by entity identity, not by field values
#[must_use]
pub fn same_parent(a: &ParentRef, b: &ParentRef) -> bool {
    Rc::ptr_eq(a, b)
}

/// Compare two child handles by entity identity, not by field values
#[must_use]
pub fn same_child(a: &ChildRef, b: &ChildRef) -> bool {
    Rc::ptr_eq(a, b)
}
