//! Parent entity model
//!
//! This module contains the Parent model, which represents a parent in the
//! family graph. Parents carry an optional spousal link and an ordered
//! sequence of children, and can be shared across the graph through
//! [`ParentRef`] handles.
//!
//! Relational symmetry is a caller convention, never an invariant: setting a
//! spouse does not update the other side, and adding a child does not touch
//! the child's parent links. See the crate-level consistency audit for a
//! read-only view of asymmetric links.

use std::cell::RefCell;
use std::rc::Rc;

use super::person::Person;
use super::traits::PersonLike;
use super::types::{ChildRef, ParentRef};

/// A parent in the family graph
///
/// Composed over an embedded [`Person`]; identity attributes are reached
/// through the [`PersonLike`] impl.
#[derive(Debug, Clone)]
pub struct Parent {
    /// The underlying Person entity
    person: Person,
    /// Spousal link; `None` means unmarried or unset
    spouse: Option<ParentRef>,
    /// Children in insertion order; duplicates permitted
    children: Vec<ChildRef>,
}

impl Parent {
    /// Create a new Parent with no spouse and no children
    #[must_use]
    pub fn new(name: String, age: i32) -> Self {
        Self {
            person: Person::new(name, age),
            spouse: None,
            children: Vec::new(),
        }
    }

    /// Create a new Parent with a spousal link already in place
    ///
    /// The link is one-way: the given spouse's own spouse field is not
    /// touched. Callers wanting a mutual link must mirror the call.
    #[must_use]
    pub fn with_spouse(name: String, age: i32, spouse: ParentRef) -> Self {
        Self {
            person: Person::new(name, age),
            spouse: Some(spouse),
            children: Vec::new(),
        }
    }

    /// Wrap this Parent in a shared handle
    #[must_use]
    pub fn into_ref(self) -> ParentRef {
        Rc::new(RefCell::new(self))
    }

    /// Get a reference to the underlying Person
    #[must_use]
    pub fn person(&self) -> &Person {
        &self.person
    }

    /// Get the current spouse handle, if any
    #[must_use]
    pub fn spouse(&self) -> Option<ParentRef> {
        self.spouse.clone()
    }

    /// Replace the spouse unconditionally
    ///
    /// One-way by design: the argument's own spouse field is unchanged.
    pub fn set_spouse(&mut self, spouse: ParentRef) {
        self.spouse = Some(spouse);
    }

    /// Get a snapshot of the children sequence
    ///
    /// Returns cloned handles in insertion order; mutating the returned
    /// vector does not affect this Parent.
    #[must_use]
    pub fn children(&self) -> Vec<ChildRef> {
        self.children.clone()
    }

    /// Replace the entire children sequence unconditionally
    pub fn set_children(&mut self, children: Vec<ChildRef>) {
        self.children = children;
    }

    /// Append a child to the end of the children sequence
    ///
    /// Order is preserved and duplicates are permitted; no identity check is
    /// performed, and the child's own parent links are unchanged.
    pub fn add_child(&mut self, child: ChildRef) {
        self.children.push(child);
    }

    /// Number of children currently linked
    #[must_use]
    pub fn child_count(&self) -> usize {
        self.children.len()
    }
}

impl PersonLike for Parent {
    fn name(&self) -> &str {
        self.person.name()
    }

    fn set_name(&mut self, name: String) {
        self.person.set_name(name);
    }

    fn age(&self) -> i32 {
        self.person.age()
    }

    fn set_age(&mut self, age: i32) {
        self.person.set_age(age);
    }
}
