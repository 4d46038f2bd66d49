//! Child entity model
//!
//! This module contains the Child model, which represents a child in the
//! family graph. A child is born to exactly two parents, fixed at
//! construction time, and carries an ordered sequence of siblings.
//!
//! The parent links are deliberately read-only: no setter exists for either,
//! so both handles stay fixed for the object's lifetime. Sibling links are
//! one-way unless the caller mirrors them.

use std::cell::RefCell;
use std::rc::Rc;

use super::person::Person;
use super::traits::PersonLike;
use super::types::{ChildRef, ParentRef};

/// A child in the family graph with two fixed parent links
#[derive(Debug, Clone)]
pub struct Child {
    /// The underlying Person entity
    person: Person,
    /// First parent, fixed at construction
    parent1: ParentRef,
    /// Second parent, fixed at construction
    parent2: ParentRef,
    /// Siblings in insertion order; duplicates permitted
    siblings: Vec<ChildRef>,
}

impl Child {
    /// Create a new Child with both parent links fixed for its lifetime
    ///
    /// Neither parent's children sequence is updated; callers must link the
    /// other direction themselves.
    #[must_use]
    pub fn new(name: String, age: i32, parent1: ParentRef, parent2: ParentRef) -> Self {
        Self {
            person: Person::new(name, age),
            parent1,
            parent2,
            siblings: Vec::new(),
        }
    }

    /// Wrap this Child in a shared handle
    #[must_use]
    pub fn into_ref(self) -> ChildRef {
        Rc::new(RefCell::new(self))
    }

    /// Get a reference to the underlying Person
    #[must_use]
    pub fn person(&self) -> &Person {
        &self.person
    }

    /// Get the first parent handle
    #[must_use]
    pub fn parent1(&self) -> ParentRef {
        self.parent1.clone()
    }

    /// Get the second parent handle
    #[must_use]
    pub fn parent2(&self) -> ParentRef {
        self.parent2.clone()
    }

    /// Get a snapshot of the siblings sequence
    ///
    /// Returns cloned handles in insertion order; mutating the returned
    /// vector does not affect this Child.
    #[must_use]
    pub fn siblings(&self) -> Vec<ChildRef> {
        self.siblings.clone()
    }

    /// Replace the entire siblings sequence unconditionally
    pub fn set_siblings(&mut self, siblings: Vec<ChildRef>) {
        self.siblings = siblings;
    }

    /// Append a sibling to the end of the siblings sequence
    ///
    /// Order is preserved and duplicates are permitted. The link is one-way:
    /// the sibling's own sequence is unchanged.
    pub fn add_sibling(&mut self, sibling: ChildRef) {
        self.siblings.push(sibling);
    }

    /// Number of siblings currently linked
    #[must_use]
    pub fn sibling_count(&self) -> usize {
        self.siblings.len()
    }
}

impl PersonLike for Child {
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
