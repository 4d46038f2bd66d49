//! Family unit representation
//!
//! This module contains the Family model, which groups parents and children
//! into a household unit. The family holds non-owning handles only; the
//! entities themselves live wherever the caller keeps them, and the family
//! performs no relational validation of its members.

use std::rc::Rc;

use super::types::{ChildRef, ParentRef};

/// Type of family based on composition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FamilyType {
    /// Two parents present
    TwoParent,
    /// Exactly one parent present
    SingleParent,
    /// No parents present
    NoParent,
}

/// A family unit grouping up to two parents and any number of children
#[derive(Debug, Clone)]
pub struct Family {
    /// Unique family identifier
    pub family_id: String,
    /// Parents in the family (at most two)
    parents: Vec<ParentRef>,
    /// Children in the family, in insertion order
    children: Vec<ChildRef>,
}

impl Family {
    /// Create a new empty family
    #[must_use]
    pub fn new(family_id: String) -> Self {
        Self {
            family_id,
            parents: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Add a parent to this family
    ///
    /// At most two parents are kept; adding a third is a no-op.
    pub fn add_parent(&mut self, parent: ParentRef) {
        if self.parents.len() < 2 {
            self.parents.push(parent);
        }
    }

    /// Add a child to this family
    pub fn add_child(&mut self, child: ChildRef) {
        self.children.push(child);
    }

    /// Parents in this family
    #[must_use]
    pub fn parents(&self) -> &[ParentRef] {
        &self.parents
    }

    /// Children in this family, in insertion order
    #[must_use]
    pub fn children(&self) -> &[ChildRef] {
        &self.children
    }

    /// Classify the family by its parental composition
    #[must_use]
    pub fn family_type(&self) -> FamilyType {
        match self.parents.len() {
            2 => FamilyType::TwoParent,
            1 => FamilyType::SingleParent,
            _ => FamilyType::NoParent,
        }
    }

    /// Get number of children in the family
    #[must_use]
    pub fn family_size(&self) -> usize {
        self.children.len()
    }

    /// Whether the given parent handle is a member of this family
    #[must_use]
    pub fn has_parent(&self, parent: &ParentRef) -> bool {
        self.parents.iter().any(|p| Rc::ptr_eq(p, parent))
    }

    /// Whether the given child handle is a member of this family
    #[must_use]
    pub fn has_child(&self, child: &ChildRef) -> bool {
        self.children.iter().any(|c| Rc::ptr_eq(c, child))
    }
}
