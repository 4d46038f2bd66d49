//! Registry of family-graph entities
//!
//! The entities themselves are passive records; this module provides the
//! external context that holds them. A [`FamilyStore`] assigns a [`PersonId`]
//! to every registered handle, supports lookup and filtering, and offers the
//! convenience linking operations that perform both sides of the reciprocal
//! caller convention (the models never do this on their own).

pub mod consistency;
pub mod snapshot;

use log::debug;
use rustc_hash::FxHashMap;
use std::rc::Rc;

use crate::config::StoreConfig;
use crate::error::{KintreeError, Result};
use crate::models::types::{ChildRef, ParentRef, PersonId};
use crate::models::PersonLike;

/// A registry of parents and children that can be queried by id
///
/// Registration is idempotent per handle: registering the same handle twice
/// returns the id assigned the first time.
#[derive(Debug, Default)]
pub struct FamilyStore {
    config: StoreConfig,
    /// Parents indexed by id
    parents: FxHashMap<PersonId, ParentRef>,
    /// Children indexed by id
    children: FxHashMap<PersonId, ChildRef>,
    /// Reverse index from entity pointer to id, for both roles
    ids_by_ptr: FxHashMap<usize, PersonId>,
    /// Registration order, for deterministic iteration and snapshots
    parent_order: Vec<PersonId>,
    child_order: Vec<PersonId>,
    next_id: u64,
}

impl FamilyStore {
    /// Create a new empty store with the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(StoreConfig::default())
    }

    /// Create a new empty store with the given configuration
    #[must_use]
    pub fn with_config(config: StoreConfig) -> Self {
        let capacity = config.expected_people;
        Self {
            config,
            parents: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            children: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            ids_by_ptr: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            parent_order: Vec::new(),
            child_order: Vec::new(),
            next_id: 0,
        }
    }

    fn fresh_id(&mut self) -> PersonId {
        let id = PersonId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Register a parent handle, returning its id
    pub fn register_parent(&mut self, parent: ParentRef) -> PersonId {
        let ptr = Rc::as_ptr(&parent) as usize;
        if let Some(id) = self.ids_by_ptr.get(&ptr) {
            return *id;
        }

        let id = self.fresh_id();
        if self.config.log_registrations {
            debug!("registered parent {} as {id}", parent.borrow().name());
        }
        self.ids_by_ptr.insert(ptr, id);
        self.parents.insert(id, parent);
        self.parent_order.push(id);
        id
    }

    /// Register a child handle, returning its id
    pub fn register_child(&mut self, child: ChildRef) -> PersonId {
        let ptr = Rc::as_ptr(&child) as usize;
        if let Some(id) = self.ids_by_ptr.get(&ptr) {
            return *id;
        }

        let id = self.fresh_id();
        if self.config.log_registrations {
            debug!("registered child {} as {id}", child.borrow().name());
        }
        self.ids_by_ptr.insert(ptr, id);
        self.children.insert(id, child);
        self.child_order.push(id);
        id
    }

    /// Get a parent by id
    #[must_use]
    pub fn parent(&self, id: PersonId) -> Option<ParentRef> {
        self.parents.get(&id).cloned()
    }

    /// Get a child by id
    #[must_use]
    pub fn child(&self, id: PersonId) -> Option<ChildRef> {
        self.children.get(&id).cloned()
    }

    /// Resolve a parent handle back to its id, if registered
    #[must_use]
    pub fn parent_id(&self, parent: &ParentRef) -> Option<PersonId> {
        self.ids_by_ptr.get(&(Rc::as_ptr(parent) as usize)).copied()
    }

    /// Resolve a child handle back to its id, if registered
    #[must_use]
    pub fn child_id(&self, child: &ChildRef) -> Option<PersonId> {
        self.ids_by_ptr.get(&(Rc::as_ptr(child) as usize)).copied()
    }

    /// All registered parents in registration order
    #[must_use]
    pub fn all_parents(&self) -> Vec<ParentRef> {
        self.parent_order
            .iter()
            .filter_map(|id| self.parents.get(id).cloned())
            .collect()
    }

    /// All registered children in registration order
    #[must_use]
    pub fn all_children(&self) -> Vec<ChildRef> {
        self.child_order
            .iter()
            .filter_map(|id| self.children.get(id).cloned())
            .collect()
    }

    /// Filter registered parents by a predicate function
    #[must_use]
    pub fn filter_parents<F>(&self, predicate: F) -> Vec<ParentRef>
    where
        F: Fn(&crate::models::Parent) -> bool,
    {
        self.all_parents()
            .into_iter()
            .filter(|parent| predicate(&parent.borrow()))
            .collect()
    }

    /// Filter registered children by a predicate function
    #[must_use]
    pub fn filter_children<F>(&self, predicate: F) -> Vec<ChildRef>
    where
        F: Fn(&crate::models::Child) -> bool,
    {
        self.all_children()
            .into_iter()
            .filter(|child| predicate(&child.borrow()))
            .collect()
    }

    /// Count of registered parents
    #[must_use]
    pub fn parent_count(&self) -> usize {
        self.parents.len()
    }

    /// Count of registered children
    #[must_use]
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    fn require_parent(&self, id: PersonId) -> Result<ParentRef> {
        self.parent(id).ok_or(KintreeError::UnknownPerson(id))
    }

    fn require_child(&self, id: PersonId) -> Result<ChildRef> {
        self.child(id).ok_or(KintreeError::UnknownPerson(id))
    }

    /// Link two registered parents as spouses on both sides
    ///
    /// The models keep spousal links one-way; this performs the mirrored
    /// pair of calls the caller convention requires.
    pub fn link_spouses(&mut self, a: PersonId, b: PersonId) -> Result<()> {
        let first = self.require_parent(a)?;
        let second = self.require_parent(b)?;
        first.borrow_mut().set_spouse(second.clone());
        second.borrow_mut().set_spouse(first);
        Ok(())
    }

    /// Append a registered child to a registered parent's children sequence
    pub fn link_child(&mut self, parent: PersonId, child: PersonId) -> Result<()> {
        let parent = self.require_parent(parent)?;
        let child = self.require_child(child)?;
        parent.borrow_mut().add_child(child);
        Ok(())
    }

    /// Link two registered children as siblings on both sides
    pub fn link_siblings(&mut self, a: PersonId, b: PersonId) -> Result<()> {
        let first = self.require_child(a)?;
        let second = self.require_child(b)?;
        first.borrow_mut().add_sibling(second.clone());
        second.borrow_mut().add_sibling(first);
        Ok(())
    }

    pub(crate) fn config(&self) -> &StoreConfig {
        &self.config
    }
}
