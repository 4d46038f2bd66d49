//! JSON snapshot export for a family store
//!
//! Entity links form cycles, so the graph cannot be serialized directly.
//! A snapshot flattens every registered entity into an id-keyed record,
//! resolving each handle to the `PersonId` it was registered under. The
//! snapshot is a copy: later mutation of the graph does not affect it.

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::FamilyStore;
use crate::error::{KintreeError, Result};
use crate::models::types::{ChildRef, ParentRef, PersonId};
use crate::models::PersonLike;

/// Flattened record of a registered parent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParentRecord {
    /// Id the parent was registered under
    pub id: PersonId,
    /// Name at snapshot time
    pub name: String,
    /// Age at snapshot time
    pub age: i32,
    /// Spouse id, if a spouse is set
    pub spouse: Option<PersonId>,
    /// Children ids in insertion order
    pub children: Vec<PersonId>,
}

/// Flattened record of a registered child
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChildRecord {
    /// Id the child was registered under
    pub id: PersonId,
    /// Name at snapshot time
    pub name: String,
    /// Age at snapshot time
    pub age: i32,
    /// First parent id
    pub parent1: PersonId,
    /// Second parent id
    pub parent2: PersonId,
    /// Sibling ids in insertion order
    pub siblings: Vec<PersonId>,
}

/// Flattened, serializable view of a whole store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreSnapshot {
    /// Parent records in registration order
    pub parents: Vec<ParentRecord>,
    /// Child records in registration order
    pub children: Vec<ChildRecord>,
}

impl StoreSnapshot {
    /// Serialize the snapshot to pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the snapshot as JSON to the given path
    pub fn write_to(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }
}

impl FamilyStore {
    fn resolve_parent(&self, parent: &ParentRef) -> Result<PersonId> {
        self.parent_id(parent).ok_or_else(|| {
            KintreeError::UnregisteredHandle(parent.borrow().name().to_string())
        })
    }

    fn resolve_child(&self, child: &ChildRef) -> Result<PersonId> {
        self.child_id(child)
            .ok_or_else(|| KintreeError::UnregisteredHandle(child.borrow().name().to_string()))
    }

    /// Flatten the store into a serializable snapshot
    ///
    /// Fails with [`KintreeError::UnregisteredHandle`] if any entity links to
    /// a handle that was never registered, since such a link has no id to
    /// serialize.
    pub fn snapshot(&self) -> Result<StoreSnapshot> {
        let mut parents = Vec::with_capacity(self.parent_count());
        for parent in self.all_parents() {
            let id = self.resolve_parent(&parent)?;
            let parent = parent.borrow();

            let spouse = match parent.spouse() {
                Some(spouse) => Some(self.resolve_parent(&spouse)?),
                None => None,
            };
            let children = parent
                .children()
                .iter()
                .map(|child| self.resolve_child(child))
                .collect::<Result<Vec<_>>>()?;

            parents.push(ParentRecord {
                id,
                name: parent.name().to_string(),
                age: parent.age(),
                spouse,
                children,
            });
        }

        let mut children = Vec::with_capacity(self.child_count());
        for child in self.all_children() {
            let id = self.resolve_child(&child)?;
            let child = child.borrow();

            let siblings = child
                .siblings()
                .iter()
                .map(|sibling| self.resolve_child(sibling))
                .collect::<Result<Vec<_>>>()?;

            children.push(ChildRecord {
                id,
                name: child.name().to_string(),
                age: child.age(),
                parent1: self.resolve_parent(&child.parent1())?,
                parent2: self.resolve_parent(&child.parent2())?,
                siblings,
            });
        }

        Ok(StoreSnapshot { parents, children })
    }
}
