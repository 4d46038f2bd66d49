//! Consistency auditing for a family store
//!
//! Spousal, parent-child, and sibling relations are reciprocal only by
//! caller convention; the models never enforce symmetry and never will. This
//! module makes the convention observable: an audit walks every registered
//! entity and reports one-way links and references to unregistered entities.
//! The audit is strictly read-only; it never repairs what it finds.

use itertools::Itertools;
use log::warn;
use std::rc::Rc;

use super::FamilyStore;
use crate::models::types::{ChildRef, PersonId};
use crate::models::PersonLike;

/// A single asymmetry or dangling reference found by an audit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsistencyIssue {
    /// The entity on whose side the issue was observed
    pub subject: PersonId,
    /// The entity on the other end of the link, if registered
    pub counterpart: Option<PersonId>,
    /// Description of the issue
    pub description: String,
}

/// Result of auditing a store
#[derive(Debug, Clone, Default)]
pub struct ConsistencyReport {
    /// Whether every reciprocal relation held on both sides
    pub consistent: bool,
    /// List of issues, if any
    pub issues: Vec<ConsistencyIssue>,
}

impl ConsistencyReport {
    fn push(&mut self, subject: PersonId, counterpart: Option<PersonId>, description: String) {
        warn!("consistency: {subject}: {description}");
        self.issues.push(ConsistencyIssue {
            subject,
            counterpart,
            description,
        });
    }
}

impl FamilyStore {
    /// Audit every registered entity for one-way links and dangling handles
    ///
    /// Sibling links are only checked when the store's configuration enables
    /// `audit_sibling_links`.
    #[must_use]
    pub fn audit(&self) -> ConsistencyReport {
        let mut report = ConsistencyReport::default();

        self.audit_spouses(&mut report);
        self.audit_parent_child_links(&mut report);
        if self.config().audit_sibling_links {
            self.audit_siblings(&mut report);
        }

        report.consistent = report.issues.is_empty();
        report
    }

    fn audit_spouses(&self, report: &mut ConsistencyReport) {
        for &id in &self.parent_order {
            let parent = &self.parents[&id];
            let Some(spouse) = parent.borrow().spouse() else {
                continue;
            };

            let Some(spouse_id) = self.parent_id(&spouse) else {
                report.push(
                    id,
                    None,
                    format!(
                        "spouse {} is not registered in the store",
                        spouse.borrow().name()
                    ),
                );
                continue;
            };

            let mirrored = spouse
                .borrow()
                .spouse()
                .is_some_and(|back| Rc::ptr_eq(&back, parent));
            if !mirrored {
                report.push(
                    id,
                    Some(spouse_id),
                    format!("spousal link to {spouse_id} is not mirrored"),
                );
            }
        }
    }

    fn audit_parent_child_links(&self, report: &mut ConsistencyReport) {
        // Parent lists child, but the child links to neither side
        for &id in &self.parent_order {
            let parent = &self.parents[&id];
            for child in parent.borrow().children() {
                let Some(child_id) = self.child_id(&child) else {
                    report.push(
                        id,
                        None,
                        format!(
                            "listed child {} is not registered in the store",
                            child.borrow().name()
                        ),
                    );
                    continue;
                };

                let child = child.borrow();
                let linked_back = Rc::ptr_eq(&child.parent1(), parent)
                    || Rc::ptr_eq(&child.parent2(), parent);
                if !linked_back {
                    report.push(
                        id,
                        Some(child_id),
                        format!("listed child {child_id} does not link back to this parent"),
                    );
                }
            }
        }

        // Child links to parent, but the parent does not list the child
        for &id in &self.child_order {
            let child = &self.children[&id];
            for parent in [child.borrow().parent1(), child.borrow().parent2()] {
                let Some(parent_id) = self.parent_id(&parent) else {
                    report.push(
                        id,
                        None,
                        format!(
                            "parent {} is not registered in the store",
                            parent.borrow().name()
                        ),
                    );
                    continue;
                };

                let listed = parent
                    .borrow()
                    .children()
                    .iter()
                    .any(|c| Rc::ptr_eq(c, child));
                if !listed {
                    report.push(
                        id,
                        Some(parent_id),
                        format!("parent {parent_id} does not list this child"),
                    );
                }
            }
        }
    }

    fn audit_siblings(&self, report: &mut ConsistencyReport) {
        let lists = |a: &ChildRef, b: &ChildRef| {
            a.borrow().siblings().iter().any(|s| Rc::ptr_eq(s, b))
        };

        // Dangling sibling handles
        for &id in &self.child_order {
            let child = &self.children[&id];
            for sibling in child.borrow().siblings() {
                if self.child_id(&sibling).is_none() {
                    report.push(
                        id,
                        None,
                        format!(
                            "sibling {} is not registered in the store",
                            sibling.borrow().name()
                        ),
                    );
                }
            }
        }

        // One-way links between registered children
        for (&a_id, &b_id) in self.child_order.iter().tuple_combinations() {
            let a = &self.children[&a_id];
            let b = &self.children[&b_id];
            let a_lists_b = lists(a, b);
            let b_lists_a = lists(b, a);
            if a_lists_b == b_lists_a {
                continue;
            }

            let (subject, counterpart) = if a_lists_b { (a_id, b_id) } else { (b_id, a_id) };
            report.push(
                subject,
                Some(counterpart),
                format!("sibling link to {counterpart} is not mirrored"),
            );
        }
    }
}
