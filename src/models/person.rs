//! Person entity model
//!
//! This module contains the core Person entity, a plain value holder for
//! identity attributes. A Person owns nothing and references nothing; the
//! relational entities `Parent` and `Child` embed one by value.

use super::traits::PersonLike;

/// Core Person entity with identity attributes
///
/// Both fields are unconstrained: names may be empty and ages may be
/// negative. The model performs no validation anywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    name: String,
    age: i32,
}

impl Person {
    /// Create a new Person with the given attributes
    #[must_use]
    pub fn new(name: String, age: i32) -> Self {
        Self { name, age }
    }
}

impl PersonLike for Person {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }

    fn age(&self) -> i32 {
        self.age
    }

    fn set_age(&mut self, age: i32) {
        self.age = age;
    }
}
