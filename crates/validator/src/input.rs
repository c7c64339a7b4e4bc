//! The `{ name, value }` record a form field hands to its validators.

use serde::{Deserialize, Serialize};

/// A proposed value for a named form field.
///
/// Built once per change event and never mutated afterwards; every
/// validator in a chain sees the same record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldInput {
    /// Field and model property name, e.g. `ticketNumber`.
    pub name: String,
    /// Proposed value from user input.
    pub value: String,
}

impl FieldInput {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}
