//! Form settings

use serde::{Deserialize, Serialize};

/// Name of the ticket-number field, also its model key.
pub const TICKET_NUMBER: &str = "ticketNumber";

/// Tunable rules of the ticket form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Minimum number of characters in the ticket number.
    pub min_chars: usize,
    /// Fields that must hold a value before the form can be submitted.
    pub required_fields: Vec<String>,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            min_chars: 3,
            required_fields: vec![TICKET_NUMBER.to_string()],
        }
    }
}
