//! ON-VALUE combinator - applies a string rule to a [`FieldInput`]
//!
//! Lets the `str` rules from [`validators`](crate::validators) run against
//! the `{ name, value }` record a chain is bound to. Failures are tagged with
//! the input's field name.

use crate::foundation::{Validate, ValidationError};
use crate::input::FieldInput;

// ============================================================================
// ON-VALUE COMBINATOR
// ============================================================================

/// Validates the `value` of a [`FieldInput`] with an inner `str` rule.
///
/// # Examples
///
/// ```rust,ignore
/// use grok_validator::prelude::*;
///
/// let rule = min_length(3).on_value();
/// let err = rule.validate(&FieldInput::new("ticketNumber", "12")).unwrap_err();
/// assert_eq!(err.field(), Some("ticketNumber"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OnValue<V> {
    validator: V,
}

impl<V> OnValue<V> {
    pub fn new(validator: V) -> Self {
        Self { validator }
    }

    /// Returns a reference to the inner rule.
    pub fn validator(&self) -> &V {
        &self.validator
    }
}

impl<V> Validate for OnValue<V>
where
    V: Validate<Input = str>,
{
    type Input = FieldInput;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        self.validator.validate(input.value()).map_err(|err| {
            if err.field.is_some() {
                err
            } else {
                err.with_field(input.name.clone())
            }
        })
    }
}

/// Creates an `OnValue` combinator.
pub fn on_value<V>(validator: V) -> OnValue<V>
where
    V: Validate<Input = str>,
{
    OnValue::new(validator)
}
