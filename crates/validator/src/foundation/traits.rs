//! Core traits for the validation system
//!
//! This module defines the rule trait every typed validator implements and
//! the extension trait that composes them.

use crate::foundation::ValidationError;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The trait all typed rules implement.
///
/// Rules are generic over the input type and report failure through a
/// structured [`ValidationError`]. A rule can be reduced to the boolean
/// predicate a [`ValidationChain`](crate::chain::ValidationChain) expects with
/// [`Validate::is_valid`].
///
/// # Examples
///
/// ```rust,ignore
/// use grok_validator::foundation::{Validate, ValidationError};
///
/// struct Digits;
///
/// impl Validate for Digits {
///     type Input = str;
///
///     fn validate(&self, input: &str) -> Result<(), ValidationError> {
///         if input.bytes().all(|b| b.is_ascii_digit()) {
///             Ok(())
///         } else {
///             Err(ValidationError::new("digits", "Digits only"))
///         }
///     }
/// }
/// ```
pub trait Validate {
    /// The type of input being validated.
    ///
    /// Use `?Sized` to allow validation of unsized types like `str`.
    type Input: ?Sized;

    /// Validates the input value.
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError>;

    /// Returns `true` when the input passes.
    fn is_valid(&self, input: &Self::Input) -> bool {
        self.validate(input).is_ok()
    }
}

impl<V: Validate + ?Sized> Validate for &V {
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        (**self).validate(input)
    }
}

impl<V: Validate + ?Sized> Validate for Box<V> {
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        (**self).validate(input)
    }
}

// ============================================================================
// VALIDATOR EXTENSION TRAIT
// ============================================================================

/// Combinator methods for every [`Validate`] implementation.
///
/// # Examples
///
/// ```rust,ignore
/// use grok_validator::prelude::*;
///
/// let ticket = required().and(min_length(3)).and(whole_number());
/// assert!(ticket.validate("123").is_ok());
/// assert!(ticket.validate("12").is_err());
/// ```
pub trait ValidateExt: Validate + Sized {
    /// Both rules must pass. Short-circuits on the first failure.
    fn and<V>(self, other: V) -> And<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        And::new(self, other)
    }

    /// At least one rule must pass. Short-circuits on the first success.
    fn or<V>(self, other: V) -> Or<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        Or::new(self, other)
    }

    /// Inverts the rule.
    fn not(self) -> Not<Self> {
        Not::new(self)
    }

    /// Applies a string rule to the `value` of a [`FieldInput`], tagging
    /// failures with the input's `name`.
    ///
    /// [`FieldInput`]: crate::input::FieldInput
    fn on_value(self) -> OnValue<Self>
    where
        Self: Validate<Input = str>,
    {
        OnValue::new(self)
    }
}

impl<T: Validate> ValidateExt for T {}

pub use crate::combinators::and::And;
pub use crate::combinators::field::OnValue;
pub use crate::combinators::not::Not;
pub use crate::combinators::or::Or;

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    struct AlwaysValid;

    impl Validate for AlwaysValid {
        type Input = str;

        fn validate(&self, _input: &Self::Input) -> Result<(), ValidationError> {
            Ok(())
        }
    }

    #[test]
    fn test_is_valid_reduces_result() {
        assert!(AlwaysValid.is_valid("anything"));
        assert!(!AlwaysValid.not().is_valid("anything"));
    }

    #[test]
    fn test_boxed_and_borrowed_rules() {
        let boxed: Box<dyn Validate<Input = str>> = Box::new(AlwaysValid);
        assert!(boxed.validate("x").is_ok());

        fn run<V: Validate<Input = str>>(rule: V) -> bool {
            rule.is_valid("x")
        }
        assert!(run(&AlwaysValid));
    }
}
