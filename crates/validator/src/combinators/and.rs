//! AND combinator - logical conjunction of rules
//!
//! Both rules must pass for the combined rule to succeed. The left rule
//! runs first; the right rule is skipped when the left one fails.

use crate::foundation::{Validate, ValidationError};

/// Combines two rules with logical AND.
///
/// Errors are returned from the first failing rule.
///
/// # Examples
///
/// ```rust,ignore
/// use grok_validator::combinators::And;
/// use grok_validator::foundation::Validate;
///
/// let rule = And::new(required(), min_length(3));
/// assert!(rule.validate("123").is_ok());
/// assert!(rule.validate("").is_err()); // fails required
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct And<L, R> {
    pub(crate) left: L,
    pub(crate) right: R,
}

impl<L, R> And<L, R> {
    /// Creates a new `And` combinator.
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    /// Returns a reference to the left rule.
    pub fn left(&self) -> &L {
        &self.left
    }

    /// Returns a reference to the right rule.
    pub fn right(&self) -> &R {
        &self.right
    }
}

impl<L, R> Validate for And<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    type Input = L::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        self.left.validate(input)?;
        self.right.validate(input)?;
        Ok(())
    }
}

/// Creates an `And` combinator from two rules.
pub fn and<L, R>(left: L, right: R) -> And<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    And::new(left, right)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ValidateExt;
    use crate::validators::{min_length, required, whole_number};

    #[test]
    fn test_and_both_pass() {
        let rule = And::new(required(), min_length(3));
        assert!(rule.validate("123").is_ok());
    }

    #[test]
    fn test_and_reports_left_failure_first() {
        let rule = and(required(), min_length(3));
        let err = rule.validate("").unwrap_err();
        assert_eq!(err.code, "required");
    }

    #[test]
    fn test_and_chain() {
        let rule = required().and(min_length(3)).and(whole_number());
        assert!(rule.validate("1234").is_ok());
        assert_eq!(rule.validate("12").unwrap_err().code, "min_length");
        assert_eq!(rule.validate("12a").unwrap_err().code, "whole_number");
    }
}
