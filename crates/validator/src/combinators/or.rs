//! OR combinator - logical disjunction of rules

use crate::foundation::{Validate, ValidationError};

/// Combines two rules with logical OR.
///
/// If the left rule passes the right one is not evaluated. If both fail the
/// combined error nests both failures.
///
/// # Examples
///
/// ```rust,ignore
/// use grok_validator::combinators::Or;
/// use grok_validator::foundation::Validate;
///
/// // Either blank or a number
/// let rule = Or::new(required().not(), whole_number());
/// assert!(rule.validate("").is_ok());
/// assert!(rule.validate("42").is_ok());
/// assert!(rule.validate("4x").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Or<L, R> {
    pub(crate) left: L,
    pub(crate) right: R,
}

impl<L, R> Or<L, R> {
    /// Creates a new `Or` combinator.
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }
}

impl<L, R> Validate for Or<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    type Input = L::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        match self.left.validate(input) {
            Ok(()) => Ok(()),
            Err(left_error) => match self.right.validate(input) {
                Ok(()) => Ok(()),
                Err(right_error) => {
                    Err(ValidationError::new("or_failed", "All alternatives failed")
                        .with_nested(vec![left_error, right_error]))
                }
            },
        }
    }
}

/// Creates an `Or` combinator from two rules.
pub fn or<L, R>(left: L, right: R) -> Or<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    Or::new(left, right)
}
