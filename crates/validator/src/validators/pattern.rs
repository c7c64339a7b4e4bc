//! Pattern rules

use crate::foundation::ValidationError;
use regex::Regex;
use std::sync::LazyLock;

// Empty input matches; presence is `Required`'s job.
static WHOLE_NUMBER_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]*$").unwrap());

crate::validator! {
    /// Validates that a string contains only the ASCII digits `0-9`.
    ///
    /// Signs, separators and non-ASCII digits are rejected.
    pub WholeNumber for str;
    rule(input) { WHOLE_NUMBER_REGEX.is_match(input) }
    error(input) { ValidationError::whole_number().with_param("actual", input.to_owned()) }
    fn whole_number();
}
