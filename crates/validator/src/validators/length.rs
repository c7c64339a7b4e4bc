//! Presence and length rules
//!
//! Length is measured in UTF-16 code units, the unit browser form fields
//! report: `"äöü"` has length 3, `"😀"` has length 2.

use crate::foundation::ValidationError;

// ============================================================================
// REQUIRED
// ============================================================================

crate::validator! {
    /// Validates that a value has been entered.
    pub Required for str;
    rule(input) { !input.is_empty() }
    error(input) { ValidationError::required() }
    fn required();
}

// ============================================================================
// MIN LENGTH
// ============================================================================

crate::validator! {
    /// Validates that a string is at least `min` UTF-16 code units long.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MinLength { min: usize } for str;
    rule(self, input) { utf16_len(input) >= self.min }
    error(self, input) { ValidationError::min_length(self.min, utf16_len(input)) }
    fn min_length(min: usize);
}

fn utf16_len(input: &str) -> usize {
    input.encode_utf16().count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;
    use rstest::rstest;

    #[test]
    fn test_required() {
        assert!(required().validate("1").is_ok());
        let err = required().validate("").unwrap_err();
        assert_eq!(err.message, "Field is required");
    }

    #[test]
    fn test_whitespace_counts_as_entered() {
        assert!(required().validate(" ").is_ok());
    }

    #[rstest]
    #[case("", false)]
    #[case("12", false)]
    #[case("123", true)]
    #[case("1234", true)]
    #[case("äöü", true)]
    #[case("😀", false)]
    #[case("😀😀", true)]
    fn test_min_length(#[case] input: &str, #[case] ok: bool) {
        assert_eq!(min_length(3).validate(input).is_ok(), ok);
    }

    #[test]
    fn test_min_length_error_params() {
        let err = MinLength::new(3).validate("12").unwrap_err();
        assert_eq!(err.message, "Field must be longer than 3 characters");
        assert_eq!(err.param("min"), Some("3"));
        assert_eq!(err.param("actual"), Some("2"));
    }

    #[test]
    fn test_min_length_counts_surrogate_pairs() {
        let err = min_length(3).validate("😀").unwrap_err();
        assert_eq!(err.param("actual"), Some("2"));
    }
}
