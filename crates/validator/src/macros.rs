//! Macros for creating rules with minimal boilerplate.
//!
//! - [`validator!`] — struct + `Validate` impl + factory fn
//! - [`compose!`] — AND-chain multiple rules
//!
//! ```rust,ignore
//! use grok_validator::validator;
//! use grok_validator::foundation::ValidationError;
//!
//! validator! {
//!     pub NotBlank for str;
//!     rule(input) { !input.trim().is_empty() }
//!     error(input) { ValidationError::new("not_blank", "must not be blank") }
//!     fn not_blank();
//! }
//! ```

// ============================================================================
// VALIDATOR MACRO
// ============================================================================

/// Creates a complete rule: struct definition, `Validate` implementation,
/// constructor, and factory function.
///
/// Unit rules always derive `Debug, Clone, Copy, PartialEq, Eq, Hash, Default`.
/// Struct rules always derive `Debug, Clone`; add extra derives via
/// `#[derive(...)]`.
///
/// **Unit rule** (zero-sized, no fields):
/// ```rust,ignore
/// validator! {
///     pub Required for str;
///     rule(input) { !input.is_empty() }
///     error(input) { ValidationError::required() }
///     fn required();
/// }
/// ```
///
/// **Struct with fields** (auto `new` from all fields):
/// ```rust,ignore
/// validator! {
///     #[derive(Copy, PartialEq, Eq, Hash)]
///     pub MinLength { min: usize } for str;
///     rule(self, input) { input.encode_utf16().count() >= self.min }
///     error(self, input) { ValidationError::min_length(self.min, input.encode_utf16().count()) }
///     fn min_length(min: usize);
/// }
/// ```
#[macro_export]
macro_rules! validator {
    // ── Unit rule + factory fn ───────────────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty;
        rule($inp:ident) $rule:block
        error($einp:ident) $err:block
        fn $factory:ident();
    ) => {
        $crate::validator! {
            $(#[$meta])*
            $vis $name for $input;
            rule($inp) $rule
            error($einp) $err
        }

        #[must_use]
        $vis const fn $factory() -> $name { $name }
    };

    // ── Unit rule, no factory ────────────────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty;
        rule($inp:ident) $rule:block
        error($einp:ident) $err:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis struct $name;

        impl $crate::foundation::Validate for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(&self, $inp: &Self::Input) -> Result<(), $crate::foundation::ValidationError> {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }
        }
    };

    // ── Struct with fields + auto new + factory fn ───────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $crate::validator! {
            $(#[$meta])*
            $vis $name { $($field: $fty),+ } for $input;
            rule($self_, $inp) $rule
            error($self2, $einp) $err
        }

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    // ── Struct with fields + auto new, no factory ────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $name {
            #[must_use]
            pub fn new($($field: $fty),+) -> Self {
                Self { $($field),+ }
            }
        }

        impl $crate::foundation::Validate for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(&$self_, $inp: &Self::Input) -> Result<(), $crate::foundation::ValidationError> {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }
        }
    };
}

// ============================================================================
// COMPOSE MACRO
// ============================================================================

/// AND-chains rules left to right: `compose!(a, b, c)` is `a.and(b).and(c)`.
///
/// Requires [`ValidateExt`](crate::foundation::ValidateExt) in scope.
#[macro_export]
macro_rules! compose {
    ($first:expr) => {
        $first
    };
    ($first:expr, $($rest:expr),+ $(,)?) => {
        $first$(.and($rest))+
    };
}

#[cfg(test)]
mod tests {
    use crate::foundation::{Validate, ValidateExt, ValidationError};

    validator! {
        /// A test unit rule.
        TestNotBlank for str;
        rule(input) { !input.trim().is_empty() }
        error(input) { ValidationError::new("not_blank", "must not be blank") }
        fn test_not_blank();
    }

    #[test]
    fn test_unit_validator() {
        assert!(TestNotBlank.validate("hello").is_ok());
        assert!(test_not_blank().validate("   ").is_err());
    }

    validator! {
        #[derive(Copy, PartialEq, Eq, Hash)]
        TestMaxLen { max: usize } for str;
        rule(self, input) { input.len() <= self.max }
        error(self, input) {
            ValidationError::new("max_len", format!("at most {} chars, got {}", self.max, input.len()))
        }
        fn test_max_len(max: usize);
    }

    #[test]
    fn test_struct_validator() {
        let v = TestMaxLen::new(3);
        assert!(v.validate("abc").is_ok());
        assert_eq!(
            test_max_len(3).validate("abcd").unwrap_err().message,
            "at most 3 chars, got 4"
        );
    }

    #[test]
    fn test_compose_ands_left_to_right() {
        let v = compose!(test_not_blank(), test_max_len(3));
        assert!(v.validate("abc").is_ok());
        assert_eq!(v.validate(" ").unwrap_err().code, "not_blank");
        assert_eq!(v.validate("abcd").unwrap_err().code, "max_len");
    }
}
