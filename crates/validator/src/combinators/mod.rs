//! Rule combinators
//!
//! - [`And`] / [`and`] - both rules must pass
//! - [`Or`] / [`or`] - at least one rule must pass
//! - [`Not`] / [`not`] - inverts a rule
//! - [`OnValue`] / [`on_value`] - runs a `str` rule on a field input's value

pub mod and;
pub mod field;
pub mod not;
pub mod or;

pub use and::{And, and};
pub use field::{OnValue, on_value};
pub use not::{Not, not};
pub use or::{Or, or};
