//! Prelude module for convenient imports.
//!
//! ```rust,ignore
//! use grok_validator::prelude::*;
//!
//! let ticket = required().and(min_length(3)).and(whole_number());
//! ```

pub use crate::chain::{ValidationChain, chain};
pub use crate::combinators::{And, Not, OnValue, Or, and, not, on_value, or};
pub use crate::foundation::{Validate, ValidateExt, ValidationError, ValidationErrors};
pub use crate::input::FieldInput;
pub use crate::validators::{
    MinLength, Required, WholeNumber, min_length, required, whole_number,
};
