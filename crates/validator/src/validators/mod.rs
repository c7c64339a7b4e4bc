//! Built-in rules
//!
//! - **Presence**: [`Required`]
//! - **Length**: [`MinLength`]
//! - **Pattern**: [`WholeNumber`]
//!
//! ```rust,ignore
//! use grok_validator::prelude::*;
//!
//! let ticket_number = required().and(min_length(3)).and(whole_number());
//! ```

pub mod length;
pub mod pattern;

pub use length::{MinLength, Required, min_length, required};
pub use pattern::{WholeNumber, whole_number};
