//! # grok-validator
//!
//! Validator chaining for form fields, plus a small set of composable typed
//! rules.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use grok_validator::prelude::*;
//!
//! let input = FieldInput::new("ticketNumber", "123");
//!
//! // Boolean predicates, evaluated newest first with short-circuit
//! let ok = chain(input.clone())
//!     .check(|i| whole_number().is_valid(i.value()))
//!     .check(|i| min_length(3).is_valid(i.value()))
//!     .check(|i| required().is_valid(i.value()))
//!     .validate();
//! assert!(ok);
//!
//! // Typed rules compose with .and() / .or() / .not()
//! let ticket = required().and(min_length(3)).and(whole_number());
//! assert!(ticket.validate("12").is_err());
//! ```
//!
//! ## Built-in Rules
//!
//! - [`Required`](validators::Required)
//! - [`MinLength`](validators::MinLength)
//! - [`WholeNumber`](validators::WholeNumber)

pub mod chain;
pub mod combinators;
pub mod foundation;
pub mod input;
mod macros;
pub mod prelude;
pub mod validators;

pub use chain::{ValidationChain, chain};
pub use input::FieldInput;
