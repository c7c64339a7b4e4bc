//! # grok-form
//!
//! Headless state for the ticket-number entry form. Each change event builds
//! a fresh [`ValidationChain`](grok_validator::ValidationChain) whose rules
//! record their outcome in the form's per-field error map.
//!
//! ```rust,ignore
//! use grok_form::{TicketForm, TICKET_NUMBER};
//! use grok_validator::FieldInput;
//!
//! let mut form = TicketForm::new();
//! form.on_change(FieldInput::new(TICKET_NUMBER, "12"))?;
//! assert_eq!(form.error(TICKET_NUMBER), Some("Field must be longer than 3 characters"));
//! assert!(!form.is_valid());
//! ```

pub mod config;
pub mod error;
pub mod form;

pub use config::{FormConfig, TICKET_NUMBER};
pub use error::FormError;
pub use form::{FieldErrors, FormModel, TicketForm, Touched};
