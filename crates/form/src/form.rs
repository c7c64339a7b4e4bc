//! Ticket-number form state
//!
//! The form keeps three maps keyed by field name:
//!
//! - the **model**: what the user typed, free to be invalid
//! - the **errors**: `None` while a field is valid, the failing rule otherwise
//! - the **touched** flags: set once a field has received a change
//!
//! Every field starts empty, valid and untouched.

use std::cell::RefCell;

use grok_validator::foundation::{ValidateExt, ValidationError, ValidationErrors, ValidationResult};
use grok_validator::validators::{min_length, required, whole_number};
use grok_validator::{FieldInput, chain};
use indexmap::IndexMap;

use crate::config::{FormConfig, TICKET_NUMBER};
use crate::error::FormError;

/// Field name → current value.
pub type FormModel = IndexMap<String, String>;

/// Field name → failing rule, `None` when the field is valid.
pub type FieldErrors = IndexMap<String, Option<ValidationError>>;

/// Field name → whether the field has been changed.
pub type Touched = IndexMap<String, bool>;

const FIELDS: &[&str] = &[TICKET_NUMBER];

/// Headless state of the ticket-number entry form.
#[derive(Debug, Clone)]
pub struct TicketForm {
    config: FormConfig,
    model: FormModel,
    errors: FieldErrors,
    touched: Touched,
}

impl TicketForm {
    /// Creates the form with default settings.
    pub fn new() -> Self {
        Self::blank(FormConfig::default())
    }

    /// Creates the form, rejecting required fields the form does not have.
    pub fn with_config(config: FormConfig) -> Result<Self, FormError> {
        if let Some(unknown) = config
            .required_fields
            .iter()
            .find(|name| !FIELDS.contains(&name.as_str()))
        {
            return Err(FormError::UnknownField(unknown.clone()));
        }
        Ok(Self::blank(config))
    }

    fn blank(config: FormConfig) -> Self {
        Self {
            config,
            model: FIELDS.iter().map(|f| ((*f).to_string(), String::new())).collect(),
            errors: FIELDS.iter().map(|f| ((*f).to_string(), None)).collect(),
            touched: FIELDS.iter().map(|f| ((*f).to_string(), false)).collect(),
        }
    }

    /// Stores the input's value in the model and flags the field as touched.
    pub fn handle_change(&mut self, input: &FieldInput) -> Result<(), FormError> {
        let value = self
            .model
            .get_mut(input.name())
            .ok_or_else(|| FormError::UnknownField(input.name.clone()))?;
        value.clone_from(&input.value);
        self.touched.insert(input.name.clone(), true);
        Ok(())
    }

    /// Handles a change event: stores the value, then validates it.
    ///
    /// Each rule records its outcome in the field's error entry as it runs.
    /// Rules run newest first, so `required` is checked before the length,
    /// and the length before the digits; the first failure stops the chain
    /// and its message is the one left in place.
    pub fn on_change(&mut self, input: FieldInput) -> Result<bool, FormError> {
        self.handle_change(&input)?;

        let errors = RefCell::new(std::mem::take(&mut self.errors));
        let record = |input: &FieldInput, result: ValidationResult<()>| {
            errors
                .borrow_mut()
                .insert(input.name.clone(), result.err());
        };

        let name = input.name.clone();
        let passed = chain(input)
            .check_rule(whole_number().on_value(), record)
            .check_rule(min_length(self.config.min_chars).on_value(), record)
            .check_rule(required().on_value(), record)
            .validate();

        self.errors = errors.into_inner();
        tracing::debug!(
            field = %name,
            passed,
            error = self.error(&name).unwrap_or_default(),
            "field validated"
        );
        Ok(passed)
    }

    /// `true` when no field has a recorded error.
    pub fn all_fields_valid(&self) -> bool {
        self.errors.values().all(Option::is_none)
    }

    /// `true` when every required field holds a value.
    pub fn required_fields_filled(&self) -> bool {
        self.config
            .required_fields
            .iter()
            .all(|name| self.model.get(name).is_some_and(|v| !v.is_empty()))
    }

    /// Whether the form may be submitted.
    pub fn is_valid(&self) -> bool {
        self.required_fields_filled() && self.all_fields_valid()
    }

    /// Returns the model when the form is valid.
    ///
    /// Otherwise lists every recorded field error, plus a `required` error for
    /// each required field that is still empty without one.
    pub fn submit(&self) -> Result<FormModel, FormError> {
        if self.is_valid() {
            tracing::info!(fields = self.model.len(), "form submitted");
            return Ok(self.model.clone());
        }

        let mut problems: ValidationErrors = self.errors.values().flatten().cloned().collect();
        for name in &self.config.required_fields {
            let empty = self.model.get(name).is_none_or(String::is_empty);
            if empty && problems.for_field(name).is_none() {
                problems.add(ValidationError::required().with_field(name.clone()));
            }
        }
        tracing::debug!(errors = problems.len(), "submit rejected");
        Err(FormError::Invalid(problems))
    }

    /// Current value of a field.
    pub fn value(&self, name: &str) -> Option<&str> {
        self.model.get(name).map(String::as_str)
    }

    /// Error message of a field, `None` when valid or unknown.
    pub fn error(&self, name: &str) -> Option<&str> {
        self.errors
            .get(name)
            .and_then(Option::as_ref)
            .map(|e| e.message.as_ref())
    }

    pub fn is_touched(&self, name: &str) -> bool {
        self.touched.get(name).copied().unwrap_or(false)
    }

    pub fn model(&self) -> &FormModel {
        &self.model
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }
}

impl Default for TicketForm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ticket(value: &str) -> FieldInput {
        FieldInput::new(TICKET_NUMBER, value)
    }

    #[test]
    fn test_initial_state() {
        let form = TicketForm::new();
        assert_eq!(form.value(TICKET_NUMBER), Some(""));
        assert_eq!(form.error(TICKET_NUMBER), None);
        assert!(!form.is_touched(TICKET_NUMBER));
        assert!(form.all_fields_valid());
        assert!(!form.required_fields_filled());
        assert!(!form.is_valid());
    }

    #[test]
    fn test_handle_change_marks_touched_without_validating() {
        let mut form = TicketForm::new();
        form.handle_change(&ticket("x")).unwrap();
        assert_eq!(form.value(TICKET_NUMBER), Some("x"));
        assert!(form.is_touched(TICKET_NUMBER));
        assert_eq!(form.error(TICKET_NUMBER), None);
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let mut form = TicketForm::new();
        let err = form.on_change(FieldInput::new("email", "a@b")).unwrap_err();
        assert!(matches!(err, FormError::UnknownField(ref name) if name == "email"));
        assert!(!form.is_touched("email"));
    }

    #[test]
    fn test_required_runs_before_length() {
        let mut form = TicketForm::new();
        assert!(!form.on_change(ticket("")).unwrap());
        assert_eq!(form.error(TICKET_NUMBER), Some("Field is required"));
    }

    #[test]
    fn test_length_runs_before_digits() {
        let mut form = TicketForm::new();
        assert!(!form.on_change(ticket("1a")).unwrap());
        assert_eq!(
            form.error(TICKET_NUMBER),
            Some("Field must be longer than 3 characters")
        );
    }

    #[test]
    fn test_valid_input_clears_error() {
        let mut form = TicketForm::new();
        form.on_change(ticket("12a")).unwrap();
        assert_eq!(form.error(TICKET_NUMBER), Some("Field must be a whole number"));

        assert!(form.on_change(ticket("123")).unwrap());
        assert_eq!(form.error(TICKET_NUMBER), None);
        assert!(form.is_valid());
        assert_eq!(form.submit().unwrap().get(TICKET_NUMBER).map(String::as_str), Some("123"));
    }

    #[test]
    fn test_submit_untouched_form_reports_required() {
        match TicketForm::new().submit() {
            Err(FormError::Invalid(problems)) => {
                assert_eq!(problems.len(), 1);
                assert_eq!(problems.errors()[0].code, "required");
                assert_eq!(problems.errors()[0].field(), Some(TICKET_NUMBER));
            }
            other => panic!("expected Invalid, got {other:?}"),
        }
    }

    #[test]
    fn test_with_config_rejects_unknown_required_field() {
        let config = FormConfig {
            required_fields: vec!["email".to_string()],
            ..FormConfig::default()
        };
        assert!(matches!(
            TicketForm::with_config(config),
            Err(FormError::UnknownField(_))
        ));
    }
}
