use grok_validator::foundation::ValidationErrors;

/// Errors reported by [`TicketForm`](crate::TicketForm).
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum FormError {
    /// A change event or config entry named a field the form does not have.
    #[error("unknown field '{0}'")]
    UnknownField(String),

    /// Submit was attempted while fields are invalid or missing.
    #[error("form cannot be submitted. {0}")]
    Invalid(ValidationErrors),
}
