use std::fmt;

/// Form inputs that can fail validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    PdfUrl,
    GitUrl,
    KnowledgeUrl,
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormField::PdfUrl => write!(f, "PDF"),
            FormField::GitUrl => write!(f, "git repository"),
            FormField::KnowledgeUrl => write!(f, "knowledge base"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("please enter a {0} URL")]
    MissingField(FormField),
    #[error("invalid {field} URL: {value}")]
    InvalidUrl { field: FormField, value: String },
}

impl ValidationError {
    pub fn field(&self) -> FormField {
        match self {
            ValidationError::MissingField(field) => *field,
            ValidationError::InvalidUrl { field, .. } => *field,
        }
    }
}

/// Transport-level failure reported back by the platform after the one
/// `/process` call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RequestFailure {
    #[error("HTTP error! status: {0}")]
    Http(u16),
    #[error("network error: {0}")]
    Network(String),
    #[error("invalid response body: {0}")]
    Parse(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Request(#[from] RequestFailure),
    #[error("{0}")]
    BackendReportedFailure(String),
    #[error("no analysis result was generated")]
    EmptyResult,
    #[error("could not display the result: {0}")]
    Render(String),
}

impl SubmitError {
    /// Message shown in the error banner; falls back to the generic text
    /// when the error carries nothing printable.
    pub fn user_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            crate::GENERIC_FAILURE_MESSAGE.to_string()
        } else {
            message
        }
    }
}
