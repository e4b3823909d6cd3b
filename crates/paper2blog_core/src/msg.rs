use crate::{DebounceKey, RequestFailure, SavedFormData, SubmissionResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the PDF URL field.
    PdfUrlChanged(String),
    /// User edited the git repository URL field.
    GitUrlChanged(String),
    /// User edited one knowledge URL slot.
    KnowledgeUrlChanged { index: usize, value: String },
    /// User clicked "add knowledge URL".
    AddKnowledgeField,
    /// User clicked "remove" on a knowledge URL slot.
    RemoveKnowledgeField(usize),
    /// Cached form values loaded from the form store.
    FormRestored(SavedFormData),
    /// A debounce timer armed by `Effect::Debounce` fired.
    DebounceElapsed(DebounceKey),
    /// User submitted the form.
    SubmitClicked,
    /// The hold of a pacing step has elapsed.
    PacingElapsed { step: usize },
    /// The `/process` call returned.
    ProcessFinished(Result<SubmissionResult, RequestFailure>),
    /// The post-success render delay has elapsed.
    RenderDue {
        html: Option<String>,
        source_url: String,
    },
    /// The display surface refused the result.
    RenderFailed(String),
}
