use std::time::Duration;

use crate::{SavedFormData, SubmissionRequest};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// (Re)arm the named debounce timer; answer with `Msg::DebounceElapsed`.
    Debounce { key: DebounceKey, wait: Duration },
    SaveForm(SavedFormData),
    /// Sleep for `hold`, then answer with `Msg::PacingElapsed { step }`.
    Pace { step: usize, hold: Duration },
    /// Issue the one `/process` call; answer with `Msg::ProcessFinished`.
    ProcessPaper(SubmissionRequest),
    /// Sleep for `delay`, then answer with `Msg::RenderDue`.
    ScheduleRender {
        html: Option<String>,
        source_url: String,
        delay: Duration,
    },
    /// Write the HTML verbatim to the display surface.
    RenderResult { html: String, source_url: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DebounceKey {
    PdfValidation,
    AutoSave,
}
