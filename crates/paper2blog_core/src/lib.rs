//! Paper2blog core: pure submit state machine, form model and validation.
mod debounce;
mod effect;
mod error;
mod form;
mod msg;
mod pacing;
mod progress;
mod state;
mod update;
mod validate;
mod view_model;

pub use debounce::Debouncer;
pub use effect::{DebounceKey, Effect};
pub use error::{FormField, RequestFailure, SubmitError, ValidationError};
pub use form::{FormState, SavedFormData, SubmissionRequest, SubmissionResult};
pub use msg::Msg;
pub use pacing::{
    PacingSchedule, PacingStep, AUTOSAVE_DEBOUNCE, DONE_LABEL, GENERIC_FAILURE_MESSAGE,
    PDF_VALIDATION_DEBOUNCE, PROCESSING_FAILED_MESSAGE,
};
pub use progress::ProgressState;
pub use state::{AppState, Outcome, SubmitPhase};
pub use update::update;
pub use validate::{
    field_validity, is_valid_pdf_url, is_valid_url, validate_form, validate_submission,
    FieldValidity,
};
pub use view_model::{AppViewModel, PhaseView};
