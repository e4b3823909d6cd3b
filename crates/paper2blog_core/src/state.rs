use crate::view_model::{AppViewModel, PhaseView};
use crate::{
    FieldValidity, FormState, PacingSchedule, ProgressState, SubmissionRequest, SubmitError,
    ValidationError,
};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    /// Walking the cosmetic pacing schedule; `request` is sent after the last step.
    Submitting {
        step: usize,
        request: SubmissionRequest,
    },
    /// The `/process` call is in flight.
    AwaitingResponse { source_url: String },
}

/// How the most recent submit attempt ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success,
    InvalidInput(ValidationError),
    Failed(SubmitError),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    form: FormState,
    phase: SubmitPhase,
    progress: ProgressState,
    error_banner: Option<String>,
    pdf_validity: FieldValidity,
    last_outcome: Option<Outcome>,
    schedule: PacingSchedule,
    autosave: bool,
    submissions: u64,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_schedule(mut self, schedule: PacingSchedule) -> Self {
        self.schedule = schedule;
        self
    }

    /// Every field edit schedules a debounced save when enabled.
    pub fn with_autosave(mut self, enabled: bool) -> Self {
        self.autosave = enabled;
        self
    }

    pub fn view(&self) -> AppViewModel {
        let phase = match self.phase {
            SubmitPhase::Idle => PhaseView::Idle,
            SubmitPhase::Submitting { .. } => PhaseView::Submitting,
            SubmitPhase::AwaitingResponse { .. } => PhaseView::AwaitingResponse,
        };
        AppViewModel {
            phase,
            submit_enabled: phase == PhaseView::Idle,
            error: self.error_banner.clone(),
            progress: self.progress.clone(),
            pdf_validity: self.pdf_validity,
            knowledge_slots: self.form.knowledge_urls().to_vec(),
            can_remove_knowledge: self.form.knowledge_urls().len() > 1,
            last_outcome: self.last_outcome.clone(),
            submissions: self.submissions,
            dirty: self.dirty,
        }
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn phase(&self) -> &SubmitPhase {
        &self.phase
    }

    pub fn is_idle(&self) -> bool {
        self.phase == SubmitPhase::Idle
    }

    pub fn autosave(&self) -> bool {
        self.autosave
    }

    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn form_mut(&mut self) -> &mut FormState {
        &mut self.form
    }

    pub(crate) fn schedule(&self) -> &PacingSchedule {
        &self.schedule
    }

    pub(crate) fn set_phase(&mut self, phase: SubmitPhase) {
        self.phase = phase;
        self.dirty = true;
    }

    pub(crate) fn take_phase(&mut self) -> SubmitPhase {
        std::mem::take(&mut self.phase)
    }

    /// Puts back a phase taken by `take_phase` without marking a change.
    pub(crate) fn restore_phase(&mut self, phase: SubmitPhase) {
        self.phase = phase;
    }

    pub(crate) fn progress_mut(&mut self) -> &mut ProgressState {
        self.dirty = true;
        &mut self.progress
    }

    pub(crate) fn set_error(&mut self, message: Option<String>) {
        self.error_banner = message;
        self.dirty = true;
    }

    pub(crate) fn set_pdf_validity(&mut self, validity: FieldValidity) {
        if self.pdf_validity != validity {
            self.pdf_validity = validity;
            self.dirty = true;
        }
    }

    pub(crate) fn set_outcome(&mut self, outcome: Option<Outcome>) {
        self.last_outcome = outcome;
        self.dirty = true;
    }

    pub(crate) fn next_submission(&mut self) -> u64 {
        self.submissions += 1;
        self.submissions
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}
