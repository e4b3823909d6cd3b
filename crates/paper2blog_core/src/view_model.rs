use crate::{FieldValidity, Outcome, ProgressState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PhaseView {
    #[default]
    Idle,
    Submitting,
    AwaitingResponse,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub phase: PhaseView,
    /// Derived from `phase`: only an idle form can be submitted.
    pub submit_enabled: bool,
    pub error: Option<String>,
    pub progress: ProgressState,
    pub pdf_validity: FieldValidity,
    pub knowledge_slots: Vec<String>,
    pub can_remove_knowledge: bool,
    pub last_outcome: Option<Outcome>,
    pub submissions: u64,
    pub dirty: bool,
}
