use std::time::Duration;

use paper2blog_core::{
    update, AppState, DebounceKey, Effect, FieldValidity, Msg, SavedFormData,
};
use pretty_assertions::assert_eq;

fn init_logging() {
    paper2blog_logging::initialize_for_tests();
}

#[test]
fn knowledge_slots_never_drop_below_one() {
    init_logging();
    let state = AppState::new();
    assert_eq!(state.view().knowledge_slots.len(), 1);
    assert!(!state.view().can_remove_knowledge);

    let (mut state, _) = update(state, Msg::RemoveKnowledgeField(0));
    assert_eq!(state.view().knowledge_slots.len(), 1);
    assert!(!state.consume_dirty());

    let (state, _) = update(state, Msg::AddKnowledgeField);
    let (state, _) = update(state, Msg::AddKnowledgeField);
    assert_eq!(state.view().knowledge_slots.len(), 3);
    assert!(state.view().can_remove_knowledge);

    let (state, _) = update(state, Msg::RemoveKnowledgeField(0));
    let (state, _) = update(state, Msg::RemoveKnowledgeField(0));
    let (state, _) = update(state, Msg::RemoveKnowledgeField(0));
    assert_eq!(state.view().knowledge_slots, vec![String::new()]);
}

#[test]
fn pdf_edit_schedules_debounced_validation() {
    init_logging();
    let (state, effects) = update(AppState::new(), Msg::PdfUrlChanged("htt".to_string()));
    assert_eq!(
        effects,
        vec![Effect::Debounce {
            key: DebounceKey::PdfValidation,
            wait: Duration::from_millis(300),
        }]
    );
    // Nothing is marked until the timer fires.
    assert_eq!(state.view().pdf_validity, FieldValidity::Neutral);

    let (state, _) = update(state, Msg::DebounceElapsed(DebounceKey::PdfValidation));
    assert_eq!(state.view().pdf_validity, FieldValidity::Invalid);

    let (state, _) = update(
        state,
        Msg::PdfUrlChanged("https://arxiv.org/pdf/1".to_string()),
    );
    let (state, _) = update(state, Msg::DebounceElapsed(DebounceKey::PdfValidation));
    assert_eq!(state.view().pdf_validity, FieldValidity::Valid);

    let (state, _) = update(state, Msg::PdfUrlChanged(String::new()));
    let (state, _) = update(state, Msg::DebounceElapsed(DebounceKey::PdfValidation));
    assert_eq!(state.view().pdf_validity, FieldValidity::Neutral);
}

#[test]
fn autosave_is_off_by_default() {
    init_logging();
    let (state, effects) = update(AppState::new(), Msg::GitUrlChanged("x".to_string()));
    assert!(effects.is_empty());
    let (_state, effects) = update(state, Msg::DebounceElapsed(DebounceKey::AutoSave));
    assert!(effects.is_empty());
}

#[test]
fn autosave_saves_raw_snapshot() {
    init_logging();
    let state = AppState::new().with_autosave(true);
    let (state, effects) = update(state, Msg::GitUrlChanged("https://g.example/r".to_string()));
    assert_eq!(
        effects,
        vec![Effect::Debounce {
            key: DebounceKey::AutoSave,
            wait: Duration::from_millis(1000),
        }]
    );

    let (state, _) = update(state, Msg::AddKnowledgeField);
    let (state, effects) = update(
        state,
        Msg::KnowledgeUrlChanged {
            index: 1,
            value: "https://kb.example".to_string(),
        },
    );
    assert_eq!(effects.len(), 1);

    let (_state, effects) = update(state, Msg::DebounceElapsed(DebounceKey::AutoSave));
    assert_eq!(
        effects,
        vec![Effect::SaveForm(SavedFormData {
            pdf_url: String::new(),
            git_url: "https://g.example/r".to_string(),
            knowledge_urls: vec![String::new(), "https://kb.example".to_string()],
        })]
    );
}

#[test]
fn edit_of_missing_slot_is_ignored() {
    init_logging();
    let (mut state, effects) = update(
        AppState::new().with_autosave(true),
        Msg::KnowledgeUrlChanged {
            index: 4,
            value: "https://a.example".to_string(),
        },
    );
    assert!(effects.is_empty());
    assert!(!state.consume_dirty());
}

#[test]
fn restored_form_feeds_next_submission() {
    init_logging();
    let (state, _) = update(
        AppState::new(),
        Msg::FormRestored(SavedFormData {
            pdf_url: "https://x.org/a.pdf".to_string(),
            git_url: String::new(),
            knowledge_urls: vec!["https://kb.example".to_string()],
        }),
    );
    assert_eq!(state.form().pdf_url(), "https://x.org/a.pdf");
    assert_eq!(state.view().knowledge_slots, vec!["https://kb.example"]);

    let (_state, effects) = update(state, Msg::SubmitClicked);
    assert!(matches!(effects.as_slice(), [Effect::Pace { step: 0, .. }]));
}
