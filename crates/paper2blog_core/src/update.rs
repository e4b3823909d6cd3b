use crate::{
    field_validity, validate_form, AppState, DebounceKey, Effect, Msg, Outcome, RequestFailure,
    SubmissionRequest, SubmissionResult, SubmitError, SubmitPhase, AUTOSAVE_DEBOUNCE, DONE_LABEL,
    PDF_VALIDATION_DEBOUNCE, PROCESSING_FAILED_MESSAGE,
};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::PdfUrlChanged(text) => {
            state.form_mut().set_pdf_url(text);
            state.mark_dirty();
            let mut effects = vec![Effect::Debounce {
                key: DebounceKey::PdfValidation,
                wait: PDF_VALIDATION_DEBOUNCE,
            }];
            effects.extend(autosave_effects(&state));
            effects
        }
        Msg::GitUrlChanged(text) => {
            state.form_mut().set_git_url(text);
            state.mark_dirty();
            autosave_effects(&state)
        }
        Msg::KnowledgeUrlChanged { index, value } => {
            if state.form_mut().set_knowledge_url(index, value) {
                state.mark_dirty();
                autosave_effects(&state)
            } else {
                Vec::new()
            }
        }
        Msg::AddKnowledgeField => {
            state.form_mut().add_knowledge_field();
            state.mark_dirty();
            Vec::new()
        }
        Msg::RemoveKnowledgeField(index) => {
            if state.form_mut().remove_knowledge_field(index) {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::FormRestored(saved) => {
            state.form_mut().apply_saved(saved);
            state.mark_dirty();
            Vec::new()
        }
        Msg::DebounceElapsed(DebounceKey::PdfValidation) => {
            let validity = field_validity(state.form().pdf_url());
            state.set_pdf_validity(validity);
            Vec::new()
        }
        Msg::DebounceElapsed(DebounceKey::AutoSave) => {
            if state.autosave() {
                vec![Effect::SaveForm(state.form().snapshot())]
            } else {
                Vec::new()
            }
        }
        Msg::SubmitClicked => begin_submit(&mut state),
        Msg::PacingElapsed { step } => advance_pacing(&mut state, step),
        Msg::ProcessFinished(result) => finish_request(&mut state, result),
        Msg::RenderDue { html, source_url } => match html.filter(|html| !html.is_empty()) {
            Some(html) => vec![Effect::RenderResult { html, source_url }],
            None => {
                fail(&mut state, SubmitError::EmptyResult, false);
                Vec::new()
            }
        },
        Msg::RenderFailed(message) => {
            fail(&mut state, SubmitError::Render(message), false);
            Vec::new()
        }
    };

    (state, effects)
}

fn autosave_effects(state: &AppState) -> Vec<Effect> {
    if state.autosave() {
        vec![Effect::Debounce {
            key: DebounceKey::AutoSave,
            wait: AUTOSAVE_DEBOUNCE,
        }]
    } else {
        Vec::new()
    }
}

fn begin_submit(state: &mut AppState) -> Vec<Effect> {
    // A submit while one is running is what the disabled button prevents.
    if !state.is_idle() {
        return Vec::new();
    }

    if let Err(err) = validate_form(state.form()) {
        state.set_error(Some(err.to_string()));
        state.set_outcome(Some(Outcome::InvalidInput(err)));
        return Vec::new();
    }

    let request = state.form().to_request();
    state.next_submission();
    state.set_error(None);
    state.set_outcome(None);
    state.progress_mut().show();
    enter_step(state, 0, request)
}

fn advance_pacing(state: &mut AppState, step: usize) -> Vec<Effect> {
    match state.take_phase() {
        SubmitPhase::Submitting {
            step: current,
            request,
        } if current == step => enter_step(state, step + 1, request),
        other => {
            // Stale timer; leave the phase untouched.
            state.restore_phase(other);
            Vec::new()
        }
    }
}

fn enter_step(state: &mut AppState, step: usize, request: SubmissionRequest) -> Vec<Effect> {
    match state.schedule().step(step).copied() {
        Some(pacing) => {
            state
                .progress_mut()
                .update(pacing.percentage, pacing.label);
            state.set_phase(SubmitPhase::Submitting { step, request });
            vec![Effect::Pace {
                step,
                hold: pacing.hold,
            }]
        }
        None => {
            state.set_phase(SubmitPhase::AwaitingResponse {
                source_url: request.pdf_url.clone(),
            });
            vec![Effect::ProcessPaper(request)]
        }
    }
}

fn finish_request(
    state: &mut AppState,
    result: Result<SubmissionResult, RequestFailure>,
) -> Vec<Effect> {
    let source_url = match state.take_phase() {
        SubmitPhase::AwaitingResponse { source_url } => source_url,
        other => {
            state.restore_phase(other);
            return Vec::new();
        }
    };
    // Back to idle on every path; this is what re-enables the submit control.
    state.set_phase(SubmitPhase::Idle);

    match result {
        Ok(result) if result.success => {
            state.progress_mut().update(100, DONE_LABEL);
            state.set_outcome(Some(Outcome::Success));
            vec![Effect::ScheduleRender {
                html: result.blog_html,
                source_url,
                delay: state.schedule().render_delay(),
            }]
        }
        Ok(result) => {
            let message = result
                .error
                .filter(|message| !message.trim().is_empty())
                .unwrap_or_else(|| PROCESSING_FAILED_MESSAGE.to_string());
            fail(state, SubmitError::BackendReportedFailure(message), true);
            Vec::new()
        }
        Err(failure) => {
            fail(state, SubmitError::Request(failure), true);
            Vec::new()
        }
    }
}

fn fail(state: &mut AppState, err: SubmitError, hide_progress: bool) {
    state.set_error(Some(err.user_message()));
    if hide_progress {
        state.progress_mut().hide();
    }
    state.set_outcome(Some(Outcome::Failed(err)));
}
