use std::collections::{HashMap, VecDeque};
use std::time::{Duration, Instant};

use paper2blog_core::{
    update, AppState, AppViewModel, DebounceKey, Debouncer, Effect, Msg, Outcome,
};
use paper2blog_engine::{DisplaySurface, FormStore, PaperApi};
use paper2blog_logging::{form_debug, form_error, form_info, form_warn};

use crate::mapping::{
    to_process_request, to_request_failure, to_saved_form, to_stored_form, to_submission_result,
};
use crate::view::{render, UiCommand, View};

/// Drives the pure submit state machine: one message at a time, effects run
/// in order, every suspension (pacing holds, the `/process` call, render
/// delay) awaited before the next message is handled.
pub struct SubmitController<V, S> {
    state: AppState,
    api: Box<dyn PaperApi>,
    view: V,
    surface: S,
    store: Option<FormStore>,
    timers: HashMap<DebounceKey, Debouncer<()>>,
    queue: VecDeque<Msg>,
    rendered: Option<AppViewModel>,
}

impl<V: View, S: DisplaySurface> SubmitController<V, S> {
    pub fn new(state: AppState, api: Box<dyn PaperApi>, view: V, surface: S) -> Self {
        let mut controller = Self {
            state,
            api,
            view,
            surface,
            store: None,
            timers: HashMap::new(),
            queue: VecDeque::new(),
            rendered: None,
        };
        controller.render_view();
        controller
    }

    pub fn with_store(mut self, store: FormStore) -> Self {
        self.store = Some(store);
        self
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Loads the cached form, if a store is attached and holds anything.
    pub async fn restore_saved(&mut self) -> bool {
        let Some(stored) = self.store.as_ref().and_then(FormStore::restore) else {
            return false;
        };
        form_info!("Restoring saved form data");
        self.dispatch(Msg::FormRestored(to_saved_form(stored))).await;
        true
    }

    pub async fn dispatch(&mut self, msg: Msg) {
        self.queue.push_back(msg);
        self.drain().await;
    }

    /// Waits out pending debounce timers so their messages get handled.
    pub async fn settle(&mut self) {
        while let Some(deadline) = self.timers.values().filter_map(Debouncer::deadline).min() {
            tokio::time::sleep_until(tokio::time::Instant::from_std(deadline)).await;
            self.fire_due_timers(now());
            self.drain().await;
        }
    }

    async fn drain(&mut self) {
        while let Some(msg) = self.queue.pop_front() {
            let effects = self.apply(msg);
            for effect in effects {
                self.run_effect(effect).await;
            }
            self.fire_due_timers(now());
        }
    }

    fn apply(&mut self, msg: Msg) -> Vec<Effect> {
        let submissions_before = self.state.view().submissions;
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let was_dirty = state.consume_dirty();
        self.state = state;

        let view = self.state.view();
        if view.submissions != submissions_before {
            paper2blog_logging::set_submission(view.submissions);
            form_info!("Submission accepted");
        }
        if was_dirty {
            self.render_view();
        }
        effects
    }

    fn render_view(&mut self) {
        let next = self.state.view();
        for command in render(self.rendered.as_ref(), &next) {
            self.view.apply(command);
        }
        self.rendered = Some(next);
    }

    async fn run_effect(&mut self, effect: Effect) {
        match effect {
            Effect::Debounce { key, wait } => {
                self.timers
                    .entry(key)
                    .or_insert_with(|| Debouncer::new(wait))
                    .trigger((), now());
            }
            Effect::SaveForm(saved) => match &self.store {
                Some(store) => {
                    if let Err(err) = store.save(&to_stored_form(saved)) {
                        form_error!("Failed to save form data: {}", err);
                    }
                }
                None => form_debug!("No form store attached; skipping save"),
            },
            Effect::Pace { step, hold } => {
                sleep_unless_zero(hold).await;
                self.queue.push_back(Msg::PacingElapsed { step });
            }
            Effect::ProcessPaper(request) => {
                form_info!(
                    "POST /process pdf_url={} knowledge_urls={}",
                    request.pdf_url,
                    request.knowledge_urls.len()
                );
                let result = self
                    .api
                    .process_paper(&to_process_request(request))
                    .await
                    .map(to_submission_result)
                    .map_err(|err| {
                        form_error!("Processing error: {}", err);
                        to_request_failure(err)
                    });
                if let Ok(result) = &result {
                    if !result.success {
                        form_warn!("Backend reported failure: {:?}", result.error);
                    }
                }
                self.queue.push_back(Msg::ProcessFinished(result));
            }
            Effect::ScheduleRender {
                html,
                source_url,
                delay,
            } => {
                sleep_unless_zero(delay).await;
                self.queue.push_back(Msg::RenderDue { html, source_url });
            }
            Effect::RenderResult { html, source_url } => {
                match self.surface.show_html(&html, &source_url) {
                    Ok(location) => self.view.apply(UiCommand::ShowResult { location }),
                    Err(err) => {
                        form_error!("Failed to display result: {}", err);
                        self.queue.push_back(Msg::RenderFailed(err.to_string()));
                    }
                }
            }
        }
    }

    fn fire_due_timers(&mut self, now: Instant) {
        let mut due: Vec<DebounceKey> = self
            .timers
            .iter_mut()
            .filter_map(|(key, debouncer)| debouncer.poll(now).map(|()| *key))
            .collect();
        // Validation before save when both fire together.
        due.sort_by_key(|key| matches!(key, DebounceKey::AutoSave));
        self.queue
            .extend(due.into_iter().map(Msg::DebounceElapsed));
    }

    /// True when the last submission ended with its result on the display surface.
    pub fn succeeded(&self) -> bool {
        matches!(self.state.view().last_outcome, Some(Outcome::Success))
    }
}

/// Debounce deadlines follow the tokio clock so paused test time drives them.
fn now() -> Instant {
    tokio::time::Instant::now().into_std()
}

async fn sleep_unless_zero(duration: Duration) {
    if !duration.is_zero() {
        tokio::time::sleep(duration).await;
    }
}
