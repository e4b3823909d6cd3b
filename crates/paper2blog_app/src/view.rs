use paper2blog_core::{AppViewModel, FieldValidity};

/// One setter per named UI role. The controller never touches a rendering
/// surface except through these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiCommand {
    SetSubmitEnabled(bool),
    ShowError(String),
    HideError,
    /// `entering` asks the surface to play its entrance transition.
    ShowProgress { entering: bool },
    HideProgress,
    SetProgress { percentage: u8, label: String },
    MarkPdfField(FieldValidity),
    SetKnowledgeSlots { slots: Vec<String>, removable: bool },
    /// The display surface accepted the result; `location` says where.
    ShowResult { location: String },
}

pub trait View {
    fn apply(&mut self, command: UiCommand);
}

/// Commands that bring a surface showing `previous` up to `next`.
/// With no previous frame every role is set.
pub fn render(previous: Option<&AppViewModel>, next: &AppViewModel) -> Vec<UiCommand> {
    let mut cmds = Vec::new();
    if previous.map_or(true, |prev| prev.submit_enabled != next.submit_enabled) {
        cmds.push(UiCommand::SetSubmitEnabled(next.submit_enabled));
    }

    if previous.map_or(true, |prev| prev.error != next.error) {
        cmds.push(match &next.error {
            Some(message) => UiCommand::ShowError(message.clone()),
            None => UiCommand::HideError,
        });
    }

    let was_visible = previous.is_some_and(|prev| prev.progress.visible);
    if next.progress.visible && !was_visible {
        cmds.push(UiCommand::ShowProgress {
            entering: next.progress.entering,
        });
    }
    if previous.map_or(true, |prev| {
        prev.progress.percentage != next.progress.percentage
            || prev.progress.label != next.progress.label
    }) {
        cmds.push(UiCommand::SetProgress {
            percentage: next.progress.percentage,
            label: next.progress.label.clone(),
        });
    }
    if !next.progress.visible && (was_visible || previous.is_none()) {
        cmds.push(UiCommand::HideProgress);
    }

    if previous.map_or(true, |prev| prev.pdf_validity != next.pdf_validity) {
        cmds.push(UiCommand::MarkPdfField(next.pdf_validity));
    }

    if previous.map_or(true, |prev| {
        prev.knowledge_slots != next.knowledge_slots
            || prev.can_remove_knowledge != next.can_remove_knowledge
    }) {
        cmds.push(UiCommand::SetKnowledgeSlots {
            slots: next.knowledge_slots.clone(),
            removable: next.can_remove_knowledge,
        });
    }

    cmds
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_frame_sets_every_role() {
        let view = AppViewModel {
            submit_enabled: true,
            knowledge_slots: vec![String::new()],
            ..AppViewModel::default()
        };
        let cmds = render(None, &view);
        assert_eq!(
            cmds,
            vec![
                UiCommand::SetSubmitEnabled(true),
                UiCommand::HideError,
                UiCommand::SetProgress {
                    percentage: 0,
                    label: String::new()
                },
                UiCommand::HideProgress,
                UiCommand::MarkPdfField(FieldValidity::Neutral),
                UiCommand::SetKnowledgeSlots {
                    slots: vec![String::new()],
                    removable: false
                },
            ]
        );
    }

    #[test]
    fn unchanged_frame_renders_nothing() {
        let view = AppViewModel::default();
        assert!(render(Some(&view), &view).is_empty());
    }

    #[test]
    fn progress_transitions() {
        let hidden = AppViewModel::default();
        let mut shown = hidden.clone();
        shown.progress.show();
        shown.progress.update(10, "Starting...");

        assert_eq!(
            render(Some(&hidden), &shown),
            vec![
                UiCommand::ShowProgress { entering: true },
                UiCommand::SetProgress {
                    percentage: 10,
                    label: "Starting...".to_string()
                },
            ]
        );

        let mut hidden_again = shown.clone();
        hidden_again.progress.hide();
        assert_eq!(
            render(Some(&shown), &hidden_again),
            vec![UiCommand::HideProgress]
        );
    }
}
