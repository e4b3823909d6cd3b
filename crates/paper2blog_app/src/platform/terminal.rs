use indicatif::{ProgressBar, ProgressStyle};
use paper2blog_app::{UiCommand, View};
use paper2blog_core::FieldValidity;
use paper2blog_logging::form_debug;

fn red(s: &str) -> String {
    format!("\x1b[31m{s}\x1b[0m")
}
fn green(s: &str) -> String {
    format!("\x1b[32m{s}\x1b[0m")
}
fn dim(s: &str) -> String {
    format!("\x1b[2m{s}\x1b[0m")
}

/// Terminal rendering of the form: a progress bar for the progress surface
/// and stderr lines for the error banner and field hints.
#[derive(Default)]
pub struct TerminalView {
    bar: Option<ProgressBar>,
    /// Mirrors the view model's progress visibility; the bar itself is
    /// dropped once a result is shown and rebuilt on the next update.
    progress_visible: bool,
}

impl TerminalView {
    pub fn new() -> Self {
        Self::default()
    }

    fn bar(&mut self) -> &ProgressBar {
        self.bar.get_or_insert_with(|| {
            let style = ProgressStyle::with_template("{bar:40.cyan/238} {pos:>3}%  {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("█▉▊▋▌▍▎▏  ");
            let bar = ProgressBar::new(100);
            bar.set_style(style);
            bar
        })
    }

    fn println(&self, line: String) {
        match &self.bar {
            Some(bar) => bar.println(line),
            None => eprintln!("{line}"),
        }
    }

    pub fn finish(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish();
        }
    }
}

impl View for TerminalView {
    fn apply(&mut self, command: UiCommand) {
        match command {
            UiCommand::SetSubmitEnabled(enabled) => {
                form_debug!("submit control enabled={}", enabled);
            }
            UiCommand::ShowError(message) => {
                form_debug!("error banner: {}", message);
                self.println(format!("{} {}", red("Error:"), message));
            }
            UiCommand::HideError => {}
            UiCommand::ShowProgress { .. } => {
                self.progress_visible = true;
                self.bar().reset();
            }
            UiCommand::HideProgress => {
                self.progress_visible = false;
                if let Some(bar) = self.bar.take() {
                    bar.finish_and_clear();
                }
            }
            UiCommand::SetProgress { percentage, label } => {
                if self.progress_visible {
                    let bar = self.bar();
                    bar.set_position(u64::from(percentage));
                    bar.set_message(label);
                }
            }
            UiCommand::MarkPdfField(FieldValidity::Invalid) => {
                self.println(dim("PDF URL does not look like a valid URL"));
            }
            UiCommand::MarkPdfField(_) => {}
            UiCommand::SetKnowledgeSlots { slots, .. } => {
                form_debug!("{} knowledge URL slot(s)", slots.len());
            }
            UiCommand::ShowResult { location } => {
                self.finish();
                println!("{} {}", green("Blog written to"), location);
            }
        }
    }
}
