//! Cosmetic progress schedule shown while a submission is being prepared.
//!
//! The stages are simulated UI pacing. They are not tied to anything the
//! backend does; the single `/process` call is only issued once the last
//! stage has been reached.

use std::time::Duration;

pub const PDF_VALIDATION_DEBOUNCE: Duration = Duration::from_millis(300);
pub const AUTOSAVE_DEBOUNCE: Duration = Duration::from_millis(1000);

pub const DONE_LABEL: &str = "Done!";
pub const PROCESSING_FAILED_MESSAGE: &str = "Processing failed";
pub const GENERIC_FAILURE_MESSAGE: &str =
    "An error occurred during processing, please try again later.";

const RENDER_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PacingStep {
    pub percentage: u8,
    pub label: &'static str,
    /// Delay after the step is displayed and before the next one starts.
    pub hold: Duration,
}

const SIMULATED_STEPS: [PacingStep; 5] = [
    PacingStep {
        percentage: 10,
        label: "Starting...",
        hold: Duration::ZERO,
    },
    PacingStep {
        percentage: 25,
        label: "Downloading and processing PDF...",
        hold: Duration::from_millis(1000),
    },
    PacingStep {
        percentage: 50,
        label: "Analyzing code repository...",
        hold: Duration::from_millis(1500),
    },
    PacingStep {
        percentage: 75,
        label: "Analyzing paper content with AI...",
        hold: Duration::from_millis(2000),
    },
    PacingStep {
        percentage: 90,
        label: "Generating blog content...",
        hold: Duration::ZERO,
    },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PacingSchedule {
    steps: Vec<PacingStep>,
    render_delay: Duration,
}

impl Default for PacingSchedule {
    fn default() -> Self {
        Self {
            steps: SIMULATED_STEPS.to_vec(),
            render_delay: RENDER_DELAY,
        }
    }
}

impl PacingSchedule {
    /// Same stages in the same order, with every delay collapsed to zero.
    pub fn instant() -> Self {
        Self {
            steps: SIMULATED_STEPS
                .iter()
                .map(|step| PacingStep {
                    hold: Duration::ZERO,
                    ..*step
                })
                .collect(),
            render_delay: Duration::ZERO,
        }
    }

    pub fn step(&self, index: usize) -> Option<&PacingStep> {
        self.steps.get(index)
    }

    pub fn steps(&self) -> &[PacingStep] {
        &self.steps
    }

    pub fn render_delay(&self) -> Duration {
        self.render_delay
    }

    pub fn total_hold(&self) -> Duration {
        self.steps.iter().map(|step| step.hold).sum()
    }
}
