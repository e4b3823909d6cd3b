//! Paper2blog app: submit runtime, view abstraction and configuration.
mod config;
mod controller;
mod input;
mod mapping;
mod view;

pub use config::{AppConfig, ConfigError, DEFAULT_CONFIG_FILE};
pub use controller::SubmitController;
pub use input::FormInput;
pub use mapping::{
    to_process_request, to_request_failure, to_saved_form, to_stored_form, to_submission_result,
};
pub use view::{render, UiCommand, View};
