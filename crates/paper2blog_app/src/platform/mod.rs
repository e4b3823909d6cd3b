mod app;
mod cli;
mod logging;
mod terminal;

pub use app::run_app;
