use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use log::LevelFilter;
use paper2blog_app::{AppConfig, SubmitController};
use paper2blog_core::{is_valid_pdf_url, AppState, Msg};
use paper2blog_engine::{ApiClient, FormStore, HtmlFileRenderer};
use paper2blog_logging::{form_error, form_info, form_warn};

use super::cli::Cli;
use super::logging::{self, LogDestination};
use super::terminal::TerminalView;

pub fn run_app() -> ExitCode {
    let cli = Cli::parse();

    let destination = if cli.log_file {
        LogDestination::Both
    } else {
        LogDestination::Terminal
    };
    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    logging::initialize(destination, level);

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(err) => {
            eprintln!("error: failed to start runtime: {err}");
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(run(cli)) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            form_error!("{:#}", err);
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<bool> {
    let mut config = match &cli.config {
        Some(path) => AppConfig::from_file(path)?,
        None => AppConfig::load_default(
            &std::env::current_dir().context("cannot resolve working directory")?,
        ),
    };
    cli.apply_overrides(&mut config);
    form_info!("Using backend {}", config.base_url);

    let api = ApiClient::new(config.api_settings()).context("failed to build HTTP client")?;
    let state = AppState::new()
        .with_schedule(config.pacing())
        .with_autosave(config.autosave);
    let mut controller = SubmitController::new(
        state,
        Box::new(api),
        TerminalView::new(),
        HtmlFileRenderer::new(&config.output_dir),
    )
    .with_store(FormStore::new(&config.store_dir));

    if config.restore_on_start && !controller.restore_saved().await {
        form_info!("No saved form data to restore");
    }

    let input = cli.form_input();
    for msg in input.into_messages(controller.state().form()) {
        controller.dispatch(msg).await;
    }

    let pdf_url = controller.state().form().pdf_url().trim().to_string();
    if !pdf_url.is_empty() && !is_valid_pdf_url(&pdf_url) {
        form_warn!("{} does not look like a PDF link; submitting anyway", pdf_url);
    }

    controller.dispatch(Msg::SubmitClicked).await;
    controller.settle().await;

    Ok(controller.succeeded())
}
