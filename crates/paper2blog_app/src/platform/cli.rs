use std::path::PathBuf;

use clap::Parser;
use paper2blog_app::{AppConfig, FormInput};

/// Turn a paper PDF (plus optional code and knowledge links) into a blog page.
#[derive(Debug, Parser)]
#[command(name = "paper2blog", version, about)]
pub struct Cli {
    /// URL of the paper PDF. May come from the saved form with --restore.
    pub pdf_url: Option<String>,

    /// Git repository with the paper's code.
    #[arg(long)]
    pub git_url: Option<String>,

    /// Supplementary knowledge-base link; repeat for several.
    #[arg(long = "knowledge-url", value_name = "URL")]
    pub knowledge_urls: Vec<String>,

    /// Backend base URL serving `/process`.
    #[arg(long, env = "PAPER2BLOG_BASE_URL")]
    pub base_url: Option<String>,

    /// Directory the generated HTML is written to.
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// RON config file (default: ./paper2blog.ron if present).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Load the saved form before applying command line values.
    #[arg(long)]
    pub restore: bool,

    /// Save the form after edits.
    #[arg(long)]
    pub autosave: bool,

    /// Skip the simulated progress delays.
    #[arg(long)]
    pub no_pacing: bool,

    /// Also log to ./paper2blog.log.
    #[arg(long)]
    pub log_file: bool,

    /// Verbose terminal logging.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn apply_overrides(&self, config: &mut AppConfig) {
        if let Some(base_url) = &self.base_url {
            config.base_url = base_url.clone();
        }
        if let Some(output_dir) = &self.output_dir {
            config.output_dir = output_dir.clone();
        }
        config.restore_on_start |= self.restore;
        config.autosave |= self.autosave;
        if self.no_pacing {
            config.simulate_progress = false;
        }
    }

    pub fn form_input(&self) -> FormInput {
        FormInput {
            pdf_url: self.pdf_url.clone(),
            git_url: self.git_url.clone(),
            knowledge_urls: self.knowledge_urls.clone(),
        }
    }
}
