use std::path::PathBuf;

use paper2blog_logging::form_info;

use crate::{blog_filename, AtomicFileWriter, PersistError};

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("could not write result page: {0}")]
    Persist(#[from] PersistError),
}

/// Where generated blog HTML is shown. The contract is "write this HTML,
/// then finalize it"; the returned string tells the user where to look.
pub trait DisplaySurface: Send {
    fn show_html(&mut self, html: &str, source_url: &str) -> Result<String, RenderError>;
}

/// Display surface backed by an output directory: one `.html` file per
/// source URL, written atomically.
///
/// The backend's HTML is written verbatim; nothing is sanitized, so any
/// script it contains runs when the page is opened.
#[derive(Debug, Clone)]
pub struct HtmlFileRenderer {
    writer: AtomicFileWriter,
    last_written: Option<PathBuf>,
}

impl HtmlFileRenderer {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            writer: AtomicFileWriter::new(output_dir),
            last_written: None,
        }
    }

    pub fn last_written(&self) -> Option<&PathBuf> {
        self.last_written.as_ref()
    }
}

impl DisplaySurface for HtmlFileRenderer {
    fn show_html(&mut self, html: &str, source_url: &str) -> Result<String, RenderError> {
        let filename = blog_filename(source_url);
        let path = self.writer.write(&filename, html.as_bytes())?;
        form_info!("wrote {} bytes of blog HTML to {:?}", html.len(), path);
        let location = path.display().to_string();
        self.last_written = Some(path);
        Ok(location)
    }
}
