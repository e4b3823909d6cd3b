use std::fs;
use std::path::{Path, PathBuf};

use paper2blog_logging::{form_debug, form_warn};

use crate::{AtomicFileWriter, PersistError, StoredForm};

/// Key the cached form lives under; the file is `{key}.json`.
pub const FORM_DATA_KEY: &str = "paper_form_data";

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to serialize form data: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to write form data: {0}")]
    Persist(#[from] PersistError),
}

/// Single-key local cache of the form's raw values.
#[derive(Debug, Clone)]
pub struct FormStore {
    writer: AtomicFileWriter,
}

impl FormStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            writer: AtomicFileWriter::new(dir),
        }
    }

    pub fn path(&self) -> PathBuf {
        self.writer.dir().join(file_name())
    }

    /// Replaces whatever was stored before; values are never merged.
    pub fn save(&self, form: &StoredForm) -> Result<PathBuf, StoreError> {
        let content = serde_json::to_string(form)?;
        let path = self.writer.write(&file_name(), content.as_bytes())?;
        form_debug!("saved form data to {:?}", path);
        Ok(path)
    }

    /// `None` when nothing is stored or the stored value cannot be read.
    pub fn restore(&self) -> Option<StoredForm> {
        read_stored(&self.path())
    }
}

fn file_name() -> String {
    format!("{FORM_DATA_KEY}.json")
}

fn read_stored(path: &Path) -> Option<StoredForm> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return None,
        Err(err) => {
            form_warn!("Failed to read saved form data from {:?}: {}", path, err);
            return None;
        }
    };

    match serde_json::from_str(&content) {
        Ok(form) => Some(form),
        Err(err) => {
            form_warn!("Error restoring form data from {:?}: {}", path, err);
            None
        }
    }
}
