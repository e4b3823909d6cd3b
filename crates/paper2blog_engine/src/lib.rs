//! Paper2blog engine: HTTP client, form cache and display surface IO.
mod client;
mod filename;
mod persist;
mod render;
mod store;
mod types;

pub use client::{ApiClient, ApiSettings, PaperApi, RequestOptions, PROCESS_ENDPOINT};
pub use filename::blog_filename;
pub use persist::{ensure_dir, AtomicFileWriter, PersistError};
pub use render::{DisplaySurface, HtmlFileRenderer, RenderError};
pub use store::{FormStore, StoreError, FORM_DATA_KEY};
pub use types::{ApiError, ProcessRequest, ProcessResponse, StoredForm};
