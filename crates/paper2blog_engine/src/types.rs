use serde::{Deserialize, Serialize};

/// JSON body of `POST /process`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessRequest {
    pub pdf_url: String,
    pub git_url: Option<String>,
    pub knowledge_urls: Vec<String>,
}

/// JSON body returned by `POST /process`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessResponse {
    /// Absent reads as a failure, so a payload `error` still reaches the user.
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub blog_html: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// On-disk shape of the cached form. Missing keys read as empty.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StoredForm {
    pub pdf_url: String,
    pub git_url: String,
    pub knowledge_urls: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("HTTP error! status: {0}")]
    Http(u16),
    #[error("network error: {0}")]
    Network(String),
    #[error("invalid JSON response: {0}")]
    Parse(String),
    #[error("invalid endpoint {endpoint}: {message}")]
    InvalidEndpoint { endpoint: String, message: String },
    #[error("invalid header {name}: {message}")]
    InvalidHeader { name: String, message: String },
}
