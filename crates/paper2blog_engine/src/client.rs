use std::time::Duration;

use paper2blog_logging::{form_debug, form_error};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::Method;

use crate::{ApiError, ProcessRequest, ProcessResponse};

pub const PROCESS_ENDPOINT: &str = "/process";

#[derive(Debug, Clone)]
pub struct ApiSettings {
    /// Prefix for every endpoint, e.g. `http://127.0.0.1:8000`.
    pub base_url: String,
    /// `None` leaves the transport's own timeout behavior in place.
    pub request_timeout: Option<Duration>,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_string(),
            request_timeout: None,
        }
    }
}

/// Caller overrides for one request. Headers are applied over the JSON
/// content-type default, replacing same-named entries.
#[derive(Debug, Clone)]
pub struct RequestOptions {
    pub method: Method,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            method: Method::GET,
            headers: Vec::new(),
            body: None,
        }
    }
}

impl RequestOptions {
    pub fn post_json(body: impl Into<String>) -> Self {
        Self {
            method: Method::POST,
            body: Some(body.into()),
            ..Self::default()
        }
    }
}

#[async_trait::async_trait]
pub trait PaperApi: Send + Sync {
    async fn process_paper(&self, request: &ProcessRequest) -> Result<ProcessResponse, ApiError>;
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    settings: ApiSettings,
    client: reqwest::Client,
}

impl ApiClient {
    pub fn new(settings: ApiSettings) -> Result<Self, ApiError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|err| ApiError::Network(err.to_string()))?;
        Ok(Self { settings, client })
    }

    pub fn settings(&self) -> &ApiSettings {
        &self.settings
    }

    /// Sends one request and decodes the JSON body.
    pub async fn request(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<serde_json::Value, ApiError> {
        self.send(endpoint, options)
            .await
            .inspect_err(|err| form_error!("API request to {} failed: {}", endpoint, err))
    }

    async fn send(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<serde_json::Value, ApiError> {
        let url = self.endpoint_url(endpoint)?;
        let headers = merge_headers(&options.headers)?;

        form_debug!("{} {}", options.method, url);
        let mut builder = self.client.request(options.method, url).headers(headers);
        if let Some(body) = options.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(map_reqwest_error)?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Http(status.as_u16()));
        }

        let text = response.text().await.map_err(map_reqwest_error)?;
        serde_json::from_str(&text).map_err(|err| ApiError::Parse(err.to_string()))
    }

    fn endpoint_url(&self, endpoint: &str) -> Result<url::Url, ApiError> {
        let joined = format!(
            "{}/{}",
            self.settings.base_url.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        );
        url::Url::parse(&joined).map_err(|err| ApiError::InvalidEndpoint {
            endpoint: joined,
            message: err.to_string(),
        })
    }
}

#[async_trait::async_trait]
impl PaperApi for ApiClient {
    async fn process_paper(&self, request: &ProcessRequest) -> Result<ProcessResponse, ApiError> {
        let body =
            serde_json::to_string(request).map_err(|err| ApiError::Parse(err.to_string()))?;
        let value = self
            .request(PROCESS_ENDPOINT, RequestOptions::post_json(body))
            .await?;
        serde_json::from_value(value).map_err(|err| {
            form_error!("unexpected /process response shape: {}", err);
            ApiError::Parse(err.to_string())
        })
    }
}

fn merge_headers(overrides: &[(String, String)]) -> Result<HeaderMap, ApiError> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    for (name, value) in overrides {
        let invalid = |message: String| ApiError::InvalidHeader {
            name: name.clone(),
            message,
        };
        let header_name =
            HeaderName::from_bytes(name.as_bytes()).map_err(|err| invalid(err.to_string()))?;
        let header_value =
            HeaderValue::from_str(value).map_err(|err| invalid(err.to_string()))?;
        headers.insert(header_name, header_value);
    }
    Ok(headers)
}

fn map_reqwest_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        return ApiError::Network(format!("timeout: {err}"));
    }
    ApiError::Network(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_without_double_slash() {
        let client = ApiClient::new(ApiSettings {
            base_url: "http://localhost:8000/".to_string(),
            request_timeout: None,
        })
        .unwrap();
        assert_eq!(
            client.endpoint_url("/process").unwrap().as_str(),
            "http://localhost:8000/process"
        );
    }

    #[test]
    fn bad_base_url_is_invalid_endpoint() {
        let client = ApiClient::new(ApiSettings {
            base_url: "not a base".to_string(),
            request_timeout: None,
        })
        .unwrap();
        assert!(matches!(
            client.endpoint_url("/process"),
            Err(ApiError::InvalidEndpoint { .. })
        ));
    }

    #[test]
    fn caller_headers_override_defaults() {
        let headers = merge_headers(&[
            ("Content-Type".to_string(), "text/plain".to_string()),
            ("X-Trace".to_string(), "1".to_string()),
        ])
        .unwrap();
        assert_eq!(headers.get(CONTENT_TYPE).unwrap(), "text/plain");
        assert_eq!(headers.get("x-trace").unwrap(), "1");
    }
}
