//! Conversions between the engine's wire types and the core's domain types.

use paper2blog_core::{RequestFailure, SavedFormData, SubmissionRequest, SubmissionResult};
use paper2blog_engine::{ApiError, ProcessRequest, ProcessResponse, StoredForm};

pub fn to_process_request(request: SubmissionRequest) -> ProcessRequest {
    ProcessRequest {
        pdf_url: request.pdf_url,
        git_url: request.git_url,
        knowledge_urls: request.knowledge_urls,
    }
}

pub fn to_submission_result(response: ProcessResponse) -> SubmissionResult {
    SubmissionResult {
        success: response.success,
        blog_html: response.blog_html,
        error: response.error,
    }
}

pub fn to_request_failure(err: ApiError) -> RequestFailure {
    match err {
        ApiError::Http(status) => RequestFailure::Http(status),
        ApiError::Parse(message) => RequestFailure::Parse(message),
        ApiError::Network(message) => RequestFailure::Network(message),
        other @ (ApiError::InvalidEndpoint { .. } | ApiError::InvalidHeader { .. }) => {
            RequestFailure::Network(other.to_string())
        }
    }
}

pub fn to_stored_form(saved: SavedFormData) -> StoredForm {
    StoredForm {
        pdf_url: saved.pdf_url,
        git_url: saved.git_url,
        knowledge_urls: saved.knowledge_urls,
    }
}

pub fn to_saved_form(stored: StoredForm) -> SavedFormData {
    SavedFormData {
        pdf_url: stored.pdf_url,
        git_url: stored.git_url,
        knowledge_urls: stored.knowledge_urls,
    }
}
