use url::Url;

use crate::{FormField, FormState, ValidationError};

/// Visual state of the PDF URL field after real-time validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldValidity {
    #[default]
    Neutral,
    Valid,
    Invalid,
}

/// Structurally valid absolute URL. No network check.
pub fn is_valid_url(input: &str) -> bool {
    Url::parse(input).is_ok()
}

/// Permissive "looks like a paper" check: a valid URL that ends in `.pdf` or
/// mentions arXiv's PDF path, IEEE or ACM anywhere.
pub fn is_valid_pdf_url(input: &str) -> bool {
    if !is_valid_url(input) {
        return false;
    }
    let lower = input.to_ascii_lowercase();
    lower.ends_with(".pdf")
        || lower.contains("arxiv.org/pdf")
        || lower.contains("ieee")
        || lower.contains("acm")
}

pub fn validate_submission<I, S>(pdf_url: &str, knowledge_urls: I) -> Result<(), ValidationError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let pdf_url = pdf_url.trim();
    if pdf_url.is_empty() {
        return Err(ValidationError::MissingField(FormField::PdfUrl));
    }
    if !is_valid_url(pdf_url) {
        return Err(ValidationError::InvalidUrl {
            field: FormField::PdfUrl,
            value: pdf_url.to_string(),
        });
    }

    for url in knowledge_urls {
        let url = url.as_ref().trim();
        if !url.is_empty() && !is_valid_url(url) {
            return Err(ValidationError::InvalidUrl {
                field: FormField::KnowledgeUrl,
                value: url.to_string(),
            });
        }
    }

    Ok(())
}

/// Whole-form gate: the submission rules plus the optional git URL.
pub fn validate_form(form: &FormState) -> Result<(), ValidationError> {
    validate_submission(form.pdf_url(), form.knowledge_urls())?;

    let git_url = form.git_url().trim();
    if !git_url.is_empty() && !is_valid_url(git_url) {
        return Err(ValidationError::InvalidUrl {
            field: FormField::GitUrl,
            value: git_url.to_string(),
        });
    }
    Ok(())
}

pub fn field_validity(input: &str) -> FieldValidity {
    let input = input.trim();
    if input.is_empty() {
        FieldValidity::Neutral
    } else if is_valid_url(input) {
        FieldValidity::Valid
    } else {
        FieldValidity::Invalid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_urls_are_valid() {
        for url in [
            "https://example.com",
            "http://127.0.0.1:8000/process",
            "ftp://files.example.org/a.pdf",
            "mailto:someone@example.com",
        ] {
            assert!(is_valid_url(url), "{url}");
        }
    }

    #[test]
    fn relative_or_garbage_is_invalid() {
        for input in ["", "not a url", "not-a-url", "/relative/path", "example.com", "://x"] {
            assert!(!is_valid_url(input), "{input}");
        }
    }

    #[test]
    fn pdf_patterns() {
        assert!(is_valid_pdf_url("https://arxiv.org/pdf/1234.5678"));
        assert!(is_valid_pdf_url("https://x.org/paper.PDF"));
        assert!(is_valid_pdf_url("https://ieeexplore.ieee.org/document/1"));
        assert!(is_valid_pdf_url("https://dl.ACM.org/doi/10.1145/1"));
        assert!(!is_valid_pdf_url("https://example.com/page"));
        assert!(!is_valid_pdf_url("not a url"));
        assert!(!is_valid_pdf_url("paper.pdf"));
    }

    #[test]
    fn blank_pdf_is_missing() {
        let empty: [&str; 0] = [];
        assert_eq!(
            validate_submission("   ", empty),
            Err(ValidationError::MissingField(FormField::PdfUrl))
        );
    }

    #[test]
    fn first_bad_knowledge_url_is_reported() {
        let result = validate_submission(
            "https://x.org/a.pdf",
            ["", "https://ok.example.com", " not-a-url ", "also bad"],
        );
        assert_eq!(
            result,
            Err(ValidationError::InvalidUrl {
                field: FormField::KnowledgeUrl,
                value: "not-a-url".to_string(),
            })
        );
    }

    #[test]
    fn malformed_git_url_is_rejected() {
        let mut form = FormState::new();
        form.set_pdf_url("https://x.org/a.pdf");
        form.set_git_url("github.com/no-scheme");
        assert_eq!(
            validate_form(&form).unwrap_err().field(),
            FormField::GitUrl
        );
    }

    #[test]
    fn validity_is_neutral_when_blank() {
        assert_eq!(field_validity("  "), FieldValidity::Neutral);
        assert_eq!(field_validity("https://a.b"), FieldValidity::Valid);
        assert_eq!(field_validity("nope"), FieldValidity::Invalid);
    }
}
