use sha2::{Digest, Sha256};

const MAX_STEM_LEN: usize = 60;

/// Deterministic, filesystem-safe name for a generated blog page:
/// `{stem}--{short_hash(source_url)}.html`, where the stem is the last path
/// segment of the source URL without its `.pdf` extension.
pub fn blog_filename(source_url: &str) -> String {
    let stem = url::Url::parse(source_url)
        .ok()
        .and_then(|url| {
            url.path_segments()
                .and_then(|mut segments| segments.rfind(|s| !s.is_empty()).map(str::to_string))
        })
        .unwrap_or_default();
    let stem = strip_pdf_extension(&stem);
    format!("{}--{}.html", sanitize_stem(stem), short_hash(source_url))
}

fn strip_pdf_extension(segment: &str) -> &str {
    let len = segment.len();
    if len > 4 && segment.is_char_boundary(len - 4) && segment[len - 4..].eq_ignore_ascii_case(".pdf")
    {
        &segment[..len - 4]
    } else {
        segment
    }
}

fn sanitize_stem(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut prev_underscore = false;
    for c in input.chars() {
        let c = if c.is_ascii_alphanumeric() || matches!(c, '-' | '.') {
            c
        } else {
            '_'
        };
        if c == '_' && prev_underscore {
            continue;
        }
        prev_underscore = c == '_';
        out.push(c);
    }
    let mut trimmed: String = out.trim_matches(['_', '.', '-']).to_string();
    if trimmed.len() > MAX_STEM_LEN {
        trimmed.truncate(MAX_STEM_LEN);
    }
    if trimmed.is_empty() {
        "blog".to_string()
    } else {
        trimmed
    }
}

fn short_hash(input: &str) -> String {
    let digest = Sha256::digest(input.as_bytes());
    let mut hex = String::with_capacity(8);
    for byte in digest.iter().take(4) {
        use std::fmt::Write;
        let _ = write!(&mut hex, "{byte:02x}");
    }
    hex
}
