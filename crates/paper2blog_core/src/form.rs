/// One `/process` payload, built fresh from the form on every submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionRequest {
    pub pdf_url: String,
    pub git_url: Option<String>,
    pub knowledge_urls: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SubmissionResult {
    pub success: bool,
    pub blog_html: Option<String>,
    pub error: Option<String>,
}

/// Raw form values as cached between sessions. Blank slots are kept.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SavedFormData {
    pub pdf_url: String,
    pub git_url: String,
    pub knowledge_urls: Vec<String>,
}

/// The editable form: two single-line fields and the knowledge URL slots.
///
/// There is always at least one knowledge slot, even when every slot is blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pdf_url: String,
    git_url: String,
    knowledge_urls: Vec<String>,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            pdf_url: String::new(),
            git_url: String::new(),
            knowledge_urls: vec![String::new()],
        }
    }
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pdf_url(&self) -> &str {
        &self.pdf_url
    }

    pub fn git_url(&self) -> &str {
        &self.git_url
    }

    pub fn knowledge_urls(&self) -> &[String] {
        &self.knowledge_urls
    }

    pub fn set_pdf_url(&mut self, value: impl Into<String>) {
        self.pdf_url = value.into();
    }

    pub fn set_git_url(&mut self, value: impl Into<String>) {
        self.git_url = value.into();
    }

    /// Returns false when `index` does not name an existing slot.
    pub fn set_knowledge_url(&mut self, index: usize, value: impl Into<String>) -> bool {
        match self.knowledge_urls.get_mut(index) {
            Some(slot) => {
                *slot = value.into();
                true
            }
            None => false,
        }
    }

    pub fn add_knowledge_field(&mut self) {
        self.knowledge_urls.push(String::new());
    }

    /// Removes the slot at `index` unless it is the only one left.
    pub fn remove_knowledge_field(&mut self, index: usize) -> bool {
        if self.knowledge_urls.len() <= 1 || index >= self.knowledge_urls.len() {
            return false;
        }
        self.knowledge_urls.remove(index);
        true
    }

    pub fn to_request(&self) -> SubmissionRequest {
        let git_url = self.git_url.trim();
        SubmissionRequest {
            pdf_url: self.pdf_url.trim().to_string(),
            git_url: (!git_url.is_empty()).then(|| git_url.to_string()),
            knowledge_urls: self
                .knowledge_urls
                .iter()
                .map(|url| url.trim())
                .filter(|url| !url.is_empty())
                .map(ToOwned::to_owned)
                .collect(),
        }
    }

    pub fn snapshot(&self) -> SavedFormData {
        SavedFormData {
            pdf_url: self.pdf_url.clone(),
            git_url: self.git_url.clone(),
            knowledge_urls: self.knowledge_urls.clone(),
        }
    }

    /// Applies cached values on top of the current form.
    ///
    /// Blank cached fields leave the current value alone. A non-empty cached
    /// slot list replaces the slots: the first entry is always kept, later
    /// blank entries are dropped.
    pub fn apply_saved(&mut self, saved: SavedFormData) {
        if !saved.pdf_url.is_empty() {
            self.pdf_url = saved.pdf_url;
        }
        if !saved.git_url.is_empty() {
            self.git_url = saved.git_url;
        }
        let mut urls = saved.knowledge_urls.into_iter();
        if let Some(first) = urls.next() {
            self.knowledge_urls = std::iter::once(first)
                .chain(urls.filter(|url| !url.trim().is_empty()))
                .collect();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remove_keeps_last_slot() {
        let mut form = FormState::new();
        assert!(!form.remove_knowledge_field(0));
        assert_eq!(form.knowledge_urls().len(), 1);

        form.add_knowledge_field();
        assert!(form.remove_knowledge_field(1));
        assert!(!form.remove_knowledge_field(0));
        assert_eq!(form.knowledge_urls().len(), 1);
    }

    #[test]
    fn remove_out_of_range_is_noop() {
        let mut form = FormState::new();
        form.add_knowledge_field();
        assert!(!form.remove_knowledge_field(5));
        assert_eq!(form.knowledge_urls().len(), 2);
    }

    #[test]
    fn request_drops_blank_knowledge_entries_and_git() {
        let mut form = FormState::new();
        form.set_pdf_url("  https://x.org/a.pdf ");
        form.set_git_url("   ");
        form.set_knowledge_url(0, "https://kb.example.com");
        form.add_knowledge_field();
        form.add_knowledge_field();
        form.set_knowledge_url(2, "  ");

        let request = form.to_request();
        assert_eq!(request.pdf_url, "https://x.org/a.pdf");
        assert_eq!(request.git_url, None);
        assert_eq!(request.knowledge_urls, vec!["https://kb.example.com"]);
    }

    #[test]
    fn apply_saved_keeps_first_slot_and_drops_later_blanks() {
        let mut form = FormState::new();
        form.set_git_url("https://github.com/keep/me");
        form.apply_saved(SavedFormData {
            pdf_url: "https://arxiv.org/pdf/1".to_string(),
            git_url: String::new(),
            knowledge_urls: vec![
                String::new(),
                "https://a.example.com".to_string(),
                " ".to_string(),
            ],
        });

        assert_eq!(form.pdf_url(), "https://arxiv.org/pdf/1");
        assert_eq!(form.git_url(), "https://github.com/keep/me");
        assert_eq!(form.knowledge_urls(), ["", "https://a.example.com"]);
    }

    #[test]
    fn apply_saved_with_no_slots_keeps_current_slots() {
        let mut form = FormState::new();
        form.set_knowledge_url(0, "https://a.example.com");
        form.apply_saved(SavedFormData::default());
        assert_eq!(form.knowledge_urls(), ["https://a.example.com"]);
    }
}
