use paper2blog_core::{FormState, Msg};

/// Field values supplied from outside the form (command line flags).
/// Present values overwrite whatever the form currently holds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInput {
    pub pdf_url: Option<String>,
    pub git_url: Option<String>,
    pub knowledge_urls: Vec<String>,
}

impl FormInput {
    /// The edit events a user would produce typing these values into `form`.
    /// A non-empty knowledge list replaces every existing slot.
    pub fn into_messages(self, form: &FormState) -> Vec<Msg> {
        let mut msgs = Vec::new();
        if let Some(pdf_url) = self.pdf_url {
            msgs.push(Msg::PdfUrlChanged(pdf_url));
        }
        if let Some(git_url) = self.git_url {
            msgs.push(Msg::GitUrlChanged(git_url));
        }
        if self.knowledge_urls.is_empty() {
            return msgs;
        }

        for index in (1..form.knowledge_urls().len()).rev() {
            msgs.push(Msg::RemoveKnowledgeField(index));
        }
        for (index, value) in self.knowledge_urls.into_iter().enumerate() {
            if index > 0 {
                msgs.push(Msg::AddKnowledgeField);
            }
            msgs.push(Msg::KnowledgeUrlChanged { index, value });
        }
        msgs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use paper2blog_core::{update, AppState};

    #[test]
    fn knowledge_list_replaces_existing_slots() {
        let mut state = AppState::new();
        for msg in [
            Msg::AddKnowledgeField,
            Msg::AddKnowledgeField,
            Msg::KnowledgeUrlChanged {
                index: 2,
                value: "https://old.example".to_string(),
            },
        ] {
            state = update(state, msg).0;
        }

        let input = FormInput {
            pdf_url: Some("https://x.org/a.pdf".to_string()),
            git_url: None,
            knowledge_urls: vec!["https://a.example".to_string(), "https://b.example".to_string()],
        };
        for msg in input.into_messages(state.form()) {
            state = update(state, msg).0;
        }

        assert_eq!(state.form().pdf_url(), "https://x.org/a.pdf");
        assert_eq!(
            state.form().knowledge_urls(),
            ["https://a.example", "https://b.example"]
        );
    }

    #[test]
    fn empty_input_produces_no_edits() {
        assert!(FormInput::default()
            .into_messages(&FormState::new())
            .is_empty());
    }
}
