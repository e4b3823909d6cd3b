use std::fs;

use paper2blog_engine::{FormStore, StoredForm, FORM_DATA_KEY};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn sample() -> StoredForm {
    StoredForm {
        pdf_url: "https://arxiv.org/pdf/1234.5678".to_string(),
        git_url: String::new(),
        knowledge_urls: vec![String::new(), "https://kb.example.com".to_string()],
    }
}

#[test]
fn missing_key_restores_nothing() {
    let temp = TempDir::new().unwrap();
    let store = FormStore::new(temp.path().join("cache"));
    assert_eq!(store.restore(), None);
}

#[test]
fn save_then_restore_keeps_raw_values() {
    let temp = TempDir::new().unwrap();
    let store = FormStore::new(temp.path());

    let path = store.save(&sample()).unwrap();
    assert_eq!(
        path.file_name().unwrap().to_string_lossy(),
        format!("{FORM_DATA_KEY}.json")
    );
    assert_eq!(store.restore(), Some(sample()));
}

#[test]
fn save_overwrites_wholesale() {
    let temp = TempDir::new().unwrap();
    let store = FormStore::new(temp.path());
    store.save(&sample()).unwrap();

    let replacement = StoredForm {
        pdf_url: "https://x.org/b.pdf".to_string(),
        ..StoredForm::default()
    };
    store.save(&replacement).unwrap();
    assert_eq!(store.restore(), Some(replacement));
}

#[test]
fn malformed_value_restores_nothing() {
    let temp = TempDir::new().unwrap();
    let store = FormStore::new(temp.path());
    fs::write(store.path(), "{not json").unwrap();
    assert_eq!(store.restore(), None);
}

#[test]
fn missing_keys_read_as_empty() {
    let temp = TempDir::new().unwrap();
    let store = FormStore::new(temp.path());
    fs::write(store.path(), r#"{"pdf_url":"https://x.org/a.pdf"}"#).unwrap();
    assert_eq!(
        store.restore(),
        Some(StoredForm {
            pdf_url: "https://x.org/a.pdf".to_string(),
            ..StoredForm::default()
        })
    );
}
