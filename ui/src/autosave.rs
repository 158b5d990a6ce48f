//! Form autosave
//!
//! The whole form (minus file inputs) is kept as one JSON object in local
//! storage, rewritten whenever a field changes or the page is hidden and
//! written back into the form on the next load. Access is last-write-wins.

use crate::dom::{self, WebForm, WebStorage};
use crate::error::UiError;
use crate::platform::{FieldKind, FormField, FormSurface, Notifier, Storage};
use crate::toast::Severity;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::rc::Rc;
use web_sys::VisibilityState;

pub const CLEARED_MESSAGE: &str = "Saved form data cleared";

/// Field name to value, as persisted.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormSnapshot(BTreeMap<String, String>);

impl FormSnapshot {
    /// Take every named, non-file field. Later fields win on duplicate names.
    pub fn capture(fields: &[FormField]) -> Self {
        let values = fields
            .iter()
            .filter(|f| f.kind != FieldKind::File && !f.name.is_empty())
            .map(|f| (f.name.clone(), f.value.clone()))
            .collect();
        Self(values)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Write the saved values into `form`. File fields are never written,
    /// and names without a matching control are not counted.
    pub fn apply_to<F: FormSurface + ?Sized>(&self, form: &F) -> usize {
        let file_fields: Vec<String> = form
            .fields()
            .into_iter()
            .filter(|f| f.kind == FieldKind::File)
            .map(|f| f.name)
            .collect();

        let mut applied = 0;
        for (name, value) in self.iter() {
            if file_fields.iter().any(|f| f == name) {
                continue;
            }
            if form.set_value(name, value) {
                applied += 1;
            }
        }
        applied
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

pub struct AutosaveStore<S> {
    storage: S,
    key: String,
}

impl<S: Storage> AutosaveStore<S> {
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Overwrite the record with the form's current state.
    pub fn persist<F: FormSurface + ?Sized>(&self, form: &F) -> Result<(), UiError> {
        let snapshot = FormSnapshot::capture(&form.fields());
        let raw = serde_json::to_string(&snapshot)?;
        self.storage.write(&self.key, &raw)
    }

    /// The saved record; unreadable or malformed data counts as none.
    pub fn load(&self) -> Option<FormSnapshot> {
        let raw = match self.storage.read(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                log::warn!("Failed to read saved form data: {}", e);
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(snapshot) => Some(snapshot),
            Err(e) => {
                log::warn!("Failed to load saved form data: {}", e);
                None
            }
        }
    }

    /// Write saved values back into the form and return how many were applied.
    pub fn restore<F: FormSurface + ?Sized>(&self, form: &F) -> usize {
        match self.load() {
            Some(snapshot) => snapshot.apply_to(form),
            None => 0,
        }
    }

    pub fn clear<N: Notifier + ?Sized>(&self, notifier: &N) {
        if let Err(e) = self.storage.remove(&self.key) {
            log::warn!("Failed to clear saved form data: {}", e);
        }
        notifier.notify(CLEARED_MESSAGE, Severity::Info);
    }
}

fn persist_logged<S: Storage>(store: &AutosaveStore<S>, form: &WebForm) {
    if let Err(e) = store.persist(form) {
        log::warn!("Autosave failed: {}", e);
    }
}

/// Open the local store under `key`; `None` when local storage is unavailable.
pub fn open(key: &str) -> Option<Rc<AutosaveStore<WebStorage>>> {
    match WebStorage::local() {
        Ok(storage) => Some(Rc::new(AutosaveStore::new(storage, key))),
        Err(e) => {
            log::warn!("Autosave disabled: {}", e);
            None
        }
    }
}

/// Save on every field change and when the page is hidden.
pub fn attach(form: &WebForm, store: Rc<AutosaveStore<WebStorage>>) -> Result<(), UiError> {
    // change bubbles, so rows added later are covered too
    let (on_change_form, on_change_store) = (form.clone(), store.clone());
    dom::listen(form.element(), "change", move |_| {
        persist_logged(&on_change_store, &on_change_form);
    })?;

    let document = dom::document()?;
    let watched = document.clone();
    let hidden_form = form.clone();
    dom::listen(&document, "visibilitychange", move |_| {
        if watched.visibility_state() == VisibilityState::Hidden {
            persist_logged(&store, &hidden_form);
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeForm, MemoryStorage, RecordingNotifier};
    use crate::settings::DEFAULT_STORAGE_KEY;
    use crate::social::{SocialEntries, SocialPlatform};

    fn store() -> AutosaveStore<MemoryStorage> {
        AutosaveStore::new(MemoryStorage::new(), DEFAULT_STORAGE_KEY)
    }

    #[test]
    fn test_snapshot_skips_file_fields() {
        let snapshot = FormSnapshot::capture(&[
            FormField::new("name", FieldKind::Text, "Jo"),
            FormField::new("logo", FieldKind::File, "C:\\fakepath\\logo.png"),
            FormField::new("", FieldKind::Text, "anonymous"),
        ]);
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot.get("name"), Some("Jo"));
        assert_eq!(snapshot.get("logo"), None);
    }

    #[test]
    fn test_persist_writes_full_mapping_as_json() {
        let store = store();
        let form = FakeForm::card_form();
        form.type_into("name", "Jo Bloggs");
        form.type_into("email", "jo@example.com");

        store.persist(&form).unwrap();

        let raw = store.storage.get(DEFAULT_STORAGE_KEY).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["name"], "Jo Bloggs");
        assert_eq!(value["email"], "jo@example.com");
        assert_eq!(value["template"], "modern");
        assert!(value.get("logo").is_none());
        assert_eq!(value.as_object().unwrap().len(), 12);
    }

    #[test]
    fn test_persist_then_restore_round_trips() {
        let storage_key = "businessCardForm";
        let first = FakeForm::card_form();
        first.type_into("name", "Jo Bloggs");
        first.type_into("phone", "+44 (0) 20 7946 0000");
        first.type_into("template", "vintage");
        first.type_into("include_qr", "on");
        first.type_into("text_align", "center");
        first.type_into("logo", "logo.png");

        let store = AutosaveStore::new(MemoryStorage::new(), storage_key);
        store.persist(&first).unwrap();

        let fresh = FakeForm::card_form();
        let applied = store.restore(&fresh);

        assert_eq!(applied, 12);
        for field in first.fields() {
            if field.kind == FieldKind::File {
                assert_eq!(fresh.value_of(&field.name), Some(String::new()));
            } else {
                assert_eq!(fresh.value_of(&field.name), Some(field.value));
            }
        }
    }

    #[test]
    fn test_restore_counts_only_matched_controls() {
        let store = store();
        let form = FakeForm::card_form();
        form.type_into("name", "Jo");
        store.persist(&form).unwrap();

        let mut snapshot = store.load().unwrap();
        snapshot.insert("social_platform_0", "github");
        snapshot.insert("social_value_0", "github.com/jo");

        let fresh = FakeForm::card_form();
        assert_eq!(snapshot.apply_to(&fresh), 12);
        assert_eq!(fresh.value_of("social_value_0"), None);
    }

    #[test]
    fn test_round_trip_with_social_entry() {
        let first = FakeForm::card_form();
        first.type_into("name", "Jo Bloggs");
        first.type_into("text_align", "right");
        first.add_field("social_platform_0", FieldKind::Text, "github");
        first.add_field("social_value_0", FieldKind::Text, "github.com/jo");

        let store = store();
        store.persist(&first).unwrap();
        let snapshot = store.load().unwrap();

        // rows come back before the rest of the form is written
        let mut entries = SocialEntries::new();
        assert_eq!(entries.restore(&snapshot), 1);
        let fresh = FakeForm::card_form();
        for entry in entries.entries() {
            fresh.add_field(&entry.platform_field(), FieldKind::Text, "");
            fresh.add_field(&entry.value_field(), FieldKind::Text, &entry.value);
        }

        assert_eq!(snapshot.apply_to(&fresh), 14);
        for field in first.fields() {
            if field.kind == FieldKind::File {
                assert_eq!(fresh.value_of(&field.name), Some(String::new()));
            } else {
                assert_eq!(fresh.value_of(&field.name), Some(field.value));
            }
        }
        assert_eq!(
            entries.get(0).unwrap().platform,
            Some(SocialPlatform::GitHub)
        );
    }

    #[test]
    fn test_restore_without_record_is_a_no_op() {
        let form = FakeForm::card_form();
        assert_eq!(store().restore(&form), 0);
        assert_eq!(form.value_of("template"), Some("modern".to_string()));
    }

    #[test]
    fn test_restore_ignores_malformed_record() {
        let store = store();
        store.storage.put(DEFAULT_STORAGE_KEY, "{\"name\": ");
        let form = FakeForm::card_form();

        assert_eq!(store.load(), None);
        assert_eq!(store.restore(&form), 0);
        assert_eq!(form.value_of("name"), Some(String::new()));
    }

    #[test]
    fn test_restore_never_writes_file_fields() {
        let store = store();
        store
            .storage
            .put(DEFAULT_STORAGE_KEY, r#"{"logo": "evil.png", "company": "Acme"}"#);
        let form = FakeForm::card_form();

        assert_eq!(store.restore(&form), 1);
        assert_eq!(form.value_of("company"), Some("Acme".to_string()));
        assert_eq!(form.value_of("logo"), Some(String::new()));
    }

    #[test]
    fn test_persist_surfaces_storage_failure() {
        let store = AutosaveStore::new(MemoryStorage::read_only(), DEFAULT_STORAGE_KEY);
        let err = store.persist(&FakeForm::card_form()).unwrap_err();
        assert!(matches!(err, UiError::Storage(_)));
    }

    #[test]
    fn test_clear_removes_record_and_toasts() {
        let store = store();
        store.persist(&FakeForm::card_form()).unwrap();
        let notifier = RecordingNotifier::default();

        store.clear(&notifier);

        assert_eq!(store.load(), None);
        assert_eq!(
            notifier.messages(),
            vec![(CLEARED_MESSAGE.to_string(), Severity::Info)]
        );
    }
}
