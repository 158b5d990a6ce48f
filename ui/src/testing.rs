//! In-memory stand-ins for the browser capabilities.

use crate::error::UiError;
use crate::platform::{FieldKind, FormField, FormSurface, Notifier, Storage};
use crate::toast::Severity;
use std::cell::RefCell;
use std::collections::HashMap;

#[derive(Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
    fail_writes: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage whose writes fail, as when the quota is exhausted.
    pub fn read_only() -> Self {
        Self {
            items: RefCell::new(HashMap::new()),
            fail_writes: true,
        }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    pub fn put(&self, key: &str, value: &str) {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}

impl Storage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, UiError> {
        Ok(self.get(key))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), UiError> {
        if self.fail_writes {
            return Err(UiError::Storage("QuotaExceededError".to_string()));
        }
        self.put(key, value);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), UiError> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

/// A form whose controls are plain (name, kind, value) rows.
#[derive(Default)]
pub struct FakeForm {
    defaults: Vec<FormField>,
    fields: RefCell<Vec<FormField>>,
    cleared: RefCell<Vec<String>>,
    resets: RefCell<usize>,
}

impl FakeForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Form with the given controls, all at their default values.
    pub fn with_fields(fields: Vec<FormField>) -> Self {
        Self {
            defaults: fields.clone(),
            fields: RefCell::new(fields),
            ..Self::default()
        }
    }

    /// The business card form as the server renders it, untouched.
    pub fn card_form() -> Self {
        Self::with_fields(vec![
            FormField::new("name", FieldKind::Text, ""),
            FormField::new("job_title", FieldKind::Text, ""),
            FormField::new("company", FieldKind::Text, ""),
            FormField::new("email", FieldKind::Text, ""),
            FormField::new("phone", FieldKind::Text, ""),
            FormField::new("website", FieldKind::Text, ""),
            FormField::new("address", FieldKind::Text, ""),
            FormField::new("template", FieldKind::Text, "modern"),
            FormField::new("font", FieldKind::Text, "Arial"),
            FormField::new("color", FieldKind::Text, "blue"),
            FormField::new("text_align", FieldKind::Radio, "left"),
            FormField::new("include_qr", FieldKind::Checkbox, ""),
            FormField::new("logo", FieldKind::File, ""),
        ])
    }

    /// Simulate a control rendered after page load, such as a social row.
    pub fn add_field(&self, name: &str, kind: FieldKind, value: &str) {
        self.fields
            .borrow_mut()
            .push(FormField::new(name, kind, value));
    }

    /// Simulate the user typing into a control.
    pub fn type_into(&self, name: &str, value: &str) {
        for field in self.fields.borrow_mut().iter_mut() {
            if field.name == name {
                field.value = value.to_string();
            }
        }
    }

    pub fn value_of(&self, name: &str) -> Option<String> {
        self.fields
            .borrow()
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.value.clone())
    }

    pub fn cleared_inputs(&self) -> Vec<String> {
        self.cleared.borrow().clone()
    }

    pub fn reset_count(&self) -> usize {
        *self.resets.borrow()
    }
}

impl FormSurface for FakeForm {
    fn fields(&self) -> Vec<FormField> {
        self.fields.borrow().clone()
    }

    fn set_value(&self, name: &str, value: &str) -> bool {
        let mut matched = false;
        for field in self.fields.borrow_mut().iter_mut() {
            if field.name == name && field.kind != FieldKind::File {
                field.value = value.to_string();
                matched = true;
            }
        }
        matched
    }

    fn clear_input(&self, id: &str) {
        self.cleared.borrow_mut().push(id.to_string());
        for field in self.fields.borrow_mut().iter_mut() {
            if field.name == id {
                field.value.clear();
            }
        }
    }

    fn reset(&self) {
        *self.fields.borrow_mut() = self.defaults.clone();
        *self.resets.borrow_mut() += 1;
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    messages: RefCell<Vec<(String, Severity)>>,
}

impl RecordingNotifier {
    pub fn messages(&self) -> Vec<(String, Severity)> {
        self.messages.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str, severity: Severity) {
        self.messages
            .borrow_mut()
            .push((message.to_string(), severity));
    }
}
