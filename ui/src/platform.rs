//! Capability seams between the form components and the browser.
//!
//! Components only talk to the page through these traits. The browser
//! implementations live in [`crate::dom`]; unit tests use in-memory fakes.

use crate::error::UiError;
use crate::toast::Severity;

/// How a form control stores its value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    /// `input[type=text|email|tel|url|...]`, `select`, `textarea`
    Text,
    /// Value is `"on"` when checked, empty otherwise
    Checkbox,
    /// Value is that of the checked member of the group
    Radio,
    /// Never persisted
    File,
}

impl FieldKind {
    /// Classify an `<input>` by its `type` attribute.
    pub fn from_input_type(input_type: &str) -> Self {
        match input_type.to_ascii_lowercase().as_str() {
            "checkbox" => FieldKind::Checkbox,
            "radio" => FieldKind::Radio,
            "file" => FieldKind::File,
            _ => FieldKind::Text,
        }
    }

    /// Value a control contributes to the form state. `None` for an
    /// unchecked radio, which leaves the group to its checked member.
    pub fn captured_value(self, checked: bool, value: &str) -> Option<String> {
        match self {
            FieldKind::Checkbox if checked => Some("on".to_string()),
            FieldKind::Checkbox => Some(String::new()),
            FieldKind::Radio if checked => Some(value.to_string()),
            FieldKind::Radio => None,
            FieldKind::Text => Some(value.to_string()),
            FieldKind::File => Some(String::new()),
        }
    }

    /// Checked state a checkable control takes when `stored` is written
    /// back; `None` for controls restored through their value.
    pub fn restored_checked(self, own_value: &str, stored: &str) -> Option<bool> {
        match self {
            FieldKind::Checkbox => Some(!stored.is_empty()),
            FieldKind::Radio => Some(own_value == stored),
            FieldKind::Text | FieldKind::File => None,
        }
    }
}

/// A named control of the form and its current value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormField {
    pub name: String,
    pub kind: FieldKind,
    pub value: String,
}

impl FormField {
    pub fn new(name: impl Into<String>, kind: FieldKind, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            value: value.into(),
        }
    }
}

/// Metadata of a file picked through an `<input type="file">`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileInfo {
    pub name: String,
    pub mime_type: String,
    pub size: u64,
}

/// Browser-local key/value persistence.
pub trait Storage {
    fn read(&self, key: &str) -> Result<Option<String>, UiError>;
    fn write(&self, key: &str, value: &str) -> Result<(), UiError>;
    fn remove(&self, key: &str) -> Result<(), UiError>;
}

/// The card form as seen by autosave and the validators.
pub trait FormSurface {
    /// Every named control, file inputs included.
    fn fields(&self) -> Vec<FormField>;

    /// Write `value` back into the control(s) called `name`. Returns false
    /// when no writable control has that name.
    fn set_value(&self, name: &str, value: &str) -> bool;

    /// Reset the input with the given element id to its empty state.
    fn clear_input(&self, id: &str);

    /// Restore every control to its default and drop validation styling.
    fn reset(&self);
}

/// Sink for user-facing toast messages.
pub trait Notifier {
    fn notify(&self, message: &str, severity: Severity);
}

impl<T: Notifier + ?Sized> Notifier for &T {
    fn notify(&self, message: &str, severity: Severity) {
        (**self).notify(message, severity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_kind_from_input_type() {
        assert_eq!(FieldKind::from_input_type("file"), FieldKind::File);
        assert_eq!(FieldKind::from_input_type("FILE"), FieldKind::File);
        assert_eq!(FieldKind::from_input_type("checkbox"), FieldKind::Checkbox);
        assert_eq!(FieldKind::from_input_type("radio"), FieldKind::Radio);
        assert_eq!(FieldKind::from_input_type("email"), FieldKind::Text);
        assert_eq!(FieldKind::from_input_type(""), FieldKind::Text);
    }

    #[test]
    fn test_checkbox_captures_on_or_empty() {
        assert_eq!(FieldKind::Checkbox.captured_value(true, "yes"), Some("on".to_string()));
        assert_eq!(FieldKind::Checkbox.captured_value(false, "yes"), Some(String::new()));
    }

    #[test]
    fn test_only_checked_radio_is_captured() {
        assert_eq!(FieldKind::Radio.captured_value(false, "left"), None);
        assert_eq!(FieldKind::Radio.captured_value(true, "center"), Some("center".to_string()));
    }

    #[test]
    fn test_text_and_file_capture() {
        assert_eq!(FieldKind::Text.captured_value(false, "Jo"), Some("Jo".to_string()));
        assert_eq!(
            FieldKind::File.captured_value(false, "C:\\fakepath\\logo.png"),
            Some(String::new())
        );
    }

    #[test]
    fn test_restored_checked_state() {
        assert_eq!(FieldKind::Checkbox.restored_checked("on", "on"), Some(true));
        assert_eq!(FieldKind::Checkbox.restored_checked("on", ""), Some(false));

        // the group member whose value matches is the one checked
        let group = ["left", "center", "right"];
        let checked: Vec<Option<bool>> = group
            .iter()
            .map(|own| FieldKind::Radio.restored_checked(own, "center"))
            .collect();
        assert_eq!(checked, vec![Some(false), Some(true), Some(false)]);

        assert_eq!(FieldKind::Text.restored_checked("", "x"), None);
        assert_eq!(FieldKind::File.restored_checked("", "x"), None);
    }

    #[test]
    fn test_radio_group_round_trips_through_rules() {
        let group = [("left", false), ("center", true), ("right", false)];
        let captured: Vec<String> = group
            .iter()
            .filter_map(|(value, checked)| FieldKind::Radio.captured_value(*checked, value))
            .collect();
        assert_eq!(captured, vec!["center".to_string()]);

        let restored: Vec<(&str, bool)> = group
            .iter()
            .map(|(value, _)| {
                let checked = FieldKind::Radio.restored_checked(value, &captured[0]);
                (*value, checked.unwrap_or(false))
            })
            .collect();
        assert_eq!(restored, group.to_vec());
    }
}
