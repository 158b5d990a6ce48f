//! Inline field checks and upload constraints.
//!
//! The upload limits mirror what the card renderer accepts; keep both
//! sides in step.

use crate::dom::{self, WebForm};
use crate::error::UiError;
use crate::platform::{FileInfo, FormSurface, Notifier};
use crate::toast::Severity;
use regex::Regex;
use std::sync::OnceLock;
use thiserror::Error;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, HtmlFormElement, HtmlInputElement};

pub const IMAGE_MAX_BYTES: u64 = 16 * 1024 * 1024;
pub const CSV_MAX_BYTES: u64 = 5 * 1024 * 1024;

pub const IMAGE_MIME_TYPES: [&str; 5] = [
    "image/jpeg",
    "image/jpg",
    "image/png",
    "image/gif",
    "image/svg+xml",
];

pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address";
pub const INVALID_URL_MESSAGE: &str = "Please enter a valid URL (e.g., https://example.com)";
pub const REQUIRED_FIELDS_MESSAGE: &str = "Please fill in all required fields";

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("static email pattern"))
}

pub fn validate_email(s: &str) -> bool {
    email_regex().is_match(s)
}

/// True when `s` parses as an absolute URL.
pub fn validate_url(s: &str) -> bool {
    url::Url::parse(s).is_ok()
}

/// Drop everything a phone number cannot contain.
pub fn sanitize_phone_input(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_ascii_digit() || c.is_whitespace() || matches!(c, '-' | '(' | ')' | '+'))
        .collect()
}

/// Outcome of an inline check, applied to the input as its custom validity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Validity {
    Valid,
    Invalid(&'static str),
}

impl Validity {
    pub fn is_valid(self) -> bool {
        matches!(self, Validity::Valid)
    }

    /// Message for `setCustomValidity`; empty clears it.
    pub fn message(self) -> &'static str {
        match self {
            Validity::Valid => "",
            Validity::Invalid(msg) => msg,
        }
    }
}

/// Blur check for the email input. Leaving it empty is fine.
pub fn check_email_field(value: &str) -> Validity {
    if value.is_empty() || validate_email(value) {
        Validity::Valid
    } else {
        Validity::Invalid(INVALID_EMAIL_MESSAGE)
    }
}

/// Blur check for the website input. Leaving it empty is fine.
pub fn check_website_field(value: &str) -> Validity {
    if value.is_empty() || validate_url(value) {
        Validity::Valid
    } else {
        Validity::Invalid(INVALID_URL_MESSAGE)
    }
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum UploadError {
    #[error("File is too large. Maximum size is 16MB.")]
    ImageTooLarge,

    #[error("Invalid file type. Please upload PNG, JPG, GIF, or SVG.")]
    UnsupportedImageType,

    #[error("CSV file is too large. Maximum size is 5MB.")]
    CsvTooLarge,

    #[error("Please upload a CSV file.")]
    NotCsv,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileKind {
    Image,
    Csv,
}

impl FileKind {
    /// Id of the file input this kind is attached to.
    pub fn input_id(self) -> &'static str {
        match self {
            FileKind::Image => "logo",
            FileKind::Csv => "csv_file",
        }
    }

    pub fn max_bytes(self) -> u64 {
        match self {
            FileKind::Image => IMAGE_MAX_BYTES,
            FileKind::Csv => CSV_MAX_BYTES,
        }
    }

    /// Size is checked before type.
    pub fn check(self, file: &FileInfo) -> Result<(), UploadError> {
        match self {
            FileKind::Image => {
                if file.size > self.max_bytes() {
                    return Err(UploadError::ImageTooLarge);
                }
                if !IMAGE_MIME_TYPES.contains(&file.mime_type.as_str()) {
                    return Err(UploadError::UnsupportedImageType);
                }
            }
            FileKind::Csv => {
                if file.size > self.max_bytes() {
                    return Err(UploadError::CsvTooLarge);
                }
                if !file.name.to_lowercase().ends_with(".csv") {
                    return Err(UploadError::NotCsv);
                }
            }
        }
        Ok(())
    }

    pub fn success_message(self) -> &'static str {
        match self {
            FileKind::Image => "Logo uploaded successfully!",
            FileKind::Csv => "CSV file loaded successfully!",
        }
    }
}

/// Check a picked file, clearing its input and raising a toast on failure.
pub fn validate_file<F, N>(form: &F, notifier: &N, file: &FileInfo, kind: FileKind) -> bool
where
    F: FormSurface + ?Sized,
    N: Notifier + ?Sized,
{
    match kind.check(file) {
        Ok(()) => {
            notifier.notify(kind.success_message(), Severity::Success);
            true
        }
        Err(e) => {
            log::info!("Rejected {} upload '{}': {}", kind.input_id(), file.name, e);
            notifier.notify(&e.to_string(), Severity::Error);
            form.clear_input(kind.input_id());
            false
        }
    }
}

fn apply_validity(input: &HtmlInputElement, validity: Validity) {
    input.set_custom_validity(validity.message());
    let classes = input.class_list();
    let result = if validity.is_valid() {
        classes.remove_1("is-invalid")
    } else {
        classes.add_1("is-invalid")
    };
    if let Err(e) = result {
        log::warn!("Failed to mark #{}: {:?}", input.id(), e);
    }
}

fn attach_blur_check(id: &str, check: fn(&str) -> Validity) -> Result<(), UiError> {
    let Some(input) = dom::element_by_id::<HtmlInputElement>(id) else {
        return Ok(());
    };
    let target = input.clone();
    dom::listen(&input, "blur", move |_| {
        apply_validity(&target, check(&target.value()));
    })
}

fn attach_file_check<N>(kind: FileKind, notifier: N) -> Result<(), UiError>
where
    N: Notifier + Copy + 'static,
{
    let Some(input) = dom::element_by_id::<HtmlInputElement>(kind.input_id()) else {
        return Ok(());
    };
    let target = input.clone();
    dom::listen(&input, "change", move |_| {
        let Some(file) = dom::picked_file(&target) else {
            return;
        };
        match WebForm::owning(&target) {
            Some(form) => {
                validate_file(&form, &notifier, &file, kind);
            }
            None => log::warn!("#{} is not inside a form", kind.input_id()),
        }
    })
}

fn attach_submit_check<N>(form: HtmlFormElement, notifier: N) -> Result<(), UiError>
where
    N: Notifier + Copy + 'static,
{
    let target = form.clone();
    dom::listen(&form, "submit", move |ev| {
        if !target.check_validity() {
            ev.prevent_default();
            ev.stop_propagation();
            let first_invalid = target
                .query_selector(":invalid")
                .ok()
                .flatten()
                .and_then(|el| el.dyn_into::<HtmlElement>().ok());
            if let Some(field) = first_invalid {
                if let Err(e) = field.focus() {
                    log::warn!("Failed to focus invalid field: {:?}", e);
                }
                notifier.notify(REQUIRED_FIELDS_MESSAGE, Severity::Error);
            }
        }
        if let Err(e) = target.class_list().add_1("was-validated") {
            log::warn!("Failed to mark form as validated: {:?}", e);
        }
    })
}

/// Wire the inline checks onto whichever of the known inputs the page has.
pub fn attach<N>(notifier: N) -> Result<(), UiError>
where
    N: Notifier + Copy + 'static,
{
    for form in dom::query_all::<HtmlFormElement>("form")? {
        attach_submit_check(form, notifier)?;
    }

    attach_blur_check("email", check_email_field)?;
    attach_blur_check("website", check_website_field)?;

    if let Some(phone) = dom::element_by_id::<HtmlInputElement>("phone") {
        let target = phone.clone();
        dom::listen(&phone, "input", move |_| {
            let raw = target.value();
            let clean = sanitize_phone_input(&raw);
            if clean != raw {
                target.set_value(&clean);
            }
        })?;
    }

    attach_file_check(FileKind::Image, notifier)?;
    attach_file_check(FileKind::Csv, notifier)?;
    Ok(())
}
