//! Global keyboard shortcuts for the card form.
//!
//! Ctrl/Cmd+Enter submits, Escape clears after a confirmation. The
//! "Clear form" button clears straight away.

use crate::autosave::AutosaveStore;
use crate::dom::{self, WebForm, WebStorage};
use crate::error::UiError;
use crate::gallery::TemplateGallery;
use crate::platform::{FormSurface, Notifier, Storage};
use crate::social::SocialEntries;
use crate::toast::Severity;
use leptos::prelude::*;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, KeyboardEvent};

pub const CLEAR_BUTTON_ID: &str = "clear-form";
pub const CLEAR_CONFIRMATION: &str = "Clear the form?";
pub const FORM_CLEARED_MESSAGE: &str = "Form cleared successfully";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shortcut {
    Submit,
    Clear,
}

impl Shortcut {
    /// Decode a keydown. `ctrl`/`meta` cover both Windows/Linux and macOS.
    pub fn from_key(key: &str, ctrl: bool, meta: bool) -> Option<Self> {
        match key {
            "Enter" if ctrl || meta => Some(Shortcut::Submit),
            "Escape" => Some(Shortcut::Clear),
            _ => None,
        }
    }
}

/// Reset the form and forget everything saved for it. `clear_widgets`
/// brings the gallery and social rows in line with the reset controls.
pub fn clear_form<F, S, N>(form: &F, store: &AutosaveStore<S>, notifier: &N, clear_widgets: impl FnOnce())
where
    F: FormSurface + ?Sized,
    S: Storage,
    N: Notifier + ?Sized,
{
    form.reset();
    clear_widgets();
    store.clear(notifier);
    notifier.notify(FORM_CLEARED_MESSAGE, Severity::Info);
}

pub fn attach<N>(
    form: WebForm,
    store: Rc<AutosaveStore<WebStorage>>,
    notifier: N,
    gallery: Option<RwSignal<TemplateGallery>>,
    social: Option<RwSignal<SocialEntries>>,
) -> Result<(), UiError>
where
    N: Notifier + Copy + 'static,
{
    let clear_widgets = move || {
        if let Some(gallery) = gallery {
            gallery.update(|g| g.clear());
        }
        if let Some(social) = social {
            social.update(|s| s.clear());
        }
    };

    if let Some(button) = dom::element_by_id::<HtmlElement>(CLEAR_BUTTON_ID) {
        let form = form.clone();
        let store = store.clone();
        dom::listen(&button, "click", move |_| {
            clear_form(&form, &store, &notifier, clear_widgets);
        })?;
    }

    let document = dom::document()?;
    dom::listen(&document, "keydown", move |ev| {
        let Some(key) = ev.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        match Shortcut::from_key(&key.key(), key.ctrl_key(), key.meta_key()) {
            Some(Shortcut::Submit) => {
                if let Err(e) = form.element().request_submit() {
                    log::warn!("Shortcut submit failed: {:?}", e);
                }
            }
            Some(Shortcut::Clear) => {
                if dom::confirm(CLEAR_CONFIRMATION) {
                    clear_form(&form, &store, &notifier, clear_widgets);
                }
            }
            None => {}
        }
    })
}
