//! Browser side of the business card form.
//!
//! Attaches to the server-rendered page and wires template selection,
//! inline validation, the social media builder, toasts and autosave.
//! Page access goes through the traits in [`platform`] so the logic can be
//! exercised without a browser.

use any_spawner::Executor;
use leptos::prelude::*;

pub mod autosave;
pub mod dom;
pub mod error;
pub mod gallery;
pub mod platform;
pub mod settings;
pub mod shortcuts;
pub mod social;
pub mod toast;
pub mod validate;

#[cfg(test)]
mod testing;

use crate::dom::{WebForm, CARD_FORM_ID};
use crate::error::UiError;
use crate::toast::Toaster;

fn boot() -> Result<(), UiError> {
    let settings = dom::read_settings();
    let toaster = Toaster::new(settings.clone());

    validate::attach(toaster)?;

    let card_form = WebForm::by_id(CARD_FORM_ID);
    let store = card_form
        .as_ref()
        .and_then(|_| autosave::open(&settings.storage_key));
    let saved = store.as_ref().and_then(|store| store.load());

    // social rows must exist before the saved values are written back
    let social = social::attach(toaster, saved.as_ref())?;
    if let (Some(form), Some(snapshot)) = (card_form.as_ref(), saved.as_ref()) {
        let restored = snapshot.apply_to(form);
        log::info!("Restored {} saved form fields", restored);
    }

    // restore before the gallery reads the template select
    let gallery = gallery::attach()?;

    match (card_form, store) {
        (Some(form), Some(store)) => {
            autosave::attach(&form, store.clone())?;
            shortcuts::attach(form, store, toaster, gallery, social)?;
        }
        (Some(_), None) => log::warn!("Autosave and shortcuts unavailable"),
        (None, _) => log::debug!("No #{} on this page", CARD_FORM_ID),
    }

    log::info!("Business Card Generator initialized");
    Ok(())
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    let _ = Executor::init_wasm_bindgen();

    // lives as long as the page; never disposed
    let owner = Owner::new();
    owner.with(|| {
        if let Err(e) = boot() {
            log::error!("Card form failed to start: {}", e);
        }
    });
    std::mem::forget(owner);
}
