//! web-sys implementations of the capability traits, plus the small
//! helpers the components use to find elements and attach listeners.

use crate::error::UiError;
use crate::platform::{FieldKind, FileInfo, FormField, FormSurface, Storage};
use crate::settings::{ClientSettings, SETTINGS_ELEMENT_ID};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, EventTarget, HtmlElement, HtmlFormElement, HtmlInputElement,
    HtmlSelectElement, HtmlTextAreaElement, Window,
};

pub const CARD_FORM_ID: &str = "cardForm";
pub const TOAST_CONTAINER_ID: &str = "toast-container";

const FORM_CONTROLS: &str = "input, select, textarea";

pub fn window() -> Result<Window, UiError> {
    web_sys::window().ok_or(UiError::Unavailable("window"))
}

pub fn document() -> Result<Document, UiError> {
    window()?.document().ok_or(UiError::Unavailable("document"))
}

/// Look up an element by id and cast it; `None` if absent or of another type.
pub fn element_by_id<T: JsCast>(id: &str) -> Option<T> {
    document()
        .ok()?
        .get_element_by_id(id)?
        .dyn_into::<T>()
        .ok()
}

/// Every element matching `selector` that casts to `T`, in document order.
pub fn query_all<T: JsCast>(selector: &str) -> Result<Vec<T>, UiError> {
    let list = document()?
        .query_selector_all(selector)
        .map_err(UiError::dom)?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect())
}

/// Attach `handler` to `event` for the lifetime of the page.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), UiError>
where
    F: FnMut(web_sys::Event) + 'static,
{
    let closure = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(UiError::dom)?;
    closure.forget();
    Ok(())
}

pub fn set_visible(element: &HtmlElement, visible: bool) {
    let display = if visible { "inline-block" } else { "none" };
    if let Err(e) = element.style().set_property("display", display) {
        log::warn!("Failed to toggle visibility: {:?}", e);
    }
}

pub fn confirm(message: &str) -> bool {
    window()
        .and_then(|w| w.confirm_with_message(message).map_err(UiError::dom))
        .unwrap_or(false)
}

/// Fixed container the toasts are rendered into, created on first use.
pub fn toast_container() -> Result<HtmlElement, UiError> {
    let doc = document()?;
    if let Some(existing) = doc.get_element_by_id(TOAST_CONTAINER_ID) {
        return existing
            .dyn_into::<HtmlElement>()
            .map_err(|_| UiError::MissingElement(TOAST_CONTAINER_ID.to_string()));
    }

    let container = doc
        .create_element("div")
        .map_err(UiError::dom)?
        .dyn_into::<HtmlElement>()
        .map_err(|_| UiError::Unavailable("HtmlElement"))?;
    container.set_id(TOAST_CONTAINER_ID);
    container.set_class_name("toast-container position-fixed top-0 end-0 p-3");
    container
        .style()
        .set_property("z-index", "1055")
        .map_err(UiError::dom)?;

    let body = doc.body().ok_or(UiError::Unavailable("document.body"))?;
    body.append_child(&container).map_err(UiError::dom)?;
    Ok(container)
}

/// Client settings from the page's JSON island, or the defaults.
pub fn read_settings() -> ClientSettings {
    match element_by_id::<Element>(SETTINGS_ELEMENT_ID).and_then(|el| el.text_content()) {
        Some(raw) => ClientSettings::from_json(&raw),
        None => ClientSettings::default(),
    }
}

/// First file picked in a file input.
pub fn picked_file(input: &HtmlInputElement) -> Option<FileInfo> {
    let file = input.files()?.get(0)?;
    Some(FileInfo {
        name: file.name(),
        mime_type: file.type_(),
        size: file.size() as u64,
    })
}

/// `window.localStorage`.
pub struct WebStorage {
    inner: web_sys::Storage,
}

impl WebStorage {
    pub fn local() -> Result<Self, UiError> {
        let inner = window()?
            .local_storage()
            .map_err(UiError::storage)?
            .ok_or(UiError::Unavailable("localStorage"))?;
        Ok(Self { inner })
    }
}

impl Storage for WebStorage {
    fn read(&self, key: &str) -> Result<Option<String>, UiError> {
        self.inner.get_item(key).map_err(UiError::storage)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), UiError> {
        self.inner.set_item(key, value).map_err(UiError::storage)
    }

    fn remove(&self, key: &str) -> Result<(), UiError> {
        self.inner.remove_item(key).map_err(UiError::storage)
    }
}

/// A live `<form>` element.
#[derive(Clone)]
pub struct WebForm {
    form: HtmlFormElement,
}

impl WebForm {
    pub fn by_id(id: &str) -> Option<Self> {
        element_by_id::<HtmlFormElement>(id).map(|form| Self { form })
    }

    /// The form an input belongs to.
    pub fn owning(input: &HtmlInputElement) -> Option<Self> {
        input.form().map(|form| Self { form })
    }

    pub fn element(&self) -> &HtmlFormElement {
        &self.form
    }

    fn controls(&self) -> Vec<Element> {
        let Ok(list) = self.form.query_selector_all(FORM_CONTROLS) else {
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }
}

impl FormSurface for WebForm {
    fn fields(&self) -> Vec<FormField> {
        let mut fields = Vec::new();
        for control in self.controls() {
            if let Some(input) = control.dyn_ref::<HtmlInputElement>() {
                let name = input.name();
                if name.is_empty() {
                    continue;
                }
                let kind = FieldKind::from_input_type(&input.type_());
                // only the checked member of a radio group speaks for it
                let Some(value) = kind.captured_value(input.checked(), &input.value()) else {
                    continue;
                };
                fields.push(FormField::new(name, kind, value));
            } else if let Some(select) = control.dyn_ref::<HtmlSelectElement>() {
                if !select.name().is_empty() {
                    fields.push(FormField::new(select.name(), FieldKind::Text, select.value()));
                }
            } else if let Some(area) = control.dyn_ref::<HtmlTextAreaElement>() {
                if !area.name().is_empty() {
                    fields.push(FormField::new(area.name(), FieldKind::Text, area.value()));
                }
            }
        }
        fields
    }

    fn set_value(&self, name: &str, value: &str) -> bool {
        let mut matched = false;
        for control in self.controls() {
            if let Some(input) = control.dyn_ref::<HtmlInputElement>() {
                if input.name() != name {
                    continue;
                }
                let kind = FieldKind::from_input_type(&input.type_());
                match kind.restored_checked(&input.value(), value) {
                    Some(checked) => input.set_checked(checked),
                    None if kind == FieldKind::File => continue,
                    None => input.set_value(value),
                }
                matched = true;
            } else if let Some(select) = control.dyn_ref::<HtmlSelectElement>() {
                if select.name() == name {
                    select.set_value(value);
                    matched = true;
                }
            } else if let Some(area) = control.dyn_ref::<HtmlTextAreaElement>() {
                if area.name() == name {
                    area.set_value(value);
                    matched = true;
                }
            }
        }
        matched
    }

    fn clear_input(&self, id: &str) {
        match element_by_id::<HtmlInputElement>(id) {
            Some(input) => input.set_value(""),
            None => log::warn!("{}", UiError::MissingElement(id.to_string())),
        }
    }

    fn reset(&self) {
        self.form.reset();
        if let Err(e) = self.form.class_list().remove_1("was-validated") {
            log::warn!("Failed to drop validation styling: {:?}", e);
        }
    }
}
