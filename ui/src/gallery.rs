//! Template gallery
//!
//! Clickable preview tiles mirror the `#template` select: picking a tile
//! sets the select, and exactly one tile carries the `selected` class.

use crate::dom;
use crate::error::UiError;
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use web_sys::{HtmlElement, HtmlSelectElement};

pub const TEMPLATE_CONTROL_ID: &str = "template";
pub const TILE_SELECTOR: &str = ".template-preview";
pub const SELECTED_CLASS: &str = "selected";

const PRESS_EFFECT_MS: u32 = 150;

/// Tile ids in page order and the one currently selected.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TemplateGallery {
    tiles: Vec<String>,
    selected: Option<usize>,
}

impl TemplateGallery {
    pub fn new(tiles: Vec<String>) -> Self {
        Self {
            tiles,
            selected: None,
        }
    }

    /// Pick up the control's value on load; unknown values select nothing.
    pub fn sync_from_control(&mut self, value: &str) {
        if let Some(idx) = self.tiles.iter().position(|t| t == value) {
            self.selected = Some(idx);
        }
    }

    /// Select the tile at `idx`, returning its template id.
    pub fn select_index(&mut self, idx: usize) -> Option<String> {
        let id = self.tiles.get(idx)?.clone();
        self.selected = Some(idx);
        Some(id)
    }

    pub fn select(&mut self, id: &str) -> bool {
        match self.tiles.iter().position(|t| t == id) {
            Some(idx) => {
                self.selected = Some(idx);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    pub fn is_selected(&self, idx: usize) -> bool {
        self.selected == Some(idx)
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected.map(|idx| self.tiles[idx].as_str())
    }

    pub fn tiles(&self) -> &[String] {
        &self.tiles
    }
}

fn press(tile: &HtmlElement) {
    let style = tile.style();
    if style.set_property("transform", "scale(0.95)").is_err() {
        return;
    }
    Timeout::new(PRESS_EFFECT_MS, move || {
        let _ = style.remove_property("transform");
    })
    .forget();
}

/// Bind the tiles to the template select. `None` when the page has no gallery.
pub fn attach() -> Result<Option<RwSignal<TemplateGallery>>, UiError> {
    let tiles = dom::query_all::<HtmlElement>(TILE_SELECTOR)?;
    let Some(control) = dom::element_by_id::<HtmlSelectElement>(TEMPLATE_CONTROL_ID) else {
        return Ok(None);
    };
    if tiles.is_empty() {
        return Ok(None);
    }

    let ids = tiles
        .iter()
        .map(|tile| tile.get_attribute("data-template").unwrap_or_default())
        .collect();
    let mut model = TemplateGallery::new(ids);
    model.sync_from_control(&control.value());
    let gallery = RwSignal::new(model);

    let marked = tiles.clone();
    Effect::new(move || {
        gallery.with(|g| {
            for (idx, tile) in marked.iter().enumerate() {
                let classes = tile.class_list();
                let _ = if g.is_selected(idx) {
                    classes.add_1(SELECTED_CLASS)
                } else {
                    classes.remove_1(SELECTED_CLASS)
                };
            }
        });
    });

    for (idx, tile) in tiles.iter().enumerate() {
        let control = control.clone();
        let pressed = tile.clone();
        dom::listen(tile, "click", move |_| {
            let Some(id) = gallery.try_update(|g| g.select_index(idx)).flatten() else {
                return;
            };
            control.set_value(&id);
            press(&pressed);
        })?;
    }

    log::debug!("Template gallery bound to {} tiles", tiles.len());
    Ok(Some(gallery))
}
