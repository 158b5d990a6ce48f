//! Social media entries
//!
//! The card has room for a bounded number of social accounts. Each entry
//! is a platform select paired with a handle/URL input; the input stays
//! disabled until a platform is chosen.

use crate::autosave::FormSnapshot;
use crate::dom;
use crate::error::UiError;
use crate::platform::Notifier;
use crate::toast::Severity;
use leptos::prelude::*;
use thiserror::Error;
use web_sys::HtmlElement;

pub const CONTAINER_ID: &str = "social-media-container";
pub const ADD_BUTTON_ID: &str = "add-social-media";

const PLATFORM_FIELD_PREFIX: &str = "social_platform_";
const VALUE_FIELD_PREFIX: &str = "social_value_";

pub const MAX_SOCIAL_ENTRIES: usize = 1;
pub const NO_PLATFORM_PLACEHOLDER: &str = "Select platform first";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SocialPlatform {
    LinkedIn,
    Twitter,
    Instagram,
    GitHub,
    Facebook,
    TikTok,
}

impl SocialPlatform {
    pub const ALL: [SocialPlatform; 6] = [
        SocialPlatform::LinkedIn,
        SocialPlatform::Twitter,
        SocialPlatform::Instagram,
        SocialPlatform::GitHub,
        SocialPlatform::Facebook,
        SocialPlatform::TikTok,
    ];

    /// Option value submitted with the form.
    pub fn key(self) -> &'static str {
        match self {
            SocialPlatform::LinkedIn => "linkedin",
            SocialPlatform::Twitter => "twitter",
            SocialPlatform::Instagram => "instagram",
            SocialPlatform::GitHub => "github",
            SocialPlatform::Facebook => "facebook",
            SocialPlatform::TikTok => "tiktok",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.key() == key)
    }

    pub fn label(self) -> &'static str {
        match self {
            SocialPlatform::LinkedIn => "LinkedIn",
            SocialPlatform::Twitter => "Twitter/X",
            SocialPlatform::Instagram => "Instagram",
            SocialPlatform::GitHub => "GitHub",
            SocialPlatform::Facebook => "Facebook",
            SocialPlatform::TikTok => "TikTok",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            SocialPlatform::LinkedIn => "💼",
            SocialPlatform::Twitter => "🐦",
            SocialPlatform::Instagram => "📷",
            SocialPlatform::GitHub => "💻",
            SocialPlatform::Facebook => "📘",
            SocialPlatform::TikTok => "🎵",
        }
    }

    /// Canonical example of what to type for this platform.
    pub fn placeholder(self) -> &'static str {
        match self {
            SocialPlatform::LinkedIn => "https://linkedin.com/in/yourname",
            SocialPlatform::Twitter | SocialPlatform::Instagram | SocialPlatform::TikTok => {
                "@yourusername"
            }
            SocialPlatform::GitHub => "github.com/yourusername",
            SocialPlatform::Facebook => "https://facebook.com/yourname",
        }
    }
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SocialError {
    #[error("Maximum {0} social media account allowed")]
    AtCapacity(usize),

    #[error("All social media platforms have been added")]
    NoPlatformsLeft,
}

/// State of the value input paired with a platform select.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ValueInput {
    pub placeholder: &'static str,
    pub enabled: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SocialEntry {
    /// Suffix of the entry's field names
    pub slot: usize,
    /// Platforms that were free when the entry was created
    pub offered: Vec<SocialPlatform>,
    pub platform: Option<SocialPlatform>,
    pub value: String,
}

impl SocialEntry {
    pub fn platform_field(&self) -> String {
        format!("{}{}", PLATFORM_FIELD_PREFIX, self.slot)
    }

    pub fn value_field(&self) -> String {
        format!("{}{}", VALUE_FIELD_PREFIX, self.slot)
    }

    pub fn input_state(&self) -> ValueInput {
        match self.platform {
            Some(platform) => ValueInput {
                placeholder: platform.placeholder(),
                enabled: true,
            },
            None => ValueInput {
                placeholder: NO_PLATFORM_PLACEHOLDER,
                enabled: false,
            },
        }
    }
}

/// Bounded list of social entries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SocialEntries {
    capacity: usize,
    entries: Vec<SocialEntry>,
}

impl Default for SocialEntries {
    fn default() -> Self {
        Self::with_capacity(MAX_SOCIAL_ENTRIES)
    }
}

impl SocialEntries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            entries: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[SocialEntry] {
        &self.entries
    }

    pub fn get(&self, slot: usize) -> Option<&SocialEntry> {
        self.entries.iter().find(|e| e.slot == slot)
    }

    /// Whether the add control should be shown.
    pub fn can_add(&self) -> bool {
        self.entries.len() < self.capacity
    }

    pub fn available_platforms(&self) -> Vec<SocialPlatform> {
        SocialPlatform::ALL
            .into_iter()
            .filter(|p| !self.entries.iter().any(|e| e.platform == Some(*p)))
            .collect()
    }

    /// Append an empty entry offering the still-unused platforms.
    pub fn add(&mut self) -> Result<usize, SocialError> {
        if !self.can_add() {
            return Err(SocialError::AtCapacity(self.capacity));
        }
        let offered = self.available_platforms();
        if offered.is_empty() {
            return Err(SocialError::NoPlatformsLeft);
        }

        let slot = (0..)
            .find(|s| self.get(*s).is_none())
            .unwrap_or(self.entries.len());
        self.entries.push(SocialEntry {
            slot,
            offered,
            platform: None,
            value: String::new(),
        });
        Ok(slot)
    }

    pub fn remove(&mut self, slot: usize) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.slot != slot);
        self.entries.len() != before
    }

    /// Choosing no platform disables the value input and empties it.
    pub fn set_platform(&mut self, slot: usize, platform: Option<SocialPlatform>) -> Option<ValueInput> {
        let entry = self.entries.iter_mut().find(|e| e.slot == slot)?;
        entry.platform = platform;
        if platform.is_none() {
            entry.value.clear();
        }
        Some(entry.input_state())
    }

    pub fn set_value(&mut self, slot: usize, value: String) {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.slot == slot) {
            entry.value = value;
        }
    }

    /// Drop every entry, as a form reset leaves no row meaningful.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Recreate the entries saved in `snapshot`, keeping their slots so the
    /// saved field names line up again. Returns how many came back.
    pub fn restore(&mut self, snapshot: &FormSnapshot) -> usize {
        let mut saved: Vec<(usize, Option<SocialPlatform>)> = snapshot
            .iter()
            .filter_map(|(name, value)| {
                let slot = name.strip_prefix(PLATFORM_FIELD_PREFIX)?.parse().ok()?;
                Some((slot, SocialPlatform::from_key(value)))
            })
            .collect();
        saved.sort_by_key(|(slot, _)| *slot);

        let mut restored = 0;
        for (slot, platform) in saved {
            if !self.can_add() {
                break;
            }
            if self.get(slot).is_some() {
                continue;
            }
            let offered = self.available_platforms();
            if platform.is_some_and(|p| !offered.contains(&p)) {
                continue;
            }
            self.entries.push(SocialEntry {
                slot,
                offered,
                platform: None,
                value: String::new(),
            });
            self.set_platform(slot, platform);
            if platform.is_some() {
                let value = snapshot.get(&format!("{}{}", VALUE_FIELD_PREFIX, slot)).unwrap_or_default();
                self.set_value(slot, value.to_string());
            }
            restored += 1;
        }
        restored
    }
}

#[component]
fn SocialRow(entries: RwSignal<SocialEntries>, entry: SocialEntry) -> impl IntoView {
    let slot = entry.slot;
    let state = move || {
        entries.with(|e| {
            e.get(slot)
                .map(|entry| entry.input_state())
                .unwrap_or(ValueInput {
                    placeholder: NO_PLATFORM_PLACEHOLDER,
                    enabled: false,
                })
        })
    };
    let value = move || entries.with(|e| e.get(slot).map(|entry| entry.value.clone()).unwrap_or_default());

    let on_platform_change = move |ev: web_sys::Event| {
        let platform = SocialPlatform::from_key(&event_target_value(&ev));
        entries.update(|e| {
            e.set_platform(slot, platform);
        });
    };
    let on_value_input = move |ev: web_sys::Event| {
        let typed = event_target_value(&ev);
        entries.update(|e| e.set_value(slot, typed));
    };
    let on_remove = move |_: web_sys::MouseEvent| {
        entries.update(|e| {
            e.remove(slot);
        });
    };

    let platform_field = entry.platform_field();
    let value_field = entry.value_field();
    let chosen = entry.platform;
    let options = entry
        .offered
        .iter()
        .map(|p| {
            view! {
                <option value=p.key() selected={chosen == Some(*p)}>
                    {format!("{} {}", p.icon(), p.label())}
                </option>
            }
        })
        .collect_view();

    view! {
        <div class="mb-3 social-media-entry" data-index=slot.to_string()>
            <div class="row">
                <div class="col-md-4">
                    <select class="form-select" name=platform_field on:change=on_platform_change>
                        <option value="">"Select Platform"</option>
                        {options}
                    </select>
                </div>
                <div class="col-md-7">
                    <input
                        type="text"
                        class="form-control"
                        name=value_field
                        placeholder=move || state().placeholder
                        disabled=move || !state().enabled
                        prop:value=value
                        on:input=on_value_input
                    />
                </div>
                <div class="col-md-1">
                    <button type="button" class="btn btn-outline-danger btn-sm" on:click=on_remove>
                        <i class="fas fa-times"></i>
                    </button>
                </div>
            </div>
        </div>
    }
}

#[component]
fn SocialRows(entries: RwSignal<SocialEntries>) -> impl IntoView {
    view! {
        <For
            each=move || entries.with(|e| e.entries().to_vec())
            key=|entry| entry.slot
            children=move |entry| view! { <SocialRow entries=entries entry=entry /> }
        />
    }
}

/// Render the entries into their container and drive the add button.
/// Entries found in `saved` are recreated before the first render.
pub fn attach<N>(
    notifier: N,
    saved: Option<&FormSnapshot>,
) -> Result<Option<RwSignal<SocialEntries>>, UiError>
where
    N: Notifier + Copy + 'static,
{
    let Some(container) = dom::element_by_id::<HtmlElement>(CONTAINER_ID) else {
        return Ok(None);
    };

    let mut model = SocialEntries::new();
    if let Some(snapshot) = saved {
        let restored = model.restore(snapshot);
        if restored > 0 {
            log::debug!("Restored {} social media entries", restored);
        }
    }
    let entries = RwSignal::new(model);
    leptos::mount::mount_to(container, move || view! { <SocialRows entries=entries /> }).forget();

    if let Some(button) = dom::element_by_id::<HtmlElement>(ADD_BUTTON_ID) {
        let shown = button.clone();
        Effect::new(move || {
            dom::set_visible(&shown, entries.with(|e| e.can_add()));
        });

        dom::listen(&button, "click", move |_| {
            if let Some(Err(e)) = entries.try_update(|e| e.add()) {
                notifier.notify(&e.to_string(), Severity::Error);
            }
        })?;
    }

    Ok(Some(entries))
}
