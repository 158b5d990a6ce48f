//! Runtime settings handed over by the page.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Element id of the JSON island the server renders into the page.
pub const SETTINGS_ELEMENT_ID: &str = "cardform-settings";

pub const DEFAULT_STORAGE_KEY: &str = "businessCardForm";

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ClientSettings {
    /// Local storage key holding the autosaved form
    pub storage_key: String,
    pub toast_delay_ms: u32,
    pub error_toast_delay_ms: u32,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            toast_delay_ms: 3000,
            error_toast_delay_ms: 5000,
        }
    }
}

impl ClientSettings {
    /// Parse the settings island, falling back to defaults when it is malformed.
    pub fn from_json(raw: &str) -> Self {
        match serde_json::from_str(raw) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Ignoring malformed client settings: {}", e);
                Self::default()
            }
        }
    }

    pub fn toast_delay(&self) -> Duration {
        Duration::from_millis(u64::from(self.toast_delay_ms))
    }

    pub fn error_toast_delay(&self) -> Duration {
        Duration::from_millis(u64::from(self.error_toast_delay_ms))
    }
}
