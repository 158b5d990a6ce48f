//! Toast notifications
//!
//! Toasts stack in the order they were raised inside a fixed container
//! that is created the first time something is shown. Each toast carries a
//! close button and expires on its own after a severity-dependent delay.

use crate::dom;
use crate::platform::Notifier;
use crate::settings::ClientSettings;
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Severity {
    Info,
    Success,
    Error,
}

impl Severity {
    /// Background class of the toast body.
    pub fn bg_class(self) -> &'static str {
        match self {
            Severity::Info => "text-bg-primary",
            Severity::Success => "text-bg-success",
            Severity::Error => "text-bg-danger",
        }
    }

    pub fn icon_class(self) -> &'static str {
        match self {
            Severity::Info => "fas fa-info-circle",
            Severity::Success => "fas fa-check-circle",
            Severity::Error => "fas fa-exclamation-circle",
        }
    }

    /// How long a toast of this severity stays on screen.
    pub fn dismiss_after(self, settings: &ClientSettings) -> Duration {
        match self {
            Severity::Error => settings.error_toast_delay(),
            Severity::Info | Severity::Success => settings.toast_delay(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub text: String,
    pub severity: Severity,
}

/// Toasts currently on screen, oldest first.
#[derive(Debug, Default)]
pub struct ToastStack {
    next_id: u64,
    toasts: Vec<Toast>,
}

impl ToastStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a toast and return its id.
    pub fn push(&mut self, text: &str, severity: Severity) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            text: text.to_string(),
            severity,
        });
        id
    }

    /// Remove a toast; returns false if it was already gone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

/// Browser notifier rendering a [`ToastStack`] with Leptos.
#[derive(Clone, Copy)]
pub struct Toaster {
    stack: RwSignal<ToastStack>,
    mounted: StoredValue<bool>,
    settings: StoredValue<ClientSettings>,
}

impl Toaster {
    pub fn new(settings: ClientSettings) -> Self {
        Self {
            stack: RwSignal::new(ToastStack::new()),
            mounted: StoredValue::new(false),
            settings: StoredValue::new(settings),
        }
    }

    fn ensure_mounted(&self) -> bool {
        if self.mounted.get_value() {
            return true;
        }
        match dom::toast_container() {
            Ok(container) => {
                let stack = self.stack;
                leptos::mount::mount_to(container, move || view! { <ToastList stack=stack /> })
                    .forget();
                self.mounted.set_value(true);
                true
            }
            Err(e) => {
                log::error!("Cannot show toasts: {}", e);
                false
            }
        }
    }
}

impl Notifier for Toaster {
    fn notify(&self, message: &str, severity: Severity) {
        log::debug!("toast ({:?}): {}", severity, message);
        if !self.ensure_mounted() {
            return;
        }

        let Some(id) = self.stack.try_update(|s| s.push(message, severity)) else {
            return;
        };

        let delay = self.settings.with_value(|s| severity.dismiss_after(s));
        let stack = self.stack;
        Timeout::new(delay.as_millis() as u32, move || {
            stack.try_update(|s| s.dismiss(id));
        })
        .forget();
    }
}

#[component]
fn ToastList(stack: RwSignal<ToastStack>) -> impl IntoView {
    view! {
        <For
            each=move || stack.with(|s| s.toasts().to_vec())
            key=|toast| toast.id
            children=move |toast| {
                let id = toast.id;
                view! {
                    <div
                        class=format!("toast show align-items-center {} border-0", toast.severity.bg_class())
                        role="alert"
                    >
                        <div class="d-flex">
                            <div class="toast-body">
                                <i class=format!("{} me-2", toast.severity.icon_class())></i>
                                {toast.text}
                            </div>
                            <button
                                type="button"
                                class="btn-close btn-close-white me-2 m-auto"
                                aria-label="Close"
                                on:click=move |_| {
                                    stack.try_update(|s| s.dismiss(id));
                                }
                            ></button>
                        </div>
                    </div>
                }
            }
        />
    }
}
