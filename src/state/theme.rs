//! Persisted light/dark theme preference.
//!
//! DESIGN
//! ======
//! The applied mode is the source of truth for what is rendered; the store
//! only seeds it at startup and records every change. Resolution precedence
//! is persisted value, then OS colour-scheme preference, then light.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::util::storage::PreferenceStore;

/// Preference key the mode is persisted under unless configured otherwise.
pub const DEFAULT_STORAGE_KEY: &str = "theme";

/// Applied visual mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a persisted value. Only the exact lowercase names are accepted.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where the toggle control can live on this page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToggleHost {
    /// The page already ships a `#themeToggleHeader` control.
    Existing,
    /// A header container exists; a toggle is created inside it.
    Header,
    /// No header container: no toggle is available.
    #[default]
    Missing,
}

impl ToggleHost {
    pub fn available(self) -> bool {
        !matches!(self, Self::Missing)
    }
}

/// Render model for the toggle button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeToggleView {
    /// Font Awesome icon class: sun while dark (click for light), moon while light.
    pub icon_class: &'static str,
    pub aria_label: &'static str,
}

pub const TOGGLE_ARIA_LABEL: &str = "Toggle dark/light theme";

/// Resolve the effective mode from a persisted value and the OS preference.
///
/// A persisted value that is present but unrecognised resolves to light.
pub fn resolve_mode(persisted: Option<&str>, os_prefers_dark: bool) -> ThemeMode {
    match persisted.map(str::trim).filter(|raw| !raw.is_empty()) {
        Some(raw) => ThemeMode::parse(raw).unwrap_or(ThemeMode::Light),
        None if os_prefers_dark => ThemeMode::Dark,
        None => ThemeMode::Light,
    }
}

/// Theme preference manager.
#[derive(Clone, Debug)]
pub struct ThemePreference {
    storage_key: String,
    applied: ThemeMode,
    toggle_host: ToggleHost,
}

impl Default for ThemePreference {
    fn default() -> Self {
        Self::new(DEFAULT_STORAGE_KEY)
    }
}

impl ThemePreference {
    pub fn new(storage_key: impl Into<String>) -> Self {
        Self { storage_key: storage_key.into(), applied: ThemeMode::Light, toggle_host: ToggleHost::Missing }
    }

    /// Resolve, apply and persist the startup mode. Returns the mode to
    /// broadcast. Safe to call again: it re-resolves from the store.
    pub fn initialize(&mut self, host: ToggleHost, os_prefers_dark: bool, store: &mut dyn PreferenceStore) -> ThemeMode {
        self.toggle_host = host;
        let persisted = store.get(&self.storage_key).unwrap_or_else(|e| {
            log::warn!("theme: reading preference failed: {e}");
            None
        });
        let mode = resolve_mode(persisted.as_deref(), os_prefers_dark);
        self.applied = mode;
        self.persist(store);
        log::debug!("theme: initialized to {mode} (toggle {:?})", self.toggle_host);
        mode
    }

    /// Flip the applied mode and persist it. Returns the new mode.
    pub fn toggle(&mut self, store: &mut dyn PreferenceStore) -> ThemeMode {
        self.applied = self.applied.toggled();
        self.persist(store);
        log::debug!("theme: toggled to {}", self.applied);
        self.applied
    }

    /// The mode currently applied to the document.
    pub fn current_mode(&self) -> ThemeMode {
        self.applied
    }

    pub fn toggle_host(&self) -> ToggleHost {
        self.toggle_host
    }

    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    /// Toggle render model, or `None` when the page has nowhere to host it.
    pub fn toggle_view(&self) -> Option<ThemeToggleView> {
        self.toggle_host.available().then(|| ThemeToggleView {
            icon_class: toggle_icon_class(self.applied),
            aria_label: TOGGLE_ARIA_LABEL,
        })
    }

    fn persist(&self, store: &mut dyn PreferenceStore) {
        if let Err(e) = store.set(&self.storage_key, self.applied.as_str()) {
            log::warn!("theme: persisting preference failed: {e}");
        }
    }
}

/// Icon class shown on the toggle while `mode` is applied.
pub fn toggle_icon_class(mode: ThemeMode) -> &'static str {
    match mode {
        ThemeMode::Dark => "fas fa-sun",
        ThemeMode::Light => "fas fa-moon",
    }
}
