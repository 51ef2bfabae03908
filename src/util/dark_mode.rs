//! Document-level theme marker and OS colour-scheme query.
//!
//! Applies the `dark-mode` class to `<body>` and a `data-theme` attribute to
//! `<html>` so global stylesheets can key off either. Requires a browser
//! environment.
//!
//! TRADE-OFFS
//! ==========
//! These are best-effort browser-only side effects; off-browser builds no-op
//! so server rendering and native tests stay deterministic.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use crate::state::theme::ThemeMode;

#[cfg(feature = "hydrate")]
const DARK_CLASS: &str = "dark-mode";

/// Whether the OS reports a dark colour-scheme preference.
pub fn os_prefers_dark() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Mirror `mode` onto the document marker.
pub fn apply(mode: ThemeMode) {
    #[cfg(feature = "hydrate")]
    {
        let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        if let Some(body) = doc.body() {
            let class_list = body.class_list();
            let _ = match mode {
                ThemeMode::Dark => class_list.add_1(DARK_CLASS),
                ThemeMode::Light => class_list.remove_1(DARK_CLASS),
            };
        }
        if let Some(el) = doc.document_element() {
            let _ = el.set_attribute("data-theme", mode.as_str());
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = mode;
    }
}

/// Read the mode currently rendered by the document, if a body exists.
pub fn applied_mode() -> Option<ThemeMode> {
    #[cfg(feature = "hydrate")]
    {
        let body = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body())?;
        Some(if body.class_list().contains(DARK_CLASS) { ThemeMode::Dark } else { ThemeMode::Light })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
