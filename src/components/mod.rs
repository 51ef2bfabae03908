//! Leptos components for the page chrome.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render coordinator view-models read from the `Chrome` context
//! and turn clicks into `PageEvent`s; none of them hold state of their own.

pub mod loading_overlay;
pub mod notice_banner;
pub mod styles;
pub mod theme_toggle;
