//! Header theme toggle button (`#themeToggleHeader`).

use leptos::prelude::*;

use crate::app::use_chrome;
use crate::coordinator::PageEvent;
use crate::state::theme::{TOGGLE_ARIA_LABEL, toggle_icon_class};

/// Toggle button; mounted only when the page has a header container and no
/// toggle of its own.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let chrome = use_chrome();
    let state = chrome.state();

    let icon = move || {
        state.with(|c| c.theme().toggle_view().map_or_else(|| toggle_icon_class(c.current_mode()), |v| v.icon_class))
    };

    view! {
        <button
            id="themeToggleHeader"
            class="theme-toggle-header"
            type="button"
            aria-label=TOGGLE_ARIA_LABEL
            title="Toggle theme"
            on:click=move |_| chrome.dispatch(PageEvent::ThemeToggleClicked)
        >
            <i class=icon></i>
        </button>
    }
}
