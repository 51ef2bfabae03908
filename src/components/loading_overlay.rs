//! Full-page loading overlay (`#pageLoader`).
//!
//! Renders exactly one body at a time: spinner, error panel or offline panel.

#[cfg(test)]
#[path = "loading_overlay_test.rs"]
mod loading_overlay_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::{AnyView, IntoAny};

use crate::app::{Chrome, use_chrome};
use crate::coordinator::PageEvent;
use crate::state::overlay::{OFFLINE_HINT, OFFLINE_TITLE, OverlayAction, OverlayBody};

#[component]
pub fn LoadingOverlay() -> impl IntoView {
    let chrome = use_chrome();
    let state = chrome.state();

    let class = move || overlay_class(state.with(|c| c.overlay().is_visible()));
    let body = Memo::new(move |_| state.with(|c| c.overlay().body().clone()));

    view! {
        <div id="pageLoader" class=class>
            {move || render_body(body.get(), chrome)}
        </div>
    }
}

fn render_body(body: OverlayBody, chrome: Chrome) -> AnyView {
    let actions = body.actions();
    match body {
        OverlayBody::Spinner { message } => view! {
            <div class="loader-spinner"></div>
            <p class="loader-text">{message}</p>
        }
        .into_any(),
        OverlayBody::Error { message } => view! {
            <div class="loader-panel">
                <i class=status_icon_class(false)></i>
                <p class="loader-text">{message}</p>
                <div class="loader-actions">{action_buttons(actions, chrome)}</div>
            </div>
        }
        .into_any(),
        OverlayBody::Offline => view! {
            <div class="loader-panel">
                <i class=status_icon_class(true)></i>
                <p class="loader-text">{OFFLINE_TITLE}</p>
                <p class="loader-hint">{OFFLINE_HINT}</p>
                <div class="loader-actions">{action_buttons(actions, chrome)}</div>
            </div>
        }
        .into_any(),
    }
}

fn action_buttons(actions: &'static [OverlayAction], chrome: Chrome) -> impl IntoView {
    actions
        .iter()
        .map(|&action| {
            view! {
                <button class=action_class(action) on:click=move |_| chrome.dispatch(PageEvent::Overlay(action))>
                    {action.label()}
                </button>
            }
        })
        .collect_view()
}

fn overlay_class(visible: bool) -> &'static str {
    if visible { "loader active" } else { "loader" }
}

fn status_icon_class(offline: bool) -> &'static str {
    if offline { "fas fa-wifi-slash loader-icon loader-icon--offline" } else { "fas fa-exclamation-triangle loader-icon loader-icon--error" }
}

fn action_class(action: OverlayAction) -> &'static str {
    match action {
        OverlayAction::Retry => "loader-btn loader-btn--primary",
        OverlayAction::ContinueOffline => "loader-btn loader-btn--secondary",
    }
}
