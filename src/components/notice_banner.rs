//! Transient notice banner (`#notification`). Clicking it dismisses it.

use leptos::prelude::*;

use crate::app::use_chrome;
use crate::coordinator::PageEvent;

#[component]
pub fn NoticeBanner() -> impl IntoView {
    let chrome = use_chrome();
    let state = chrome.state();
    let notice = Memo::new(move |_| state.with(|c| c.notice().view()));

    view! {
        <div
            id="notification"
            class=move || notice.with(|n| n.class())
            role="status"
            on:click=move |_| chrome.dispatch(PageEvent::NoticeClicked)
        >
            <i class=move || notice.with(|n| n.kind.icon_class())></i>
            <span id="notificationText">{move || notice.with(|n| n.text.clone())}</span>
        </div>
    }
}
