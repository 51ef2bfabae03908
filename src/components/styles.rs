//! Minimal style blocks for the overlay, toggle and notice banner.
//!
//! Each block carries a data attribute so a host page that already ships it
//! (or a second chrome instance) is detected and the block is not injected
//! twice. Colours come from the host's CSS custom properties.

use leptos::prelude::*;

/// Marker attribute on the loader/toggle style block.
pub const LOADER_STYLES_ATTR: &str = "data-loader-styles";
/// Marker attribute on the notice style block.
pub const NOTICE_STYLES_ATTR: &str = "data-notification-styles";

pub const LOADER_CSS: &str = r"
.loader {
    position: fixed;
    inset: 0;
    display: flex;
    flex-direction: column;
    justify-content: center;
    align-items: center;
    z-index: 2000;
    opacity: 0;
    visibility: hidden;
    transition: opacity 0.3s, visibility 0.3s;
    backdrop-filter: blur(6px);
    background: rgba(243, 255, 247, 0.95);
}
.loader.active { opacity: 1; visibility: visible; }
.dark-mode .loader { background: rgba(15, 42, 28, 0.97); }
.loader-spinner {
    width: 70px;
    height: 70px;
    margin-bottom: 25px;
    border: 4px solid rgba(92, 196, 126, 0.2);
    border-top-color: var(--primary-green);
    border-radius: 50%;
    animation: page-chrome-spin 1.2s cubic-bezier(0.68, -0.55, 0.27, 1.55) infinite;
}
@keyframes page-chrome-spin { to { transform: rotate(360deg); } }
.loader-text { font-size: 18px; font-weight: 500; letter-spacing: 0.5px; color: var(--text-dark); }
.dark-mode .loader-text { color: var(--text-light); }
.loader-panel { text-align: center; padding: 20px; }
.loader-icon { font-size: 48px; margin-bottom: 20px; }
.loader-icon--error { color: var(--secondary-red); }
.loader-icon--offline { color: var(--text-light); }
.loader-hint { max-width: 300px; margin: 0 auto 24px; font-size: 14px; color: var(--text-light); }
.loader-actions { display: flex; gap: 10px; justify-content: center; }
.loader-btn { padding: 12px 24px; border: none; border-radius: 8px; cursor: pointer; font-weight: 600; }
.loader-btn--primary { background: var(--primary-green); color: white; }
.loader-btn--secondary { background: transparent; color: var(--text-dark); border: 1px solid var(--text-light); }
.theme-toggle-header {
    width: 40px;
    height: 40px;
    display: flex;
    align-items: center;
    justify-content: center;
    border: none;
    border-radius: 50%;
    cursor: pointer;
    color: white;
    background: rgba(255, 255, 255, 0.15);
    transition: var(--transition);
}
.theme-toggle-header:hover { background: rgba(255, 255, 255, 0.25); transform: translateY(-2px); }
";

pub const NOTICE_CSS: &str = r"
.notification {
    position: fixed;
    top: 100px;
    right: 20px;
    max-width: 280px;
    display: flex;
    align-items: center;
    gap: 10px;
    padding: 12px 20px;
    z-index: 4000;
    font-size: 14px;
    font-weight: 500;
    color: white;
    background: var(--primary-green);
    border-radius: var(--border-radius);
    box-shadow: var(--shadow-lg);
    transform: translateX(150%);
    transition: transform 0.3s ease-out;
    cursor: pointer;
}
.notification.show { transform: translateX(0); }
.notification.error { background: var(--secondary-red); }
.notification.warning { background: var(--secondary-orange); }
.notification.info { background: var(--secondary-blue); }
@media (max-width: 600px) {
    .notification { top: 80px; right: 10px; left: 10px; max-width: none; }
}
";

/// Style blocks, each rendered only when requested.
#[component]
pub fn ChromeStyles(loader: bool, notice: bool) -> impl IntoView {
    view! {
        <Show when=move || loader>
            <style data-loader-styles="true">{LOADER_CSS}</style>
        </Show>
        <Show when=move || notice>
            <style data-notification-styles="true">{NOTICE_CSS}</style>
        </Show>
    }
}
