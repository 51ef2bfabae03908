//! Browser runtime: discovers the page, mounts the chrome, wires listeners,
//! executes coordinator commands and keeps one real timer armed.
//!
//! DESIGN
//! ======
//! The coordinator never sees the DOM. This module is the only place that
//! translates between browser events and `PageEvent`s, and between
//! `Command`s and browser side effects. Exactly one `gloo_timers` timeout is
//! alive at a time, armed for the coordinator's earliest deadline; when it
//! fires the coordinator ticks and the timer is re-armed.
//!
//! Off-browser builds keep the same surface: commands are logged and the
//! timer is never armed, so server rendering and native tests stay inert.

use crate::app::Chrome;
use crate::coordinator::Command;

#[cfg(feature = "hydrate")]
pub use browser::{ChromeApi, page_chrome, start};

/// Carry out coordinator commands.
pub fn run_commands(commands: Vec<Command>) {
    #[cfg(feature = "hydrate")]
    {
        for command in commands {
            browser::run_command(command);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        for command in commands {
            log::debug!("runtime: {command:?} (no browser)");
        }
    }
}

/// Arm the page timer for the coordinator's next deadline.
pub fn arm_timer(chrome: Chrome) {
    #[cfg(feature = "hydrate")]
    {
        browser::arm_timer(chrome);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = chrome;
    }
}

#[cfg(feature = "hydrate")]
mod browser {
    use std::cell::RefCell;

    use gloo_timers::callback::Timeout;
    use leptos::prelude::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;

    use crate::app::{Chrome, PageChrome, provide_chrome};
    use crate::components::styles::{LOADER_STYLES_ATTR, NOTICE_STYLES_ATTR};
    use crate::components::theme_toggle::ThemeToggle;
    use crate::config::{CONFIG_ELEMENT_ID, ChromeConfig};
    use crate::coordinator::{ClickDecision, Command, PageCoordinator, PageEnv, PageEvent, ReadyState};
    use crate::state::notice::NoticeKind;
    use crate::state::theme::{ThemeMode, ToggleHost, toggle_icon_class};
    use crate::util::clock;
    use crate::util::dark_mode;
    use crate::util::links::AnchorClick;
    use crate::util::storage::LocalStorageStore;

    const TOGGLE_ID: &str = "themeToggleHeader";
    const HEADER_SELECTOR: &str = ".header-container, .user-info, .navbar";
    const PREFERRED_HEADER_SELECTOR: &str = ".user-info";
    const THEME_EVENT: &str = "themeChanged";
    const GLOBAL_NAME: &str = "pageChrome";

    thread_local! {
        static CHROME: RefCell<Option<Chrome>> = const { RefCell::new(None) };
        static TIMER: RefCell<Option<(u64, Timeout)>> = const { RefCell::new(None) };
    }

    /// Where the toggle will live, resolved once at startup.
    enum ToggleSlot {
        Existing(web_sys::Element),
        Header(web_sys::HtmlElement),
        Missing,
    }

    impl ToggleSlot {
        fn host(&self) -> ToggleHost {
            match self {
                Self::Existing(_) => ToggleHost::Existing,
                Self::Header(_) => ToggleHost::Header,
                Self::Missing => ToggleHost::Missing,
            }
        }
    }

    /// Boot the chrome once the document body exists.
    pub fn start() {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            log::warn!("runtime: no document; page chrome disabled");
            return;
        };
        if ReadyState::from_dom(&document.ready_state()) == ReadyState::Parsed {
            boot(ReadyState::Parsed);
            return;
        }
        // Still parsing: the body may not exist yet, so defer mounting. The
        // coordinator is built as "loading" and gets the longer grace period.
        listen(&document, "DOMContentLoaded", |_| {
            if let Some(chrome) = boot(ReadyState::Loading) {
                chrome.dispatch(PageEvent::DomContentLoaded);
            }
        });
    }

    fn boot(ready_state: ReadyState) -> Option<Chrome> {
        if let Some(existing) = CHROME.with(|slot| *slot.borrow()) {
            return Some(existing);
        }
        let window = web_sys::window()?;
        let document = window.document()?;

        let raw_config = document.get_element_by_id(CONFIG_ELEMENT_ID).and_then(|el| el.text_content());
        let config = ChromeConfig::from_json_or_default(raw_config.as_deref());
        let slot = locate_toggle(&document);
        let body = document.body();

        let env = PageEnv {
            ready_state,
            toggle_host: slot.host(),
            os_prefers_dark: dark_mode::os_prefers_dark(),
            overlay_mounted: body.is_some(),
            notice_mounted: body.is_some(),
            host: window.location().hostname().unwrap_or_default(),
        };
        let mut store = LocalStorageStore;
        let (coordinator, commands) = PageCoordinator::start(&env, config, &mut store, clock::now_ms());
        let chrome = Chrome::new(coordinator);
        CHROME.with(|cell| *cell.borrow_mut() = Some(chrome));

        if let Some(body) = body {
            mount_chrome(&document, body, chrome);
        }
        mount_toggle(slot, chrome);
        install_listeners(&window, &document, chrome);
        expose(&window);

        chrome.settle(commands);
        log::info!("page chrome ready (theme {})", chrome.current_mode());
        Some(chrome)
    }

    fn locate_toggle(document: &web_sys::Document) -> ToggleSlot {
        if let Some(existing) = document.get_element_by_id(TOGGLE_ID) {
            return ToggleSlot::Existing(existing);
        }
        let preferred = document.query_selector(PREFERRED_HEADER_SELECTOR).ok().flatten();
        let header = preferred.or_else(|| document.query_selector(HEADER_SELECTOR).ok().flatten());
        match header.and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok()) {
            Some(el) => ToggleSlot::Header(el),
            None => ToggleSlot::Missing,
        }
    }

    fn mount_chrome(document: &web_sys::Document, body: web_sys::HtmlElement, chrome: Chrome) {
        // Static placeholders with our ids would shadow the reactive ones.
        for id in ["pageLoader", "notification"] {
            if let Some(stale) = document.get_element_by_id(id) {
                stale.remove();
            }
        }
        let loader_styles = !has_element(document, &format!("style[{LOADER_STYLES_ATTR}]"));
        let notice_styles = !has_element(document, &format!("style[{NOTICE_STYLES_ATTR}]"));

        leptos::mount::mount_to(body, move || {
            view! { <PageChrome chrome loader_styles notice_styles/> }
        })
        .forget();
    }

    fn mount_toggle(slot: ToggleSlot, chrome: Chrome) {
        match slot {
            ToggleSlot::Existing(el) => {
                listen(&el, "click", move |_| chrome.dispatch(PageEvent::ThemeToggleClicked));
            }
            ToggleSlot::Header(container) => {
                leptos::mount::mount_to(container, move || {
                    provide_chrome(chrome);
                    view! { <ThemeToggle/> }
                })
                .forget();
            }
            ToggleSlot::Missing => log::debug!("runtime: no header container, theme toggle skipped"),
        }
    }

    fn install_listeners(window: &web_sys::Window, document: &web_sys::Document, chrome: Chrome) {
        listen(window, "online", move |_| chrome.dispatch(PageEvent::ConnectionRestored));
        listen(window, "offline", move |_| chrome.dispatch(PageEvent::ConnectionLost));
        listen(document, "click", move |ev| {
            if ev.default_prevented() {
                return;
            }
            let Some(click) = anchor_click(&ev) else {
                return;
            };
            if chrome.on_click(&click) == ClickDecision::Intercept {
                ev.prevent_default();
            }
        });
    }

    fn anchor_click(ev: &web_sys::Event) -> Option<AnchorClick> {
        let anchor = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
            .and_then(|el| el.closest("a").ok().flatten())?;
        let modified = ev
            .dyn_ref::<web_sys::MouseEvent>()
            .is_some_and(|m| m.ctrl_key() || m.meta_key() || m.shift_key() || m.button() != 0);
        Some(AnchorClick { href: anchor.get_attribute("href"), target: anchor.get_attribute("target"), modified })
    }

    fn listen<T: AsRef<web_sys::EventTarget>>(target: &T, name: &str, handler: impl FnMut(web_sys::Event) + 'static) {
        let closure = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
        if let Err(e) = target.as_ref().add_event_listener_with_callback(name, closure.as_ref().unchecked_ref()) {
            log::warn!("runtime: failed to listen for {name}: {e:?}");
        }
        // Page-lifetime listener.
        closure.forget();
    }

    fn has_element(document: &web_sys::Document, selector: &str) -> bool {
        document.query_selector(selector).ok().flatten().is_some()
    }

    // =========================================================================
    // COMMANDS
    // =========================================================================

    pub(super) fn run_command(command: Command) {
        let Some(window) = web_sys::window() else {
            return;
        };
        match command {
            Command::ThemeChanged(mode) => {
                dark_mode::apply(mode);
                sync_existing_toggle(&window, mode);
                broadcast_theme(&window, mode);
            }
            Command::RestyleCharts => log::debug!("runtime: chart restyle requested"),
            Command::Reload => {
                if let Err(e) = window.location().reload() {
                    log::warn!("runtime: reload failed: {e:?}");
                }
            }
            Command::Navigate(url) => {
                if let Err(e) = window.location().set_href(&url) {
                    log::warn!("runtime: navigation to {url} failed: {e:?}");
                }
            }
        }
    }

    /// Keep a page-supplied toggle's icon in step with the applied mode.
    fn sync_existing_toggle(window: &web_sys::Window, mode: ThemeMode) {
        let icon = window
            .document()
            .and_then(|d| d.query_selector(&format!("#{TOGGLE_ID} i")).ok().flatten());
        if let Some(icon) = icon {
            icon.set_class_name(toggle_icon_class(mode));
        }
    }

    fn broadcast_theme(window: &web_sys::Window, mode: ThemeMode) {
        let Some(document) = window.document() else {
            return;
        };
        let detail = js_sys::Object::new();
        let _ = js_sys::Reflect::set(&detail, &JsValue::from_str("theme"), &JsValue::from_str(mode.as_str()));
        let init = web_sys::CustomEventInit::new();
        init.set_detail(&detail);
        match web_sys::CustomEvent::new_with_event_init_dict(THEME_EVENT, &init) {
            Ok(event) => {
                let _ = document.dispatch_event(&event);
            }
            Err(e) => log::warn!("runtime: failed to build {THEME_EVENT} event: {e:?}"),
        }
    }

    // =========================================================================
    // TIMER
    // =========================================================================

    pub(super) fn arm_timer(chrome: Chrome) {
        let deadline = chrome.state().with_untracked(PageCoordinator::next_deadline);
        TIMER.with(|slot| {
            let mut slot = slot.borrow_mut();
            if slot.as_ref().map(|(due, _)| *due) == deadline {
                return;
            }
            // Dropping a gloo timeout clears it.
            *slot = deadline.map(|due| {
                let delay = u32::try_from(due.saturating_sub(clock::now_ms())).unwrap_or(u32::MAX);
                let timeout = Timeout::new(delay, move || {
                    let fired = TIMER.with(|slot| slot.borrow_mut().take());
                    chrome.tick();
                    drop(fired);
                });
                (due, timeout)
            });
        });
    }

    // =========================================================================
    // SCRIPT API
    // =========================================================================

    /// Page-script handle to the chrome, also published as `window.pageChrome`.
    #[wasm_bindgen]
    pub struct ChromeApi {
        chrome: Chrome,
    }

    #[wasm_bindgen]
    impl ChromeApi {
        #[wasm_bindgen(js_name = showLoader)]
        pub fn show_loader(&self, message: Option<String>) {
            self.chrome.show_loader(message);
        }

        #[wasm_bindgen(js_name = hideLoader)]
        pub fn hide_loader(&self) {
            self.chrome.hide_loader();
        }

        #[wasm_bindgen(js_name = showError)]
        pub fn show_error(&self, message: Option<String>) {
            self.chrome.show_error(message);
        }

        #[wasm_bindgen(js_name = showOffline)]
        pub fn show_offline(&self) {
            self.chrome.show_offline();
        }

        /// `kind` is one of `success`, `error`, `warning`, `info`; anything
        /// else falls back to success.
        #[wasm_bindgen(js_name = showNotice)]
        pub fn show_notice(&self, message: String, kind: Option<String>, duration_ms: Option<u32>) {
            let kind = kind.as_deref().and_then(NoticeKind::parse);
            self.chrome.show_notice(message, kind, duration_ms.map(u64::from));
        }

        #[wasm_bindgen(js_name = hideNotice)]
        pub fn hide_notice(&self) {
            self.chrome.hide_notice();
        }

        #[wasm_bindgen(js_name = toggleTheme)]
        pub fn toggle_theme(&self) {
            self.chrome.toggle_theme();
        }

        /// Mode read from the document marker, falling back to chrome state.
        #[wasm_bindgen(js_name = currentTheme)]
        pub fn current_theme(&self) -> String {
            dark_mode::applied_mode().unwrap_or_else(|| self.chrome.current_mode()).as_str().to_owned()
        }
    }

    /// The running chrome, or `undefined` before the document has parsed.
    #[wasm_bindgen(js_name = pageChrome)]
    pub fn page_chrome() -> Option<ChromeApi> {
        CHROME.with(|slot| *slot.borrow()).map(|chrome| ChromeApi { chrome })
    }

    fn expose(window: &web_sys::Window) {
        let Some(api) = page_chrome() else {
            return;
        };
        if let Err(e) = js_sys::Reflect::set(window, &JsValue::from_str(GLOBAL_NAME), &JsValue::from(api)) {
            log::warn!("runtime: failed to publish window.{GLOBAL_NAME}: {e:?}");
        }
    }
}
