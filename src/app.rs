//! Root chrome component and the shared `Chrome` handle.
//!
//! SYSTEM CONTEXT
//! ==============
//! One [`PageCoordinator`] lives in a `RwSignal` wrapped by [`Chrome`]. The
//! handle is provided through Leptos context so components read view-models
//! reactively, and every mutation funnels through the same methods so the
//! resulting commands and the next timer deadline are always settled.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;

use crate::components::loading_overlay::LoadingOverlay;
use crate::components::notice_banner::NoticeBanner;
use crate::components::styles::ChromeStyles;
use crate::coordinator::{ClickDecision, Command, PageCoordinator, PageEvent};
use crate::runtime;
use crate::state::notice::NoticeKind;
use crate::state::theme::ThemeMode;
use crate::util::clock;
use crate::util::links::AnchorClick;
use crate::util::storage;

/// Copyable handle to the page's coordinator.
#[derive(Clone, Copy)]
pub struct Chrome {
    state: RwSignal<PageCoordinator>,
}

impl Chrome {
    pub fn new(coordinator: PageCoordinator) -> Self {
        Self { state: RwSignal::new(coordinator) }
    }

    /// Reactive coordinator signal for view-model reads.
    pub fn state(self) -> RwSignal<PageCoordinator> {
        self.state
    }

    /// Deliver an environment or control event.
    pub fn dispatch(self, event: PageEvent) {
        let mut store = storage::default_store();
        let now = clock::now_ms();
        let commands = self.state.try_update(|c| c.handle(event, now, &mut store)).unwrap_or_default();
        self.settle(commands);
    }

    /// Classify a document click; the caller prevents default on `Intercept`.
    pub fn on_click(self, click: &AnchorClick) -> ClickDecision {
        let now = clock::now_ms();
        let decision = self
            .state
            .try_update(|c| c.on_click(click, now))
            .unwrap_or(ClickDecision::PassThrough);
        self.settle(Vec::new());
        decision
    }

    /// Run due tasks. Called by the runtime timer.
    pub fn tick(self) {
        let now = clock::now_ms();
        let commands = self.state.try_update(|c| c.tick(now)).unwrap_or_default();
        self.settle(commands);
    }

    pub fn show_loader(self, message: Option<String>) {
        self.mutate(|c| c.show_loader(message));
    }

    pub fn hide_loader(self) {
        self.mutate(PageCoordinator::hide_loader);
    }

    pub fn show_error(self, message: Option<String>) {
        self.mutate(|c| c.show_error(message));
    }

    pub fn show_offline(self) {
        self.mutate(PageCoordinator::show_offline);
    }

    pub fn show_notice(self, text: String, kind: Option<NoticeKind>, duration_ms: Option<u64>) {
        let now = clock::now_ms();
        self.mutate(|c| c.show_notice(text, kind, duration_ms, now));
    }

    pub fn hide_notice(self) {
        self.mutate(PageCoordinator::hide_notice);
    }

    pub fn toggle_theme(self) {
        self.dispatch(PageEvent::ThemeToggleClicked);
    }

    pub fn current_mode(self) -> ThemeMode {
        self.state.with_untracked(PageCoordinator::current_mode)
    }

    /// Carry out `commands` and re-arm the runtime timer.
    pub fn settle(self, commands: Vec<Command>) {
        runtime::run_commands(commands);
        runtime::arm_timer(self);
    }

    fn mutate(self, f: impl FnOnce(&mut PageCoordinator)) {
        self.state.update(f);
        self.settle(Vec::new());
    }
}

pub fn provide_chrome(chrome: Chrome) {
    provide_context(chrome);
}

pub fn use_chrome() -> Chrome {
    expect_context::<Chrome>()
}

/// Overlay, notice banner and their style blocks.
///
/// Style blocks the host page already carries are skipped.
#[component]
pub fn PageChrome(
    chrome: Chrome,
    #[prop(default = true)] loader_styles: bool,
    #[prop(default = true)] notice_styles: bool,
) -> impl IntoView {
    provide_chrome(chrome);

    view! {
        <ChromeStyles loader=loader_styles notice=notice_styles/>
        <LoadingOverlay/>
        <NoticeBanner/>
    }
}
