//! Page coordinator: sequences the overlay, theme and notice around page
//! lifecycle, connectivity and link navigation.
//!
//! ARCHITECTURE
//! ============
//! The coordinator is a plain value. Environment facts come in as
//! [`PageEnv`] and [`PageEvent`]s, time comes in as explicit `now_ms`
//! arguments, and anything that must happen outside the model comes back out
//! as [`Command`]s. The browser runtime owns the real listeners and the one
//! real timer; tests drive the same code with a virtual clock.

#[cfg(test)]
#[path = "coordinator_test.rs"]
mod coordinator_test;

use crate::config::ChromeConfig;
use crate::state::notice::{Notice, NoticeKind};
use crate::state::overlay::{LoadingOverlay, NetworkSignal, OverlayAction};
use crate::state::theme::{ThemeMode, ThemePreference, ToggleHost};
use crate::util::links::{AnchorClick, NavigationIntent};
use crate::util::storage::PreferenceStore;
use crate::util::timers::TaskQueue;

/// Document parsing state at coordinator construction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReadyState {
    /// `document.readyState == "loading"`.
    Loading,
    /// `interactive` or `complete`.
    #[default]
    Parsed,
}

impl ReadyState {
    pub fn from_dom(raw: &str) -> Self {
        if raw == "loading" { Self::Loading } else { Self::Parsed }
    }
}

/// Facts about the hosting page gathered once at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageEnv {
    pub ready_state: ReadyState,
    pub toggle_host: ToggleHost,
    pub os_prefers_dark: bool,
    pub overlay_mounted: bool,
    pub notice_mounted: bool,
    /// Hostname of the current location, used to classify links.
    pub host: String,
}

impl Default for PageEnv {
    fn default() -> Self {
        Self {
            ready_state: ReadyState::Parsed,
            toggle_host: ToggleHost::Missing,
            os_prefers_dark: false,
            overlay_mounted: true,
            notice_mounted: true,
            host: "localhost".to_owned(),
        }
    }
}

/// Deferred work scheduled on the coordinator's task queue.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PageTask {
    /// End of the post-load grace period.
    HidePageLoader,
    /// Notice auto-hide.
    HideNotice,
    /// Follow an intercepted link.
    Navigate(String),
}

/// Events delivered by the environment or by chrome controls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageEvent {
    DomContentLoaded,
    ConnectionRestored,
    ConnectionLost,
    ThemeToggleClicked,
    Overlay(OverlayAction),
    NoticeClicked,
}

/// Side commands the host must carry out.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Broadcast the applied mode (`themeChanged` DOM event).
    ThemeChanged(ThemeMode),
    /// Hook for chart/visualisation restyling after a manual toggle.
    RestyleCharts,
    /// Reload the whole page.
    Reload,
    /// Set `location.href`.
    Navigate(String),
}

/// Whether a click's default action must be prevented.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickDecision {
    Intercept,
    PassThrough,
}

#[derive(Clone, Debug)]
pub struct PageCoordinator {
    theme: ThemePreference,
    overlay: LoadingOverlay,
    notice: Notice,
    tasks: TaskQueue<PageTask>,
    config: ChromeConfig,
    host: String,
    ready_state: ReadyState,
}

impl PageCoordinator {
    /// Build the chrome for a page: resolve the theme, raise the loader, and
    /// schedule its dismissal if the document has already parsed.
    pub fn start(
        env: &PageEnv,
        config: ChromeConfig,
        store: &mut dyn PreferenceStore,
        now_ms: u64,
    ) -> (Self, Vec<Command>) {
        let mut theme = ThemePreference::new(config.storage_key.clone());
        let mode = theme.initialize(env.toggle_host, env.os_prefers_dark, store);

        let mut coordinator = Self {
            theme,
            overlay: if env.overlay_mounted { LoadingOverlay::new() } else { LoadingOverlay::unmounted() },
            notice: if env.notice_mounted { Notice::new() } else { Notice::unmounted() },
            tasks: TaskQueue::new(),
            host: env.host.clone(),
            ready_state: env.ready_state,
            config,
        };

        coordinator.overlay.show(coordinator.config.loading_message.clone());
        if coordinator.ready_state == ReadyState::Parsed {
            coordinator.tasks.schedule(now_ms, coordinator.config.parsed_grace_ms, PageTask::HidePageLoader);
        }
        log::debug!("coordinator: started ({:?}, theme {mode})", env.ready_state);

        (coordinator, vec![Command::ThemeChanged(mode)])
    }

    /// Apply one environment or control event.
    pub fn handle(&mut self, event: PageEvent, now_ms: u64, store: &mut dyn PreferenceStore) -> Vec<Command> {
        match event {
            PageEvent::DomContentLoaded => {
                if self.ready_state == ReadyState::Loading {
                    self.ready_state = ReadyState::Parsed;
                    self.tasks.schedule(now_ms, self.config.parsing_grace_ms, PageTask::HidePageLoader);
                }
                vec![]
            }
            PageEvent::ConnectionRestored => {
                log::info!("network connection restored");
                self.overlay.on_network(NetworkSignal::Restored);
                vec![]
            }
            PageEvent::ConnectionLost => {
                log::info!("network connection lost");
                self.overlay.on_network(NetworkSignal::Lost);
                vec![]
            }
            PageEvent::ThemeToggleClicked => self.toggle_theme(store),
            PageEvent::Overlay(OverlayAction::Retry) => vec![Command::Reload],
            PageEvent::Overlay(OverlayAction::ContinueOffline) => {
                self.overlay.continue_offline();
                vec![]
            }
            PageEvent::NoticeClicked => {
                self.notice.hide(&mut self.tasks);
                vec![]
            }
        }
    }

    /// Decide whether to intercept an anchor click. Internal links raise the
    /// navigating overlay and navigate after the configured delay.
    pub fn on_click(&mut self, click: &AnchorClick, now_ms: u64) -> ClickDecision {
        let Some(intent) = NavigationIntent::capture(click, &self.host) else {
            return ClickDecision::PassThrough;
        };
        if !intent.should_intercept() {
            return ClickDecision::PassThrough;
        }
        log::debug!("coordinator: intercepting navigation to {}", intent.target_url);
        self.overlay.show(self.config.navigating_message.clone());
        self.tasks
            .schedule(now_ms, self.config.navigation_delay_ms, PageTask::Navigate(intent.target_url));
        ClickDecision::Intercept
    }

    /// Run every task due at `now_ms`.
    pub fn tick(&mut self, now_ms: u64) -> Vec<Command> {
        let mut commands = Vec::new();
        for (id, task) in self.tasks.drain_due(now_ms) {
            match task {
                PageTask::HidePageLoader => self.overlay.hide(),
                PageTask::HideNotice => self.notice.on_hide_due(id),
                PageTask::Navigate(url) => commands.push(Command::Navigate(url)),
            }
        }
        commands
    }

    /// When the host should next call [`Self::tick`].
    pub fn next_deadline(&self) -> Option<u64> {
        self.tasks.next_deadline()
    }

    // =========================================================================
    // PROGRAMMATIC API
    // =========================================================================

    /// Show the loader; `None` uses the configured loading message.
    pub fn show_loader(&mut self, message: Option<String>) {
        let message = message.unwrap_or_else(|| self.config.loading_message.clone());
        self.overlay.show(message);
    }

    pub fn hide_loader(&mut self) {
        self.overlay.hide();
    }

    /// Show the error overlay; `None` uses the configured error message.
    pub fn show_error(&mut self, message: Option<String>) {
        let message = message.unwrap_or_else(|| self.config.error_message.clone());
        self.overlay.show_error(message);
    }

    pub fn show_offline(&mut self) {
        self.overlay.show_offline();
    }

    /// Show a notice; kind defaults to success, duration to the configured one.
    pub fn show_notice(&mut self, text: impl Into<String>, kind: Option<NoticeKind>, duration_ms: Option<u64>, now_ms: u64) {
        let duration_ms = duration_ms.unwrap_or(self.config.notice_duration_ms);
        self.notice.show(text, kind.unwrap_or_default(), duration_ms, &mut self.tasks, now_ms);
    }

    pub fn hide_notice(&mut self) {
        self.notice.hide(&mut self.tasks);
    }

    /// Flip the theme; returns the broadcast and chart-restyle commands.
    pub fn toggle_theme(&mut self, store: &mut dyn PreferenceStore) -> Vec<Command> {
        let mode = self.theme.toggle(store);
        vec![Command::ThemeChanged(mode), Command::RestyleCharts]
    }

    pub fn current_mode(&self) -> ThemeMode {
        self.theme.current_mode()
    }

    pub fn theme(&self) -> &ThemePreference {
        &self.theme
    }

    pub fn overlay(&self) -> &LoadingOverlay {
        &self.overlay
    }

    pub fn notice(&self) -> &Notice {
        &self.notice
    }

    pub fn config(&self) -> &ChromeConfig {
        &self.config
    }

    pub fn host(&self) -> &str {
        &self.host
    }
}
