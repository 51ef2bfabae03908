//! Full-page loading overlay state machine.
//!
//! DESIGN
//! ======
//! The overlay is one element whose body is always exactly one of spinner,
//! error or offline content, plus a visibility flag. Every `show*` rewrites
//! the body; `hide` only clears visibility. The observable state is derived
//! from both, so a stale body can never be shown under the wrong state.
//!
//! States: Hidden (initial) -> Active | Error | Offline, any -> Hidden.

#[cfg(test)]
#[path = "overlay_test.rs"]
mod overlay_test;

pub const DEFAULT_LOADING_MESSAGE: &str = "Loading...";
pub const DEFAULT_ERROR_MESSAGE: &str = "An error occurred";
pub const OFFLINE_TITLE: &str = "No Internet Connection";
pub const OFFLINE_HINT: &str = "Please check your connection and try again.";

/// Content rendered inside the overlay.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OverlayBody {
    Spinner { message: String },
    Error { message: String },
    Offline,
}

impl OverlayBody {
    /// User actions offered alongside this body.
    pub fn actions(&self) -> &'static [OverlayAction] {
        match self {
            Self::Spinner { .. } => &[],
            Self::Error { .. } => &[OverlayAction::Retry],
            Self::Offline => &[OverlayAction::Retry, OverlayAction::ContinueOffline],
        }
    }
}

/// Buttons the overlay can offer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OverlayAction {
    /// Reload the whole page.
    Retry,
    /// Dismiss the offline overlay without reloading.
    ContinueOffline,
}

impl OverlayAction {
    pub fn label(self) -> &'static str {
        match self {
            Self::Retry => "Retry",
            Self::ContinueOffline => "Continue Offline",
        }
    }
}

/// Connectivity change reported by the environment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NetworkSignal {
    Restored,
    Lost,
}

/// Observable overlay state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OverlayState {
    Hidden,
    Active(String),
    Error(String),
    Offline,
}

/// Render model handed to the presentation layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OverlayView {
    pub active: bool,
    pub body: OverlayBody,
}

/// Loading overlay manager.
#[derive(Clone, Debug)]
pub struct LoadingOverlay {
    mounted: bool,
    visible: bool,
    body: OverlayBody,
}

impl Default for LoadingOverlay {
    fn default() -> Self {
        Self::new()
    }
}

impl LoadingOverlay {
    /// Overlay backed by an element, hidden, with the default spinner body.
    pub fn new() -> Self {
        Self {
            mounted: true,
            visible: false,
            body: OverlayBody::Spinner { message: DEFAULT_LOADING_MESSAGE.to_owned() },
        }
    }

    /// Overlay with no backing element; every transition is a no-op.
    pub fn unmounted() -> Self {
        Self { mounted: false, ..Self::new() }
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Show the spinner with `message`.
    pub fn show(&mut self, message: impl Into<String>) {
        self.present(OverlayBody::Spinner { message: message.into() });
    }

    /// Clear visibility; the body is left as is.
    pub fn hide(&mut self) {
        if self.mounted && self.visible {
            log::debug!("overlay: hidden");
            self.visible = false;
        }
    }

    /// Show an error body with a retry action.
    pub fn show_error(&mut self, message: impl Into<String>) {
        self.present(OverlayBody::Error { message: message.into() });
    }

    /// Show the offline body with retry and continue-offline actions.
    pub fn show_offline(&mut self) {
        self.present(OverlayBody::Offline);
    }

    /// "Continue Offline": dismiss without reloading.
    pub fn continue_offline(&mut self) {
        self.hide();
    }

    /// Apply a connectivity change. Restored always hides, lost always shows
    /// the offline body, whatever was on screen before.
    pub fn on_network(&mut self, signal: NetworkSignal) {
        match signal {
            NetworkSignal::Restored => self.hide(),
            NetworkSignal::Lost => self.show_offline(),
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn body(&self) -> &OverlayBody {
        &self.body
    }

    pub fn state(&self) -> OverlayState {
        if !self.visible {
            return OverlayState::Hidden;
        }
        match &self.body {
            OverlayBody::Spinner { message } => OverlayState::Active(message.clone()),
            OverlayBody::Error { message } => OverlayState::Error(message.clone()),
            OverlayBody::Offline => OverlayState::Offline,
        }
    }

    pub fn view(&self) -> OverlayView {
        OverlayView { active: self.visible, body: self.body.clone() }
    }

    fn present(&mut self, body: OverlayBody) {
        if !self.mounted {
            return;
        }
        log::debug!("overlay: showing {body:?}");
        self.body = body;
        self.visible = true;
    }
}
