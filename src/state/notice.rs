//! Transient notice banner with a single auto-hide timer.
//!
//! DESIGN
//! ======
//! Each `show` cancels the previous auto-hide task before scheduling its own,
//! so an older, shorter timer can never hide a newer message early.

#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

use serde::{Deserialize, Serialize};

use crate::coordinator::PageTask;
use crate::util::timers::{TaskId, TaskQueue};

pub const DEFAULT_NOTICE_DURATION_MS: u64 = 3000;

/// Visual classifier for a notice. Carries no behaviour.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    #[default]
    Success,
    Error,
    Warning,
    Info,
}

impl NoticeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "success" => Some(Self::Success),
            "error" => Some(Self::Error),
            "warning" => Some(Self::Warning),
            "info" => Some(Self::Info),
            _ => None,
        }
    }

    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Success => "fas fa-check-circle",
            Self::Error => "fas fa-exclamation-circle",
            Self::Warning => "fas fa-exclamation-triangle",
            Self::Info => "fas fa-info-circle",
        }
    }
}

/// Render model for the banner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NoticeView {
    pub visible: bool,
    pub text: String,
    pub kind: NoticeKind,
}

impl NoticeView {
    /// Class list for the banner element, e.g. `notification warning show`.
    pub fn class(&self) -> String {
        let mut class = format!("notification {}", self.kind.as_str());
        if self.visible {
            class.push_str(" show");
        }
        class
    }
}

/// Notice banner manager.
#[derive(Clone, Debug)]
pub struct Notice {
    mounted: bool,
    visible: bool,
    text: String,
    kind: NoticeKind,
    hide_task: Option<TaskId>,
}

impl Default for Notice {
    fn default() -> Self {
        Self::new()
    }
}

impl Notice {
    pub fn new() -> Self {
        Self { mounted: true, visible: false, text: String::new(), kind: NoticeKind::Success, hide_task: None }
    }

    /// Banner with no backing element; `show` is a no-op.
    pub fn unmounted() -> Self {
        Self { mounted: false, ..Self::new() }
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Show `text` and schedule an auto-hide `duration_ms` from `now_ms`,
    /// superseding any pending auto-hide.
    pub fn show(
        &mut self,
        text: impl Into<String>,
        kind: NoticeKind,
        duration_ms: u64,
        tasks: &mut TaskQueue<PageTask>,
        now_ms: u64,
    ) {
        if !self.mounted {
            return;
        }
        self.cancel_pending(tasks);
        self.text = text.into();
        self.kind = kind;
        self.visible = true;
        self.hide_task = Some(tasks.schedule(now_ms, duration_ms, PageTask::HideNotice));
        log::debug!("notice: showing {kind:?} for {duration_ms}ms");
    }

    /// Hide immediately and drop the pending auto-hide.
    pub fn hide(&mut self, tasks: &mut TaskQueue<PageTask>) {
        self.cancel_pending(tasks);
        self.visible = false;
    }

    /// Auto-hide task `id` fired. Ignored unless it is the live one.
    pub fn on_hide_due(&mut self, id: TaskId) {
        if self.hide_task == Some(id) {
            self.hide_task = None;
            self.visible = false;
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn kind(&self) -> NoticeKind {
        self.kind
    }

    pub fn pending_hide(&self) -> Option<TaskId> {
        self.hide_task
    }

    pub fn view(&self) -> NoticeView {
        NoticeView { visible: self.visible, text: self.text.clone(), kind: self.kind }
    }

    fn cancel_pending(&mut self, tasks: &mut TaskQueue<PageTask>) {
        if let Some(id) = self.hide_task.take() {
            tasks.cancel(id);
        }
    }
}
