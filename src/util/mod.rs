//! Utility helpers shared across page-chrome modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, document
//! marker, clock) and small pure helpers (link classification, task queue)
//! from the state machines so those stay natively testable.

pub mod clock;
pub mod dark_mode;
pub mod links;
pub mod storage;
pub mod timers;
