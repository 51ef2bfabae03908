//! Page-chrome state machines.
//!
//! DESIGN
//! ======
//! Each component is a plain data model with explicit transitions and a
//! typed view-model. None of them touch the DOM; the coordinator sequences
//! them and the presentation layer renders their views.

pub mod notice;
pub mod overlay;
pub mod theme;
