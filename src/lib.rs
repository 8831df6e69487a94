//! Peripheral status widget for a split keyboard's nice!view panel.
//!
//! The panel is split into two regions:
//!
//! - **Art** (left): a fixed set of decorative frames shown one at a time in
//!   shuffled order, each frame exactly once per cycle.
//! - **Status** (right): battery level, charging bolt and split-link glyph,
//!   redrawn whenever the host reports a change.
//!
//! Everything in this library is hardware-independent and runs on the host:
//! `cargo test --lib`. The embedded binary (`main.rs`, feature `embedded`)
//! adds the panel driver, battery sampling and the display task.

#![cfg_attr(not(test), no_std)]

mod fmt;

pub mod battery_logic;
pub mod config;
pub mod error;
pub mod screen;
pub mod slideshow;
pub mod status;
pub mod widget;

#[cfg(test)]
mod testing;

pub use error::Error;
pub use screen::Framebuffer;
pub use status::event::{StatusEvent, StatusSource};
pub use status::StatusState;
pub use widget::StatusWidget;

// ═══════════════════════════════════════════════════════════════════════════
// Unit Tests
// ═══════════════════════════════════════════════════════════════════════════
