//! Battery and connectivity status glyphs.
//!
//! ## Components
//!
//! - **Canvas**: 68×68 RGB565 buffer, rotated before it reaches the panel
//! - **Draw**: battery outline/fill, charging bolt, link glyph
//! - **Event**: status events and the listeners subscribed to them

pub mod canvas;
pub mod draw;
pub mod event;

use embedded_graphics::pixelcolor::{BinaryColor, Rgb565};
use embedded_graphics::prelude::*;

/// Latest known status, as shown on the canvas.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StatusState {
    /// State of charge, 0-100 %.
    pub battery: u8,
    /// USB power present.
    pub charging: bool,
    /// Link to the central half is up.
    pub connected: bool,
}

/// Foreground/background colour pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub foreground: Rgb565,
    pub background: Rgb565,
}

impl Palette {
    /// Dark on light, or light on dark when `inverted`.
    pub const fn new(inverted: bool) -> Self {
        if inverted {
            Self {
                foreground: Rgb565::WHITE,
                background: Rgb565::BLACK,
            }
        } else {
            Self {
                foreground: Rgb565::BLACK,
                background: Rgb565::WHITE,
            }
        }
    }

    /// Background as a panel pixel.
    pub fn background_binary(&self) -> BinaryColor {
        to_binary(self.background)
    }
}

/// Threshold a canvas colour to a panel pixel (`On` is white).
pub fn to_binary(color: Rgb565) -> BinaryColor {
    BinaryColor::from(color.g() > Rgb565::MAX_G / 2)
}
