//! Application-wide constants and compile-time configuration.
//!
//! Panel geometry, slideshow timing and hardware pin assignments live here
//! so they can be tuned in one place. [`WidgetConfig`] carries the subset the
//! widget needs at runtime.

use crate::status::canvas::Orientation;

// Panel

/// nice!view (Sharp LS011B7DH03) width in pixels.
pub const SCREEN_WIDTH: u32 = 160;

/// nice!view height in pixels.
pub const SCREEN_HEIGHT: u32 = 68;

/// Side length of the square status canvas.
pub const CANVAS_SIZE: u32 = 68;

/// Left edge of the status canvas; it hugs the right side of the panel.
pub const CANVAS_X: i32 = (SCREEN_WIDTH - CANVAS_SIZE) as i32;

/// The art region fills whatever the status canvas leaves free.
pub const ART_WIDTH: u32 = SCREEN_WIDTH - CANVAS_SIZE;
pub const ART_HEIGHT: u32 = SCREEN_HEIGHT;

/// Rotation applied to the status canvas before it is blitted.
pub const CANVAS_ORIENTATION: Orientation = Orientation::Rotate90;

/// Draw light-on-dark instead of dark-on-light.
pub const WIDGET_INVERTED: bool = false;

/// Sharp memory LCDs need the VCOM bit toggled at least once a second.
pub const VCOM_TOGGLE_MS: u64 = 500;


// Slideshow

/// Number of frames in the decorative art set.
pub const ART_FRAME_COUNT: usize = 30;

/// Milliseconds between slideshow advances.
///
/// Ten minutes keeps the panel and radio mostly idle; shorten it for a
/// livelier animation.
pub const ART_ROTATE_INTERVAL_MS: u64 = 600_000;

// Status

/// Treat USB power as "charging" and subscribe to USB connection events.
pub const USB_CHARGING_DETECTION: bool = true;

/// VBUS polling period (ms).
pub const VBUS_POLL_MS: u64 = 1_000;

/// Battery sampling period (ms). Must be a multiple of [`VBUS_POLL_MS`].
pub const BATTERY_SAMPLE_MS: u64 = 60_000;

// GPIO pin assignments (nice!nano v2 + nice!view)
//
// These are logical names; the concrete `embassy_nrf::peripherals::*` are
// picked in `main.rs`.
//
//   Panel SCK   → P0.20
//   Panel MOSI  → P0.17
//   Panel CS    → P0.06   (active high)
//   SPI clock   2 MHz, mode 0 (the LS011 tops out at 2 MHz)

/// Runtime widget settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WidgetConfig {
    /// Slideshow advance period (ms).
    pub art_interval_ms: u64,
    /// Whether USB power counts as charging.
    pub usb_charging: bool,
    /// Swap foreground and background.
    pub inverted: bool,
    /// Status canvas rotation.
    pub orientation: Orientation,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            art_interval_ms: ART_ROTATE_INTERVAL_MS,
            usb_charging: USB_CHARGING_DETECTION,
            inverted: WIDGET_INVERTED,
            orientation: CANVAS_ORIENTATION,
        }
    }
}
