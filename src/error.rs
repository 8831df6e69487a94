//! Unified error type for hammerbeam.
//!
//! Drawing into the in-memory canvas and frame buffer is infallible, so the
//! only failures left come from the panel link. None of them is fatal: the
//! display task logs and tries again on the next refresh.

/// Top-level error type used across the application.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// SPI transfer to the panel failed.
    Display,

    /// Chip-select line could not be driven.
    ChipSelect,
}
