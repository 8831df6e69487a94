//! Logging shims.
//!
//! Library code logs through these macros so it builds on the host without a
//! logger. With the `defmt` feature they forward to `defmt`; otherwise they
//! expand to nothing.

macro_rules! info {
    ($($arg:tt)*) => {{
        #[cfg(feature = "defmt")]
        ::defmt::info!($($arg)*);
    }};
}

macro_rules! debug {
    ($($arg:tt)*) => {{
        #[cfg(feature = "defmt")]
        ::defmt::debug!($($arg)*);
    }};
}

pub(crate) use {debug, info};
