//! Non-repeating random frame order.
//!
//! A Fisher–Yates permutation of `0..N` plus a cursor. Every index is handed
//! out exactly once per cycle; when the cursor runs off the end a fresh
//! permutation is drawn.

use crate::fmt::info;
use rand_core::RngCore;

/// Shuffle state for `N` frames.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameOrder<const N: usize> {
    order: [usize; N],
    cursor: usize,
}

impl<const N: usize> FrameOrder<N> {
    const NON_EMPTY: () = assert!(N > 0, "a frame order needs at least one frame");

    /// Identity order `0, 1, .., N-1` with the cursor at the start.
    pub fn identity() -> Self {
        let () = Self::NON_EMPTY;
        let mut order = [0; N];
        for (i, slot) in order.iter_mut().enumerate() {
            *slot = i;
        }
        Self { order, cursor: 0 }
    }

    /// A freshly shuffled order.
    pub fn new<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        let mut this = Self::identity();
        this.reshuffle(rng);
        this
    }

    /// Draw a new uniformly random permutation and rewind the cursor.
    ///
    /// If the random source fails the order falls back to identity for this
    /// cycle.
    pub fn reshuffle<R: RngCore + ?Sized>(&mut self, rng: &mut R) {
        *self = Self::identity();

        for i in (1..N).rev() {
            let Some(draw) = draw_u32(rng) else {
                info!("Slideshow: random source unavailable, using identity order");
                *self = Self::identity();
                return;
            };
            // Modulo bias is negligible for 30 frames and purely cosmetic.
            let j = (draw % (i as u32 + 1)) as usize;
            self.order.swap(i, j);
        }
    }

    /// Hand out the next frame index, reshuffling first if the cycle is
    /// exhausted.
    pub fn next<R: RngCore + ?Sized>(&mut self, rng: &mut R) -> usize {
        if self.cursor >= N {
            self.reshuffle(rng);
        }
        let index = self.order[self.cursor];
        self.cursor += 1;
        index
    }

    /// The current permutation.
    pub fn order(&self) -> &[usize; N] {
        &self.order
    }

    /// Position of the next unconsumed index, in `0..=N`.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Indices left before the next reshuffle.
    pub fn remaining(&self) -> usize {
        N - self.cursor
    }
}

fn draw_u32<R: RngCore + ?Sized>(rng: &mut R) -> Option<u32> {
    let mut buf = [0u8; 4];
    rng.try_fill_bytes(&mut buf).ok()?;
    Some(u32::from_le_bytes(buf))
}
