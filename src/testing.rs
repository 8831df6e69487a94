//! Deterministic random sources for unit tests.

use core::num::NonZeroU32;
use rand_core::{Error, RngCore};

/// Replays a fixed list of 32-bit draws, wrapping around at the end.
pub struct ScriptedRng {
    draws: &'static [u32],
    pos: usize,
}

impl ScriptedRng {
    pub fn new(draws: &'static [u32]) -> Self {
        Self { draws, pos: 0 }
    }
}

impl RngCore for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        let v = self.draws[self.pos % self.draws.len()];
        self.pos += 1;
        v
    }

    fn next_u64(&mut self) -> u64 {
        u64::from(self.next_u32())
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.next_u32().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

/// A random source that is never ready.
pub struct FailingRng;

impl RngCore for FailingRng {
    fn next_u32(&mut self) -> u32 {
        panic!("FailingRng has no entropy")
    }

    fn next_u64(&mut self) -> u64 {
        panic!("FailingRng has no entropy")
    }

    fn fill_bytes(&mut self, _dest: &mut [u8]) {
        panic!("FailingRng has no entropy")
    }

    fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), Error> {
        Err(Error::from(NonZeroU32::new(Error::CUSTOM_START).unwrap()))
    }
}
