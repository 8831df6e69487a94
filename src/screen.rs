//! 1-bpp frame buffer mirroring the Sharp memory LCD.
//!
//! Pixels are packed the way the panel receives them: 20 bytes per line,
//! least-significant bit is the leftmost pixel, `1` is a lit (white) pixel.
//! Lines touched since the last flush are tracked so the driver only sends
//! what changed.

use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use core::convert::Infallible;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;

/// Bytes per panel line.
pub const LINE_BYTES: usize = SCREEN_WIDTH as usize / 8;

const LINES: usize = SCREEN_HEIGHT as usize;

pub struct Framebuffer {
    lines: [[u8; LINE_BYTES]; LINES],
    dirty: u128,
}

impl Framebuffer {
    /// An all-dark buffer with every line marked dirty.
    pub const fn new() -> Self {
        Self {
            lines: [[0; LINE_BYTES]; LINES],
            dirty: (1u128 << LINES) - 1,
        }
    }

    pub fn pixel(&self, p: Point) -> Option<BinaryColor> {
        let (x, y) = Self::index(p)?;
        let on = self.lines[y][x / 8] & (1 << (x % 8)) != 0;
        Some(BinaryColor::from(on))
    }

    /// Packed pixel data of line `y`.
    pub fn line(&self, y: usize) -> &[u8; LINE_BYTES] {
        &self.lines[y]
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty != 0
    }

    /// Indices of lines changed since the last [`Framebuffer::mark_clean`].
    pub fn dirty_lines(&self) -> impl Iterator<Item = usize> + '_ {
        (0..LINES).filter(move |y| self.dirty & (1 << y) != 0)
    }

    pub fn mark_clean(&mut self) {
        self.dirty = 0;
    }

    /// Force a full refresh on the next flush.
    pub fn mark_all_dirty(&mut self) {
        self.dirty = (1u128 << LINES) - 1;
    }

    fn index(p: Point) -> Option<(usize, usize)> {
        let x = usize::try_from(p.x).ok()?;
        let y = usize::try_from(p.y).ok()?;
        (x < SCREEN_WIDTH as usize && y < LINES).then_some((x, y))
    }
}

impl Default for Framebuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl OriginDimensions for Framebuffer {
    fn size(&self) -> Size {
        Size::new(SCREEN_WIDTH, SCREEN_HEIGHT)
    }
}

impl DrawTarget for Framebuffer {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(p, color) in pixels {
            let Some((x, y)) = Self::index(p) else {
                continue;
            };
            let byte = &mut self.lines[y][x / 8];
            let bit = 1u8 << (x % 8);
            let before = *byte;
            match color {
                BinaryColor::On => *byte |= bit,
                BinaryColor::Off => *byte &= !bit,
            }
            if *byte != before {
                self.dirty |= 1 << y;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};

    #[test]
    fn new_buffer_is_dark_and_fully_dirty() {
        let fb = Framebuffer::new();
        assert_eq!(fb.pixel(Point::new(0, 0)), Some(BinaryColor::Off));
        assert_eq!(fb.dirty_lines().count(), LINES);
    }

    #[test]
    fn packs_lsb_first() {
        let mut fb = Framebuffer::new();
        fb.draw_iter([
            Pixel(Point::new(0, 3), BinaryColor::On),
            Pixel(Point::new(9, 3), BinaryColor::On),
        ])
        .unwrap();
        assert_eq!(fb.line(3)[0], 0b0000_0001);
        assert_eq!(fb.line(3)[1], 0b0000_0010);
    }

    #[test]
    fn only_changed_lines_are_dirty() {
        let mut fb = Framebuffer::new();
        fb.mark_clean();
        assert!(!fb.is_dirty());

        // Writing the colour a pixel already has is not a change.
        fb.draw_iter([Pixel(Point::new(5, 5), BinaryColor::Off)]).unwrap();
        assert!(!fb.is_dirty());

        Rectangle::new(Point::new(0, 10), Size::new(4, 2))
            .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
            .draw(&mut fb)
            .unwrap();
        let dirty: [usize; 2] = [10, 11];
        assert!(fb.dirty_lines().eq(dirty.iter().copied()));
    }

    #[test]
    fn mark_all_dirty_forces_a_full_refresh() {
        let mut fb = Framebuffer::new();
        fb.mark_clean();
        fb.mark_all_dirty();
        assert!(fb.dirty_lines().eq(0..LINES));
    }

    #[test]
    fn out_of_bounds_pixels_are_ignored() {
        let mut fb = Framebuffer::new();
        fb.mark_clean();
        fb.draw_iter([
            Pixel(Point::new(-1, 0), BinaryColor::On),
            Pixel(Point::new(160, 0), BinaryColor::On),
            Pixel(Point::new(0, 68), BinaryColor::On),
        ])
        .unwrap();
        assert!(!fb.is_dirty());
        assert_eq!(fb.pixel(Point::new(160, 0)), None);
    }
}
