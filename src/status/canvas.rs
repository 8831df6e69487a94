//! Square true-colour canvas for the status glyphs.
//!
//! Pixels are stored as big-endian RGB565, which is also the byte layout
//! handed to the panel side. The canvas is drawn upright and then rotated in
//! place to match how the panel is mounted.

use crate::config::CANVAS_SIZE;
use core::convert::Infallible;
use embedded_graphics::pixelcolor::raw::{RawData, RawU16};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

const SIDE: usize = CANVAS_SIZE as usize;

/// Size of the canvas buffer in bytes.
pub const CANVAS_BYTES: usize = SIDE * SIDE * 2;

/// Clockwise rotation applied before the canvas is blitted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Orientation {
    #[default]
    Rotate0,
    Rotate90,
    Rotate180,
    Rotate270,
}

pub struct Canvas {
    buf: [u8; CANVAS_BYTES],
}

impl Canvas {
    pub fn new(background: Rgb565) -> Self {
        let mut canvas = Self {
            buf: [0; CANVAS_BYTES],
        };
        canvas.fill(background);
        canvas
    }

    /// Raw big-endian RGB565 contents, row-major.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    pub fn pixel(&self, p: Point) -> Option<Rgb565> {
        Self::offset(p).map(|i| self.get(i))
    }

    pub fn fill(&mut self, color: Rgb565) {
        let raw = RawU16::from(color).into_inner().to_be_bytes();
        for px in self.buf.chunks_exact_mut(2) {
            px.copy_from_slice(&raw);
        }
    }

    /// Rotate the contents in place.
    pub fn rotate(&mut self, orientation: Orientation) {
        match orientation {
            Orientation::Rotate0 => {}
            Orientation::Rotate90 => self.rotate_quarter(true),
            Orientation::Rotate180 => {
                // Reversing the pixel order is a half turn.
                let (mut lo, mut hi) = (0, SIDE * SIDE - 1);
                while lo < hi {
                    self.swap(lo, hi);
                    lo += 1;
                    hi -= 1;
                }
            }
            Orientation::Rotate270 => self.rotate_quarter(false),
        }
    }

    /// Copy the canvas into `target` with its top-left corner at `origin`,
    /// converting colours with `map`.
    pub fn blit<D, F>(&self, target: &mut D, origin: Point, map: F) -> Result<(), D::Error>
    where
        D: DrawTarget,
        F: Fn(Rgb565) -> D::Color,
    {
        let area = Rectangle::new(origin, Size::new(CANVAS_SIZE, CANVAS_SIZE));
        let colors = (0..SIDE * SIDE).map(|i| map(self.get(i)));
        target.fill_contiguous(&area, colors)
    }

    // Four-way swaps ring by ring; `clockwise` moves (x, y) to (S-1-y, x).
    fn rotate_quarter(&mut self, clockwise: bool) {
        let last = SIDE - 1;
        for ring in 0..SIDE / 2 {
            for j in ring..last - ring {
                let p0 = Self::at(j, ring);
                let p1 = Self::at(last - ring, j);
                let p2 = Self::at(last - j, last - ring);
                let p3 = Self::at(ring, last - j);
                let (a, b, c, d) = (self.get(p0), self.get(p1), self.get(p2), self.get(p3));
                if clockwise {
                    self.set(p1, a);
                    self.set(p2, b);
                    self.set(p3, c);
                    self.set(p0, d);
                } else {
                    self.set(p3, a);
                    self.set(p0, b);
                    self.set(p1, c);
                    self.set(p2, d);
                }
            }
        }
    }

    fn at(x: usize, y: usize) -> usize {
        y * SIDE + x
    }

    fn offset(p: Point) -> Option<usize> {
        let x = usize::try_from(p.x).ok()?;
        let y = usize::try_from(p.y).ok()?;
        (x < SIDE && y < SIDE).then(|| Self::at(x, y))
    }

    fn get(&self, i: usize) -> Rgb565 {
        let raw = u16::from_be_bytes([self.buf[2 * i], self.buf[2 * i + 1]]);
        Rgb565::from(RawU16::new(raw))
    }

    fn set(&mut self, i: usize, color: Rgb565) {
        let raw = RawU16::from(color).into_inner().to_be_bytes();
        self.buf[2 * i..2 * i + 2].copy_from_slice(&raw);
    }

    fn swap(&mut self, a: usize, b: usize) {
        let (ca, cb) = (self.get(a), self.get(b));
        self.set(a, cb);
        self.set(b, ca);
    }
}

impl OriginDimensions for Canvas {
    fn size(&self) -> Size {
        Size::new(CANVAS_SIZE, CANVAS_SIZE)
    }
}

impl DrawTarget for Canvas {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(p, color) in pixels {
            if let Some(i) = Self::offset(p) {
                self.set(i, color);
            }
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.fill(color);
        Ok(())
    }
}
