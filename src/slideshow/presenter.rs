//! Swaps the visible art frame inside a fixed region.

use embedded_graphics::image::{Image, ImageDrawable};
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

/// Draws one frame at a time into `region`, never touching anything outside
/// it.
#[derive(Clone, Debug)]
pub struct ArtPresenter<C> {
    region: Rectangle,
    background: C,
    shown: Option<usize>,
}

impl<C: PixelColor> ArtPresenter<C> {
    pub fn new(region: Rectangle, background: C) -> Self {
        Self {
            region,
            background,
            shown: None,
        }
    }

    /// Replace whatever frame is on screen with `frame`.
    ///
    /// The region is wiped to the background first so a smaller or sparser
    /// frame leaves no remnants of the previous one.
    pub fn present<D, I>(&mut self, target: &mut D, index: usize, frame: &I) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = C>,
        I: ImageDrawable<Color = C>,
    {
        let mut clipped = target.clipped(&self.region);
        clipped.fill_solid(&self.region, self.background)?;
        Image::new(frame, self.region.top_left).draw(&mut clipped)?;
        self.shown = Some(index);
        Ok(())
    }

    /// Index of the frame currently on screen.
    pub fn shown(&self) -> Option<usize> {
        self.shown
    }
}
