//! Decorative art slideshow.
//!
//! The [`Slideshow`] owns a fixed frame set, a [`FrameOrder`] that shows each
//! frame once per cycle in random order, and an [`ArtPresenter`] that swaps
//! the frame inside the art region. [`ArtTimer`] decides when to advance.

pub mod order;
pub mod presenter;
pub mod timer;

pub use order::FrameOrder;
pub use presenter::ArtPresenter;
pub use timer::ArtTimer;

use crate::fmt::debug;
use embedded_graphics::image::ImageDrawable;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use rand_core::RngCore;

/// A fixed set of `N` frames cycled in shuffled order.
pub struct Slideshow<'a, I: ImageDrawable, const N: usize> {
    frames: &'a [I; N],
    order: FrameOrder<N>,
    presenter: ArtPresenter<I::Color>,
}

impl<'a, I: ImageDrawable, const N: usize> Slideshow<'a, I, N> {
    pub fn new<R: RngCore + ?Sized>(
        frames: &'a [I; N],
        region: Rectangle,
        background: I::Color,
        rng: &mut R,
    ) -> Self {
        Self {
            frames,
            order: FrameOrder::new(rng),
            presenter: ArtPresenter::new(region, background),
        }
    }

    /// Present the next frame in the shuffled order and return its index.
    pub fn advance<D, R>(&mut self, target: &mut D, rng: &mut R) -> Result<usize, D::Error>
    where
        D: DrawTarget<Color = I::Color>,
        R: RngCore + ?Sized,
    {
        let index = self.order.next(rng);
        debug!("Slideshow: frame {} ({} left in cycle)", index, self.order.remaining());
        self.presenter.present(target, index, &self.frames[index])?;
        Ok(index)
    }

    pub fn order(&self) -> &FrameOrder<N> {
        &self.order
    }

    /// Index of the frame on screen, if any has been shown yet.
    pub fn shown(&self) -> Option<usize> {
        self.presenter.shown()
    }
}
