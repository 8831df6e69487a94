//! The peripheral status widget.
//!
//! Ties the status canvas and the art slideshow to one screen. The widget
//! owns all of its state and is driven from a single task: status events
//! go through [`StatusWidget::handle`], the slideshow cadence through
//! [`StatusWidget::tick`]. The two draw into disjoint regions.

use crate::config::{WidgetConfig, ART_HEIGHT, ART_WIDTH, CANVAS_X};
use crate::fmt::{debug, info};
use crate::slideshow::{ArtTimer, Slideshow};
use crate::status::canvas::Canvas;
use crate::status::event::{StatusEvent, StatusSource, Subscriptions};
use crate::status::{draw, to_binary, Palette, StatusState};
use embedded_graphics::image::ImageDrawable;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use rand_core::RngCore;

/// Where the art frames go: the left part of the panel.
pub const ART_REGION: Rectangle = Rectangle::new(Point::zero(), Size::new(ART_WIDTH, ART_HEIGHT));

/// Where the status canvas is blitted: the right part of the panel.
pub const CANVAS_ORIGIN: Point = Point::new(CANVAS_X, 0);

pub struct StatusWidget<'a, I, const N: usize>
where
    I: ImageDrawable<Color = BinaryColor>,
{
    config: WidgetConfig,
    palette: Palette,
    state: StatusState,
    subscriptions: Subscriptions,
    canvas: Canvas,
    slideshow: Slideshow<'a, I, N>,
    timer: ArtTimer,
}

impl<'a, I, const N: usize> StatusWidget<'a, I, N>
where
    I: ImageDrawable<Color = BinaryColor>,
{
    /// Build the widget with a freshly shuffled frame order. Nothing is
    /// drawn until [`StatusWidget::init`].
    pub fn new<R: RngCore + ?Sized>(config: WidgetConfig, frames: &'a [I; N], rng: &mut R) -> Self {
        let palette = Palette::new(config.inverted);
        Self {
            config,
            palette,
            state: StatusState::default(),
            subscriptions: Subscriptions::standard(config.usb_charging),
            canvas: Canvas::new(palette.background),
            slideshow: Slideshow::new(frames, ART_REGION, palette.background_binary(), rng),
            timer: ArtTimer::new(config.art_interval_ms),
        }
    }

    /// Seed the status from the host, draw both regions and start the
    /// slideshow schedule.
    pub fn init<S, D, R>(
        &mut self,
        source: &S,
        screen: &mut D,
        rng: &mut R,
        now_ms: u64,
    ) -> Result<(), D::Error>
    where
        S: StatusSource + ?Sized,
        D: DrawTarget<Color = BinaryColor>,
        R: RngCore + ?Sized,
    {
        self.state = StatusState::query(source, self.config.usb_charging);
        info!(
            "Widget: init battery={} charging={} connected={}",
            self.state.battery, self.state.charging, self.state.connected
        );
        self.redraw(screen)?;
        self.slideshow.advance(screen, rng)?;
        self.timer.start(now_ms);
        Ok(())
    }

    /// React to a status event. Returns `true` if the status canvas was
    /// redrawn; events no listener subscribed to are ignored.
    pub fn handle<D>(&mut self, event: StatusEvent, screen: &mut D) -> Result<bool, D::Error>
    where
        D: DrawTarget<Color = BinaryColor>,
    {
        if self.subscriptions.listener_for(event.kind()).is_none() {
            debug!("Widget: ignoring {}", event);
            return Ok(false);
        }
        self.state.apply(event);
        debug!("Widget: {} -> {}", event, self.state);
        self.redraw(screen)?;
        Ok(true)
    }

    /// Advance the slideshow if its period has elapsed at `now_ms`.
    /// Returns the frame shown, if any.
    pub fn tick<D, R>(&mut self, screen: &mut D, rng: &mut R, now_ms: u64) -> Result<Option<usize>, D::Error>
    where
        D: DrawTarget<Color = BinaryColor>,
        R: RngCore + ?Sized,
    {
        if !self.timer.poll(now_ms) {
            return Ok(None);
        }
        self.slideshow.advance(screen, rng).map(Some)
    }

    /// Cancel the slideshow schedule; the current frame stays on screen.
    pub fn stop_slideshow(&mut self) {
        info!("Widget: slideshow stopped");
        self.timer.cancel();
    }

    /// Re-arm the slideshow schedule from `now_ms`.
    pub fn start_slideshow(&mut self, now_ms: u64) {
        info!("Widget: slideshow started, every {} ms", self.timer.period_ms());
        self.timer.start(now_ms);
    }

    pub fn slideshow_running(&self) -> bool {
        self.timer.is_running()
    }

    /// When [`StatusWidget::tick`] next has work to do.
    pub fn next_deadline(&self) -> Option<u64> {
        self.timer.next_deadline()
    }

    pub fn state(&self) -> &StatusState {
        &self.state
    }

    /// The status canvas, already rotated for the panel.
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn slideshow(&self) -> &Slideshow<'a, I, N> {
        &self.slideshow
    }

    fn redraw<D>(&mut self, screen: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = BinaryColor>,
    {
        draw::render(&mut self.canvas, &self.state, &self.palette, self.config.orientation);
        self.canvas.blit(screen, CANVAS_ORIGIN, to_binary)
    }
}
