//! Status glyph rendering.
//!
//! Everything is drawn upright in canvas coordinates; [`render`] rotates the
//! finished canvas last.

use super::canvas::{Canvas, Orientation};
use super::{Palette, StatusState};
use crate::config::CANVAS_SIZE;
use embedded_graphics::geometry::Angle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Arc, Circle, Line, PrimitiveStyle, Rectangle, Triangle};

/// Width of the battery fill at 100 %.
pub const BATTERY_FILL_MAX: u32 = 25;

/// Top-left of the link glyph (16×14, right-aligned in the top row).
pub const LINK_ORIGIN: Point = Point::new(CANVAS_SIZE as i32 - 16, 1);

/// Redraw the whole canvas for `state`.
///
/// Output depends only on the arguments, so identical state gives an
/// identical buffer.
pub fn render(canvas: &mut Canvas, state: &StatusState, palette: &Palette, orientation: Orientation) {
    canvas.fill(palette.background);
    draw_battery(canvas, state, palette);
    if state.connected {
        draw_link_up(canvas, palette);
    } else {
        draw_link_down(canvas, palette);
    }
    canvas.rotate(orientation);
}

/// Pixel width of the battery fill for a charge level.
pub fn battery_fill_width(battery: u8) -> u32 {
    (u32::from(battery.min(100)) + 2) / 4
}

fn rect(canvas: &mut Canvas, x: i32, y: i32, w: u32, h: u32, style: PrimitiveStyle<Rgb565>) {
    // Drawing into the canvas cannot fail.
    let Ok(()) = Rectangle::new(Point::new(x, y), Size::new(w, h))
        .into_styled(style)
        .draw(canvas);
}

fn draw_battery(canvas: &mut Canvas, state: &StatusState, palette: &Palette) {
    let fg = PrimitiveStyle::with_fill(palette.foreground);
    let bg = PrimitiveStyle::with_fill(palette.background);

    rect(canvas, 0, 2, 29, 12, fg);
    rect(canvas, 1, 3, 27, 10, bg);
    let fill = battery_fill_width(state.battery);
    if fill > 0 {
        rect(canvas, 2, 4, fill, 8, fg);
    }
    // Terminal nub.
    rect(canvas, 30, 5, 3, 6, fg);
    rect(canvas, 31, 6, 1, 4, bg);

    if state.charging {
        draw_bolt(canvas, palette);
    }
}

fn bolt() -> [Triangle; 2] {
    [
        Triangle::new(Point::new(15, 1), Point::new(10, 8), Point::new(14, 8)),
        Triangle::new(Point::new(12, 6), Point::new(16, 6), Point::new(11, 13)),
    ]
}

// Halo first, then the body, so the bolt stays visible over any fill level.
fn draw_bolt(canvas: &mut Canvas, palette: &Palette) {
    let halo = PrimitiveStyle::with_stroke(palette.background, 3);
    let body = PrimitiveStyle::with_fill(palette.foreground);
    for t in bolt() {
        let Ok(()) = t.into_styled(halo).draw(canvas);
    }
    for t in bolt() {
        let Ok(()) = t.into_styled(body).draw(canvas);
    }
}

fn draw_link_up(canvas: &mut Canvas, palette: &Palette) {
    let center = LINK_ORIGIN + Point::new(7, 12);
    let stroke = PrimitiveStyle::with_stroke(palette.foreground, 2);
    let start = Angle::from_degrees(-135.0);
    let sweep = Angle::from_degrees(90.0);
    for diameter in [8, 15, 22] {
        let Ok(()) = Arc::with_center(center, diameter, start, sweep)
            .into_styled(stroke)
            .draw(canvas);
    }
    let Ok(()) = Circle::with_center(center, 3)
        .into_styled(PrimitiveStyle::with_fill(palette.foreground))
        .draw(canvas);
}

fn draw_link_down(canvas: &mut Canvas, palette: &Palette) {
    let stroke = PrimitiveStyle::with_stroke(palette.foreground, 1);
    // Two one-pixel diagonals per stroke keep the cross's corners exact.
    for dx in 0..2 {
        let o = LINK_ORIGIN + Point::new(dx, 0);
        let Ok(()) = Line::new(o, o + Point::new(13, 13)).into_styled(stroke).draw(canvas);
        let Ok(()) = Line::new(o + Point::new(0, 13), o + Point::new(13, 0))
            .into_styled(stroke)
            .draw(canvas);
    }
}
