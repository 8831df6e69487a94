//! Hammerbeam art frames.
//!
//! Each frame is a packed 1-bpp image the size of the art region, leftmost
//! pixel in the MSB, `1` = lit.

use embedded_graphics::image::ImageRaw;
use embedded_graphics::pixelcolor::BinaryColor;
use hammerbeam::config::{ART_FRAME_COUNT, ART_WIDTH};

static FRAME_DATA: [&[u8]; ART_FRAME_COUNT] = [
    include_bytes!("../assets/art/hammerbeam01.raw"),
    include_bytes!("../assets/art/hammerbeam02.raw"),
    include_bytes!("../assets/art/hammerbeam03.raw"),
    include_bytes!("../assets/art/hammerbeam04.raw"),
    include_bytes!("../assets/art/hammerbeam05.raw"),
    include_bytes!("../assets/art/hammerbeam06.raw"),
    include_bytes!("../assets/art/hammerbeam07.raw"),
    include_bytes!("../assets/art/hammerbeam08.raw"),
    include_bytes!("../assets/art/hammerbeam09.raw"),
    include_bytes!("../assets/art/hammerbeam10.raw"),
    include_bytes!("../assets/art/hammerbeam11.raw"),
    include_bytes!("../assets/art/hammerbeam12.raw"),
    include_bytes!("../assets/art/hammerbeam13.raw"),
    include_bytes!("../assets/art/hammerbeam14.raw"),
    include_bytes!("../assets/art/hammerbeam15.raw"),
    include_bytes!("../assets/art/hammerbeam16.raw"),
    include_bytes!("../assets/art/hammerbeam17.raw"),
    include_bytes!("../assets/art/hammerbeam18.raw"),
    include_bytes!("../assets/art/hammerbeam19.raw"),
    include_bytes!("../assets/art/hammerbeam20.raw"),
    include_bytes!("../assets/art/hammerbeam21.raw"),
    include_bytes!("../assets/art/hammerbeam22.raw"),
    include_bytes!("../assets/art/hammerbeam23.raw"),
    include_bytes!("../assets/art/hammerbeam24.raw"),
    include_bytes!("../assets/art/hammerbeam25.raw"),
    include_bytes!("../assets/art/hammerbeam26.raw"),
    include_bytes!("../assets/art/hammerbeam27.raw"),
    include_bytes!("../assets/art/hammerbeam28.raw"),
    include_bytes!("../assets/art/hammerbeam29.raw"),
    include_bytes!("../assets/art/hammerbeam30.raw"),
];

/// The full frame set, in asset order.
pub fn frames() -> [ImageRaw<'static, BinaryColor>; ART_FRAME_COUNT] {
    core::array::from_fn(|i| ImageRaw::new(FRAME_DATA[i], ART_WIDTH))
}
