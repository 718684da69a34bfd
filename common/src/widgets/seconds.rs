//! Seconds text widget.
//!
//! The seconds are not part of the dot grid. Each digit is drawn in the large numeral
//! font, centred horizontally in its own frame, tens above units.

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::text::Text;

use crate::config::layout::{SECONDS_TENS_FRAME, SECONDS_UNITS_FRAME};
use crate::styles::{SECONDS_FONT, TOP_CENTERED};

/// Top-centre anchor of a frame.
#[inline]
const fn top_center(frame: &Rectangle) -> Point {
    Point::new(frame.top_left.x + frame.size.width as i32 / 2, frame.top_left.y)
}

/// Draw the two seconds digits.
pub fn draw_seconds<D>(
    display: &mut D,
    tens: &str,
    units: &str,
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let style = MonoTextStyle::new(SECONDS_FONT, color);

    Text::with_text_style(tens, top_center(&SECONDS_TENS_FRAME), style, TOP_CENTERED)
        .draw(display)
        .ok();
    Text::with_text_style(units, top_center(&SECONDS_UNITS_FRAME), style, TOP_CENTERED)
        .draw(display)
        .ok();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_center_of_seconds_frames() {
        assert_eq!(top_center(&SECONDS_TENS_FRAME), Point::new(122, 60));
        assert_eq!(top_center(&SECONDS_UNITS_FRAME), Point::new(122, 90));
    }
}
