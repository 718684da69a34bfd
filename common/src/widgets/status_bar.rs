//! Status bar widgets for the decorated variant.
//!
//! Layers are composited in a fixed order: date, battery text, charging icon, phone icon.
//! Text layers paint their own black background; icon layers only paint set pixels.

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::text::{Alignment, Text, TextStyle};

use super::primitives::{draw_icon, fill_layer};
use crate::colors::BLACK;
use crate::config::layout::{CHARGE_ICON_FRAME, CHARGE_LAYER_FRAME, DATE_LAYER_FRAME, PHONE_ICON_FRAME};
use crate::icons::IconSlot;
use crate::styles::{CHARGE_FONT, DATE_FONT, TOP_CENTERED, TOP_LEFT};

/// Draw `text` in a black layer, anchored at the top edge of `frame`.
fn draw_text_layer<D>(
    display: &mut D,
    frame: Rectangle,
    text: &str,
    style: MonoTextStyle<'_, Rgb565>,
    text_style: TextStyle,
) where
    D: DrawTarget<Color = Rgb565>,
{
    fill_layer(display, frame, BLACK);

    let y = frame.top_left.y;
    let x = if text_style.alignment == Alignment::Center {
        frame.top_left.x + frame.size.width as i32 / 2
    } else {
        frame.top_left.x
    };

    Text::with_text_style(text, Point::new(x, y), style, text_style)
        .draw(display)
        .ok();
}

/// Date line across the top of the screen.
pub fn draw_date<D>(
    display: &mut D,
    text: &str,
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    draw_text_layer(display, DATE_LAYER_FRAME, text, MonoTextStyle::new(DATE_FONT, color), TOP_CENTERED);
}

/// Battery percentage, top-left.
pub fn draw_charge<D>(
    display: &mut D,
    text: &str,
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    draw_text_layer(display, CHARGE_LAYER_FRAME, text, MonoTextStyle::new(CHARGE_FONT, color), TOP_LEFT);
}

/// Draw the icon held by `slot` at `frame`, if it is loaded.
fn draw_slot<D>(
    display: &mut D,
    slot: &IconSlot,
    frame: Rectangle,
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    if let Some(bitmap) = slot.bitmap() {
        draw_icon(display, bitmap.icon(), frame.top_left, color);
    }
}

/// Full status bar: date, battery text, then both icons.
pub fn draw_status_bar<D>(
    display: &mut D,
    date: &str,
    charge: &str,
    charge_icon: &IconSlot,
    phone_icon: &IconSlot,
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    draw_date(display, date, color);
    draw_charge(display, charge, color);
    draw_slot(display, charge_icon, CHARGE_ICON_FRAME, color);
    draw_slot(display, phone_icon, PHONE_ICON_FRAME, color);
}

#[cfg(test)]
mod tests {
    use embedded_graphics::mock_display::MockDisplay;

    use super::*;
    use crate::colors::WHITE;

    fn white_rows(display: &MockDisplay<Rgb565>) -> impl Iterator<Item = i32> + '_ {
        CHARGE_LAYER_FRAME
            .points()
            .filter(|p| display.get_pixel(*p) == Some(WHITE))
            .map(|p| p.y)
    }

    #[test]
    fn test_charge_text_hangs_from_top_edge() {
        let mut display = MockDisplay::new();
        display.set_allow_overdraw(true);
        draw_charge(&mut display, "99%", WHITE);

        let top = white_rows(&display).min().unwrap();
        let bottom = white_rows(&display).max().unwrap();
        assert!(top < 5, "text starts at row {top}");
        assert!(bottom < CHARGE_FONT.character_size.height as i32, "text ends at row {bottom}");
        // Rest of the layer is background
        assert_eq!(display.get_pixel(Point::new(2, 18)), Some(BLACK));
    }
}
