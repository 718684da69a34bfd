//! BCD grid widget.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use super::primitives::draw_cell;
use crate::clock::TimeDigits;
use crate::geometry::GridGeometry;
use crate::grid::{DigitField, DigitRow, render_field};
use crate::variant::Palette;

/// Draw every command of one digit row.
pub fn draw_digit_row<D>(
    display: &mut D,
    row: &DigitRow,
    geometry: &GridGeometry,
    palette: &Palette,
) where
    D: DrawTarget<Color = Rgb565>,
{
    for command in row.iter() {
        draw_cell(
            display,
            geometry,
            command.point,
            command.filled(),
            palette.cell,
            palette.background,
        );
    }
}

/// Draw hours and minutes as four stacks of cells.
pub fn draw_time_grid<D>(
    display: &mut D,
    digits: &TimeDigits,
    geometry: &GridGeometry,
    palette: &Palette,
) where
    D: DrawTarget<Color = Rgb565>,
{
    for field in DigitField::DOTS {
        let row = render_field(field, digits.field(field), geometry);
        draw_digit_row(display, &row, geometry, palette);
    }
}
