//! Digit-to-dot-grid conversion.
//!
//! Each decimal digit is shown as its plain binary value: bit `i` of the digit decides
//! whether cell `i` of that digit's row is filled. No digit 0-9 needs more than four bits,
//! and fields with a smaller range (hour tens 0-2, minute/second tens 0-5) show fewer.
//!
//! # Logical grid vs. screen
//!
//! The logical grid has one row per time field and one column per bit:
//!
//! ```text
//! row 0  hour tens      [b0][b1]
//! row 1  hour units     [b0][b1][b2][b3]
//! row 2  minute tens    [b0][b1][b2]
//! row 3  minute units   [b0][b1][b2][b3]
//! ```
//!
//! On screen this is drawn transposed: every field becomes a screen column and every bit a
//! screen row, bit 0 at the bottom. See [`DigitCell::screen_point`].

use embedded_graphics::geometry::Point;
use heapless::Vec;

use crate::config::{
    CELLS_PER_ROW,
    DEFAULT_MAX_COLS,
    HOURS_FIRST_DIGIT_MAX_COLS,
    MINUTES_FIRST_DIGIT_MAX_COLS,
    SECONDS_FIRST_DIGIT_MAX_COLS,
};
use crate::geometry::GridGeometry;

// =============================================================================
// Time Fields
// =============================================================================

/// One decimal digit position of the time.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DigitField {
    HourTens,
    HourUnits,
    MinuteTens,
    MinuteUnits,
    SecondTens,
    SecondUnits,
}

impl DigitField {
    /// Fields drawn as dots. Seconds are shown as text instead.
    pub const DOTS: [Self; 4] = [Self::HourTens, Self::HourUnits, Self::MinuteTens, Self::MinuteUnits];

    /// Logical grid row of this field.
    pub const fn row(self) -> u8 {
        match self {
            Self::HourTens => 0,
            Self::HourUnits => 1,
            Self::MinuteTens => 2,
            Self::MinuteUnits => 3,
            Self::SecondTens => 4,
            Self::SecondUnits => 5,
        }
    }

    /// Number of bits displayed for this field.
    pub const fn max_columns(self) -> u8 {
        match self {
            Self::HourTens => HOURS_FIRST_DIGIT_MAX_COLS,
            Self::MinuteTens => MINUTES_FIRST_DIGIT_MAX_COLS,
            Self::SecondTens => SECONDS_FIRST_DIGIT_MAX_COLS,
            Self::HourUnits | Self::MinuteUnits | Self::SecondUnits => DEFAULT_MAX_COLS,
        }
    }
}

// =============================================================================
// Cells and Draw Commands
// =============================================================================

/// A single bit of a displayed digit.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DigitCell {
    /// Logical row (time field), 0-5.
    pub row: u8,
    /// Bit index within the digit, 0-3.
    pub column: u8,
    /// Whether the bit is set.
    pub filled: bool,
}

impl DigitCell {
    /// Pixel anchor of this cell: the field picks the screen column, the bit the screen row.
    #[inline]
    pub const fn screen_point(
        &self,
        geometry: &GridGeometry,
    ) -> Point {
        geometry.cell_to_point(self.row, self.column)
    }
}

/// Instruction to draw one cell.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DrawCommand {
    /// The cell being drawn.
    pub cell: DigitCell,
    /// Top-left anchor of the square on screen.
    pub point: Point,
}

impl DrawCommand {
    /// Whether the square is solid (set bit) or a ring (clear bit).
    #[inline]
    pub const fn filled(&self) -> bool { self.cell.filled }
}

/// Draw commands for one digit, at most one per bit.
pub type DigitRow = Vec<DrawCommand, CELLS_PER_ROW>;

// =============================================================================
// Rendering
// =============================================================================

/// Convert `digit` into draw commands for logical row `row_index`.
///
/// Emits exactly `max_columns` commands; command `i` is filled iff `(digit >> i) & 1 == 1`.
/// Digits are 0-9 and `max_columns` is 1-4 by construction; a wider limit is clamped to 4.
pub fn render_digit_row(
    digit: u8,
    max_columns: u8,
    row_index: u8,
    geometry: &GridGeometry,
) -> DigitRow {
    debug_assert!(digit <= 9, "not a decimal digit");
    debug_assert!((1..=DEFAULT_MAX_COLS).contains(&max_columns), "column limit out of range");

    let mut commands = DigitRow::new();
    for column in 0..max_columns.min(DEFAULT_MAX_COLS) {
        let cell = DigitCell {
            row: row_index,
            column,
            filled: (digit >> column) & 0x1 == 1,
        };
        // Capacity is CELLS_PER_ROW and the loop is clamped to it
        commands
            .push(DrawCommand {
                cell,
                point: cell.screen_point(geometry),
            })
            .ok();
    }
    commands
}

/// Draw commands for `digit` shown in `field`.
pub fn render_field(
    field: DigitField,
    digit: u8,
    geometry: &GridGeometry,
) -> DigitRow {
    render_digit_row(digit, field.max_columns(), field.row(), geometry)
}

/// Read a digit back from the filled/unfilled pattern of a row.
pub fn decode_row<'a, I>(cells: I) -> u8
where
    I: IntoIterator<Item = &'a DigitCell>,
{
    cells
        .into_iter()
        .filter(|cell| cell.filled)
        .fold(0, |acc, cell| acc | (1 << cell.column))
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    const GEOMETRY: GridGeometry = GridGeometry::WATCH;

    fn cells(row: &DigitRow) -> impl Iterator<Item = &DigitCell> { row.iter().map(|c| &c.cell) }

    #[test]
    fn test_field_rows_and_limits() {
        let expected = [
            (DigitField::HourTens, 0, 2),
            (DigitField::HourUnits, 1, 4),
            (DigitField::MinuteTens, 2, 3),
            (DigitField::MinuteUnits, 3, 4),
            (DigitField::SecondTens, 4, 3),
            (DigitField::SecondUnits, 5, 4),
        ];
        for (field, row, max) in expected {
            assert_eq!(field.row(), row);
            assert_eq!(field.max_columns(), max);
        }
    }

    #[test]
    fn test_render_exhaustive() {
        for digit in 0..=9u8 {
            for max_columns in 1..=4u8 {
                let row = render_digit_row(digit, max_columns, 1, &GEOMETRY);
                assert_eq!(row.len(), max_columns as usize);
                for (i, cmd) in row.iter().enumerate() {
                    assert_eq!(cmd.cell.column as usize, i);
                    assert_eq!(cmd.filled(), (digit >> i) & 1 == 1, "digit {digit} bit {i}");
                }
                assert!(row.iter().all(|cmd| cmd.cell.column < max_columns));
            }
        }
    }

    #[test]
    fn test_render_single_column() {
        for digit in 0..=9u8 {
            let row = render_digit_row(digit, 1, 2, &GEOMETRY);
            assert_eq!(row.len(), 1, "digit {digit}");
            assert_eq!(row[0].cell.column, 0);
            assert_eq!(row[0].filled(), digit & 1 == 1, "digit {digit}");
        }
    }

    #[test]
    fn test_render_five_in_four_columns() {
        let row = render_digit_row(5, 4, 3, &GEOMETRY);
        let filled: [bool; 4] = core::array::from_fn(|i| row[i].filled());
        assert_eq!(filled, [true, false, true, false]);
    }

    #[test]
    fn test_render_uses_transposed_layout() {
        let row = render_digit_row(1, 2, 0, &GEOMETRY);
        // Hour tens: leftmost screen column, bit 0 at the bottom, bit 1 one slot higher
        assert_eq!(row[0].point, GEOMETRY.cell_to_point(0, 0));
        assert_eq!(row[1].point, GEOMETRY.cell_to_point(0, 1));
        assert!(row[1].point.y < row[0].point.y);
    }

    #[test]
    fn test_minute_37_round_trip() {
        let tens = render_field(DigitField::MinuteTens, 3, &GEOMETRY);
        let units = render_field(DigitField::MinuteUnits, 7, &GEOMETRY);
        assert_eq!(tens.len(), 3);
        assert_eq!(units.len(), 4);
        assert_eq!(decode_row(cells(&tens)), 3);
        assert_eq!(decode_row(cells(&units)), 7);
    }

    #[test]
    fn test_decode_empty() {
        assert_eq!(decode_row(core::iter::empty::<&DigitCell>()), 0);
    }

    proptest! {
        #[test]
        fn prop_bit_i_filled_iff_set(digit in 0u8..=9, max_columns in 1u8..=4, row in 0u8..6) {
            let commands = render_digit_row(digit, max_columns, row, &GEOMETRY);
            prop_assert_eq!(commands.len(), max_columns as usize);
            for cmd in &commands {
                prop_assert_eq!(cmd.cell.row, row);
                prop_assert_eq!(cmd.filled(), (digit >> cmd.cell.column) & 1 == 1);
            }
        }

        #[test]
        fn prop_round_trip_when_bits_fit(digit in 0u8..=9) {
            let field = if digit < 8 { DigitField::MinuteTens } else { DigitField::MinuteUnits };
            let row = render_field(field, digit, &GEOMETRY);
            prop_assert_eq!(decode_row(cells(&row)), digit);
        }
    }
}
