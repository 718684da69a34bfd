//! Display and layout configuration constants.
//!
//! # Pre-computed Layout Constants
//!
//! Every position the watchface draws at is derived here at compile time as `const`.
//! Nothing in the render path recomputes geometry per frame.

use embedded_graphics::geometry::{Point, Size};
use embedded_graphics::primitives::Rectangle;

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels (144x168 watch panel).
pub const SCREEN_WIDTH: u32 = 144;

/// Display height in pixels.
pub const SCREEN_HEIGHT: u32 = 168;

// =============================================================================
// BCD Grid Geometry
// =============================================================================

/// Edge length of one square. Kept under its historical name: cells started out as circles.
pub const CIRCLE_RADIUS: u32 = 16;

/// Ring width of an unfilled cell.
pub const CIRCLE_LINE_THICKNESS: u32 = 2;

/// Padding around a cell, relative to `CIRCLE_RADIUS` (negative: cells overlap their nominal circle).
pub const CIRCLE_PADDING: i32 = 12 - CIRCLE_RADIUS as i32;

/// Distance between neighbouring cell anchors.
pub const CELL_SIZE: i32 = 2 * (CIRCLE_RADIUS as i32 + CIRCLE_PADDING);

/// Left margin: centres a 5.5-cell-wide block on the screen.
/// Computed in half cells to stay in integer arithmetic.
pub const SIDE_PADDING: i32 = (SCREEN_WIDTH as i32 - 11 * CELL_SIZE / 2) / 2;

/// Top margin of the grid.
pub const TOP_PADDING: i32 = 10;

/// Corner radius of the rounded squares.
pub const CELL_CORNER_RADIUS: u32 = 2;

/// Highest bit slot the vertical layout reserves (slots 0..=4).
pub const TOP_BIT_SLOT: i32 = 4;

/// Bits per BCD digit.
pub const CELLS_PER_ROW: usize = 4;

// =============================================================================
// Digit Field Limits
// =============================================================================

/// Bits shown for a field with no narrower range (any units digit).
pub const DEFAULT_MAX_COLS: u8 = 4;

/// Hour tens digit is 0-2.
pub const HOURS_FIRST_DIGIT_MAX_COLS: u8 = 2;

/// Minute tens digit is 0-5.
pub const MINUTES_FIRST_DIGIT_MAX_COLS: u8 = 3;

/// Second tens digit is 0-5.
pub const SECONDS_FIRST_DIGIT_MAX_COLS: u8 = 3;

// =============================================================================
// Seconds Text
// =============================================================================

/// Frame of the seconds tens digit.
pub const SECONDS_TENS_FRAME: Rectangle = Rectangle::new(Point::new(50, 60), Size::new(SCREEN_WIDTH, 20));

/// Frame of the seconds units digit.
pub const SECONDS_UNITS_FRAME: Rectangle = Rectangle::new(Point::new(50, 90), Size::new(SCREEN_WIDTH, 20));

// =============================================================================
// Status Bar Layers (decorated variant)
// =============================================================================

/// Height of the status bar text layers.
pub const STATUS_BAR_HEIGHT: u32 = 20;

/// Icon bitmap width.
pub const ICON_WIDTH: u32 = 12;

/// Icon bitmap height.
pub const ICON_HEIGHT: u32 = 20;

/// Whole-screen layer hosting the BCD grid and seconds text.
pub const MAIN_LAYER_FRAME: Rectangle = Rectangle::new(Point::zero(), Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));

/// Date text layer across the top of the screen.
pub const DATE_LAYER_FRAME: Rectangle = Rectangle::new(Point::zero(), Size::new(SCREEN_WIDTH, STATUS_BAR_HEIGHT));

/// Battery percentage layer, top-left.
pub const CHARGE_LAYER_FRAME: Rectangle = Rectangle::new(Point::zero(), Size::new(30, STATUS_BAR_HEIGHT));

/// Charging icon layer, overlapping the right edge of the charge text.
pub const CHARGE_ICON_FRAME: Rectangle = Rectangle::new(Point::new(25, 0), Size::new(ICON_WIDTH, ICON_HEIGHT));

/// Phone (Bluetooth) icon layer, top-right.
pub const PHONE_ICON_FRAME: Rectangle = Rectangle::new(
    Point::new((SCREEN_WIDTH - ICON_WIDTH) as i32, 0),
    Size::new(ICON_WIDTH, ICON_HEIGHT),
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_geometry() {
        assert_eq!(CIRCLE_PADDING, -4);
        assert_eq!(CELL_SIZE, 24);
        assert_eq!(SIDE_PADDING, 6);
    }

    #[test]
    fn test_grid_fits_screen() {
        // Rightmost drawn column is minute units (index 3)
        let right = SIDE_PADDING + CELL_SIZE / 2 + 3 * CELL_SIZE + CIRCLE_RADIUS as i32;
        assert!(right <= SCREEN_WIDTH as i32);

        // Bottom slot (bit 0)
        let bottom = CELL_SIZE / 2 + CELL_SIZE * TOP_BIT_SLOT + TOP_PADDING + CIRCLE_RADIUS as i32;
        assert!(bottom <= SCREEN_HEIGHT as i32);
    }

    #[test]
    fn test_phone_icon_right_aligned() {
        assert_eq!(PHONE_ICON_FRAME.top_left.x, 132);
        assert_eq!(PHONE_ICON_FRAME.bottom_right().map(|p| p.x), Some(143));
    }
}
