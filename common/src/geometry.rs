//! Cell-to-screen layout for the BCD grid.
//!
//! [`cell_to_point`] maps a screen grid coordinate to the pixel anchor of a cell:
//!
//! ```text
//! x = side_padding + cell_size / 2 + column * cell_size
//! y = cell_size / 2 + cell_size * (4 - row) + top_padding
//! ```
//!
//! The `4 - row` term flips the vertical axis: row 0 sits at the bottom and row 4 at
//! the top, so the most significant bit of a digit ends up on top of its stack.

use embedded_graphics::geometry::Point;

use crate::config::{
    CELL_CORNER_RADIUS,
    CELL_SIZE,
    CIRCLE_LINE_THICKNESS,
    CIRCLE_RADIUS,
    SIDE_PADDING,
    TOP_BIT_SLOT,
    TOP_PADDING,
};

/// Fixed geometry of the BCD grid.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GridGeometry {
    /// Distance between neighbouring cell anchors.
    pub cell_size: i32,
    /// Left margin of column 0.
    pub side_padding: i32,
    /// Top margin of the highest row.
    pub top_padding: i32,
    /// Edge length of the drawn square.
    pub circle_radius: u32,
    /// Ring width of an unfilled square.
    pub line_thickness: u32,
    /// Corner radius of the rounded square.
    pub corner_radius: u32,
}

impl GridGeometry {
    /// Geometry of the 144x168 watch panel.
    pub const WATCH: Self = Self {
        cell_size: CELL_SIZE,
        side_padding: SIDE_PADDING,
        top_padding: TOP_PADDING,
        circle_radius: CIRCLE_RADIUS,
        line_thickness: CIRCLE_LINE_THICKNESS,
        corner_radius: CELL_CORNER_RADIUS,
    };

    /// Pixel anchor of the cell at screen `column`, `row`.
    #[inline]
    pub const fn cell_to_point(
        &self,
        column: u8,
        row: u8,
    ) -> Point {
        let half = self.cell_size / 2;
        Point::new(
            self.side_padding + half + column as i32 * self.cell_size,
            half + self.cell_size * (TOP_BIT_SLOT - row as i32) + self.top_padding,
        )
    }
}

impl Default for GridGeometry {
    fn default() -> Self { Self::WATCH }
}

/// Pixel anchor of the cell at screen `column`, `row` using [`GridGeometry::WATCH`].
#[inline]
pub const fn cell_to_point(
    column: u8,
    row: u8,
) -> Point {
    GridGeometry::WATCH.cell_to_point(column, row)
}
