//! Compile-time configuration.
//!
//! - `layout`: Screen size, BCD grid geometry and layer frames

pub mod layout;

// Re-export layout constants at config level for convenience
pub use layout::{
    CELL_CORNER_RADIUS,
    CELL_SIZE,
    CELLS_PER_ROW,
    CIRCLE_LINE_THICKNESS,
    CIRCLE_PADDING,
    CIRCLE_RADIUS,
    DEFAULT_MAX_COLS,
    HOURS_FIRST_DIGIT_MAX_COLS,
    MINUTES_FIRST_DIGIT_MAX_COLS,
    SCREEN_HEIGHT,
    SCREEN_WIDTH,
    SECONDS_FIRST_DIGIT_MAX_COLS,
    SIDE_PADDING,
    TOP_BIT_SLOT,
    TOP_PADDING,
};
