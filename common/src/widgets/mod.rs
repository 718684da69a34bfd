//! Widget components for the watchface.
//!
//! All widgets are generic over `DrawTarget<Color = Rgb565>` for platform independence.

mod grid;
mod primitives;
mod seconds;
mod status_bar;

pub use grid::{draw_digit_row, draw_time_grid};
pub use primitives::{draw_cell, draw_icon, fill_layer};
pub use seconds::draw_seconds;
pub use status_bar::{draw_charge, draw_date, draw_status_bar};
