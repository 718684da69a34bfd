//! Pre-computed static text styles.
//!
//! All styles are `const`, so nothing is constructed per frame. Colors come from the
//! variant palette at draw time. Fonts stand in for the watch system fonts:
//!
//! | Text | Font |
//! |------|------|
//! | Seconds digits | `ProFont` 24pt (large numerals) |
//! | Date line | 7x13 |
//! | Battery percentage | 6x10 |

use embedded_graphics::mono_font::ascii::{FONT_6X10, FONT_7X13};
use embedded_graphics::mono_font::MonoFont;
use embedded_graphics::text::{Alignment, Baseline, TextStyle, TextStyleBuilder};
use profont::PROFONT_24_POINT;

// =============================================================================
// Text Alignment Styles
// =============================================================================

/// Centred horizontally, positioned by the top edge. Used for the date and seconds.
pub const TOP_CENTERED: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Center)
    .baseline(Baseline::Top)
    .build();

/// Left-aligned, positioned by the top edge. Used for the battery text.
pub const TOP_LEFT: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Left)
    .baseline(Baseline::Top)
    .build();

// =============================================================================
// Fonts
// =============================================================================

/// Large numeral font for the seconds digits.
pub const SECONDS_FONT: &MonoFont = &PROFONT_24_POINT;

/// Date line font.
pub const DATE_FONT: &MonoFont = &FONT_7X13;

/// Battery percentage font.
pub const CHARGE_FONT: &MonoFont = &FONT_6X10;
