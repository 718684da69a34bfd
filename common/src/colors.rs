//! Color constants for the watchface.
//!
//! The watch host works with 8-bit ARGB (2 bits per channel). Everything here is
//! expressed as `Rgb565` so widgets can draw straight into any `DrawTarget<Color = Rgb565>`,
//! both on the simulator and on a real panel.
//!
//! ## 2-bit channel expansion
//!
//! A 2-bit channel value `v` maps to `v * 85` in 8-bit space (0, 85, 170, 255),
//! then down to 5/6/5 bits for `Rgb565`.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

// =============================================================================
// Standard Colors (from RgbColor trait)
// =============================================================================

/// Pure black. Window and text layer background.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white. Plain variant cells, all status text and icons.
pub const WHITE: Rgb565 = Rgb565::WHITE;

// =============================================================================
// Custom Colors
// =============================================================================

/// "Duke blue" used by the decorated variant for its BCD cells.
///
/// Host ARGB8 `0b11_00_00_10`: opaque, red 0, green 0, blue 2 (170/255).
/// RGB565: (0, 0, 20).
pub const DUKE_BLUE: Rgb565 = argb8_to_rgb565(0b1100_0010);

/// Convert a host ARGB8 color (2 bits per channel) to `Rgb565`.
///
/// Alpha is ignored, the watchface only uses opaque colors.
pub const fn argb8_to_rgb565(argb: u8) -> Rgb565 {
    let r = ((argb >> 4) & 0b11) as u16 * 85;
    let g = ((argb >> 2) & 0b11) as u16 * 85;
    let b = (argb & 0b11) as u16 * 85;
    Rgb565::new((r * 31 / 255) as u8, (g * 63 / 255) as u8, (b * 31 / 255) as u8)
}
