//! Watchface variants.
//!
//! Both variants share every line of drawing code; they differ only in their palette
//! and in whether the status bar is shown.
//!
//! # Variants
//!
//! - [`Variant::Plain`]: White BCD grid and seconds, nothing else
//! - [`Variant::Decorated`]: Duke blue grid plus date, battery, charging and phone status

use embedded_graphics::pixelcolor::Rgb565;

use crate::colors::{BLACK, DUKE_BLUE, WHITE};

/// Colors used by one variant.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Palette {
    /// Foreground of the BCD cells.
    pub cell: Rgb565,
    /// Window background, also the hollow of unfilled cells.
    pub background: Rgb565,
    /// Seconds digits, status text and icons.
    pub text: Rgb565,
}

/// Available watchface variants.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Variant {
    /// BCD grid and seconds only.
    #[default]
    Plain,

    /// BCD grid, seconds and a status bar.
    /// Shows: Date (top), battery percentage and charging icon (top-left), phone icon (top-right)
    Decorated,
}

impl Variant {
    /// Cycle to the next variant (Plain → Decorated → Plain).
    #[inline]
    pub const fn next(self) -> Self {
        match self {
            Self::Plain => Self::Decorated,
            Self::Decorated => Self::Plain,
        }
    }

    /// Palette of this variant.
    pub const fn palette(self) -> Palette {
        match self {
            Self::Plain => Palette {
                cell: WHITE,
                background: BLACK,
                text: WHITE,
            },
            Self::Decorated => Palette {
                cell: DUKE_BLUE,
                background: BLACK,
                text: WHITE,
            },
        }
    }

    /// Whether this variant shows the status bar and needs battery and Bluetooth events.
    #[inline]
    pub const fn has_status_bar(self) -> bool { matches!(self, Self::Decorated) }

    /// Lower-case name, as accepted on the simulator command line.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::Decorated => "decorated",
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_default() {
        assert_eq!(Variant::default(), Variant::Plain);
    }

    #[test]
    fn test_variant_next_cycle() {
        assert_eq!(Variant::Plain.next(), Variant::Decorated);
        assert_eq!(Variant::Decorated.next(), Variant::Plain);
        assert_eq!(Variant::Plain.next().next(), Variant::Plain);
    }

    #[test]
    fn test_palettes() {
        assert_eq!(Variant::Plain.palette().cell, WHITE);
        assert_eq!(Variant::Decorated.palette().cell, DUKE_BLUE);
        for variant in [Variant::Plain, Variant::Decorated] {
            assert_eq!(variant.palette().background, BLACK);
            assert_eq!(variant.palette().text, WHITE);
        }
    }

    #[test]
    fn test_status_bar_only_when_decorated() {
        assert!(!Variant::Plain.has_status_bar());
        assert!(Variant::Decorated.has_status_bar());
    }
}
