//! Compiled icon resources and the acquire/release state machine around them.
//!
//! The host hands out a [`Bitmap`] for a resource id and expects it back exactly once.
//! `Bitmap` is move-only, and every handle the watchface holds lives inside an
//! [`IconSlot`], so "currently loaded" is a single state rather than a nullable pointer:
//!
//! ```text
//!            enter / load
//!   Idle  ─────────────────▶  Active(Bitmap)
//!         ◀─────────────────
//!            exit / release
//! ```
//!
//! Entering an active slot or exiting an idle one does nothing.

use embedded_graphics::geometry::{Point, Size};

use crate::config::layout::{ICON_HEIGHT, ICON_WIDTH};
use crate::host::BitmapLoader;

// =============================================================================
// Icon Data
// =============================================================================

/// A 1-bit icon, one `u16` per row, leftmost pixel in bit 11.
#[derive(PartialEq, Eq, Debug)]
pub struct Icon {
    rows: [u16; ICON_HEIGHT as usize],
}

impl Icon {
    /// Icon size in pixels.
    pub const SIZE: Size = Size::new(ICON_WIDTH, ICON_HEIGHT);

    /// Whether the pixel at `x`, `y` is set. Out-of-range coordinates are unset.
    pub fn is_set(
        &self,
        x: u32,
        y: u32,
    ) -> bool {
        if x >= ICON_WIDTH || y >= ICON_HEIGHT {
            return false;
        }
        self.rows[y as usize] & (1 << (ICON_WIDTH - 1 - x)) != 0
    }

    /// Offsets of all set pixels, row by row.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        (0..ICON_HEIGHT).flat_map(move |y| {
            (0..ICON_WIDTH)
                .filter(move |&x| self.is_set(x, y))
                .map(move |x| Point::new(x as i32, y as i32))
        })
    }
}

/// Lightning bolt shown while charging.
pub static CHARGE_WHITE: Icon = Icon {
    rows: [
        0b0000_0000_0000,
        0b0000_0000_0000,
        0b0000_0001_1100,
        0b0000_0011_1000,
        0b0000_0111_0000,
        0b0000_1110_0000,
        0b0001_1100_0000,
        0b0011_1111_1100,
        0b0111_1111_1000,
        0b0000_0111_0000,
        0b0000_1110_0000,
        0b0001_1100_0000,
        0b0011_1000_0000,
        0b0111_0000_0000,
        0b0110_0000_0000,
        0b0100_0000_0000,
        0b0000_0000_0000,
        0b0000_0000_0000,
        0b0000_0000_0000,
        0b0000_0000_0000,
    ],
};

/// Handset shown while the phone is connected.
pub static PHONE_WHITE: Icon = Icon {
    rows: [
        0b0000_0000_0000,
        0b0000_0000_0000,
        0b0011_1111_1100,
        0b0010_0000_0100,
        0b0010_1111_0100,
        0b0010_1001_0100,
        0b0010_1001_0100,
        0b0010_1001_0100,
        0b0010_1111_0100,
        0b0010_0000_0100,
        0b0010_1010_0100,
        0b0010_0000_0100,
        0b0010_1010_0100,
        0b0010_0000_0100,
        0b0010_1010_0100,
        0b0010_0000_0100,
        0b0011_1111_1100,
        0b0000_0000_0000,
        0b0000_0000_0000,
        0b0000_0000_0000,
    ],
};

/// Resource identifiers of the compiled icons.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IconId {
    ChargeWhite,
    PhoneWhite,
}

impl IconId {
    /// Pixel data of this resource.
    pub const fn icon(self) -> &'static Icon {
        match self {
            Self::ChargeWhite => &CHARGE_WHITE,
            Self::PhoneWhite => &PHONE_WHITE,
        }
    }

    /// Resource name, as the host refers to it.
    pub const fn name(self) -> &'static str {
        match self {
            Self::ChargeWhite => "CHARGE_WHITE",
            Self::PhoneWhite => "PHONE_WHITE",
        }
    }
}

// =============================================================================
// Bitmap Handle
// =============================================================================

/// A loaded icon resource. Not `Clone`: it goes back to the host exactly once.
#[derive(Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Bitmap {
    id: IconId,
}

impl Bitmap {
    /// Wrap a resource the host just loaded.
    pub const fn from_resource(id: IconId) -> Self { Self { id } }

    /// Resource this bitmap was loaded from.
    #[inline]
    pub const fn id(&self) -> IconId { self.id }

    /// Pixel data.
    #[inline]
    pub const fn icon(&self) -> &'static Icon { self.id.icon() }
}

// =============================================================================
// Icon Slot State Machine
// =============================================================================

/// Whether a slot currently holds its bitmap.
#[derive(Debug, PartialEq, Eq, Default)]
pub enum IconState {
    #[default]
    Idle,
    Active(Bitmap),
}

/// One icon layer's bitmap, loaded on entry and released on exit.
#[derive(Debug)]
pub struct IconSlot {
    id: IconId,
    state: IconState,
}

impl IconSlot {
    /// An idle slot for resource `id`.
    pub const fn new(id: IconId) -> Self {
        Self {
            id,
            state: IconState::Idle,
        }
    }

    /// Resource this slot loads.
    #[inline]
    pub const fn id(&self) -> IconId { self.id }

    /// Current state.
    #[inline]
    pub const fn state(&self) -> &IconState { &self.state }

    /// Whether the bitmap is loaded.
    #[inline]
    pub const fn is_active(&self) -> bool { matches!(self.state, IconState::Active(_)) }

    /// The loaded bitmap, if any.
    pub const fn bitmap(&self) -> Option<&Bitmap> {
        match &self.state {
            IconState::Active(bitmap) => Some(bitmap),
            IconState::Idle => None,
        }
    }

    /// Idle → Active: load the bitmap. Returns whether a transition happened.
    pub fn enter<L>(
        &mut self,
        loader: &mut L,
    ) -> bool
    where
        L: BitmapLoader + ?Sized,
    {
        if self.is_active() {
            return false;
        }
        self.state = IconState::Active(loader.load_bitmap(self.id));
        true
    }

    /// Active → Idle: release the bitmap. Returns whether a transition happened.
    pub fn exit<L>(
        &mut self,
        loader: &mut L,
    ) -> bool
    where
        L: BitmapLoader + ?Sized,
    {
        match core::mem::take(&mut self.state) {
            IconState::Active(bitmap) => {
                loader.release_bitmap(bitmap);
                true
            }
            IconState::Idle => false,
        }
    }

    /// Drive the slot toward `active`. Returns whether a transition happened.
    pub fn set<L>(
        &mut self,
        active: bool,
        loader: &mut L,
    ) -> bool
    where
        L: BitmapLoader + ?Sized,
    {
        if active { self.enter(loader) } else { self.exit(loader) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Loader that records every call.
    #[derive(Default)]
    struct CountingLoader {
        loads: Vec<IconId>,
        releases: Vec<IconId>,
    }

    impl BitmapLoader for CountingLoader {
        fn load_bitmap(
            &mut self,
            id: IconId,
        ) -> Bitmap {
            self.loads.push(id);
            Bitmap::from_resource(id)
        }

        fn release_bitmap(
            &mut self,
            bitmap: Bitmap,
        ) {
            self.releases.push(bitmap.id());
        }
    }

    #[test]
    fn test_new_slot_is_idle() {
        let slot = IconSlot::new(IconId::ChargeWhite);
        assert!(!slot.is_active());
        assert!(slot.bitmap().is_none());
        assert_eq!(slot.state(), &IconState::Idle);
    }

    #[test]
    fn test_enter_twice_loads_once() {
        let mut loader = CountingLoader::default();
        let mut slot = IconSlot::new(IconId::ChargeWhite);
        assert!(slot.enter(&mut loader));
        assert!(!slot.enter(&mut loader));
        assert_eq!(loader.loads, [IconId::ChargeWhite]);
        assert_eq!(slot.bitmap().map(Bitmap::id), Some(IconId::ChargeWhite));
    }

    #[test]
    fn test_exit_twice_releases_once() {
        let mut loader = CountingLoader::default();
        let mut slot = IconSlot::new(IconId::PhoneWhite);
        slot.enter(&mut loader);
        assert!(slot.exit(&mut loader));
        assert!(!slot.exit(&mut loader));
        assert_eq!(loader.releases, [IconId::PhoneWhite]);
        assert!(!slot.is_active());
    }

    #[test]
    fn test_exit_idle_is_noop() {
        let mut loader = CountingLoader::default();
        let mut slot = IconSlot::new(IconId::PhoneWhite);
        assert!(!slot.exit(&mut loader));
        assert!(loader.releases.is_empty());
    }

    #[test]
    fn test_set_follows_flag() {
        let mut loader = CountingLoader::default();
        let mut slot = IconSlot::new(IconId::ChargeWhite);
        for active in [true, true, false, false, true] {
            slot.set(active, &mut loader);
            assert_eq!(slot.is_active(), active);
        }
        assert_eq!(loader.loads.len(), 2);
        assert_eq!(loader.releases.len(), 1);
    }

    #[test]
    fn test_icons_are_distinct_and_non_empty() {
        assert_ne!(&CHARGE_WHITE, &PHONE_WHITE);
        assert!(CHARGE_WHITE.points().count() > 20);
        assert!(PHONE_WHITE.points().count() > 20);
    }

    #[test]
    fn test_icon_pixel_lookup() {
        // Phone outline: top edge spans columns 2..=9 on row 2
        assert!(PHONE_WHITE.is_set(2, 2));
        assert!(PHONE_WHITE.is_set(9, 2));
        assert!(!PHONE_WHITE.is_set(1, 2));
        assert!(!PHONE_WHITE.is_set(ICON_WIDTH, 2));
        assert!(PHONE_WHITE.points().all(|p| p.x < ICON_WIDTH as i32 && p.y < ICON_HEIGHT as i32));
    }
}
