//! Contracts between the watchface and the runtime hosting it.
//!
//! The host owns the event loop, the display, system services and resources. It drives
//! the [`Watchface`](crate::face::Watchface) through its callbacks and, in turn, answers
//! the queries below. Everything runs on one thread and every callback runs to completion.

use crate::clock::{ClockStyle, WallTime};
use crate::icons::{Bitmap, IconId};
use crate::status::BatteryChargeState;

/// Loads and releases compiled bitmap resources.
pub trait BitmapLoader {
    /// Load resource `id`. The returned bitmap must be passed back to
    /// [`release_bitmap`](Self::release_bitmap) once it is no longer shown.
    fn load_bitmap(
        &mut self,
        id: IconId,
    ) -> Bitmap;

    /// Release a bitmap obtained from [`load_bitmap`](Self::load_bitmap).
    fn release_bitmap(
        &mut self,
        bitmap: Bitmap,
    );
}

/// Services the watch OS offers to the watchface.
pub trait Host: BitmapLoader {
    /// Current local time.
    fn now(&self) -> WallTime;

    /// Whether the user configured 12- or 24-hour display.
    fn clock_style(&self) -> ClockStyle;

    /// Current battery state, as delivered on subscription.
    fn battery_peek(&self) -> BatteryChargeState;

    /// Whether the phone is currently connected.
    fn bluetooth_peek(&self) -> bool;

    /// Run the built-in double vibration pattern.
    fn vibes_double_pulse(&mut self);
}

/// Granularity of tick timer events.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimeUnit {
    Second,
    Minute,
}

/// Services the watchface is subscribed to. The host only dispatches matching events.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Subscriptions {
    /// Tick timer granularity, if subscribed.
    pub tick: Option<TimeUnit>,
    /// Battery state changes.
    pub battery: bool,
    /// Bluetooth connection changes.
    pub bluetooth: bool,
}

impl Subscriptions {
    /// Nothing subscribed.
    pub const NONE: Self = Self {
        tick: None,
        battery: false,
        bluetooth: false,
    };
}
