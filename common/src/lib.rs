//! Binary-coded-decimal watchface.
//!
//! Shows hours and minutes as stacks of rounded squares, one stack per decimal digit and
//! one square per bit (solid for 1, ring for 0), with the seconds as two large digits
//! beside them. The decorated variant adds a status bar with the date, battery level,
//! a charging icon and a phone-connection icon, and vibrates when the phone disconnects.
//!
//! This crate is platform-agnostic. The hosting runtime (watch OS or the simulator)
//! implements [`host::Host`] and drives a [`face::Watchface`]:
//!
//! - [`grid`]: Digit-to-dot-grid conversion
//! - [`geometry`]: Cell-to-screen layout
//! - [`clock`]: Wall time, clock style and digit split
//! - [`status`]: Date and battery text formatting
//! - [`icons`]: Icon resources and the load/release slot state machine
//! - [`host`]: Host traits and subscriptions
//! - [`face`]: The watchface controller
//! - [`variant`]: Plain and decorated variants with their palettes
//! - [`widgets`]: Drawing code
//! - [`colors`], [`config`], [`styles`]: Compile-time constants
//! - [`log`]: Event log ring buffer
//!
//! # no_std Compatibility
//!
//! This crate is `no_std` compatible and can be used on embedded targets. Tests run with
//! `std`.

#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod clock;
pub mod colors;
pub mod config;
pub mod face;
pub mod geometry;
pub mod grid;
pub mod host;
pub mod icons;
pub mod log;
pub mod status;
pub mod styles;
pub mod variant;
pub mod widgets;

// Re-export commonly used items
pub use clock::{ClockStyle, TimeDigits, WallTime};
pub use face::Watchface;
pub use host::{BitmapLoader, Host, Subscriptions, TimeUnit};
pub use icons::{Bitmap, IconId};
pub use status::BatteryChargeState;
pub use variant::Variant;
