//! Timing constants for the simulator.
//!
//! These constants use `std::time::Duration` which is not available in `no_std`
//! environments, so they are defined here rather than in the common crate.

use std::time::Duration;

/// Virtual time between two tick events (the watchface subscribes to seconds).
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Target frame time of the interactive window (~50 FPS). The loop sleeps if a frame
/// completes early.
#[cfg(feature = "window")]
pub const FRAME_TIME: Duration = Duration::from_millis(20);
