//! Simulated watch OS services.
//!
//! [`SimHost`] plays the role of the watch firmware: it owns a virtual wall clock, the
//! battery and Bluetooth state, counts vibrations, and keeps an account of every bitmap it
//! hands out so leaks can be reported at shutdown.

use std::time::Duration;

use anyhow::{Context, Result, bail};
use bcdface_common::clock::{ClockStyle, WallTime};
use bcdface_common::host::{BitmapLoader, Host};
use bcdface_common::icons::{Bitmap, IconId};
use bcdface_common::status::BatteryChargeState;
use chrono::{Datelike, NaiveDateTime, Timelike};

/// Convert a chrono timestamp into the watch's broken-down time.
pub fn wall_time(at: &NaiveDateTime) -> WallTime {
    WallTime {
        hour: at.hour() as u8,
        minute: at.minute() as u8,
        second: at.second() as u8,
        day: at.day() as u8,
        month0: at.month0() as u8,
        weekday: at.weekday().num_days_from_sunday() as u8,
    }
}

/// Host services backed by a virtual clock.
#[derive(Debug)]
pub struct SimHost {
    clock: NaiveDateTime,
    style: ClockStyle,
    battery: BatteryChargeState,
    connected: bool,

    // Counters
    pulses: u32,
    loads: u32,
    releases: u32,
    outstanding: Vec<IconId>,
    bad_releases: u32,
}

impl SimHost {
    pub fn new(
        start: NaiveDateTime,
        style: ClockStyle,
        battery: BatteryChargeState,
        connected: bool,
    ) -> Self {
        Self {
            clock: start,
            style,
            battery,
            connected,
            pulses: 0,
            loads: 0,
            releases: 0,
            outstanding: Vec::new(),
            bad_releases: 0,
        }
    }

    /// Move the virtual clock forward.
    pub fn advance(
        &mut self,
        by: Duration,
    ) -> Result<()> {
        let delta = chrono::Duration::from_std(by).context("clock step out of range")?;
        self.clock = self
            .clock
            .checked_add_signed(delta)
            .context("virtual clock overflowed")?;
        Ok(())
    }

    pub const fn clock(&self) -> NaiveDateTime { self.clock }

    #[cfg_attr(not(feature = "window"), allow(dead_code))]
    pub fn set_clock_style(
        &mut self,
        style: ClockStyle,
    ) {
        self.style = style;
    }

    pub const fn battery(&self) -> BatteryChargeState { self.battery }

    pub fn set_battery(
        &mut self,
        battery: BatteryChargeState,
    ) {
        self.battery = battery;
    }

    pub const fn connected(&self) -> bool { self.connected }

    pub fn set_connected(
        &mut self,
        connected: bool,
    ) {
        self.connected = connected;
    }

    /// Double pulses requested so far.
    pub const fn pulses(&self) -> u32 { self.pulses }

    /// Bitmaps loaded so far.
    pub const fn loads(&self) -> u32 { self.loads }

    /// Bitmaps released so far.
    pub const fn releases(&self) -> u32 { self.releases }

    /// Bitmaps currently handed out.
    pub fn outstanding(&self) -> &[IconId] { &self.outstanding }

    /// Verify the bitmap account is balanced. Called after the watchface unloads.
    pub fn finish(&self) -> Result<()> {
        if self.bad_releases > 0 {
            bail!("{} bitmap(s) released that were never loaded", self.bad_releases);
        }
        if !self.outstanding.is_empty() {
            let names: Vec<&str> = self.outstanding.iter().map(|id| id.name()).collect();
            bail!("bitmap leak: {} still loaded ({})", names.len(), names.join(", "));
        }
        Ok(())
    }
}

impl BitmapLoader for SimHost {
    fn load_bitmap(
        &mut self,
        id: IconId,
    ) -> Bitmap {
        self.loads += 1;
        self.outstanding.push(id);
        Bitmap::from_resource(id)
    }

    fn release_bitmap(
        &mut self,
        bitmap: Bitmap,
    ) {
        self.releases += 1;
        match self.outstanding.iter().position(|id| *id == bitmap.id()) {
            Some(index) => {
                self.outstanding.swap_remove(index);
            }
            None => self.bad_releases += 1,
        }
    }
}

impl Host for SimHost {
    fn now(&self) -> WallTime { wall_time(&self.clock) }

    fn clock_style(&self) -> ClockStyle { self.style }

    fn battery_peek(&self) -> BatteryChargeState { self.battery }

    fn bluetooth_peek(&self) -> bool { self.connected }

    fn vibes_double_pulse(&mut self) { self.pulses += 1; }
}
