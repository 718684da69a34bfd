//! BCD watchface simulator for desktop.
//!
//! Plays the watch OS around the platform-agnostic watchface: a virtual clock, battery
//! and Bluetooth services, vibration and bitmap resources. By default it runs headless
//! for a number of simulated seconds, optionally replaying a scripted scenario, and
//! writes the final frame as a PNG. With the `window` feature it can also run
//! interactively in an SDL window.

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

mod host;
mod runtime;
mod scenario;
mod timing;
#[cfg(feature = "window")]
mod window;

use std::path::PathBuf;

use anyhow::{Context, Result};
use bcdface_common::clock::ClockStyle;
use bcdface_common::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use bcdface_common::face::Watchface;
use bcdface_common::status::BatteryChargeState;
use bcdface_common::variant::Variant;
use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use clap::{Parser, ValueEnum};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay};

use crate::host::SimHost;
use crate::runtime::{RunReport, run_headless};
use crate::scenario::parse_scenario;

/// Watchface variant to run
#[derive(Clone, Copy, PartialEq, Eq, Debug, ValueEnum)]
enum VariantArg {
    /// BCD grid and seconds only
    Plain,
    /// Grid plus date, battery and phone status bar
    Decorated,
}

impl From<VariantArg> for Variant {
    fn from(arg: VariantArg) -> Self {
        match arg {
            VariantArg::Plain => Self::Plain,
            VariantArg::Decorated => Self::Decorated,
        }
    }
}

/// Run the BCD watchface against a simulated watch
#[derive(Parser, Debug)]
#[command(name = "simulator", version)]
struct Cli {
    /// Watchface variant
    #[arg(long, value_enum, default_value = "decorated")]
    variant: VariantArg,

    /// Start time (HH:MM:SS), default local time
    #[arg(long)]
    time: Option<String>,

    /// Start date (YYYY-MM-DD), default today
    #[arg(long)]
    date: Option<String>,

    /// Show hours in 12-hour style
    #[arg(long)]
    twelve_hour: bool,

    /// Battery charge level in percent
    #[arg(long, default_value_t = 100, value_parser = clap::value_parser!(u8).range(0..=100))]
    battery: u8,

    /// Charger connected
    #[arg(long)]
    plugged: bool,

    /// Battery charging (implies --plugged)
    #[arg(long)]
    charging: bool,

    /// Start with the phone disconnected
    #[arg(long)]
    disconnected: bool,

    /// Simulated seconds to run headless
    #[arg(long, default_value_t = 1)]
    seconds: u32,

    /// Scripted events, e.g. "2:bt-off,5:charge-on,9:battery=15"
    #[arg(long)]
    events: Option<String>,

    /// PNG file the final frame is written to
    #[arg(short, long, default_value = "watchface.png")]
    output: PathBuf,

    /// Pixel scale of the PNG and window
    #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u32).range(1..=16))]
    scale: u32,

    /// Open an interactive window instead of running headless
    #[arg(long)]
    window: bool,
}

impl Cli {
    fn start(&self) -> Result<NaiveDateTime> {
        let now = Local::now().naive_local();
        let date = match &self.date {
            Some(date) => NaiveDate::parse_from_str(date, "%Y-%m-%d")
                .with_context(|| format!("invalid --date `{date}`, expected YYYY-MM-DD"))?,
            None => now.date(),
        };
        let time = match &self.time {
            Some(time) => NaiveTime::parse_from_str(time, "%H:%M:%S")
                .with_context(|| format!("invalid --time `{time}`, expected HH:MM:SS"))?,
            None => now.time().with_nanosecond(0).unwrap_or_else(|| now.time()),
        };
        Ok(date.and_time(time))
    }

    const fn clock_style(&self) -> ClockStyle {
        if self.twelve_hour { ClockStyle::TwelveHour } else { ClockStyle::TwentyFourHour }
    }

    const fn battery(&self) -> BatteryChargeState {
        BatteryChargeState {
            charge_percent: self.battery,
            is_plugged: self.plugged || self.charging,
            is_charging: self.charging,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let variant = Variant::from(cli.variant);
    let mut host = SimHost::new(cli.start()?, cli.clock_style(), cli.battery(), !cli.disconnected);

    if cli.window {
        #[cfg(feature = "window")]
        return window::run(variant, host, cli.scale);
        #[cfg(not(feature = "window"))]
        anyhow::bail!("--window needs the simulator built with `--features window`");
    }

    let scenario = match &cli.events {
        Some(events) => parse_scenario(events).context("invalid --events")?,
        None => Vec::new(),
    };

    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let mut face = Watchface::new(variant);
    let report = run_headless(&mut face, &mut host, &mut display, cli.seconds, &scenario)?;

    let output_settings = OutputSettingsBuilder::new().scale(cli.scale).build();
    display
        .to_rgb_output_image(&output_settings)
        .save_png(&cli.output)
        .with_context(|| format!("failed to write {}", cli.output.display()))?;

    print_summary(&face, &host, &report);
    println!("wrote {}", cli.output.display());
    Ok(())
}

fn print_summary(
    face: &Watchface,
    host: &SimHost,
    report: &RunReport,
) {
    println!("variant:    {}", face.variant().name());
    println!("clock:      {}", host.clock().format("%Y-%m-%d %H:%M:%S"));
    println!("frames:     {} ({} ticks)", report.frames, report.ticks);
    println!(
        "events:     {} dispatched, {} ignored, {} unfired",
        report.dispatched, report.ignored, report.unfired
    );
    println!("vibrations: {}", host.pulses());
    println!(
        "bitmaps:    {} loaded, {} released, {} outstanding",
        host.loads(),
        host.releases(),
        host.outstanding().len()
    );
    println!("phone:      {}", if host.connected() { "connected" } else { "disconnected" });
    println!("event log ({} total):", face.log().total());
    for line in face.log().iter() {
        println!("  {line}");
    }
}
