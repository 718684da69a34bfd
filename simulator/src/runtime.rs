//! Headless host event loop.
//!
//! Drives a [`Watchface`] the way the watch OS does: load, then one tick per simulated
//! second with scripted events in between, a redraw whenever the face reports one is
//! pending, and finally unload. Every rendered frame is read back from its pixels and
//! compared with the clock.

use anyhow::{Result, bail};
use bcdface_common::clock::TimeDigits;
use bcdface_common::face::Watchface;
use bcdface_common::geometry::GridGeometry;
use bcdface_common::grid::{DigitCell, DigitField, decode_row};
use bcdface_common::host::Host;
use bcdface_common::variant::Palette;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::SimulatorDisplay;

use crate::host::SimHost;
use crate::scenario::{ScenarioEvent, Scheduled, Service};
use crate::timing::TICK_INTERVAL;

/// What happened during a run.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct RunReport {
    /// Frames rendered.
    pub frames: u32,
    /// Tick events delivered.
    pub ticks: u32,
    /// Scenario events delivered to a subscribed handler.
    pub dispatched: u32,
    /// Scenario events that changed host state nobody listens to.
    pub ignored: u32,
    /// Scenario events scheduled after the end of the run.
    pub unfired: u32,
}

/// Apply `event` to the host and notify the watchface if it subscribed to that service.
///
/// Returns whether a handler ran.
pub fn dispatch(
    face: &mut Watchface,
    host: &mut SimHost,
    event: ScenarioEvent,
) -> bool {
    event.apply(host);
    let subscriptions = face.subscriptions();
    match event.service() {
        Service::Battery if subscriptions.battery => {
            let state = host.battery_peek();
            face.handle_battery(state, host);
            true
        }
        Service::Bluetooth if subscriptions.bluetooth => {
            let connected = host.bluetooth_peek();
            face.handle_bluetooth(connected, host);
            true
        }
        _ => false,
    }
}

/// Run `face` for `seconds` simulated seconds, then unload it and check the host's
/// bitmap account.
///
/// Events scheduled at second 0 set up the host before the face loads.
pub fn run_headless(
    face: &mut Watchface,
    host: &mut SimHost,
    display: &mut SimulatorDisplay<Rgb565>,
    seconds: u32,
    scenario: &[Scheduled],
) -> Result<RunReport> {
    let mut report = RunReport::default();
    let mut pending = scenario.iter().peekable();

    while let Some(scheduled) = pending.next_if(|s| s.at == 0) {
        scheduled.event.apply(host);
    }

    face.load(host);
    render_if_dirty(face, host, display, &mut report)?;

    for second in 1..=seconds {
        host.advance(TICK_INTERVAL)?;

        while let Some(scheduled) = pending.next_if(|s| s.at <= second) {
            if dispatch(face, host, scheduled.event) {
                report.dispatched += 1;
            } else {
                report.ignored += 1;
            }
        }

        if let Some(units) = face.subscriptions().tick {
            face.handle_tick(&host.now(), units);
            report.ticks += 1;
        }

        render_if_dirty(face, host, display, &mut report)?;
    }
    report.unfired = pending.count() as u32;

    face.unload(host);
    host.finish()?;
    Ok(report)
}

fn render_if_dirty(
    face: &mut Watchface,
    host: &SimHost,
    display: &mut SimulatorDisplay<Rgb565>,
    report: &mut RunReport,
) -> Result<()> {
    if !face.is_dirty() {
        return Ok(());
    }
    face.render(display, host);
    report.frames += 1;

    let shown = read_back(display, &face.variant().palette());
    let digits = TimeDigits::new(&host.now(), host.clock_style());
    let expected = DigitField::DOTS.map(|field| digits.field(field));
    if shown != expected {
        bail!("frame {} shows {shown:?}, clock says {expected:?}", report.frames);
    }
    Ok(())
}

/// Decode the hour and minute digits from a rendered frame.
///
/// A cell counts as set when its centre pixel has the cell color; a ring's centre shows
/// the background.
pub fn read_back(
    display: &SimulatorDisplay<Rgb565>,
    palette: &Palette,
) -> [u8; 4] {
    let geometry = GridGeometry::WATCH;
    let half = (geometry.circle_radius / 2) as i32;

    DigitField::DOTS.map(|field| {
        let cells: Vec<DigitCell> = (0..field.max_columns())
            .map(|column| {
                let probe = DigitCell {
                    row: field.row(),
                    column,
                    filled: false,
                };
                let center = probe.screen_point(&geometry) + Point::new(half, half);
                DigitCell {
                    filled: display.get_pixel(center) == palette.cell,
                    ..probe
                }
            })
            .collect();
        decode_row(&cells)
    })
}

#[cfg(test)]
mod tests {
    use bcdface_common::clock::ClockStyle;
    use bcdface_common::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
    use bcdface_common::status::BatteryChargeState;
    use bcdface_common::variant::Variant;
    use chrono::{NaiveDate, NaiveDateTime};

    use super::*;
    use crate::scenario::parse_scenario;

    fn start() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 9, 30)
            .and_then(|date| date.and_hms_opt(21, 37, 58))
            .unwrap()
    }

    fn display() -> SimulatorDisplay<Rgb565> { SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT)) }

    fn host(connected: bool) -> SimHost {
        SimHost::new(start(), ClockStyle::TwentyFourHour, BatteryChargeState::discharging(64), connected)
    }

    #[test]
    fn test_disconnect_end_to_end() {
        let mut host = host(true);
        let mut face = Watchface::new(Variant::Decorated);
        let mut display = display();
        let scenario = parse_scenario("2:bt-off,3:bt-off,4:bt-on,4:charge-on").unwrap();

        let report = run_headless(&mut face, &mut host, &mut display, 5, &scenario).unwrap();

        assert_eq!(host.pulses(), 1);
        assert!(host.outstanding().is_empty());
        // Phone at load, phone again on reconnect, charging icon
        assert_eq!((host.loads(), host.releases()), (3, 3));
        assert_eq!(report.dispatched, 4);
        assert_eq!(report.ignored, 0);
        assert!(face.log().iter().any(|line| line == "bt disconnected, vibrate"));
        assert_eq!(face.log().last(), Some("unloaded"));
    }

    #[test]
    fn test_plain_ignores_status_events() {
        let mut host = host(true);
        let mut face = Watchface::new(Variant::Plain);
        let mut display = display();
        let scenario = parse_scenario("1:bt-off,2:charge-on,9:bt-on").unwrap();

        let report = run_headless(&mut face, &mut host, &mut display, 3, &scenario).unwrap();

        assert_eq!(host.pulses(), 0);
        assert_eq!(host.loads(), 0);
        assert_eq!(report.ignored, 2);
        assert_eq!(report.unfired, 1);
        // Host state still changed
        assert!(host.battery().is_charging);
    }

    #[test]
    fn test_one_frame_per_tick() {
        let mut host = host(false);
        let mut face = Watchface::new(Variant::Plain);
        let mut display = display();

        let report = run_headless(&mut face, &mut host, &mut display, 4, &[]).unwrap();

        assert_eq!(report.ticks, 4);
        assert_eq!(report.frames, 5);
        // 21:37:58 + 4s
        assert_eq!(read_back(&display, &Variant::Plain.palette()), [2, 1, 3, 8]);
    }

    #[test]
    fn test_second_zero_events_set_initial_state() {
        let mut host = host(true);
        let mut face = Watchface::new(Variant::Decorated);
        let mut display = display();
        let scenario = parse_scenario("0:bt-off,0:charge-on").unwrap();

        let report = run_headless(&mut face, &mut host, &mut display, 1, &scenario).unwrap();

        // Loaded already disconnected: no vibration
        assert_eq!(host.pulses(), 0);
        assert_eq!(host.loads(), 1);
        assert_eq!(report.dispatched, 0);
    }

    #[test]
    fn test_read_back_decorated_twelve_hour() {
        let mut host = SimHost::new(start(), ClockStyle::TwelveHour, BatteryChargeState::default(), true);
        let mut face = Watchface::new(Variant::Decorated);
        let mut display = display();
        face.load(&mut host);
        face.render(&mut display, &host);

        assert_eq!(read_back(&display, &Variant::Decorated.palette()), [0, 9, 3, 7]);
        // Wrong palette sees nothing set
        assert_eq!(read_back(&display, &Variant::Plain.palette()), [0, 0, 0, 0]);

        face.unload(&mut host);
        assert!(host.finish().is_ok());
    }
}
