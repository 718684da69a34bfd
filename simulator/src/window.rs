//! Interactive SDL window.
//!
//! The virtual clock follows real time. Keys change the simulated host:
//!
//! | Key | Action |
//! |-----|--------|
//! | `B` | Toggle phone connection |
//! | `C` | Toggle charging |
//! | `P` | Toggle charger plugged |
//! | `Up` / `Down` | Battery level ±10 |
//! | `V` | Next variant (unloads and reloads the face) |
//! | `H` | Toggle 12/24-hour clock |

use std::thread;
use std::time::Instant;

use anyhow::Result;
use bcdface_common::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use bcdface_common::face::Watchface;
use bcdface_common::host::Host;
use bcdface_common::variant::Variant;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};

use crate::host::SimHost;
use crate::runtime::dispatch;
use crate::scenario::ScenarioEvent;
use crate::timing::{FRAME_TIME, TICK_INTERVAL};

pub fn run(
    mut variant: Variant,
    mut host: SimHost,
    scale: u32,
) -> Result<()> {
    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(scale).build();
    let mut window = Window::new("BCD Watchface", &output_settings);

    let mut face = Watchface::new(variant);
    face.load(&mut host);

    let mut last_tick = Instant::now();

    'running: loop {
        let frame_start = Instant::now();
        let mut force_redraw = false;

        // Handle events
        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => break 'running,
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    if repeat {
                        continue;
                    }
                    let battery = host.battery();
                    let event = match keycode {
                        Keycode::B => Some(ScenarioEvent::Bluetooth(!host.connected())),
                        Keycode::C => Some(ScenarioEvent::Charging(!battery.is_charging)),
                        Keycode::P => Some(ScenarioEvent::Plugged(!battery.is_plugged)),
                        Keycode::Up => Some(ScenarioEvent::Battery((battery.charge_percent + 10).min(100))),
                        Keycode::Down => Some(ScenarioEvent::Battery(battery.charge_percent.saturating_sub(10))),
                        Keycode::V => {
                            face.unload(&mut host);
                            variant = variant.next();
                            face = Watchface::new(variant);
                            face.load(&mut host);
                            None
                        }
                        Keycode::H => {
                            host.set_clock_style(host.clock_style().toggle());
                            force_redraw = true;
                            None
                        }
                        _ => None,
                    };
                    if let Some(event) = event {
                        dispatch(&mut face, &mut host, event);
                    }
                }
                _ => {}
            }
        }

        while last_tick.elapsed() >= TICK_INTERVAL {
            last_tick += TICK_INTERVAL;
            host.advance(TICK_INTERVAL)?;
            if let Some(units) = face.subscriptions().tick {
                face.handle_tick(&host.now(), units);
            }
        }

        if face.is_dirty() || force_redraw {
            face.render(&mut display, &host);
        }
        window.update(&display);

        if let Some(remaining) = FRAME_TIME.checked_sub(frame_start.elapsed()) {
            thread::sleep(remaining);
        }
    }

    face.unload(&mut host);
    for line in face.log().iter() {
        println!("{line}");
    }
    host.finish()
}
