//! Scripted host events for headless runs.
//!
//! A scenario is a comma-separated list of `T:event` entries, `T` being the simulated
//! second at which the event fires:
//!
//! ```text
//! 2:bt-off,5:bt-on,8:charge-on,10:battery=15
//! ```
//!
//! | Event | Effect on the host |
//! |-------|--------------------|
//! | `bt-on` / `bt-off` | Phone connected / disconnected |
//! | `charge-on` | Plugged in and charging |
//! | `charge-off` | Still plugged, charging stopped |
//! | `plug` / `unplug` | Charger connected / removed (removing also stops charging) |
//! | `battery=N` | Charge level `N`, 0-100 |

use std::str::FromStr;

use anyhow::{Context, Result, anyhow, bail};
use bcdface_common::status::BatteryChargeState;

use crate::host::SimHost;

/// Which watchface handler a host change is dispatched to.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Service {
    Battery,
    Bluetooth,
}

/// One host state change.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ScenarioEvent {
    Bluetooth(bool),
    Charging(bool),
    Plugged(bool),
    Battery(u8),
}

impl ScenarioEvent {
    /// Service whose subscribers hear about this event.
    pub const fn service(self) -> Service {
        match self {
            Self::Bluetooth(_) => Service::Bluetooth,
            Self::Charging(_) | Self::Plugged(_) | Self::Battery(_) => Service::Battery,
        }
    }

    /// Apply the change to the host's state.
    pub fn apply(
        self,
        host: &mut SimHost,
    ) {
        match self {
            Self::Bluetooth(connected) => host.set_connected(connected),
            other => {
                let battery = other.apply_to_battery(host.battery());
                host.set_battery(battery);
            }
        }
    }

    const fn apply_to_battery(
        self,
        mut battery: BatteryChargeState,
    ) -> BatteryChargeState {
        match self {
            Self::Charging(true) => {
                battery.is_plugged = true;
                battery.is_charging = true;
            }
            Self::Charging(false) => battery.is_charging = false,
            Self::Plugged(true) => battery.is_plugged = true,
            Self::Plugged(false) => {
                battery.is_plugged = false;
                battery.is_charging = false;
            }
            Self::Battery(percent) => battery.charge_percent = percent,
            Self::Bluetooth(_) => {}
        }
        battery
    }
}

impl FromStr for ScenarioEvent {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Ok(match s {
            "bt-on" => Self::Bluetooth(true),
            "bt-off" => Self::Bluetooth(false),
            "charge-on" => Self::Charging(true),
            "charge-off" => Self::Charging(false),
            "plug" => Self::Plugged(true),
            "unplug" => Self::Plugged(false),
            _ => {
                let value = s
                    .strip_prefix("battery=")
                    .ok_or_else(|| anyhow!("unknown event `{s}`"))?;
                let percent: u8 = value
                    .parse()
                    .with_context(|| format!("invalid battery level `{value}`"))?;
                if percent > 100 {
                    bail!("battery level {percent} is above 100");
                }
                Self::Battery(percent)
            }
        })
    }
}

/// An event and the simulated second it fires at.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Scheduled {
    pub at: u32,
    pub event: ScenarioEvent,
}

/// Parse a scenario. Entries are returned ordered by time; entries sharing a second keep
/// their written order.
pub fn parse_scenario(text: &str) -> Result<Vec<Scheduled>> {
    let mut events = text
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            let (at, event) = entry
                .split_once(':')
                .ok_or_else(|| anyhow!("scenario entry `{entry}` is not `T:event`"))?;
            let at = at
                .trim()
                .parse()
                .with_context(|| format!("invalid time in scenario entry `{entry}`"))?;
            let event = event.trim().parse()?;
            Ok(Scheduled { at, event })
        })
        .collect::<Result<Vec<_>>>()?;
    events.sort_by_key(|scheduled| scheduled.at);
    Ok(events)
}
