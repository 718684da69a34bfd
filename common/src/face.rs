//! The watchface controller.
//!
//! [`Watchface`] owns all application state and exposes one method per host callback.
//! The host calls [`load`](Watchface::load) when the window appears, forwards the events
//! named by [`subscriptions`](Watchface::subscriptions), calls
//! [`render`](Watchface::render) whenever [`is_dirty`](Watchface::is_dirty) reports a
//! pending redraw, and finally calls [`unload`](Watchface::unload).
//!
//! ```text
//!   new ──▶ load ──▶ { tick | battery | bluetooth ──▶ render }* ──▶ unload
//! ```

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use crate::clock::{TimeDigits, WallTime};
use crate::config::layout::MAIN_LAYER_FRAME;
use crate::geometry::GridGeometry;
use crate::host::{Host, Subscriptions, TimeUnit};
use crate::icons::{IconId, IconSlot};
use crate::log::{EventLog, LogLine};
use crate::status::{
    BatteryChargeState,
    ChargeText,
    DateText,
    DigitText,
    format_battery,
    format_date,
    format_digit,
};
use crate::variant::Variant;
use crate::widgets::{draw_seconds, draw_status_bar, draw_time_grid, fill_layer};

/// Top-level watchface state.
pub struct Watchface {
    variant: Variant,
    geometry: GridGeometry,
    loaded: bool,
    subscriptions: Subscriptions,
    dirty: bool,

    // Text buffers, reused every frame
    date_text: DateText,
    charge_text: ChargeText,
    seconds_tens: DigitText,
    seconds_units: DigitText,

    // Status bar
    charge_icon: IconSlot,
    phone_icon: IconSlot,
    connected: bool,

    log: EventLog,
}

impl Watchface {
    /// Build an unloaded watchface.
    pub const fn new(variant: Variant) -> Self {
        Self {
            variant,
            geometry: GridGeometry::WATCH,
            loaded: false,
            subscriptions: Subscriptions::NONE,
            dirty: false,
            date_text: DateText::new(),
            charge_text: ChargeText::new(),
            seconds_tens: DigitText::new(),
            seconds_units: DigitText::new(),
            charge_icon: IconSlot::new(IconId::ChargeWhite),
            phone_icon: IconSlot::new(IconId::PhoneWhite),
            connected: false,
            log: EventLog::new(),
        }
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Window load: subscribe to services and apply the current status.
    ///
    /// Calling it on a loaded watchface does nothing.
    pub fn load<H: Host>(
        &mut self,
        host: &mut H,
    ) {
        if self.loaded {
            return;
        }
        self.loaded = true;
        self.dirty = true;
        self.subscriptions.tick = Some(TimeUnit::Second);
        self.log.push(match self.variant {
            Variant::Plain => "loaded plain",
            Variant::Decorated => "loaded decorated",
        });

        if self.variant.has_status_bar() {
            self.subscriptions.battery = true;
            self.subscriptions.bluetooth = true;
            let battery = host.battery_peek();
            self.handle_battery(battery, host);
            let connected = host.bluetooth_peek();
            self.handle_bluetooth(connected, host);
        }
    }

    /// Window unload: release every bitmap and drop all subscriptions.
    ///
    /// Calling it on an unloaded watchface does nothing.
    pub fn unload<H: Host>(
        &mut self,
        host: &mut H,
    ) {
        if !self.loaded {
            return;
        }
        self.charge_icon.exit(host);
        self.phone_icon.exit(host);

        self.subscriptions = Subscriptions::NONE;
        self.loaded = false;
        self.dirty = false;
        // A disconnect that happens while unloaded is not reported on the next load
        self.connected = false;
        self.date_text.clear();
        self.charge_text.clear();
        self.log.push("unloaded");
    }

    // =========================================================================
    // Event Handlers
    // =========================================================================

    /// Tick timer event: the time changed, so the main layer needs a redraw.
    pub fn handle_tick(
        &mut self,
        _time: &WallTime,
        _units: TimeUnit,
    ) {
        if self.subscriptions.tick.is_none() {
            return;
        }
        self.dirty = true;
    }

    /// Battery state event: refresh the percentage text and the charging icon.
    pub fn handle_battery<H: Host>(
        &mut self,
        state: BatteryChargeState,
        host: &mut H,
    ) {
        if !self.subscriptions.battery {
            return;
        }

        let mut text = ChargeText::new();
        format_battery(&state, &mut text);
        if text != self.charge_text {
            self.charge_text = text;
            let mut line = LogLine::new();
            line.push_str("battery ").ok();
            line.push_str(&self.charge_text).ok();
            self.log.push(&line);
        }

        if self.charge_icon.set(state.is_charging, host) {
            self.log.push(if state.is_charging { "charging" } else { "not charging" });
        }
        self.dirty = true;
    }

    /// Bluetooth connection event.
    ///
    /// Losing the connection runs one double vibration. Repeated or reconnect events
    /// never vibrate.
    pub fn handle_bluetooth<H: Host>(
        &mut self,
        connected: bool,
        host: &mut H,
    ) {
        if !self.subscriptions.bluetooth {
            return;
        }

        if self.connected && !connected {
            host.vibes_double_pulse();
            self.log.push("bt disconnected, vibrate");
        } else if !self.connected && connected {
            self.log.push("bt connected");
        }
        self.connected = connected;

        self.phone_icon.set(connected, host);
        self.dirty = true;
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Redraw the whole window for the host's current time.
    ///
    /// Clears the pending-redraw flag. Does nothing while unloaded.
    pub fn render<D, H>(
        &mut self,
        display: &mut D,
        host: &H,
    ) where
        D: DrawTarget<Color = Rgb565>,
        H: Host,
    {
        if !self.loaded {
            return;
        }

        let now = host.now();
        let digits = TimeDigits::new(&now, host.clock_style());
        // Format before drawing so the seconds text matches the grid
        format_digit(digits.second_tens, &mut self.seconds_tens);
        format_digit(digits.second_units, &mut self.seconds_units);

        let palette = self.variant.palette();
        fill_layer(display, MAIN_LAYER_FRAME, palette.background);
        draw_time_grid(display, &digits, &self.geometry, &palette);
        draw_seconds(display, &self.seconds_tens, &self.seconds_units, palette.text);

        if self.variant.has_status_bar() {
            format_date(&now, &mut self.date_text);
            draw_status_bar(
                display,
                &self.date_text,
                &self.charge_text,
                &self.charge_icon,
                &self.phone_icon,
                palette.text,
            );
        }

        self.dirty = false;
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Variant this watchface was built for.
    #[inline]
    pub const fn variant(&self) -> Variant { self.variant }

    /// Whether the window is loaded.
    #[inline]
    pub const fn is_loaded(&self) -> bool { self.loaded }

    /// Whether a redraw is pending.
    #[inline]
    pub const fn is_dirty(&self) -> bool { self.dirty }

    /// Services the host should dispatch to this watchface.
    #[inline]
    pub const fn subscriptions(&self) -> Subscriptions { self.subscriptions }

    /// Event log.
    #[inline]
    pub const fn log(&self) -> &EventLog { &self.log }

    /// Battery text as last formatted.
    pub fn charge_text(&self) -> &str { &self.charge_text }

    /// Date text as last rendered.
    pub fn date_text(&self) -> &str { &self.date_text }

    /// Last known phone connection state.
    #[inline]
    pub const fn is_connected(&self) -> bool { self.connected }

    /// Charging icon slot.
    #[inline]
    pub const fn charge_icon(&self) -> &IconSlot { &self.charge_icon }

    /// Phone icon slot.
    #[inline]
    pub const fn phone_icon(&self) -> &IconSlot { &self.phone_icon }
}
