//! Status events and the listeners that react to them.
//!
//! The host publishes one [`StatusEvent`] per change. The widget's two
//! listeners each subscribe to a fixed set of [`EventKind`]s; an event nobody
//! subscribed to is dropped without a redraw.

use super::StatusState;

/// A status change reported by the host, carrying the new value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StatusEvent {
    /// New battery state of charge (0-100 %).
    BatteryStateChanged { state_of_charge: u8 },
    /// USB power appeared or went away.
    UsbConnStateChanged { powered: bool },
    /// The split link to the central half went up or down.
    PeripheralStatusChanged { connected: bool },
}

/// Event discriminant, used for subscriptions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EventKind {
    BatteryStateChanged,
    UsbConnStateChanged,
    PeripheralStatusChanged,
}

impl EventKind {
    const fn bit(self) -> u8 {
        match self {
            EventKind::BatteryStateChanged => 1 << 0,
            EventKind::UsbConnStateChanged => 1 << 1,
            EventKind::PeripheralStatusChanged => 1 << 2,
        }
    }
}

impl StatusEvent {
    pub const fn kind(&self) -> EventKind {
        match self {
            StatusEvent::BatteryStateChanged { .. } => EventKind::BatteryStateChanged,
            StatusEvent::UsbConnStateChanged { .. } => EventKind::UsbConnStateChanged,
            StatusEvent::PeripheralStatusChanged { .. } => EventKind::PeripheralStatusChanged,
        }
    }
}

/// The widget's listeners.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Listener {
    /// Battery level and charging flag.
    BatteryStatus,
    /// Split link state.
    PeripheralStatus,
}

/// Which event kinds each listener receives.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Subscriptions {
    battery: u8,
    peripheral: u8,
}

impl Subscriptions {
    /// No subscriptions.
    pub const fn none() -> Self {
        Self {
            battery: 0,
            peripheral: 0,
        }
    }

    /// The widget's standard wiring. USB events only reach the battery
    /// listener when USB power counts as charging.
    pub fn standard(usb_charging: bool) -> Self {
        let mut subs = Self::none();
        subs.subscribe(Listener::BatteryStatus, EventKind::BatteryStateChanged);
        if usb_charging {
            subs.subscribe(Listener::BatteryStatus, EventKind::UsbConnStateChanged);
        }
        subs.subscribe(Listener::PeripheralStatus, EventKind::PeripheralStatusChanged);
        subs
    }

    pub fn subscribe(&mut self, listener: Listener, kind: EventKind) {
        *self.mask_mut(listener) |= kind.bit();
    }

    pub fn is_subscribed(&self, listener: Listener, kind: EventKind) -> bool {
        self.mask(listener) & kind.bit() != 0
    }

    /// The listener that should handle `kind`, if any.
    pub fn listener_for(&self, kind: EventKind) -> Option<Listener> {
        [Listener::BatteryStatus, Listener::PeripheralStatus]
            .into_iter()
            .find(|&l| self.is_subscribed(l, kind))
    }

    fn mask(&self, listener: Listener) -> u8 {
        match listener {
            Listener::BatteryStatus => self.battery,
            Listener::PeripheralStatus => self.peripheral,
        }
    }

    fn mask_mut(&mut self, listener: Listener) -> &mut u8 {
        match listener {
            Listener::BatteryStatus => &mut self.battery,
            Listener::PeripheralStatus => &mut self.peripheral,
        }
    }
}

/// Host queries used to seed the status before any event has arrived.
///
/// Implementations may return defaults (empty, unpowered, disconnected)
/// until the host has real readings.
pub trait StatusSource {
    fn state_of_charge(&self) -> u8;
    fn usb_powered(&self) -> bool;
    fn peripheral_connected(&self) -> bool;
}

impl StatusState {
    /// Snapshot the host's current status.
    pub fn query<S: StatusSource + ?Sized>(source: &S, usb_charging: bool) -> Self {
        Self {
            battery: source.state_of_charge().min(100),
            charging: usb_charging && source.usb_powered(),
            connected: source.peripheral_connected(),
        }
    }

    /// Fold an event into the state. Returns `true` if anything changed.
    pub fn apply(&mut self, event: StatusEvent) -> bool {
        let before = *self;
        match event {
            StatusEvent::BatteryStateChanged { state_of_charge } => {
                self.battery = state_of_charge.min(100);
            }
            StatusEvent::UsbConnStateChanged { powered } => self.charging = powered,
            StatusEvent::PeripheralStatusChanged { connected } => self.connected = connected,
        }
        *self != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(u8, bool, bool);

    impl StatusSource for Fixed {
        fn state_of_charge(&self) -> u8 {
            self.0
        }
        fn usb_powered(&self) -> bool {
            self.1
        }
        fn peripheral_connected(&self) -> bool {
            self.2
        }
    }

    #[test]
    fn standard_wiring_with_usb() {
        let subs = Subscriptions::standard(true);
        assert_eq!(
            subs.listener_for(EventKind::BatteryStateChanged),
            Some(Listener::BatteryStatus)
        );
        assert_eq!(
            subs.listener_for(EventKind::UsbConnStateChanged),
            Some(Listener::BatteryStatus)
        );
        assert_eq!(
            subs.listener_for(EventKind::PeripheralStatusChanged),
            Some(Listener::PeripheralStatus)
        );
        assert!(!subs.is_subscribed(Listener::PeripheralStatus, EventKind::BatteryStateChanged));
    }

    #[test]
    fn usb_events_dropped_without_usb_charging() {
        let subs = Subscriptions::standard(false);
        assert_eq!(subs.listener_for(EventKind::UsbConnStateChanged), None);
        assert!(subs.listener_for(EventKind::BatteryStateChanged).is_some());
    }

    #[test]
    fn no_subscriptions_route_nothing() {
        let subs = Subscriptions::none();
        assert_eq!(subs.listener_for(EventKind::PeripheralStatusChanged), None);
    }

    #[test]
    fn event_kinds() {
        assert_eq!(
            StatusEvent::UsbConnStateChanged { powered: true }.kind(),
            EventKind::UsbConnStateChanged
        );
        assert_eq!(
            StatusEvent::PeripheralStatusChanged { connected: false }.kind(),
            EventKind::PeripheralStatusChanged
        );
    }

    #[test]
    fn apply_reports_changes() {
        let mut state = StatusState::default();
        assert!(state.apply(StatusEvent::BatteryStateChanged { state_of_charge: 80 }));
        assert!(!state.apply(StatusEvent::BatteryStateChanged { state_of_charge: 80 }));
        assert!(state.apply(StatusEvent::UsbConnStateChanged { powered: true }));
        assert!(state.apply(StatusEvent::PeripheralStatusChanged { connected: true }));
        assert_eq!(
            state,
            StatusState {
                battery: 80,
                charging: true,
                connected: true
            }
        );
    }

    #[test]
    fn battery_is_clamped() {
        let mut state = StatusState::default();
        state.apply(StatusEvent::BatteryStateChanged { state_of_charge: 250 });
        assert_eq!(state.battery, 100);
        assert_eq!(StatusState::query(&Fixed(130, false, false), true).battery, 100);
    }

    #[test]
    fn query_respects_usb_charging_switch() {
        let source = Fixed(42, true, true);
        let with_usb = StatusState::query(&source, true);
        assert!(with_usb.charging);
        assert!(with_usb.connected);
        assert_eq!(with_usb.battery, 42);

        assert!(!StatusState::query(&source, false).charging);
    }

    #[test]
    fn default_source_renders_empty_and_disconnected() {
        let state = StatusState::query(&Fixed(0, false, false), true);
        assert_eq!(state, StatusState::default());
    }
}
