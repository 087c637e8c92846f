//! Notification hooks invoked by the tick engine.
//!
//! Hooks run inline with the tick loop and receive the snapshot that was just
//! persisted, so they must return promptly.

use crate::events::Event;
use crate::interval::Interval;

pub trait IntervalHooks {
    /// Called once when the tick loop is entered.
    fn on_start(&mut self, _interval: &Interval) {}

    /// Called after every persisted one-second increment.
    fn on_tick(&mut self, _interval: &Interval) {}

    /// Called after the interval has been persisted as `Done`.
    fn on_expire(&mut self, _interval: &Interval) {}
}

/// Hooks that do nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopHooks;

impl IntervalHooks for NoopHooks {}

/// Hooks built from three closures.
pub struct FnHooks<S, T, E> {
    on_start: S,
    on_tick: T,
    on_expire: E,
}

impl<S, T, E> FnHooks<S, T, E>
where
    S: FnMut(&Interval),
    T: FnMut(&Interval),
    E: FnMut(&Interval),
{
    pub fn new(on_start: S, on_tick: T, on_expire: E) -> Self {
        Self {
            on_start,
            on_tick,
            on_expire,
        }
    }
}

impl<S, T, E> IntervalHooks for FnHooks<S, T, E>
where
    S: FnMut(&Interval),
    T: FnMut(&Interval),
    E: FnMut(&Interval),
{
    fn on_start(&mut self, interval: &Interval) {
        (self.on_start)(interval)
    }

    fn on_tick(&mut self, interval: &Interval) {
        (self.on_tick)(interval)
    }

    fn on_expire(&mut self, interval: &Interval) {
        (self.on_expire)(interval)
    }
}

/// Turns each hook into an [`Event`] and hands it to `sink`.
pub struct EventHooks<F> {
    sink: F,
}

impl<F: FnMut(Event)> EventHooks<F> {
    pub fn new(sink: F) -> Self {
        Self { sink }
    }
}

impl<F: FnMut(Event)> IntervalHooks for EventHooks<F> {
    fn on_start(&mut self, interval: &Interval) {
        (self.sink)(Event::started(interval))
    }

    fn on_tick(&mut self, interval: &Interval) {
        (self.sink)(Event::ticked(interval))
    }

    fn on_expire(&mut self, interval: &Interval) {
        (self.sink)(Event::expired(interval))
    }
}
