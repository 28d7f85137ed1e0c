//! Notifications
//!
//! The presentation layer reacts to calculation outcomes, for example with a
//! sound. Sinks receive a [`Signal`] per outcome.

use tracing::{info, warn};

use crate::settings::Settings;

/// Outcome signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    /// A calculation finished
    Success,

    /// Input was rejected or a calculation failed
    Error,
}

/// Receiver for outcome signals.
pub trait NotificationSink {
    /// Handle one signal.
    fn notify(&mut self, signal: Signal);
}

/// Sink that ignores every signal.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSink;

impl NotificationSink for NoopSink {
    fn notify(&mut self, _signal: Signal) {}
}

/// Sink that logs signals, honouring the user's sound preference.
#[derive(Debug, Clone, Copy)]
pub struct TracingSink {
    enabled: bool,
}

impl TracingSink {
    /// Creates a sink that emits only when `enabled` is set.
    pub fn new(enabled: bool) -> Self {
        TracingSink { enabled }
    }

    /// Creates a sink from the sound preference.
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.sound_enabled)
    }

    /// Whether signals are emitted.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

impl NotificationSink for TracingSink {
    fn notify(&mut self, signal: Signal) {
        if !self.enabled {
            return;
        }

        match signal {
            Signal::Success => info!("calculation succeeded"),
            Signal::Error => warn!("calculation failed"),
        }
    }
}

/// Sink that remembers every signal it receives.
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    signals: Vec<Signal>,
}

impl RecordingSink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Signals received so far, oldest first.
    pub fn signals(&self) -> &[Signal] {
        &self.signals
    }
}

impl NotificationSink for RecordingSink {
    fn notify(&mut self, signal: Signal) {
        self.signals.push(signal);
    }
}
