//! Report sink implementations

use crate::output::traits::{ReportEvent, ReportSink};
use std::sync::{Mutex, PoisonError};
use tokio::sync::mpsc::UnboundedSender;

/// Writes every event to the tracing log
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl ReportSink for TracingReporter {
    fn report(&self, event: ReportEvent) {
        match &event {
            ReportEvent::FetchFailed { .. } => tracing::warn!("{}", event),
            ReportEvent::TouchedUrls { .. } => tracing::debug!("{}", event),
            _ => tracing::info!("{}", event),
        }
    }
}

/// Forwards events over an unbounded channel to an external consumer
///
/// Sending never blocks. If the receiver has been dropped the event is
/// discarded.
#[derive(Debug, Clone)]
pub struct ChannelReporter {
    sender: UnboundedSender<ReportEvent>,
}

impl ChannelReporter {
    pub fn new(sender: UnboundedSender<ReportEvent>) -> Self {
        Self { sender }
    }
}

impl ReportSink for ChannelReporter {
    fn report(&self, event: ReportEvent) {
        if self.sender.send(event).is_err() {
            tracing::debug!("Report receiver closed, dropping event");
        }
    }
}

/// Keeps every event in memory
#[derive(Debug, Default)]
pub struct MemoryReporter {
    events: Mutex<Vec<ReportEvent>>,
}

impl MemoryReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of all events received so far
    pub fn events(&self) -> Vec<ReportEvent> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns the addresses from every `EmailFound` event, in arrival order
    pub fn emails(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                ReportEvent::EmailFound { email, .. } => Some(email),
                _ => None,
            })
            .collect()
    }

    /// Returns every event rendered as display text
    pub fn lines(&self) -> Vec<String> {
        self.events().iter().map(ToString::to_string).collect()
    }
}

impl ReportSink for MemoryReporter {
    fn report(&self, event: ReportEvent) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event);
    }
}
