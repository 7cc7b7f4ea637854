//! Channel observer implementation
//!
//! Hands each record to a `crossbeam_channel` so another thread can consume
//! it. Sending never blocks the emitting thread.

use crate::core::{LogRecord, Observer, Severity};
use crossbeam_channel::{bounded, unbounded, Receiver, Sender, TrySendError};
use std::sync::atomic::{AtomicU64, Ordering};

/// A record together with the tag and severity it was emitted with
#[derive(Debug, Clone)]
pub struct ObservedRecord {
    pub record: LogRecord,
    pub tag: String,
    pub severity: Severity,
}

pub struct ChannelObserver {
    sender: Sender<ObservedRecord>,
    dropped: AtomicU64,
}

impl ChannelObserver {
    /// Observer backed by an unbounded channel
    pub fn unbounded() -> (Self, Receiver<ObservedRecord>) {
        let (sender, receiver) = unbounded();
        (Self::from_sender(sender), receiver)
    }

    /// Observer backed by a channel holding at most `capacity` records.
    /// Records arriving while it is full are dropped.
    pub fn bounded(capacity: usize) -> (Self, Receiver<ObservedRecord>) {
        let (sender, receiver) = bounded(capacity);
        (Self::from_sender(sender), receiver)
    }

    fn from_sender(sender: Sender<ObservedRecord>) -> Self {
        Self {
            sender,
            dropped: AtomicU64::new(0),
        }
    }

    /// Records lost to a full or disconnected channel
    pub fn dropped_count(&self) -> u64 {
        self.dropped.load(Ordering::Relaxed)
    }
}

impl Observer for ChannelObserver {
    fn notify(&self, record: &LogRecord, tag: &str, severity: Severity) {
        let observed = ObservedRecord {
            record: record.clone(),
            tag: tag.to_string(),
            severity,
        };

        match self.sender.try_send(observed) {
            Ok(()) => {}
            Err(TrySendError::Full(_)) | Err(TrySendError::Disconnected(_)) => {
                self.dropped.fetch_add(1, Ordering::Relaxed);
            }
        }
    }

    fn name(&self) -> &str {
        "channel"
    }
}
