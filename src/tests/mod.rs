//! Cross-module tests for the notification pipeline.
//!
//! Hub lifecycle tests run on the paused tokio clock, so timer properties
//! are asserted without real waits.

#[cfg(test)]
mod lifecycle;

#[cfg(test)]
mod persistence;

use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::event::AgentEvent;
use crate::hub::{FixedSchedule, Listener, NotificationHub};

/// Hub with a deterministic schedule for paused-clock tests.
pub fn fixed_hub(warmup_secs: u64, interval_secs: u64) -> Arc<NotificationHub> {
    Arc::new(NotificationHub::with_schedule(Box::new(FixedSchedule {
        warmup: Duration::from_secs(warmup_secs),
        interval: Duration::from_secs(interval_secs),
    })))
}

/// Listener that appends every emission to `sink`.
pub fn recording_listener(sink: Arc<Mutex<Vec<AgentEvent>>>) -> Listener {
    Arc::new(move |event| {
        sink.lock().unwrap().push(event.clone());
    })
}
