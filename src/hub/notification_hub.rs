use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use rand::Rng;
use tokio::task::JoinHandle;
use tokio::time;

use super::schedule::{RandomizedSchedule, Schedule};
use crate::catalog::{self, EventTemplate};
use crate::event::AgentEvent;

/// Callback invoked synchronously for every emitted event.
pub type Listener = Arc<dyn Fn(&AgentEvent) + Send + Sync>;

/// Token returned by [`NotificationHub::subscribe`]. Pass it back to
/// [`NotificationHub::unsubscribe`] to remove exactly that listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Timer-driven event generator with a synchronous listener registry.
///
/// Constructed explicitly and shared via `Arc`; there is no process-wide
/// instance, so tests can run isolated hubs side by side. Listeners are
/// invoked in registration order, and the fan-out for one emission completes
/// before the next emission's begins.
pub struct NotificationHub {
    schedule: Box<dyn Schedule>,
    listeners: Mutex<Vec<(SubscriptionId, Listener)>>,
    next_subscription: AtomicU64,
    timer: Mutex<Option<JoinHandle<()>>>,
    emission: Mutex<()>,
}

impl NotificationHub {
    pub fn new() -> Self {
        Self::with_schedule(Box::new(RandomizedSchedule))
    }

    pub fn with_schedule(schedule: Box<dyn Schedule>) -> Self {
        Self {
            schedule,
            listeners: Mutex::new(Vec::new()),
            next_subscription: AtomicU64::new(0),
            timer: Mutex::new(None),
            emission: Mutex::new(()),
        }
    }

    /// Register `listener` for every subsequent emission.
    pub fn subscribe(&self, listener: Listener) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription.fetch_add(1, Ordering::Relaxed));
        self.listeners
            .lock()
            .expect("listener registry poisoned")
            .push((id, listener));
        id
    }

    /// Remove the listener registered under `id`. Returns `false` if the
    /// token was already removed or never issued.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut guard = self.listeners.lock().expect("listener registry poisoned");
        let before = guard.len();
        guard.retain(|(sid, _)| *sid != id);
        guard.len() != before
    }

    /// Begin periodic emission. Idempotent: calling while the timer is live
    /// has no effect. The first event fires after the schedule's warm-up,
    /// then the interval is re-drawn after every tick.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn start(self: &Arc<Self>) {
        let mut guard = self.timer.lock().expect("timer slot poisoned");
        if guard.as_ref().is_some_and(|handle| !handle.is_finished()) {
            return;
        }

        let hub = Arc::clone(self);
        *guard = Some(tokio::spawn(async move {
            time::sleep(hub.schedule.warmup()).await;
            hub.emit_random();
            loop {
                time::sleep(hub.schedule.next_interval()).await;
                hub.emit_random();
            }
        }));
        tracing::debug!("notification hub started");
    }

    /// Cancel the pending timer. Idempotent; an emission that already began
    /// runs to completion synchronously.
    pub fn stop(&self) {
        let mut guard = self.timer.lock().expect("timer slot poisoned");
        if let Some(handle) = guard.take() {
            handle.abort();
            tracing::debug!("notification hub stopped");
        }
    }

    pub fn is_running(&self) -> bool {
        self.timer
            .lock()
            .expect("timer slot poisoned")
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    /// Deterministic single-shot emission: the first catalog template whose
    /// title contains `fragment` (case-insensitive) is emitted immediately,
    /// bypassing the timer. Returns `false` on lookup miss, never errors.
    pub fn trigger(&self, fragment: &str) -> bool {
        match catalog::find_by_title(fragment) {
            Some(template) => {
                self.emit(template);
                true
            }
            None => {
                tracing::debug!(fragment, "no catalog template matched, ignoring trigger");
                false
            }
        }
    }

    fn emit_random(&self) {
        let index = rand::thread_rng().gen_range(0..catalog::TEMPLATES.len());
        self.emit(&catalog::TEMPLATES[index]);
    }

    fn emit(&self, template: &EventTemplate) {
        let event = template.instantiate();

        // Snapshot the registry before invoking so a listener may
        // unsubscribe itself without deadlocking.
        let listeners: Vec<Listener> = self
            .listeners
            .lock()
            .expect("listener registry poisoned")
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();

        // One emission's fan-out completes before the next begins.
        let _serial = self.emission.lock().expect("emission lock poisoned");
        tracing::debug!(id = %event.id, title = %event.title, "emitting agent event");
        for listener in listeners {
            listener(&event);
        }
    }
}

impl Default for NotificationHub {
    fn default() -> Self {
        Self::new()
    }
}
