//! Proactive event generation and subscription plumbing.
//!
//! The hub simulates a background agent watching the business:
//! - `NotificationHub`: idempotent start/stop around a timer task that
//!   manufactures events from the catalog and fans them out synchronously
//! - `Schedule`: injectable timing source (randomized in production, fixed
//!   in tests) so lifecycle properties are testable without wall-clock waits
//!
//! Ownership: the hub only proposes events. The composition root subscribes
//! the hub's output into the store; the store alone mutates event status.

mod notification_hub;
mod schedule;

pub use notification_hub::{Listener, NotificationHub, SubscriptionId};
pub use schedule::{FixedSchedule, RandomizedSchedule, Schedule};
