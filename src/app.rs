//! Composition root: wires the hub's published events into the store.
//!
//! The hub never mutates store state itself, it only proposes events. This
//! module owns the subscription that turns a published event into an
//! `add_event` on the store, and the teardown that prevents a dangling timer
//! from mutating a store nothing observes anymore.

use std::path::Path;
use std::sync::Arc;

use crate::command::CommandProcessor;
use crate::db::Database;
use crate::hub::{NotificationHub, Schedule, SubscriptionId};
use crate::store::AppStore;
use crate::AppError;

pub struct App {
    pub store: Arc<AppStore>,
    pub hub: Arc<NotificationHub>,
    pub processor: CommandProcessor,
    store_subscription: SubscriptionId,
}

impl App {
    /// Open the persisted store at `db_path` and wire a hub with the
    /// production schedule.
    pub fn open(db_path: impl AsRef<Path>) -> Result<Self, AppError> {
        Self::open_with_hub(db_path, NotificationHub::new())
    }

    /// Same as [`App::open`] with an injected timing source.
    pub fn open_with_schedule(
        db_path: impl AsRef<Path>,
        schedule: Box<dyn Schedule>,
    ) -> Result<Self, AppError> {
        Self::open_with_hub(db_path, NotificationHub::with_schedule(schedule))
    }

    fn open_with_hub(db_path: impl AsRef<Path>, hub: NotificationHub) -> Result<Self, AppError> {
        let db = Arc::new(Database::open(db_path)?);
        let store = Arc::new(AppStore::open(db)?);
        Ok(Self::wire(store, hub))
    }

    fn wire(store: Arc<AppStore>, hub: NotificationHub) -> Self {
        let hub = Arc::new(hub);
        let store_for_events = Arc::clone(&store);
        let store_subscription = hub.subscribe(Arc::new(move |event| {
            store_for_events.add_event(event.clone());
        }));

        Self {
            store,
            hub,
            processor: CommandProcessor::new(),
            store_subscription,
        }
    }

    /// Stop the timer and drop the hub→store subscription. Idempotent.
    pub fn shutdown(&self) {
        self.hub.stop();
        self.hub.unsubscribe(self.store_subscription);
        tracing::info!("agent app shut down");
    }
}
