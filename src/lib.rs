//! Proactive agent notification core for Ant'z For Business.
//!
//! The backend behind the dashboard's "agent" surfaces: a timer-driven
//! generator emits typed notifications, a store accumulates them and owns
//! their lifecycle (open → done/dismissed), and a command processor answers
//! free-text questions with canned analyses.
//!
//! # Architecture
//!
//! - `catalog`: fixed notification templates (pure data)
//! - `hub`: event generator + synchronous subscription plumbing
//! - `command`: keyword-matched command responses with simulated latency
//! - `store`: canonical events/messages/settings container
//! - `db`: SQLite persistence for the restart-surviving state subset
//! - `app`: composition root wiring hub output into the store
//!
//! Events flow hub → subscriber → store → surfaces; user actions (mark done,
//! dismiss, send message) go straight to the store.

pub mod app;
pub mod catalog;
pub mod command;
pub mod db;
pub mod event;
pub mod hub;
pub mod store;

#[cfg(test)]
mod tests;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    Db(#[from] db::DbError),
    #[error("state snapshot serialization failed: {0}")]
    Snapshot(#[from] serde_json::Error),
}

pub use app::App;
pub use event::{AgentEvent, AgentMessage, Author, EventKind, EventStatus, Severity};
pub use hub::NotificationHub;
pub use store::AppStore;
