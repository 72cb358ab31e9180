//! Core notification data model.
//!
//! `AgentEvent` is one proactive notification produced by the hub;
//! `AgentMessage` is one turn of the user/agent conversation. Both carry
//! string ids and RFC 3339 timestamps stamped at creation time.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Notification category. Fixed enumeration, not extensible at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Alert,
    Insight,
    Task,
    Explanation,
    Action,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

/// Lifecycle of an event: `Open` until the user resolves it, then exactly one
/// of the terminal states. There is no transition out of a terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Open,
    Done,
    Dismissed,
}

/// Suggested follow-up action attached to an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallToAction {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentEvent {
    pub id: String,
    pub kind: EventKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    pub timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cta: Option<CallToAction>,
    pub status: EventStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Author {
    User,
    Agent,
}

/// One turn in the user/agent conversation. Append-only: never mutated or
/// deleted once created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentMessage {
    pub id: String,
    pub author: Author,
    pub content: String,
    pub timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<EventKind>,
}

impl AgentMessage {
    fn new(author: Author, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            author,
            content: content.into(),
            timestamp: Utc::now().to_rfc3339(),
            category: None,
        }
    }

    /// Message typed by the user.
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Author::User, content)
    }

    /// Response produced by the agent.
    pub fn agent(content: impl Into<String>) -> Self {
        Self::new(Author::Agent, content)
    }

    pub fn with_category(mut self, category: EventKind) -> Self {
        self.category = Some(category);
        self
    }
}
