//! Canonical client state: events, conversation, settings, UI flags.
//!
//! Single-writer container for everything the notification surfaces read.
//! Events are held newest-first, messages in chronological append order.
//! A subset of the state (settings, user profile, messages) is persisted
//! as one JSON snapshot and restored on the next start; events and UI flags
//! always start fresh so a new process never replays stale notifications.

use std::sync::{Arc, Mutex, MutexGuard};

use serde::{Deserialize, Serialize};

use crate::db::{queries, Database};
use crate::event::{AgentEvent, AgentMessage, EventStatus};
use crate::AppError;

/// Key under which the persisted snapshot lives in the settings table.
const STORAGE_KEY: &str = "antz-app-storage";

// ---------------------------------------------------------------------------
// Settings and user profile
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    System,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppSettings {
    pub theme: Theme,
    pub currency: String,
    pub business_unit: String,
    pub timezone: String,
    pub language: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            theme: Theme::System,
            currency: "BRL".to_string(),
            business_unit: "all".to_string(),
            timezone: "America/Sao_Paulo".to_string(),
            language: "pt-BR".to_string(),
        }
    }
}

/// Partial settings update; `None` fields keep their current value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SettingsPatch {
    pub theme: Option<Theme>,
    pub currency: Option<String>,
    pub business_unit: Option<String>,
    pub timezone: Option<String>,
    pub language: Option<String>,
}

impl AppSettings {
    fn apply(&mut self, patch: SettingsPatch) {
        if let Some(theme) = patch.theme {
            self.theme = theme;
        }
        if let Some(currency) = patch.currency {
            self.currency = currency;
        }
        if let Some(business_unit) = patch.business_unit {
            self.business_unit = business_unit;
        }
        if let Some(timezone) = patch.timezone {
            self.timezone = timezone;
        }
        if let Some(language) = patch.language {
            self.language = language;
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Viewer,
    Analyst,
    Admin,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub business_units: Vec<String>,
}

fn default_user() -> UserProfile {
    UserProfile {
        id: "1".to_string(),
        name: "Gabriel Henrique".to_string(),
        email: "gabriel@antz.com".to_string(),
        role: Role::Admin,
        avatar: Some("https://github.com/shadcn.png".to_string()),
        business_units: vec![
            "all".to_string(),
            "sul".to_string(),
            "sudeste".to_string(),
            "nordeste".to_string(),
        ],
    }
}

// ---------------------------------------------------------------------------
// Store
// ---------------------------------------------------------------------------

#[derive(Debug)]
struct StoreState {
    settings: AppSettings,
    user: Option<UserProfile>,
    events: Vec<AgentEvent>,
    messages: Vec<AgentMessage>,
    sidebar_open: bool,
    agent_panel_open: bool,
    command_palette_open: bool,
}

impl StoreState {
    fn initial() -> Self {
        Self {
            settings: AppSettings::default(),
            user: Some(default_user()),
            events: Vec::new(),
            messages: Vec::new(),
            sidebar_open: true,
            agent_panel_open: false,
            command_palette_open: false,
        }
    }
}

/// The subset of state that survives a restart.
#[derive(Debug, Serialize, Deserialize)]
struct PersistedState {
    settings: AppSettings,
    #[serde(skip_serializing_if = "Option::is_none")]
    user: Option<UserProfile>,
    #[serde(default)]
    messages: Vec<AgentMessage>,
}

pub struct AppStore {
    state: Mutex<StoreState>,
    db: Option<Arc<Database>>,
}

impl AppStore {
    /// Store backed by `db`. Restores the persisted subset; events and UI
    /// flags start at their defaults regardless of what ran before.
    pub fn open(db: Arc<Database>) -> Result<Self, AppError> {
        let mut state = StoreState::initial();
        if let Some(raw) = queries::get_setting(&db, STORAGE_KEY)? {
            match serde_json::from_str::<PersistedState>(&raw) {
                Ok(persisted) => {
                    state.settings = persisted.settings;
                    if persisted.user.is_some() {
                        state.user = persisted.user;
                    }
                    state.messages = persisted.messages;
                    tracing::debug!(
                        messages = state.messages.len(),
                        "restored persisted app state"
                    );
                }
                Err(e) => tracing::warn!("discarding unreadable state snapshot: {e}"),
            }
        }
        Ok(Self {
            state: Mutex::new(state),
            db: Some(db),
        })
    }

    /// Unpersisted store; state dies with the process.
    pub fn ephemeral() -> Self {
        Self {
            state: Mutex::new(StoreState::initial()),
            db: None,
        }
    }

    fn lock(&self) -> MutexGuard<'_, StoreState> {
        self.state.lock().expect("store mutex poisoned")
    }

    fn persist(&self, state: &StoreState) -> Result<(), AppError> {
        let Some(db) = &self.db else { return Ok(()) };
        let snapshot = PersistedState {
            settings: state.settings.clone(),
            user: state.user.clone(),
            messages: state.messages.clone(),
        };
        let raw = serde_json::to_string(&snapshot)?;
        queries::set_setting(db, STORAGE_KEY, &raw)?;
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Event mutations
    // -----------------------------------------------------------------------

    /// Prepend `event` (newest first). Entries are not deduplicated by id:
    /// adding the same id twice keeps both, each with independent status.
    pub fn add_event(&self, event: AgentEvent) {
        let mut state = self.lock();
        state.events.insert(0, event);
    }

    /// Transition an open event to `Done`. Unknown ids and events already in
    /// a terminal state are left untouched; returns whether a transition
    /// happened.
    pub fn mark_event_done(&self, event_id: &str) -> bool {
        self.transition(event_id, EventStatus::Done)
    }

    /// Transition an open event to `Dismissed`. Same no-op rules as
    /// [`AppStore::mark_event_done`].
    pub fn dismiss_event(&self, event_id: &str) -> bool {
        self.transition(event_id, EventStatus::Dismissed)
    }

    fn transition(&self, event_id: &str, to: EventStatus) -> bool {
        let mut state = self.lock();
        match state.events.iter_mut().find(|event| event.id == event_id) {
            Some(event) if event.status == EventStatus::Open => {
                event.status = to;
                true
            }
            Some(event) => {
                tracing::debug!(event_id, status = ?event.status, "event already terminal, ignoring");
                false
            }
            None => {
                tracing::debug!(event_id, "unknown event id, ignoring transition");
                false
            }
        }
    }

    // -----------------------------------------------------------------------
    // Message mutations
    // -----------------------------------------------------------------------

    /// Append `message` (chronological order) and persist the snapshot.
    pub fn add_message(&self, message: AgentMessage) -> Result<(), AppError> {
        let mut state = self.lock();
        state.messages.push(message);
        self.persist(&state)
    }

    // -----------------------------------------------------------------------
    // Settings and profile
    // -----------------------------------------------------------------------

    pub fn update_settings(&self, patch: SettingsPatch) -> Result<(), AppError> {
        let mut state = self.lock();
        state.settings.apply(patch);
        self.persist(&state)
    }

    pub fn set_user(&self, user: UserProfile) -> Result<(), AppError> {
        let mut state = self.lock();
        state.user = Some(user);
        self.persist(&state)
    }

    // -----------------------------------------------------------------------
    // Visibility flags — UI-only, never persisted
    // -----------------------------------------------------------------------

    pub fn set_sidebar_open(&self, open: bool) {
        self.lock().sidebar_open = open;
    }

    pub fn set_agent_panel_open(&self, open: bool) {
        self.lock().agent_panel_open = open;
    }

    pub fn set_command_palette_open(&self, open: bool) {
        self.lock().command_palette_open = open;
    }

    // -----------------------------------------------------------------------
    // Read access — cloned snapshots, consistent under the single lock
    // -----------------------------------------------------------------------

    /// All events, newest first.
    pub fn events(&self) -> Vec<AgentEvent> {
        self.lock().events.clone()
    }

    /// All messages, oldest first.
    pub fn messages(&self) -> Vec<AgentMessage> {
        self.lock().messages.clone()
    }

    /// Badge count: events still awaiting a user decision.
    pub fn open_event_count(&self) -> usize {
        self.lock()
            .events
            .iter()
            .filter(|event| event.status == EventStatus::Open)
            .count()
    }

    pub fn settings(&self) -> AppSettings {
        self.lock().settings.clone()
    }

    pub fn user(&self) -> Option<UserProfile> {
        self.lock().user.clone()
    }

    pub fn sidebar_open(&self) -> bool {
        self.lock().sidebar_open
    }

    pub fn agent_panel_open(&self) -> bool {
        self.lock().agent_panel_open
    }

    pub fn command_palette_open(&self) -> bool {
        self.lock().command_palette_open
    }
}
