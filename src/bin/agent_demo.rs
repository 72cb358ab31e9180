//! Live demo of the notification pipeline.
//!
//! Opens the persisted store, wires the hub, and logs the event stream for a
//! short session: one deterministic trigger, one processed command, then a
//! few timer-driven emissions on a compressed schedule.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use antz_agent::app::App;
use antz_agent::event::AgentMessage;
use antz_agent::hub::FixedSchedule;
use antz_agent::AppError;

fn data_dir() -> PathBuf {
    if let Ok(path) = std::env::var("ANTZ_AGENT_DATA_DIR") {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return PathBuf::from(trimmed);
        }
    }

    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(".antz-agent");
    }

    PathBuf::from(".antz-agent")
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "antz_agent=debug,info".parse().expect("valid env filter")),
        )
        .init();

    let data_dir = data_dir();
    std::fs::create_dir_all(&data_dir).expect("failed to create app data directory");

    // Compressed schedule so the demo shows periodic emissions quickly.
    let app = App::open_with_schedule(
        data_dir.join("antz-agent.db"),
        Box::new(FixedSchedule {
            warmup: Duration::from_secs(2),
            interval: Duration::from_secs(8),
        }),
    )?;

    if let Some(user) = app.store.user() {
        tracing::info!(name = %user.name, "session restored");
    }
    for message in app.store.messages() {
        tracing::info!(author = ?message.author, "history: {}", message.content);
    }

    // Transient notice surface: log every emission as it happens.
    let toast = app.hub.subscribe(Arc::new(|event| {
        tracing::info!(kind = ?event.kind, severity = ?event.severity, "🔔 {}", event.title);
    }));

    app.hub.start();

    // Deterministic emission, ahead of the timer.
    app.hub.trigger("burn");

    // One conversation turn through the command processor.
    let question = "qual a margem atual?";
    app.store.add_message(AgentMessage::user(question))?;
    let answer = app.processor.process(question).await;
    tracing::info!("agent: {answer}");
    app.store.add_message(AgentMessage::agent(answer))?;

    tokio::time::sleep(Duration::from_secs(20)).await;

    let events = app.store.events();
    tracing::info!(
        total = events.len(),
        open = app.store.open_event_count(),
        "session summary"
    );
    if let Some(newest) = events.first() {
        app.store.mark_event_done(&newest.id);
        tracing::info!(id = %newest.id, "marked newest event done");
    }

    app.hub.unsubscribe(toast);
    app.shutdown();
    Ok(())
}
