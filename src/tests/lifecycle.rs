//! Hub lifecycle and wiring tests.
//!
//! These verify:
//! - Idempotent start/stop around a single timer
//! - Warm-up then re-drawn interval pacing
//! - Emission ordering as seen by subscribers and by the store
//! - The composition root's hub→store subscription and teardown

use std::sync::{Arc, Mutex};
use std::time::Duration;

use pretty_assertions::assert_eq;
use tokio::time;

use super::{fixed_hub, recording_listener};
use crate::app::App;
use crate::event::EventStatus;

/// Advance the paused clock and let the timer task run.
async fn advance(duration: Duration) {
    time::advance(duration).await;
    tokio::task::yield_now().await;
}

#[tokio::test(start_paused = true)]
async fn warmup_then_periodic_emissions() {
    let hub = fixed_hub(10, 60);
    let seen = Arc::new(Mutex::new(Vec::new()));
    hub.subscribe(recording_listener(Arc::clone(&seen)));

    hub.start();
    tokio::task::yield_now().await;
    assert_eq!(seen.lock().unwrap().len(), 0);

    // Nothing before the warm-up elapses.
    advance(Duration::from_secs(9)).await;
    assert_eq!(seen.lock().unwrap().len(), 0);

    advance(Duration::from_secs(1)).await;
    assert_eq!(seen.lock().unwrap().len(), 1);

    advance(Duration::from_secs(60)).await;
    advance(Duration::from_secs(60)).await;
    assert_eq!(seen.lock().unwrap().len(), 3);
}

#[tokio::test(start_paused = true)]
async fn start_is_idempotent_single_timer() {
    let hub = fixed_hub(10, 60);
    let seen = Arc::new(Mutex::new(Vec::new()));
    hub.subscribe(recording_listener(Arc::clone(&seen)));

    hub.start();
    hub.start();
    hub.start();
    tokio::task::yield_now().await;

    // One warm-up emission plus two interval ticks — a doubled timer would
    // have produced twice as many.
    advance(Duration::from_secs(10)).await;
    advance(Duration::from_secs(60)).await;
    advance(Duration::from_secs(60)).await;
    assert_eq!(seen.lock().unwrap().len(), 3);
}

#[tokio::test(start_paused = true)]
async fn stop_cancels_pending_timer() {
    let hub = fixed_hub(10, 60);
    let seen = Arc::new(Mutex::new(Vec::new()));
    hub.subscribe(recording_listener(Arc::clone(&seen)));

    hub.start();
    tokio::task::yield_now().await;
    advance(Duration::from_secs(10)).await;
    assert_eq!(seen.lock().unwrap().len(), 1);

    hub.stop();
    hub.stop();
    tokio::task::yield_now().await;
    assert!(!hub.is_running());

    for _ in 0..10 {
        advance(Duration::from_secs(60)).await;
    }
    assert_eq!(seen.lock().unwrap().len(), 1);

    // Restart schedules a fresh warm-up.
    hub.start();
    tokio::task::yield_now().await;
    assert!(hub.is_running());
    advance(Duration::from_secs(10)).await;
    assert_eq!(seen.lock().unwrap().len(), 2);
}

#[tokio::test(start_paused = true)]
async fn stopped_hub_still_honors_trigger() {
    let hub = fixed_hub(10, 60);
    let seen = Arc::new(Mutex::new(Vec::new()));
    hub.subscribe(recording_listener(Arc::clone(&seen)));

    hub.start();
    tokio::task::yield_now().await;
    hub.stop();

    assert!(hub.trigger("dso"));
    assert_eq!(seen.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn wiring_delivers_emissions_to_store_newest_first() {
    let dir = tempfile::tempdir().expect("temp dir");
    let app = App::open(dir.path().join("antz.db")).expect("app");

    let stream = Arc::new(Mutex::new(Vec::new()));
    app.hub.subscribe(recording_listener(Arc::clone(&stream)));

    assert!(app.hub.trigger("margem"));
    assert!(app.hub.trigger("dso"));
    assert!(app.hub.trigger("burn"));

    // Raw subscription stream observes emission order.
    let stream_titles: Vec<_> = stream
        .lock()
        .unwrap()
        .iter()
        .map(|event| event.title.clone())
        .collect();
    assert_eq!(
        stream_titles,
        vec![
            "Margem caiu 2,1pp na BU Sul",
            "DSO subiu para 54 dias",
            "Burn rate crítico detectado",
        ]
    );

    // The store holds the same events, newest first.
    let store_titles: Vec<_> = app
        .store
        .events()
        .into_iter()
        .map(|event| event.title)
        .collect();
    assert_eq!(
        store_titles,
        vec![
            "Burn rate crítico detectado",
            "DSO subiu para 54 dias",
            "Margem caiu 2,1pp na BU Sul",
        ]
    );
    assert_eq!(app.store.open_event_count(), 3);
}

#[tokio::test]
async fn store_lifecycle_actions_apply_to_wired_events() {
    let dir = tempfile::tempdir().expect("temp dir");
    let app = App::open(dir.path().join("antz.db")).expect("app");

    app.hub.trigger("burn");
    let id = app.store.events()[0].id.clone();

    assert!(app.store.mark_event_done(&id));
    assert!(!app.store.dismiss_event(&id));
    assert_eq!(app.store.events()[0].status, EventStatus::Done);
    assert_eq!(app.store.open_event_count(), 0);
}

#[tokio::test]
async fn shutdown_detaches_store_from_hub() {
    let dir = tempfile::tempdir().expect("temp dir");
    let app = App::open(dir.path().join("antz.db")).expect("app");

    app.hub.trigger("burn");
    assert_eq!(app.store.events().len(), 1);

    app.shutdown();
    assert!(!app.hub.is_running());

    // Emissions after teardown no longer reach the store.
    app.hub.trigger("burn");
    assert_eq!(app.store.events().len(), 1);
}
