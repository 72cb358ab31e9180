//! Restart semantics through the composition root.

use pretty_assertions::assert_eq;

use crate::app::App;
use crate::event::{AgentMessage, Author};
use crate::store::{SettingsPatch, Theme};

#[tokio::test]
async fn restart_restores_conversation_but_never_events() {
    let dir = tempfile::tempdir().expect("temp dir");
    let db_path = dir.path().join("antz.db");

    {
        let app = App::open(&db_path).expect("app");
        app.store
            .add_message(AgentMessage::user("qual a margem atual?"))
            .unwrap();
        app.store
            .add_message(AgentMessage::agent("A margem bruta atual está em 41%."))
            .unwrap();
        app.store
            .update_settings(SettingsPatch {
                theme: Some(Theme::Dark),
                ..Default::default()
            })
            .unwrap();

        app.hub.trigger("burn");
        app.store.set_agent_panel_open(true);
        assert_eq!(app.store.events().len(), 1);

        app.shutdown();
    }

    let app = App::open(&db_path).expect("reopened app");

    let messages = app.store.messages();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].author, Author::User);
    assert_eq!(messages[0].content, "qual a margem atual?");
    assert_eq!(messages[1].author, Author::Agent);

    assert_eq!(app.store.settings().theme, Theme::Dark);
    assert!(app.store.user().is_some());

    // The generator always starts the stream fresh: no restored events, no
    // restored panel state.
    assert!(app.store.events().is_empty());
    assert_eq!(app.store.open_event_count(), 0);
    assert!(!app.store.agent_panel_open());
}

#[tokio::test]
async fn message_appends_persist_incrementally() {
    let dir = tempfile::tempdir().expect("temp dir");
    let db_path = dir.path().join("antz.db");

    {
        let app = App::open(&db_path).expect("app");
        for i in 0..5 {
            app.store
                .add_message(AgentMessage::user(format!("mensagem {i}")))
                .unwrap();
        }
        // No explicit save call: each append already persisted the snapshot.
    }

    let app = App::open(&db_path).expect("reopened app");
    let contents: Vec<_> = app
        .store
        .messages()
        .into_iter()
        .map(|message| message.content)
        .collect();
    assert_eq!(
        contents,
        vec![
            "mensagem 0",
            "mensagem 1",
            "mensagem 2",
            "mensagem 3",
            "mensagem 4"
        ]
    );
}
