//! Full CRUD lifecycle tests against the live mock store.
//!
//! # Design
//! Each test boots the mock store on a random port with the quirk
//! configuration it needs, then drives the one-call `RemoteStore` surface
//! over real HTTP. This exercises request building, the ureq transport and
//! the response normalization end to end, including the store's empty-body
//! and non-JSON-body update replies and its varying delete statuses.

use mock_server::{Quirks, UpdateReply};
use tv_catalog_core::{ApiError, RemoteStore, TelevisionClient, TelevisionDraft};

/// Boot a mock store on a random port and return its base URL.
fn spawn_store(quirks: Quirks) -> String {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run_with(listener, quirks).await
        })
        .unwrap();
    });

    format!("http://{addr}")
}

fn store(quirks: Quirks) -> RemoteStore {
    RemoteStore::new(TelevisionClient::new(&spawn_store(quirks)))
}

fn samsung() -> TelevisionDraft {
    TelevisionDraft {
        brand: "Samsung".to_string(),
        model: "UN55AU7700".to_string(),
        channel_count: 150,
    }
}

fn lg() -> TelevisionDraft {
    TelevisionDraft {
        brand: "LG".to_string(),
        model: "OLED55C1".to_string(),
        channel_count: 200,
    }
}

#[test]
fn crud_lifecycle() {
    let store = store(Quirks::default());

    // Fresh store: empty catalog.
    let catalog = store.list().unwrap();
    assert!(catalog.is_empty(), "expected empty catalog");

    // Create echoes the submitted fields and assigns an id.
    let created = store.create(&samsung()).unwrap();
    assert!(!created.id.is_empty());
    assert_eq!(created.brand, "Samsung");
    assert_eq!(created.model, "UN55AU7700");
    assert_eq!(created.channel_count, 150);
    let id = created.id.clone();

    // The store answers PUT with an empty body; the client synthesizes the
    // result from the submitted fields.
    let updated = store.update(&id, &lg()).unwrap();
    assert_eq!(updated, lg().with_id(id.clone()));

    // The write is visible on the next list.
    let catalog = store.list().unwrap();
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog[0].brand, "LG");
    assert_eq!(catalog[0].channel_count, 200);

    store.delete(&id).unwrap();

    // Deleting again fails with the status and the store's body text.
    let err = store.delete(&id).unwrap_err();
    let msg = err.to_string();
    assert!(matches!(err, ApiError::RemoteStatus { status: 404, .. }), "{msg}");
    assert!(msg.contains("404"), "{msg}");
    assert!(msg.contains("Resource not found"), "{msg}");

    let catalog = store.list().unwrap();
    assert!(catalog.is_empty(), "expected empty catalog after delete");
}

#[test]
fn update_against_echoing_store_returns_the_echo() {
    let store = store(Quirks {
        update_reply: UpdateReply::Echo,
        ..Quirks::default()
    });

    let created = store.create(&samsung()).unwrap();
    let updated = store.update(&created.id, &lg()).unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.brand, "LG");
    assert_eq!(updated.model, "OLED55C1");
    assert_eq!(updated.channel_count, 200);
}

#[test]
fn update_against_non_json_reply_falls_back_to_submitted_fields() {
    let store = store(Quirks {
        update_reply: UpdateReply::Garbage,
        ..Quirks::default()
    });

    let created = store.create(&samsung()).unwrap();
    let updated = store.update(&created.id, &lg()).unwrap();
    assert_eq!(updated, lg().with_id(created.id));
}

#[test]
fn update_unknown_id_fails_with_remote_status() {
    let store = store(Quirks::default());
    let err = store.update("missing", &lg()).unwrap_err();
    assert!(matches!(err, ApiError::RemoteStatus { status: 404, .. }));
}

#[test]
fn delete_succeeds_for_every_status_the_store_uses() {
    for status in [200u16, 202, 204] {
        let store = store(Quirks {
            delete_status: status,
            ..Quirks::default()
        });
        let created = store.create(&samsung()).unwrap();
        store
            .delete(&created.id)
            .unwrap_or_else(|e| panic!("delete with status {status}: {e}"));
    }
}
