#![forbid(unsafe_code)]

use clubhouse_core::event::{Event, EventCategory, EventFilterPatch};
use clubhouse_store::events::{EventAction, EventStore};
use clubhouse_store::feed::{decode_records, decode_records_strict, spawn_store};

fn ev(id: &str, title: &str, date: &str) -> Event {
    Event {
        id: id.to_string(),
        title: title.to_string(),
        description: String::new(),
        category: EventCategory::Workshop,
        date: date.to_string(),
        location: None,
        tags: smallvec::SmallVec::new(),
        capacity: None,
        registered: None,
        featured: false,
    }
}

async fn next_epoch(rx: &mut tokio::sync::watch::Receiver<u64>) {
    tokio::time::timeout(std::time::Duration::from_secs(5), rx.changed())
        .await
        .expect("timed out waiting for a publish")
        .expect("store loop ended early");
}

#[tokio::test]
async fn loop_publishes_snapshots_in_order() {
    let (tx, handle) = spawn_store(EventStore::new(), 64);
    let mut epochs = handle.subscribe_epoch();

    // initial snapshot: loading, empty
    let v0 = handle.current();
    assert!(v0.loading);
    assert!(v0.derived.is_empty());

    tx.send(EventAction::SetEntities(vec![
        ev("a", "Zebra", "2024-03-01"),
        ev("b", "Apple", "2024-01-01"),
    ]))
    .await
    .unwrap();
    next_epoch(&mut epochs).await;
    tx.send(EventAction::SetLoading(false)).await.unwrap();
    next_epoch(&mut epochs).await;

    let v = handle.current();
    assert!(!v.loading);
    let got: Vec<&str> = v.derived.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(got, vec!["b", "a"]);

    tx.send(EventAction::UpdateFilters(EventFilterPatch {
        search: Some("zeb".into()),
        ..Default::default()
    }))
    .await
    .unwrap();
    next_epoch(&mut epochs).await;

    let v = handle.current();
    assert_eq!(v.derived.len(), 1);
    assert_eq!(v.derived[0].id, "a");
    assert_eq!(v.filters.search, "zeb");
}

#[tokio::test]
async fn handles_are_cloneable_readers() {
    let (tx, handle) = spawn_store(EventStore::new(), 8);
    let reader = handle.clone();
    let mut epochs = reader.subscribe_epoch();

    tx.send(EventAction::SetEntities(vec![ev("a", "Zebra", "2024-03-01")]))
        .await
        .unwrap();
    next_epoch(&mut epochs).await;
    assert_eq!(reader.current().derived.len(), 1);
    assert_eq!(handle.current().derived.len(), 1);
}

#[test]
fn decode_skips_broken_rows() {
    let rows = vec![
        serde_json::json!({
            "id": "e1",
            "title": "Intro to Rust",
            "category": "workshop",
            "date": "2024-03-01"
        }),
        // category outside the closed vocabulary
        serde_json::json!({
            "id": "e2",
            "title": "Mystery",
            "category": "all",
            "date": "2024-03-02"
        }),
        serde_json::json!({ "nonsense": true }),
    ];
    let events: Vec<Event> = decode_records(rows);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].id, "e1");
}

#[test]
fn strict_decode_fails_the_batch() {
    let rows = vec![
        serde_json::json!({
            "id": "e1",
            "title": "Intro to Rust",
            "category": "workshop",
            "date": "2024-03-01"
        }),
        serde_json::json!({ "nonsense": true }),
    ];
    let err = decode_records_strict::<Event>(rows).unwrap_err();
    assert!(err.to_string().contains("record 1"));
}
