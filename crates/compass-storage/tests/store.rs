use compass_core::models::value::ValueRecord;
use compass_storage::error::StorageError;
use compass_storage::store::{Latency, MemoryStore, Operation};

fn value(id: u32, name: &str, score: u8) -> ValueRecord {
    ValueRecord {
        id,
        name: name.to_string(),
        description: String::new(),
        score,
    }
}

#[tokio::test]
async fn create_assigns_next_id() {
    let store = MemoryStore::with_records(vec![value(3, "Growth", 80)], Latency::None);
    let created = store.create(value(0, "Justice", 60)).await.unwrap();
    assert_eq!(created.id, 4);

    let empty = MemoryStore::<ValueRecord>::new(Latency::None);
    assert_eq!(empty.create(value(99, "Growth", 1)).await.unwrap().id, 1);
}

#[tokio::test]
async fn update_preserves_id() {
    let store = MemoryStore::with_records(vec![value(1, "Growth", 80)], Latency::None);
    let updated = store.update(1, value(42, "Growth", 95)).await.unwrap();
    assert_eq!(updated.id, 1);
    assert_eq!(store.get_by_id(1).await.unwrap().score, 95);
    assert!(store.get_by_id(42).await.is_err());
}

#[tokio::test]
async fn missing_ids_are_not_found() {
    let store = MemoryStore::<ValueRecord>::new(Latency::None);
    assert!(matches!(
        store.get_by_id(7).await,
        Err(StorageError::NotFound { ref key }) if key == "value 7"
    ));
    assert!(matches!(
        store.update(7, value(7, "Growth", 1)).await,
        Err(StorageError::NotFound { .. })
    ));
    assert!(matches!(store.delete(7).await, Err(StorageError::NotFound { .. })));
}

#[tokio::test]
async fn delete_returns_removed_record() {
    let store = MemoryStore::with_records(
        vec![value(1, "Growth", 80), value(2, "Family", 70)],
        Latency::None,
    );
    let removed = store.delete(1).await.unwrap();
    assert_eq!(removed.name, "Growth");
    assert_eq!(store.len().await, 1);
}

#[tokio::test]
async fn reads_return_copies() {
    let store = MemoryStore::with_records(vec![value(1, "Growth", 80)], Latency::None);
    let mut all = store.get_all().await;
    all[0].score = 1;
    assert_eq!(store.get_by_id(1).await.unwrap().score, 80);
}

#[tokio::test]
async fn clones_share_records() {
    let store = MemoryStore::<ValueRecord>::new(Latency::None);
    let handle = store.clone();
    handle.create(value(0, "Growth", 80)).await.unwrap();
    assert_eq!(store.len().await, 1);
}

#[tokio::test]
async fn init_and_clear_replace_contents() {
    let store = MemoryStore::with_records(vec![value(1, "Growth", 80)], Latency::None);
    store
        .init(vec![value(5, "Family", 70), value(6, "Justice", 60)])
        .await;
    assert_eq!(store.len().await, 2);
    assert!(store.get_by_id(1).await.is_err());

    store.clear().await;
    assert!(store.is_empty().await);
}

#[test]
fn simulated_delays_match_operation() {
    assert_eq!(Operation::GetById.delay().as_millis(), 200);
    assert_eq!(Operation::Create.delay().as_millis(), 400);
    assert_eq!(Latency::from_flag(true), Latency::Simulated);
    assert_eq!(Latency::from_flag(false), Latency::None);
}
