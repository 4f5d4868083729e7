use super::*;

/// Tests reading a channel that has never had an exclusion.
///
/// Expected: Empty set
#[tokio::test]
async fn empty_without_entry() {
    let store = CandidatePoolStore::new();

    assert!(store.excluded_ids(CHANNEL).await.is_empty());
}

/// Tests that the returned set is a snapshot.
///
/// Verifies that later writes do not change a set already handed out.
///
/// Expected: Snapshot keeps its original contents
#[tokio::test]
async fn returns_snapshot() {
    let store = CandidatePoolStore::new();
    let members = candidates(&["Alice", "Bob"]);
    store.exclude(CHANNEL, &members[0]).await;

    let snapshot = store.excluded_ids(CHANNEL).await;
    store.exclude(CHANNEL, &members[1]).await;

    assert_eq!(snapshot.len(), 1);
    assert_eq!(store.excluded_ids(CHANNEL).await.len(), 2);
}
