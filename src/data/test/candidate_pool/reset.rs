use super::*;

/// Tests resetting a channel with exclusions.
///
/// Expected: Entry removed, other channels untouched
#[tokio::test]
async fn removes_channel_entry() {
    let store = CandidatePoolStore::new();
    let members = candidates(&["Alice", "Bob"]);
    store.exclude(CHANNEL, &members[0]).await;
    store.exclude(OTHER_CHANNEL, &members[1]).await;

    store.reset(CHANNEL).await;

    assert!(!store.has_entry(CHANNEL).await);
    assert!(store.excluded_ids(OTHER_CHANNEL).await.contains(&members[1].id));
}

/// Tests resetting the same channel twice.
///
/// Expected: Same state as a single reset
#[tokio::test]
async fn twice_equals_once() {
    let store = CandidatePoolStore::new();
    let members = candidates(&["Alice"]);
    store.exclude(CHANNEL, &members[0]).await;

    store.reset(CHANNEL).await;
    store.reset(CHANNEL).await;

    assert!(!store.has_entry(CHANNEL).await);
    assert!(store.excluded_ids(CHANNEL).await.is_empty());
}
