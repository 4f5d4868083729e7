use super::*;

/// Tests excluding a member from a channel without an entry.
///
/// Verifies that the first exclusion creates the channel's set.
///
/// Expected: Member ID present and entry created
#[tokio::test]
async fn creates_entry_on_first_exclusion() {
    let store = CandidatePoolStore::new();
    let members = candidates(&["Alice"]);

    store.exclude(CHANNEL, &members[0]).await;

    assert!(store.has_entry(CHANNEL).await);
    assert!(store.excluded_ids(CHANNEL).await.contains(&members[0].id));
}

/// Tests excluding the same member twice.
///
/// Expected: Single ID in the set
#[tokio::test]
async fn is_idempotent() {
    let store = CandidatePoolStore::new();
    let members = candidates(&["Alice"]);

    store.exclude(CHANNEL, &members[0]).await;
    store.exclude(CHANNEL, &members[0]).await;

    assert_eq!(store.excluded_ids(CHANNEL).await.len(), 1);
}

/// Tests that exclusions are scoped to one voice channel.
///
/// Expected: Other channel has no exclusions
#[tokio::test]
async fn does_not_leak_into_other_channels() {
    let store = CandidatePoolStore::new();
    let members = candidates(&["Alice", "Bob"]);

    store.exclude(CHANNEL, &members[0]).await;
    store.exclude(CHANNEL, &members[1]).await;

    assert!(store.excluded_ids(OTHER_CHANNEL).await.is_empty());
    assert!(!store.has_entry(OTHER_CHANNEL).await);
}

/// Tests concurrent exclusions from cloned store handles.
///
/// Verifies that clones share one map and that no exclusion is lost when many
/// tasks write at once.
///
/// Expected: Every member excluded
#[tokio::test]
async fn concurrent_exclusions_are_not_lost() {
    let store = CandidatePoolStore::new();
    let members = candidates(&["Alice", "Bob", "Carol", "Dave", "Erin", "Frank"]);

    let mut handles = Vec::new();
    for member in members.clone() {
        let store = store.clone();
        handles.push(tokio::spawn(async move {
            store.exclude(CHANNEL, &member).await;
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    let excluded = store.excluded_ids(CHANNEL).await;
    assert_eq!(excluded.len(), members.len());
    assert!(members.iter().all(|m| excluded.contains(&m.id)));
}
