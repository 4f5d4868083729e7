use super::*;

/// Tests returning an excluded member while others stay excluded.
///
/// Expected: Only the returned member is removed from the set
#[tokio::test]
async fn removes_only_that_member() {
    let store = CandidatePoolStore::new();
    let members = candidates(&["Alice", "Bob"]);
    store.exclude(CHANNEL, &members[0]).await;
    store.exclude(CHANNEL, &members[1]).await;

    store.unexclude(CHANNEL, members[0].id).await;

    let excluded = store.excluded_ids(CHANNEL).await;
    assert!(!excluded.contains(&members[0].id));
    assert!(excluded.contains(&members[1].id));
}

/// Tests returning the last excluded member.
///
/// Verifies that the channel entry is pruned once it becomes empty.
///
/// Expected: No entry for the channel
#[tokio::test]
async fn prunes_empty_entry() {
    let store = CandidatePoolStore::new();
    let members = candidates(&["Alice"]);
    store.exclude(CHANNEL, &members[0]).await;

    store.unexclude(CHANNEL, members[0].id).await;

    assert!(!store.has_entry(CHANNEL).await);
    assert!(store.excluded_ids(CHANNEL).await.is_empty());
}

/// Tests unexcluding in a channel that was never touched.
///
/// Expected: No panic and no entry created
#[tokio::test]
async fn is_noop_without_entry() {
    let store = CandidatePoolStore::new();

    store.unexclude(CHANNEL, UserId::new(1)).await;

    assert!(!store.has_entry(CHANNEL).await);
}

/// Tests unexcluding a member who was never excluded.
///
/// Expected: Existing exclusions untouched
#[tokio::test]
async fn ignores_member_not_excluded() {
    let store = CandidatePoolStore::new();
    let members = candidates(&["Alice", "Bob"]);
    store.exclude(CHANNEL, &members[0]).await;

    store.unexclude(CHANNEL, members[1].id).await;

    assert_eq!(
        store.excluded_ids(CHANNEL).await,
        [members[0].id].into_iter().collect()
    );
}
