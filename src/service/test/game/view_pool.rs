use super::*;

/// Tests that leaving and rejoining voice restores a removed member.
///
/// Alice is removed by a selection, leaves the voice channel, and rejoins. The
/// pool seen after rejoining must contain her again.
///
/// Expected: Alice absent while excluded, present after leave and rejoin
#[tokio::test]
async fn leave_and_rejoin_restores_member() {
    let store = CandidatePoolStore::new();
    let live = candidates(&["Alice"]);
    let alice = live[0].clone();
    let service = GameNightService::new(&store);
    let params = SelectParams {
        remove_from_pool: true,
        ..SelectParams::default()
    };

    service
        .select_publicly(CHANNEL, live.clone(), &params)
        .await
        .unwrap();
    assert!(service.view_pool(CHANNEL, live.clone()).await.is_empty());

    service.member_left(CHANNEL, alice.id).await;

    assert_eq!(service.view_pool(CHANNEL, live.clone()).await, vec![alice]);
}

/// Tests resetting the pool after several removals.
///
/// Expected: Every live member back in the pool
#[tokio::test]
async fn reset_restores_everyone() {
    let store = CandidatePoolStore::new();
    let live = candidates(&["Alice", "Bob", "Carol"]);
    let service = GameNightService::new(&store);
    let params = SelectParams {
        n: 2,
        remove_from_pool: true,
        ..SelectParams::default()
    };
    service
        .select_publicly(CHANNEL, live.clone(), &params)
        .await
        .unwrap();
    assert_eq!(service.view_pool(CHANNEL, live.clone()).await.len(), 1);

    service.reset_pool(CHANNEL).await;

    assert_eq!(service.view_pool(CHANNEL, live.clone()).await, live);
}
