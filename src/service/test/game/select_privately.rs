use super::*;

/// Tests an imposter round with two imposters among four members.
///
/// Verifies that two members receive the imposter DM naming the other imposter,
/// the other two receive the safe DM, and all four messages stay delivered.
///
/// Expected: Delivered with 2 imposter and 2 safe messages
#[tokio::test]
async fn two_imposters_among_four() {
    let store = CandidatePoolStore::new();
    let live = candidates(&["Alice", "Bob", "Carol", "Dave"]);
    let transport = MockTransport::new();
    let dispatcher = DirectMessageDispatcher::new(&transport, TIMEOUT);
    let params = ImposterParams {
        n: 2,
        reveal_imposters: true,
        ..ImposterParams::default()
    };

    let outcome = GameNightService::new(&store)
        .select_privately(CHANNEL, live.clone(), &params, &dispatcher)
        .await
        .unwrap();

    assert_eq!(outcome, DispatchOutcome::Delivered);
    let visible = transport.visible_messages();
    assert_eq!(visible.len(), 4);

    let imposters: Vec<_> = live
        .iter()
        .filter(|m| visible[&m.id].starts_with(":smiling_imp:"))
        .collect();
    assert_eq!(imposters.len(), 2);
    assert!(visible[&imposters[0].id].contains(&imposters[1].mention));
    assert!(visible[&imposters[1].id].contains(&imposters[0].mention));

    let safe_count = live
        .iter()
        .filter(|m| visible[&m.id] == ":relieved: Phew! You are NOT an Imposter!")
        .count();
    assert_eq!(safe_count, 2);
}

/// Tests an imposter round where one member blocks DMs.
///
/// Expected: Blocked naming that member, no visible messages
#[tokio::test]
async fn blocked_member_retracts_all_roles() {
    let store = CandidatePoolStore::new();
    let live = candidates(&["Alice", "Bob", "Carol"]);
    let transport = MockTransport::new().blocking(live[2].id);
    let dispatcher = DirectMessageDispatcher::new(&transport, TIMEOUT);

    let outcome = GameNightService::new(&store)
        .select_privately(CHANNEL, live.clone(), &ImposterParams::default(), &dispatcher)
        .await
        .unwrap();

    assert_eq!(outcome, DispatchOutcome::Blocked(vec![live[2].clone()]));
    assert!(transport.visible_messages().is_empty());
}

/// Tests that imposters removed from the pool still get their DM.
///
/// Expected: Everyone messaged, imposter excluded afterwards
#[tokio::test]
async fn removed_imposter_is_still_messaged() {
    let store = CandidatePoolStore::new();
    let live = candidates(&["Alice", "Bob", "Carol"]);
    let transport = MockTransport::new();
    let dispatcher = DirectMessageDispatcher::new(&transport, TIMEOUT);
    let params = ImposterParams {
        remove_from_pool: true,
        ..ImposterParams::default()
    };

    GameNightService::new(&store)
        .select_privately(CHANNEL, live.clone(), &params, &dispatcher)
        .await
        .unwrap();

    let visible = transport.visible_messages();
    assert_eq!(visible.len(), 3);
    let excluded = store.excluded_ids(CHANNEL).await;
    assert_eq!(excluded.len(), 1);
    let imposter = excluded.iter().next().unwrap();
    assert_eq!(visible[imposter], ":smiling_imp: Yikes! You are the Imposter!");
}

/// Tests an imposter round with too few members.
///
/// Expected: Err(InsufficientCandidates) and no DMs sent
#[tokio::test]
async fn insufficient_candidates_sends_nothing() {
    let store = CandidatePoolStore::new();
    let transport = MockTransport::new();
    let dispatcher = DirectMessageDispatcher::new(&transport, TIMEOUT);
    let params = ImposterParams {
        n: 2,
        ..ImposterParams::default()
    };

    let result = GameNightService::new(&store)
        .select_privately(CHANNEL, candidates(&["Alice"]), &params, &dispatcher)
        .await;

    assert!(matches!(
        result,
        Err(AppError::GameErr(GameError::InsufficientCandidates { .. }))
    ));
    assert!(transport.events().is_empty());
}
