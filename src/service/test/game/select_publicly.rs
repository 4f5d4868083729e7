use super::*;

/// Tests a default public round with three members.
///
/// Verifies that exactly one member is announced and that the pool is untouched
/// because removal defaults to off.
///
/// Expected: One mention in the announcement, no exclusions
#[tokio::test]
async fn announces_one_of_three() {
    let store = CandidatePoolStore::new();
    let live = candidates(&["Alice", "Bob", "Carol"]);

    let announcement = GameNightService::new(&store)
        .select_publicly(CHANNEL, live.clone(), &SelectParams::default())
        .await
        .unwrap();

    let mentioned: Vec<_> = live
        .iter()
        .filter(|m| announcement.contains(&m.mention))
        .collect();
    assert_eq!(mentioned.len(), 1);
    assert_eq!(
        announcement,
        format!(
            "Congrats! {} has been selected to be the Superstar",
            mentioned[0].mention
        )
    );
    assert!(store.excluded_ids(CHANNEL).await.is_empty());
}

/// Tests requesting more members than the pool holds.
///
/// Expected: Err(InsufficientCandidates), no exclusions, pool unchanged
#[tokio::test]
async fn insufficient_candidates_mutates_nothing() {
    let store = CandidatePoolStore::new();
    let live = candidates(&["Alice", "Bob"]);
    let service = GameNightService::new(&store);
    let params = SelectParams {
        n: 3,
        remove_from_pool: true,
        ..SelectParams::default()
    };

    let result = service.select_publicly(CHANNEL, live.clone(), &params).await;

    assert!(matches!(
        result,
        Err(AppError::GameErr(GameError::InsufficientCandidates {
            requested: 3,
            available: 2,
        }))
    ));
    assert!(store.excluded_ids(CHANNEL).await.is_empty());
    assert_eq!(service.view_pool(CHANNEL, live.clone()).await, live);
}

/// Tests consecutive rounds with removal enabled.
///
/// Verifies that removed members are never drawn again and that the pool runs
/// dry after everyone has been selected once.
///
/// Expected: Three distinct winners, then InsufficientCandidates
#[tokio::test]
async fn removal_exhausts_pool() {
    let store = CandidatePoolStore::new();
    let live = candidates(&["Alice", "Bob", "Carol"]);
    let service = GameNightService::new(&store);
    let params = SelectParams {
        remove_from_pool: true,
        ..SelectParams::default()
    };

    let mut winners = HashSet::new();
    for _ in 0..3 {
        let announcement = service
            .select_publicly(CHANNEL, live.clone(), &params)
            .await
            .unwrap();
        let winner = live
            .iter()
            .find(|m| announcement.contains(&m.mention))
            .unwrap();
        assert!(winners.insert(winner.id));
    }

    let result = service.select_publicly(CHANNEL, live.clone(), &params).await;
    assert!(matches!(
        result,
        Err(AppError::GameErr(GameError::InsufficientCandidates { .. }))
    ));
}

/// Tests a non-positive member count.
///
/// Expected: Err(InvalidArgument)
#[tokio::test]
async fn rejects_zero_members() {
    let store = CandidatePoolStore::new();
    let params = SelectParams {
        n: 0,
        ..SelectParams::default()
    };

    let result = GameNightService::new(&store)
        .select_publicly(CHANNEL, candidates(&["Alice"]), &params)
        .await;

    assert!(matches!(
        result,
        Err(AppError::GameErr(GameError::InvalidArgument(_)))
    ));
}
