use gadget_points::{CliConfig, LoyaltyAccount, LoyaltyLedger, ScenarioEngine};

#[tokio::test]
async fn test_default_scenario_end_to_end() {
    // 20 accumulates and 2 redeems against a fresh account, exactly the
    // default CLI run.
    let config = CliConfig::default();
    let engine = ScenarioEngine::new(LoyaltyAccount::new(), config);

    let card = engine.run().await.unwrap();

    assert_eq!(card.points, 20);
    // Both redeem tasks may or may not run before the tenth point lands.
    assert!(card.redemptions <= 2);
}

#[tokio::test]
async fn test_accumulate_count_is_exact_under_concurrency() {
    let config = CliConfig {
        accumulate_tasks: 1000,
        redeem_tasks: 0,
        ..CliConfig::default()
    };
    let engine = ScenarioEngine::new(LoyaltyAccount::new(), config);

    let card = engine.run().await.unwrap();

    assert_eq!(card.points, 1000);
    assert_eq!(card.redemptions, 100);
}

#[tokio::test]
async fn test_mixed_batch_never_underflows_redemptions() {
    // Far more redeems than can ever be unlocked.
    let config = CliConfig {
        accumulate_tasks: 30,
        redeem_tasks: 50,
        ..CliConfig::default()
    };
    let engine = ScenarioEngine::new(LoyaltyAccount::new(), config);

    let card = engine.run().await.unwrap();

    assert_eq!(card.points, 30);
    // Any value above the unlockable maximum means the zero floor was
    // violated.
    assert!(card.redemptions <= 3);
}

#[tokio::test]
async fn test_account_stays_live_after_batch() {
    let config = CliConfig {
        accumulate_tasks: 10,
        redeem_tasks: 0,
        ..CliConfig::default()
    };
    let account = LoyaltyAccount::new();
    let engine = ScenarioEngine::new(account.clone(), config);

    let card = engine.run().await.unwrap();
    assert_eq!(card.redemptions, 1);

    // The account remains mutable after the barrier.
    assert!(account.redeem().await);
    assert_eq!(account.snapshot().await.redemptions, 0);
}

#[tokio::test]
async fn test_repeated_batches_accumulate_on_same_account() {
    let account = LoyaltyAccount::new();

    for _ in 0..3 {
        let config = CliConfig {
            accumulate_tasks: 10,
            redeem_tasks: 0,
            ..CliConfig::default()
        };
        let engine = ScenarioEngine::new(account.clone(), config);
        engine.run().await.unwrap();
    }

    let card = account.snapshot().await;
    assert_eq!(card.points, 30);
    assert_eq!(card.redemptions, 3);
}
