//! Integration tests for promo-cache stores
//!
//! These tests require a running Redis instance.
//! Set REDIS_URL environment variable before running:
//!
//! ```bash
//! export REDIS_URL="redis://localhost:6379"
//! cargo test -p promo-cache --test integration_tests
//! ```

use promo_cache::{
    RedisPool, RedisPoolConfig, StoreOutcome, VerificationChannel, VerificationCodeStore,
    VerifyOutcome,
};

/// Helper to create a test Redis pool
async fn get_test_pool() -> Option<RedisPool> {
    let url = std::env::var("REDIS_URL").ok()?;
    let pool = RedisPool::new(RedisPoolConfig {
        url,
        ..Default::default()
    })
    .ok()?;
    pool.health_check().await.ok()?;
    Some(pool)
}

/// A fresh target per test so runs do not collide
fn unique_target(prefix: &str) -> String {
    use std::sync::atomic::{AtomicU64, Ordering};
    static COUNTER: AtomicU64 = AtomicU64::new(0);
    let n = COUNTER.fetch_add(1, Ordering::SeqCst);
    format!("{prefix}_{}_{n}", std::process::id())
}

fn test_store(pool: RedisPool) -> VerificationCodeStore {
    // Short TTLs; targets are unique per test so the throttle never bites
    VerificationCodeStore::with_policy(pool, 60, 5, 1)
}

#[tokio::test]
async fn test_code_verifies_exactly_once() {
    let Some(pool) = get_test_pool().await else {
        eprintln!("Skipping test: REDIS_URL not set");
        return;
    };

    let store = test_store(pool);
    let target = unique_target("13800000");

    let stored = store
        .store_code(VerificationChannel::Sms, &target, "123456")
        .await
        .unwrap();
    assert_eq!(stored, StoreOutcome::Stored);

    let first = store
        .verify_code(VerificationChannel::Sms, &target, "123456")
        .await
        .unwrap();
    assert_eq!(first, VerifyOutcome::Verified);

    // Consumed on success; a replay finds nothing
    let replay = store
        .verify_code(VerificationChannel::Sms, &target, "123456")
        .await
        .unwrap();
    assert_eq!(replay, VerifyOutcome::Expired);
}

#[tokio::test]
async fn test_whitespace_variant_does_not_verify() {
    let Some(pool) = get_test_pool().await else {
        eprintln!("Skipping test: REDIS_URL not set");
        return;
    };

    let store = test_store(pool);
    let target = unique_target("user");
    let target = format!("{target}@example.com");

    store
        .store_code(VerificationChannel::Email, &target, "123456")
        .await
        .unwrap();

    // The comparison is exact, so padded submissions burn an attempt
    for padded in [" 123456", "123456 ", "12 3456"] {
        let outcome = store
            .verify_code(VerificationChannel::Email, &target, padded)
            .await
            .unwrap();
        assert!(
            matches!(outcome, VerifyOutcome::Mismatch { .. }),
            "{padded:?} must not verify, got {outcome:?}"
        );
    }

    // The exact code still works after the mismatches
    let exact = store
        .verify_code(VerificationChannel::Email, &target, "123456")
        .await
        .unwrap();
    assert_eq!(exact, VerifyOutcome::Verified);
}

#[tokio::test]
async fn test_attempt_budget_invalidates_the_code() {
    let Some(pool) = get_test_pool().await else {
        eprintln!("Skipping test: REDIS_URL not set");
        return;
    };

    let store = VerificationCodeStore::with_policy(pool, 60, 3, 1);
    let target = unique_target("13900000");

    store
        .store_code(VerificationChannel::Sms, &target, "654321")
        .await
        .unwrap();

    for _ in 0..2 {
        let outcome = store
            .verify_code(VerificationChannel::Sms, &target, "000000")
            .await
            .unwrap();
        assert!(matches!(outcome, VerifyOutcome::Mismatch { .. }));
    }

    let exhausted = store
        .verify_code(VerificationChannel::Sms, &target, "000000")
        .await
        .unwrap();
    assert_eq!(exhausted, VerifyOutcome::TooManyAttempts);

    // Even the right code is dead now
    let late = store
        .verify_code(VerificationChannel::Sms, &target, "654321")
        .await
        .unwrap();
    assert_eq!(late, VerifyOutcome::Expired);
}
