//! Wallet ledger integration tests.
//!
//! Run with: TEST_DATABASE_URL=postgres://... cargo test

mod common;

use common::{dec, spawn_app};

#[tokio::test]
async fn credit_increases_balance_by_exactly_the_amount() {
    let Some(app) = spawn_app().await else { return };
    let user = app.register_and_login().await;

    let response = app.credit(&user.token, "125.50").await;
    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(app.balance(&user.token).await, dec("125.50"));

    let response = app.credit(&user.token, "0.50").await;
    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(app.balance(&user.token).await, dec("126.00"));
}

#[tokio::test]
async fn debit_decreases_balance() {
    let Some(app) = spawn_app().await else { return };
    let user = app.register_and_login().await;

    assert_eq!(app.credit(&user.token, "100").await.status().as_u16(), 200);

    let response = app.debit(&user.token, "40").await;
    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(app.balance(&user.token).await, dec("60"));
}

#[tokio::test]
async fn debit_beyond_balance_is_rejected_and_balance_unchanged() {
    let Some(app) = spawn_app().await else { return };
    let user = app.register_and_login().await;

    assert_eq!(app.credit(&user.token, "50").await.status().as_u16(), 200);

    let response = app.debit(&user.token, "80").await;
    assert_eq!(response.status().as_u16(), 400);
    let body: serde_json::Value = response.json().await.expect("Invalid error response");
    assert_eq!(body["error"], "Insufficient balance");

    assert_eq!(app.balance(&user.token).await, dec("50"));
}

#[tokio::test]
async fn zero_and_negative_amounts_are_rejected() {
    let Some(app) = spawn_app().await else { return };
    let user = app.register_and_login().await;

    assert_eq!(app.credit(&user.token, "0").await.status().as_u16(), 400);
    assert_eq!(app.credit(&user.token, "-5").await.status().as_u16(), 400);
    assert_eq!(app.debit(&user.token, "0").await.status().as_u16(), 400);
    assert_eq!(app.debit(&user.token, "-5").await.status().as_u16(), 400);

    assert_eq!(app.balance(&user.token).await, dec("0"));
}

#[tokio::test]
async fn debit_of_the_entire_balance_empties_the_wallet() {
    let Some(app) = spawn_app().await else { return };
    let user = app.register_and_login().await;

    assert_eq!(app.credit(&user.token, "75.25").await.status().as_u16(), 200);
    assert_eq!(app.debit(&user.token, "75.25").await.status().as_u16(), 200);
    assert_eq!(app.balance(&user.token).await, dec("0"));
}

/// Five debits of 30 race against a balance of 100: exactly three can fit,
/// and the balance must never go negative.
#[tokio::test]
async fn concurrent_debits_never_drive_the_balance_negative() {
    let Some(app) = spawn_app().await else { return };
    let user = app.register_and_login().await;

    assert_eq!(app.credit(&user.token, "100").await.status().as_u16(), 200);

    let mut handles = Vec::new();
    for _ in 0..5 {
        let app = app.clone();
        let token = user.token.clone();
        handles.push(tokio::spawn(async move {
            app.debit(&token, "30").await.status().as_u16()
        }));
    }

    let mut succeeded = 0;
    for handle in handles {
        if handle.await.expect("Debit task panicked") == 200 {
            succeeded += 1;
        }
    }

    assert_eq!(succeeded, 3, "exactly three debits of 30 fit in 100");
    assert_eq!(app.balance(&user.token).await, dec("10"));
}

#[tokio::test]
async fn wallet_reports_last_updated_after_mutation() {
    let Some(app) = spawn_app().await else { return };
    let user = app.register_and_login().await;

    let before = app.get_wallet(&user.token).await;
    let before: serde_json::Value = before.json().await.expect("Invalid wallet response");

    assert_eq!(app.credit(&user.token, "10").await.status().as_u16(), 200);

    let after = app.get_wallet(&user.token).await;
    let after: serde_json::Value = after.json().await.expect("Invalid wallet response");

    assert_eq!(before["wallet_id"], after["wallet_id"]);

    let parse = |value: &serde_json::Value| {
        chrono::DateTime::parse_from_rfc3339(value.as_str().expect("Missing timestamp"))
            .expect("Invalid timestamp")
    };
    assert!(
        parse(&after["last_updated"]) >= parse(&before["last_updated"]),
        "last_updated must move forward on mutation"
    );
}
