//! Registration and login integration tests.
//!
//! Run with: TEST_DATABASE_URL=postgres://... cargo test

mod common;

use common::spawn_app;
use serde_json::Value;
use uuid::Uuid;

#[tokio::test]
async fn register_creates_user_and_zero_balance_wallet() {
    let Some(app) = spawn_app().await else { return };

    let email = format!("user-{}@example.com", Uuid::new_v4());
    let response = app.register("Jane Doe", &email, "password123").await;
    assert_eq!(response.status().as_u16(), 201);

    let body: Value = response.json().await.expect("Invalid register response");
    assert!(body["user_id"].as_str().is_some(), "Missing user_id");

    let login = app.login(&email, "password123").await;
    assert_eq!(login.status().as_u16(), 200);
    let body: Value = login.json().await.expect("Invalid login response");
    let token = body["access_token"].as_str().expect("Missing access_token");
    assert_eq!(body["token_type"], "Bearer");

    let wallet = app.get_wallet(token).await;
    assert_eq!(wallet.status().as_u16(), 200);
    let body: Value = wallet.json().await.expect("Invalid wallet response");
    assert_eq!(body["status"], "active");
    assert_eq!(common::dec(body["balance"].as_str().expect("Missing balance")), common::dec("0"));
}

#[tokio::test]
async fn duplicate_email_is_a_conflict() {
    let Some(app) = spawn_app().await else { return };

    let email = format!("user-{}@example.com", Uuid::new_v4());
    let first = app.register("Jane Doe", &email, "password123").await;
    assert_eq!(first.status().as_u16(), 201);

    let second = app.register("Jane Again", &email, "password456").await;
    assert_eq!(second.status().as_u16(), 409);
}

#[tokio::test]
async fn malformed_email_is_rejected() {
    let Some(app) = spawn_app().await else { return };

    let response = app.register("Jane Doe", "not-an-email", "password123").await;
    assert_eq!(response.status().as_u16(), 422);
}

#[tokio::test]
async fn short_password_is_rejected() {
    let Some(app) = spawn_app().await else { return };

    let email = format!("user-{}@example.com", Uuid::new_v4());
    let response = app.register("Jane Doe", &email, "short").await;
    assert_eq!(response.status().as_u16(), 422);
}

#[tokio::test]
async fn wrong_password_is_unauthorized() {
    let Some(app) = spawn_app().await else { return };

    let email = format!("user-{}@example.com", Uuid::new_v4());
    let response = app.register("Jane Doe", &email, "password123").await;
    assert_eq!(response.status().as_u16(), 201);

    let login = app.login(&email, "not-the-password").await;
    assert_eq!(login.status().as_u16(), 401);
}

#[tokio::test]
async fn unknown_email_is_unauthorized() {
    let Some(app) = spawn_app().await else { return };

    let email = format!("missing-{}@example.com", Uuid::new_v4());
    let login = app.login(&email, "password123").await;
    assert_eq!(login.status().as_u16(), 401);
}

#[tokio::test]
async fn wallet_routes_require_a_bearer_token() {
    let Some(app) = spawn_app().await else { return };

    let response = app
        .client
        .get(format!("{}/wallet", app.base_url))
        .send()
        .await
        .expect("Failed to send wallet request");
    assert_eq!(response.status().as_u16(), 401);

    let response = app.get_wallet("garbage-token").await;
    assert_eq!(response.status().as_u16(), 401);
}
