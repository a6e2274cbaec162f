//! Common test utilities for wallet-service integration tests.
//!
//! The tests need a PostgreSQL instance: set `TEST_DATABASE_URL` to run them.
//! When the variable is unset, `spawn_app` returns `None` and each test
//! passes vacuously after printing a notice.

use rust_decimal::Decimal;
use serde_json::{Value, json};
use service_core::config::Config as CommonConfig;
use std::str::FromStr;
use std::sync::Once;
use uuid::Uuid;
use wallet_service::config::{DatabaseConfig, JwtConfig, SecurityConfig, WalletConfig};
use wallet_service::startup::Application;

static INIT: Once = Once::new();

/// Initialize tracing for tests (only once).
pub fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter("info,wallet_service=debug,sqlx=warn")
            .with_test_writer()
            .try_init()
            .ok();
    });
}

#[derive(Clone)]
pub struct TestApp {
    pub base_url: String,
    pub client: reqwest::Client,
}

pub struct TestUser {
    pub email: String,
    pub token: String,
}

/// Spawn the application on an ephemeral port against `TEST_DATABASE_URL`.
pub async fn spawn_app() -> Option<TestApp> {
    init_tracing();

    let database_url = match std::env::var("TEST_DATABASE_URL") {
        Ok(url) => url,
        Err(_) => {
            eprintln!("TEST_DATABASE_URL not set; skipping integration test");
            return None;
        }
    };

    let config = WalletConfig {
        common: CommonConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        service_name: "wallet-service-test".to_string(),
        service_version: "test".to_string(),
        log_level: "debug".to_string(),
        otlp_endpoint: None,
        database: DatabaseConfig {
            url: database_url,
            max_connections: 5,
            min_connections: 1,
        },
        jwt: JwtConfig {
            secret: "integration-test-secret-do-not-use".to_string(),
            access_token_expiry_minutes: 15,
        },
        security: SecurityConfig {
            allowed_origins: vec!["http://localhost:3000".to_string()],
        },
    };

    let app = Application::build(config)
        .await
        .expect("Failed to build application");
    let port = app.port();

    // Start the application in the background
    tokio::spawn(async move {
        app.run_until_stopped().await.ok();
    });

    Some(TestApp {
        base_url: format!("http://127.0.0.1:{}", port),
        client: reqwest::Client::new(),
    })
}

impl TestApp {
    pub async fn register(&self, name: &str, email: &str, password: &str) -> reqwest::Response {
        self.client
            .post(format!("{}/register", self.base_url))
            .json(&json!({
                "name": name,
                "email": email,
                "phone_number": "+14155550123",
                "password": password,
            }))
            .send()
            .await
            .expect("Failed to send register request")
    }

    pub async fn login(&self, email: &str, password: &str) -> reqwest::Response {
        self.client
            .post(format!("{}/login", self.base_url))
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await
            .expect("Failed to send login request")
    }

    /// Register a fresh user and log them in.
    pub async fn register_and_login(&self) -> TestUser {
        let email = format!("user-{}@example.com", Uuid::new_v4());
        let password = "integration-password";

        let response = self.register("Test User", &email, password).await;
        assert_eq!(response.status().as_u16(), 201, "registration failed");

        let response = self.login(&email, password).await;
        assert_eq!(response.status().as_u16(), 200, "login failed");

        let body: Value = response.json().await.expect("Invalid login response");
        let token = body["access_token"]
            .as_str()
            .expect("Missing access_token")
            .to_string();

        TestUser { email, token }
    }

    pub async fn get_wallet(&self, token: &str) -> reqwest::Response {
        self.client
            .get(format!("{}/wallet", self.base_url))
            .bearer_auth(token)
            .send()
            .await
            .expect("Failed to send wallet request")
    }

    pub async fn credit(&self, token: &str, amount: &str) -> reqwest::Response {
        self.client
            .post(format!("{}/wallet/credit", self.base_url))
            .bearer_auth(token)
            .json(&json!({ "amount": amount }))
            .send()
            .await
            .expect("Failed to send credit request")
    }

    pub async fn debit(&self, token: &str, amount: &str) -> reqwest::Response {
        self.client
            .post(format!("{}/wallet/debit", self.base_url))
            .bearer_auth(token)
            .json(&json!({ "amount": amount }))
            .send()
            .await
            .expect("Failed to send debit request")
    }

    /// Current balance, parsed from the wallet response.
    pub async fn balance(&self, token: &str) -> Decimal {
        let response = self.get_wallet(token).await;
        assert_eq!(response.status().as_u16(), 200, "wallet fetch failed");

        let body: Value = response.json().await.expect("Invalid wallet response");
        let balance = body["balance"].as_str().expect("Missing balance");
        Decimal::from_str(balance).expect("Balance is not a decimal")
    }
}

/// Decimal literal helper for assertions.
pub fn dec(value: &str) -> Decimal {
    Decimal::from_str(value).expect("Invalid decimal literal")
}
