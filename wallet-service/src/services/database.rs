//! Database service for wallet-service.
//!
//! This is the storage capability the ledger delegates to: parameterized
//! reads and updates against PostgreSQL, surfacing affected-row counts and
//! leaving the interpretation of those counts to the caller.

use crate::models::{NewUser, User, Wallet, WalletStatus};
use crate::services::ServiceError;
use crate::services::metrics::DB_QUERY_DURATION;
use rust_decimal::Decimal;
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;
use tracing::{info, instrument};
use uuid::Uuid;

/// Database connection pool wrapper.
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Create a new database connection pool.
    #[instrument(skip(database_url), fields(service = "wallet-service"))]
    pub async fn new(
        database_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self, ServiceError> {
        info!(
            max_connections = max_connections,
            min_connections = min_connections,
            "Connecting to PostgreSQL"
        );

        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .min_connections(min_connections)
            .acquire_timeout(Duration::from_secs(30))
            .idle_timeout(Duration::from_secs(600))
            .connect(database_url)
            .await?;

        info!("PostgreSQL connection pool established");

        Ok(Self { pool })
    }

    /// Get a reference to the connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Check database health.
    #[instrument(skip(self))]
    pub async fn health_check(&self) -> Result<(), ServiceError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// Run database migrations.
    #[instrument(skip(self))]
    pub async fn run_migrations(&self) -> Result<(), ServiceError> {
        info!("Running database migrations");
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| ServiceError::Internal(anyhow::anyhow!("Migration failed: {}", e)))?;
        info!("Database migrations completed");
        Ok(())
    }

    // -------------------------------------------------------------------------
    // User operations
    // -------------------------------------------------------------------------

    /// Insert a user and their wallet in a single transaction.
    ///
    /// The wallet starts active with a zero balance. A duplicate email maps
    /// to `EmailAlreadyRegistered`.
    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn insert_user_with_wallet(&self, input: &NewUser) -> Result<User, ServiceError> {
        let timer = DB_QUERY_DURATION
            .with_label_values(&["insert_user_with_wallet"])
            .start_timer();

        let mut tx = self.pool.begin().await?;

        let user_id = Uuid::new_v4();
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (user_id, name, email, phone_number, password_hash)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING user_id, name, email, phone_number, password_hash, created_utc
            "#,
        )
        .bind(user_id)
        .bind(&input.name)
        .bind(&input.email)
        .bind(&input.phone_number)
        .bind(&input.password_hash)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                ServiceError::EmailAlreadyRegistered
            }
            _ => ServiceError::Database(e),
        })?;

        sqlx::query(
            r#"
            INSERT INTO wallets (wallet_id, user_id, balance, status)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user.user_id)
        .bind(Decimal::ZERO)
        .bind(WalletStatus::Active.as_str())
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        timer.observe_duration();

        info!(user_id = %user.user_id, "User and wallet created");

        Ok(user)
    }

    /// Look up a user by email for login.
    #[instrument(skip(self, email))]
    pub async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, ServiceError> {
        let timer = DB_QUERY_DURATION
            .with_label_values(&["find_user_by_email"])
            .start_timer();

        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT user_id, name, email, phone_number, password_hash, created_utc
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        timer.observe_duration();

        Ok(user)
    }

    // -------------------------------------------------------------------------
    // Wallet operations
    // -------------------------------------------------------------------------

    /// Fetch the wallet owned by a user.
    #[instrument(skip(self), fields(user_id = %user_id))]
    pub async fn fetch_wallet(&self, user_id: Uuid) -> Result<Option<Wallet>, ServiceError> {
        let timer = DB_QUERY_DURATION
            .with_label_values(&["fetch_wallet"])
            .start_timer();

        let wallet = sqlx::query_as::<_, Wallet>(
            r#"
            SELECT wallet_id, user_id, balance, status, creation_date, last_updated
            FROM wallets
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        timer.observe_duration();

        Ok(wallet)
    }

    /// Unconditionally add to a wallet balance. Returns the affected-row
    /// count; zero means no wallet row matched.
    #[instrument(skip(self), fields(user_id = %user_id))]
    pub async fn credit_balance(
        &self,
        user_id: Uuid,
        amount: Decimal,
    ) -> Result<u64, ServiceError> {
        let timer = DB_QUERY_DURATION
            .with_label_values(&["credit_balance"])
            .start_timer();

        let result = sqlx::query(
            r#"
            UPDATE wallets
            SET balance = balance + $2, last_updated = now()
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .bind(amount)
        .execute(&self.pool)
        .await?;

        timer.observe_duration();

        Ok(result.rows_affected())
    }

    /// Subtract from a wallet balance, guarded so the row is only touched
    /// when it can cover the amount. The check and the decrement are one
    /// statement, so concurrent debits serialize on the row lock and a zero
    /// row count is the only way a shortfall manifests.
    #[instrument(skip(self), fields(user_id = %user_id))]
    pub async fn debit_balance(&self, user_id: Uuid, amount: Decimal) -> Result<u64, ServiceError> {
        let timer = DB_QUERY_DURATION
            .with_label_values(&["debit_balance"])
            .start_timer();

        let result = sqlx::query(
            r#"
            UPDATE wallets
            SET balance = balance - $2, last_updated = now()
            WHERE user_id = $1 AND balance >= $2
            "#,
        )
        .bind(user_id)
        .bind(amount)
        .execute(&self.pool)
        .await?;

        timer.observe_duration();

        Ok(result.rows_affected())
    }
}
