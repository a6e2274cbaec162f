//! Service layer: storage capability, ledger rules, orchestration, auth.

pub mod auth;
pub mod database;
pub mod error;
pub mod jwt;
pub mod ledger;
pub mod metrics;
pub mod wallet;

pub use auth::AuthService;
pub use database::Database;
pub use error::ServiceError;
pub use jwt::{AccessTokenClaims, JwtService, TokenResponse};
pub use ledger::WalletLedger;
pub use metrics::{get_metrics, init_metrics};
pub use wallet::WalletService;
