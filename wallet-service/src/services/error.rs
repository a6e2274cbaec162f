use service_core::error::AppError;
use thiserror::Error;

/// Domain error kinds for wallet-service operations.
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Email already registered")]
    EmailAlreadyRegistered,

    #[error("User not found")]
    UserNotFound,

    #[error("No wallet found for user")]
    WalletNotFound,

    #[error("Amount must be greater than zero")]
    InvalidAmount,

    #[error("Insufficient balance")]
    InsufficientBalance,

    #[error("Wallet update affected no rows")]
    UpdateFailed,

    #[error("Failed to generate token")]
    TokenGeneration,
}

impl ServiceError {
    /// Low-cardinality label for the error counter.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Database(_) => "database",
            Self::Internal(_) => "internal",
            Self::InvalidCredentials => "invalid_credentials",
            Self::EmailAlreadyRegistered => "email_conflict",
            Self::UserNotFound => "user_not_found",
            Self::WalletNotFound => "wallet_not_found",
            Self::InvalidAmount => "invalid_amount",
            Self::InsufficientBalance => "insufficient_balance",
            Self::UpdateFailed => "update_failed",
            Self::TokenGeneration => "token_generation",
        }
    }
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Database(e) => AppError::DatabaseError(anyhow::Error::new(e)),
            ServiceError::Internal(e) => AppError::InternalError(e),
            ServiceError::InvalidCredentials => {
                AppError::AuthError(anyhow::anyhow!("Invalid email or password"))
            }
            ServiceError::EmailAlreadyRegistered => {
                AppError::Conflict(anyhow::anyhow!("Email already registered"))
            }
            ServiceError::UserNotFound => AppError::NotFound(anyhow::anyhow!("User not found")),
            ServiceError::WalletNotFound => {
                AppError::NotFound(anyhow::anyhow!("No wallet found for user"))
            }
            ServiceError::InvalidAmount => {
                AppError::BadRequest(anyhow::anyhow!("Amount must be greater than zero"))
            }
            ServiceError::InsufficientBalance => {
                AppError::BadRequest(anyhow::anyhow!("Insufficient balance"))
            }
            ServiceError::UpdateFailed => {
                AppError::Conflict(anyhow::anyhow!("Wallet update failed, please retry"))
            }
            ServiceError::TokenGeneration => {
                AppError::InternalError(anyhow::anyhow!("Failed to generate token"))
            }
        }
    }
}
