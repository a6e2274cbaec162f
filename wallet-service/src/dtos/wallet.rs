use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::Wallet;

/// Wallet state returned to the owner.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct WalletResponse {
    pub wallet_id: Uuid,
    #[schema(value_type = String, example = "125.50")]
    pub balance: Decimal,
    #[schema(example = "active")]
    pub status: String,
    pub creation_date: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

impl From<Wallet> for WalletResponse {
    fn from(wallet: Wallet) -> Self {
        Self {
            wallet_id: wallet.wallet_id,
            balance: wallet.balance,
            status: wallet.status,
            creation_date: wallet.creation_date,
            last_updated: wallet.last_updated,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreditRequest {
    #[schema(value_type = String, example = "100.00")]
    pub amount: Decimal,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct DebitRequest {
    #[schema(value_type = String, example = "25.00")]
    pub amount: Decimal,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Wallet credited successfully")]
    pub message: String,
}
