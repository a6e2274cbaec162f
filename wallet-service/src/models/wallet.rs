//! Wallet model.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Wallet lifecycle states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WalletStatus {
    Active,
    Inactive,
}

impl WalletStatus {
    /// Get string representation for database.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "active" => Some(Self::Active),
            "inactive" => Some(Self::Inactive),
            _ => None,
        }
    }
}

impl std::fmt::Display for WalletStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Per-user balance record. Balance is non-negative at all observable times;
/// mutations go through the ledger only.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Wallet {
    pub wallet_id: Uuid,
    pub user_id: Uuid,
    pub balance: Decimal,
    pub status: String,
    pub creation_date: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

impl Wallet {
    /// Get parsed wallet status.
    pub fn parsed_status(&self) -> Option<WalletStatus> {
        WalletStatus::parse(&self.status)
    }

    pub fn is_active(&self) -> bool {
        self.parsed_status() == Some(WalletStatus::Active)
    }
}
