//! Wallet operations exposed to the HTTP layer.

use crate::dtos::wallet::WalletResponse;
use crate::services::metrics::{ERRORS_TOTAL, WALLET_OPERATIONS_TOTAL};
use crate::services::{ServiceError, WalletLedger};
use rust_decimal::Decimal;
use tracing::instrument;
use uuid::Uuid;

/// Orchestrates ledger operations and accounts for their outcomes.
#[derive(Clone)]
pub struct WalletService {
    ledger: WalletLedger,
}

impl WalletService {
    pub fn new(ledger: WalletLedger) -> Self {
        Self { ledger }
    }

    #[instrument(skip(self), fields(user_id = %user_id))]
    pub async fn get_wallet(&self, user_id: Uuid) -> Result<WalletResponse, ServiceError> {
        let wallet = self
            .ledger
            .get(user_id)
            .await
            .map_err(|e| Self::observe("get", e))?;

        WALLET_OPERATIONS_TOTAL
            .with_label_values(&["get", "ok"])
            .inc();
        Ok(WalletResponse::from(wallet))
    }

    #[instrument(skip(self), fields(user_id = %user_id, amount = %amount))]
    pub async fn credit(&self, user_id: Uuid, amount: Decimal) -> Result<(), ServiceError> {
        self.ledger
            .credit(user_id, amount)
            .await
            .map_err(|e| Self::observe("credit", e))?;

        WALLET_OPERATIONS_TOTAL
            .with_label_values(&["credit", "ok"])
            .inc();
        Ok(())
    }

    #[instrument(skip(self), fields(user_id = %user_id, amount = %amount))]
    pub async fn debit(&self, user_id: Uuid, amount: Decimal) -> Result<(), ServiceError> {
        self.ledger
            .debit(user_id, amount)
            .await
            .map_err(|e| Self::observe("debit", e))?;

        WALLET_OPERATIONS_TOTAL
            .with_label_values(&["debit", "ok"])
            .inc();
        Ok(())
    }

    fn observe(operation: &str, err: ServiceError) -> ServiceError {
        WALLET_OPERATIONS_TOTAL
            .with_label_values(&[operation, "error"])
            .inc();
        ERRORS_TOTAL.with_label_values(&[err.kind()]).inc();
        err
    }
}
