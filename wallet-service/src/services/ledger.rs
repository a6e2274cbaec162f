//! Wallet ledger: the balance mutation rules.
//!
//! Every balance change in the system funnels through this component. It
//! enforces three rules: amounts must be strictly positive, a debit may never
//! drive the balance below zero, and every mutation must touch exactly one
//! wallet row.

use crate::models::Wallet;
use crate::services::{Database, ServiceError};
use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::{info, instrument, warn};
use uuid::Uuid;

#[derive(Clone)]
pub struct WalletLedger {
    db: Arc<Database>,
}

impl WalletLedger {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Current wallet state for a user.
    #[instrument(skip(self), fields(user_id = %user_id))]
    pub async fn get(&self, user_id: Uuid) -> Result<Wallet, ServiceError> {
        self.db
            .fetch_wallet(user_id)
            .await?
            .ok_or(ServiceError::WalletNotFound)
    }

    /// Unconditionally increase the balance.
    #[instrument(skip(self), fields(user_id = %user_id, amount = %amount))]
    pub async fn credit(&self, user_id: Uuid, amount: Decimal) -> Result<(), ServiceError> {
        if amount <= Decimal::ZERO {
            return Err(ServiceError::InvalidAmount);
        }

        let affected = self.db.credit_balance(user_id, amount).await?;
        if affected == 0 {
            warn!(user_id = %user_id, "Credit affected no rows");
            return Err(ServiceError::UpdateFailed);
        }

        info!(user_id = %user_id, amount = %amount, "Wallet credited");
        Ok(())
    }

    /// Decrease the balance, refusing to go below zero.
    ///
    /// The balance check and the decrement are a single conditional UPDATE in
    /// the store, so concurrent debits against the same wallet serialize on
    /// the row instead of racing a read-then-write window.
    #[instrument(skip(self), fields(user_id = %user_id, amount = %amount))]
    pub async fn debit(&self, user_id: Uuid, amount: Decimal) -> Result<(), ServiceError> {
        if amount <= Decimal::ZERO {
            return Err(ServiceError::InvalidAmount);
        }

        let affected = self.db.debit_balance(user_id, amount).await?;
        if affected == 1 {
            info!(user_id = %user_id, amount = %amount, "Wallet debited");
            return Ok(());
        }

        // Zero rows: either there is no wallet, or the balance guard rejected
        // the decrement. One read tells them apart.
        match self.db.fetch_wallet(user_id).await? {
            None => Err(ServiceError::WalletNotFound),
            Some(wallet) if wallet.balance < amount => {
                warn!(
                    user_id = %user_id,
                    balance = %wallet.balance,
                    amount = %amount,
                    "Debit rejected: insufficient balance"
                );
                Err(ServiceError::InsufficientBalance)
            }
            Some(_) => Err(ServiceError::UpdateFailed),
        }
    }
}
