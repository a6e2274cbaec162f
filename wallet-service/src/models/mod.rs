//! Domain models for wallet-service.

mod user;
mod wallet;

pub use user::{NewUser, User};
pub use wallet::{Wallet, WalletStatus};
