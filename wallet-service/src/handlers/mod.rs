pub mod auth;
pub mod wallet;
