//! Registration and login.

use crate::dtos::auth::{RegisterRequest, RegisterResponse};
use crate::models::NewUser;
use crate::services::metrics::USERS_REGISTERED_TOTAL;
use crate::services::{Database, JwtService, ServiceError, TokenResponse};
use crate::utils::{Password, PasswordHashString, hash_password, verify_password};
use std::sync::Arc;
use tracing::{info, instrument};

#[derive(Clone)]
pub struct AuthService {
    db: Arc<Database>,
    jwt: JwtService,
    // Verified against when the email is unknown, so login failures cost the
    // same whether the user exists or not.
    dummy_hash: PasswordHashString,
}

impl AuthService {
    pub fn new(db: Arc<Database>, jwt: JwtService) -> Self {
        let dummy_hash = hash_password(&Password::new("wallet-service-dummy".to_string()))
            .unwrap_or_else(|_| PasswordHashString::new(String::new()));
        Self {
            db,
            jwt,
            dummy_hash,
        }
    }

    /// Create the user and their wallet. Input is validated at the DTO layer.
    #[instrument(skip(self, req), fields(email = %req.email))]
    pub async fn register(&self, req: RegisterRequest) -> Result<RegisterResponse, ServiceError> {
        let password_hash = hash_password(&Password::new(req.password))?;

        let user = self
            .db
            .insert_user_with_wallet(&NewUser {
                name: req.name,
                email: req.email,
                phone_number: req.phone_number,
                password_hash: password_hash.into_string(),
            })
            .await?;

        USERS_REGISTERED_TOTAL.inc();
        info!(user_id = %user.user_id, "User registered");

        Ok(RegisterResponse {
            user_id: user.user_id.to_string(),
            message: "Registration successful".to_string(),
        })
    }

    /// Verify credentials and issue an access token.
    #[instrument(skip(self, password), fields(email = %email))]
    pub async fn login(&self, email: &str, password: String) -> Result<TokenResponse, ServiceError> {
        let password = Password::new(password);

        let Some(user) = self.db.find_user_by_email(email).await? else {
            let _ = verify_password(&password, &self.dummy_hash);
            return Err(ServiceError::InvalidCredentials);
        };

        verify_password(&password, &PasswordHashString::new(user.password_hash.clone()))
            .map_err(|_| ServiceError::InvalidCredentials)?;

        info!(user_id = %user.user_id, "User logged in");
        self.jwt.generate_access_token(user.user_id, &user.email)
    }
}
