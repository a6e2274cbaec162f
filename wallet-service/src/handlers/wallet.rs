use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use service_core::error::AppError;

use crate::dtos::wallet::{CreditRequest, DebitRequest, MessageResponse};
use crate::middleware::AuthUser;
use crate::startup::AppState;

/// Wallet state for the authenticated user
#[utoipa::path(
    get,
    path = "/wallet",
    responses(
        (status = 200, description = "Wallet returned", body = WalletResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "No wallet found for user", body = ErrorResponse)
    ),
    tag = "Wallet",
    security(("bearer_auth" = []))
)]
pub async fn get_wallet(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let user_id = user.0.user_id()?;
    let res = state.wallet.get_wallet(user_id).await?;
    Ok((StatusCode::OK, Json(res)))
}

/// Credit the authenticated user's wallet
#[utoipa::path(
    post,
    path = "/wallet/credit",
    request_body = CreditRequest,
    responses(
        (status = 200, description = "Wallet credited", body = MessageResponse),
        (status = 400, description = "Amount must be greater than zero", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 409, description = "Wallet update failed", body = ErrorResponse)
    ),
    tag = "Wallet",
    security(("bearer_auth" = []))
)]
pub async fn credit_wallet(
    State(state): State<AppState>,
    user: AuthUser,
    Json(req): Json<CreditRequest>,
) -> Result<impl IntoResponse, AppError> {
    let user_id = user.0.user_id()?;
    state.wallet.credit(user_id, req.amount).await?;
    Ok((
        StatusCode::OK,
        Json(MessageResponse {
            message: "Wallet credited successfully".to_string(),
        }),
    ))
}

/// Debit the authenticated user's wallet
#[utoipa::path(
    post,
    path = "/wallet/debit",
    request_body = DebitRequest,
    responses(
        (status = 200, description = "Wallet debited", body = MessageResponse),
        (status = 400, description = "Invalid amount or insufficient balance", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "No wallet found for user", body = ErrorResponse)
    ),
    tag = "Wallet",
    security(("bearer_auth" = []))
)]
pub async fn debit_wallet(
    State(state): State<AppState>,
    user: AuthUser,
    Json(req): Json<DebitRequest>,
) -> Result<impl IntoResponse, AppError> {
    let user_id = user.0.user_id()?;
    state.wallet.debit(user_id, req.amount).await?;
    Ok((
        StatusCode::OK,
        Json(MessageResponse {
            message: "Wallet debited successfully".to_string(),
        }),
    ))
}
