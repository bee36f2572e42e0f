//! Account handlers
//!
//! Endpoints under `/api/Accounts`.

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::app::AccountDto;
use crate::domain::entities::AccountId;
use crate::error::AppError;
use crate::handlers::extract::JsonBody;
use crate::AppState;

/// GET /api/Accounts/Get
pub async fn get_accounts(
    State(state): State<AppState>,
) -> Result<Json<Vec<AccountDto>>, AppError> {
    Ok(Json(state.account_service.get_accounts().await?))
}

/// GET /api/Accounts/Get/:id
///
/// 204 No Content when the account does not exist.
pub async fn get_account(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, AppError> {
    match state.account_service.get_account(&AccountId(id)).await? {
        Some(account) => Ok(Json(account).into_response()),
        None => Ok(StatusCode::NO_CONTENT.into_response()),
    }
}

/// POST /api/Accounts/NewAccount
pub async fn new_account(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<AccountDto>,
) -> Result<impl IntoResponse, AppError> {
    let account = state.account_service.save_account(request).await?;
    let location = format!("/api/Accounts/Get/{}", account.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(account),
    ))
}

/// PUT /api/Accounts/UpdateAccount/:id
///
/// An unknown id is a 400, not a 404.
pub async fn update_account(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    JsonBody(request): JsonBody<AccountDto>,
) -> Result<Json<AccountDto>, AppError> {
    let account = state
        .account_service
        .put_account(&AccountId(id), request)
        .await
        .map_err(AppError::not_found_as_bad_request)?;

    Ok(Json(account))
}

/// DELETE /api/Accounts/RemoveAccount/:id
///
/// Always 200; the body says whether anything was removed.
pub async fn remove_account(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<bool>, AppError> {
    Ok(Json(
        state.account_service.delete_account(&AccountId(id)).await?,
    ))
}
