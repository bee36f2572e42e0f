//! Client handlers
//!
//! Endpoints under `/api/Clients`.

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::app::ClientDto;
use crate::domain::entities::ClientId;
use crate::error::AppError;
use crate::handlers::extract::JsonBody;
use crate::AppState;

/// GET /api/Clients/Get
pub async fn get_clients(State(state): State<AppState>) -> Result<Json<Vec<ClientDto>>, AppError> {
    Ok(Json(state.client_service.get_clients().await?))
}

/// GET /api/Clients/Get/:id
pub async fn get_client(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, AppError> {
    match state.client_service.get_client(&ClientId(id)).await? {
        Some(client) => Ok(Json(client).into_response()),
        None => Ok(StatusCode::NO_CONTENT.into_response()),
    }
}

/// POST /api/Clients/NewClient
pub async fn new_client(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<ClientDto>,
) -> Result<impl IntoResponse, AppError> {
    let client = state.client_service.save_client(request).await?;
    let location = format!("/api/Clients/Get/{}", client.id);

    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(client)))
}

/// PUT /api/Clients/UpdateClient/:id
pub async fn update_client(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    JsonBody(request): JsonBody<ClientDto>,
) -> Result<Json<ClientDto>, AppError> {
    let client = state
        .client_service
        .put_client(&ClientId(id), request)
        .await
        .map_err(AppError::not_found_as_bad_request)?;

    Ok(Json(client))
}

/// DELETE /api/Clients/RemoveClient/:id
pub async fn remove_client(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<bool>, AppError> {
    Ok(Json(state.client_service.delete_client(&ClientId(id)).await?))
}
