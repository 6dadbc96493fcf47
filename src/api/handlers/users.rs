//! User listing handlers
//!
//! The roster is seeded at startup; the API only reads it.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::api::dto::{ApiResponse, UserDto};
use crate::domain::repositories::RepositoryProvider;

/// Application state for user handlers.
#[derive(Clone)]
pub struct UserAppState {
    pub repos: Arc<dyn RepositoryProvider>,
}

#[utoipa::path(
    get,
    path = "/api/v1/users",
    tag = "Users",
    responses(
        (status = 200, description = "All members, in roster order", body = ApiResponse<Vec<UserDto>>)
    )
)]
pub async fn list_users(
    State(state): State<UserAppState>,
) -> Result<Json<ApiResponse<Vec<UserDto>>>, (StatusCode, Json<ApiResponse<Vec<UserDto>>>)> {
    let users = state.repos.users().find_all().await.map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(e.to_string())),
        )
    })?;

    let dtos: Vec<UserDto> = users.into_iter().map(UserDto::from).collect();

    Ok(Json(ApiResponse::success(dtos)))
}
