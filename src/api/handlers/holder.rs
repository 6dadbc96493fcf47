//! Current-holder HTTP handlers

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::api::dto::{ApiResponse, ClaimWorkstationRequest, CurrentHolderDto};
use crate::api::validated_json::ValidatedJson;
use crate::application::SharedCurrentHolderService;
use crate::domain::error::DomainError;

/// Application state for current-holder handlers.
#[derive(Clone)]
pub struct HolderAppState {
    pub holder_service: SharedCurrentHolderService,
}

#[utoipa::path(
    get,
    path = "/api/v1/current-holder",
    tag = "Current Holder",
    responses(
        (status = 200, description = "Current holder, or `data: null` when nobody has claimed yet", body = ApiResponse<CurrentHolderDto>)
    )
)]
pub async fn get_current_holder(
    State(state): State<HolderAppState>,
) -> Result<Json<ApiResponse<CurrentHolderDto>>, (StatusCode, Json<ApiResponse<CurrentHolderDto>>)>
{
    match state.holder_service.current().await {
        Ok(holder) => Ok(Json(ApiResponse::success_opt(
            holder.map(CurrentHolderDto::from),
        ))),
        Err(e) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(e.to_string())),
        )),
    }
}

#[utoipa::path(
    post,
    path = "/api/v1/current-holder",
    tag = "Current Holder",
    request_body = ClaimWorkstationRequest,
    responses(
        (status = 200, description = "Holder replaced", body = ApiResponse<CurrentHolderDto>),
        (status = 404, description = "Unknown user"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn claim_workstation(
    State(state): State<HolderAppState>,
    ValidatedJson(request): ValidatedJson<ClaimWorkstationRequest>,
) -> Result<Json<ApiResponse<CurrentHolderDto>>, (StatusCode, Json<ApiResponse<CurrentHolderDto>>)>
{
    match state.holder_service.claim(request.user_id).await {
        Ok(holder) => Ok(Json(ApiResponse::success(CurrentHolderDto::from(holder)))),
        Err(e) => {
            let status = match &e {
                DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            };
            Err((status, Json(ApiResponse::error(e.to_string()))))
        }
    }
}
