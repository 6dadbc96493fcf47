//! Reservation HTTP handlers

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::{NaiveDate, NaiveTime};

use crate::api::dto::{ApiResponse, CreateReservationRequest, ReservationDto};
use crate::api::validated_json::ValidatedJson;
use crate::application::SharedReservationService;
use crate::domain::error::DomainError;

/// Application state for reservation handlers.
#[derive(Clone)]
pub struct ReservationAppState {
    pub reservation_service: SharedReservationService,
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| format!("Invalid date '{}': {}", s, e))
}

/// Accepts `HH:MM:SS` or the shorter `HH:MM` UI form.
fn parse_time(field: &str, s: &str) -> Result<NaiveTime, String> {
    NaiveTime::parse_from_str(s, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M"))
        .map_err(|e| format!("Invalid {} '{}': {}", field, s, e))
}

#[utoipa::path(
    get,
    path = "/api/v1/reservations",
    tag = "Reservations",
    responses(
        (status = 200, description = "Upcoming reservations, soonest first", body = ApiResponse<Vec<ReservationDto>>)
    )
)]
pub async fn list_reservations(
    State(state): State<ReservationAppState>,
) -> Result<
    Json<ApiResponse<Vec<ReservationDto>>>,
    (StatusCode, Json<ApiResponse<Vec<ReservationDto>>>),
> {
    let reservations = state.reservation_service.upcoming().await.map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(e.to_string())),
        )
    })?;

    let dtos: Vec<ReservationDto> = reservations.into_iter().map(ReservationDto::from).collect();

    Ok(Json(ApiResponse::success(dtos)))
}

#[utoipa::path(
    post,
    path = "/api/v1/reservations",
    tag = "Reservations",
    request_body = CreateReservationRequest,
    responses(
        (status = 201, description = "Reservation created", body = ApiResponse<ReservationDto>),
        (status = 400, description = "Malformed date/time or inverted interval"),
        (status = 404, description = "Unknown user"),
        (status = 409, description = "Slot overlaps an existing reservation"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn create_reservation(
    State(state): State<ReservationAppState>,
    ValidatedJson(request): ValidatedJson<CreateReservationRequest>,
) -> Result<
    (StatusCode, Json<ApiResponse<ReservationDto>>),
    (StatusCode, Json<ApiResponse<ReservationDto>>),
> {
    let bad_request =
        |msg: String| (StatusCode::BAD_REQUEST, Json(ApiResponse::error(msg)));

    let date = parse_date(&request.date).map_err(bad_request)?;
    let start = parse_time("start_time", &request.start_time).map_err(bad_request)?;
    let end = parse_time("end_time", &request.end_time).map_err(bad_request)?;

    match state
        .reservation_service
        .create(request.user_id, date, start, end)
        .await
    {
        Ok(reservation) => Ok((
            StatusCode::CREATED,
            Json(ApiResponse::success(ReservationDto::from(reservation))),
        )),
        Err(e) => {
            let status = match &e {
                DomainError::InvalidInterval { .. } => StatusCode::BAD_REQUEST,
                DomainError::OverlapConflict { .. } => StatusCode::CONFLICT,
                DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
                DomainError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            };
            Err((status, Json(ApiResponse::error(e.to_string()))))
        }
    }
}

#[utoipa::path(
    delete,
    path = "/api/v1/reservations/{id}",
    tag = "Reservations",
    params(("id" = i32, Path, description = "Reservation ID")),
    responses(
        (status = 200, description = "Deleted reservation", body = ApiResponse<ReservationDto>),
        (status = 404, description = "No reservation with that id")
    )
)]
pub async fn delete_reservation(
    State(state): State<ReservationAppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<ReservationDto>>, (StatusCode, Json<ApiResponse<ReservationDto>>)> {
    match state.reservation_service.delete(id).await {
        Ok(deleted) => Ok(Json(ApiResponse::success(ReservationDto::from(deleted)))),
        Err(e) => {
            let status = match &e {
                DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            };
            Err((status, Json(ApiResponse::error(e.to_string()))))
        }
    }
}
