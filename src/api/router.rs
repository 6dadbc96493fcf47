//! API Router with Swagger UI

use std::sync::Arc;
use std::time::Instant;

use axum::{
    middleware,
    routing::{delete, get},
    Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::dto::{
    ApiResponse, ClaimWorkstationRequest, CreateReservationRequest, CurrentHolderDto,
    ReservationDto, UserDto,
};
use crate::api::handlers::{health, holder, metrics, reservations, users};
use crate::application::{SharedCurrentHolderService, SharedReservationService};
use crate::domain::repositories::RepositoryProvider;
use crate::notifications::{create_notification_state, ws_notifications_handler, SharedEventBus};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health::health_check,
        // Reservations
        reservations::list_reservations,
        reservations::create_reservation,
        reservations::delete_reservation,
        // Users
        users::list_users,
        // Current holder
        holder::get_current_holder,
        holder::claim_workstation,
    ),
    components(
        schemas(
            ApiResponse<String>,
            ReservationDto,
            CreateReservationRequest,
            UserDto,
            CurrentHolderDto,
            ClaimWorkstationRequest,
            health::HealthResponse,
        )
    ),
    tags(
        (name = "Health", description = "Service liveness check"),
        (name = "Reservations", description = "Workstation schedule: book a time slot, list upcoming slots, free a slot. Slots are half-open intervals within one calendar date; overlapping slots on the same date are rejected with 409."),
        (name = "Users", description = "The seeded member roster. Read-only."),
        (name = "Current Holder", description = "Who is physically at the workstation right now. Claiming replaces the previous holder unconditionally and is independent of the schedule."),
        (name = "WebSocket Notifications", description = "Real-time change feed at `ws://host:port/api/v1/notifications/ws`. Events: `ScheduleChanged` (reason `created` or `deleted`) and `CurrentHolderChanged`. Filter with the `event_types` query parameter (comma-separated `schedule_changed`, `current_holder_changed`)."),
    ),
    info(
        title = "MacShare Booking Service API",
        version = "1.0.0",
        description = "REST API for booking time on a single shared workstation.

## Response format

Every REST response uses the same envelope:
```json
{\"success\": true, \"data\": {...}}
```

On failure:
```json
{\"success\": false, \"data\": null, \"error\": \"description\"}
```

## Real-time notifications

Connect to `ws://host:port/api/v1/notifications/ws` to receive schedule and
holder changes as they happen.",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Create the API router with all routes
pub fn create_api_router(
    repos: Arc<dyn RepositoryProvider>,
    reservation_service: SharedReservationService,
    holder_service: SharedCurrentHolderService,
    event_bus: SharedEventBus,
    prometheus_handle: PrometheusHandle,
) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Reservation routes
    let reservation_state = reservations::ReservationAppState {
        reservation_service,
    };
    let reservation_routes = Router::new()
        .route(
            "/",
            get(reservations::list_reservations).post(reservations::create_reservation),
        )
        .route("/{id}", delete(reservations::delete_reservation))
        .with_state(reservation_state);

    // User routes (read-only roster)
    let user_routes = Router::new()
        .route("/", get(users::list_users))
        .with_state(users::UserAppState { repos });

    // Current-holder routes
    let holder_routes = Router::new()
        .route(
            "/",
            get(holder::get_current_holder).post(holder::claim_workstation),
        )
        .with_state(holder::HolderAppState { holder_service });

    // Notification WebSocket routes
    let notification_state = create_notification_state(event_bus.clone());
    let notification_routes = Router::new()
        .route("/ws", get(ws_notifications_handler))
        .with_state(notification_state);

    // Health + metrics
    let health_routes = Router::new()
        .route("/health", get(health::health_check))
        .with_state(health::HealthState {
            event_bus,
            started_at: Arc::new(Instant::now()),
        });
    let metrics_routes = Router::new()
        .route("/metrics", get(metrics::prometheus_metrics))
        .with_state(metrics::MetricsState {
            handle: prometheus_handle,
        });

    let swagger_routes = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    // Build router
    Router::new()
        // Swagger UI
        .merge(swagger_routes)
        // Health + metrics
        .merge(health_routes)
        .merge(metrics_routes)
        // Reservations
        .nest("/api/v1/reservations", reservation_routes)
        // Users
        .nest("/api/v1/users", user_routes)
        // Current holder
        .nest("/api/v1/current-holder", holder_routes)
        // Notifications WebSocket
        .nest("/api/v1/notifications", notification_routes)
        // Middleware
        .layer(middleware::from_fn(metrics::http_metrics_middleware))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

// ── Tests ──────────────────────────────────────────────────────
