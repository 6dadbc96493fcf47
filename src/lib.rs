//! # MacShare Booking Service
//!
//! Booking service for a single shared workstation: members reserve
//! date-scoped time slots, the service rejects overlapping bookings, and
//! UI clients follow schedule changes over WebSocket notifications.
//!
//! ## Architecture
//!
//! The project follows Clean Architecture principles:
//!
//! - **domain**: Core business entities, types and traits
//! - **application**: Business logic and admission rules
//! - **infrastructure**: External concerns (database, in-memory storage)
//! - **api**: REST API with Swagger documentation
//! - **notifications**: Real-time WebSocket notifications for UI
//! - **server**: Reusable runtime (bootstrap + graceful shutdown)

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod notifications;
pub mod server;
pub mod shared;

pub use config::{default_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::database::repositories::SeaOrmRepositoryProvider;
pub use infrastructure::{init_database, DatabaseConfig, InMemoryRepositories};

// Re-export API router
pub use api::create_api_router;

// Re-export notifications
pub use notifications::{create_event_bus, Event, EventBus, SharedEventBus};

// Re-export server runtime
pub use server::{init_tracing, ServerHandle, ServerOptions};
