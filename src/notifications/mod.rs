//! Notifications module
//!
//! Provides real-time event notifications via WebSocket for UI clients.
//!
//! # Features
//! - Event bus for pub/sub messaging
//! - WebSocket endpoint for UI clients
//! - Filtering by event type
//!
//! # Usage
//! ```ignore
//! use macshare::notifications::{create_event_bus, Event, ScheduleChangedEvent};
//!
//! // Create event bus at bootstrap, inject the handle everywhere
//! let event_bus = create_event_bus();
//! event_bus.publish(Event::ScheduleChanged(/* ... */));
//! ```
//!
//! # WebSocket Endpoint
//! Connect to `/api/v1/notifications/ws` with optional query parameters:
//! - `event_types` - Comma-separated list of event types to receive

pub mod event_bus;
pub mod events;
pub mod websocket;

pub use event_bus::{create_event_bus, EventBus, EventSubscriber, SharedEventBus};
pub use events::*;
pub use websocket::{create_notification_state, ws_notifications_handler, NotificationState};
