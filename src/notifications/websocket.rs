//! WebSocket handler for UI notification clients
//!
//! Streams published [`EventMessage`]s to connected browsers so schedule
//! and holder changes show up without polling.

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        Query, State,
    },
    response::IntoResponse,
};
use futures_util::{SinkExt, StreamExt};
use serde::Deserialize;
use tokio::select;
use tracing::{debug, error, info, warn};

use super::event_bus::SharedEventBus;
use super::events::EventMessage;

/// Query parameters for filtering events
#[derive(Debug, Default, Deserialize)]
pub struct EventFilter {
    /// Filter by event types (comma-separated, optional)
    pub event_types: Option<String>,
}

impl EventFilter {
    /// Check if event matches the filter
    pub fn matches(&self, event: &EventMessage) -> bool {
        if let Some(ref types) = self.event_types {
            let allowed: Vec<&str> = types.split(',').map(|s| s.trim()).collect();
            if !allowed.contains(&event.event.event_type()) {
                return false;
            }
        }
        true
    }
}

/// State for the notification WebSocket handler
#[derive(Clone)]
pub struct NotificationState {
    pub event_bus: SharedEventBus,
}

/// Create notification state
pub fn create_notification_state(event_bus: SharedEventBus) -> NotificationState {
    NotificationState { event_bus }
}

/// WebSocket upgrade handler for notifications
pub async fn ws_notifications_handler(
    ws: WebSocketUpgrade,
    State(state): State<NotificationState>,
    Query(filter): Query<EventFilter>,
) -> impl IntoResponse {
    info!(
        "New notification WebSocket connection: event_types={:?}",
        filter.event_types
    );

    ws.on_upgrade(move |socket| handle_notification_socket(socket, state, filter))
}

/// Handle a WebSocket connection for notifications
async fn handle_notification_socket(
    socket: WebSocket,
    state: NotificationState,
    filter: EventFilter,
) {
    let (mut sender, mut receiver) = socket.split();
    let mut subscriber = state.event_bus.subscribe();

    // Send welcome message
    let welcome = serde_json::json!({
        "type": "connected",
        "message": "Connected to notification stream",
        "filter": {
            "event_types": filter.event_types
        }
    });

    if let Err(e) = sender.send(Message::Text(welcome.to_string().into())).await {
        error!("Failed to send welcome message: {}", e);
        return;
    }

    info!("Notification WebSocket client connected");

    loop {
        select! {
            msg = receiver.next() => {
                match msg {
                    Some(Ok(Message::Ping(data))) => {
                        if let Err(e) = sender.send(Message::Pong(data)).await {
                            error!("Failed to send pong: {}", e);
                            break;
                        }
                    }
                    Some(Ok(Message::Close(_))) => {
                        info!("Client sent close");
                        break;
                    }
                    Some(Ok(_)) => {
                        // Inbound frames carry nothing here, the stream is one-way
                        debug!("Ignoring inbound client frame");
                    }
                    Some(Err(e)) => {
                        warn!("WebSocket error: {}", e);
                        break;
                    }
                    None => {
                        info!("WebSocket stream ended");
                        break;
                    }
                }
            }

            event = subscriber.recv() => {
                match event {
                    Some(event_msg) => {
                        if !filter.matches(&event_msg) {
                            continue;
                        }

                        match serde_json::to_string(&event_msg) {
                            Ok(json) => {
                                if let Err(e) = sender.send(Message::Text(json.into())).await {
                                    error!("Failed to send event: {}", e);
                                    break;
                                }
                                debug!("Event sent to client: {}", event_msg.event.event_type());
                            }
                            Err(e) => {
                                error!("Failed to serialize event: {}", e);
                            }
                        }
                    }
                    None => {
                        warn!("Event bus closed");
                        break;
                    }
                }
            }
        }
    }

    info!("Notification WebSocket client disconnected");
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifications::events::{
        CurrentHolderChangedEvent, Event, ScheduleChangeReason, ScheduleChangedEvent,
    };
    use chrono::{NaiveDate, NaiveTime, Utc};

    fn schedule_message() -> EventMessage {
        EventMessage::new(Event::ScheduleChanged(ScheduleChangedEvent {
            reason: ScheduleChangeReason::Created,
            reservation_id: 1,
            user_id: 1,
            date: NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
            start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
        }))
    }

    fn holder_message() -> EventMessage {
        EventMessage::new(Event::CurrentHolderChanged(CurrentHolderChangedEvent {
            user_id: 2,
            user_name: "Member 2".to_string(),
            claimed_at: Utc::now(),
        }))
    }

    #[test]
    fn empty_filter_matches_everything() {
        let filter = EventFilter::default();
        assert!(filter.matches(&schedule_message()));
        assert!(filter.matches(&holder_message()));
    }

    #[test]
    fn type_filter_restricts_events() {
        let filter = EventFilter {
            event_types: Some("schedule_changed".to_string()),
        };
        assert!(filter.matches(&schedule_message()));
        assert!(!filter.matches(&holder_message()));
    }

    #[test]
    fn comma_separated_types_are_trimmed() {
        let filter = EventFilter {
            event_types: Some("schedule_changed, current_holder_changed".to_string()),
        };
        assert!(filter.matches(&schedule_message()));
        assert!(filter.matches(&holder_message()));
    }
}
