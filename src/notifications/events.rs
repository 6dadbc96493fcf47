//! Notification events
//!
//! Defines the event types broadcast to WebSocket clients whenever the
//! schedule or the current holder changes.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

/// Event types for notifications
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Event {
    /// A reservation was created or deleted
    ScheduleChanged(ScheduleChangedEvent),
    /// The workstation changed hands
    CurrentHolderChanged(CurrentHolderChangedEvent),
}

impl Event {
    /// Get the event type name
    pub fn event_type(&self) -> &'static str {
        match self {
            Event::ScheduleChanged(_) => "schedule_changed",
            Event::CurrentHolderChanged(_) => "current_holder_changed",
        }
    }
}

/// What happened to the schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScheduleChangeReason {
    Created,
    Deleted,
}

/// Schedule changed event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleChangedEvent {
    pub reason: ScheduleChangeReason,
    pub reservation_id: i32,
    pub user_id: i32,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

/// Current holder changed event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentHolderChangedEvent {
    pub user_id: i32,
    pub user_name: String,
    pub claimed_at: DateTime<Utc>,
}

/// Wrapper for sending events with metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventMessage {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    #[serde(flatten)]
    pub event: Event,
}

impl EventMessage {
    pub fn new(event: Event) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            event,
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn schedule_event_serializes_tagged() {
        let event = Event::ScheduleChanged(ScheduleChangedEvent {
            reason: ScheduleChangeReason::Created,
            reservation_id: 5,
            user_id: 2,
            date: NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
            start_time: chrono::NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            end_time: chrono::NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
        });

        let json = serde_json::to_value(EventMessage::new(event)).unwrap();
        assert_eq!(json["type"], "ScheduleChanged");
        assert_eq!(json["data"]["reason"], "created");
        assert_eq!(json["data"]["reservation_id"], 5);
        assert_eq!(json["data"]["date"], "2025-06-02");
        assert!(json["id"].is_string());
    }

    #[test]
    fn holder_event_type_name() {
        let event = Event::CurrentHolderChanged(CurrentHolderChangedEvent {
            user_id: 1,
            user_name: "Member 1".to_string(),
            claimed_at: Utc::now(),
        });
        assert_eq!(event.event_type(), "current_holder_changed");
    }
}
