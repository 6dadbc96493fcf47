//! In-process pub/sub for schedule and holder changes
//!
//! Thin wrapper over a tokio broadcast channel. Delivery is best-effort:
//! a subscriber that lags past the channel capacity misses events instead
//! of blocking publishers.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use log::{debug, info, warn};
use tokio::sync::broadcast;

use super::events::{Event, EventMessage};

/// Default channel capacity
const DEFAULT_CAPACITY: usize = 1024;

/// Fan-out bus carrying every [`Event`] to all live subscribers
#[derive(Clone)]
pub struct EventBus {
    sender: broadcast::Sender<EventMessage>,
    subscriber_count: Arc<AtomicUsize>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Capacity bounds how far a slow subscriber may fall behind
    pub fn with_capacity(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self {
            sender,
            subscriber_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Stamp the event with an envelope and fan it out
    pub fn publish(&self, event: Event) {
        let message = EventMessage::new(event);
        let event_type = message.event.event_type();

        match self.sender.send(message) {
            Ok(count) => {
                debug!("Published {} to {} subscriber(s)", event_type, count);
            }
            Err(_) => {
                // No subscribers - normal when no UI clients are connected
                debug!("Published {} with nobody listening", event_type);
            }
        }
    }

    pub fn subscribe(&self) -> EventSubscriber {
        let receiver = self.sender.subscribe();
        self.subscriber_count.fetch_add(1, Ordering::SeqCst);
        let count = self.subscriber_count.load(Ordering::SeqCst);
        info!("Event subscriber joined, total: {}", count);

        EventSubscriber {
            receiver,
            subscriber_count: self.subscriber_count.clone(),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscriber_count.load(Ordering::SeqCst)
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

/// Receiving end handed out by [`EventBus::subscribe`]
pub struct EventSubscriber {
    receiver: broadcast::Receiver<EventMessage>,
    subscriber_count: Arc<AtomicUsize>,
}

impl EventSubscriber {
    /// Next event, skipping over any the subscriber was too slow to catch.
    /// Returns `None` once the bus is gone.
    pub async fn recv(&mut self) -> Option<EventMessage> {
        loop {
            match self.receiver.recv().await {
                Ok(msg) => return Some(msg),
                Err(broadcast::error::RecvError::Lagged(count)) => {
                    warn!("Slow subscriber skipped {} event(s)", count);
                    continue;
                }
                Err(broadcast::error::RecvError::Closed) => {
                    return None;
                }
            }
        }
    }
}

impl Drop for EventSubscriber {
    fn drop(&mut self) {
        let prev = self.subscriber_count.fetch_sub(1, Ordering::SeqCst);
        info!("Event subscriber left, remaining: {}", prev - 1);
    }
}

/// Handle shared by the services, the router and the WebSocket module
pub type SharedEventBus = Arc<EventBus>;

pub fn create_event_bus() -> SharedEventBus {
    Arc::new(EventBus::new())
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifications::events::CurrentHolderChangedEvent;
    use chrono::Utc;

    fn holder_event(user_id: i32) -> Event {
        Event::CurrentHolderChanged(CurrentHolderChangedEvent {
            user_id,
            user_name: format!("Member {}", user_id),
            claimed_at: Utc::now(),
        })
    }

    #[tokio::test]
    async fn publish_reaches_subscriber() {
        let bus = EventBus::new();
        let mut subscriber = bus.subscribe();

        bus.publish(holder_event(1));

        let received =
            tokio::time::timeout(std::time::Duration::from_millis(100), subscriber.recv())
                .await
                .expect("Timeout")
                .expect("No message");

        assert_eq!(received.event.event_type(), "current_holder_changed");
    }

    #[tokio::test]
    async fn publish_without_subscribers_is_a_noop() {
        let bus = EventBus::new();
        // must not panic or block
        bus.publish(holder_event(1));
    }

    #[tokio::test]
    async fn subscriber_receives_events_in_order() {
        let bus = EventBus::new();
        let mut subscriber = bus.subscribe();

        bus.publish(holder_event(1));
        bus.publish(holder_event(2));

        let first = subscriber.recv().await.expect("first message");
        let second = subscriber.recv().await.expect("second message");

        match (first.event, second.event) {
            (Event::CurrentHolderChanged(a), Event::CurrentHolderChanged(b)) => {
                assert_eq!(a.user_id, 1);
                assert_eq!(b.user_id, 2);
            }
            _ => panic!("unexpected event kinds"),
        }
    }

    #[test]
    fn subscriber_count_tracks_drops() {
        let bus = EventBus::new();
        assert_eq!(bus.subscriber_count(), 0);

        let sub1 = bus.subscribe();
        assert_eq!(bus.subscriber_count(), 1);

        let _sub2 = bus.subscribe();
        assert_eq!(bus.subscriber_count(), 2);

        drop(sub1);
        assert_eq!(bus.subscriber_count(), 1);
    }
}
