//! Topic-based event bus.
//!
//! Frontends subscribe to the topics they render instead of polling
//! snapshots. Publishing is best-effort: a topic without subscribers is
//! not an error.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{RwLock, broadcast};

use schulte_core::{SelectionOutcome, SessionStatus};

/// Topics for event routing
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Topic {
    /// Session lifecycle and selection outcomes.
    Session,
    /// Countdown and highlight timer activity.
    Timer,
}

/// Event wrapper carrying the topic and typed payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Event {
    Session(SessionEvent),
    Timer(TimerEvent),
}

impl Event {
    pub fn topic(&self) -> Topic {
        match self {
            Event::Session(_) => Topic::Session,
            Event::Timer(_) => Topic::Timer,
        }
    }
}

/// Session lifecycle and gameplay events.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum SessionEvent {
    /// A session (re)started on a freshly shuffled table.
    Started,
    /// A selection was processed (including wrong and ignored ones).
    Selection {
        outcome: SelectionOutcome,
        correct: u32,
        wrong: u32,
    },
    /// Timed mode cleared and rebuilt the table mid-session.
    TableRebuilt,
    /// The session reached its terminal state.
    Finished {
        status: SessionStatus,
        correct: u32,
        wrong: u32,
        elapsed_hms: String,
    },
}

/// Timer events, for frontends that render the countdown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum TimerEvent {
    CountdownStarted { minutes: u16 },
    CountdownExpired,
}

/// Topic-based event bus.
pub struct EventBus {
    channels: Arc<RwLock<HashMap<Topic, broadcast::Sender<Event>>>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::with_capacity(100)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let mut channels = HashMap::new();
        channels.insert(Topic::Session, broadcast::channel(capacity).0);
        channels.insert(Topic::Timer, broadcast::channel(capacity).0);

        Self {
            channels: Arc::new(RwLock::new(channels)),
        }
    }

    /// Publish an event to its topic. Best-effort: dropped when the lock
    /// is contended or nobody subscribed.
    pub fn publish(&self, event: Event) {
        let topic = event.topic();
        match self.channels.try_read() {
            Ok(channels) => {
                if let Some(tx) = channels.get(&topic)
                    && tx.send(event).is_err()
                {
                    tracing::trace!("no subscribers for topic {:?}", topic);
                }
            }
            Err(_) => {
                tracing::debug!("event bus lock contended; dropping {:?} event", topic);
            }
        }
    }

    /// Subscribe to a single topic.
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        let channels = self
            .channels
            .try_read()
            .expect("event channel table is only written at construction");
        channels
            .get(&topic)
            .expect("all topics are pre-created")
            .subscribe()
    }
}

impl Clone for EventBus {
    fn clone(&self) -> Self {
        Self {
            channels: Arc::clone(&self.channels),
        }
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
