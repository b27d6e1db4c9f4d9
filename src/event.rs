use serde::{Deserialize, Serialize};
use std::cell::RefCell;

/// Analytics outcomes the engine tags transitions with.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum_macros::Display,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum GameEvent {
    FailureTypo,
    Type,
    WordComplete,
    FailureSlow,
    StreakComplete,
    GameComplete,
}

/// Partial state returned by a recorder and merged into the next snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatePatch {
    pub last_event: Option<GameEvent>,
}

pub trait EventRecorder {
    fn record_event(&self, event: GameEvent) -> StatePatch;
}

/// Writes each event to the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingRecorder;

impl EventRecorder for TracingRecorder {
    fn record_event(&self, event: GameEvent) -> StatePatch {
        tracing::debug!(%event, "recorded event");
        StatePatch {
            last_event: Some(event),
        }
    }
}

/// Keeps every recorded event in order.
#[derive(Debug, Default)]
pub struct MemoryRecorder {
    events: RefCell<Vec<GameEvent>>,
}

impl MemoryRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<GameEvent> {
        self.events.borrow().clone()
    }

    pub fn last(&self) -> Option<GameEvent> {
        self.events.borrow().last().copied()
    }

    pub fn count(&self, event: GameEvent) -> usize {
        self.events.borrow().iter().filter(|e| **e == event).count()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}

impl EventRecorder for MemoryRecorder {
    fn record_event(&self, event: GameEvent) -> StatePatch {
        self.events.borrow_mut().push(event);
        StatePatch {
            last_event: Some(event),
        }
    }
}
