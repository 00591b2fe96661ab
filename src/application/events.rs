//! Grid event streaming

use crate::domain::grid::LayoutDirection;
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use tracing::debug;

/// Things the rendering layer reacts to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GridEvent {
    /// A new arrangement was computed
    ArrangementUpdated {
        tiles: usize,
        preview_visible: bool,
        pages: usize,
        timestamp: i64,
    },
    /// Scrolling settled on another page
    PageChanged { index: usize, timestamp: i64 },
    LayoutDirectionChanged {
        direction: LayoutDirection,
        timestamp: i64,
    },
}

/// Fans grid events out to every subscriber
pub struct GridEventBroadcaster {
    tx: broadcast::Sender<GridEvent>,
}

impl GridEventBroadcaster {
    /// Create new broadcaster with specified capacity (at least 1)
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity.max(1));
        Self { tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<GridEvent> {
        self.tx.subscribe()
    }

    /// Broadcast an event; having nobody listening is fine
    pub fn broadcast(&self, event: GridEvent) {
        if self.tx.send(event).is_err() {
            debug!("No subscribers for grid event");
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }

    pub fn arrangement_updated(&self, tiles: usize, preview_visible: bool, pages: usize) {
        self.broadcast(GridEvent::ArrangementUpdated {
            tiles,
            preview_visible,
            pages,
            timestamp: chrono::Utc::now().timestamp(),
        });
    }

    pub fn page_changed(&self, index: usize) {
        self.broadcast(GridEvent::PageChanged {
            index,
            timestamp: chrono::Utc::now().timestamp(),
        });
    }

    pub fn layout_direction_changed(&self, direction: LayoutDirection) {
        self.broadcast(GridEvent::LayoutDirectionChanged {
            direction,
            timestamp: chrono::Utc::now().timestamp(),
        });
    }
}

impl Default for GridEventBroadcaster {
    fn default() -> Self {
        Self::new(64)
    }
}
