//! Call grid use case
//!
//! Pulls the roster from the call session, turns it into an arrangement and
//! keeps the rendering layer informed through [`GridEvent`]s.

use crate::application::events::{GridEvent, GridEventBroadcaster};
use crate::config::Config;
use crate::domain::call::{
    PresentationMode, RosterProvider, StreamArrangement, StreamId, StreamSelector,
};
use crate::domain::grid::{GridLayoutPlanner, LayoutDirection, Point, Size};
use crate::domain::shared::error::{DomainError, Result};
use crate::infrastructure::metrics;
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::{debug, info};

/// What the rendering layer needs for one refresh
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CallGridSnapshot {
    pub presentation_mode: PresentationMode,
    pub arrangement: StreamArrangement,
    pub pages: usize,
}

pub struct CallGridService {
    roster: Arc<dyn RosterProvider>,
    selector: StreamSelector,
    planner: GridLayoutPlanner,
    events: GridEventBroadcaster,
}

impl CallGridService {
    pub fn new(roster: Arc<dyn RosterProvider>, config: &Config) -> Result<Self> {
        if config.events.capacity == 0 {
            return Err(DomainError::ValidationError(
                "events.capacity must be at least 1".to_string(),
            ));
        }

        let planner =
            GridLayoutPlanner::new(config.grid.max_items_per_page, config.grid.layout_direction)?;
        metrics::describe_grid_metrics();

        Ok(Self {
            roster,
            selector: StreamSelector::new(config.selection.policy),
            planner,
            events: GridEventBroadcaster::new(config.events.capacity),
        })
    }

    /// Recompute the arrangement for `mode`
    ///
    /// `self_id` identifies the local user's stream; when it is `None` or not
    /// streaming there is no self view.
    pub fn refresh(&self, mode: PresentationMode, self_id: Option<&StreamId>) -> CallGridSnapshot {
        let participants = StreamSelector::fetch_participants(self.roster.as_ref(), mode);
        let streams = self.selector.select_streams(&participants);

        let (self_stream, participant_streams) = match self_id {
            Some(id) => StreamSelector::partition_self_stream(streams, id),
            None => (None, streams),
        };

        let arrangement = StreamSelector::arrange_streams(self_stream, participant_streams);
        let pages = self.planner.number_of_pages(arrangement.grid.len());
        let preview_visible = arrangement.preview.is_some();

        debug!(
            ?mode,
            tiles = arrangement.grid.len(),
            preview_visible,
            pages,
            "Arranged call grid"
        );
        metrics::record_arrangement(arrangement.grid.len(), pages, preview_visible);
        self.events
            .arrangement_updated(arrangement.grid.len(), preview_visible, pages);

        CallGridSnapshot {
            presentation_mode: mode,
            arrangement,
            pages,
        }
    }

    pub fn layout_direction(&self) -> LayoutDirection {
        self.planner.layout_direction()
    }

    /// Switch the paging axis, e.g. on rotation
    pub fn set_layout_direction(&mut self, direction: LayoutDirection) {
        if self.planner.layout_direction() == direction {
            return;
        }

        info!(?direction, "Call grid layout direction changed");
        self.planner = self.planner.with_direction(direction);
        self.events.layout_direction_changed(direction);
    }

    /// Report where scrolling settled and return the page now shown
    pub fn scroll_did_end(&self, content_offset: Point, frame: Size, item_count: usize) -> usize {
        let index = self
            .planner
            .clamped_page_index_for_scroll(content_offset, frame, item_count);

        debug!(index, item_count, "Call grid page changed");
        metrics::record_page_change(match self.planner.layout_direction() {
            LayoutDirection::Vertical => "vertical",
            LayoutDirection::Horizontal => "horizontal",
        });
        self.events.page_changed(index);
        index
    }

    pub fn subscribe(&self) -> broadcast::Receiver<GridEvent> {
        self.events.subscribe()
    }

    pub fn planner(&self) -> &GridLayoutPlanner {
        &self.planner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::call::repository::MockRosterProvider;
    use crate::domain::call::{
        CallParticipantState, MicrophoneState, Participant, RosterKind, VideoState,
    };
    use crate::domain::shared::value_objects::{ClientId, UserId};
    use mockall::predicate::eq;

    fn participant(name: &str, video: VideoState) -> Participant {
        Participant::new(
            UserId::new(),
            ClientId::random(),
            name,
            CallParticipantState::Connected {
                video,
                microphone: MicrophoneState::Unmuted,
            },
        )
    }

    #[test]
    fn test_refresh_requests_roster_kind_for_mode() {
        let mut provider = MockRosterProvider::new();
        provider
            .expect_participants()
            .with(eq(RosterKind::SmoothedActiveSpeakers))
            .times(1)
            .returning(|_| Vec::new());

        let service = CallGridService::new(Arc::new(provider), &Config::default()).unwrap();
        let snapshot = service.refresh(PresentationMode::ActiveSpeakers, None);

        assert!(snapshot.arrangement.is_empty());
        assert_eq!(snapshot.pages, 0);
    }

    #[test]
    fn test_refresh_puts_self_in_preview_for_one_to_one() {
        let me = participant("Me", VideoState::Started);
        let remote = participant("Remote", VideoState::Started);
        let roster = vec![me.clone(), remote.clone()];

        let mut provider = MockRosterProvider::new();
        provider
            .expect_participants()
            .returning(move |_| roster.clone());

        let service = CallGridService::new(Arc::new(provider), &Config::default()).unwrap();
        let snapshot = service.refresh(PresentationMode::AllVideoStreams, Some(&me.stream_id()));

        assert_eq!(snapshot.arrangement.grid_ids(), vec![&remote.stream_id()]);
        assert_eq!(
            snapshot.arrangement.preview.map(|s| s.stream_id),
            Some(me.stream_id())
        );
        assert_eq!(snapshot.pages, 1);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let provider = MockRosterProvider::new();
        let mut config = Config::default();
        config.grid.max_items_per_page = 0;

        assert!(CallGridService::new(Arc::new(provider), &config).is_err());
    }

    #[tokio::test]
    async fn test_direction_change_and_scroll_publish_events() {
        let mut provider = MockRosterProvider::new();
        provider.expect_participants().returning(|_| Vec::new());

        let mut service = CallGridService::new(Arc::new(provider), &Config::default()).unwrap();
        let mut rx = service.subscribe();

        service.set_layout_direction(LayoutDirection::Vertical);
        service.set_layout_direction(LayoutDirection::Horizontal);
        let page = service.scroll_did_end(Point::new(250.0, 0.0), Size::new(100.0, 100.0), 20);
        assert_eq!(page, 2);

        assert!(matches!(
            rx.recv().await.unwrap(),
            GridEvent::LayoutDirectionChanged {
                direction: LayoutDirection::Horizontal,
                ..
            }
        ));
        assert!(matches!(
            rx.recv().await.unwrap(),
            GridEvent::PageChanged { index: 2, .. }
        ));
    }
}
