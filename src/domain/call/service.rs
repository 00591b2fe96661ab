//! Stream selection and arrangement

use crate::domain::call::entity::Participant;
use crate::domain::call::repository::RosterProvider;
use crate::domain::call::stream::{Stream, StreamArrangement, StreamId};
use crate::domain::call::value_object::{PresentationMode, RosterKind, StreamSelectionPolicy};
use tracing::debug;

/// Above this many people the self view becomes a regular grid tile
const PREVIEW_THRESHOLD: usize = 2;

/// Decides which participants are shown and in what order
///
/// Stateless apart from the selection policy; every method is a pure
/// function of its arguments.
#[derive(Debug, Clone, Copy, Default)]
pub struct StreamSelector {
    policy: StreamSelectionPolicy,
}

impl StreamSelector {
    pub fn new(policy: StreamSelectionPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> StreamSelectionPolicy {
        self.policy
    }

    /// Streams of participants with video on, in input order
    pub fn select_active_video_streams(participants: &[Participant]) -> Vec<Stream> {
        StreamSelector::new(StreamSelectionPolicy::VideoOnly).select_streams(participants)
    }

    /// Streams of the participants admitted by this selector's policy, in input order
    pub fn select_streams(&self, participants: &[Participant]) -> Vec<Stream> {
        let streams: Vec<Stream> = participants
            .iter()
            .filter(|p| self.policy.admits(p.state()))
            .filter_map(Stream::from_participant)
            .collect();

        debug!(
            policy = ?self.policy,
            participants = participants.len(),
            streams = streams.len(),
            "Selected streams"
        );
        streams
    }

    pub fn resolve_roster_kind(mode: PresentationMode) -> RosterKind {
        mode.roster_kind()
    }

    /// Order an already fetched roster for the given presentation mode
    ///
    /// The video wall is sorted by display name, case-insensitively, keeping
    /// input order for equal names. The active-speaker strip keeps the order
    /// the call session supplied.
    pub fn participants_for_presentation_mode(
        mode: PresentationMode,
        roster: Vec<Participant>,
    ) -> Vec<Participant> {
        match mode {
            PresentationMode::AllVideoStreams => {
                let mut roster = roster;
                // Unicode lowercasing, not locale-aware collation.
                roster.sort_by_cached_key(|p| p.display_name().to_lowercase());
                roster
            }
            PresentationMode::ActiveSpeakers => roster,
        }
    }

    /// Fetch the roster matching `mode` from the call session and order it
    pub fn fetch_participants(
        provider: &dyn RosterProvider,
        mode: PresentationMode,
    ) -> Vec<Participant> {
        let kind = Self::resolve_roster_kind(mode);
        let roster = provider.participants(kind);
        debug!(?mode, ?kind, count = roster.len(), "Fetched roster");
        Self::participants_for_presentation_mode(mode, roster)
    }

    /// Split the local user's stream out of a stream list, keeping order
    pub fn partition_self_stream(
        streams: Vec<Stream>,
        self_id: &StreamId,
    ) -> (Option<Stream>, Vec<Stream>) {
        let mut self_stream = None;
        let mut others = Vec::with_capacity(streams.len());

        for stream in streams {
            if self_stream.is_none() && &stream.stream_id == self_id {
                self_stream = Some(stream);
            } else {
                others.push(stream);
            }
        }

        (self_stream, others)
    }

    /// Place the self stream either in the grid or in the floating preview
    ///
    /// The head count is the participant streams plus the self stream.
    pub fn arrange_streams(
        self_stream: Option<Stream>,
        participant_streams: Vec<Stream>,
    ) -> StreamArrangement {
        let count = participant_streams.len() + usize::from(self_stream.is_some());
        Self::arrange_by_count(self_stream, participant_streams, count)
    }

    /// Same rule as [`arrange_streams`](Self::arrange_streams), but the head
    /// count is the size of the call roster, streaming or not
    pub fn arrange_streams_for_roster(
        self_stream: Option<Stream>,
        participant_streams: Vec<Stream>,
        roster_len: usize,
    ) -> StreamArrangement {
        Self::arrange_by_count(self_stream, participant_streams, roster_len)
    }

    fn arrange_by_count(
        self_stream: Option<Stream>,
        participant_streams: Vec<Stream>,
        count: usize,
    ) -> StreamArrangement {
        if count > PREVIEW_THRESHOLD {
            let grid = self_stream.into_iter().chain(participant_streams).collect();
            StreamArrangement::new(grid, None)
        } else {
            StreamArrangement::new(participant_streams, self_stream)
        }
    }
}
