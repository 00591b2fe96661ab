//! Streams and their arrangement in the call grid

use crate::domain::call::entity::Participant;
use crate::domain::call::value_object::{
    ActiveSpeakerState, CallParticipantState, MicrophoneState, VideoState,
};
use crate::domain::shared::value_objects::{ClientId, UserId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of one media stream. Equal iff both user and client match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StreamId {
    pub user_id: UserId,
    pub client_id: ClientId,
}

impl StreamId {
    pub fn new(user_id: UserId, client_id: ClientId) -> Self {
        Self { user_id, client_id }
    }
}

impl fmt::Display for StreamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.user_id, self.client_id)
    }
}

/// A participant's feed as placed on the grid
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Stream {
    pub stream_id: StreamId,
    pub display_name: String,
    pub video_state: VideoState,
    pub microphone_state: MicrophoneState,
    pub active_speaker_state: ActiveSpeakerState,
}

impl Stream {
    pub fn new(
        stream_id: StreamId,
        display_name: impl Into<String>,
        video_state: VideoState,
        microphone_state: MicrophoneState,
    ) -> Self {
        Self {
            stream_id,
            display_name: display_name.into(),
            video_state,
            microphone_state,
            active_speaker_state: ActiveSpeakerState::Inactive,
        }
    }

    /// Build the stream of a connected participant. `None` when unconnected.
    pub fn from_participant(participant: &Participant) -> Option<Self> {
        match *participant.state() {
            CallParticipantState::Connected { video, microphone } => Some(Self {
                stream_id: participant.stream_id(),
                display_name: participant.display_name().to_string(),
                video_state: video,
                microphone_state: microphone,
                active_speaker_state: participant.active_speaker_state(),
            }),
            CallParticipantState::Unconnected => None,
        }
    }

    pub fn is_video_enabled(&self) -> bool {
        self.video_state == VideoState::Started
    }
}

/// Output of the arrangement step: grid tiles plus the optional floating self view.
///
/// A stream shown as `preview` never also appears in `grid`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamArrangement {
    pub grid: Vec<Stream>,
    pub preview: Option<Stream>,
}

impl StreamArrangement {
    pub fn new(grid: Vec<Stream>, preview: Option<Stream>) -> Self {
        Self { grid, preview }
    }

    pub fn is_empty(&self) -> bool {
        self.grid.is_empty() && self.preview.is_none()
    }

    pub fn grid_ids(&self) -> Vec<&StreamId> {
        self.grid.iter().map(|s| &s.stream_id).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stream_id_equality_needs_both_fields() {
        let user = UserId::new();
        let a = StreamId::new(user, ClientId::from("c1"));
        let b = StreamId::new(user, ClientId::from("c1"));
        let c = StreamId::new(user, ClientId::from("c2"));
        let d = StreamId::new(UserId::new(), ClientId::from("c1"));

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, d);
    }

    #[test]
    fn test_from_participant() {
        let connected = Participant::new(
            UserId::new(),
            ClientId::random(),
            "Alice",
            CallParticipantState::Connected {
                video: VideoState::Stopped,
                microphone: MicrophoneState::Muted,
            },
        )
        .with_active_speaker_state(ActiveSpeakerState::Active);

        let stream = Stream::from_participant(&connected).unwrap();
        assert_eq!(stream.stream_id, connected.stream_id());
        assert_eq!(&stream.stream_id.user_id, connected.user_id());
        assert_eq!(&stream.stream_id.client_id, connected.client_id());
        assert_eq!(stream.display_name, "Alice");
        assert_eq!(stream.microphone_state, MicrophoneState::Muted);
        assert_eq!(stream.active_speaker_state, ActiveSpeakerState::Active);
        assert!(!stream.is_video_enabled());

        let unconnected = Participant::new(
            UserId::new(),
            ClientId::random(),
            "Bob",
            CallParticipantState::Unconnected,
        );
        assert!(Stream::from_participant(&unconnected).is_none());
    }
}
