//! Call entities

use crate::domain::call::value_object::{ActiveSpeakerState, CallParticipantState};
use crate::domain::call::stream::StreamId;
use crate::domain::shared::value_objects::{ClientId, UserId};
use serde::{Deserialize, Serialize};

/// Member of a call as reported by the call session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    /// Stable user identity
    user_id: UserId,
    /// Device the user joined from
    client_id: ClientId,
    /// Name shown on the tile, also the sort key of the video wall
    display_name: String,
    state: CallParticipantState,
    #[serde(default)]
    active_speaker_state: ActiveSpeakerState,
}

impl Participant {
    pub fn new(
        user_id: UserId,
        client_id: ClientId,
        display_name: impl Into<String>,
        state: CallParticipantState,
    ) -> Self {
        Self {
            user_id,
            client_id,
            display_name: display_name.into(),
            state,
            active_speaker_state: ActiveSpeakerState::Inactive,
        }
    }

    pub fn with_active_speaker_state(mut self, state: ActiveSpeakerState) -> Self {
        self.active_speaker_state = state;
        self
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn client_id(&self) -> &ClientId {
        &self.client_id
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn state(&self) -> &CallParticipantState {
        &self.state
    }

    pub fn active_speaker_state(&self) -> ActiveSpeakerState {
        self.active_speaker_state
    }

    pub fn stream_id(&self) -> StreamId {
        StreamId::new(self.user_id, self.client_id.clone())
    }

    pub fn set_state(&mut self, state: CallParticipantState) {
        self.state = state;
    }

    pub fn set_active_speaker_state(&mut self, state: ActiveSpeakerState) {
        self.active_speaker_state = state;
    }
}
