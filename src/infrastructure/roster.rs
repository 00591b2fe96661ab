//! In-memory call roster

use crate::domain::call::{
    ActiveSpeakerState, CallParticipantState, Participant, RosterKind, RosterProvider, StreamId,
};
use crate::domain::shared::error::{DomainError, Result};
use std::sync::{PoisonError, RwLock};
use tracing::debug;

#[derive(Debug, Default)]
struct RosterState {
    /// Join order
    participants: Vec<Participant>,
    /// Most recent speaker first
    speaker_order: Vec<StreamId>,
}

/// Roster held in memory, fed by whoever tracks the call session
///
/// `RosterKind::All` returns every participant in join order.
/// `RosterKind::SmoothedActiveSpeakers` returns the participants currently
/// marked as active speakers, most recent first.
#[derive(Debug, Default)]
pub struct InMemoryRoster {
    state: RwLock<RosterState>,
}

impl InMemoryRoster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_participants(participants: Vec<Participant>) -> Self {
        let roster = Self::new();
        for participant in participants {
            roster.join(participant);
        }
        roster
    }

    /// Add a participant, replacing an existing one with the same stream id
    pub fn join(&self, participant: Participant) {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        let stream_id = participant.stream_id();

        state.speaker_order.retain(|id| id != &stream_id);
        if participant.active_speaker_state() == ActiveSpeakerState::Active {
            state.speaker_order.insert(0, stream_id.clone());
        }

        match state
            .participants
            .iter_mut()
            .find(|p| p.stream_id() == stream_id)
        {
            Some(existing) => *existing = participant,
            None => state.participants.push(participant),
        }
        debug!(%stream_id, count = state.participants.len(), "Participant joined");
    }

    pub fn leave(&self, stream_id: &StreamId) -> Result<Participant> {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        let position = state
            .participants
            .iter()
            .position(|p| &p.stream_id() == stream_id)
            .ok_or_else(|| DomainError::NotFound(format!("participant {}", stream_id)))?;

        state.speaker_order.retain(|id| id != stream_id);
        let participant = state.participants.remove(position);
        debug!(%stream_id, count = state.participants.len(), "Participant left");
        Ok(participant)
    }

    pub fn update_state(
        &self,
        stream_id: &StreamId,
        new_state: CallParticipantState,
    ) -> Result<()> {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        let participant = state
            .participants
            .iter_mut()
            .find(|p| &p.stream_id() == stream_id)
            .ok_or_else(|| DomainError::NotFound(format!("participant {}", stream_id)))?;

        participant.set_state(new_state);
        Ok(())
    }

    /// Mark a participant as (not) speaking; starting to speak moves them to
    /// the front of the active-speaker order
    pub fn set_speaking(&self, stream_id: &StreamId, speaking: ActiveSpeakerState) -> Result<()> {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        let participant = state
            .participants
            .iter_mut()
            .find(|p| &p.stream_id() == stream_id)
            .ok_or_else(|| DomainError::NotFound(format!("participant {}", stream_id)))?;
        participant.set_active_speaker_state(speaking);

        state.speaker_order.retain(|id| id != stream_id);
        if speaking == ActiveSpeakerState::Active {
            state.speaker_order.insert(0, stream_id.clone());
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .participants
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl RosterProvider for InMemoryRoster {
    fn participants(&self, kind: RosterKind) -> Vec<Participant> {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);

        match kind {
            RosterKind::All => state.participants.clone(),
            RosterKind::SmoothedActiveSpeakers => state
                .speaker_order
                .iter()
                .filter_map(|id| state.participants.iter().find(|p| &p.stream_id() == id))
                .cloned()
                .collect(),
        }
    }
}
