//! Call value objects

use serde::{Deserialize, Serialize};

/// Video sub-state of a connected participant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VideoState {
    /// Camera feed is being sent
    Started,
    /// No camera feed
    Stopped,
}

/// Microphone sub-state of a connected participant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MicrophoneState {
    Muted,
    Unmuted,
}

/// Active-speaker state reported by the call session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActiveSpeakerState {
    Active,
    #[default]
    Inactive,
}

/// Connection state of a call participant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CallParticipantState {
    /// Not (yet) connected to the call
    Unconnected,
    /// Media is established
    Connected {
        video: VideoState,
        microphone: MicrophoneState,
    },
}

impl CallParticipantState {
    pub fn is_connected(&self) -> bool {
        matches!(self, CallParticipantState::Connected { .. })
    }

    /// True only for a connected participant whose camera is on
    pub fn is_sending_video(&self) -> bool {
        matches!(
            self,
            CallParticipantState::Connected {
                video: VideoState::Started,
                ..
            }
        )
    }
}

/// How the call grid is being presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PresentationMode {
    /// Static video wall with every stream
    #[default]
    AllVideoStreams,
    /// Strip focused on whoever is talking
    ActiveSpeakers,
}

/// Which roster the call session should hand back
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RosterKind {
    All,
    SmoothedActiveSpeakers,
}

impl PresentationMode {
    /// The roster kind to request from the call session for this mode
    pub fn roster_kind(self) -> RosterKind {
        match self {
            PresentationMode::AllVideoStreams => RosterKind::All,
            PresentationMode::ActiveSpeakers => RosterKind::SmoothedActiveSpeakers,
        }
    }
}

/// Which participants become streams
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StreamSelectionPolicy {
    /// Connected participants with their camera on
    #[default]
    VideoOnly,
    /// Every connected participant, camera or not (large conference calls)
    AllConnected,
}

impl StreamSelectionPolicy {
    pub fn admits(self, state: &CallParticipantState) -> bool {
        match self {
            StreamSelectionPolicy::VideoOnly => state.is_sending_video(),
            StreamSelectionPolicy::AllConnected => state.is_connected(),
        }
    }
}
