//! Call bounded context - participants, streams and how they are selected

pub mod entity;
pub mod repository;
pub mod service;
pub mod stream;
pub mod value_object;

pub use entity::Participant;
pub use repository::RosterProvider;
pub use service::StreamSelector;
pub use stream::{Stream, StreamArrangement, StreamId};
pub use value_object::{
    ActiveSpeakerState, CallParticipantState, MicrophoneState, PresentationMode, RosterKind,
    StreamSelectionPolicy, VideoState,
};
