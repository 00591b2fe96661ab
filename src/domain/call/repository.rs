//! Roster port

use crate::domain::call::entity::Participant;
use crate::domain::call::value_object::RosterKind;

/// Source of the current call roster
///
/// Defined in the domain layer as a trait (port) and implemented by the
/// call session (adapter). The returned order is authoritative: for
/// `SmoothedActiveSpeakers` the provider has already ordered by speaking
/// activity.
#[cfg_attr(test, mockall::automock)]
pub trait RosterProvider: Send + Sync {
    /// Current participants of the requested kind
    fn participants(&self, kind: RosterKind) -> Vec<Participant>;
}
