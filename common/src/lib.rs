pub mod event;
pub mod record;

pub use event::{
    EntityId, GrenadeKind, PlayerId, PlayerIdentity, Position, RawEvent, Roster, RosterEntry, Team,
};
pub use record::{BoundaryPhase, CorrelatedRecord, WinReason};
