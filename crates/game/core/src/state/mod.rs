//! Battlefield state consumed by the resolution rules.
//!
//! The roster owns unit snapshots for one resolution pass; the turn tracker
//! records where each unit stands in the per-turn state machine. Both are
//! plain data handed in and out by the caller.
pub mod error;
pub mod roster;
pub mod turn;
pub mod types;

pub use error::{PhaseError, RosterError};
pub use roster::Roster;
pub use turn::{TurnTracker, UnitPhase};
pub use types::{
    ActiveBuff, AreaProfile, AttackProfile, Position, ResourceMeter, TeamId, UnitId, UnitState,
};
