//! Resolution context for turn-based battles.
//!
//! This crate wires the pure rules of `tactics-core` into a session object
//! that callers construct once per battle and pass around explicitly. A
//! [`BattleSession`] owns the action registry, the pending queue, the combat
//! configuration, per-unit turn phases and running statistics.
//!
//! Modules are organized by responsibility:
//! - [`session`] hosts the session and its builder
//! - [`api`] exposes the error and report types downstream clients consume
//! - `statistics` keeps the lock-free counters internal to the crate
pub mod api;
pub mod session;

mod statistics;

pub use api::{AppliedEffect, AreaAttackReport, ExecutionReport, Result, SessionError};
pub use session::{BattleSession, SessionBuilder};
pub use statistics::{ActionStatistics, StatisticsSnapshot};
