//! Battle simulator.
//!
//! Composition root that loads content, builds a [`BattleSession`] and runs
//! one turn of a scenario through it. The binary in `main.rs` only parses
//! arguments, sets up logging and prints the resulting [`SimulationReport`].
//!
//! [`BattleSession`]: tactics_runtime::BattleSession
pub mod logging;
pub mod simulation;

pub use simulation::{
    AreaAttackOutcome, RejectedOrder, SimulationReport, Simulator, UnitSummary,
};
