//! Types downstream clients interact with.
mod errors;
mod report;

pub use errors::{Result, SessionError};
pub use report::{AppliedEffect, AreaAttackReport, ExecutionReport};
