//! Plain data types describing units on the battlefield.

mod buff;
mod common;
mod unit;

pub use buff::ActiveBuff;
pub use common::{Position, ResourceMeter, TeamId, UnitId};
pub use unit::{AreaProfile, AttackProfile, UnitState};
