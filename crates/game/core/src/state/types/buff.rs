use crate::action::ActionId;
use crate::stats::BuffStat;

use super::UnitId;

/// A buff currently affecting a unit.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActiveBuff {
    /// Stat the buff adjusts.
    pub stat: BuffStat,

    /// Signed flat adjustment.
    pub magnitude: i32,

    /// Turn ends left before expiry. `None` lasts until cleared.
    pub remaining: Option<u32>,

    /// Action that applied the buff.
    pub source_action: ActionId,

    /// Unit that applied the buff.
    pub source_unit: UnitId,
}

impl ActiveBuff {
    /// Counts down one turn end. Returns true once the buff has expired.
    pub fn tick(&mut self) -> bool {
        match self.remaining.as_mut() {
            Some(turns) => {
                *turns = turns.saturating_sub(1);
                *turns == 0
            }
            None => false,
        }
    }

    pub fn is_permanent(&self) -> bool {
        self.remaining.is_none()
    }
}
