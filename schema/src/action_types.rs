use serde::{Deserialize, Serialize};
use std::fmt;
use strum::{EnumIter, EnumString};

/// What a combatant does on its turn.
#[derive(
    Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum ActionKind {
    Attack,
    Defend,
    Special,
}

impl ActionKind {
    /// Only `Attack` and `Special` go through the damage pipeline.
    pub fn deals_damage(self) -> bool {
        !matches!(self, ActionKind::Defend)
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let display_name = match self {
            ActionKind::Attack => "attack",
            ActionKind::Defend => "defend",
            ActionKind::Special => "special",
        };
        write!(f, "{}", display_name)
    }
}

/// The side of the battle an action belongs to.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Actor {
    Player,
    Opponent,
}

impl fmt::Display for Actor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}
