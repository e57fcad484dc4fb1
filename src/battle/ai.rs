//! A module for defining AI behaviors for battle opponents.

use crate::battle::rng::RandomSource;
use crate::battle::state::CombatantStats;
use schema::{ActionKind, AiTuning, Strategy, StrategyProfile};

/// A trait for any system that can decide on a battle action.
/// This provides a common interface for different AI difficulties or strategies.
pub trait Behavior {
    /// Inspects the acting combatant and decides on its next action.
    fn decide_action(&self, combatant: &CombatantStats, rng: &mut dyn RandomSource) -> ActionKind;
}

/// Picks actions by weighted chance from a strategy profile, falling back to
/// the low-HP strategy once the combatant is hurt badly enough.
///
/// Stateless: the choice depends only on current HP and the profile weights.
pub struct StrategyAI<'a> {
    tuning: &'a AiTuning,
    strategy: Strategy,
}

impl<'a> StrategyAI<'a> {
    pub fn new(tuning: &'a AiTuning, strategy: Strategy) -> Self {
        Self { tuning, strategy }
    }

    /// The strategy in effect for a combatant at its current HP.
    pub fn active_strategy(&self, combatant: &CombatantStats) -> Strategy {
        if combatant.hp_fraction() < self.tuning.low_hp_threshold {
            self.tuning.low_hp_strategy
        } else {
            self.strategy
        }
    }
}

impl Behavior for StrategyAI<'_> {
    fn decide_action(&self, combatant: &CombatantStats, rng: &mut dyn RandomSource) -> ActionKind {
        let strategy = self.active_strategy(combatant);
        let roll = rng.next_unit("opponent action");

        // Validated configs always carry every profile; attacking is the safe fallback.
        match self.tuning.profile(strategy) {
            Some(profile) => pick_action(profile, roll),
            None => ActionKind::Attack,
        }
    }
}

/// Maps a uniform roll onto the profile: `[0, attack)` attacks,
/// `[attack, attack + defend)` defends, the rest is special.
pub fn pick_action(profile: &StrategyProfile, roll: f64) -> ActionKind {
    if roll < profile.attack_chance {
        ActionKind::Attack
    } else if roll < profile.attack_chance + profile.defend_chance {
        ActionKind::Defend
    } else {
        ActionKind::Special
    }
}
