use crate::battle::rng::RandomSource;
use crate::battle::state::CombatantStats;
use schema::{ActionKind, DamageTuning};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DamageRoll {
    pub amount: u32,
    pub is_critical: bool,
}

impl DamageRoll {
    pub const NONE: DamageRoll = DamageRoll {
        amount: 0,
        is_critical: false,
    };
}

/// Calculate the damage `attacker` deals to `defender` with `action`.
///
/// The pipeline, in order: base multiplier, special multiplier, random
/// variance, critical hit, defense subtraction (floored at zero), defensive
/// stance, rounding. A `Defend` action deals nothing and draws no randomness.
pub fn compute_damage(
    attacker: &CombatantStats,
    defender: &CombatantStats,
    action: ActionKind,
    tuning: &DamageTuning,
    rng: &mut dyn RandomSource,
) -> DamageRoll {
    if !action.deals_damage() {
        return DamageRoll::NONE;
    }

    let mut damage = attacker.attack as f64 * tuning.base_multiplier;
    if action == ActionKind::Special {
        damage *= tuning.special_multiplier;
    }

    // 0.5 maps to a factor of exactly 1.0
    let variance_roll = rng.next_unit("damage variance");
    damage *= 1.0 + (variance_roll * 2.0 - 1.0) * tuning.random_variance;

    let is_critical = rng.next_unit("critical hit") < tuning.critical_chance;
    if is_critical {
        damage *= tuning.critical_multiplier;
    }

    damage = (damage - defender.defense as f64).max(0.0);

    if defender.is_defending {
        damage *= tuning.defend_multiplier;
    }

    DamageRoll {
        amount: damage.round() as u32,
        is_critical,
    }
}
