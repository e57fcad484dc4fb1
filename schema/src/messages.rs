use crate::action_types::{ActionKind, Actor};
use serde::{Deserialize, Serialize};

/// Placeholder substituted with the damage amount in damage templates.
pub const DAMAGE_PLACEHOLDER: &str = "{damage}";

/// Templates for a damaging action, one per actor and crit flag.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DamageMessages {
    pub player: String,
    pub opponent: String,
    pub player_crit: String,
    pub opponent_crit: String,
}

/// Templates for the defensive stance. A stance never crits.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StanceMessages {
    pub player: String,
    pub opponent: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct MessageTemplates {
    pub attack: DamageMessages,
    pub defend: StanceMessages,
    pub special: DamageMessages,
    pub victory: String,
    pub defeat: String,
    pub draw: String,
    pub forfeit: String,
}

impl MessageTemplates {
    /// Looks up the template for an action. `is_critical` is ignored for `Defend`.
    pub fn template(&self, actor: Actor, action: ActionKind, is_critical: bool) -> &str {
        let damage_messages = match action {
            ActionKind::Attack => &self.attack,
            ActionKind::Special => &self.special,
            ActionKind::Defend => {
                return match actor {
                    Actor::Player => &self.defend.player,
                    Actor::Opponent => &self.defend.opponent,
                };
            }
        };

        match (actor, is_critical) {
            (Actor::Player, false) => &damage_messages.player,
            (Actor::Player, true) => &damage_messages.player_crit,
            (Actor::Opponent, false) => &damage_messages.opponent,
            (Actor::Opponent, true) => &damage_messages.opponent_crit,
        }
    }

    /// Renders the template for an action with the damage amount substituted.
    pub fn render(&self, actor: Actor, action: ActionKind, is_critical: bool, damage: u32) -> String {
        self.template(actor, action, is_critical)
            .replace(DAMAGE_PLACEHOLDER, &damage.to_string())
    }
}

impl Default for MessageTemplates {
    fn default() -> Self {
        Self {
            attack: DamageMessages {
                player: "Your pet attacks for {damage} damage!".to_string(),
                opponent: "Opponent attacks for {damage} damage!".to_string(),
                player_crit: "Critical hit! Your pet deals {damage} damage!".to_string(),
                opponent_crit: "Critical hit! Opponent deals {damage} damage!".to_string(),
            },
            defend: StanceMessages {
                player: "Your pet takes a defensive stance!".to_string(),
                opponent: "Opponent is defending!".to_string(),
            },
            special: DamageMessages {
                player: "Your pet uses a special attack for {damage} damage!".to_string(),
                opponent: "Opponent uses a special attack for {damage} damage!".to_string(),
                player_crit: "Devastating special! Your pet deals {damage} damage!".to_string(),
                opponent_crit: "Devastating special! Opponent deals {damage} damage!".to_string(),
            },
            victory: "Victory! Your pet won the battle!".to_string(),
            defeat: "Defeat! Your pet lost the battle.".to_string(),
            draw: "The battle ended in a draw!".to_string(),
            forfeit: "Your pet withdrew from the battle.".to_string(),
        }
    }
}
