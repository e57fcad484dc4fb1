use crate::errors::{BattleEngineError, BattleResult};
use schema::{ActionKind, Actor, Strategy};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleStatus {
    Ongoing,
    PlayerWon,
    OpponentWon,
    Draw,
}

impl BattleStatus {
    pub fn is_terminal(self) -> bool {
        self != BattleStatus::Ongoing
    }
}

/// One side's numbers for the duration of a battle.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CombatantStats {
    pub max_hp: u32,
    pub current_hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub is_defending: bool,
}

impl CombatantStats {
    /// Full-health stats, not defending.
    pub fn new(max_hp: u32, attack: u32, defense: u32) -> BattleResult<Self> {
        let stats = Self {
            max_hp,
            current_hp: max_hp,
            attack,
            defense,
            is_defending: false,
        };
        stats.validate()?;
        Ok(stats)
    }

    pub fn with_current_hp(mut self, current_hp: u32) -> BattleResult<Self> {
        self.current_hp = current_hp;
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> BattleResult<()> {
        if self.max_hp == 0 {
            return Err(BattleEngineError::InvalidStats("max_hp must be positive".to_string()));
        }
        if self.current_hp > self.max_hp {
            return Err(BattleEngineError::InvalidStats(format!(
                "current_hp {} exceeds max_hp {}",
                self.current_hp, self.max_hp
            )));
        }
        if self.attack == 0 {
            return Err(BattleEngineError::InvalidStats("attack must be positive".to_string()));
        }
        Ok(())
    }

    pub fn is_fainted(&self) -> bool {
        self.current_hp == 0
    }

    pub fn hp_fraction(&self) -> f64 {
        self.current_hp as f64 / self.max_hp as f64
    }

    /// Removes up to `amount` HP, never going below zero.
    pub fn take_damage(&mut self, amount: u32) {
        self.current_hp = self.current_hp.saturating_sub(amount);
    }
}

/// What happened when one combatant acted.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TurnOutcome {
    pub actor: Actor,
    pub action: ActionKind,
    pub damage_dealt: u32,
    pub is_critical: bool,
    pub target_hp_after: u32,
}

/// The result of one `resolve_turn` call. `opponent` is `None` when the
/// player's action ended the battle.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TurnResolution {
    pub player: TurnOutcome,
    pub opponent: Option<TurnOutcome>,
    pub status: BattleStatus,
}

impl TurnResolution {
    pub fn outcomes(&self) -> impl Iterator<Item = &TurnOutcome> {
        std::iter::once(&self.player).chain(self.opponent.as_ref())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(try_from = "BattleSnapshot")]
pub struct Battle {
    pub(crate) player: CombatantStats,
    pub(crate) opponent: CombatantStats,
    pub(crate) opponent_strategy: Strategy,
    pub(crate) turn_number: u32,
    pub(crate) is_active: bool,
    pub(crate) log: Vec<String>,
    pub(crate) status: BattleStatus,
}

impl Battle {
    /// Starts from fresh copies of both sides with their stances cleared.
    pub(crate) fn new(
        player: &CombatantStats,
        opponent: &CombatantStats,
        opponent_strategy: Strategy,
    ) -> Self {
        let mut player = player.clone();
        let mut opponent = opponent.clone();
        player.is_defending = false;
        opponent.is_defending = false;

        Self {
            player,
            opponent,
            opponent_strategy,
            turn_number: 0,
            is_active: true,
            log: Vec::new(),
            status: BattleStatus::Ongoing,
        }
    }

    pub fn player(&self) -> &CombatantStats {
        &self.player
    }

    pub fn opponent(&self) -> &CombatantStats {
        &self.opponent
    }

    pub fn opponent_strategy(&self) -> Strategy {
        self.opponent_strategy
    }

    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn status(&self) -> BattleStatus {
        self.status
    }

    pub fn log(&self) -> &[String] {
        &self.log
    }

    /// Player HP as a percentage in `[0, 100]`.
    pub fn player_hp_percent(&self) -> f64 {
        self.player.hp_fraction() * 100.0
    }

    /// Opponent HP as a percentage in `[0, 100]`.
    pub fn opponent_hp_percent(&self) -> f64 {
        self.opponent.hp_fraction() * 100.0
    }

    /// Splits the battle into (acting side, target side).
    pub(crate) fn sides_mut(&mut self, actor: Actor) -> (&mut CombatantStats, &mut CombatantStats) {
        match actor {
            Actor::Player => (&mut self.player, &mut self.opponent),
            Actor::Opponent => (&mut self.opponent, &mut self.player),
        }
    }

    pub(crate) fn finish(&mut self, status: BattleStatus) {
        self.status = status;
        self.is_active = false;
    }
}

/// Wire form of a [`Battle`]. Restoring goes through [`TryFrom`] so a
/// snapshot can never produce a battle that `start_battle` would refuse.
#[derive(Deserialize)]
struct BattleSnapshot {
    player: CombatantStats,
    opponent: CombatantStats,
    opponent_strategy: Strategy,
    turn_number: u32,
    is_active: bool,
    log: Vec<String>,
    status: BattleStatus,
}

impl TryFrom<BattleSnapshot> for Battle {
    type Error = BattleEngineError;

    fn try_from(snapshot: BattleSnapshot) -> BattleResult<Self> {
        snapshot.player.validate()?;
        snapshot.opponent.validate()?;

        if snapshot.is_active == snapshot.status.is_terminal() {
            return Err(BattleEngineError::InvalidStats(format!(
                "is_active {} contradicts status {:?}",
                snapshot.is_active, snapshot.status
            )));
        }
        if !snapshot.status.is_terminal()
            && (snapshot.player.is_fainted() || snapshot.opponent.is_fainted())
        {
            return Err(BattleEngineError::InvalidStats(
                "an ongoing battle cannot have a fainted combatant".to_string(),
            ));
        }

        Ok(Self {
            player: snapshot.player,
            opponent: snapshot.opponent,
            opponent_strategy: snapshot.opponent_strategy,
            turn_number: snapshot.turn_number,
            is_active: snapshot.is_active,
            log: snapshot.log,
            status: snapshot.status,
        })
    }
}
