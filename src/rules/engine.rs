//! Table-level rule entry points and the game result.
//!
//! `apply_action` routes an action to the right half-turn resolver; callers
//! that sequence turns themselves (tests, adapters) use it
//! directly, while `GameState` adds turn ownership on top.

use serde::{Deserialize, Serialize};

use super::resolve::{apply_pickup, apply_putdown, Resolution};
use crate::core::{Action, ActionPhase, PlayerId, RulesError, Table};

/// Result of a completed game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Several seats tied on the highest coin total, in seat order.
    Winners(Vec<PlayerId>),
}

impl GameResult {
    /// Check if a player won (alone or tied).
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Winners(ps) => ps.contains(&player),
        }
    }

    /// The winning seat; on a tie, the lowest seat among the tied.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self {
            GameResult::Winner(p) => Some(*p),
            GameResult::Winners(ps) => ps.first().copied(),
        }
    }

    /// Build a result from the seats sharing the top score.
    #[must_use]
    pub fn from_leaders(mut leaders: Vec<PlayerId>) -> Self {
        leaders.sort_unstable();
        if leaders.len() == 1 {
            GameResult::Winner(leaders[0])
        } else {
            GameResult::Winners(leaders)
        }
    }
}

/// Resolve `action` for `player`, whichever half of the turn it belongs to.
pub fn apply_action(
    table: &mut Table,
    player: PlayerId,
    action: Action,
) -> Result<Resolution, RulesError> {
    match action.phase() {
        ActionPhase::Pickup => apply_pickup(table, player, action),
        ActionPhase::Putdown => apply_putdown(table, player, action),
    }
}
