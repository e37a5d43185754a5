//! The `Tactic` trait and the pieces strategies are assembled from.
//!
//! A tactic looks at the table and proposes an action for one half of a
//! turn, or declines. Tactics are read-only: the proposal still goes through
//! full validation before anything changes.

use std::fmt;
use std::sync::Arc;

use crate::core::{Action, ActionPhase, GameRng, PlayerId, Table};
use crate::rules::legal_actions;

// =============================================================================
// Tactic
// =============================================================================

/// Decision function for one half of a turn.
pub trait Tactic: Send + Sync {
    /// Propose an action for `player`, or `None` to decline.
    fn propose(&self, table: &Table, player: PlayerId, rng: &mut GameRng) -> Option<Action>;

    /// Short name used in logs.
    fn name(&self) -> &str {
        "custom"
    }
}

impl<F> Tactic for F
where
    F: Fn(&Table, PlayerId, &mut GameRng) -> Option<Action> + Send + Sync,
{
    fn propose(&self, table: &Table, player: PlayerId, rng: &mut GameRng) -> Option<Action> {
        self(table, player, rng)
    }
}

/// Uniformly random legal action.
#[derive(Clone, Copy, Debug)]
pub struct RandomChoice(pub ActionPhase);

impl Tactic for RandomChoice {
    fn propose(&self, table: &Table, player: PlayerId, rng: &mut GameRng) -> Option<Action> {
        let actions = legal_actions(table, player, self.0);
        rng.choose(&actions).copied()
    }

    fn name(&self) -> &str {
        "random"
    }
}

// =============================================================================
// Tiered choice
// =============================================================================

/// Candidates sorted into good, ok and bad buckets.
///
/// `pick` chooses uniformly from the best non-empty bucket.
#[derive(Clone, Debug, Default)]
pub struct Tiered {
    pub good: Vec<Action>,
    pub ok: Vec<Action>,
    pub bad: Vec<Action>,
}

/// Bucket a candidate goes into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tier {
    Good,
    Ok,
    Bad,
}

impl Tiered {
    /// Classify every action with `classify`.
    pub fn classify(actions: &[Action], mut classify: impl FnMut(Action) -> Tier) -> Self {
        let mut tiers = Self::default();
        for &action in actions {
            match classify(action) {
                Tier::Good => tiers.good.push(action),
                Tier::Ok => tiers.ok.push(action),
                Tier::Bad => tiers.bad.push(action),
            }
        }
        tiers
    }

    pub fn pick(&self, rng: &mut GameRng) -> Option<Action> {
        [&self.good, &self.ok, &self.bad]
            .into_iter()
            .find(|bucket| !bucket.is_empty())
            .and_then(|bucket| rng.choose(bucket).copied())
    }
}

// =============================================================================
// Composite
// =============================================================================

/// Ordered list of tactics for one phase.
///
/// The first proposal wins; if every tactic declines, a uniformly random
/// legal action is returned so an automated seat always moves.
#[derive(Clone)]
pub struct Composite {
    name: String,
    phase: ActionPhase,
    tactics: Vec<Arc<dyn Tactic>>,
}

impl Composite {
    pub fn new(name: impl Into<String>, phase: ActionPhase) -> Self {
        Self {
            name: name.into(),
            phase,
            tactics: Vec::new(),
        }
    }

    #[must_use]
    pub fn then(mut self, tactic: impl Tactic + 'static) -> Self {
        self.tactics.push(Arc::new(tactic));
        self
    }

    #[must_use]
    pub fn phase(&self) -> ActionPhase {
        self.phase
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tactics.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tactics.is_empty()
    }
}

impl Tactic for Composite {
    fn propose(&self, table: &Table, player: PlayerId, rng: &mut GameRng) -> Option<Action> {
        self.tactics
            .iter()
            .find_map(|t| t.propose(table, player, rng))
            .or_else(|| RandomChoice(self.phase).propose(table, player, rng))
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Debug for Composite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.tactics.iter().map(|t| t.name()).collect();
        f.debug_struct("Composite")
            .field("name", &self.name)
            .field("phase", &self.phase)
            .field("tactics", &names)
            .finish()
    }
}

// =============================================================================
// StrategyPair
// =============================================================================

/// The pickup and putdown tactics of one automated seat.
#[derive(Clone)]
pub struct StrategyPair {
    pub name: String,
    pub pickup: Arc<dyn Tactic>,
    pub putdown: Arc<dyn Tactic>,
}

impl StrategyPair {
    pub fn new(
        name: impl Into<String>,
        pickup: impl Tactic + 'static,
        putdown: impl Tactic + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            pickup: Arc::new(pickup),
            putdown: Arc::new(putdown),
        }
    }

    /// Random legal choices for both halves.
    #[must_use]
    pub fn random() -> Self {
        Self::new(
            "random",
            RandomChoice(ActionPhase::Pickup),
            RandomChoice(ActionPhase::Putdown),
        )
    }

    /// The tactic for `phase`.
    #[must_use]
    pub fn for_phase(&self, phase: ActionPhase) -> &dyn Tactic {
        match phase {
            ActionPhase::Pickup => self.pickup.as_ref(),
            ActionPhase::Putdown => self.putdown.as_ref(),
        }
    }
}

impl fmt::Debug for StrategyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StrategyPair")
            .field("name", &self.name)
            .field("pickup", &self.pickup.name())
            .field("putdown", &self.putdown.name())
            .finish()
    }
}
