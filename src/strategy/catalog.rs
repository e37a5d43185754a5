//! Named strategy presets for automated seats.

use crate::core::ActionPhase::{Pickup, Putdown};
use crate::core::GameRng;

use super::tactic::{Composite, RandomChoice, StrategyPair, Tactic};
use super::tactics::{
    AvoidLoss, BlockOpponent, DifferentCompany, GainMoney, PreferMajority, SameCompany, SeekLoss,
    ShedUnwanted,
};

/// Preset names in catalog order.
const PRESETS: [&str; 12] = [
    "random",
    "avoid_loss",
    "seek_loss",
    "same_cards",
    "different_cards",
    "gain_money",
    "avoid_seek",
    "seek_avoid",
    "money_same",
    "gain_random",
    "random_avoid",
    "majority_blocker",
];

/// Build a pair from single tactics, each wrapped with a random fallback.
fn pair(name: &str, pickup: impl Tactic + 'static, putdown: impl Tactic + 'static) -> StrategyPair {
    StrategyPair::new(
        name,
        Composite::new(format!("{name}/pickup"), Pickup).then(pickup),
        Composite::new(format!("{name}/putdown"), Putdown).then(putdown),
    )
}

/// Lookup table of named strategies.
///
/// ```
/// use startups_engine::core::GameRng;
/// use startups_engine::strategy::StrategyCatalog;
///
/// let catalog = StrategyCatalog::standard();
/// assert!(catalog.contains("avoid_loss"));
/// assert_eq!(catalog.get("gain_money").unwrap().name, "gain_money");
///
/// let lineup = catalog.sample_lineup(&mut GameRng::new(7), 3, 2);
/// assert_eq!(lineup.len(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct StrategyCatalog {
    names: Vec<&'static str>,
}

impl StrategyCatalog {
    #[must_use]
    pub fn standard() -> Self {
        Self {
            names: PRESETS.to_vec(),
        }
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| *n == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.names.iter().copied()
    }

    /// Build a fresh strategy by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<StrategyPair> {
        if !self.contains(name) {
            return None;
        }
        let strategy = match name {
            "random" => StrategyPair::new(name, RandomChoice(Pickup), RandomChoice(Putdown)),
            "avoid_loss" => pair(name, AvoidLoss(Pickup), AvoidLoss(Putdown)),
            "seek_loss" => pair(name, SeekLoss(Pickup), SeekLoss(Putdown)),
            "same_cards" => pair(name, SameCompany(Pickup), SameCompany(Putdown)),
            "different_cards" => pair(name, DifferentCompany(Pickup), DifferentCompany(Putdown)),
            "gain_money" => pair(name, GainMoney, ShedUnwanted),
            "avoid_seek" => pair(name, AvoidLoss(Pickup), SeekLoss(Putdown)),
            "seek_avoid" => pair(name, SeekLoss(Pickup), AvoidLoss(Putdown)),
            "money_same" => pair(name, GainMoney, SameCompany(Putdown)),
            "gain_random" => pair(name, GainMoney, RandomChoice(Putdown)),
            "random_avoid" => pair(name, RandomChoice(Pickup), AvoidLoss(Putdown)),
            "majority_blocker" => StrategyPair::new(
                name,
                Composite::new("majority_blocker/pickup", Pickup)
                    .then(PreferMajority(Pickup))
                    .then(BlockOpponent(Pickup)),
                Composite::new("majority_blocker/putdown", Putdown)
                    .then(PreferMajority(Putdown))
                    .then(BlockOpponent(Putdown)),
            ),
            _ => return None,
        };
        Some(strategy)
    }

    /// Draw `count` strategies from a pool holding `copies` of every preset,
    /// without replacement. Returns fewer if the pool runs out.
    pub fn sample_lineup(&self, rng: &mut GameRng, count: usize, copies: usize) -> Vec<StrategyPair> {
        let pool: Vec<&str> = self
            .names
            .iter()
            .flat_map(|n| std::iter::repeat(*n).take(copies))
            .collect();
        rng.sample_indices(pool.len(), count)
            .into_iter()
            .filter_map(|i| self.get(pool[i]))
            .collect()
    }
}

impl Default for StrategyCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
