//! Action representation.
//!
//! A turn is two decisions: a pickup (from the deck, or a company's card
//! from the market) followed by a putdown (a company's card into shares or
//! into the market). `Action` is the tagged variant over all four.

use serde::{Deserialize, Serialize};

use super::company::CompanyId;
use super::player::PlayerId;

/// Which half of a turn an action belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionPhase {
    Pickup,
    Putdown,
}

/// A game action. Equality is by (kind, target company).
///
/// ```
/// use startups_engine::core::{Action, ActionPhase, CompanyId};
///
/// let beer = CompanyId::new(0);
/// assert_eq!(Action::PickupMarket(beer), Action::PickupMarket(beer));
/// assert_ne!(Action::PutdownShares(beer), Action::PutdownMarket(beer));
/// assert_eq!(Action::PickupDeck.phase(), ActionPhase::Pickup);
/// assert_eq!(Action::PickupDeck.target(), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Draw the front card of the deck, paying one coin per priced market card.
    PickupDeck,
    /// Take the richest market card of a company, collecting its coins.
    PickupMarket(CompanyId),
    /// Commit a hand card of a company to shares.
    PutdownShares(CompanyId),
    /// Offer a hand card of a company to the market.
    PutdownMarket(CompanyId),
}

impl Action {
    #[must_use]
    pub const fn phase(self) -> ActionPhase {
        match self {
            Action::PickupDeck | Action::PickupMarket(_) => ActionPhase::Pickup,
            Action::PutdownShares(_) | Action::PutdownMarket(_) => ActionPhase::Putdown,
        }
    }

    /// Target company, if the action has one.
    #[must_use]
    pub const fn target(self) -> Option<CompanyId> {
        match self {
            Action::PickupDeck => None,
            Action::PickupMarket(c) | Action::PutdownShares(c) | Action::PutdownMarket(c) => {
                Some(c)
            }
        }
    }

    /// Every action that can exist for `company_count` companies, whether
    /// legal or not. Adapters use the position in this list as a stable
    /// action index.
    #[must_use]
    pub fn all(company_count: usize) -> Vec<Action> {
        let companies = || (0..company_count.min(256)).map(|i| CompanyId::new(i as u8));
        std::iter::once(Action::PickupDeck)
            .chain(companies().map(Action::PickupMarket))
            .chain(companies().map(Action::PutdownShares))
            .chain(companies().map(Action::PutdownMarket))
            .collect()
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::PickupDeck => write!(f, "pickup_deck"),
            Action::PickupMarket(c) => write!(f, "pickup_market({})", c.0),
            Action::PutdownShares(c) => write!(f, "putdown_shares({})", c.0),
            Action::PutdownMarket(c) => write!(f, "putdown_market({})", c.0),
        }
    }
}

/// A resolved action with metadata for history tracking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    pub player: PlayerId,
    pub action: Action,
    /// Round number when the action was taken (starts at 1).
    pub round: u32,
    /// Sequence number within the game.
    pub sequence: u32,
}

impl ActionRecord {
    #[must_use]
    pub fn new(player: PlayerId, action: Action, round: u32, sequence: u32) -> Self {
        Self {
            player,
            action,
            round,
            sequence,
        }
    }
}
