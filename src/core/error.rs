//! Error types.
//!
//! Every rules failure is recoverable: the engine reports it and leaves the
//! table untouched, and the caller decides whether to retry, penalize or
//! resample.

use thiserror::Error;

use super::action::Action;
use super::player::PlayerId;

/// Shared zone named in an `EmptyZone` error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Zone {
    Deck,
    Market,
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Zone::Deck => write!(f, "deck"),
            Zone::Market => write!(f, "market"),
        }
    }
}

/// Why an action is not legal right now.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum IllegalReason {
    #[error("action belongs to the other half of the turn")]
    WrongPhase,
    #[error("needs {required} coins, has {available}")]
    InsufficientFunds { required: u32, available: i64 },
    #[error("player holds this company's anti-monopoly token")]
    TokenHeld,
    #[error("no card of this company in the market")]
    NotInMarket,
    #[error("no card of this company in hand")]
    NotInHand,
    #[error("card was just picked up and cannot go back to the market")]
    JustPickedUp,
    #[error("it is {0}'s turn")]
    NotYourTurn(PlayerId),
    #[error("the game is over")]
    GameOver,
}

/// Failure of a rules operation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RulesError {
    #[error("illegal action {action}: {reason}")]
    IllegalAction {
        action: Action,
        reason: IllegalReason,
    },

    #[error("nothing to take from the {0}")]
    EmptyZone(Zone),

    #[error("inconsistent state: {0}")]
    InconsistentState(String),
}

impl RulesError {
    pub(crate) fn illegal(action: Action, reason: IllegalReason) -> Self {
        RulesError::IllegalAction { action, reason }
    }
}

/// Invalid game configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("player count must be 1-255, got {0}")]
    PlayerCount(usize),

    #[error("{humans} humans requested for {players} players")]
    TooManyHumans { humans: usize, players: usize },

    #[error("no companies configured")]
    NoCompanies,

    #[error("company {0:?} listed twice")]
    DuplicateCompany(String),

    #[error("company {0:?} issues no shares")]
    EmptyCompany(String),

    #[error("at most 256 companies supported, got {0}")]
    TooManyCompanies(usize),

    #[error("deck of {cards} cards leaves nothing to draw after {needed} removed and dealt cards")]
    DeckTooSmall { cards: usize, needed: usize },

    #[error("unknown bot strategy {0:?}")]
    UnknownStrategy(String),

    #[error("seat {0} is not automated but the focus seat is {1}")]
    HumanBesideFocus(PlayerId, PlayerId),

    #[error("bot lineup is empty but {0} seats are automated")]
    EmptyLineup(usize),

    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
}
