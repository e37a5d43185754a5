//! # startups-engine
//!
//! Rules engine for *Startups*, a card game about collecting shares.
//!
//! Players take turns picking up a card (from the deck, paying into the
//! market, or from the market, collecting what lies on it) and putting one
//! down (into their shares or back into the market). When the deck runs out
//! the majority shareholder of each company collects from everyone else.
//!
//! ## Design Principles
//!
//! 1. **Validate, then mutate**: every rule check happens before the first
//!    change; a rejected action leaves the game untouched.
//!
//! 2. **One source of truth for legality**: the enumerator in `rules::legal`
//!    decides what is legal; resolution and every adapter re-use it.
//!
//! 3. **Explicit state, explicit randomness**: no global lists or global RNG.
//!    `GameConfig` and a seed fully determine a game.
//!
//! ## Modules
//!
//! - `core`: companies, cards, players, actions, RNG, config, errors, state
//! - `zones`: deck and market
//! - `rules`: legal actions, resolution, anti-monopoly tokens
//! - `turn`: pickup/putdown sequencing and the focus-seat batch mode
//! - `strategy`: tactics, composites and the preset catalog for bots
//! - `scoring`: final scoring and the end-of-game lookahead
//! - `python` (feature `python`): PyO3 bindings

pub mod core;
pub mod zones;
pub mod rules;
pub mod turn;
pub mod strategy;
pub mod scoring;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    new_game, Action, ActionPhase, ActionRecord, Card, CardId, Company, CompanyId,
    CompanyRegistry, ConfigError, GameConfig, GameRng, GameState, IllegalReason, Player, PlayerId,
    PlayerMap, RulesError, Table, TableView, Zone,
};

pub use crate::zones::{Deck, Market};

pub use crate::rules::{
    apply_pickup, apply_putdown, legal_pickup_actions, legal_putdown_actions, GameResult,
    Resolution,
};

pub use crate::turn::{TurnMachine, TurnPhase};

pub use crate::strategy::{Composite, StrategyCatalog, StrategyPair, Tactic};

pub use crate::scoring::{estimate_value, score_game, LookaheadEstimate};
