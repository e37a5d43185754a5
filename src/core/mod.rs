//! Core engine types: companies, cards, players, actions, RNG, configuration,
//! errors and the table/game state.
//!
//! Everything here is independent of how seats are driven. Strategies,
//! scoring and turn sequencing live in their own modules and only read or
//! mutate these types.

pub mod company;
pub mod card;
pub mod player;
pub mod rng;
pub mod config;
pub mod action;
pub mod error;
pub mod state;
pub mod view;

pub use company::{Company, CompanyId, CompanyRegistry};
pub use card::{count_company, Card, CardId};
pub use player::{Hand, Player, PlayerId, PlayerMap};
pub use rng::GameRng;
pub use config::{CompanyDef, GameConfig, DEFAULT_COMPANIES, EXTRA_COMPANIES};
pub use action::{Action, ActionPhase, ActionRecord};
pub use error::{ConfigError, IllegalReason, RulesError, Zone};
pub use state::{new_game, GameState, Table};
pub use view::{MarketSlot, SeatView, TableView};
