//! Decision-making for automated seats.
//!
//! - `Tactic`: proposes an action for one half of a turn
//! - `Composite`: ordered tactics with a random legal fallback
//! - `StrategyPair`: the pickup and putdown tactics of one seat
//! - `StrategyCatalog`: named presets and lineup sampling

pub mod catalog;
pub mod tactic;
pub mod tactics;

pub use catalog::StrategyCatalog;
pub use tactic::{Composite, RandomChoice, StrategyPair, Tactic, Tier, Tiered};
pub use tactics::{
    AvoidLoss, BlockOpponent, DifferentCompany, GainMoney, PreferMajority, SameCompany, SeekLoss,
    ShedUnwanted,
};
