//! The rules of play.
//!
//! - `legal`: which pickups and putdowns a seat may choose
//! - `resolve`: validating and applying a single action
//! - `tokens`: anti-monopoly token grants and revocations
//! - `engine`: dispatch plus the `GameResult` of a finished game
//!
//! Everything here operates on a `Table` and never decides *who* acts next;
//! that is the job of `turn::TurnMachine`.

pub mod engine;
pub mod legal;
pub mod resolve;
pub mod tokens;

pub use engine::{apply_action, GameResult};
pub use legal::{
    check_pickup, check_putdown, deck_pickup_cost, legal_actions, legal_pickup_actions,
    legal_putdown_actions, pickup_choices, putdown_choices,
};
pub use resolve::{apply_pickup, apply_putdown, Resolution};
pub use tokens::{
    aggregate_shares, eligibility_threshold, grant_token, majority_holder, monopoly_exists,
    revoke_token, settle_tokens, strict_leader, token_holder,
};
