//! Shared zones: the draw pile and the market.
//!
//! Hands and shares belong to players (`core::Player`); the set-aside pile
//! lives on the `Table`.

pub mod deck;
pub mod market;

pub use deck::Deck;
pub use market::Market;
