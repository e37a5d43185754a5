//! Player identification, per-player storage and the player record.
//!
//! ## PlayerId
//!
//! Type-safe seat identifier supporting 1-255 players. Seats are 0-based and
//! also define turn order.
//!
//! ## PlayerMap
//!
//! Per-player storage backed by `Vec` for O(1) access by `PlayerId`.
//!
//! ## Player
//!
//! Coins, hand, shares, anti-monopoly tokens and the optional strategy pair
//! of one seat.

use im::OrdSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::ops::{Index, IndexMut};

use super::card::{count_company, Card};
use super::company::CompanyId;
use crate::strategy::StrategyPair;

/// Seat identifier supporting 1-255 players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The seat that plays after this one.
    #[must_use]
    pub fn next(self, player_count: usize) -> Self {
        Self(((self.index() + 1) % player_count) as u8)
    }

    /// Iterate over all seats for a game with `player_count` players.
    ///
    /// ```
    /// use startups_engine::core::PlayerId;
    ///
    /// let seats: Vec<_> = PlayerId::all(4).collect();
    /// assert_eq!(seats.len(), 4);
    /// assert_eq!(seats[3], PlayerId::new(3));
    /// assert_eq!(seats[3].next(4), PlayerId::new(0));
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-player data storage with O(1) access.
///
/// ```
/// use startups_engine::core::{PlayerId, PlayerMap};
///
/// let mut coins: PlayerMap<i64> = PlayerMap::with_value(4, 10);
/// coins[PlayerId::new(1)] -= 3;
///
/// assert_eq!(coins[PlayerId::new(0)], 10);
/// assert_eq!(coins[PlayerId::new(1)], 7);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        let data = (0..player_count as u8)
            .map(|i| factory(PlayerId(i)))
            .collect();

        Self { data }
    }

    pub fn with_value(player_count: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::new(player_count, |_| value.clone())
    }

    pub fn with_default(player_count: usize) -> Self
    where
        T: Default,
    {
        Self::new(player_count, |_| T::default())
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        self.data
            .iter_mut()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over values in seat order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.data.iter_mut()
    }

    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        (0..self.data.len() as u8).map(PlayerId)
    }

    /// Build a new map by transforming every entry.
    pub fn map<U>(&self, f: impl Fn(PlayerId, &T) -> U) -> PlayerMap<U> {
        PlayerMap {
            data: self.iter().map(|(p, v)| f(p, v)).collect(),
        }
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

/// Cards held in hand. Hands stay at the dealt size plus at most one card.
pub type Hand = SmallVec<[Card; 4]>;

/// One seat at the table.
#[derive(Clone, Debug)]
pub struct Player {
    pub id: PlayerId,

    /// Coin balance. Scoring can push it below zero.
    pub coins: i64,

    pub starting_coins: i64,

    /// Cards drawn but not yet committed.
    pub hand: Hand,

    /// Cards committed permanently. These decide majorities and scoring.
    pub shares: Vec<Card>,

    /// Companies whose anti-monopoly token this player holds.
    pub tokens: OrdSet<CompanyId>,

    /// Card taken by the most recent pickup; cleared by any putdown.
    pub last_pickup: Option<Card>,

    /// Seat is driven by a person at a prompt.
    pub human: bool,

    /// Decision functions for automated seats. `None` means an external
    /// caller (prompt loop, agent) picks this seat's actions.
    pub strategy: Option<StrategyPair>,
}

impl Player {
    #[must_use]
    pub fn new(id: PlayerId, coins: i64) -> Self {
        Self {
            id,
            coins,
            starting_coins: coins,
            hand: Hand::new(),
            shares: Vec::new(),
            tokens: OrdSet::new(),
            last_pickup: None,
            human: false,
            strategy: None,
        }
    }

    #[must_use]
    pub fn human(mut self) -> Self {
        self.human = true;
        self
    }

    #[must_use]
    pub fn with_strategy(mut self, strategy: StrategyPair) -> Self {
        self.strategy = Some(strategy);
        self
    }

    #[must_use]
    pub fn is_automated(&self) -> bool {
        self.strategy.is_some()
    }

    #[must_use]
    pub fn has_token(&self, company: CompanyId) -> bool {
        self.tokens.contains(&company)
    }

    #[must_use]
    pub fn share_count(&self, company: CompanyId) -> usize {
        count_company(&self.shares, company)
    }

    #[must_use]
    pub fn hand_count(&self, company: CompanyId) -> usize {
        count_company(&self.hand, company)
    }

    /// Shares plus hand cards of `company`: what the seat will own at the end
    /// if nothing leaves its hand.
    #[must_use]
    pub fn holding(&self, company: CompanyId) -> usize {
        self.share_count(company) + self.hand_count(company)
    }

    /// Was the last pickup a card of `company`?
    #[must_use]
    pub fn just_picked_up(&self, company: CompanyId) -> bool {
        self.last_pickup.is_some_and(|c| c.is(company))
    }

    /// Position in hand of the first card of `company`.
    #[must_use]
    pub fn find_in_hand(&self, company: CompanyId) -> Option<usize> {
        self.hand.iter().position(|c| c.is(company))
    }

    /// Move every hand card into shares without touching tokens.
    pub fn fold_hand_into_shares(&mut self) {
        self.shares.extend(self.hand.drain(..));
        self.last_pickup = None;
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} (coins {}, hand {}, shares {}, tokens {})",
            self.id,
            self.coins,
            self.hand.len(),
            self.shares.len(),
            self.tokens.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::card::CardId;

    fn card(id: u32, company: u8) -> Card {
        Card::new(CardId::new(id), CompanyId::new(company))
    }

    #[test]
    fn test_player_id_next_wraps() {
        assert_eq!(PlayerId::new(0).next(3), PlayerId::new(1));
        assert_eq!(PlayerId::new(2).next(3), PlayerId::new(0));
        assert_eq!(format!("{}", PlayerId::new(2)), "Player 2");
    }

    #[test]
    fn test_player_map_new_and_map() {
        let map: PlayerMap<i64> = PlayerMap::new(3, |p| p.index() as i64 * 10);
        assert_eq!(map[PlayerId::new(2)], 20);

        let doubled = map.map(|_, v| v * 2);
        assert_eq!(doubled[PlayerId::new(1)], 20);
        assert_eq!(doubled.player_count(), 3);
    }

    #[test]
    #[should_panic(expected = "Must have at least 1 player")]
    fn test_player_map_zero_players() {
        let _: PlayerMap<i32> = PlayerMap::with_value(0, 0);
    }

    #[test]
    fn test_holding_counts_hand_and_shares() {
        let mut player = Player::new(PlayerId::new(0), 10);
        player.hand.push(card(0, 1));
        player.hand.push(card(1, 2));
        player.shares.push(card(2, 1));

        assert_eq!(player.share_count(CompanyId::new(1)), 1);
        assert_eq!(player.hand_count(CompanyId::new(1)), 1);
        assert_eq!(player.holding(CompanyId::new(1)), 2);
        assert_eq!(player.holding(CompanyId::new(0)), 0);
        assert_eq!(player.find_in_hand(CompanyId::new(2)), Some(1));
    }

    #[test]
    fn test_just_picked_up_matches_company() {
        let mut player = Player::new(PlayerId::new(0), 10);
        assert!(!player.just_picked_up(CompanyId::new(0)));

        player.last_pickup = Some(card(7, 0));
        assert!(player.just_picked_up(CompanyId::new(0)));
        assert!(!player.just_picked_up(CompanyId::new(1)));
    }

    #[test]
    fn test_fold_hand_into_shares() {
        let mut player = Player::new(PlayerId::new(1), 10);
        player.hand.push(card(0, 0));
        player.hand.push(card(1, 0));
        player.last_pickup = Some(card(1, 0));

        player.fold_hand_into_shares();

        assert!(player.hand.is_empty());
        assert_eq!(player.share_count(CompanyId::new(0)), 2);
        assert!(player.last_pickup.is_none());
        assert!(player.tokens.is_empty());
    }
}
