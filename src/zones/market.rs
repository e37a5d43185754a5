//! The market: face-up cards carrying coins.
//!
//! Every deck pickup by a player without the matching token drops one coin on
//! each market card; picking a card up from the market collects those coins.

use im::OrdSet;
use serde::{Deserialize, Serialize};

use crate::core::{Card, CompanyId};

/// Priced multiset of cards, kept in insertion order.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Market {
    cards: Vec<Card>,
}

impl Market {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Offer a card. It enters at zero coins.
    pub fn put(&mut self, mut card: Card) {
        card.coins = 0;
        self.cards.push(card);
    }

    #[must_use]
    pub fn contains(&self, company: CompanyId) -> bool {
        self.cards.iter().any(|c| c.is(company))
    }

    #[must_use]
    pub fn count(&self, company: CompanyId) -> usize {
        self.cards.iter().filter(|c| c.is(company)).count()
    }

    /// Index of the richest card of `company`; the earliest inserted wins ties.
    #[must_use]
    pub fn richest(&self, company: CompanyId) -> Option<usize> {
        let mut best: Option<(usize, u32)> = None;
        for (i, card) in self.cards.iter().enumerate() {
            if card.is(company) && best.map_or(true, |(_, coins)| card.coins > coins) {
                best = Some((i, card.coins));
            }
        }
        best.map(|(i, _)| i)
    }

    /// Coins on the richest card of `company` (0 if none).
    #[must_use]
    pub fn max_coins(&self, company: CompanyId) -> u32 {
        self.richest(company).map_or(0, |i| self.cards[i].coins)
    }

    /// Remove the card at `index`, paying out its coins.
    ///
    /// Returns the card (with coins reset to zero) and the coins collected.
    pub fn take(&mut self, index: usize) -> Option<(Card, u32)> {
        if index >= self.cards.len() {
            return None;
        }
        let mut card = self.cards.remove(index);
        let coins = std::mem::take(&mut card.coins);
        Some((card, coins))
    }

    /// Cards a deck pickup must pay for: everything not covered by `tokens`.
    #[must_use]
    pub fn cost_for(&self, tokens: &OrdSet<CompanyId>) -> u32 {
        self.cards
            .iter()
            .filter(|c| !tokens.contains(&c.company))
            .count() as u32
    }

    /// Drop one coin on every card not covered by `tokens`.
    pub fn raise_prices(&mut self, tokens: &OrdSet<CompanyId>) {
        for card in self.cards.iter_mut().filter(|c| !tokens.contains(&c.company)) {
            card.coins += 1;
        }
    }

    /// Distinct companies on offer, in company order.
    #[must_use]
    pub fn companies(&self) -> Vec<CompanyId> {
        let mut companies: Vec<_> = self.cards.iter().map(|c| c.company).collect();
        companies.sort_unstable();
        companies.dedup();
        companies
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Total coins sitting on market cards.
    #[must_use]
    pub fn total_coins(&self) -> u64 {
        self.cards.iter().map(|c| u64::from(c.coins)).sum()
    }
}
