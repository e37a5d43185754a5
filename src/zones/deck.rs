//! The draw pile.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use crate::core::{Card, CardId, CompanyRegistry, GameRng};

/// Ordered draw pile. Cards are drawn from the front.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Deck {
    cards: VecDeque<Card>,
}

impl Deck {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// One card per issued share, company by company, unshuffled.
    ///
    /// Card IDs are assigned in creation order starting at 0.
    #[must_use]
    pub fn full(companies: &CompanyRegistry) -> Self {
        let mut next_id = 0u32;
        let mut cards = VecDeque::with_capacity(companies.total_cards());
        for company in companies.iter() {
            for _ in 0..company.total_shares {
                cards.push_back(Card::new(CardId::new(next_id), company.id));
                next_id += 1;
            }
        }
        Self { cards }
    }

    #[must_use]
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(self.cards.make_contiguous());
    }

    /// Take the front card.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop_front()
    }

    /// Take up to `count` cards from the front.
    pub fn draw_many(&mut self, count: usize) -> Vec<Card> {
        let count = count.min(self.cards.len());
        self.cards.drain(..count).collect()
    }

    #[must_use]
    pub fn peek(&self) -> Option<&Card> {
        self.cards.front()
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
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CompanyId;

    fn registry() -> CompanyRegistry {
        CompanyRegistry::from_defs(&[("A", 2), ("B", 3)])
    }

    #[test]
    fn test_full_deck_one_card_per_share() {
        let deck = Deck::full(&registry());

        assert_eq!(deck.len(), 5);
        let companies: Vec<_> = deck.iter().map(|c| c.company.0).collect();
        assert_eq!(companies, vec![0, 0, 1, 1, 1]);
        assert!(deck.iter().all(|c| c.coins == 0));

        let ids: Vec<_> = deck.iter().map(|c| c.id.0).collect();
        assert_eq!(ids, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_draw_from_front() {
        let mut deck = Deck::full(&registry());

        let first = deck.draw().unwrap();
        assert_eq!(first.id, CardId::new(0));
        assert_eq!(deck.peek().map(|c| c.id), Some(CardId::new(1)));

        let two = deck.draw_many(2);
        assert_eq!(two.len(), 2);
        assert!(two[1].is(CompanyId::new(1)));
        assert_eq!(deck.len(), 2);

        assert_eq!(deck.draw_many(10).len(), 2);
        assert!(deck.is_empty());
        assert!(deck.draw().is_none());
    }

    #[test]
    fn test_shuffle_is_seeded() {
        let mut a = Deck::full(&CompanyRegistry::from_defs(&[("A", 10), ("B", 10)]));
        let mut b = a.clone();

        a.shuffle(&mut GameRng::new(3));
        b.shuffle(&mut GameRng::new(3));

        let ids_a: Vec<_> = a.iter().map(|c| c.id).collect();
        let ids_b: Vec<_> = b.iter().map(|c| c.id).collect();
        assert_eq!(ids_a, ids_b);
        assert_eq!(ids_a.len(), 20);
    }
}
