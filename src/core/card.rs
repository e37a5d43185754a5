//! Share cards.
//!
//! Every issued share is one `Card`. Cards of the same company are
//! interchangeable for play purposes, so `==` compares companies only.
//! The `CardId` exists so tests and invariant checks can follow an
//! individual card from zone to zone.

use serde::{Deserialize, Serialize};

use super::company::CompanyId;

/// Unique identity of a physical card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// A share card.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub company: CompanyId,
    /// Coins sitting on the card. Only non-zero while the card is in the market.
    pub coins: u32,
}

impl Card {
    #[must_use]
    pub const fn new(id: CardId, company: CompanyId) -> Self {
        Self {
            id,
            company,
            coins: 0,
        }
    }

    /// Check whether this card belongs to `company`.
    #[must_use]
    pub fn is(&self, company: CompanyId) -> bool {
        self.company == company
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.company == other.company
    }
}

impl Eq for Card {}

/// Count the cards of `company` in a slice.
#[must_use]
pub fn count_company(cards: &[Card], company: CompanyId) -> usize {
    cards.iter().filter(|c| c.is(company)).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cards_compare_by_company() {
        let a = Card::new(CardId::new(1), CompanyId::new(0));
        let mut b = Card::new(CardId::new(2), CompanyId::new(0));
        b.coins = 4;
        let c = Card::new(CardId::new(1), CompanyId::new(1));

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_count_company() {
        let cards = [
            Card::new(CardId::new(0), CompanyId::new(0)),
            Card::new(CardId::new(1), CompanyId::new(1)),
            Card::new(CardId::new(2), CompanyId::new(0)),
        ];

        assert_eq!(count_company(&cards, CompanyId::new(0)), 2);
        assert_eq!(count_company(&cards, CompanyId::new(1)), 1);
        assert_eq!(count_company(&cards, CompanyId::new(2)), 0);
    }
}
