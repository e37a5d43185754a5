//! Serializable snapshot of the table from one seat's point of view.
//!
//! Contains everything public (coins, shares, tokens, market, deck size,
//! hand sizes) plus the viewer's own hand. Other hands and the set-aside
//! cards are never included.

use serde::{Deserialize, Serialize};

use super::company::CompanyId;
use super::player::PlayerId;
use super::state::Table;

/// One company's presence in the market.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketSlot {
    pub company: CompanyId,
    pub count: usize,
    /// Coins a market pickup of this company would collect.
    pub max_coins: u32,
}

/// Public information about one seat.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatView {
    pub player: PlayerId,
    pub coins: i64,
    pub hand_size: usize,
    /// Share counts indexed by company.
    pub shares: Vec<usize>,
    pub tokens: Vec<CompanyId>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableView {
    pub viewer: PlayerId,
    pub companies: Vec<String>,
    /// The viewer's hand, by company.
    pub hand: Vec<CompanyId>,
    pub last_pickup: Option<CompanyId>,
    pub seats: Vec<SeatView>,
    pub market: Vec<MarketSlot>,
    pub deck_size: usize,
}

impl TableView {
    #[must_use]
    pub fn new(table: &Table, viewer: PlayerId) -> Self {
        let company_count = table.companies.len();
        let me = table.player(viewer);

        let seats = table
            .players
            .values()
            .map(|p| {
                let mut shares = vec![0; company_count];
                for card in &p.shares {
                    shares[card.company.index()] += 1;
                }
                SeatView {
                    player: p.id,
                    coins: p.coins,
                    hand_size: p.hand.len(),
                    shares,
                    tokens: p.tokens.iter().copied().collect(),
                }
            })
            .collect();

        let market = table
            .market
            .companies()
            .into_iter()
            .map(|company| MarketSlot {
                company,
                count: table.market.count(company),
                max_coins: table.market.max_coins(company),
            })
            .collect();

        Self {
            viewer,
            companies: table.companies.iter().map(|c| c.name.clone()).collect(),
            hand: me.hand.iter().map(|c| c.company).collect(),
            last_pickup: me.last_pickup.map(|c| c.company),
            seats,
            market,
            deck_size: table.deck.len(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
