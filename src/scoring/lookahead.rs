//! End-of-game lookahead for a single seat.
//!
//! Deals the cards the focus seat cannot see to the other seats, scores the
//! game as if it ended now and condenses the focus seat's position into a
//! single value. All work happens on private counts; the table is only read.

use log::trace;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::score::{settle_majorities, share_counts};
use crate::core::{Card, CompanyId, GameRng, PlayerId, PlayerMap, Table};

/// Reward for being the simulated winner (negated for the simulated loser).
pub const PLACE_BONUS: f64 = 5.0;
pub const COINS_WEIGHT: f64 = 0.1;
pub const DISTANCE_WEIGHT: f64 = 0.2;

/// Outcome of one lookahead from the focus seat's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LookaheadEstimate {
    /// Simulated final coins.
    pub coins: i64,
    /// Number of seats that finish strictly ahead (0 = best).
    pub rank: usize,
    /// Simulated coins minus the simulated table average.
    pub distance_from_average: f64,
    /// Weighted summary used as a heuristic value.
    pub value: f64,
}

/// Cards of every company the focus seat has not seen: the full deck minus
/// its own hand and everyone's shares.
fn unseen_companies(table: &Table, focus: PlayerId, original_deck: &[Card]) -> Vec<CompanyId> {
    let mut known: FxHashMap<CompanyId, usize> = FxHashMap::default();
    let visible = table
        .player(focus)
        .hand
        .iter()
        .chain(table.players.values().flat_map(|p| p.shares.iter()));
    for card in visible {
        *known.entry(card.company).or_insert(0) += 1;
    }

    let mut unseen = Vec::with_capacity(original_deck.len());
    for card in original_deck {
        match known.get_mut(&card.company) {
            Some(n) if *n > 0 => *n -= 1,
            _ => unseen.push(card.company),
        }
    }
    unseen
}

/// Estimate how the game would end for `focus` if it ended now.
///
/// The focus seat's hand is scored as shares; every other seat receives
/// `hand_size` cards drawn from the unseen pool, dealt round-robin in seat
/// order. Winner and loser are the first seat with the highest and lowest
/// simulated coins.
pub fn estimate_value(
    table: &Table,
    focus: PlayerId,
    original_deck: &[Card],
    hand_size: usize,
    rng: &mut GameRng,
) -> LookaheadEstimate {
    let mut unseen = unseen_companies(table, focus, original_deck);
    rng.shuffle(&mut unseen);
    trace!("lookahead for {focus}: {} unseen cards", unseen.len());

    let mut counts = share_counts(&table.players, table.companies.len());
    for card in &table.player(focus).hand {
        counts[focus][card.company.index()] += 1;
    }

    let mut deal = unseen.into_iter();
    'dealing: for _ in 0..hand_size {
        for player in table.players.player_ids().filter(|&p| p != focus) {
            let Some(company) = deal.next() else {
                break 'dealing;
            };
            counts[player][company.index()] += 1;
        }
    }

    let mut coins: PlayerMap<i64> = table.players.map(|_, p| p.coins);
    settle_majorities(&counts, &mut coins, &table.companies);

    summarize(&coins, focus)
}

fn summarize(coins: &PlayerMap<i64>, focus: PlayerId) -> LookaheadEstimate {
    let mine = coins[focus];
    let count = coins.player_count() as f64;
    let average = coins.values().map(|&c| c as f64).sum::<f64>() / count;
    let distance = mine as f64 - average;
    let rank = coins.values().filter(|&&c| c > mine).count();

    let mut winner = focus;
    let mut loser = focus;
    for (id, &c) in coins.iter() {
        if c > coins[winner] || (c == coins[winner] && id < winner) {
            winner = id;
        }
        if c < coins[loser] || (c == coins[loser] && id < loser) {
            loser = id;
        }
    }

    let place = if winner == focus {
        PLACE_BONUS
    } else if loser == focus {
        -PLACE_BONUS
    } else {
        0.0
    };
    let value = COINS_WEIGHT * mine as f64 + DISTANCE_WEIGHT * distance + place;

    trace!("lookahead {focus}: coins {mine}, rank {rank}, value {value:.2}");

    LookaheadEstimate {
        coins: mine,
        rank,
        distance_from_average: distance,
        value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CardId, CompanyRegistry, Player};
    use crate::zones::{Deck, Market};

    fn card(id: u32, company: u8) -> Card {
        Card::new(CardId::new(id), CompanyId::new(company))
    }

    #[test]
    fn test_summary_rewards_winner() {
        let coins = PlayerMap::new(3, |p| [14, 10, 6][p.index()]);

        let best = summarize(&coins, PlayerId::new(0));
        assert_eq!(best.rank, 0);
        assert!((best.distance_from_average - 4.0).abs() < 1e-9);
        assert!((best.value - (1.4 + 0.8 + 5.0)).abs() < 1e-9);

        let worst = summarize(&coins, PlayerId::new(2));
        assert_eq!(worst.rank, 2);
        assert!((worst.value - (0.6 - 0.8 - 5.0)).abs() < 1e-9);

        let middle = summarize(&coins, PlayerId::new(1));
        assert!((middle.value - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_ties_go_to_first_seat() {
        let coins = PlayerMap::with_value(2, 10);
        assert!((summarize(&coins, PlayerId::new(0)).value - 6.0).abs() < 1e-9);
        // seat 1 is neither first max nor first min
        assert!((summarize(&coins, PlayerId::new(1)).value - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_focus_hand_counts_as_shares() {
        let companies = CompanyRegistry::from_defs(&[("A", 3), ("B", 3)]);
        let original: Vec<Card> = (0..3).map(|i| card(i, 0)).chain((3..6).map(|i| card(i, 1))).collect();

        let mut players = PlayerMap::new(2, |id| Player::new(id, 10));
        let focus = PlayerId::new(0);
        players[focus].hand.push(card(0, 0));
        players[focus].hand.push(card(1, 0));
        players[PlayerId::new(1)].shares.push(card(2, 0));

        let table = Table {
            companies,
            players,
            deck: Deck::new(),
            market: Market::new(),
            set_aside: Vec::new(),
        };

        // no hand for the rival, so the outcome is fixed: focus holds 2 A vs 1
        let estimate = estimate_value(&table, focus, &original, 0, &mut GameRng::new(1));
        assert_eq!(estimate.coins, 13);
        assert_eq!(estimate.rank, 0);
        assert_eq!(table.player(focus).hand.len(), 2);
    }

    #[test]
    fn test_unseen_excludes_known_cards() {
        let companies = CompanyRegistry::from_defs(&[("A", 2), ("B", 2)]);
        let original: Vec<Card> = vec![card(0, 0), card(1, 0), card(2, 1), card(3, 1)];
        let mut players = PlayerMap::new(2, |id| Player::new(id, 10));
        players[PlayerId::new(0)].hand.push(card(0, 0));
        players[PlayerId::new(1)].shares.push(card(2, 1));
        // the rival's hand is hidden from seat 0
        players[PlayerId::new(1)].hand.push(card(1, 0));

        let table = Table {
            companies,
            players,
            deck: Deck::new(),
            market: Market::new(),
            set_aside: Vec::new(),
        };

        let mut unseen = unseen_companies(&table, PlayerId::new(0), &original);
        unseen.sort_unstable();
        assert_eq!(unseen, vec![CompanyId::new(0), CompanyId::new(1)]);
    }
}
