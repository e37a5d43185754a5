//! End-of-game scoring.
//!
//! Every hand is folded into shares. For each company with a unique
//! majority holder, every other shareholder pays one coin per share into a
//! pool and the holder collects three times the pool. Highest coins wins.

use log::debug;

use crate::core::{CompanyRegistry, Player, PlayerId, PlayerMap};
use crate::rules::{strict_leader, GameResult};

/// Share counts per seat, indexed by company: `counts[player][company.index()]`.
pub type ShareCounts = PlayerMap<Vec<usize>>;

/// Count every seat's committed shares per company.
#[must_use]
pub fn share_counts(players: &PlayerMap<Player>, company_count: usize) -> ShareCounts {
    players.map(|_, p| {
        let mut counts = vec![0; company_count];
        for card in &p.shares {
            counts[card.company.index()] += 1;
        }
        counts
    })
}

/// Apply majority payouts for every company to `coins`.
pub fn settle_majorities(
    counts: &ShareCounts,
    coins: &mut PlayerMap<i64>,
    companies: &CompanyRegistry,
) {
    for company in companies.ids() {
        let i = company.index();
        let Some(holder) = strict_leader(counts.iter().map(|(p, c)| (p, c[i]))) else {
            continue;
        };

        let mut pool = 0i64;
        for (player, c) in counts.iter() {
            if player != holder && c[i] > 0 {
                let owed = c[i] as i64;
                coins[player] -= owed;
                pool += owed;
            }
        }
        coins[holder] += 3 * pool;

        if pool > 0 {
            debug!(
                "{} majority to {holder}: pool {pool}, payout {}",
                companies.name_of(company),
                3 * pool
            );
        }
    }
}

/// Every seat sharing the highest coin total, in seat order.
#[must_use]
pub fn leaders(coins: &PlayerMap<i64>) -> Vec<PlayerId> {
    let best = coins.values().copied().max().unwrap_or(0);
    coins
        .iter()
        .filter(|(_, c)| **c == best)
        .map(|(p, _)| p)
        .collect()
}

/// Score a finished game in place and name the winner(s).
///
/// Hands are moved into shares without touching tokens.
pub fn score_game(players: &mut PlayerMap<Player>, companies: &CompanyRegistry) -> GameResult {
    for player in players.values_mut() {
        player.fold_hand_into_shares();
    }

    let counts = share_counts(players, companies.len());
    let mut coins = players.map(|_, p| p.coins);
    settle_majorities(&counts, &mut coins, companies);

    for (id, player) in players.iter_mut() {
        player.coins = coins[id];
    }

    GameResult::from_leaders(leaders(&coins))
}

/// Seats ranked by coins, best first. Equal totals keep seat order.
#[must_use]
pub fn standings(players: &PlayerMap<Player>) -> Vec<(PlayerId, i64)> {
    let mut ranked: Vec<(PlayerId, i64)> = players.iter().map(|(id, p)| (id, p.coins)).collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
}
