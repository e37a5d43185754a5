//! Built-in tactics.
//!
//! Each tactic reads only public information about rivals (their shares),
//! plus the acting seat's own hand. Where both halves of a turn make sense
//! the tactic carries the `ActionPhase` it plays.

use crate::core::{Action, ActionPhase, CompanyId, GameRng, Player, PlayerId, Table};
use crate::rules::{eligibility_threshold, legal_actions};

use super::tactic::{Tactic, Tier, Tiered};

/// Best share count of `company` among the other seats.
fn rival_best(table: &Table, player: PlayerId, company: CompanyId) -> usize {
    eligibility_threshold(&table.players, company, player)
}

/// Does any rival hold exactly `count` shares of `company` (and at least one)?
fn rival_at(table: &Table, player: PlayerId, company: CompanyId, count: usize) -> bool {
    count > 0
        && table
            .players
            .iter()
            .any(|(id, p)| id != player && p.share_count(company) == count)
}

fn legal(table: &Table, player: PlayerId, phase: ActionPhase) -> Vec<Action> {
    legal_actions(table, player, phase)
}

// =============================================================================
// Prefer majority
// =============================================================================

/// Take or commit a card that puts the seat in the lead for its company.
#[derive(Clone, Copy, Debug)]
pub struct PreferMajority(pub ActionPhase);

impl Tactic for PreferMajority {
    fn propose(&self, table: &Table, player: PlayerId, _rng: &mut GameRng) -> Option<Action> {
        let me = table.player(player);
        legal(table, player, self.0).into_iter().find(|&action| match action {
            Action::PickupMarket(c) => me.holding(c) + 1 > rival_best(table, player, c),
            Action::PutdownShares(c) => me.share_count(c) + 1 > rival_best(table, player, c),
            Action::PickupDeck | Action::PutdownMarket(_) => false,
        })
    }

    fn name(&self) -> &str {
        "prefer_majority"
    }
}

// =============================================================================
// Block opponent
// =============================================================================

/// Keep cards away from rivals who could use them to overtake.
///
/// Pickup: take a market card a shareholding rival would need to pass the
/// seat's holding. Putdown: only feed the market with companies no rival
/// could overtake with; decline if every market putdown is risky and no
/// shares putdown exists.
#[derive(Clone, Copy, Debug)]
pub struct BlockOpponent(pub ActionPhase);

impl BlockOpponent {
    fn rival_could_overtake(table: &Table, player: PlayerId, me: &Player, c: CompanyId) -> bool {
        let best = rival_best(table, player, c);
        best > 0 && best + 1 > me.holding(c)
    }
}

impl Tactic for BlockOpponent {
    fn propose(&self, table: &Table, player: PlayerId, rng: &mut GameRng) -> Option<Action> {
        let me = table.player(player);
        let actions = legal(table, player, self.0);
        match self.0 {
            ActionPhase::Pickup => actions.into_iter().find(|&a| match a {
                Action::PickupMarket(c) => Self::rival_could_overtake(table, player, me, c),
                _ => false,
            }),
            ActionPhase::Putdown => {
                let safe: Vec<Action> = actions
                    .into_iter()
                    .filter(|&a| match a {
                        // the card leaves our holding when it goes to market
                        Action::PutdownMarket(c) => {
                            let best = rival_best(table, player, c);
                            !(best > 0 && best + 1 > me.holding(c).saturating_sub(1))
                        }
                        _ => true,
                    })
                    .collect();
                rng.choose(&safe).copied()
            }
        }
    }

    fn name(&self) -> &str {
        "block_opponent"
    }
}

// =============================================================================
// Avoid / seek loss
// =============================================================================

fn loss_tier(table: &Table, player: PlayerId, action: Action) -> Tier {
    let me = table.player(player);
    match action {
        Action::PickupDeck => Tier::Good,
        // even with this card a rival would still out-hold us
        Action::PickupMarket(c) => {
            if rival_best(table, player, c) > me.holding(c) + 1 {
                Tier::Bad
            } else {
                Tier::Good
            }
        }
        // giving it away lets a rival draw level
        Action::PutdownMarket(c) => {
            if rival_at(table, player, c, me.holding(c).saturating_sub(1)) {
                Tier::Bad
            } else {
                Tier::Good
            }
        }
        // committing more to a company we are losing only raises the bill
        Action::PutdownShares(c) => {
            if rival_best(table, player, c) >= me.holding(c) {
                Tier::Bad
            } else {
                Tier::Good
            }
        }
    }
}

/// Steer away from ending the game as a minority shareholder.
#[derive(Clone, Copy, Debug)]
pub struct AvoidLoss(pub ActionPhase);

impl Tactic for AvoidLoss {
    fn propose(&self, table: &Table, player: PlayerId, rng: &mut GameRng) -> Option<Action> {
        let actions = legal(table, player, self.0);
        Tiered::classify(&actions, |a| loss_tier(table, player, a)).pick(rng)
    }

    fn name(&self) -> &str {
        "avoid_loss"
    }
}

/// The mirror image of `AvoidLoss`; useful as a weak sparring partner.
#[derive(Clone, Copy, Debug)]
pub struct SeekLoss(pub ActionPhase);

impl Tactic for SeekLoss {
    fn propose(&self, table: &Table, player: PlayerId, rng: &mut GameRng) -> Option<Action> {
        let actions = legal(table, player, self.0);
        Tiered::classify(&actions, |a| match loss_tier(table, player, a) {
            Tier::Good => Tier::Bad,
            Tier::Bad => Tier::Good,
            Tier::Ok => Tier::Ok,
        })
        .pick(rng)
    }

    fn name(&self) -> &str {
        "seek_loss"
    }
}

// =============================================================================
// Same / different company
// =============================================================================

/// Concentrate on companies already held.
#[derive(Clone, Copy, Debug)]
pub struct SameCompany(pub ActionPhase);

impl Tactic for SameCompany {
    fn propose(&self, table: &Table, player: PlayerId, rng: &mut GameRng) -> Option<Action> {
        let me = table.player(player);
        let actions = legal(table, player, self.0);
        Tiered::classify(&actions, |a| match a {
            Action::PickupDeck => Tier::Bad,
            Action::PickupMarket(c) if me.holding(c) > 0 => Tier::Good,
            Action::PickupMarket(_) => Tier::Bad,
            Action::PutdownShares(c) if me.holding(c) > 1 => Tier::Good,
            Action::PutdownMarket(c) if me.holding(c) > 1 => Tier::Bad,
            Action::PutdownShares(_) | Action::PutdownMarket(_) => Tier::Ok,
        })
        .pick(rng)
    }

    fn name(&self) -> &str {
        "same_cards"
    }
}

/// Spread across companies.
#[derive(Clone, Copy, Debug)]
pub struct DifferentCompany(pub ActionPhase);

impl Tactic for DifferentCompany {
    fn propose(&self, table: &Table, player: PlayerId, rng: &mut GameRng) -> Option<Action> {
        let me = table.player(player);
        let actions = legal(table, player, self.0);
        Tiered::classify(&actions, |a| match a {
            Action::PickupDeck => Tier::Ok,
            Action::PickupMarket(c) => match me.holding(c) {
                0 => Tier::Good,
                1 => Tier::Ok,
                _ => Tier::Bad,
            },
            Action::PutdownMarket(c) if me.holding(c) > 1 => Tier::Good,
            Action::PutdownMarket(_) => Tier::Ok,
            Action::PutdownShares(_) => Tier::Bad,
        })
        .pick(rng)
    }

    fn name(&self) -> &str {
        "different_cards"
    }
}

// =============================================================================
// Gain money / shed unwanted cards
// =============================================================================

/// Pickup that collects coins: market cards carrying more than one coin
/// first, the deck only when nothing else is on offer.
#[derive(Clone, Copy, Debug, Default)]
pub struct GainMoney;

impl Tactic for GainMoney {
    fn propose(&self, table: &Table, player: PlayerId, rng: &mut GameRng) -> Option<Action> {
        let actions = legal(table, player, ActionPhase::Pickup);
        let only_deck = actions.len() == 1;
        Tiered::classify(&actions, |a| match a {
            Action::PickupDeck if only_deck => Tier::Good,
            Action::PickupDeck => Tier::Bad,
            Action::PickupMarket(c) if table.market.max_coins(c) > 1 => Tier::Good,
            _ => Tier::Ok,
        })
        .pick(rng)
    }

    fn name(&self) -> &str {
        "gain_money"
    }
}

/// Putdown that sells singletons into companies already on the market and
/// keeps pairs; shares only where the seat is not behind.
#[derive(Clone, Copy, Debug, Default)]
pub struct ShedUnwanted;

impl Tactic for ShedUnwanted {
    fn propose(&self, table: &Table, player: PlayerId, rng: &mut GameRng) -> Option<Action> {
        let me = table.player(player);
        let actions = legal(table, player, ActionPhase::Putdown);
        Tiered::classify(&actions, |a| match a {
            Action::PutdownMarket(c) if me.holding(c) > 1 => Tier::Bad,
            Action::PutdownMarket(c) if table.market.contains(c) => Tier::Good,
            Action::PutdownMarket(_) => Tier::Ok,
            Action::PutdownShares(c) if rival_best(table, player, c) >= me.holding(c) => {
                Tier::Bad
            }
            _ => Tier::Good,
        })
        .pick(rng)
    }

    fn name(&self) -> &str {
        "lose_unwanted"
    }
}
