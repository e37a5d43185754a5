//! Legal-action enumeration.
//!
//! `check_pickup` and `check_putdown` are the only legality predicates in the
//! crate. The choice lists are built by filtering candidates through them,
//! and the resolution engine calls them again before touching any state.

use crate::core::{
    Action, ActionPhase, IllegalReason, Player, PlayerId, RulesError, Table, Zone,
};
use crate::zones::{Deck, Market};

/// Coins a deck pickup costs `player`: one per market card whose company's
/// token the player does not hold.
#[must_use]
pub fn deck_pickup_cost(player: &Player, market: &Market) -> u32 {
    market.cost_for(&player.tokens)
}

/// Check a pickup action for `player`.
pub fn check_pickup(
    player: &Player,
    market: &Market,
    deck: &Deck,
    action: Action,
) -> Result<(), RulesError> {
    match action {
        Action::PickupDeck => {
            if deck.is_empty() {
                return Err(RulesError::EmptyZone(Zone::Deck));
            }
            let required = deck_pickup_cost(player, market);
            if i64::from(required) > player.coins {
                return Err(RulesError::illegal(
                    action,
                    IllegalReason::InsufficientFunds {
                        required,
                        available: player.coins,
                    },
                ));
            }
            Ok(())
        }
        Action::PickupMarket(company) => {
            if market.is_empty() {
                return Err(RulesError::EmptyZone(Zone::Market));
            }
            if player.has_token(company) {
                return Err(RulesError::illegal(action, IllegalReason::TokenHeld));
            }
            if !market.contains(company) {
                return Err(RulesError::illegal(action, IllegalReason::NotInMarket));
            }
            Ok(())
        }
        Action::PutdownShares(_) | Action::PutdownMarket(_) => {
            Err(RulesError::illegal(action, IllegalReason::WrongPhase))
        }
    }
}

/// Check a putdown action for `player`.
pub fn check_putdown(player: &Player, action: Action) -> Result<(), RulesError> {
    match action {
        Action::PutdownShares(company) => {
            if player.find_in_hand(company).is_none() {
                return Err(RulesError::illegal(action, IllegalReason::NotInHand));
            }
            Ok(())
        }
        Action::PutdownMarket(company) => {
            if player.find_in_hand(company).is_none() {
                return Err(RulesError::illegal(action, IllegalReason::NotInHand));
            }
            if player.just_picked_up(company) {
                return Err(RulesError::illegal(action, IllegalReason::JustPickedUp));
            }
            Ok(())
        }
        Action::PickupDeck | Action::PickupMarket(_) => {
            Err(RulesError::illegal(action, IllegalReason::WrongPhase))
        }
    }
}

/// Legal pickups: the deck (if affordable) then one market pickup per
/// company on offer, in company order.
#[must_use]
pub fn pickup_choices(player: &Player, market: &Market, deck: &Deck) -> Vec<Action> {
    std::iter::once(Action::PickupDeck)
        .chain(market.companies().into_iter().map(Action::PickupMarket))
        .filter(|&a| check_pickup(player, market, deck, a).is_ok())
        .collect()
}

/// Legal putdowns: shares for every company in hand, market for every company
/// in hand except the one just picked up. Company order.
#[must_use]
pub fn putdown_choices(player: &Player) -> Vec<Action> {
    let mut companies: Vec<_> = player.hand.iter().map(|c| c.company).collect();
    companies.sort_unstable();
    companies.dedup();

    companies
        .into_iter()
        .flat_map(|c| [Action::PutdownShares(c), Action::PutdownMarket(c)])
        .filter(|&a| check_putdown(player, a).is_ok())
        .collect()
}

#[must_use]
pub fn legal_pickup_actions(table: &Table, player: PlayerId) -> Vec<Action> {
    pickup_choices(table.player(player), &table.market, &table.deck)
}

#[must_use]
pub fn legal_putdown_actions(table: &Table, player: PlayerId) -> Vec<Action> {
    putdown_choices(table.player(player))
}

/// Legal actions for one half of a turn.
#[must_use]
pub fn legal_actions(table: &Table, player: PlayerId, phase: ActionPhase) -> Vec<Action> {
    match phase {
        ActionPhase::Pickup => legal_pickup_actions(table, player),
        ActionPhase::Putdown => legal_putdown_actions(table, player),
    }
}
