//! Action resolution.
//!
//! Each function validates the action with the same predicates the
//! enumerator uses and only then mutates the table. A rejected action leaves
//! the table exactly as it was.

use log::debug;
use serde::Serialize;

use super::legal::{check_pickup, check_putdown, deck_pickup_cost};
use super::tokens::settle_tokens;
use crate::core::{Action, Card, IllegalReason, PlayerId, RulesError, Table, Zone};

/// What a resolved action did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub player: PlayerId,
    pub action: Action,
    /// The card that moved.
    pub card: Card,
    /// Coins gained (market pickup) or paid (deck pickup, negative).
    pub coins_delta: i64,
}

fn ensure_known(table: &Table, player: PlayerId, action: Action) -> Result<(), RulesError> {
    if player.index() >= table.player_count() {
        return Err(RulesError::InconsistentState(format!(
            "no seat {} at a {}-player table",
            player.0,
            table.player_count()
        )));
    }
    if let Some(company) = action.target() {
        if !table.companies.contains(company) {
            return Err(RulesError::InconsistentState(format!(
                "unknown company {company}"
            )));
        }
    }
    Ok(())
}

/// Resolve the pickup half of `player`'s turn.
pub fn apply_pickup(
    table: &mut Table,
    player: PlayerId,
    action: Action,
) -> Result<Resolution, RulesError> {
    ensure_known(table, player, action)?;
    check_pickup(&table.players[player], &table.market, &table.deck, action)?;

    let (card, coins_delta) = match action {
        Action::PickupDeck => {
            let seat = &table.players[player];
            let cost = deck_pickup_cost(seat, &table.market);
            let tokens = seat.tokens.clone();

            let card = table.deck.draw().ok_or(RulesError::EmptyZone(Zone::Deck))?;
            table.market.raise_prices(&tokens);
            (card, -i64::from(cost))
        }
        Action::PickupMarket(company) => {
            let taken = table
                .market
                .richest(company)
                .and_then(|index| table.market.take(index));
            let (card, coins) = taken.ok_or_else(|| {
                RulesError::InconsistentState(format!("market lost company {company}"))
            })?;
            (card, i64::from(coins))
        }
        Action::PutdownShares(_) | Action::PutdownMarket(_) => {
            return Err(RulesError::illegal(action, IllegalReason::WrongPhase));
        }
    };

    let seat = &mut table.players[player];
    seat.coins += coins_delta;
    seat.hand.push(card);
    seat.last_pickup = Some(card);

    debug!(
        "{player} {action}: card {} of company {}, coins {coins_delta:+}",
        card.id.0, card.company
    );

    Ok(Resolution {
        player,
        action,
        card,
        coins_delta,
    })
}

/// Resolve the putdown half of `player`'s turn.
pub fn apply_putdown(
    table: &mut Table,
    player: PlayerId,
    action: Action,
) -> Result<Resolution, RulesError> {
    ensure_known(table, player, action)?;
    check_putdown(&table.players[player], action)?;

    let company = action
        .target()
        .ok_or_else(|| RulesError::illegal(action, IllegalReason::WrongPhase))?;
    let seat = &mut table.players[player];
    let index = seat.find_in_hand(company).ok_or_else(|| {
        RulesError::InconsistentState(format!("{player} lost company {company} from hand"))
    })?;
    let card = seat.hand.remove(index);
    seat.last_pickup = None;

    if let Action::PutdownShares(_) = action {
        seat.shares.push(card);
        settle_tokens(&mut table.players, player, company);
    } else {
        table.market.put(card);
    }

    debug!("{player} {action}: card {}", card.id.0);

    Ok(Resolution {
        player,
        action,
        card,
        coins_delta: 0,
    })
}
