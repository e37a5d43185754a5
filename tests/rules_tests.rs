//! Rules scenario tests.
//!
//! These tests build small tables by hand and check the pickup, putdown,
//! token and scoring rules on concrete situations.

use im::OrdSet;

use startups_engine::core::{
    Action, ActionPhase, Card, CardId, CompanyId, CompanyRegistry, IllegalReason, Player,
    PlayerId, PlayerMap, RulesError, Table, Zone,
};
use startups_engine::rules::{
    apply_pickup, apply_putdown, legal_pickup_actions, legal_putdown_actions, GameResult,
};
use startups_engine::scoring::score_game;
use startups_engine::zones::{Deck, Market};

const BEER: CompanyId = CompanyId::new(0);
const GAMES: CompanyId = CompanyId::new(1);

fn card(id: u32, company: CompanyId) -> Card {
    Card::new(CardId::new(id), company)
}

fn table(players: usize, coins: i64) -> Table {
    Table {
        companies: CompanyRegistry::from_defs(&[("Giraffe Beer", 5), ("Bowwow Games", 6)]),
        players: PlayerMap::new(players, |id| Player::new(id, coins)),
        deck: Deck::from_cards((0..6).map(|i| card(100 + i, GAMES))),
        market: Market::new(),
        set_aside: Vec::new(),
    }
}

/// A holds 2 Beer, B holds 1, C holds none: B pays 1, A collects 3,
/// C neither pays nor collects.
#[test]
fn test_beer_majority_scoring() {
    let mut table = table(3, 10);
    let a = PlayerId::new(0);
    let b = PlayerId::new(1);
    let c = PlayerId::new(2);
    table.players[a].shares.extend([card(0, BEER), card(1, BEER)]);
    table.players[b].shares.push(card(2, BEER));

    let result = score_game(&mut table.players, &table.companies);

    assert_eq!(table.players[a].coins, 13);
    assert_eq!(table.players[b].coins, 9);
    assert_eq!(table.players[c].coins, 10);
    assert_eq!(result, GameResult::Winner(a));
}

/// A and B both hold 2 Beer: no majority, no payout.
#[test]
fn test_tied_majority_no_payout() {
    let mut table = table(2, 10);
    let a = PlayerId::new(0);
    let b = PlayerId::new(1);
    table.players[a].shares.extend([card(0, BEER), card(1, BEER)]);
    table.players[b].shares.extend([card(2, BEER), card(3, BEER)]);

    let result = score_game(&mut table.players, &table.companies);

    assert_eq!(table.players[a].coins, 10);
    assert_eq!(table.players[b].coins, 10);
    assert!(result.is_winner(a) && result.is_winner(b));
}

/// Two unexempt market cards and exactly two coins: the deck pickup
/// succeeds, both market cards gain a coin and the balance hits zero.
#[test]
fn test_deck_pickup_spends_last_coins() {
    let mut table = table(2, 2);
    let p = PlayerId::new(0);
    table.market.put(card(0, BEER));
    table.market.put(card(1, GAMES));

    let res = apply_pickup(&mut table, p, Action::PickupDeck).unwrap();

    assert_eq!(res.coins_delta, -2);
    assert_eq!(table.players[p].coins, 0);
    assert!(table.market.iter().all(|c| c.coins == 1));
    assert_eq!(table.players[p].hand.len(), 1);

    // now broke: the next deck pickup is refused
    assert!(!legal_pickup_actions(&table, p).contains(&Action::PickupDeck));
}

/// Holding the Beer token exempts Beer market cards from the cost.
#[test]
fn test_token_exempts_from_deck_cost() {
    let mut table = table(2, 1);
    let p = PlayerId::new(0);
    table.players[p].shares.push(card(0, BEER));
    table.players[p].tokens = OrdSet::unit(BEER);
    table.market.put(card(1, BEER));
    table.market.put(card(2, BEER));
    table.market.put(card(3, GAMES));

    apply_pickup(&mut table, p, Action::PickupDeck).unwrap();

    assert_eq!(table.players[p].coins, 0);
    assert_eq!(table.market.max_coins(BEER), 0);
    assert_eq!(table.market.max_coins(GAMES), 1);
    // and the token blocks taking Beer from the market
    assert!(!legal_pickup_actions(&table, p).contains(&Action::PickupMarket(BEER)));
}

/// A card picked up from the market cannot go straight back.
#[test]
fn test_no_flip_flop() {
    let mut table = table(2, 10);
    let p = PlayerId::new(0);
    table.market.put(card(0, BEER));

    apply_pickup(&mut table, p, Action::PickupMarket(BEER)).unwrap();

    let putdowns = legal_putdown_actions(&table, p);
    assert_eq!(putdowns, vec![Action::PutdownShares(BEER)]);

    let err = apply_putdown(&mut table, p, Action::PutdownMarket(BEER)).unwrap_err();
    assert!(matches!(
        err,
        RulesError::IllegalAction { reason: IllegalReason::JustPickedUp, .. }
    ));
    assert!(table.market.is_empty());
    assert_eq!(table.players[p].hand.len(), 1);
}

/// The flip-flop restriction covers the whole company, not just the
/// card that was picked up.
#[test]
fn test_flip_flop_is_by_company() {
    let mut table = table(2, 10);
    let p = PlayerId::new(0);
    table.players[p].hand.push(card(0, BEER));
    table.market.put(card(1, BEER));

    apply_pickup(&mut table, p, Action::PickupMarket(BEER)).unwrap();

    assert!(!legal_putdown_actions(&table, p).contains(&Action::PutdownMarket(BEER)));
}

/// Market pickup takes the richest card, earliest first on ties.
#[test]
fn test_market_pickup_richest_card() {
    let mut table = table(2, 10);
    let p = PlayerId::new(1);
    table.market.put(card(0, BEER));
    table.market.raise_prices(&OrdSet::new());
    table.market.put(card(1, BEER));
    table.market.raise_prices(&OrdSet::new());
    table.market.raise_prices(&OrdSet::new());

    let res = apply_pickup(&mut table, p, Action::PickupMarket(BEER)).unwrap();

    assert_eq!(res.card.id, CardId::new(0));
    assert_eq!(res.coins_delta, 3);
    assert_eq!(table.players[p].coins, 13);
    assert_eq!(table.market.max_coins(BEER), 2);
}

/// Every rejected action leaves the table exactly as it was.
#[test]
fn test_rejected_actions_are_atomic() {
    let mut table = table(2, 0);
    let p = PlayerId::new(0);
    table.market.put(card(0, BEER));
    table.players[p].tokens = OrdSet::unit(BEER);
    table.players[p].hand.push(card(1, GAMES));
    table.players[p].last_pickup = Some(card(1, GAMES));

    let before = format!("{:?}", table);

    let attempts = [
        Action::PickupMarket(BEER),
        Action::PickupMarket(GAMES),
        Action::PutdownShares(BEER),
        Action::PutdownMarket(GAMES),
        Action::PutdownShares(CompanyId::new(7)),
    ];
    for action in attempts {
        let result = match action.phase() {
            ActionPhase::Pickup => apply_pickup(&mut table, p, action),
            ActionPhase::Putdown => apply_putdown(&mut table, p, action),
        };
        assert!(result.is_err(), "{action} should be rejected");
        assert_eq!(format!("{:?}", table), before);
    }
}

/// An empty deck is reported as such.
#[test]
fn test_empty_deck_error() {
    let mut table = table(2, 10);
    table.deck = Deck::new();

    assert_eq!(
        apply_pickup(&mut table, PlayerId::new(0), Action::PickupDeck),
        Err(RulesError::EmptyZone(Zone::Deck))
    );
}

/// Shares putdowns move the token; ties take it away from everyone.
#[test]
fn test_token_follows_strict_majority() {
    let mut table = table(3, 10);
    let a = PlayerId::new(0);
    let b = PlayerId::new(1);

    for (i, seat) in [a, b, b, a, a].into_iter().enumerate() {
        table.players[seat].hand.push(card(i as u32, BEER));
        apply_putdown(&mut table, seat, Action::PutdownShares(BEER)).unwrap();

        let holder = table.token_holder(BEER);
        let count = |p: PlayerId| table.players[p].share_count(BEER);
        match i {
            0 => assert_eq!(holder, Some(a)), // 1-0
            1 => assert_eq!(holder, None),    // 1-1
            2 => assert_eq!(holder, Some(b)), // 1-2
            3 => assert_eq!(holder, None),    // 2-2
            _ => assert_eq!(holder, Some(a)), // 3-2
        }
        assert!(count(a) + count(b) == i + 1);
    }
}
