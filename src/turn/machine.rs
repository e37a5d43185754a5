//! Turn sequencing.
//!
//! A turn is a pickup followed by a putdown. The machine watches the acting
//! seat's hand size: one card more than at the start of the turn means the
//! pickup happened, back to the starting size means the putdown happened
//! and play passes to the next seat.

use serde::{Deserialize, Serialize};

use crate::core::{ActionPhase, PlayerId, Table};

/// Where the game stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnPhase {
    /// `player` must pick up.
    Pickup(PlayerId),
    /// `player` must put down.
    Putdown(PlayerId),
    /// Seats before the focus player are due to act as a batch.
    OtherPlayers,
    /// Deck exhausted; the game is over.
    RoundComplete,
}

impl TurnPhase {
    #[must_use]
    pub fn is_terminal(self) -> bool {
        self == TurnPhase::RoundComplete
    }

    /// The seat expected to act, if a single one is.
    #[must_use]
    pub fn player(self) -> Option<PlayerId> {
        match self {
            TurnPhase::Pickup(p) | TurnPhase::Putdown(p) => Some(p),
            TurnPhase::OtherPlayers | TurnPhase::RoundComplete => None,
        }
    }
}

impl std::fmt::Display for TurnPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TurnPhase::Pickup(p) => write!(f, "pickup ({p})"),
            TurnPhase::Putdown(p) => write!(f, "putdown ({p})"),
            TurnPhase::OtherPlayers => write!(f, "other players"),
            TurnPhase::RoundComplete => write!(f, "round complete"),
        }
    }
}

/// Tracks whose turn it is and which half of it is due.
///
/// With a focus seat configured, every other seat is reported as
/// `OtherPlayers` so the caller can resolve them in one batch and hand
/// control back to the focus seat.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TurnMachine {
    player_count: usize,
    focus: Option<PlayerId>,
    current: PlayerId,
    step: ActionPhase,
    /// Hand size of `current` when its turn began.
    base_hand: usize,
    /// Completed passes around the table, starting at 1.
    round: u32,
    finished: bool,
}

impl TurnMachine {
    /// Start at seat 0's pickup.
    #[must_use]
    pub fn new(table: &Table, focus: Option<PlayerId>) -> Self {
        let first = PlayerId::new(0);
        Self {
            player_count: table.player_count(),
            focus,
            current: first,
            step: ActionPhase::Pickup,
            base_hand: table.player(first).hand.len(),
            round: 1,
            finished: false,
        }
    }

    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        if self.finished {
            return TurnPhase::RoundComplete;
        }
        if self.focus.is_some_and(|f| f != self.current) {
            return TurnPhase::OtherPlayers;
        }
        match self.step {
            ActionPhase::Pickup => TurnPhase::Pickup(self.current),
            ActionPhase::Putdown => TurnPhase::Putdown(self.current),
        }
    }

    /// Seat whose turn it is (also inside an `OtherPlayers` batch).
    #[must_use]
    pub fn current(&self) -> PlayerId {
        self.current
    }

    /// Half of the turn `current` is on.
    #[must_use]
    pub fn step(&self) -> ActionPhase {
        self.step
    }

    #[must_use]
    pub fn focus(&self) -> Option<PlayerId> {
        self.focus
    }

    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Re-read the table after an action and move on if the half-turn is done.
    pub fn advance(&mut self, table: &Table) -> TurnPhase {
        if self.finished {
            return TurnPhase::RoundComplete;
        }

        let hand = table.player(self.current).hand.len();
        match self.step {
            ActionPhase::Pickup => {
                if hand > self.base_hand {
                    self.step = ActionPhase::Putdown;
                }
            }
            ActionPhase::Putdown => {
                if hand <= self.base_hand {
                    if table.deck.is_empty() {
                        self.finished = true;
                    } else {
                        self.pass_turn(table);
                    }
                }
            }
        }
        self.phase()
    }

    fn pass_turn(&mut self, table: &Table) {
        self.current = self.current.next(self.player_count);
        if self.current.index() == 0 {
            self.round += 1;
        }
        self.step = ActionPhase::Pickup;
        self.base_hand = table.player(self.current).hand.len();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Card, CardId, CompanyId, CompanyRegistry, Player, PlayerMap};
    use crate::zones::{Deck, Market};

    fn table(players: usize, deck: u32) -> Table {
        let beer = CompanyId::new(0);
        Table {
            companies: CompanyRegistry::from_defs(&[("Beer", 20)]),
            players: PlayerMap::new(players, |id| {
                let mut p = Player::new(id, 10);
                for i in 0..3 {
                    p.hand.push(Card::new(CardId::new(100 + id.0 as u32 * 3 + i), beer));
                }
                p
            }),
            deck: Deck::from_cards((0..deck).map(|i| Card::new(CardId::new(i), beer))),
            market: Market::new(),
            set_aside: Vec::new(),
        }
    }

    fn pick(table: &mut Table, p: PlayerId) {
        let card = table.deck.draw().unwrap();
        table.players[p].hand.push(card);
    }

    fn put(table: &mut Table, p: PlayerId) {
        let card = table.players[p].hand.pop().unwrap();
        table.players[p].shares.push(card);
    }

    #[test]
    fn test_pickup_putdown_then_next_player() {
        let mut table = table(3, 10);
        let mut turn = TurnMachine::new(&table, None);
        let p0 = PlayerId::new(0);

        assert_eq!(turn.phase(), TurnPhase::Pickup(p0));
        // nothing changed yet
        assert_eq!(turn.advance(&table), TurnPhase::Pickup(p0));

        pick(&mut table, p0);
        assert_eq!(turn.advance(&table), TurnPhase::Putdown(p0));

        put(&mut table, p0);
        assert_eq!(turn.advance(&table), TurnPhase::Pickup(PlayerId::new(1)));
        assert_eq!(turn.round(), 1);
    }

    #[test]
    fn test_round_wraps_to_first_seat() {
        let mut table = table(2, 10);
        let mut turn = TurnMachine::new(&table, None);

        for seat in [0, 1] {
            let p = PlayerId::new(seat);
            pick(&mut table, p);
            turn.advance(&table);
            put(&mut table, p);
            turn.advance(&table);
        }

        assert_eq!(turn.phase(), TurnPhase::Pickup(PlayerId::new(0)));
        assert_eq!(turn.round(), 2);
    }

    #[test]
    fn test_empty_deck_after_putdown_is_terminal() {
        let mut table = table(2, 1);
        let mut turn = TurnMachine::new(&table, None);
        let p0 = PlayerId::new(0);

        pick(&mut table, p0);
        // deck is empty now, but the putdown still has to happen
        assert_eq!(turn.advance(&table), TurnPhase::Putdown(p0));

        put(&mut table, p0);
        assert_eq!(turn.advance(&table), TurnPhase::RoundComplete);
        assert!(turn.phase().is_terminal());
        assert_eq!(turn.advance(&table), TurnPhase::RoundComplete);
    }

    #[test]
    fn test_focus_player_sees_other_players_batch() {
        let mut table = table(3, 10);
        let focus = PlayerId::new(1);
        let mut turn = TurnMachine::new(&table, Some(focus));

        assert_eq!(turn.phase(), TurnPhase::OtherPlayers);
        assert_eq!(turn.current(), PlayerId::new(0));

        pick(&mut table, PlayerId::new(0));
        assert_eq!(turn.advance(&table), TurnPhase::OtherPlayers);
        assert_eq!(turn.step(), ActionPhase::Putdown);

        put(&mut table, PlayerId::new(0));
        assert_eq!(turn.advance(&table), TurnPhase::Pickup(focus));

        pick(&mut table, focus);
        turn.advance(&table);
        put(&mut table, focus);
        assert_eq!(turn.advance(&table), TurnPhase::OtherPlayers);
        assert_eq!(turn.current(), PlayerId::new(2));
    }
}
