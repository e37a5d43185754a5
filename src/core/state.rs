//! Table and game state.
//!
//! ## Table
//!
//! Everything on the table: companies, seats, deck, market and the
//! set-aside cards. Rules functions take a `&Table` or `&mut Table`.
//!
//! ## GameState
//!
//! The table plus everything needed to run a game: the single seeded RNG,
//! the turn machine, the action history and the final result. It is the
//! facade adapters (prompt loops, RL environments, bindings) talk to.

use im::Vector;
use log::{info, warn};

use super::action::{Action, ActionPhase, ActionRecord};
use super::card::Card;
use super::company::{CompanyId, CompanyRegistry};
use super::config::GameConfig;
use super::error::{ConfigError, IllegalReason, RulesError};
use super::player::{Player, PlayerId, PlayerMap};
use super::rng::GameRng;
use super::view::TableView;
use crate::rules::{apply_action, legal_actions, token_holder, GameResult};
use crate::scoring::{estimate_value, score_game, standings, LookaheadEstimate};
use crate::strategy::{StrategyCatalog, StrategyPair};
use crate::turn::{TurnMachine, TurnPhase};
use crate::zones::{Deck, Market};

/// Every zone of a game in progress.
#[derive(Clone, Debug)]
pub struct Table {
    pub companies: CompanyRegistry,
    pub players: PlayerMap<Player>,
    pub deck: Deck,
    pub market: Market,
    /// Cards removed face-down before the deal. Out of play for good.
    pub set_aside: Vec<Card>,
}

impl Table {
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id]
    }

    pub fn player_mut(&mut self, id: PlayerId) -> &mut Player {
        &mut self.players[id]
    }

    #[must_use]
    pub fn token_holder(&self, company: CompanyId) -> Option<PlayerId> {
        token_holder(&self.players, company)
    }

    /// Every card on the table, wherever it is.
    pub fn all_cards(&self) -> impl Iterator<Item = &Card> {
        self.deck
            .iter()
            .chain(self.market.iter())
            .chain(self.players.values().flat_map(|p| p.hand.iter()))
            .chain(self.players.values().flat_map(|p| p.shares.iter()))
            .chain(self.set_aside.iter())
    }

    /// Snapshot for `viewer`.
    #[must_use]
    pub fn view(&self, viewer: PlayerId) -> TableView {
        TableView::new(self, viewer)
    }
}

/// A game: table, RNG, turn machine, history and result.
#[derive(Clone, Debug)]
pub struct GameState {
    config: GameConfig,
    table: Table,
    rng: GameRng,
    turn: TurnMachine,
    history: Vector<ActionRecord>,
    /// The full card set as created, before shuffling.
    starting_deck: Vec<Card>,
    result: Option<GameResult>,
}

/// Set up a game: build and shuffle the deck, set cards aside, deal hands
/// and seat the players.
///
/// The first `human_count` seats are externally driven; the rest take
/// strategies from the configured lineup in rotation. A focus seat is always
/// externally driven.
///
/// ```
/// use startups_engine::core::{new_game, GameConfig};
///
/// let config = GameConfig::default().with_players(4, 0);
/// let mut game = new_game(&config, 7).unwrap();
///
/// assert_eq!(game.table().deck.len(), 45 - 5 - 4 * 3);
/// let result = game.play_to_end().unwrap();
/// assert!(result.winner().is_some());
/// ```
pub fn new_game(config: &GameConfig, seed: u64) -> Result<GameState, ConfigError> {
    config.validate()?;

    let companies = config.registry();
    let rng = GameRng::new(seed);

    let mut deck = Deck::full(&companies);
    let starting_deck: Vec<Card> = deck.iter().copied().collect();
    // the deal has its own stream so bot choices never shift it
    deck.shuffle(&mut rng.for_context("deal"));
    let set_aside = deck.draw_many(config.removed_cards);

    let catalog = StrategyCatalog::standard();
    let humans = config.human_count;
    let mut players = PlayerMap::new(config.player_count, |id| {
        let seat = id.index();
        let player = Player::new(id, config.starting_coins);
        if seat < humans {
            return player.human();
        }
        if config.focus_player == Some(id) {
            return player;
        }
        let name = &config.bot_lineup[(seat - humans) % config.bot_lineup.len()];
        match catalog.get(name) {
            Some(strategy) => player.with_strategy(strategy),
            None => player,
        }
    });

    for _ in 0..config.hand_size {
        for player in players.values_mut() {
            if let Some(card) = deck.draw() {
                player.hand.push(card);
            }
        }
    }

    let table = Table {
        companies,
        players,
        deck,
        market: Market::new(),
        set_aside,
    };
    let turn = TurnMachine::new(&table, config.focus_player);

    info!(
        "new game: {} players ({} human), {} companies, seed {seed}",
        config.player_count,
        humans,
        table.companies.len()
    );

    Ok(GameState {
        config: config.clone(),
        table,
        rng,
        turn,
        history: Vector::new(),
        starting_deck,
        result: None,
    })
}

impl GameState {
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn table(&self) -> &Table {
        &self.table
    }

    #[must_use]
    pub fn turn(&self) -> &TurnMachine {
        &self.turn
    }

    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        self.turn.phase()
    }

    /// Seat expected to submit the next action, if it is a single seat.
    #[must_use]
    pub fn current_player(&self) -> Option<PlayerId> {
        self.phase().player()
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.result.is_some()
    }

    #[must_use]
    pub fn result(&self) -> Option<&GameResult> {
        self.result.as_ref()
    }

    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    #[must_use]
    pub fn starting_deck(&self) -> &[Card] {
        &self.starting_deck
    }

    /// Legal actions for the seat whose phase it is. Empty during an
    /// `OtherPlayers` batch and after the game ends.
    #[must_use]
    pub fn legal_actions(&self) -> Vec<Action> {
        match self.phase() {
            TurnPhase::Pickup(p) => legal_actions(&self.table, p, ActionPhase::Pickup),
            TurnPhase::Putdown(p) => legal_actions(&self.table, p, ActionPhase::Putdown),
            TurnPhase::OtherPlayers | TurnPhase::RoundComplete => Vec::new(),
        }
    }

    #[must_use]
    pub fn view(&self, viewer: PlayerId) -> TableView {
        self.table.view(viewer)
    }

    #[must_use]
    pub fn standings(&self) -> Vec<(PlayerId, i64)> {
        standings(&self.table.players)
    }

    /// Install (or remove) the strategy driving a seat.
    pub fn set_strategy(&mut self, player: PlayerId, strategy: Option<StrategyPair>) {
        self.table.players[player].strategy = strategy;
    }

    /// Apply an externally chosen action for the seat whose phase it is.
    pub fn apply(&mut self, action: Action) -> Result<TurnPhase, RulesError> {
        match self.phase() {
            TurnPhase::Pickup(p) | TurnPhase::Putdown(p) => self.resolve(p, action),
            TurnPhase::OtherPlayers => Err(RulesError::illegal(
                action,
                IllegalReason::NotYourTurn(self.turn.current()),
            )),
            TurnPhase::RoundComplete => {
                Err(RulesError::illegal(action, IllegalReason::GameOver))
            }
        }
    }

    /// Like `apply`, but reject the action unless it is `player`'s phase.
    pub fn apply_as(&mut self, player: PlayerId, action: Action) -> Result<TurnPhase, RulesError> {
        match self.current_player() {
            Some(p) if p == player => self.apply(action),
            Some(p) => Err(RulesError::illegal(action, IllegalReason::NotYourTurn(p))),
            None => self.apply(action),
        }
    }

    /// Let the current seat's strategy take one half-turn.
    ///
    /// Works in any phase, including inside an `OtherPlayers` batch. Fails
    /// with `InconsistentState` if the seat has no strategy.
    pub fn step_automated(&mut self) -> Result<TurnPhase, RulesError> {
        if self.turn.is_finished() {
            return Ok(TurnPhase::RoundComplete);
        }
        let player = self.turn.current();
        let step = self.turn.step();
        let action = self.choose_automated(player, step)?;
        self.resolve(player, action)
    }

    /// Resolve every seat up to the focus seat.
    pub fn run_other_players(&mut self) -> Result<TurnPhase, RulesError> {
        while self.phase() == TurnPhase::OtherPlayers {
            self.step_automated()?;
        }
        Ok(self.phase())
    }

    /// Play automated turns until the deck runs out.
    pub fn play_to_end(&mut self) -> Result<GameResult, RulesError> {
        while !self.turn.is_finished() {
            self.step_automated()?;
        }
        self.result
            .clone()
            .ok_or_else(|| RulesError::InconsistentState("finished without a result".into()))
    }

    /// Lookahead estimate for `focus` on a forked RNG stream.
    ///
    /// The fork is taken from a copy of the game RNG, so repeated calls on
    /// the same state agree and the live stream never advances.
    #[must_use]
    pub fn estimate_value(&self, focus: PlayerId) -> LookaheadEstimate {
        let mut rng = self.rng.clone().fork();
        estimate_value(
            &self.table,
            focus,
            &self.starting_deck,
            self.config.hand_size,
            &mut rng,
        )
    }

    fn choose_automated(&mut self, player: PlayerId, step: ActionPhase) -> Result<Action, RulesError> {
        let strategy = self.table.player(player).strategy.clone().ok_or_else(|| {
            RulesError::InconsistentState(format!("{player} has no strategy"))
        })?;

        let legal = legal_actions(&self.table, player, step);
        let proposal = strategy
            .for_phase(step)
            .propose(&self.table, player, &mut self.rng);

        match proposal {
            Some(action) if legal.contains(&action) => return Ok(action),
            Some(action) => warn!(
                "{player} ({}) proposed illegal {action}; choosing at random",
                strategy.name
            ),
            None => warn!("{player} ({}) declined; choosing at random", strategy.name),
        }

        self.rng.choose(&legal).copied().ok_or_else(|| {
            RulesError::InconsistentState(format!("{player} has no legal {step:?} action"))
        })
    }

    fn resolve(&mut self, player: PlayerId, action: Action) -> Result<TurnPhase, RulesError> {
        if action.phase() != self.turn.step() {
            return Err(RulesError::illegal(action, IllegalReason::WrongPhase));
        }
        apply_action(&mut self.table, player, action)?;

        let sequence = self.history.len() as u32 + 1;
        self.history
            .push_back(ActionRecord::new(player, action, self.turn.round(), sequence));

        let phase = self.turn.advance(&self.table);
        if phase.is_terminal() {
            self.finish();
        }
        Ok(phase)
    }

    fn finish(&mut self) {
        if self.result.is_some() {
            return;
        }
        let result = score_game(&mut self.table.players, &self.table.companies);
        info!(
            "game over after {} actions: {:?}, standings {:?}",
            self.history.len(),
            result,
            standings(&self.table.players)
        );
        self.result = Some(result);
    }
}
