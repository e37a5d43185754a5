//! Game bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{new_game, Action, GameConfig, GameState, PlayerId};
use crate::turn::TurnPhase;

use super::py_core::{PyAction, PyPlayerId};

fn value_error(err: impl std::fmt::Display) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// Python wrapper for a Startups game.
///
/// With `focus_player` set, every other seat is automated and resolved by
/// `run_other_players()`; the focus seat is driven from Python.
#[pyclass(name = "Game")]
pub struct PyGame {
    state: GameState,
}

#[pymethods]
impl PyGame {
    /// Create a new game.
    ///
    /// # Arguments
    /// - player_count: Number of seats
    /// - human_count: Leading seats driven from Python
    /// - focus_player: Seat played step by step while others run in batches
    /// - seed: RNG seed for deterministic games
    /// - config_json: Full `GameConfig` as JSON; overrides the other arguments
    #[new]
    #[pyo3(signature = (
        player_count = 4,
        human_count = 0,
        focus_player = None,
        seed = 42,
        config_json = None
    ))]
    fn new(
        player_count: usize,
        human_count: usize,
        focus_player: Option<u8>,
        seed: u64,
        config_json: Option<&str>,
    ) -> PyResult<Self> {
        let config = match config_json {
            Some(json) => GameConfig::from_json(json).map_err(value_error)?,
            None => {
                let config = GameConfig::default().with_players(player_count, human_count);
                match focus_player {
                    Some(seat) => config.with_focus_player(PlayerId::new(seat)),
                    None => config,
                }
            }
        };
        let state = new_game(&config, seed).map_err(value_error)?;
        Ok(Self { state })
    }

    /// Legal actions for the seat whose phase it is.
    fn legal_actions(&self) -> Vec<PyAction> {
        self.state.legal_actions().into_iter().map(PyAction).collect()
    }

    /// Size of the flat action space.
    fn action_space_size(&self) -> usize {
        Action::all(self.state.table().companies.len()).len()
    }

    /// Legal-action mask over the flat action space.
    fn action_mask(&self) -> Vec<bool> {
        let legal = self.state.legal_actions();
        Action::all(self.state.table().companies.len())
            .iter()
            .map(|a| legal.contains(a))
            .collect()
    }

    /// Apply an action for the seat whose phase it is.
    ///
    /// Raises ValueError if the action is illegal; the game is unchanged.
    fn apply(&mut self, action: &PyAction) -> PyResult<String> {
        self.state
            .apply(action.0)
            .map(|phase| phase.to_string())
            .map_err(value_error)
    }

    /// Let the current seat's strategy act once.
    fn step_automated(&mut self) -> PyResult<String> {
        self.state
            .step_automated()
            .map(|phase| phase.to_string())
            .map_err(value_error)
    }

    /// Resolve the automated seats before the focus seat.
    fn run_other_players(&mut self) -> PyResult<String> {
        self.state
            .run_other_players()
            .map(|phase| phase.to_string())
            .map_err(value_error)
    }

    /// Play automated turns to the end and return the winning seat.
    fn play_to_end(&mut self) -> PyResult<Option<PyPlayerId>> {
        let result = self.state.play_to_end().map_err(value_error)?;
        Ok(result.winner().map(PyPlayerId))
    }

    /// Current phase as text.
    #[getter]
    fn phase(&self) -> String {
        self.state.phase().to_string()
    }

    /// True while the current phase is a pickup.
    fn is_pickup(&self) -> bool {
        matches!(self.state.phase(), TurnPhase::Pickup(_))
    }

    #[getter]
    fn current_player(&self) -> Option<PyPlayerId> {
        self.state.current_player().map(PyPlayerId)
    }

    fn is_terminal(&self) -> bool {
        self.state.is_terminal()
    }

    /// Winning seat (lowest seat on a tie), if the game is over.
    fn winner(&self) -> Option<PyPlayerId> {
        self.state.result().and_then(|r| r.winner()).map(PyPlayerId)
    }

    #[getter]
    fn player_count(&self) -> usize {
        self.state.table().player_count()
    }

    #[getter]
    fn deck_size(&self) -> usize {
        self.state.table().deck.len()
    }

    fn coins(&self, player: &PyPlayerId) -> PyResult<i64> {
        self.check_seat(player)?;
        Ok(self.state.table().player(player.0).coins)
    }

    /// Lookahead value for a seat.
    fn estimate_value(&self, player: &PyPlayerId) -> PyResult<f64> {
        self.check_seat(player)?;
        Ok(self.state.estimate_value(player.0).value)
    }

    /// The table from a seat's point of view, as JSON.
    fn view_json(&self, player: &PyPlayerId) -> PyResult<String> {
        self.check_seat(player)?;
        self.state.view(player.0).to_json().map_err(value_error)
    }

    /// Copy the game for simulation.
    fn copy(&self) -> Self {
        Self {
            state: self.state.clone(),
        }
    }

    fn __repr__(&self) -> String {
        format!(
            "Game(players={}, deck={}, phase={})",
            self.state.table().player_count(),
            self.state.table().deck.len(),
            self.state.phase()
        )
    }
}

impl PyGame {
    fn check_seat(&self, player: &PyPlayerId) -> PyResult<()> {
        if player.0.index() >= self.state.table().player_count() {
            return Err(value_error(format!("no seat {}", player.0 .0)));
        }
        Ok(())
    }
}
