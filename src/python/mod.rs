//! Python bindings for the Startups engine.
//!
//! # Quick Start
//!
//! ```python
//! import startups_engine as su
//!
//! game = su.Game(player_count=4, focus_player=0, seed=42)
//!
//! while not game.is_terminal():
//!     game.run_other_players()
//!     if game.is_terminal():
//!         break
//!     game.apply(game.legal_actions()[0])
//!
//! print(game.winner(), game.estimate_value(su.PlayerId(0)))
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_game;

pub use py_core::*;
pub use py_game::*;

/// startups_engine: rules engine for the Startups card game.
#[pymodule]
fn startups_engine(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyPlayerId>()?;
    m.add_class::<PyAction>()?;
    m.add_class::<PyGame>()?;
    Ok(())
}
