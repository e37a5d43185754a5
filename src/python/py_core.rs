//! Core type bindings for Python.

use pyo3::prelude::*;

use crate::core::{Action, CompanyId, PlayerId};

/// Python wrapper for PlayerId.
#[pyclass(name = "PlayerId")]
#[derive(Clone, Debug)]
pub struct PyPlayerId(pub PlayerId);

#[pymethods]
impl PyPlayerId {
    #[new]
    fn new(id: u8) -> Self {
        Self(PlayerId::new(id))
    }

    /// Get the seat index (0-based).
    fn index(&self) -> usize {
        self.0.index()
    }

    #[getter]
    fn id(&self) -> u8 {
        self.0 .0
    }

    fn __repr__(&self) -> String {
        format!("PlayerId({})", self.0 .0)
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        self.0 .0 as u64
    }
}

/// Python wrapper for Action.
///
/// Build with the static constructors, or from a flat index into the
/// action space returned by `Game.action_space_size()`.
#[pyclass(name = "Action")]
#[derive(Clone, Debug)]
pub struct PyAction(pub Action);

#[pymethods]
impl PyAction {
    #[staticmethod]
    fn pickup_deck() -> Self {
        Self(Action::PickupDeck)
    }

    #[staticmethod]
    fn pickup_market(company: u8) -> Self {
        Self(Action::PickupMarket(CompanyId::new(company)))
    }

    #[staticmethod]
    fn putdown_shares(company: u8) -> Self {
        Self(Action::PutdownShares(CompanyId::new(company)))
    }

    #[staticmethod]
    fn putdown_market(company: u8) -> Self {
        Self(Action::PutdownMarket(CompanyId::new(company)))
    }

    /// Action at `index` in the flat action space for `company_count` companies.
    #[staticmethod]
    fn from_index(index: usize, company_count: usize) -> Option<Self> {
        Action::all(company_count).get(index).copied().map(Self)
    }

    /// Position of this action in the flat action space.
    fn index(&self, company_count: usize) -> Option<usize> {
        Action::all(company_count).iter().position(|a| *a == self.0)
    }

    /// "pickup" or "putdown".
    #[getter]
    fn phase(&self) -> &'static str {
        match self.0.phase() {
            crate::core::ActionPhase::Pickup => "pickup",
            crate::core::ActionPhase::Putdown => "putdown",
        }
    }

    /// Target company, or None for a deck pickup.
    #[getter]
    fn company(&self) -> Option<u8> {
        self.0.target().map(|c| c.0)
    }

    fn __repr__(&self) -> String {
        format!("Action({})", self.0)
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};
        let mut hasher = DefaultHasher::new();
        self.0.hash(&mut hasher);
        hasher.finish()
    }
}
