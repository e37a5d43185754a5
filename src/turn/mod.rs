//! Turn and phase sequencing.

pub mod machine;

pub use machine::{TurnMachine, TurnPhase};
