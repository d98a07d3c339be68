use std::fmt::{Debug, Display};
use std::str::FromStr;

use crate::error::SearchError;

pub mod cozy;

pub use cozy::ChessPosition;
pub use cozy_chess::Color;

/// The surface a search needs from a rules engine.
///
/// One position is shared by every frame of a search and mutated in place:
/// each `apply_move` must be paired with an `undo_last_move` that restores
/// the exact prior state.
pub trait Position {
    /// Move type. Its `Display` text must parse back to the same move.
    type Move: Copy + Eq + Debug + Display + FromStr;

    /// Legal moves in the engine's native order (stable for identical states).
    fn legal_moves(&self) -> Vec<Self::Move>;

    fn apply_move(&mut self, mv: Self::Move) -> Result<(), SearchError>;

    fn undo_last_move(&mut self) -> Result<(), SearchError>;

    fn is_terminal(&self) -> bool;

    fn side_to_move(&self) -> Color;

    fn in_check(&self) -> bool;

    /// Fingerprint of the full state; equal before an apply and after its undo.
    fn state_key(&self) -> u64;
}
