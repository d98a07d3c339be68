use thiserror::Error;

/// Failures a search can report. None of them are retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The strategy was asked to move in a position with no legal moves.
    #[error("no legal moves in the current position")]
    NoLegalMoves,
    /// An expectimax chance node had nothing to average over.
    #[error("chance node has no moves to average over")]
    DegenerateChanceNode,
    /// The rules engine broke its contract (bad apply/undo, lossy move text, dead end).
    #[error("rules engine contract violated: {0}")]
    EngineContractViolation(String),
    /// The root search hit its cutoff before choosing a move (depth 0 or terminal root).
    #[error("search stopped at the root without choosing a move")]
    NoMoveChosen,
}

impl SearchError {
    pub(crate) fn contract(msg: impl Into<String>) -> Self {
        SearchError::EngineContractViolation(msg.into())
    }
}

/// Input errors from the board adapter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("FEN error: {0}")]
    InvalidFen(String),
    #[error("Illegal move: {0}")]
    IllegalMove(String),
}
