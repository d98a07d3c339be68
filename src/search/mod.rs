use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::board::Position;
use crate::error::SearchError;

pub mod alphabeta;
pub mod eval;
pub mod expectimax;
pub mod minimax;
pub mod random;

pub use alphabeta::AlphaBetaStrategy;
pub use eval::{EvalWeights, Evaluation, Evaluator, HeuristicEval};
pub use expectimax::ExpectimaxStrategy;
pub use minimax::MinimaxStrategy;
pub use random::RandomStrategy;

/// Picks a move for the side to move. The position is borrowed mutably for
/// the whole call and handed back unchanged.
pub trait SearchStrategy<P: Position> {
    fn select_move(&mut self, position: &mut P) -> Result<P::Move, SearchError>;

    fn name(&self) -> &str;
}

// Lets an agent borrow a strategy that outlives a single decision.
impl<P: Position, S: SearchStrategy<P> + ?Sized> SearchStrategy<P> for &mut S {
    fn select_move(&mut self, position: &mut P) -> Result<P::Move, SearchError> { (**self).select_move(position) }

    fn name(&self) -> &str { (**self).name() }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchParams {
    pub depth: u32,
    /// Compare state keys around every apply/undo and re-parse each move's text.
    pub verify_restore: bool,
}

impl Default for SearchParams {
    fn default() -> Self { Self { depth: 3, verify_restore: false } }
}

impl SearchParams {
    pub fn depth(depth: u32) -> Self { Self { depth, ..Self::default() } }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult<M> {
    pub value: Evaluation,
    pub best: Option<M>,
    pub nodes: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrategyKind {
    Random,
    Minimax,
    AlphaBeta,
    Expectimax,
}

/// Builds the strategy named by `kind`. `seed` only matters for `Random`.
pub fn build_strategy<P, E>(kind: StrategyKind, params: SearchParams, seed: u64, evaluator: E) -> Box<dyn SearchStrategy<P>>
where
    P: Position + 'static,
    E: Evaluator<P> + 'static,
{
    match kind {
        StrategyKind::Random => Box::new(RandomStrategy::seeded(seed)),
        StrategyKind::Minimax => Box::new(MinimaxStrategy::new(evaluator, params)),
        StrategyKind::AlphaBeta => Box::new(AlphaBetaStrategy::new(evaluator, params)),
        StrategyKind::Expectimax => Box::new(ExpectimaxStrategy::new(evaluator, params)),
    }
}

/// Applies `mv`, runs `child` on the moved position and undoes the move before
/// returning, whatever `child` returned. Callers may only break out of their
/// move loop after this returns.
pub(crate) fn descend<P, T>(
    position: &mut P,
    mv: P::Move,
    verify: bool,
    child: impl FnOnce(&mut P) -> Result<T, SearchError>,
) -> Result<T, SearchError>
where
    P: Position,
{
    let before = if verify {
        let text = mv.to_string();
        if text.parse::<P::Move>().ok() != Some(mv) {
            return Err(SearchError::contract(format!("move text {text} does not round-trip")));
        }
        Some(position.state_key())
    } else {
        None
    };
    position.apply_move(mv)?;
    let out = child(position);
    position.undo_last_move()?;
    if let Some(key) = before {
        if position.state_key() != key {
            return Err(SearchError::contract(format!("undo of {mv} did not restore the prior state")));
        }
    }
    out
}

/// Legal moves of an interior node; an empty list here is the engine's fault.
pub(crate) fn frontier<P: Position>(position: &P) -> Result<Vec<P::Move>, SearchError> {
    let moves = position.legal_moves();
    if moves.is_empty() {
        return Err(SearchError::contract("non-terminal position has no legal moves"));
    }
    Ok(moves)
}

/// Root precondition shared by every tree search.
pub(crate) fn ensure_root_moves<P: Position>(position: &P) -> Result<(), SearchError> {
    if position.legal_moves().is_empty() { Err(SearchError::NoLegalMoves) } else { Ok(()) }
}
