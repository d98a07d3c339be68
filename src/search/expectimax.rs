use cozy_chess::Color;
use log::debug;

use crate::board::Position;
use crate::error::SearchError;
use crate::search::eval::{Evaluation, Evaluator};
use crate::search::{descend, ensure_root_moves, SearchParams, SearchResult, SearchStrategy};

/// Max layers alternate with chance layers that average their children,
/// modelling an opponent that plays uniformly at random.
///
/// Leaf values are keyed off `maximizing`, not off color: a leaf reached on a
/// max layer scores `evaluate(side)`, one reached on a chance layer scores
/// `-evaluate(side)`. Since the root is always a max layer this yields values
/// from the root mover's point of view. It is not interchangeable with
/// [`MinimaxStrategy`](crate::search::MinimaxStrategy), whose values are White-referenced.
pub struct ExpectimaxStrategy<E> {
    eval: E,
    params: SearchParams,
    name: String,
    pub(crate) nodes: u64,
}

impl<E> ExpectimaxStrategy<E> {
    pub fn new(eval: E, params: SearchParams) -> Self {
        Self { eval, params, name: format!("Expectimax(depth={})", params.depth), nodes: 0 }
    }

    pub fn search<P>(
        &mut self,
        position: &mut P,
        depth: u32,
        side: Color,
        maximizing: bool,
    ) -> Result<(Evaluation, Option<P::Move>), SearchError>
    where
        P: Position,
        E: Evaluator<P>,
    {
        self.nodes += 1;
        if depth == 0 || position.is_terminal() {
            let e = self.eval.evaluate(position, side);
            return Ok((if maximizing { e } else { -e }, None));
        }
        let verify = self.params.verify_restore;
        let moves = position.legal_moves();
        if maximizing {
            if moves.is_empty() {
                return Err(SearchError::contract("non-terminal position has no legal moves"));
            }
            let mut best_value = Evaluation::NEG_INFINITY;
            let mut best_move = None;
            for mv in moves {
                let (value, _) = descend(position, mv, verify, |p| self.search(p, depth - 1, !side, false))?;
                if value > best_value { best_value = value; best_move = Some(mv); }
            }
            Ok((best_value, best_move))
        } else {
            if moves.is_empty() { return Err(SearchError::DegenerateChanceNode); }
            let count = moves.len() as Evaluation;
            let mut sum = 0.0;
            for mv in moves {
                let (value, _) = descend(position, mv, verify, |p| self.search(p, depth - 1, !side, true))?;
                sum += value;
            }
            Ok((sum / count, None))
        }
    }

    pub fn search_root<P>(&mut self, position: &mut P) -> Result<SearchResult<P::Move>, SearchError>
    where
        P: Position,
        E: Evaluator<P>,
    {
        ensure_root_moves(position)?;
        self.nodes = 0;
        let side = position.side_to_move();
        let (value, best) = self.search(position, self.params.depth, side, true)?;
        debug!("expectimax depth {} value {} nodes {}", self.params.depth, value, self.nodes);
        Ok(SearchResult { value, best, nodes: self.nodes })
    }
}

impl<P, E> SearchStrategy<P> for ExpectimaxStrategy<E>
where
    P: Position,
    E: Evaluator<P>,
{
    fn select_move(&mut self, position: &mut P) -> Result<P::Move, SearchError> {
        self.search_root(position)?.best.ok_or(SearchError::NoMoveChosen)
    }

    fn name(&self) -> &str { &self.name }
}
