use cozy_chess::Color;
use log::{debug, trace};

use crate::board::Position;
use crate::error::SearchError;
use crate::search::eval::{Evaluation, Evaluator};
use crate::search::{descend, ensure_root_moves, frontier, SearchParams, SearchResult, SearchStrategy};

/// Full-width minimax. White maximizes, Black minimizes, and every value in
/// the tree is White-referenced.
pub struct MinimaxStrategy<E> {
    eval: E,
    params: SearchParams,
    name: String,
    pub(crate) nodes: u64,
}

impl<E> MinimaxStrategy<E> {
    pub fn new(eval: E, params: SearchParams) -> Self {
        Self { eval, params, name: format!("Minimax(depth={})", params.depth), nodes: 0 }
    }
}

/// White-referenced leaf value: the evaluation for `side`, sign-flipped when `side` is Black.
pub(crate) fn color_keyed_leaf<P: Position, E: Evaluator<P>>(eval: &E, position: &P, side: Color) -> Evaluation {
    let e = eval.evaluate(position, side);
    if side == Color::White { e } else { -e }
}

impl<E> MinimaxStrategy<E> {
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
            return Ok((color_keyed_leaf(&self.eval, position, side), None));
        }
        let verify = self.params.verify_restore;
        let mut best_move = None;
        let mut best_value = if maximizing { Evaluation::NEG_INFINITY } else { Evaluation::INFINITY };
        for mv in frontier(position)? {
            let (value, _) = descend(position, mv, verify, |p| self.search(p, depth - 1, !side, !maximizing))?;
            let better = if maximizing { value > best_value } else { value < best_value };
            if better {
                best_value = value;
                best_move = Some(mv);
            }
        }
        Ok((best_value, best_move))
    }

    pub fn search_root<P>(&mut self, position: &mut P) -> Result<SearchResult<P::Move>, SearchError>
    where
        P: Position,
        E: Evaluator<P>,
    {
        ensure_root_moves(position)?;
        self.nodes = 0;
        let side = position.side_to_move();
        let (value, best) = self.search(position, self.params.depth, side, side == Color::White)?;
        if let Some(m) = best { trace!("minimax best {m} value {value}"); }
        debug!("minimax depth {} value {} nodes {}", self.params.depth, value, self.nodes);
        Ok(SearchResult { value, best, nodes: self.nodes })
    }
}

impl<P, E> SearchStrategy<P> for MinimaxStrategy<E>
where
    P: Position,
    E: Evaluator<P>,
{
    fn select_move(&mut self, position: &mut P) -> Result<P::Move, SearchError> {
        self.search_root(position)?.best.ok_or(SearchError::NoMoveChosen)
    }

    fn name(&self) -> &str { &self.name }
}
