use cozy_chess::Color;
use log::debug;

use crate::board::Position;
use crate::error::SearchError;
use crate::search::eval::{Evaluation, Evaluator};
use crate::search::minimax::color_keyed_leaf;
use crate::search::{descend, ensure_root_moves, frontier, SearchParams, SearchResult, SearchStrategy};

/// Minimax with an (alpha, beta) window.
///
/// Cutoffs test the running best value against the opposite bound
/// (`beta <= best` at max nodes, `alpha >= best` at min nodes) and only then
/// tighten the window. The root value always equals plain minimax at the same
/// depth; among equal-valued moves the chosen one may differ, since a cutoff
/// can end enumeration before a later tied move is seen.
pub struct AlphaBetaStrategy<E> {
    eval: E,
    params: SearchParams,
    name: String,
    pub(crate) nodes: u64,
}

impl<E> AlphaBetaStrategy<E> {
    pub fn new(eval: E, params: SearchParams) -> Self {
        Self { eval, params, name: format!("AlphaBeta(depth={})", params.depth), nodes: 0 }
    }

    pub fn search<P>(
        &mut self,
        position: &mut P,
        depth: u32,
        side: Color,
        maximizing: bool,
        mut alpha: Evaluation,
        mut beta: Evaluation,
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
        if maximizing {
            let mut best_value = Evaluation::NEG_INFINITY;
            for mv in frontier(position)? {
                let (value, _) = descend(position, mv, verify, |p| self.search(p, depth - 1, !side, false, alpha, beta))?;
                if value > best_value { best_value = value; best_move = Some(mv); }
                if beta <= best_value { break; }
                alpha = alpha.max(best_value);
            }
            Ok((best_value, best_move))
        } else {
            let mut best_value = Evaluation::INFINITY;
            for mv in frontier(position)? {
                let (value, _) = descend(position, mv, verify, |p| self.search(p, depth - 1, !side, true, alpha, beta))?;
                if value < best_value { best_value = value; best_move = Some(mv); }
                if alpha >= best_value { break; }
                beta = beta.min(best_value);
            }
            Ok((best_value, best_move))
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
        let (value, best) = self.search(
            position,
            self.params.depth,
            side,
            side == Color::White,
            Evaluation::NEG_INFINITY,
            Evaluation::INFINITY,
        )?;
        debug!("alphabeta depth {} value {} nodes {}", self.params.depth, value, self.nodes);
        Ok(SearchResult { value, best, nodes: self.nodes })
    }
}

impl<P, E> SearchStrategy<P> for AlphaBetaStrategy<E>
where
    P: Position,
    E: Evaluator<P>,
{
    fn select_move(&mut self, position: &mut P) -> Result<P::Move, SearchError> {
        self.search_root(position)?.best.ok_or(SearchError::NoMoveChosen)
    }

    fn name(&self) -> &str { &self.name }
}
