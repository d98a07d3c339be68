use cozy_chess::Color;
use log::{debug, warn};

use crate::board::{ChessPosition, Position};
use crate::config::AgentConfig;
use crate::error::SearchError;
use crate::search::SearchStrategy;

/// Binds a strategy to the shared position for one decision.
pub struct Agent<'a, P: Position> {
    position: &'a mut P,
    color: Color,
    strategy: Box<dyn SearchStrategy<P> + 'a>,
}

impl<'a, P: Position> Agent<'a, P> {
    pub fn new(position: &'a mut P, color: Color, strategy: Box<dyn SearchStrategy<P> + 'a>) -> Self {
        Self { position, color, strategy }
    }

    /// Uses a strategy owned by the caller, so its state (e.g. an rng) carries over between decisions.
    pub fn borrowing(position: &'a mut P, color: Color, strategy: &'a mut dyn SearchStrategy<P>) -> Self {
        Self::new(position, color, Box::new(strategy))
    }

    pub fn color(&self) -> Color { self.color }

    pub fn strategy_name(&self) -> &str { self.strategy.name() }

    pub fn position(&self) -> &P { &*self.position }

    /// Picks a move for the side to move.
    pub fn get_action(&mut self) -> Result<P::Move, SearchError> {
        let stm = self.position.side_to_move();
        if stm != self.color {
            warn!("{} agent for {:?} asked to act with {:?} to move", self.strategy.name(), self.color, stm);
        }
        let mv = self.strategy.select_move(&mut *self.position)?;
        debug!("{} chose {mv}", self.strategy.name());
        Ok(mv)
    }
}

impl<'a> Agent<'a, ChessPosition> {
    pub fn from_config(position: &'a mut ChessPosition, color: Color, config: &AgentConfig) -> Self {
        Self::new(position, color, config.build_strategy())
    }
}
