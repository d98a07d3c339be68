use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::board::Position;
use crate::error::SearchError;
use crate::search::SearchStrategy;

/// Uniform choice over the legal moves. The generator is injected so runs are reproducible.
pub struct RandomStrategy<R = SmallRng> {
    rng: R,
}

impl RandomStrategy<SmallRng> {
    pub fn seeded(seed: u64) -> Self { Self { rng: SmallRng::seed_from_u64(seed) } }
}

impl<R: Rng> RandomStrategy<R> {
    pub fn with_rng(rng: R) -> Self { Self { rng } }
}

impl<P, R> SearchStrategy<P> for RandomStrategy<R>
where
    P: Position,
    R: Rng,
{
    fn select_move(&mut self, position: &mut P) -> Result<P::Move, SearchError> {
        let moves = position.legal_moves();
        moves.choose(&mut self.rng).copied().ok_or(SearchError::NoLegalMoves)
    }

    fn name(&self) -> &str { "Random" }
}
