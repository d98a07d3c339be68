use cozy_chess::Color;
use log::debug;

use crate::agent::Agent;
use crate::board::Position;
use crate::error::SearchError;
use crate::search::SearchStrategy;

/// Plays `white` against `black` until the game ends or `max_plies` moves were made.
///
/// Both strategies live for the whole game, so a random player keeps drawing
/// from one generator. `on_move` sees the position before each move is applied.
pub fn play_game<P: Position>(
    position: &mut P,
    white: &mut dyn SearchStrategy<P>,
    black: &mut dyn SearchStrategy<P>,
    max_plies: usize,
    mut on_move: impl FnMut(&P, P::Move),
) -> Result<Vec<P::Move>, SearchError> {
    let mut moves = Vec::new();
    while moves.len() < max_plies && !position.is_terminal() {
        let stm = position.side_to_move();
        let strategy: &mut dyn SearchStrategy<P> = if stm == Color::White { &mut *white } else { &mut *black };
        let mv = Agent::borrowing(&mut *position, stm, strategy).get_action()?;
        on_move(position, mv);
        position.apply_move(mv)?;
        moves.push(mv);
    }
    debug!("game stopped after {} plies", moves.len());
    Ok(moves)
}
