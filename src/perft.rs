use crate::board::Position;
use crate::error::SearchError;

// Make/unmake perft over any rules engine adapter (no cloning)
pub fn perft<P: Position>(position: &mut P, depth: u32) -> Result<u64, SearchError> {
    if depth == 0 { return Ok(1); }
    let mut nodes = 0u64;
    for mv in position.legal_moves() {
        position.apply_move(mv)?;
        let sub = perft(position, depth - 1);
        position.undo_last_move()?;
        nodes += sub?;
    }
    Ok(nodes)
}
