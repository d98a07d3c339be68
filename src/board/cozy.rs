use cozy_chess::{BitBoard, Board as CozyBoard, Color, File, Move, Piece, Square};

use crate::board::Position;
use crate::error::{BoardError, SearchError};

// Automatic draw thresholds (no claims needed).
const SEVENTY_FIVE_MOVE_PLIES: u8 = 150;
const FIVEFOLD: usize = 5;

/// Cozy-chess board with a history stack so moves can be undone exactly.
#[derive(Clone, Debug)]
pub struct ChessPosition {
    board: CozyBoard,
    stack: Vec<CozyBoard>,
}

impl ChessPosition {
    pub fn startpos() -> Self { Self::from_board(CozyBoard::default()) }

    pub fn from_board(board: CozyBoard) -> Self { Self { board, stack: Vec::with_capacity(128) } }

    pub fn from_fen(fen: &str) -> Result<Self, BoardError> {
        CozyBoard::from_fen(fen, false)
            .map(Self::from_board)
            .map_err(|e| BoardError::InvalidFen(format!("{e:?}")))
    }

    pub fn fen(&self) -> String { format!("{}", self.board) }

    pub fn board(&self) -> &CozyBoard { &self.board }

    /// Plies applied since construction (and not yet undone).
    pub fn ply(&self) -> usize { self.stack.len() }

    /// Accepts the standard castling form (e1g1) as well as cozy's king-takes-rook form (e1h1).
    pub fn play_uci(&mut self, mv_uci: &str) -> Result<Move, BoardError> {
        let m = self
            .legal_moves()
            .into_iter()
            .find(|&m| m.to_string() == mv_uci || self.uci(m) == mv_uci)
            .ok_or_else(|| BoardError::IllegalMove(mv_uci.to_string()))?;
        self.push(m);
        Ok(m)
    }

    /// Standard UCI text for a legal move of this position: castling is written
    /// as the king's two-square step rather than cozy's king-to-rook encoding.
    pub fn uci(&self, mv: Move) -> String {
        let b = &self.board;
        let castles = b.piece_on(mv.from) == Some(Piece::King) && b.colors(b.side_to_move()).has(mv.to);
        if !castles { return mv.to_string(); }
        let file = if (mv.to.file() as u8) > (mv.from.file() as u8) { File::G } else { File::C };
        Move { to: Square::new(file, mv.from.rank()), ..mv }.to_string()
    }

    pub fn set_from_start_and_moves(moves: &[String]) -> Result<Self, BoardError> {
        let mut pos = Self::startpos();
        for m in moves { pos.play_uci(m)?; }
        Ok(pos)
    }

    pub fn has_legal_moves(&self) -> bool {
        let mut any = false;
        self.board.generate_moves(|_| { any = true; true });
        any
    }

    pub fn is_checkmate(&self) -> bool { self.in_check() && !self.has_legal_moves() }

    pub fn is_stalemate(&self) -> bool { !self.in_check() && !self.has_legal_moves() }

    /// Neither side can ever deliver mate.
    pub fn is_insufficient_material(&self) -> bool {
        self.has_insufficient_material(Color::White) && self.has_insufficient_material(Color::Black)
    }

    /// Whether `color` alone lacks mating material, counting helpmates by the
    /// opponent: a lone knight only fails when the other side has nothing but
    /// king and queens to block with, and bishops only fail when every bishop on
    /// the board stands on one square color with no pawns or knights around.
    pub fn has_insufficient_material(&self, color: Color) -> bool {
        let b = &self.board;
        let ours = b.colors(color);
        let heavy = b.pieces(Piece::Pawn) | b.pieces(Piece::Rook) | b.pieces(Piece::Queen);
        if !(ours & heavy).is_empty() { return false; }
        if !(ours & b.pieces(Piece::Knight)).is_empty() {
            let theirs = b.colors(!color);
            let blockers = theirs & (b.pieces(Piece::King) | b.pieces(Piece::Queen));
            return ours.len() <= 2 && theirs.len() == blockers.len();
        }
        if !(ours & b.pieces(Piece::Bishop)).is_empty() {
            let bishops = b.pieces(Piece::Bishop);
            let dark = dark_squares();
            let same_shade = (bishops & dark).is_empty() || bishops.len() == (bishops & dark).len();
            return same_shade && b.pieces(Piece::Pawn).is_empty() && b.pieces(Piece::Knight).is_empty();
        }
        true
    }

    pub fn is_fivefold_repetition(&self) -> bool {
        let key = self.board.hash();
        let reps = self.stack.iter().filter(|b| b.hash() == key).count() + 1;
        reps >= FIVEFOLD
    }

    fn push(&mut self, m: Move) {
        self.stack.push(self.board.clone());
        self.board.play_unchecked(m);
    }
}

fn dark_squares() -> BitBoard {
    Square::ALL
        .into_iter()
        .filter(|sq| (sq.file() as usize + sq.rank() as usize) % 2 == 0)
        .fold(BitBoard::EMPTY, |bb, sq| bb | sq.bitboard())
}

impl Default for ChessPosition {
    fn default() -> Self { Self::startpos() }
}

impl Position for ChessPosition {
    type Move = Move;

    fn legal_moves(&self) -> Vec<Move> {
        let mut moves: Vec<Move> = Vec::with_capacity(64);
        self.board.generate_moves(|ml| { moves.extend(ml); false });
        moves
    }

    fn apply_move(&mut self, mv: Move) -> Result<(), SearchError> {
        if !self.board.is_legal(mv) {
            return Err(SearchError::contract(format!("illegal move {mv} offered in {}", self.fen())));
        }
        self.push(mv);
        Ok(())
    }

    fn undo_last_move(&mut self) -> Result<(), SearchError> {
        let prev = self.stack.pop().ok_or_else(|| SearchError::contract("undo with no move applied"))?;
        self.board = prev;
        Ok(())
    }

    fn is_terminal(&self) -> bool {
        !self.has_legal_moves()
            || self.board.halfmove_clock() >= SEVENTY_FIVE_MOVE_PLIES
            || self.is_insufficient_material()
            || self.is_fivefold_repetition()
    }

    fn side_to_move(&self) -> Color { self.board.side_to_move() }

    fn in_check(&self) -> bool { !self.board.checkers().is_empty() }

    fn state_key(&self) -> u64 {
        self.board.hash() ^ (self.stack.len() as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15)
    }
}
