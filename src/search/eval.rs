use cozy_chess::{
    get_bishop_moves, get_king_moves, get_knight_moves, get_pawn_attacks, get_rook_moves, BitBoard, Board, Color,
    Piece, Square,
};
use serde::{Deserialize, Serialize};

use crate::board::{ChessPosition, Position};

/// Positive favors White, negative favors Black.
pub type Evaluation = f64;

/// Scores a position from a given color's point of view.
pub trait Evaluator<P: Position> {
    fn evaluate(&self, position: &P, perspective: Color) -> Evaluation;
}

const PAWN: i32 = 100;
const KNIGHT: i32 = 320;
const BISHOP: i32 = 330;
const ROOK: i32 = 500;
const QUEEN: i32 = 900;

// Piece-square tables from White's side, index 0 = a1.
#[rustfmt::skip]
const PAWN_PST: [i32; 64] = [
     0,  0,  0,  0,  0,  0,  0,  0,
     5, 10, 10,-20,-20, 10, 10,  5,
     5, -5,-10,  0,  0,-10, -5,  5,
     0,  0,  0, 20, 20,  0,  0,  0,
     5,  5, 10, 25, 25, 10,  5,  5,
    10, 10, 20, 30, 30, 20, 10, 10,
    50, 50, 50, 50, 50, 50, 50, 50,
     0,  0,  0,  0,  0,  0,  0,  0,
];
#[rustfmt::skip]
const KNIGHT_PST: [i32; 64] = [
    -50,-40,-30,-30,-30,-30,-40,-50,
    -40,-20,  0,  5,  5,  0,-20,-40,
    -30,  5, 10, 15, 15, 10,  5,-30,
    -30,  0, 15, 20, 20, 15,  0,-30,
    -30,  5, 15, 20, 20, 15,  5,-30,
    -30,  0, 10, 15, 15, 10,  0,-30,
    -40,-20,  0,  0,  0,  0,-20,-40,
    -50,-40,-30,-30,-30,-30,-40,-50,
];
#[rustfmt::skip]
const BISHOP_PST: [i32; 64] = [
    -20,-10,-10,-10,-10,-10,-10,-20,
    -10,  5,  0,  0,  0,  0,  5,-10,
    -10, 10, 10, 10, 10, 10, 10,-10,
    -10,  0, 10, 10, 10, 10,  0,-10,
    -10,  5,  5, 10, 10,  5,  5,-10,
    -10,  0,  5, 10, 10,  5,  0,-10,
    -10,  0,  0,  0,  0,  0,  0,-10,
    -20,-10,-10,-10,-10,-10,-10,-20,
];
#[rustfmt::skip]
const ROOK_PST: [i32; 64] = [
     0,  0,  0,  5,  5,  0,  0,  0,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
     5, 10, 10, 10, 10, 10, 10,  5,
     0,  0,  0,  0,  0,  0,  0,  0,
];
#[rustfmt::skip]
const QUEEN_PST: [i32; 64] = [
    -20,-10,-10, -5, -5,-10,-10,-20,
    -10,  0,  5,  0,  0,  0,  0,-10,
    -10,  5,  5,  5,  5,  5,  0,-10,
      0,  0,  5,  5,  5,  5,  0, -5,
     -5,  0,  5,  5,  5,  5,  0, -5,
    -10,  0,  5,  5,  5,  5,  0,-10,
    -10,  0,  0,  0,  0,  0,  0,-10,
    -20,-10,-10, -5, -5,-10,-10,-20,
];
#[rustfmt::skip]
const KING_PST: [i32; 64] = [
     20, 30, 10,  0,  0, 10, 30, 20,
     20, 20,  0,  0,  0,  0, 20, 20,
    -10,-20,-20,-20,-20,-20,-20,-10,
    -20,-30,-30,-40,-40,-30,-30,-20,
    -30,-40,-40,-50,-50,-40,-40,-30,
    -30,-40,-40,-50,-50,-40,-40,-30,
    -30,-40,-40,-50,-50,-40,-40,-30,
    -30,-40,-40,-50,-50,-40,-40,-30,
];

fn piece_value(piece: Piece) -> (i32, &'static [i32; 64]) {
    match piece {
        Piece::Pawn => (PAWN, &PAWN_PST),
        Piece::Knight => (KNIGHT, &KNIGHT_PST),
        Piece::Bishop => (BISHOP, &BISHOP_PST),
        Piece::Rook => (ROOK, &ROOK_PST),
        Piece::Queen => (QUEEN, &QUEEN_PST),
        Piece::King => (0, &KING_PST),
    }
}

/// Tunable weights of the non-material terms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalWeights {
    /// Penalty for the side to move being in check.
    pub check: f64,
    /// Penalty for the side to move being checkmated.
    pub mate: f64,
    /// Bonus per attack on a center square (half on the extended center).
    pub square_control: f64,
}

impl Default for EvalWeights {
    fn default() -> Self { Self { check: 50.0, mate: 100_000.0, square_control: 10.0 } }
}

/// Material plus piece-square bonus, White minus Black.
pub fn material_psqt(board: &Board) -> i32 {
    let mut score = 0;
    for color in [Color::White, Color::Black] {
        let sign = if color == Color::White { 1 } else { -1 };
        for piece in Piece::ALL {
            let (value, pst) = piece_value(piece);
            for sq in board.colored_pieces(color, piece) {
                let idx = if color == Color::White { sq as usize } else { sq.flip_rank() as usize };
                score += sign * (value + pst[idx]);
            }
        }
    }
    score
}

/// Check term from White's side: the checked side to move pays `weight`.
pub fn check_term(position: &ChessPosition, weight: f64) -> Evaluation {
    if !position.in_check() { return 0.0; }
    if position.side_to_move() == Color::White { -weight } else { weight }
}

/// Checkmate term from White's side: the mated side to move pays `weight`.
pub fn checkmate_term(position: &ChessPosition, weight: f64) -> Evaluation {
    if !position.is_checkmate() { return 0.0; }
    if position.side_to_move() == Color::White { -weight } else { weight }
}

fn center_masks() -> (BitBoard, BitBoard) {
    let mut center = BitBoard::EMPTY;
    let mut ring = BitBoard::EMPTY;
    for sq in Square::ALL {
        let (f, r) = (sq.file() as usize, sq.rank() as usize);
        if (3..=4).contains(&f) && (3..=4).contains(&r) {
            center |= sq.bitboard();
        } else if (2..=5).contains(&f) && (2..=5).contains(&r) {
            ring |= sq.bitboard();
        }
    }
    (center, ring)
}

fn attacks(board: &Board, color: Color) -> Vec<BitBoard> {
    let occ = board.occupied();
    let mut out = Vec::with_capacity(16);
    for sq in board.colors(color) {
        let att = match board.piece_on(sq) {
            Some(Piece::Pawn) => get_pawn_attacks(sq, color),
            Some(Piece::Knight) => get_knight_moves(sq),
            Some(Piece::Bishop) => get_bishop_moves(sq, occ),
            Some(Piece::Rook) => get_rook_moves(sq, occ),
            Some(Piece::Queen) => get_bishop_moves(sq, occ) | get_rook_moves(sq, occ),
            Some(Piece::King) => get_king_moves(sq),
            None => BitBoard::EMPTY,
        };
        out.push(att);
    }
    out
}

/// Square control from White's side: attacks on the center, half credit on the ring around it.
pub fn square_control_term(board: &Board, weight: f64) -> Evaluation {
    let (center, ring) = center_masks();
    let mut score = 0.0;
    for color in [Color::White, Color::Black] {
        let sign = if color == Color::White { 1.0 } else { -1.0 };
        for att in attacks(board, color) {
            let c = (att & center).len() as f64;
            let r = (att & ring).len() as f64;
            score += sign * weight * (c + 0.5 * r);
        }
    }
    score
}

/// Check status + material/position + checkmate + square control.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicEval {
    pub weights: EvalWeights,
}

impl HeuristicEval {
    pub fn new(weights: EvalWeights) -> Self { Self { weights } }

    /// Sum of the four terms from White's side.
    pub fn white_score(&self, position: &ChessPosition) -> Evaluation {
        let board = position.board();
        check_term(position, self.weights.check)
            + material_psqt(board) as Evaluation
            + checkmate_term(position, self.weights.mate)
            + square_control_term(board, self.weights.square_control)
    }
}

impl Evaluator<ChessPosition> for HeuristicEval {
    fn evaluate(&self, position: &ChessPosition, perspective: Color) -> Evaluation {
        let score = self.white_score(position);
        if perspective == Color::White { score } else { -score }
    }
}
