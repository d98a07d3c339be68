mod common;

use chess_agents::search::{Evaluator, HeuristicEval, MinimaxStrategy};
use chess_agents::{ChessPosition, Color, Position, SearchError, SearchParams, SearchStrategy};
use common::{plus_five_minus_three, Branch, Leaf, ScriptedTree, TableEval};

fn minimax<E>(eval: E, depth: u32) -> MinimaxStrategy<E> { MinimaxStrategy::new(eval, SearchParams::depth(depth)) }

#[test]
fn picks_the_plus_five_move() {
    let mut t = plus_five_minus_three();
    let res = minimax(TableEval, 1).search_root(&mut t).unwrap();
    assert_eq!(res.value, 5.0);
    assert_eq!(res.best, Some(t.child(0)));
}

#[test]
fn black_minimizes_white_referenced_values() {
    let mut t = ScriptedTree::new(Color::Black, Branch(0.0, vec![Leaf(4.0), Leaf(-6.0), Leaf(1.0)]));
    let res = minimax(TableEval, 1).search_root(&mut t).unwrap();
    assert_eq!(res.value, -6.0);
    assert_eq!(res.best, Some(t.child(1)));
}

#[test]
fn two_ply_tree_backs_up_min_of_max() {
    let mut t = ScriptedTree::new(
        Color::White,
        Branch(0.0, vec![
            Branch(0.0, vec![Leaf(3.0), Leaf(12.0), Leaf(8.0)]),
            Branch(0.0, vec![Leaf(2.0), Leaf(4.0), Leaf(6.0)]),
            Branch(0.0, vec![Leaf(14.0), Leaf(5.0), Leaf(2.0)]),
        ]),
    );
    let res = minimax(TableEval, 2).search_root(&mut t).unwrap();
    assert_eq!(res.value, 3.0);
    assert_eq!(res.best, Some(t.child(0)));
    assert_eq!(res.nodes, 13);
    assert_eq!(t.depth(), 0);
}

#[test]
fn ties_go_to_the_first_enumerated_move() {
    for _ in 0..10 {
        let mut t = ScriptedTree::new(Color::White, Branch(0.0, vec![Leaf(1.0), Leaf(1.0)]));
        let first = t.child(0);
        assert_eq!(minimax(TableEval, 1).select_move(&mut t).unwrap(), first);
    }
    let mut t = ScriptedTree::new(Color::Black, Branch(0.0, vec![Leaf(-2.0), Leaf(-2.0)]));
    let first = t.child(0);
    assert_eq!(minimax(TableEval, 1).select_move(&mut t).unwrap(), first);
}

#[test]
fn depth_zero_is_the_white_referenced_evaluation() {
    let eval = HeuristicEval::default();
    let mut pos = ChessPosition::from_fen("r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 2 3").unwrap();
    let mut s = minimax(eval, 0);
    for maximizing in [true, false] {
        let (v, m) = s.search(&mut pos, 0, Color::White, maximizing).unwrap();
        assert_eq!(v, eval.evaluate(&pos, Color::White));
        assert!(m.is_none());
        let (v, _) = s.search(&mut pos, 0, Color::Black, maximizing).unwrap();
        assert_eq!(v, -eval.evaluate(&pos, Color::Black));
    }
}

#[test]
fn depth_zero_root_chooses_no_move() {
    let mut pos = ChessPosition::startpos();
    assert_eq!(minimax(HeuristicEval::default(), 0).select_move(&mut pos), Err(SearchError::NoMoveChosen));
}

#[test]
fn terminal_root_with_moves_chooses_no_move() {
    // Insufficient material: game over even though moves exist
    let mut pos = ChessPosition::from_fen("k7/8/8/8/8/8/8/6NK w - - 0 1").unwrap();
    assert_eq!(minimax(HeuristicEval::default(), 2).select_move(&mut pos), Err(SearchError::NoMoveChosen));
}

#[test]
fn mated_root_has_no_legal_moves() {
    let mut pos = ChessPosition::from_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3").unwrap();
    assert_eq!(minimax(HeuristicEval::default(), 2).select_move(&mut pos), Err(SearchError::NoLegalMoves));
}

#[test]
fn prefers_winning_queen_capture() {
    // Qe2xd2 wins the queen
    let mut pos = ChessPosition::from_fen("k7/8/8/8/8/8/3qQ3/7K w - - 0 1").unwrap();
    let bm = minimax(HeuristicEval::default(), 1).select_move(&mut pos).unwrap();
    assert_eq!(bm.to_string(), "e2d2");
}

#[test]
fn finds_mate_in_one_for_black() {
    // 1.f3 e5 2.g4, Black mates with Qh4
    let mut pos = ChessPosition::from_fen("rnbqkbnr/pppp1ppp/8/4p3/6P1/5P2/PPPPP2P/RNBQKBNR b KQkq - 0 2").unwrap();
    let bm = minimax(HeuristicEval::default(), 1).select_move(&mut pos).unwrap();
    assert_eq!(bm.to_string(), "d8h4");
}

#[test]
fn search_restores_the_position() {
    let mut pos = ChessPosition::startpos();
    let before = pos.fen();
    let key = pos.state_key();
    let params = SearchParams { depth: 2, verify_restore: true };
    let mv = MinimaxStrategy::new(HeuristicEval::default(), params).select_move(&mut pos).unwrap();
    assert!(pos.legal_moves().contains(&mv));
    assert_eq!(pos.fen(), before);
    assert_eq!(pos.state_key(), key);
    assert_eq!(pos.ply(), 0);
}
