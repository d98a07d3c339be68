#![allow(dead_code)]
// Scripted game tree standing in for a rules engine.
use chess_agents::search::{Evaluation, Evaluator};
use chess_agents::{Color, Position, SearchError};
use std::fmt;
use std::str::FromStr;

/// Tree shape: a leaf is terminal, `Stuck` is a non-terminal node with no moves.
pub enum Spec {
    Leaf(f64),
    Branch(f64, Vec<Spec>),
    Stuck,
}

pub use Spec::{Branch, Leaf, Stuck};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Edge(pub usize);

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "n{}", self.0) }
}

impl FromStr for Edge {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.strip_prefix('n').and_then(|n| n.parse().ok()).map(Edge).ok_or_else(|| format!("bad edge {s}"))
    }
}

struct Node {
    value: f64,
    terminal: bool,
    children: Vec<usize>,
}

pub struct ScriptedTree {
    nodes: Vec<Node>,
    root_side: Color,
    path: Vec<usize>,
    /// When set, undo forgets to pop the path.
    pub broken_undo: bool,
    pub applies: u64,
}

impl ScriptedTree {
    pub fn new(root_side: Color, spec: Spec) -> Self {
        let mut t = Self { nodes: Vec::new(), root_side, path: vec![0], broken_undo: false, applies: 0 };
        t.add(spec);
        t
    }

    fn add(&mut self, spec: Spec) -> usize {
        let id = self.nodes.len();
        match spec {
            Leaf(v) => self.nodes.push(Node { value: v, terminal: true, children: Vec::new() }),
            Stuck => self.nodes.push(Node { value: 0.0, terminal: false, children: Vec::new() }),
            Branch(v, kids) => {
                self.nodes.push(Node { value: v, terminal: false, children: Vec::new() });
                for k in kids {
                    let c = self.add(k);
                    self.nodes[id].children.push(c);
                }
            }
        }
        id
    }

    pub fn current(&self) -> usize { *self.path.last().unwrap() }

    pub fn depth(&self) -> usize { self.path.len() - 1 }

    /// White-referenced value stored at the current node.
    pub fn value(&self) -> f64 { self.nodes[self.current()].value }

    /// Edge to the `i`-th child of the current node.
    pub fn child(&self, i: usize) -> Edge { Edge(self.nodes[self.current()].children[i]) }
}

impl Position for ScriptedTree {
    type Move = Edge;

    fn legal_moves(&self) -> Vec<Edge> { self.nodes[self.current()].children.iter().map(|&c| Edge(c)).collect() }

    fn apply_move(&mut self, mv: Edge) -> Result<(), SearchError> {
        if !self.nodes[self.current()].children.contains(&mv.0) {
            return Err(SearchError::EngineContractViolation(format!("{mv} is not a child")));
        }
        self.applies += 1;
        self.path.push(mv.0);
        Ok(())
    }

    fn undo_last_move(&mut self) -> Result<(), SearchError> {
        if self.path.len() <= 1 {
            return Err(SearchError::EngineContractViolation("nothing to undo".into()));
        }
        if !self.broken_undo { self.path.pop(); }
        Ok(())
    }

    fn is_terminal(&self) -> bool { self.nodes[self.current()].terminal }

    fn side_to_move(&self) -> Color { if self.depth() % 2 == 0 { self.root_side } else { !self.root_side } }

    fn in_check(&self) -> bool { false }

    fn state_key(&self) -> u64 { self.path.iter().fold(17u64, |h, &n| h.wrapping_mul(31).wrapping_add(n as u64)) }
}

/// Reads the scripted White-referenced value, negated for Black.
#[derive(Clone, Copy, Default)]
pub struct TableEval;

impl Evaluator<ScriptedTree> for TableEval {
    fn evaluate(&self, position: &ScriptedTree, perspective: Color) -> Evaluation {
        if perspective == Color::White { position.value() } else { -position.value() }
    }
}

/// White to move, two moves: the first leads to +5, the second to -3.
pub fn plus_five_minus_three() -> ScriptedTree {
    ScriptedTree::new(Color::White, Branch(0.0, vec![Leaf(5.0), Leaf(-3.0)]))
}

/// Endless game with the same `width` moves on offer at every ply.
pub struct Carousel {
    pub width: usize,
    pub played: Vec<Edge>,
}

impl Carousel {
    pub fn new(width: usize) -> Self { Self { width, played: Vec::new() } }
}

impl Position for Carousel {
    type Move = Edge;

    fn legal_moves(&self) -> Vec<Edge> { (0..self.width).map(Edge).collect() }

    fn apply_move(&mut self, mv: Edge) -> Result<(), SearchError> {
        if mv.0 >= self.width {
            return Err(SearchError::EngineContractViolation(format!("{mv} is out of range")));
        }
        self.played.push(mv);
        Ok(())
    }

    fn undo_last_move(&mut self) -> Result<(), SearchError> {
        self.played.pop().map(|_| ()).ok_or_else(|| SearchError::EngineContractViolation("nothing to undo".into()))
    }

    fn is_terminal(&self) -> bool { false }

    fn side_to_move(&self) -> Color { if self.played.len() % 2 == 0 { Color::White } else { Color::Black } }

    fn in_check(&self) -> bool { false }

    fn state_key(&self) -> u64 { self.played.iter().fold(7u64, |h, m| h.wrapping_mul(31).wrapping_add(m.0 as u64)) }
}
