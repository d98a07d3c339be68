// Move-selecting chess agents: random, minimax, alpha-beta and expectimax
pub mod agent;
pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod perft;
pub mod search;

pub use agent::Agent;
pub use board::{ChessPosition, Color, Position};
pub use config::AgentConfig;
pub use error::{BoardError, SearchError};
pub use search::{build_strategy, SearchParams, SearchResult, SearchStrategy, StrategyKind};
