use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::board::ChessPosition;
use crate::search::{build_strategy, EvalWeights, HeuristicEval, SearchParams, SearchStrategy, StrategyKind};

/// Agent settings as read from JSON. Missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    pub strategy: StrategyKind,
    pub depth: u32,
    pub seed: u64,
    pub verify_restore: bool,
    pub weights: EvalWeights,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            strategy: StrategyKind::AlphaBeta,
            depth: 3,
            seed: 0,
            verify_restore: false,
            weights: EvalWeights::default(),
        }
    }
}

impl AgentConfig {
    pub fn from_json_str(s: &str) -> Result<Self> {
        serde_json::from_str(s).context("parsing agent config")
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        Self::from_json_str(&text).with_context(|| format!("in {}", path.display()))
    }

    pub fn search_params(&self) -> SearchParams {
        SearchParams { depth: self.depth, verify_restore: self.verify_restore }
    }

    pub fn build_strategy(&self) -> Box<dyn SearchStrategy<ChessPosition>> {
        build_strategy(self.strategy, self.search_params(), self.seed, HeuristicEval::new(self.weights))
    }

    /// Command-line values win over the file; `None`/`false` keep what the file says.
    pub fn with_overrides(mut self, depth: Option<u32>, seed: Option<u64>, verify_restore: bool) -> Self {
        if let Some(d) = depth { self.depth = d; }
        if let Some(s) = seed { self.seed = s; }
        self.verify_restore |= verify_restore;
        self
    }
}
