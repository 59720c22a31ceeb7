//! Solver configuration.
//!
//! Selects the search algorithm and, for A*, the heuristic. Configurations
//! (de)serialize with serde, so they can be read from JSON:
//!
//! ```
//! use eight_puzzle::{Algorithm, HeuristicKind, SolverConfig};
//!
//! let config = SolverConfig::from_json_str(r#"{ "heuristic": "hamming" }"#).unwrap();
//!
//! assert_eq!(config.algorithm, Algorithm::Astar);
//! assert_eq!(config.heuristic, HeuristicKind::Hamming);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::heuristic::HeuristicKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    #[default]
    Astar,
    BreadthFirst,
    DepthFirst,
}

impl Algorithm {
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Astar => "astar",
            Algorithm::BreadthFirst => "breadth_first",
            Algorithm::DepthFirst => "depth_first",
        }
    }

    /// Whether the algorithm always returns a shortest solution.
    pub fn is_optimal(&self) -> bool {
        !matches!(self, Algorithm::DepthFirst)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SolverConfig {
    #[serde(default)]
    pub algorithm: Algorithm,

    /// Ignored by the uninformed algorithms.
    #[serde(default)]
    pub heuristic: HeuristicKind,
}

impl SolverConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn with_heuristic(mut self, heuristic: HeuristicKind) -> Self {
        self.heuristic = heuristic;
        self
    }
}
