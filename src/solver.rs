use tracing::debug;

use crate::board::Board;
use crate::config::{Algorithm, SolverConfig};
use crate::error::Result;
use crate::search::{self, Outcome};

/// Runs the search selected by a [`SolverConfig`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Solver {
    config: SolverConfig,
}

impl Solver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Parses `state` and searches from it.
    pub fn solve(&self, state: &str) -> Result<Outcome> {
        let board: Board = state.parse()?;
        Ok(self.solve_board(board))
    }

    pub fn solve_board(&self, board: Board) -> Outcome {
        debug!(
            event = "solve",
            algorithm = self.config.algorithm.name(),
            heuristic = self.config.heuristic.name(),
            state = %board,
        );

        match self.config.algorithm {
            Algorithm::Astar => search::astar(board, &self.config.heuristic),
            Algorithm::BreadthFirst => search::breadth_first(board),
            Algorithm::DepthFirst => search::depth_first(board),
        }
    }
}
