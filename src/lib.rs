//! 8-puzzle solver.
//!
//! Boards are written as nine symbols in row-major order, `1`..=`8` for the
//! tiles and `_` for the blank; the goal is `12345678_`. Every solver returns
//! the moves of the blank that lead to the goal:
//!
//! ```
//! use eight_puzzle::{astar_manhattan, Direction};
//!
//! let moves = astar_manhattan("1234567_8").unwrap();
//! assert_eq!(moves, Some(vec![Direction::Right]));
//!
//! // odd permutations never reach the goal
//! assert_eq!(astar_manhattan("21345678_").unwrap(), None);
//! ```
//!
//! `Ok(None)` means the search ran out of boards, `Ok(Some(vec![]))` means
//! the input already was the goal, and `Err` is reserved for malformed input.

pub mod board;
pub mod config;
pub mod direction;
pub mod error;
pub mod heuristic;
pub mod node;
pub mod search;
pub mod solver;
pub mod tile;


pub use board::{successors, Board, GOAL};
pub use config::{Algorithm, SolverConfig};
pub use direction::{moves_str, Direction};
pub use error::{PuzzleError, Result};
pub use heuristic::{hamming, linear_conflict, manhattan, Heuristic, HeuristicKind};
pub use node::{Node, NodeId, SearchTree};
pub use search::{Outcome, SearchStats};
pub use solver::Solver;

/// A* from `state` using `heuristic`.
pub fn solve_astar<H: Heuristic>(state: &str, heuristic: H) -> Result<Option<Vec<Direction>>> {
    let board: Board = state.parse()?;
    Ok(search::astar(board, &heuristic).into_actions())
}

/// A* scored by misplaced-tile count.
pub fn astar_hamming(state: &str) -> Result<Option<Vec<Direction>>> {
    solve_astar(state, hamming)
}

/// A* scored by summed tile distances.
pub fn astar_manhattan(state: &str) -> Result<Option<Vec<Direction>>> {
    solve_astar(state, manhattan)
}

/// A* scored by Manhattan distance plus line conflicts.
pub fn astar_linear_conflict(state: &str) -> Result<Option<Vec<Direction>>> {
    solve_astar(state, linear_conflict)
}

/// Breadth-first search; always returns a shortest solution.
pub fn bfs(state: &str) -> Result<Option<Vec<Direction>>> {
    let board: Board = state.parse()?;
    Ok(search::breadth_first(board).into_actions())
}

/// Depth-first search; returns a solution, not necessarily the shortest.
pub fn dfs(state: &str) -> Result<Option<Vec<Direction>>> {
    let board: Board = state.parse()?;
    Ok(search::depth_first(board).into_actions())
}
