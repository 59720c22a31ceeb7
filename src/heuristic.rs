//! Admissible distance estimates from a board to the goal.
//!
//! Every estimator implements [`Heuristic`]. Plain functions and closures of
//! type `Fn(&Board) -> u32` implement it too, so callers can hand the search
//! engine either a [`HeuristicKind`] or their own scoring function.

use serde::{Deserialize, Serialize};

use crate::board::{Board, SIZE, WIDTH};
use crate::tile::Tile;

pub trait Heuristic {
    fn estimate(&self, board: &Board) -> u32;
}

impl<F> Heuristic for F
where
    F: Fn(&Board) -> u32,
{
    fn estimate(&self, board: &Board) -> u32 {
        self(board)
    }
}

/// Number of numbered tiles not on their goal cell.
pub fn hamming(board: &Board) -> u32 {
    board
        .tiles()
        .iter()
        .enumerate()
        .filter(|(idx, tile)| !tile.is_space() && tile.solved_idx() != *idx)
        .count() as u32
}

/// Sum of row and column offsets of every numbered tile from its goal cell.
pub fn manhattan(board: &Board) -> u32 {
    board
        .tiles()
        .iter()
        .enumerate()
        .filter(|(_, tile)| !tile.is_space())
        .map(|(idx, tile)| tile_distance(idx, tile))
        .sum()
}

/// Manhattan distance plus two moves for every tile that has to leave its
/// row (or column) so the others in that line can pass each other.
pub fn linear_conflict(board: &Board) -> u32 {
    let tiles = board.tiles();
    let mut conflicts = 0;

    for line in 0..WIDTH {
        // goal columns of the tiles sitting in their goal row, left to right
        let row: Vec<usize> = (0..WIDTH)
            .map(|col| tiles[line * WIDTH + col])
            .filter(|tile| !tile.is_space() && tile.solved_idx() / WIDTH == line)
            .map(|tile| tile.solved_idx() % WIDTH)
            .collect();
        conflicts += line_conflicts(&row);

        let column: Vec<usize> = (0..WIDTH)
            .map(|r| tiles[r * WIDTH + line])
            .filter(|tile| !tile.is_space() && tile.solved_idx() % WIDTH == line)
            .map(|tile| tile.solved_idx() / WIDTH)
            .collect();
        conflicts += line_conflicts(&column);
    }

    manhattan(board) + 2 * conflicts
}

fn tile_distance(idx: usize, tile: &Tile) -> u32 {
    let solved_idx = tile.solved_idx();
    let vertical_moves = (idx / WIDTH).abs_diff(solved_idx / WIDTH);
    let lateral_moves = (idx % WIDTH).abs_diff(solved_idx % WIDTH);

    (vertical_moves + lateral_moves) as u32
}

/// Tiles that must be lifted out of a line so the rest are in goal order:
/// the line length minus its longest increasing run of goal positions.
fn line_conflicts(goal_positions: &[usize]) -> u32 {
    let mut longest = [1usize; SIZE];
    for i in 0..goal_positions.len() {
        for j in 0..i {
            if goal_positions[j] < goal_positions[i] {
                longest[i] = longest[i].max(longest[j] + 1);
            }
        }
    }

    let kept = longest[..goal_positions.len()].iter().copied().max().unwrap_or(0);
    (goal_positions.len() - kept) as u32
}

/// Named heuristics selectable from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeuristicKind {
    Hamming,
    #[default]
    Manhattan,
    LinearConflict,
}

impl HeuristicKind {
    pub fn name(&self) -> &'static str {
        match self {
            HeuristicKind::Hamming => "hamming",
            HeuristicKind::Manhattan => "manhattan",
            HeuristicKind::LinearConflict => "linear_conflict",
        }
    }
}

impl Heuristic for HeuristicKind {
    fn estimate(&self, board: &Board) -> u32 {
        match self {
            HeuristicKind::Hamming => hamming(board),
            HeuristicKind::Manhattan => manhattan(board),
            HeuristicKind::LinearConflict => linear_conflict(board),
        }
    }
}
