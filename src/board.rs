use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::direction::Direction;
use crate::error::{PuzzleError, Result};
use crate::tile::Tile;

pub const WIDTH: usize = 3;
pub const SIZE: usize = WIDTH * WIDTH;
pub const GOAL: &str = "12345678_";

/// A full 3×3 configuration in row-major order.
///
/// Boards are plain values: every move returns a new board and leaves the
/// original untouched. Equality and hashing cover the tiles only, so two boards
/// reached along different paths compare equal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Board {
    tiles: [Tile; SIZE],
    blank: usize,
}

impl Board {
    pub fn goal() -> Self {
        let mut tiles = [Tile::Space; SIZE];
        for (idx, tile) in tiles.iter_mut().enumerate().take(SIZE - 1) {
            *tile = Tile::Value(idx as u8 + 1);
        }

        Self {
            tiles,
            blank: SIZE - 1,
        }
    }

    pub fn tiles(&self) -> &[Tile; SIZE] {
        &self.tiles
    }

    pub fn blank_index(&self) -> usize {
        self.blank
    }

    pub fn is_goal(&self) -> bool {
        *self == Self::goal()
    }

    /// Moves available to the blank, in the order right, left, down, up.
    pub fn legal_moves(&self) -> Vec<Direction> {
        let mut legal_moves: Vec<Direction> = Vec::with_capacity(4);
        let space_idx = self.blank;

        if space_idx % WIDTH < WIDTH - 1 {
            legal_moves.push(Direction::Right);
        }
        if space_idx % WIDTH > 0 {
            legal_moves.push(Direction::Left);
        }
        if space_idx < SIZE - WIDTH {
            legal_moves.push(Direction::Down);
        }
        if space_idx >= WIDTH {
            legal_moves.push(Direction::Up);
        }

        legal_moves
    }

    /// Every board one move away, paired with the move that reaches it.
    pub fn successors(&self) -> Vec<(Direction, Board)> {
        self.legal_moves()
            .into_iter()
            .map(|dir| (dir, self.swap_blank(self.target_idx(dir))))
            .collect()
    }

    /// Slides the blank one cell in `dir`.
    pub fn apply(&self, dir: Direction) -> Result<Board> {
        if !self.legal_moves().contains(&dir) {
            return Err(PuzzleError::IllegalMove {
                direction: dir,
                blank: self.blank,
            });
        }

        Ok(self.swap_blank(self.target_idx(dir)))
    }

    /// Replays a move sequence from this board.
    pub fn apply_all(&self, moves: &[Direction]) -> Result<Board> {
        moves.iter().try_fold(*self, |board, &dir| board.apply(dir))
    }

    /// Even inversion parity over the eight numbered tiles. On a 3-wide
    /// board no move changes that parity, so only even boards reach the goal.
    pub fn is_solvable(&self) -> bool {
        let ranks: Vec<u8> = self
            .tiles
            .iter()
            .filter(|tile| !tile.is_space())
            .map(|tile| tile.rank())
            .collect();

        count_inversions(&ranks) % 2 == 0
    }

    fn target_idx(&self, dir: Direction) -> usize {
        match dir {
            Direction::Up => self.blank - WIDTH,
            Direction::Down => self.blank + WIDTH,
            Direction::Left => self.blank - 1,
            Direction::Right => self.blank + 1,
        }
    }

    fn swap_blank(&self, target_idx: usize) -> Board {
        let mut tiles = self.tiles;
        tiles.swap(self.blank, target_idx);

        Board {
            tiles,
            blank: target_idx,
        }
    }
}

fn count_inversions(ranks: &[u8]) -> u32 {
    let mut inversions = 0;
    for i in 0..ranks.len() {
        for j in (i + 1)..ranks.len() {
            if ranks[i] > ranks[j] {
                inversions += 1;
            }
        }
    }
    inversions
}

/// Free-function form of [`Board::successors`].
pub fn successors(board: &Board) -> Vec<(Direction, Board)> {
    board.successors()
}

impl FromStr for Board {
    type Err = PuzzleError;

    fn from_str(input: &str) -> Result<Self> {
        let symbols: Vec<char> = input.chars().collect();
        if symbols.len() != SIZE {
            return Err(PuzzleError::InvalidLength {
                expected: SIZE,
                got: symbols.len(),
                input: input.to_string(),
            });
        }

        let mut tiles = [Tile::Space; SIZE];
        for (position, &symbol) in symbols.iter().enumerate() {
            tiles[position] = Tile::from_char(symbol).ok_or_else(|| PuzzleError::InvalidSymbol {
                symbol,
                position,
                input: input.to_string(),
            })?;
        }

        let blank = tiles
            .iter()
            .position(|tile| tile.is_space())
            .ok_or_else(|| PuzzleError::MissingBlank {
                input: input.to_string(),
            })?;

        let mut seen = [false; SIZE];
        for tile in &tiles {
            let slot = tile.solved_idx();
            if seen[slot] {
                return Err(PuzzleError::DuplicateSymbol {
                    symbol: tile.raw(),
                    input: input.to_string(),
                });
            }
            seen[slot] = true;
        }

        Ok(Board { tiles, blank })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let serialized: String = self.tiles.iter().map(|t| t.raw()).collect();
        f.write_str(&serialized)
    }
}

impl Serialize for Board {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Board {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(D::Error::custom)
    }
}
