use std::cmp::Ordering;

pub const SPACE_CHAR: char = '_';

/// One cell of the board: a numbered tile or the blank.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Tile {
    Value(u8),
    Space,
}

impl Tile {
    /// Parses a board symbol. Only `1`..=`8` and `_` are accepted.
    pub fn from_char(char: char) -> Option<Self> {
        match char {
            SPACE_CHAR => Some(Tile::Space),
            '1'..='8' => Some(Tile::Value(char as u8 - b'0')),
            _ => None,
        }
    }

    pub fn raw(&self) -> char {
        match self {
            Tile::Value(value) => (b'0' + value) as char,
            Tile::Space => SPACE_CHAR,
        }
    }

    pub fn is_space(&self) -> bool {
        matches!(self, Tile::Space)
    }

    /// Position-independent ordering key; the blank sorts last.
    pub fn rank(&self) -> u8 {
        match self {
            Tile::Value(value) => *value,
            Tile::Space => 9,
        }
    }

    /// Index of this tile in the goal board `12345678_`.
    pub fn solved_idx(&self) -> usize {
        self.rank() as usize - 1
    }
}

impl PartialOrd for Tile {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Tile {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}
