//! Board building blocks: sizes, resources, tiles, and the token pools.
//!
//! This module contains:
//! - `BoardSize` and the fixed row-length tables
//! - `Resource` types and the per-size resource tile counts
//! - The dice-number token pool for each size
//! - `Tile` and the finished `Board` value handed back to callers

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::generate::{self, GenerationError};

/// Supported board sizes.
///
/// The size fixes everything about the board shape: its row geometry, how
/// many tiles of each resource exist, and how many dice-number tokens get
/// distributed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoardSize {
    /// 19 tiles in rows of 3-4-5-4-3 (the base game)
    Standard,
    /// 30 tiles in rows of 3-4-5-6-5-4-3 (5-6 player extension)
    Expanded,
}

impl BoardSize {
    /// Both supported sizes
    pub const ALL: [BoardSize; 2] = [BoardSize::Standard, BoardSize::Expanded];

    /// Row lengths from top to bottom. These form the board's hexagonal
    /// silhouette and every adjacency computation derives from them.
    pub const fn row_lengths(&self) -> &'static [usize] {
        match self {
            BoardSize::Standard => &[3, 4, 5, 4, 3],
            BoardSize::Expanded => &[3, 4, 5, 6, 5, 4, 3],
        }
    }

    /// Total number of tiles on the board
    pub const fn tile_count(&self) -> usize {
        match self {
            BoardSize::Standard => 19,
            BoardSize::Expanded => 30,
        }
    }

    /// How many tiles of each resource the board contains
    pub const fn resource_counts(&self) -> [(Resource, usize); 6] {
        match self {
            BoardSize::Standard => [
                (Resource::Wood, 4),
                (Resource::Brick, 3),
                (Resource::Wheat, 4),
                (Resource::Sheep, 4),
                (Resource::Ore, 3),
                (Resource::Desert, 1),
            ],
            BoardSize::Expanded => [
                (Resource::Wood, 6),
                (Resource::Brick, 5),
                (Resource::Wheat, 6),
                (Resource::Sheep, 6),
                (Resource::Ore, 5),
                (Resource::Desert, 2),
            ],
        }
    }

    /// Number of desert tiles for this size
    pub const fn desert_count(&self) -> usize {
        match self {
            BoardSize::Standard => 1,
            BoardSize::Expanded => 2,
        }
    }

    /// The flat resource pool: one entry per tile, in counts order.
    /// The orchestrator shuffles this before placement.
    pub fn resource_pool(&self) -> Vec<Resource> {
        let mut pool = Vec::with_capacity(self.tile_count());
        for (resource, count) in self.resource_counts() {
            pool.extend(std::iter::repeat(resource).take(count));
        }
        pool
    }

    /// The dice-number token pool distributed across non-desert tiles.
    ///
    /// Base pool (Standard): two copies each of 3-6 and 8-11 plus a single
    /// 2 and a single 12, for 18 tokens. Expanded appends one extra copy of
    /// every token value for 28 tokens. Either way the pool size equals the
    /// number of non-desert tiles.
    pub fn number_pool(&self) -> Vec<u8> {
        let mut pool = vec![2, 12];
        for n in 3..=11u8 {
            if n != 7 {
                pool.push(n);
                pool.push(n);
            }
        }
        if matches!(self, BoardSize::Expanded) {
            pool.extend([2, 3, 4, 5, 6, 8, 9, 10, 11, 12]);
        }
        pool
    }
}

impl fmt::Display for BoardSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardSize::Standard => write!(f, "standard"),
            BoardSize::Expanded => write!(f, "expanded"),
        }
    }
}

/// Error for an unrecognized board-size name at a textual boundary
/// (the enum itself makes invalid sizes unrepresentable in code).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown board size '{0}' (expected 'standard' or 'expanded')")]
pub struct ParseBoardSizeError(pub String);

impl FromStr for BoardSize {
    type Err = ParseBoardSizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "standard" => Ok(BoardSize::Standard),
            "expanded" => Ok(BoardSize::Expanded),
            other => Err(ParseBoardSizeError(other.to_string())),
        }
    }
}

/// Resource types carried by tiles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Resource {
    Wood,
    Brick,
    Wheat,
    Sheep,
    Ore,
    /// Produces nothing and carries no dice number
    Desert,
}

impl Resource {
    /// All resource types in pool order
    pub const ALL: [Resource; 6] = [
        Resource::Wood,
        Resource::Brick,
        Resource::Wheat,
        Resource::Sheep,
        Resource::Ore,
        Resource::Desert,
    ];

    /// Whether tiles of this resource carry a dice number
    pub const fn is_numbered(&self) -> bool {
        !matches!(self, Resource::Desert)
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Resource::Wood => "wood",
            Resource::Brick => "brick",
            Resource::Wheat => "wheat",
            Resource::Sheep => "sheep",
            Resource::Ore => "ore",
            Resource::Desert => "desert",
        };
        write!(f, "{name}")
    }
}

/// A single hex tile on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    /// The resource this tile produces
    pub resource: Resource,
    /// Dice number that triggers production (2-12 except 7, None for desert)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<u8>,
}

impl Tile {
    /// A tile with its resource placed but no dice number assigned yet
    pub const fn bare(resource: Resource) -> Self {
        Self {
            resource,
            number: None,
        }
    }
}

/// A complete generated board layout.
///
/// Immutable value output: the tile sequence in flat index order plus the
/// row-length sequence the caller needs to lay the tiles out. Satisfies the
/// resource and number adjacency constraints from [`crate::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// All tiles in flat index order (row by row, top to bottom)
    pub tiles: Vec<Tile>,
    /// Row lengths from top to bottom; sums to `tiles.len()`
    pub row_lengths: Vec<usize>,
}

impl Board {
    /// Generate a random valid board using the thread-local RNG.
    pub fn generate(size: BoardSize) -> Result<Self, GenerationError> {
        let mut rng = rand::thread_rng();
        Self::generate_with_rng(size, &mut rng)
    }

    /// Generate a random valid board with a provided RNG.
    /// This allows for deterministic board generation when needed.
    pub fn generate_with_rng<R: Rng>(size: BoardSize, rng: &mut R) -> Result<Self, GenerationError> {
        generate::generate(size, rng)
    }

    /// The board size this layout belongs to, recovered from its geometry
    pub fn size(&self) -> Option<BoardSize> {
        BoardSize::ALL
            .into_iter()
            .find(|s| s.row_lengths() == self.row_lengths.as_slice())
    }

    /// Iterate over the rows of the board as tile slices
    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> + '_ {
        let mut start = 0;
        self.row_lengths.iter().map(move |&len| {
            let row = &self.tiles[start..start + len];
            start += len;
            row
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_row_lengths_sum_to_tile_count() {
        for size in BoardSize::ALL {
            let sum: usize = size.row_lengths().iter().sum();
            assert_eq!(sum, size.tile_count());
        }
    }

    #[test]
    fn test_resource_pool_matches_counts() {
        for size in BoardSize::ALL {
            let pool = size.resource_pool();
            assert_eq!(pool.len(), size.tile_count());
            for (resource, count) in size.resource_counts() {
                let in_pool = pool.iter().filter(|&&r| r == resource).count();
                assert_eq!(in_pool, count, "{resource} count for {size}");
            }
        }
    }

    #[test]
    fn test_standard_number_pool() {
        let pool = BoardSize::Standard.number_pool();
        assert_eq!(pool.len(), 18);

        let count = |n: u8| pool.iter().filter(|&&x| x == n).count();
        assert_eq!(count(2), 1);
        assert_eq!(count(12), 1);
        assert_eq!(count(7), 0);
        for n in [3, 4, 5, 6, 8, 9, 10, 11] {
            assert_eq!(count(n), 2, "count of {n}");
        }
    }

    #[test]
    fn test_expanded_number_pool() {
        let pool = BoardSize::Expanded.number_pool();
        assert_eq!(pool.len(), 28);

        let count = |n: u8| pool.iter().filter(|&&x| x == n).count();
        assert_eq!(count(2), 2);
        assert_eq!(count(12), 2);
        assert_eq!(count(7), 0);
        for n in [3, 4, 5, 6, 8, 9, 10, 11] {
            assert_eq!(count(n), 3, "count of {n}");
        }
    }

    #[test]
    fn test_number_pool_size_equals_non_desert_tiles() {
        for size in BoardSize::ALL {
            let non_desert = size.tile_count() - size.desert_count();
            assert_eq!(size.number_pool().len(), non_desert);
        }
    }

    #[test]
    fn test_board_size_from_str() {
        assert_eq!("standard".parse::<BoardSize>(), Ok(BoardSize::Standard));
        assert_eq!("Expanded".parse::<BoardSize>(), Ok(BoardSize::Expanded));
        assert!("huge".parse::<BoardSize>().is_err());
    }

    #[test]
    fn test_rows_iterator_covers_all_tiles() {
        let board = Board::generate(BoardSize::Standard).unwrap();
        let lengths: Vec<usize> = board.rows().map(|row| row.len()).collect();
        assert_eq!(lengths, board.row_lengths);
        let total: usize = board.rows().map(|row| row.len()).sum();
        assert_eq!(total, board.tiles.len());
    }
}
