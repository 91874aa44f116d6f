//! Generation orchestrator: the rejection-sampling loops that turn the
//! fixed pools into a valid board.
//!
//! Generation runs in two phases. Resources are shuffled and placed until
//! the resource-adjacency rule holds, then number tokens are shuffled and
//! assigned to the non-desert tiles until the number-adjacency rule holds.
//! Resource placement is never revisited during the number phase; resource
//! constraints are sparse enough that both loops converge in a handful of
//! attempts in practice. Both loops are capped so a pathological draw
//! surfaces as a typed error instead of spinning forever.

use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;

use crate::board::{Board, BoardSize, Tile};
use crate::topology::Topology;
use crate::validate::{numbers_valid, resources_valid};

/// Maximum reshuffles of the resource pool before giving up
pub const MAX_RESOURCE_ATTEMPTS: usize = 10_000;

/// Maximum reshuffles of the number pool before giving up
pub const MAX_NUMBER_ATTEMPTS: usize = 10_000;

/// Errors the generation loops can report. Generation is atomic: on error
/// no partial board is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error("no valid resource arrangement found after {attempts} attempts")]
    ResourceConvergence { attempts: usize },

    #[error("no valid number assignment found after {attempts} attempts")]
    NumberConvergence { attempts: usize },
}

/// Generate a complete valid board for the given size.
///
/// The RNG is injected so callers can reproduce layouts deterministically;
/// [`Board::generate`] wraps this with the thread-local RNG.
pub fn generate<R: Rng>(size: BoardSize, rng: &mut R) -> Result<Board, GenerationError> {
    let topology = Topology::new(size.row_lengths());

    let mut tiles = place_resources(size, &topology, rng)?;
    assign_numbers(size, &topology, &mut tiles, rng)?;

    Ok(Board {
        tiles,
        row_lengths: size.row_lengths().to_vec(),
    })
}

/// Phase one: shuffle the resource pool until the arrangement passes the
/// resource validator, rebuilding the tile list from scratch each attempt.
fn place_resources<R: Rng>(
    size: BoardSize,
    topology: &Topology,
    rng: &mut R,
) -> Result<Vec<Tile>, GenerationError> {
    let mut pool = size.resource_pool();

    for _ in 0..MAX_RESOURCE_ATTEMPTS {
        pool.shuffle(rng);
        let tiles: Vec<Tile> = pool.iter().copied().map(Tile::bare).collect();
        if resources_valid(&tiles, topology) {
            return Ok(tiles);
        }
    }

    Err(GenerationError::ResourceConvergence {
        attempts: MAX_RESOURCE_ATTEMPTS,
    })
}

/// Phase two: shuffle the number pool and deal it onto the non-desert
/// tiles in flat order until the assignment passes the number validator.
/// The resource placement stays locked; only the numbers move.
fn assign_numbers<R: Rng>(
    size: BoardSize,
    topology: &Topology,
    tiles: &mut [Tile],
    rng: &mut R,
) -> Result<(), GenerationError> {
    let mut pool = size.number_pool();
    debug_assert_eq!(
        pool.len(),
        tiles.iter().filter(|t| t.resource.is_numbered()).count()
    );

    for _ in 0..MAX_NUMBER_ATTEMPTS {
        pool.shuffle(rng);
        let mut numbers = pool.iter().copied();
        for tile in tiles.iter_mut() {
            tile.number = if tile.resource.is_numbered() {
                numbers.next()
            } else {
                None
            };
        }
        if numbers_valid(tiles, topology) {
            return Ok(());
        }
    }

    Err(GenerationError::NumberConvergence {
        attempts: MAX_NUMBER_ATTEMPTS,
    })
}
