//! Constraint validators: pure predicates over a tile list and its topology.
//!
//! These encode the physical game's fairness rules. Both run over every
//! tile, so a single pass over the board answers whether a candidate
//! layout can be kept or must be rejected and reshuffled.

use crate::board::Tile;
use crate::topology::Topology;

/// At most this many neighbors may share a tile's resource.
const MAX_SAME_RESOURCE_NEIGHBORS: usize = 1;

/// Check the resource-adjacency rule: no tile may have more than one
/// neighbor of its own resource. Desert participates like any other
/// resource, so two deserts may touch but not three in a cluster.
pub fn resources_valid(tiles: &[Tile], topology: &Topology) -> bool {
    for (i, tile) in tiles.iter().enumerate() {
        let same_resource = topology
            .neighbors(i)
            .into_iter()
            .filter(|&j| tiles[j].resource == tile.resource)
            .count();
        if same_resource > MAX_SAME_RESOURCE_NEIGHBORS {
            return false;
        }
    }
    true
}

/// Check the number-adjacency rule: no numbered tile may touch a tile with
/// the identical number, nor may the high-probability pair {6, 8} or the
/// extreme pair {2, 12} touch. Desert tiles carry no number, so they are
/// skipped as subjects and never conflict as neighbors.
pub fn numbers_valid(tiles: &[Tile], topology: &Topology) -> bool {
    for (i, tile) in tiles.iter().enumerate() {
        let Some(number) = tile.number else {
            continue;
        };
        for j in topology.neighbors(i) {
            let Some(adjacent) = tiles[j].number else {
                continue;
            };
            if adjacent == number || forbidden_pair(number, adjacent) {
                return false;
            }
        }
    }
    true
}

/// The unordered number pairs the rules forbid on touching tiles
fn forbidden_pair(a: u8, b: u8) -> bool {
    matches!((a, b), (6, 8) | (8, 6) | (2, 12) | (12, 2))
}
