//! Board topology: mapping flat tile indices onto the hex grid and
//! resolving which tiles touch which.
//!
//! Callers and the generated [`crate::board::Board`] both speak in flat
//! indices (row by row, top to bottom). Internally every index is assigned
//! an axial [`HexCoord`] and adjacency falls out of coordinate arithmetic,
//! so the neighbor relation is symmetric by construction. Nothing here is
//! random or stored on the board; a `Topology` is rebuilt on demand from
//! the row-length table.

use std::collections::HashMap;

use crate::hex::HexCoord;

/// Adjacency resolver for a board with the given row lengths.
#[derive(Debug, Clone)]
pub struct Topology {
    row_lengths: Vec<usize>,
    /// Axial coordinate of each flat index
    coords: Vec<HexCoord>,
    /// Reverse lookup from coordinate back to flat index
    index: HashMap<HexCoord, usize>,
}

impl Topology {
    /// Build the topology for a row-length sequence.
    ///
    /// Rows are placed at increasing axial `r`. The `q` origin shifts one
    /// column west whenever the next row is longer, which reproduces the
    /// staggered hexagonal silhouette: a tile in a longer row below sits
    /// under the gap between two tiles above it.
    pub fn new(row_lengths: &[usize]) -> Self {
        let tile_count: usize = row_lengths.iter().sum();
        let mut coords = Vec::with_capacity(tile_count);
        let mut q_start = 0i32;

        for (row, &len) in row_lengths.iter().enumerate() {
            if row > 0 && len > row_lengths[row - 1] {
                q_start -= 1;
            }
            for offset in 0..len as i32 {
                coords.push(HexCoord::new(q_start + offset, row as i32));
            }
        }

        let index = coords
            .iter()
            .enumerate()
            .map(|(i, &coord)| (coord, i))
            .collect();

        Self {
            row_lengths: row_lengths.to_vec(),
            coords,
            index,
        }
    }

    /// Number of tiles on the board
    pub fn tile_count(&self) -> usize {
        self.coords.len()
    }

    /// The row-length sequence this topology was built from
    pub fn row_lengths(&self) -> &[usize] {
        &self.row_lengths
    }

    /// Resolve a flat index to its row by accumulating row lengths.
    /// Returns `None` for out-of-range indices.
    pub fn row_of(&self, index: usize) -> Option<usize> {
        let mut row_start = 0;
        for (row, &len) in self.row_lengths.iter().enumerate() {
            if index < row_start + len {
                return Some(row);
            }
            row_start += len;
        }
        None
    }

    /// The axial coordinate of a flat index
    pub fn coord_of(&self, index: usize) -> Option<HexCoord> {
        self.coords.get(index).copied()
    }

    /// Flat indices of the tiles touching tile `index`.
    ///
    /// Between 2 and 6 entries; boundary tiles have fewer than 6. Indices
    /// are returned in ascending order so output is stable for callers
    /// that iterate it.
    pub fn neighbors(&self, index: usize) -> Vec<usize> {
        let Some(coord) = self.coord_of(index) else {
            return Vec::new();
        };
        let mut adjacent: Vec<usize> = coord
            .neighbors()
            .iter()
            .filter_map(|n| self.index.get(n).copied())
            .collect();
        adjacent.sort_unstable();
        adjacent
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BoardSize;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_row_of_accumulates_lengths() {
        let topo = Topology::new(BoardSize::Standard.row_lengths());
        assert_eq!(topo.row_of(0), Some(0));
        assert_eq!(topo.row_of(2), Some(0));
        assert_eq!(topo.row_of(3), Some(1));
        assert_eq!(topo.row_of(7), Some(2));
        assert_eq!(topo.row_of(18), Some(4));
        assert_eq!(topo.row_of(19), None);
    }

    #[test]
    fn test_coords_are_distinct() {
        for size in BoardSize::ALL {
            let topo = Topology::new(size.row_lengths());
            assert_eq!(topo.index.len(), topo.tile_count());
        }
    }

    #[test]
    fn test_adjacency_is_symmetric() {
        for size in BoardSize::ALL {
            let topo = Topology::new(size.row_lengths());
            for i in 0..topo.tile_count() {
                for j in topo.neighbors(i) {
                    assert!(
                        topo.neighbors(j).contains(&i),
                        "{size}: {j} is a neighbor of {i} but not vice versa"
                    );
                }
            }
        }
    }

    #[test]
    fn test_neighbor_counts_in_range() {
        for size in BoardSize::ALL {
            let topo = Topology::new(size.row_lengths());
            for i in 0..topo.tile_count() {
                let n = topo.neighbors(i).len();
                assert!((2..=6).contains(&n), "{size}: tile {i} has {n} neighbors");
            }
        }
    }

    #[test]
    fn test_neighbors_stay_within_one_row() {
        for size in BoardSize::ALL {
            let topo = Topology::new(size.row_lengths());
            for i in 0..topo.tile_count() {
                let row = topo.row_of(i).unwrap() as i64;
                for j in topo.neighbors(i) {
                    let adj_row = topo.row_of(j).unwrap() as i64;
                    assert!((row - adj_row).abs() <= 1);
                }
            }
        }
    }

    #[test]
    fn test_standard_center_tile_has_six_neighbors() {
        // Flat index 9 is the middle of the 5-tile row on the standard board.
        let topo = Topology::new(BoardSize::Standard.row_lengths());
        assert_eq!(topo.neighbors(9), vec![4, 5, 8, 10, 13, 14]);
    }

    #[test]
    fn test_standard_corner_tile_has_three_neighbors() {
        let topo = Topology::new(BoardSize::Standard.row_lengths());
        assert_eq!(topo.neighbors(0), vec![1, 3, 4]);
        assert_eq!(topo.neighbors(18), vec![14, 15, 17]);
    }

    #[test]
    fn test_out_of_range_index_has_no_neighbors() {
        let topo = Topology::new(BoardSize::Standard.row_lengths());
        assert!(topo.neighbors(19).is_empty());
    }
}
