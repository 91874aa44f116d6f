//! Hexboard - random board layout generation for a hex-grid settlement game
//!
//! This crate generates board layouts (resource tiles plus dice-number
//! tokens) that satisfy the game's adjacency fairness rules:
//! - no tile with more than one neighbor of its own resource
//! - no touching tiles with the same number, nor a 6 next to an 8,
//!   nor a 2 next to a 12
//!
//! Generation is rejection sampling: shuffle the fixed resource pool until
//! the resource rule holds, lock it in, then shuffle the number pool until
//! the number rule holds. Both loops are bounded and report a typed error
//! on exhaustion.
//!
//! # Modules
//!
//! - [`hex`]: Axial coordinate system for hex tiles
//! - [`board`]: Board sizes, resources, tiles, and the token pools
//! - [`topology`]: Flat-index adjacency derived from the row layout
//! - [`validate`]: Resource and number adjacency predicates
//! - [`generate`]: The rejection-sampling orchestrator
//!
//! # Example
//!
//! ```
//! use hexboard_core::{Board, BoardSize};
//!
//! let board = Board::generate(BoardSize::Standard).unwrap();
//! assert_eq!(board.tiles.len(), 19);
//! assert_eq!(board.row_lengths, vec![3, 4, 5, 4, 3]);
//! ```

pub mod board;
pub mod generate;
pub mod hex;
pub mod topology;
pub mod validate;

// Re-export commonly used types
pub use board::{Board, BoardSize, ParseBoardSizeError, Resource, Tile};
pub use generate::{generate, GenerationError};
pub use hex::HexCoord;
pub use topology::Topology;
