//! Text rendering of a generated board.
//!
//! Each tile becomes a fixed-width cell (resource code plus dice number)
//! and shorter rows are indented by half a cell per missing tile, so the
//! output keeps the staggered hexagonal silhouette.

use hexboard_core::{Board, Resource, Tile};

/// Width of one rendered cell, including its trailing space
const CELL_WIDTH: usize = 8;

/// Three-letter code used in the text drawing
fn resource_code(resource: Resource) -> &'static str {
    match resource {
        Resource::Wood => "wod",
        Resource::Brick => "brk",
        Resource::Wheat => "wht",
        Resource::Sheep => "shp",
        Resource::Ore => "ore",
        Resource::Desert => "des",
    }
}

fn render_tile(tile: &Tile) -> String {
    match tile.number {
        Some(n) => format!("[{} {:>2}]", resource_code(tile.resource), n),
        None => format!("[{} --]", resource_code(tile.resource)),
    }
}

/// Render the board as staggered rows of cells.
pub fn render_text(board: &Board) -> String {
    let widest = board.row_lengths.iter().copied().max().unwrap_or(0);
    let mut out = String::new();

    for row in board.rows() {
        let indent = (widest - row.len()) * CELL_WIDTH / 2;
        out.push_str(&" ".repeat(indent));
        let cells: Vec<String> = row.iter().map(render_tile).collect();
        out.push_str(&cells.join(" "));
        out.push('\n');
    }

    out
}
