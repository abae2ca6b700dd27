//! Brick grid collaborator
//!
//! The core only ever asks two things of the level's tile map: what id a
//! cell holds, and to remove a cell it has hit. `TileGrid` captures that
//! contract; `BrickGrid` is the row-major implementation a session uses.

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// Tile map contract consumed by the collision resolvers
///
/// Cells are addressed top-down (row 0 is the top row of bricks). Id 0 is
/// an empty cell; any other id is a solid, destructible brick.
pub trait TileGrid {
    /// Tile id at `cell`; out-of-range cells read as empty
    fn tile_id_at(&self, cell: IVec2) -> u32;

    /// Clear the brick at `cell`; a no-op if the cell is already empty
    fn remove_tile(&mut self, cell: IVec2);
}

/// A dense row-major grid of brick ids
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrickGrid {
    cols: i32,
    rows: i32,
    tiles: Vec<u32>,
}

impl BrickGrid {
    /// Empty grid of the given dimensions
    pub fn new(cols: i32, rows: i32) -> Self {
        Self {
            cols: cols.max(0),
            rows: rows.max(0),
            tiles: vec![0; (cols.max(0) * rows.max(0)) as usize],
        }
    }

    /// Grid from row-major rows of tile ids, top row first
    ///
    /// Rows shorter than the longest are padded with empty cells.
    pub fn from_rows(rows: &[Vec<u32>]) -> Self {
        let cols = rows.iter().map(|r| r.len()).max().unwrap_or(0) as i32;
        let mut grid = Self::new(cols, rows.len() as i32);
        for (y, row) in rows.iter().enumerate() {
            for (x, &id) in row.iter().enumerate() {
                grid.set_tile(IVec2::new(x as i32, y as i32), id);
            }
        }
        grid
    }

    pub fn cols(&self) -> i32 {
        self.cols
    }

    pub fn rows(&self) -> i32 {
        self.rows
    }

    pub fn set_tile(&mut self, cell: IVec2, id: u32) {
        if let Some(i) = self.index(cell) {
            self.tiles[i] = id;
        }
    }

    /// Number of bricks still standing (used for wave-clear checks)
    pub fn remaining(&self) -> usize {
        self.tiles.iter().filter(|&&id| id > 0).count()
    }

    fn index(&self, cell: IVec2) -> Option<usize> {
        if cell.x < 0 || cell.x >= self.cols || cell.y < 0 || cell.y >= self.rows {
            None
        } else {
            Some((cell.y * self.cols + cell.x) as usize)
        }
    }
}

impl TileGrid for BrickGrid {
    fn tile_id_at(&self, cell: IVec2) -> u32 {
        self.index(cell).map_or(0, |i| self.tiles[i])
    }

    fn remove_tile(&mut self, cell: IVec2) {
        if let Some(i) = self.index(cell) {
            self.tiles[i] = 0;
        }
    }
}
