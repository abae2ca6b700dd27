//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Discrete per-frame steps only
//! - Stable resolver order (tiles X, tiles Y, paddle, edges)
//! - No rendering or platform dependencies

pub mod collision;
pub mod grid;
pub mod state;
pub mod tick;

pub use collision::{
    Axis, Session, test_block_collision, test_edge_collision, test_paddle_collision, tile_cell_at,
};
pub use grid::{BrickGrid, TileGrid};
pub use state::{Ball, Rect};
pub use tick::{World, tick};
