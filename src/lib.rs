//! Brickout - ball motion and collision core for a brick-breaking game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball state, collision resolvers, tick)
//!
//! Rendering, input handling, and level/session orchestration live in the
//! host application; they reach the core through the collaborator traits in
//! `sim` and call [`sim::tick`] once per frame.

pub mod sim;

pub use sim::{Axis, Ball, BrickGrid, Rect, Session, TileGrid, World, tick};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Brick cell width in world units
    pub const TILE_WIDTH: f32 = 32.0;
    /// Brick cell height in world units
    pub const TILE_HEIGHT: f32 = 16.0;

    /// Ball defaults (bounding box edge, world units)
    pub const BALL_SIZE: f32 = 16.0;
    pub const BALL_START_SPEED: f32 = 200.0;
    /// Initial heading: up-and-to-the-right travel
    pub const BALL_START_ANGLE: f32 = std::f32::consts::FRAC_PI_3;
}

/// Velocity vector for a heading, in trig convention (positive Y component
/// means downward travel once the integrator applies its screen-axis flip)
#[inline]
pub fn velocity_from_heading(speed: f32, heading: f32) -> Vec2 {
    Vec2::new(speed * heading.cos(), speed * heading.sin())
}

/// Heading angle for a velocity vector, normalized to (-π, π] by `atan2`
#[inline]
pub fn heading_from_velocity(vel: Vec2) -> f32 {
    vel.y.atan2(vel.x)
}
