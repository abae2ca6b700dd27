//! Ball state and rectangle geometry
//!
//! All state that must be persisted for a session snapshot lives here.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::{heading_from_velocity, velocity_from_heading};

/// An axis-aligned rectangle in world coordinates
///
/// The world is Y-up: the visible screen spans `0..width` by `0..height`,
/// and the box covers `origin .. origin + size`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    #[inline]
    pub fn min_x(&self) -> f32 {
        self.origin.x
    }

    #[inline]
    pub fn max_x(&self) -> f32 {
        self.origin.x + self.size.x
    }

    #[inline]
    pub fn min_y(&self) -> f32 {
        self.origin.y
    }

    #[inline]
    pub fn max_y(&self) -> f32 {
        self.origin.y + self.size.y
    }

    /// The four corners, in NW, SW, NE, SE order
    pub fn corners(&self) -> [Vec2; 4] {
        [
            self.origin,
            Vec2::new(self.origin.x, self.origin.y + self.size.y),
            Vec2::new(self.origin.x + self.size.x, self.origin.y),
            self.origin + self.size,
        ]
    }

    /// Standard AABB overlap test: true iff the ranges intersect on both axes
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.min_x() < other.max_x()
            && self.max_x() > other.min_x()
            && self.min_y() < other.max_y()
            && self.max_y() > other.min_y()
    }

    pub fn is_finite(&self) -> bool {
        self.origin.is_finite() && self.size.is_finite()
    }
}

/// The ball - the sole stateful entity of the core
///
/// Direction of travel is a heading angle rather than a velocity vector;
/// collisions change only the heading, never the speed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    /// Bounding box origin in world coordinates
    pub pos: Vec2,
    /// Bounding box extent, fixed for the ball's lifetime
    pub size: Vec2,
    /// Scalar speed, world units per second; always > 0
    pub speed: f32,
    /// Heading angle φ in radians; velocity = speed · (cos φ, sin φ)
    pub heading: f32,
}

impl Ball {
    /// Ball at the given box origin with the stock size, speed, and heading
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            size: Vec2::splat(BALL_SIZE),
            speed: BALL_START_SPEED,
            heading: BALL_START_ANGLE,
        }
    }

    /// Current velocity vector (trig convention, |v| == speed)
    #[inline]
    pub fn velocity(&self) -> Vec2 {
        velocity_from_heading(self.speed, self.heading)
    }

    /// Point the ball along `vel`, keeping the scalar speed unchanged
    ///
    /// Only the direction of `vel` is used, so reflections that merely flip
    /// a component's sign preserve `|velocity()| == speed` exactly.
    #[inline]
    pub fn set_direction(&mut self, vel: Vec2) {
        self.heading = heading_from_velocity(vel);
    }

    /// Bounding box at the current position
    #[inline]
    pub fn bounding_box(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }

    pub fn is_finite(&self) -> bool {
        self.pos.is_finite()
            && self.size.is_finite()
            && self.speed.is_finite()
            && self.heading.is_finite()
    }
}
