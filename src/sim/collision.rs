//! Collision resolvers for bricks, the paddle, and the screen edges
//!
//! All three resolvers share one reflection law: mirror the heading off an
//! axis-aligned surface by negating the matching velocity component and
//! recomputing the angle with `atan2`. Speed is never changed by a hit.

use glam::{IVec2, Vec2};

use super::grid::TileGrid;
use super::state::{Ball, Rect};
use crate::consts::{TILE_HEIGHT, TILE_WIDTH};

/// Axis of a candidate displacement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// Receiver for the terminal ball-lost event
///
/// Fired exactly once when the ball exits below the screen; the session is
/// expected to reset the ball, so the resolver mutates nothing else.
pub trait Session {
    fn restart(&mut self);
}

/// Map a world point to a brick cell
///
/// The grid is indexed top-down while world Y grows upward, hence the flip
/// against the viewport height.
#[inline]
pub fn tile_cell_at(point: Vec2, viewport_height: f32) -> IVec2 {
    IVec2::new(
        (point.x / TILE_WIDTH).floor() as i32,
        ((viewport_height - point.y) / TILE_HEIGHT).floor() as i32,
    )
}

/// Mirror-reflect the heading off a surface perpendicular to `axis`
pub fn reflect_axis(ball: &mut Ball, axis: Axis) {
    let mut vel = ball.velocity();
    match axis {
        Axis::X => vel.x = -vel.x,
        Axis::Y => vel.y = -vel.y,
    }
    ball.set_direction(vel);
}

/// Test a candidate axis displacement against the brick grid
///
/// Forms the ball's box with `distance` applied to the given axis, samples
/// its four corners, and treats any corner landing in a non-zero cell as a
/// hit. On a hit the heading's component on that axis is reversed, every hit
/// brick is removed (one hit destroys a brick, however many corners landed
/// in it), and the caller must not apply `distance`.
///
/// Corner sampling can miss gaps thinner than `distance`; that tunneling is
/// an accepted limit of the discrete step.
pub fn test_block_collision(
    ball: &mut Ball,
    grid: &mut impl TileGrid,
    viewport: Vec2,
    axis: Axis,
    distance: f32,
) -> bool {
    let mut bbox = ball.bounding_box();
    match axis {
        Axis::X => bbox.origin.x += distance,
        Axis::Y => bbox.origin.y += distance,
    }

    // Hit cells, deduplicated (two corners can share one brick)
    let mut hits: Vec<IVec2> = Vec::with_capacity(4);
    for corner in bbox.corners() {
        let cell = tile_cell_at(corner, viewport.y);
        if grid.tile_id_at(cell) > 0 && !hits.contains(&cell) {
            hits.push(cell);
        }
    }

    if hits.is_empty() {
        return false;
    }

    log::debug!("hit {} brick(s) moving on the {:?} axis", hits.len(), axis);
    reflect_axis(ball, axis);
    for cell in &hits {
        grid.remove_tile(*cell);
    }
    true
}

/// Bounce the ball off the paddle
///
/// Only a downward-moving ball can hit the paddle; the bounce is a plain
/// vertical mirror, the same for left-moving and right-moving impacts.
pub fn test_paddle_collision(ball: &mut Ball, paddle: &Rect) {
    let vel = ball.velocity();
    if vel.y > 0.0 && ball.bounding_box().overlaps(paddle) {
        log::debug!("hit paddle");
        reflect_axis(ball, Axis::Y);
    }
}

/// Bounce the ball off the screen edges, or signal the death condition
///
/// The four checks run every tick in left, right, top, bottom order; each
/// re-reads the heading so simultaneous corner hits compose. Exiting below
/// the screen while falling is terminal: the session restarts the game and
/// the heading is left alone.
pub fn test_edge_collision(ball: &mut Ball, viewport: Vec2, session: &mut impl Session) {
    let bbox = ball.bounding_box();

    if ball.velocity().x < 0.0 && bbox.min_x() < 0.0 {
        log::debug!("hit left edge");
        reflect_axis(ball, Axis::X);
    }

    if ball.velocity().x > 0.0 && bbox.max_x() > viewport.x {
        log::debug!("hit right edge");
        reflect_axis(ball, Axis::X);
    }

    if ball.velocity().y < 0.0 && bbox.max_y() > viewport.y {
        log::debug!("hit top edge");
        reflect_axis(ball, Axis::Y);
    }

    if ball.velocity().y > 0.0 && bbox.max_y() < 0.0 {
        log::info!("ball lost below the screen, restarting");
        session.restart();
    }
}
