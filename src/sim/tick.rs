//! Per-frame simulation tick
//!
//! The host engine calls [`tick`] once per rendered frame with the frame's
//! elapsed time. Resolver order is fixed: X-axis tile test and commit,
//! Y-axis tile test and commit, paddle, edges. Every phase runs every tick,
//! so the step is a pure function of the ball, the grid, and `dt`.

use glam::Vec2;

use super::collision::{
    Axis, Session, test_block_collision, test_edge_collision, test_paddle_collision,
};
use super::grid::TileGrid;
use super::state::{Ball, Rect};

/// Everything outside the ball that one tick touches
///
/// Collaborators are passed in explicitly; the core holds no references to
/// an engine, a scene graph, or any global screen-size accessor.
pub struct World<'a, G: TileGrid, S: Session> {
    /// The level's brick grid (bricks the ball hits are removed from it)
    pub grid: &'a mut G,
    /// Current paddle bounding box
    pub paddle: Rect,
    /// Screen size (width, height), constant for the session
    pub viewport: Vec2,
    /// Receiver for the ball-lost event
    pub session: &'a mut S,
}

/// Advance the ball by one frame
///
/// Candidate displacements come from the heading as read at tick start; a
/// blocked axis keeps its position for the tick (the tile resolver already
/// reversed the heading). Non-positive or NaN `dt` skips the tick, as does
/// non-finite geometry anywhere in the inputs.
pub fn tick<G: TileGrid, S: Session>(ball: &mut Ball, world: &mut World<'_, G, S>, dt: f32) {
    if !(dt > 0.0) {
        return;
    }
    if !dt.is_finite()
        || !ball.is_finite()
        || !world.paddle.is_finite()
        || !world.viewport.is_finite()
    {
        log::warn!("skipping tick: non-finite ball or world geometry");
        return;
    }

    let vel = ball.velocity();
    // Y sign flip: positive trig vel.y moves the ball down the screen
    let dx = dt * vel.x;
    let dy = -dt * vel.y;

    if !test_block_collision(ball, world.grid, world.viewport, Axis::X, dx) {
        ball.pos.x += dx;
    }
    if !test_block_collision(ball, world.grid, world.viewport, Axis::Y, dy) {
        ball.pos.y += dy;
    }

    test_paddle_collision(ball, &world.paddle);
    test_edge_collision(ball, world.viewport, world.session);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::grid::BrickGrid;
    use glam::IVec2;
    use std::f32::consts::PI;

    const VIEWPORT: Vec2 = Vec2::new(480.0, 320.0);

    #[derive(Default)]
    struct RecordingSession {
        restarts: u32,
    }

    impl Session for RecordingSession {
        fn restart(&mut self) {
            self.restarts += 1;
        }
    }

    /// Paddle parked out of the ball's way
    fn far_paddle() -> Rect {
        Rect::new(Vec2::new(400.0, 4.0), Vec2::new(64.0, 8.0))
    }

    #[test]
    fn test_free_flight_commits_both_axes() {
        let mut ball = Ball::new(Vec2::new(100.0, 50.0));
        let mut grid = BrickGrid::new(15, 20);
        let mut session = RecordingSession::default();
        let mut world = World {
            grid: &mut grid,
            paddle: far_paddle(),
            viewport: VIEWPORT,
            session: &mut session,
        };

        tick(&mut ball, &mut world, 0.1);

        let expected_x = 100.0 + 0.1 * 200.0 * (PI / 3.0).cos();
        let expected_y = 50.0 - 0.1 * 200.0 * (PI / 3.0).sin();
        assert!((ball.pos.x - expected_x).abs() < 1e-3);
        assert!((ball.pos.y - expected_y).abs() < 1e-3);
        assert_eq!(ball.heading, PI / 3.0);
        assert_eq!(session.restarts, 0);
    }

    #[test]
    fn test_blocked_axis_keeps_position() {
        let mut ball = Ball::new(Vec2::new(100.0, 50.0));
        let mut grid = BrickGrid::new(15, 20);
        // Brick in the column the X step moves into; Y path stays clear
        grid.set_tile(IVec2::new(3, 16), 7);
        let mut session = RecordingSession::default();
        let mut world = World {
            grid: &mut grid,
            paddle: far_paddle(),
            viewport: VIEWPORT,
            session: &mut session,
        };

        tick(&mut ball, &mut world, 0.1);

        // X stayed put, Y committed its candidate displacement
        assert_eq!(ball.pos.x, 100.0);
        let expected_y = 50.0 - 0.1 * 200.0 * (PI / 3.0).sin();
        assert!((ball.pos.y - expected_y).abs() < 1e-3);
        // Brick destroyed, heading's X component reversed
        assert_eq!(grid.remaining(), 0);
        assert!(ball.velocity().x < 0.0);
    }

    #[test]
    fn test_paddle_bounce_happens_after_movement() {
        // Falling ball ends the step inside the paddle box
        let mut ball = Ball::new(Vec2::new(100.0, 40.0));
        let mut grid = BrickGrid::new(15, 20);
        let mut session = RecordingSession::default();
        let mut world = World {
            grid: &mut grid,
            paddle: Rect::new(Vec2::new(80.0, 16.0), Vec2::new(64.0, 8.0)),
            viewport: VIEWPORT,
            session: &mut session,
        };

        tick(&mut ball, &mut world, 0.1);

        // 40 - 17.32 = 22.68: box 22.68..38.68 overlaps paddle 16..24
        assert!(ball.velocity().y < 0.0);
        assert!(ball.velocity().x > 0.0);
        assert_eq!(session.restarts, 0);
    }

    #[test]
    fn test_bottom_exit_restarts_exactly_once() {
        let mut ball = Ball::new(Vec2::new(100.0, -20.0));
        let mut grid = BrickGrid::new(15, 20);
        let mut session = RecordingSession::default();
        let mut world = World {
            grid: &mut grid,
            paddle: far_paddle(),
            viewport: VIEWPORT,
            session: &mut session,
        };

        tick(&mut ball, &mut world, 0.01);
        assert_eq!(session.restarts, 1);
    }

    #[test]
    fn test_non_positive_dt_is_a_no_op() {
        let mut grid = BrickGrid::new(15, 20);
        let mut session = RecordingSession::default();
        let start = Ball::new(Vec2::new(100.0, 50.0));

        for dt in [0.0, -0.5, f32::NAN] {
            let mut ball = start;
            let mut world = World {
                grid: &mut grid,
                paddle: far_paddle(),
                viewport: VIEWPORT,
                session: &mut session,
            };
            tick(&mut ball, &mut world, dt);
            assert_eq!(ball, start);
        }
        assert_eq!(session.restarts, 0);
    }

    #[test]
    fn test_non_finite_geometry_skips_the_tick() {
        let mut grid = BrickGrid::new(15, 20);
        let mut session = RecordingSession::default();
        let mut ball = Ball::new(Vec2::new(f32::NAN, 50.0));
        let before = ball;
        let mut world = World {
            grid: &mut grid,
            paddle: far_paddle(),
            viewport: VIEWPORT,
            session: &mut session,
        };

        tick(&mut ball, &mut world, 0.1);
        assert!(ball.pos.x.is_nan() && before.pos.x.is_nan());
        assert_eq!(ball.heading, before.heading);
        assert_eq!(session.restarts, 0);
    }

    #[test]
    fn test_identical_inputs_give_identical_results() {
        let rows: Vec<Vec<u32>> = (0..4).map(|y| (0..15).map(|x| (x + y) % 3).collect()).collect();
        let run = || {
            let mut ball = Ball::new(Vec2::new(100.0, 50.0));
            ball.heading = 2.0 * PI / 3.0;
            let mut grid = BrickGrid::from_rows(&rows);
            let mut session = RecordingSession::default();
            for _ in 0..600 {
                let mut world = World {
                    grid: &mut grid,
                    paddle: Rect::new(Vec2::new(200.0, 8.0), Vec2::new(64.0, 8.0)),
                    viewport: VIEWPORT,
                    session: &mut session,
                };
                tick(&mut ball, &mut world, 1.0 / 60.0);
            }
            (ball, grid, session.restarts)
        };

        let (ball_a, grid_a, restarts_a) = run();
        let (ball_b, grid_b, restarts_b) = run();
        assert_eq!(ball_a, ball_b);
        assert_eq!(grid_a, grid_b);
        assert_eq!(restarts_a, restarts_b);
    }

    #[test]
    fn test_session_snapshot_round_trip() {
        let mut ball = Ball::new(Vec2::new(100.0, 50.0));
        let mut grid = BrickGrid::from_rows(&[vec![1; 15], vec![2; 15]]);
        let mut session = RecordingSession::default();
        let mut world = World {
            grid: &mut grid,
            paddle: far_paddle(),
            viewport: VIEWPORT,
            session: &mut session,
        };
        for _ in 0..30 {
            tick(&mut ball, &mut world, 1.0 / 60.0);
        }

        let ball_json = serde_json::to_string(&ball).unwrap();
        let grid_json = serde_json::to_string(world.grid).unwrap();
        let ball2: Ball = serde_json::from_str(&ball_json).unwrap();
        let grid2: BrickGrid = serde_json::from_str(&grid_json).unwrap();
        assert_eq!(ball, ball2);
        assert_eq!(*world.grid, grid2);
    }
}
