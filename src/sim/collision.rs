//! Plane collision checks: cup capture, puddle overlap, obstacle knockback
//!
//! All tests work in the screen plane; the ball's synthetic height only
//! matters to puddles (a flying ball clears them).

use crate::aabb_overlap;

use super::state::{Ball, Cup, Obstacle, Puddle};

/// Cup capture: center-to-center distance within the cup radius.
/// Threshold-exact, distance equal to the radius counts.
pub fn cup_captures(ball: &Ball, cup: &Cup) -> bool {
    (ball.pos - cup.pos).length() <= cup.radius
}

/// Puddle overlap: edge-to-edge circle test, only while the ball is in
/// ground contact. The caller owns the once-per-overlap latch.
pub fn puddle_overlaps(ball: &Ball, puddle: &Puddle) -> bool {
    ball.grounded() && (ball.pos - puddle.pos).length() <= puddle.radius + ball.radius
}

/// Obstacle knockback: bounding-square vs rectangle overlap inverts both
/// velocity components scaled by bounce. There is no penetration correction
/// and no surface-normal awareness; every face reflects the same way. That
/// matches the original behavior and is a known limitation, not a bug.
pub fn obstacle_knockback(ball: &mut Ball, obstacle: &Obstacle, bounce: f32) -> bool {
    if aabb_overlap(ball.bounds_min(), ball.bounds_max(), obstacle.min, obstacle.max) {
        ball.vel = -ball.vel * bounce;
        true
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_cup_capture_is_threshold_exact() {
        let cup = Cup::at(400.0, 300.0);
        let on_cup = Ball::at(Vec2::new(400.0, 300.0));
        assert!(cup_captures(&on_cup, &cup));

        // Exactly on the rim counts.
        let on_rim = Ball::at(Vec2::new(400.0 + cup.radius, 300.0));
        assert!(cup_captures(&on_rim, &cup));

        let outside = Ball::at(Vec2::new(400.0 + cup.radius + 0.1, 300.0));
        assert!(!cup_captures(&outside, &cup));
    }

    #[test]
    fn test_cup_capture_is_symmetric() {
        let cup = Cup::at(400.0, 300.0);
        for offset in [
            Vec2::new(12.0, 0.0),
            Vec2::new(-12.0, 0.0),
            Vec2::new(0.0, 12.0),
            Vec2::new(0.0, -12.0),
        ] {
            let ball = Ball::at(cup.pos + offset);
            assert!(cup_captures(&ball, &cup), "offset {offset:?}");
        }
    }

    #[test]
    fn test_puddle_uses_combined_radius() {
        let puddle = Puddle {
            pos: Vec2::new(300.0, 300.0),
            radius: 40.0,
        };
        let ball = Ball::at(Vec2::new(300.0 + 40.0 + 9.0, 300.0));
        assert!(puddle_overlaps(&ball, &puddle));

        let clear = Ball::at(Vec2::new(300.0 + 40.0 + 11.0, 300.0));
        assert!(!puddle_overlaps(&clear, &puddle));
    }

    #[test]
    fn test_airborne_ball_clears_puddles() {
        let puddle = Puddle {
            pos: Vec2::new(300.0, 300.0),
            radius: 40.0,
        };
        let mut ball = Ball::at(Vec2::new(300.0, 300.0));
        ball.height = 25.0;
        assert!(!puddle_overlaps(&ball, &puddle));

        ball.height = 0.0;
        assert!(puddle_overlaps(&ball, &puddle));
    }

    #[test]
    fn test_obstacle_inverts_both_axes() {
        let obstacle = Obstacle::new(400.0, 400.0, 100.0, 20.0);
        let mut ball = Ball::at(Vec2::new(395.0, 410.0));
        ball.vel = Vec2::new(80.0, -30.0);

        assert!(obstacle_knockback(&mut ball, &obstacle, 0.8));
        assert!((ball.vel.x - -64.0).abs() < 1e-4);
        assert!((ball.vel.y - 24.0).abs() < 1e-4);
    }

    #[test]
    fn test_obstacle_miss_leaves_ball_alone() {
        let obstacle = Obstacle::new(400.0, 400.0, 100.0, 20.0);
        let mut ball = Ball::at(Vec2::new(200.0, 200.0));
        ball.vel = Vec2::new(80.0, -30.0);

        assert!(!obstacle_knockback(&mut ball, &obstacle, 0.8));
        assert_eq!(ball.vel, Vec2::new(80.0, -30.0));
    }
}
