//! Ball kinematics
//!
//! One closed-form update per tick: air drag, height-axis gravity, Euler
//! integration, ground and wall reflection, ground friction, snap-to-zero.
//! No error states; boundary clamps are the only "failure" handling.

use glam::Vec2;

use super::state::Ball;
use crate::Tuning;
use crate::consts::STOP_EPSILON;

/// What a single step ran into, for audio/FX. Gameplay never reads this.
#[derive(Debug, Clone, Copy, Default)]
pub struct StepContacts {
    /// Hit a playfield wall this step
    pub wall: bool,
    /// Landed on the ground with meaningful vertical speed this step
    pub ground: bool,
}

/// Impact speed below which a landing is not worth a sound
const GROUND_CONTACT_MIN_IMPACT: f32 = 20.0;

/// Advance the ball by one fixed timestep
///
/// Order matters and is load-bearing for the rest/stop behavior:
/// drag and gravity first, then integration, then ground, then walls,
/// then the snap-to-zero that ends a roll.
pub fn step(ball: &mut Ball, tuning: &Tuning, bounds: Vec2, dt: f32) -> StepContacts {
    let mut contacts = StepContacts::default();

    // Velocity-proportional air drag on the plane components, applied per
    // tick rather than scaled by dt (the timestep is fixed).
    ball.vel += -tuning.air_resistance * ball.vel;

    // Gravity acts only while the ball is off the ground or rising, so a
    // grounded motionless ball is a true fixed point of this update.
    if ball.height > 0.0 || ball.v_height > 0.0 {
        ball.v_height -= tuning.gravity * dt;
    }

    ball.pos += ball.vel * dt;
    ball.height += ball.v_height * dt;

    // Ground contact: clamp, reflect scaled by bounce, rub off horizontal
    // speed. Friction applies on contact only, never in flight.
    if ball.height <= 0.0 {
        ball.height = 0.0;
        let impact = -ball.v_height;
        ball.v_height = -ball.v_height * tuning.bounce;
        if ball.v_height.abs() < STOP_EPSILON {
            ball.v_height = 0.0;
        }
        ball.vel *= tuning.friction;
        if impact > GROUND_CONTACT_MIN_IMPACT {
            contacts.ground = true;
        }
    }

    // Walls, each axis independent: clamp to the edge, reflect that
    // component scaled by bounce, leave the other axis alone.
    if ball.pos.x - ball.radius < 0.0 {
        ball.pos.x = ball.radius;
        ball.vel.x = -ball.vel.x * tuning.bounce;
        contacts.wall = true;
    } else if ball.pos.x + ball.radius > bounds.x {
        ball.pos.x = bounds.x - ball.radius;
        ball.vel.x = -ball.vel.x * tuning.bounce;
        contacts.wall = true;
    }
    if ball.pos.y - ball.radius < 0.0 {
        ball.pos.y = ball.radius;
        ball.vel.y = -ball.vel.y * tuning.bounce;
        contacts.wall = true;
    } else if ball.pos.y + ball.radius > bounds.y {
        ball.pos.y = bounds.y - ball.radius;
        ball.vel.y = -ball.vel.y * tuning.bounce;
        contacts.wall = true;
    }

    // Snap tiny residual speeds to zero so a dying roll actually ends
    // instead of jittering forever.
    if ball.vel.x.abs() < STOP_EPSILON {
        ball.vel.x = 0.0;
    }
    if ball.vel.y.abs() < STOP_EPSILON {
        ball.vel.y = 0.0;
    }

    contacts
}

/// Map a completed drag gesture to a launch velocity
///
/// The drag vector from press to release scales by a fixed gain; there is no
/// cap, a long drag is a hard shot.
#[inline]
pub fn launch_velocity(press: Vec2, release: Vec2, gain: f32) -> Vec2 {
    (release - press) * gain
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field_bounds;
    use proptest::prelude::*;

    /// Tuning with no drag so reflection magnitudes are exact
    fn dragless() -> Tuning {
        Tuning {
            air_resistance: 0.0,
            ..Tuning::links()
        }
    }

    fn ball_at(x: f32, y: f32) -> Ball {
        Ball::at(Vec2::new(x, y))
    }

    #[test]
    fn test_free_flight_integration() {
        let tuning = dragless();
        let dt = 1.0 / 120.0;
        let mut ball = ball_at(400.0, 300.0);
        ball.height = 50.0;
        ball.v_height = 10.0;
        ball.vel = Vec2::new(30.0, -20.0);

        let z0 = ball.height;
        let vz0 = ball.v_height;
        step(&mut ball, &tuning, field_bounds(), dt);

        // Velocity updates first, then integration uses the new velocity.
        let vz1 = vz0 - tuning.gravity * dt;
        assert!((ball.v_height - vz1).abs() < 1e-4);
        assert!((ball.height - (z0 + vz1 * dt)).abs() < 1e-4);
        assert!((ball.pos.x - (400.0 + 30.0 * dt)).abs() < 1e-4);
        assert!((ball.pos.y - (300.0 - 20.0 * dt)).abs() < 1e-4);
    }

    #[test]
    fn test_descent_is_monotonic_in_free_flight() {
        let tuning = dragless();
        let mut ball = ball_at(400.0, 300.0);
        ball.height = 200.0;

        let mut last_vz = ball.v_height;
        for _ in 0..20 {
            step(&mut ball, &tuning, field_bounds(), 1.0 / 120.0);
            assert!(ball.v_height < last_vz);
            last_vz = ball.v_height;
        }
    }

    #[test]
    fn test_ground_contact_is_idempotent() {
        let tuning = Tuning::links();
        let mut ball = ball_at(400.0, 300.0);
        let before = ball;

        for _ in 0..100 {
            step(&mut ball, &tuning, field_bounds(), 1.0 / 120.0);
        }

        assert_eq!(ball.pos, before.pos);
        assert_eq!(ball.vel, before.vel);
        assert_eq!(ball.height, 0.0);
        assert_eq!(ball.v_height, 0.0);
        assert!(ball.at_rest());
    }

    #[test]
    fn test_low_wall_clamps_to_radius_and_reflects() {
        // Ball overlapping the left wall with inward radius 10 and vx = -50:
        // it must end clamped at x = 10 with vx = +50 * bounce.
        let tuning = dragless();
        let mut ball = ball_at(5.0, 300.0);
        ball.height = 10.0;
        ball.vel = Vec2::new(-50.0, 0.0);

        for _ in 0..4 {
            step(&mut ball, &tuning, field_bounds(), 1.0 / 120.0);
            if ball.vel.x > 0.0 {
                break;
            }
        }

        assert_eq!(ball.pos.x, ball.radius);
        assert!((ball.vel.x - 50.0 * tuning.bounce).abs() < 1e-3);
        // The other axis is untouched.
        assert_eq!(ball.vel.y, 0.0);
    }

    #[test]
    fn test_ground_bounce_attenuates_horizontal_speed() {
        let tuning = dragless();
        let mut ball = ball_at(400.0, 300.0);
        ball.height = 0.5;
        ball.v_height = -60.0;
        ball.vel = Vec2::new(100.0, 0.0);

        step(&mut ball, &tuning, field_bounds(), 1.0 / 120.0);

        assert_eq!(ball.height, 0.0);
        assert!(ball.v_height > 0.0, "bounce must reverse the fall");
        assert!((ball.vel.x - 100.0 * tuning.friction).abs() < 1e-3);
    }

    #[test]
    fn test_friction_never_applies_in_flight() {
        let tuning = dragless();
        let mut ball = ball_at(400.0, 300.0);
        ball.height = 100.0;
        ball.vel = Vec2::new(100.0, 0.0);

        step(&mut ball, &tuning, field_bounds(), 1.0 / 120.0);

        assert_eq!(ball.vel.x, 100.0);
    }

    #[test]
    fn test_landing_reports_ground_contact() {
        let tuning = dragless();
        let mut ball = ball_at(400.0, 300.0);
        ball.height = 0.1;
        ball.v_height = -120.0;

        let contacts = step(&mut ball, &tuning, field_bounds(), 1.0 / 120.0);
        assert!(contacts.ground);

        // Rolling contact is silent.
        let mut roller = ball_at(400.0, 300.0);
        roller.vel = Vec2::new(50.0, 0.0);
        let contacts = step(&mut roller, &tuning, field_bounds(), 1.0 / 120.0);
        assert!(!contacts.ground);
    }

    #[test]
    fn test_launch_velocity_mapping() {
        // Drag from (100,100) to (150,130) at gain 0.2: speed ~11.66 along
        // atan2(30, 50).
        let vel = launch_velocity(Vec2::new(100.0, 100.0), Vec2::new(150.0, 130.0), 0.2);
        assert!((vel.length() - 0.2 * (50.0_f32 * 50.0 + 30.0 * 30.0).sqrt()).abs() < 1e-4);
        assert!((vel.y.atan2(vel.x) - (30.0_f32).atan2(50.0)).abs() < 1e-6);
    }

    proptest! {
        #[test]
        fn prop_free_flight_matches_closed_form(
            x in 100.0_f32..700.0,
            y in 100.0_f32..500.0,
            vx in -200.0_f32..200.0,
            vy in -200.0_f32..200.0,
            z in 50.0_f32..400.0,
            vz in -50.0_f32..50.0,
        ) {
            let tuning = dragless();
            let dt = 1.0 / 120.0;
            let mut ball = ball_at(x, y);
            ball.vel = Vec2::new(vx, vy);
            ball.height = z;
            ball.v_height = vz;

            step(&mut ball, &tuning, field_bounds(), dt);

            let vz1 = vz - tuning.gravity * dt;
            prop_assert!((ball.v_height - vz1).abs() < 1e-3);
            prop_assert!((ball.height - (z + vz1 * dt)).abs() < 1e-3);
        }

        #[test]
        fn prop_wall_reflection_scales_by_bounce_exactly(
            vy in -150.0_f32..150.0,
            speed in 50.0_f32..400.0,
        ) {
            // Ball pressed against the left wall moving further left.
            let tuning = dragless();
            let mut ball = ball_at(10.0, 300.0);
            ball.height = 20.0;
            ball.vel = Vec2::new(-speed, vy);

            step(&mut ball, &tuning, field_bounds(), 1.0 / 120.0);

            prop_assert_eq!(ball.pos.x, ball.radius);
            prop_assert!((ball.vel.x - speed * tuning.bounce).abs() < 1e-2);
            // Free axis carries straight through (above the snap threshold).
            if vy.abs() >= STOP_EPSILON {
                prop_assert!((ball.vel.y - vy).abs() < 1e-3);
            }
        }

        #[test]
        fn prop_snap_to_zero_below_epsilon(
            vx in -0.009_f32..0.009,
            vy in -0.009_f32..0.009,
        ) {
            let tuning = Tuning { friction: 1.0, air_resistance: 0.0, ..Tuning::links() };
            let mut ball = ball_at(400.0, 300.0);
            ball.vel = Vec2::new(vx, vy);

            step(&mut ball, &tuning, field_bounds(), 1.0 / 120.0);

            prop_assert_eq!(ball.vel, Vec2::ZERO);
            prop_assert!(ball.at_rest());
        }

        #[test]
        fn prop_height_never_goes_negative(
            z in 0.0_f32..100.0,
            vz in -300.0_f32..100.0,
        ) {
            let tuning = Tuning::links();
            let mut ball = ball_at(400.0, 300.0);
            ball.height = z;
            ball.v_height = vz;

            for _ in 0..240 {
                step(&mut ball, &tuning, field_bounds(), 1.0 / 120.0);
                prop_assert!(ball.height >= 0.0);
            }
        }
    }
}
