//! Frame composition
//!
//! Turns sim state into one triangle-soup vertex list per frame. Draw order
//! is back to front: hazards, cup, shadow, ball, aim indicator.

use glam::Vec2;

use super::shapes;
use super::vertex::{Vertex, colors};
use crate::Settings;
use crate::city::CityState;
use crate::sim::{GamePhase, GameState};

/// How strongly ball height lifts the sprite off its shadow
const HEIGHT_LIFT: f32 = 0.4;
/// Height at which the shadow has shrunk to half size
const SHADOW_HALF_HEIGHT: f32 = 120.0;

/// Build the golf frame. `drag` is the in-progress gesture (press point,
/// current cursor), drawn as the aim indicator while aiming.
pub fn golf_scene(
    state: &GameState,
    drag: Option<(Vec2, Vec2)>,
    settings: &Settings,
) -> Vec<Vertex> {
    let segments = settings.quality.circle_segments();
    let mut vertices = Vec::new();
    let hole = state.hole();

    for puddle in &hole.puddles {
        vertices.extend(shapes::circle(
            puddle.pos,
            puddle.radius,
            colors::PUDDLE,
            segments,
        ));
    }

    for obstacle in &hole.obstacles {
        vertices.extend(shapes::rect(obstacle.min, obstacle.max, colors::OBSTACLE));
    }

    // Tee marker and cup
    vertices.extend(shapes::ring(
        hole.tee,
        state.ball.radius + 2.0,
        state.ball.radius + 4.0,
        colors::TEE_MARK,
        segments,
    ));
    vertices.extend(shapes::ring(
        hole.cup.pos,
        hole.cup.radius,
        hole.cup.radius + 2.0,
        colors::CUP_RIM,
        segments,
    ));
    vertices.extend(shapes::circle(
        hole.cup.pos,
        hole.cup.radius,
        colors::CUP,
        segments,
    ));

    // Shadow stays on the ground plane; the ball lifts off it with height.
    let ball = &state.ball;
    if settings.ball_shadow && ball.height > 0.0 {
        let shrink = SHADOW_HALF_HEIGHT / (SHADOW_HALF_HEIGHT + ball.height);
        vertices.extend(shapes::circle(
            ball.pos,
            ball.radius * shrink,
            colors::BALL_SHADOW,
            segments,
        ));
    }
    let draw_pos = ball.pos - Vec2::new(0.0, ball.height * HEIGHT_LIFT);
    vertices.extend(shapes::circle(
        draw_pos,
        ball.radius,
        colors::BALL_OUTLINE,
        segments,
    ));
    vertices.extend(shapes::circle(
        draw_pos,
        ball.radius - 3.0,
        colors::BALL,
        segments,
    ));

    // Aim indicator: anchor dot at the press point, line to the cursor
    if settings.aim_guide && state.phase == GamePhase::Aiming {
        if let Some((press, cursor)) = drag {
            vertices.extend(shapes::circle(press, 8.0, colors::AIM_ANCHOR, segments));
            vertices.extend(shapes::line(press, cursor, 2.0, colors::AIM_LINE));
        }
    }

    vertices
}

/// Card and capacity-bar geometry for one zone
const ZONE_CARD: Vec2 = Vec2::new(200.0, 60.0);
const BAR_SIZE: Vec2 = Vec2::new(200.0, 15.0);
const BAR_OFFSET: f32 = 70.0;

/// Build the city frame: one card plus capacity bar per zone. All numbers
/// live in the DOM HUD; the canvas carries only the shapes.
pub fn city_scene(state: &CityState) -> Vec<Vertex> {
    let zone_colors = [
        colors::ZONE_RESIDENTIAL,
        colors::ZONE_COMMERCIAL,
        colors::ZONE_INDUSTRIAL,
    ];
    let mut vertices = Vec::new();

    for (zone, color) in state.zones.iter().zip(zone_colors) {
        vertices.extend(shapes::rect(zone.anchor, zone.anchor + ZONE_CARD, color));

        let bar_min = zone.anchor + Vec2::new(0.0, BAR_OFFSET);
        let ratio = (zone.capacity as f32 / 100.0).min(1.0).max(0.0);
        vertices.extend(shapes::rect(
            bar_min,
            bar_min + Vec2::new(BAR_SIZE.x * ratio, BAR_SIZE.y),
            colors::BAR_FILL,
        ));
        vertices.extend(shapes::rect_outline(
            bar_min,
            bar_min + BAR_SIZE,
            2.0,
            colors::BAR_FRAME,
        ));
    }

    vertices
}
