//! Course data
//!
//! Holes are plain data, built once and never mutated at runtime. The
//! default course folds the original variant layouts into one nine-hole
//! round: open greens, obstacle lanes, and a hazard stretch with puddles.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{Cup, Obstacle, Puddle, SIM_TICKS_PER_SEC};

/// One hole: tee, cup, hazards, and scoring metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hole {
    pub tee: Vec2,
    pub cup: Cup,
    /// Expected strokes, display only
    pub par: u32,
    /// Shot clock for the whole hole, in seconds
    pub clock_secs: u32,
    pub obstacles: Vec<Obstacle>,
    pub puddles: Vec<Puddle>,
}

impl Hole {
    fn open(tee: Vec2, cup: Cup, par: u32) -> Self {
        Self {
            tee,
            cup,
            par,
            clock_secs: 60,
            obstacles: Vec::new(),
            puddles: Vec::new(),
        }
    }

    fn with_obstacles(tee: Vec2, cup: Cup, par: u32, obstacles: Vec<Obstacle>) -> Self {
        Self {
            obstacles,
            ..Self::open(tee, cup, par)
        }
    }

    fn with_hazards(
        tee: Vec2,
        cup: Cup,
        par: u32,
        obstacles: Vec<Obstacle>,
        puddles: Vec<Puddle>,
    ) -> Self {
        Self {
            obstacles,
            puddles,
            ..Self::open(tee, cup, par)
        }
    }

    /// Shot clock in simulation ticks
    pub fn clock_ticks(&self) -> u32 {
        self.clock_secs * SIM_TICKS_PER_SEC
    }
}

/// An ordered set of holes played as one round
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    pub name: String,
    pub holes: Vec<Hole>,
}

/// The standard tee spot near the bottom-left of the field
fn tee() -> Vec2 {
    Vec2::new(200.0, 550.0)
}

fn puddle(x: f32, y: f32, radius: f32) -> Puddle {
    Puddle {
        pos: Vec2::new(x, y),
        radius,
    }
}

/// The default nine-hole round
pub fn default_course() -> Course {
    Course {
        name: "Fairway Classic".into(),
        holes: vec![
            // Front three: the original layouts
            Hole::with_obstacles(
                tee(),
                Cup::at(700.0, 550.0),
                2,
                vec![Obstacle::new(400.0, 400.0, 100.0, 20.0)],
            ),
            Hole::with_obstacles(
                tee(),
                Cup::at(400.0, 300.0),
                3,
                vec![
                    Obstacle::new(300.0, 200.0, 50.0, 200.0),
                    Obstacle::new(500.0, 400.0, 100.0, 20.0),
                ],
            ),
            Hole::open(tee(), Cup::at(100.0, 100.0), 3),
            // Middle three: longer carries, tighter lanes
            Hole::with_obstacles(
                Vec2::new(100.0, 500.0),
                Cup::at(700.0, 100.0),
                3,
                vec![Obstacle::new(350.0, 150.0, 30.0, 300.0)],
            ),
            Hole::with_obstacles(
                Vec2::new(400.0, 550.0),
                Cup::at(400.0, 80.0),
                4,
                vec![
                    Obstacle::new(200.0, 250.0, 180.0, 25.0),
                    Obstacle::new(420.0, 380.0, 180.0, 25.0),
                ],
            ),
            Hole::open(Vec2::new(700.0, 550.0), Cup::at(120.0, 520.0), 2),
            // Back three: the hazard stretch
            Hole::with_hazards(
                tee(),
                Cup::at(650.0, 150.0),
                3,
                Vec::new(),
                vec![puddle(420.0, 350.0, 60.0)],
            ),
            Hole::with_hazards(
                Vec2::new(120.0, 300.0),
                Cup::at(680.0, 300.0),
                4,
                vec![Obstacle::new(380.0, 100.0, 40.0, 180.0)],
                vec![puddle(400.0, 450.0, 70.0), puddle(560.0, 200.0, 45.0)],
            ),
            Hole::with_hazards(
                tee(),
                Cup::at(400.0, 300.0),
                4,
                vec![Obstacle::new(300.0, 200.0, 50.0, 200.0)],
                vec![puddle(550.0, 420.0, 55.0)],
            ),
        ],
    }
}

/// Total par across the round, display only
pub fn course_par(course: &Course) -> u32 {
    course.holes.iter().map(|h| h.par).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{FIELD_HEIGHT, FIELD_WIDTH};

    #[test]
    fn test_default_course_has_nine_holes() {
        let course = default_course();
        assert_eq!(course.holes.len(), 9);
        assert!(course.holes.iter().any(|h| !h.obstacles.is_empty()));
        assert!(course.holes.iter().any(|h| !h.puddles.is_empty()));
    }

    #[test]
    fn test_everything_sits_inside_the_field() {
        let course = default_course();
        for hole in &course.holes {
            for p in [hole.tee, hole.cup.pos] {
                assert!(p.x > 0.0 && p.x < FIELD_WIDTH, "{p:?} out of bounds");
                assert!(p.y > 0.0 && p.y < FIELD_HEIGHT, "{p:?} out of bounds");
            }
            for obstacle in &hole.obstacles {
                assert!(obstacle.min.x < obstacle.max.x);
                assert!(obstacle.min.y < obstacle.max.y);
                assert!(obstacle.max.x <= FIELD_WIDTH);
                assert!(obstacle.max.y <= FIELD_HEIGHT);
            }
        }
    }

    #[test]
    fn test_tee_is_never_inside_a_hazard() {
        let course = default_course();
        for hole in &course.holes {
            for puddle in &hole.puddles {
                let dist = (hole.tee - puddle.pos).length();
                assert!(dist > puddle.radius, "tee inside puddle on {hole:?}");
            }
        }
    }

    #[test]
    fn test_course_par() {
        let course = default_course();
        assert_eq!(course_par(&course), 28);
    }
}
