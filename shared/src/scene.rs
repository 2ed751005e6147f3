use crate::collision::{Obstacle, ObstacleKind, Vec3};

/// Pillar grid spacing (meters between neighbouring grid indices).
const PILLAR_SPACING: f32 = 3.0;
/// Pillar footprint (meters).
const PILLAR_WIDTH: f32 = 0.5;

/// The demo level: a 2m cube at the origin ringed by a 6×6 grid of pillars.
///
/// Pillars sit at odd grid indices `i, j ∈ {-5, -3, …, 5}` placed at `(3i, h/2, 3j)`, with
/// height `1 + |i + j| mod 3` so neighbours alternate between 1m, 2m and 3m. Order is stable:
/// cube first, then pillars row by row.
pub fn demo_obstacles() -> Vec<Obstacle> {
    let mut obstacles = vec![Obstacle::new(
        Vec3::new(0.0, 1.0, 0.0),
        Vec3::new(2.0, 2.0, 2.0),
        ObstacleKind::Cube,
    )];

    for i in (-5_i32..=5).step_by(2) {
        for j in (-5_i32..=5).step_by(2) {
            let height = 1.0 + ((i + j).abs() % 3) as f32;
            obstacles.push(Obstacle::new(
                Vec3::new(i as f32 * PILLAR_SPACING, height / 2.0, j as f32 * PILLAR_SPACING),
                Vec3::new(PILLAR_WIDTH, height, PILLAR_WIDTH),
                ObstacleKind::Pillar,
            ));
        }
    }

    obstacles
}
