use super::{
    push_out::{overlaps_xz, player_aabb},
    settings::{GROUND_BAND_ABOVE, GROUND_BAND_BELOW, REST_VELOCITY_EPS},
    types::{Obstacle, Vec3},
};
use crate::constants::GROUND_LEVEL;

/// Does the player's footprint (radius margin in X/Z) overlap the obstacle from above?
#[inline]
fn footprint_overlaps(position: Vec3, radius: f32, height: f32, obstacle: &Obstacle) -> bool {
    overlaps_xz(&player_aabb(position, radius, height), &obstacle.bounds())
}

/// Find the surface the player should stand on, if any.
///
/// Candidates
/// - The ground plane, when the feet are at or below `GROUND_LEVEL + GROUND_BAND_ABOVE`.
/// - Any obstacle under the footprint whose top lies within
///   `[feet - GROUND_BAND_ABOVE, feet + GROUND_BAND_BELOW]`, but only while the player is not
///   moving upward.
///
/// The highest candidate wins. Returns the surface height (meters), not the eye height.
pub fn find_ground(
    position: Vec3,
    radius: f32,
    height: f32,
    vertical_velocity: f32,
    obstacles: &[Obstacle],
) -> Option<f32> {
    let feet_y = position.y - height;
    let resting = vertical_velocity <= REST_VELOCITY_EPS;

    let plane = (feet_y <= GROUND_LEVEL + GROUND_BAND_ABOVE).then_some(GROUND_LEVEL);

    let boxes = obstacles
        .iter()
        .filter(|_| resting)
        .filter(|o| footprint_overlaps(position, radius, height, o))
        .map(Obstacle::top)
        .filter(|&top| feet_y <= top + GROUND_BAND_ABOVE && feet_y >= top - GROUND_BAND_BELOW);

    plane.into_iter().chain(boxes).reduce(f32::max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collision::ObstacleKind;

    const RADIUS: f32 = 0.3;
    const HEIGHT: f32 = 1.8;

    fn cube_at_origin() -> Obstacle {
        // Top face at y = 2.
        Obstacle::new(
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(2.0, 2.0, 2.0),
            ObstacleKind::Cube,
        )
    }

    #[test]
    fn plane_catches_feet_at_or_below_zero() {
        let on_plane = Vec3::new(10.0, HEIGHT, 10.0);
        assert_eq!(find_ground(on_plane, RADIUS, HEIGHT, 0.0, &[]), Some(0.0));

        let below = Vec3::new(10.0, HEIGHT - 0.3, 10.0);
        assert_eq!(find_ground(below, RADIUS, HEIGHT, -5.0, &[]), Some(0.0));

        let hovering = Vec3::new(10.0, HEIGHT + 0.04, 10.0);
        assert_eq!(find_ground(hovering, RADIUS, HEIGHT, 0.0, &[]), Some(0.0));
    }

    #[test]
    fn nothing_found_in_mid_air() {
        let airborne = Vec3::new(10.0, HEIGHT + 1.0, 10.0);
        assert_eq!(find_ground(airborne, RADIUS, HEIGHT, -1.0, &[cube_at_origin()]), None);
    }

    #[test]
    fn highest_surface_wins() {
        // Feet sunk into the cube top, well above the plane band.
        let pos = Vec3::new(0.0, 1.8 + HEIGHT, 0.0);
        assert_eq!(find_ground(pos, RADIUS, HEIGHT, -2.0, &[cube_at_origin()]), Some(2.0));

        // Two stacked tops both in the band: the higher one is picked.
        let taller = Obstacle::new(
            Vec3::new(0.5, 1.15, 0.5),
            Vec3::new(1.0, 2.3, 1.0),
            ObstacleKind::Pillar,
        );
        let pos = Vec3::new(0.5, 2.0 + HEIGHT, 0.5);
        let found = find_ground(pos, RADIUS, HEIGHT, 0.0, &[cube_at_origin(), taller]);
        assert!((found.unwrap() - 2.3).abs() < 1.0e-5);
    }

    #[test]
    fn box_top_ignored_while_moving_up() {
        let pos = Vec3::new(0.0, 2.0 + HEIGHT, 0.0);
        assert_eq!(find_ground(pos, RADIUS, HEIGHT, 8.0, &[cube_at_origin()]), None);
    }

    #[test]
    fn footprint_margin_counts_the_radius() {
        // Center is 0.2 outside the +X face, but the radius still overhangs it.
        let overhang = Vec3::new(1.2, 2.0 + HEIGHT, 0.0);
        assert_eq!(find_ground(overhang, RADIUS, HEIGHT, 0.0, &[cube_at_origin()]), Some(2.0));

        // Fully off the edge.
        let off = Vec3::new(1.4, 2.0 + HEIGHT, 0.0);
        assert_eq!(find_ground(off, RADIUS, HEIGHT, 0.0, &[cube_at_origin()]), None);
    }

    #[test]
    fn feet_too_deep_in_box_do_not_snap_up() {
        // Feet 0.6 below the top: outside the catch band.
        let pos = Vec3::new(0.0, 1.4 + HEIGHT, 0.0);
        assert_eq!(find_ground(pos, RADIUS, HEIGHT, -1.0, &[cube_at_origin()]), None);
    }
}
