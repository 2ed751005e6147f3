use rapier3d::parry::bounding_volume::Aabb;

use super::{
    settings::STANDING_TOLERANCE,
    types::{Obstacle, Point3, Vec3},
};

/// Outcome of resolving a candidate position against every obstacle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HorizontalResolution {
    /// Candidate position after all push-outs (Y untouched).
    pub position: Vec3,
    /// Number of obstacles tested.
    pub checks: u32,
    /// Number of obstacles that pushed the candidate.
    pub pushes: u32,
}

/// World-space box around the player: `radius` in X/Z, from the feet up to the eye in Y.
///
/// `position` is the eye, so the box hangs below it.
#[inline]
pub fn player_aabb(position: Vec3, radius: f32, height: f32) -> Aabb {
    Aabb::new(
        Point3::new(position.x - radius, position.y - height, position.z - radius),
        Point3::new(position.x + radius, position.y, position.z + radius),
    )
}

/// Strict X/Z overlap between two boxes. Faces that only touch do not overlap.
#[inline]
pub(crate) fn overlaps_xz(a: &Aabb, b: &Aabb) -> bool {
    a.maxs.x > b.mins.x && a.mins.x < b.maxs.x && a.maxs.z > b.mins.z && a.mins.z < b.maxs.z
}

/// Should `obstacle` push the player sideways at `position`?
///
/// False when the footprints do not overlap in X/Z, when the feet are at (or within
/// `STANDING_TOLERANCE` below) the obstacle top, and when the head is below its bottom.
/// The standing case is what lets the player walk across the top of a box.
pub fn should_push_horizontally(
    position: Vec3,
    radius: f32,
    height: f32,
    obstacle: &Obstacle,
) -> bool {
    let bounds = obstacle.bounds();
    if !overlaps_xz(&player_aabb(position, radius, height), &bounds) {
        return false;
    }

    let feet_y = position.y - height;
    if feet_y >= bounds.maxs.y - STANDING_TOLERANCE {
        return false;
    }

    if position.y < bounds.mins.y {
        return false;
    }

    true
}

/// Minimum-translation push restricted to a single horizontal axis.
///
/// For X and Z the signed push toward the nearer face is computed; the axis needing the smaller
/// absolute push wins. Equal pushes resolve along Z.
pub fn push_out_axis(position: Vec3, radius: f32, obstacle: &Obstacle) -> Vec3 {
    let bounds = obstacle.bounds();

    // Distance to clear the min face (push toward -axis) vs the max face (push toward +axis).
    let to_min_x = (position.x + radius) - bounds.mins.x;
    let to_max_x = bounds.maxs.x - (position.x - radius);
    let to_min_z = (position.z + radius) - bounds.mins.z;
    let to_max_z = bounds.maxs.z - (position.z - radius);

    let push_x = if to_min_x < to_max_x { -to_min_x } else { to_max_x };
    let push_z = if to_min_z < to_max_z { -to_min_z } else { to_max_z };

    let mut out = position;
    if push_x.abs() < push_z.abs() {
        out.x += push_x;
    } else {
        out.z += push_z;
    }
    out
}

/// Push the candidate out of each obstacle in slice order.
///
/// Each obstacle sees the position left by the previous one, so a later obstacle may undo part
/// of an earlier push. The result is deterministic for a fixed obstacle order.
pub fn resolve_horizontal(
    candidate: Vec3,
    radius: f32,
    height: f32,
    obstacles: &[Obstacle],
) -> HorizontalResolution {
    let mut position = candidate;
    let mut pushes = 0;

    for obstacle in obstacles {
        if should_push_horizontally(position, radius, height, obstacle) {
            position = push_out_axis(position, radius, obstacle);
            pushes += 1;
        }
    }

    HorizontalResolution {
        position,
        checks: obstacles.len() as u32,
        pushes,
    }
}
