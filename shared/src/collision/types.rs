/*!
Core collision types and math aliases shared by the collision submodules.

This module contains no algorithms. It defines the data exchanged between:
- push_out (horizontal minimum-translation resolution)
- ground (standable surface detection)
- the movement step that drives both

Obstacles are axis-aligned and immutable for a session. They are owned by whoever builds the
scene and handed to the resolver as a plain slice, so the index in that slice is the only
identity an obstacle has.
*/

use nalgebra as na;
use rapier3d::parry::bounding_volume::Aabb;

/// Common math aliases for clarity and consistency.
pub type Vec3 = na::Vector3<f32>;
pub type Vec2 = na::Vector2<f32>;
pub type Point3 = na::Point3<f32>;

/// What an obstacle is, for colouring and HUD purposes only. Collision ignores it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ObstacleKind {
    Cube,
    Pillar,
}

/// Axis-aligned box placed in world space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Obstacle {
    /// World-space center of the box.
    pub center: Vec3,
    /// Full extents (width, height, depth), not half-extents.
    pub size: Vec3,
    pub kind: ObstacleKind,
}

impl Obstacle {
    #[inline]
    pub fn new(center: Vec3, size: Vec3, kind: ObstacleKind) -> Self {
        Self { center, size, kind }
    }

    /// World-space bounds of the box.
    #[inline]
    pub fn bounds(&self) -> Aabb {
        Aabb::from_half_extents(Point3::from(self.center), self.size * 0.5)
    }

    /// Height of the top face (meters).
    #[inline]
    pub fn top(&self) -> f32 {
        self.center.y + self.size.y * 0.5
    }

    /// Checks that the box has strictly positive, finite extents and a finite center.
    ///
    /// The resolver assumes well-formed boxes; call this wherever obstacles enter the world.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.center.iter().all(|c| c.is_finite()) {
            return Err("Obstacle center is not finite");
        }
        if !self.size.iter().all(|s| s.is_finite()) {
            return Err("Obstacle size is not finite");
        }
        if self.size.iter().any(|&s| s <= 0.0) {
            return Err("Obstacle extents must be positive");
        }
        Ok(())
    }
}
