use bevy::math::{Vec2, Vec3};
use nalgebra as na;

/// Simulation vectors are nalgebra; rendering wants glam.
#[inline]
pub fn to_bevy(v: &na::Vector3<f32>) -> Vec3 {
    Vec3::new(v.x, v.y, v.z)
}

#[inline]
pub fn to_sim(v: Vec2) -> na::Vector2<f32> {
    na::Vector2::new(v.x, v.y)
}
