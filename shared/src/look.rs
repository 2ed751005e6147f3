use crate::{
    collision::{Vec2, Vec3},
    constants::PITCH_LIMIT_DEG,
    player::Player,
};

/// Clamp pitch (degrees) into `[-PITCH_LIMIT_DEG, PITCH_LIMIT_DEG]`.
#[inline]
pub fn clamp_pitch(pitch_deg: f32) -> f32 {
    pitch_deg.clamp(-PITCH_LIMIT_DEG, PITCH_LIMIT_DEG)
}

/// Apply a pointer delta to the player's orientation.
///
/// Moving the pointer right turns right (yaw grows); moving it down looks down (pitch shrinks).
/// Yaw is left unbounded.
pub fn apply_look(player: &mut Player, pointer_delta: Vec2, sensitivity: f32) {
    player.yaw += pointer_delta.x * sensitivity;
    player.set_pitch(player.pitch() - pointer_delta.y * sensitivity);
}

/// Unit view direction for the given yaw/pitch (degrees).
///
/// Yaw 0 looks down +X, yaw 90 down +Z; positive pitch looks up.
pub fn forward(yaw_deg: f32, pitch_deg: f32) -> Vec3 {
    let (yaw, pitch) = (yaw_deg.to_radians(), pitch_deg.to_radians());
    Vec3::new(yaw.cos() * pitch.cos(), pitch.sin(), yaw.sin() * pitch.cos()).normalize()
}

/// View direction projected onto the ground plane, so walking ignores pitch.
pub fn flat_forward(yaw_deg: f32) -> Vec3 {
    let yaw = yaw_deg.to_radians();
    Vec3::new(yaw.cos(), 0.0, yaw.sin()).normalize()
}

/// Right-hand direction for a forward vector: `normalize(forward × up)`.
#[inline]
pub fn right_of(forward: Vec3) -> Vec3 {
    forward.cross(&Vec3::y()).normalize()
}

/// Where the camera sits and what it looks at.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub eye: Vec3,
    pub target: Vec3,
}

impl Pose {
    /// Eye at the player position, target one meter along the view direction.
    pub fn from_player(player: &Player) -> Self {
        let eye = player.position;
        Self {
            eye,
            target: eye + forward(player.yaw, player.pitch()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1.0e-5;

    #[test]
    fn pitch_stays_within_limits_for_any_input() {
        let mut player = Player::spawn();
        let deltas = [-1.0e6, -5000.0, -30.0, -0.5, 0.0, 0.5, 30.0, 5000.0, 1.0e6];

        for &dy in &deltas {
            apply_look(&mut player, Vec2::new(0.0, dy), 0.1);
            assert!(player.pitch() >= -PITCH_LIMIT_DEG && player.pitch() <= PITCH_LIMIT_DEG);
        }
    }

    #[test]
    fn look_scales_by_sensitivity_and_inverts_vertical() {
        let mut player = Player::spawn();
        player.yaw = 0.0;
        player.set_pitch(0.0);

        apply_look(&mut player, Vec2::new(10.0, 20.0), 0.1);
        assert!((player.yaw - 1.0).abs() < EPS);
        assert!((player.pitch() + 2.0).abs() < EPS);
    }

    #[test]
    fn yaw_is_unbounded() {
        let mut player = Player::spawn();
        player.yaw = 0.0;
        for _ in 0..10 {
            apply_look(&mut player, Vec2::new(100.0, 0.0), 1.0);
        }
        assert!((player.yaw - 1000.0).abs() < EPS);
    }

    #[test]
    fn forward_follows_yaw_and_pitch() {
        let f = forward(0.0, 0.0);
        assert!((f - Vec3::x()).norm() < EPS);

        let f = forward(90.0, 0.0);
        assert!((f - Vec3::z()).norm() < EPS);

        let f = forward(-90.0, 45.0);
        let s = std::f32::consts::FRAC_1_SQRT_2;
        assert!((f - Vec3::new(0.0, s, -s)).norm() < EPS);
        assert!((f.norm() - 1.0).abs() < EPS);
    }

    #[test]
    fn flat_forward_ignores_pitch() {
        let f = flat_forward(30.0);
        assert!(f.y.abs() < EPS);
        assert!((f.norm() - 1.0).abs() < EPS);

        let pitched = forward(30.0, 60.0);
        let planar = Vec3::new(pitched.x, 0.0, pitched.z).normalize();
        assert!((planar - f).norm() < EPS);
    }

    #[test]
    fn right_is_perpendicular_and_level() {
        // Looking down -Z, right is +X.
        let r = right_of(flat_forward(-90.0));
        assert!((r - Vec3::x()).norm() < EPS);

        let f = forward(15.0, 40.0);
        let r = right_of(f);
        assert!(r.y.abs() < EPS);
        assert!(r.dot(&f).abs() < EPS);
    }

    #[test]
    fn pose_targets_one_meter_ahead() {
        let player = Player::spawn();
        let pose = Pose::from_player(&player);
        assert_eq!(pose.eye, player.position);
        assert!(((pose.target - pose.eye).norm() - 1.0).abs() < EPS);
    }
}
