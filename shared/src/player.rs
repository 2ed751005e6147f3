use tracing::debug;

use crate::{
    collision::Vec3,
    constants::{PLAYER_HEIGHT, PLAYER_RADIUS, SPAWN_POSITION, SPAWN_YAW_DEG},
    look::clamp_pitch,
};

/// How the player moves. Selected by an external toggle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MovementMode {
    /// Gravity, jumping and collision.
    #[default]
    Walking,
    /// Free flight through everything.
    Noclip,
}

/// The single player record. Mutated once per frame by the movement step.
///
/// `height` and `radius` are fixed at construction. `pitch` is only written through
/// `set_pitch`, which keeps it within the pitch limit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Player {
    /// Eye position (world space, meters).
    pub position: Vec3,
    /// Meters per second. `y` drives vertical motion while walking.
    pub velocity: Vec3,
    /// Degrees, unbounded.
    pub yaw: f32,
    /// Recomputed every frame.
    pub grounded: bool,
    pub mode: MovementMode,
    /// Degrees.
    pitch: f32,
    height: f32,
    radius: f32,
}

impl Player {
    pub fn new(position: Vec3, yaw: f32, pitch: f32, height: f32, radius: f32) -> Self {
        Self {
            position,
            velocity: Vec3::zeros(),
            yaw,
            pitch: clamp_pitch(pitch),
            grounded: false,
            mode: MovementMode::Walking,
            height,
            radius,
        }
    }

    /// The startup pose: a walking player standing on the plane, facing the origin.
    pub fn spawn() -> Self {
        Self::new(
            Vec3::from(SPAWN_POSITION),
            SPAWN_YAW_DEG,
            0.0,
            PLAYER_HEIGHT,
            PLAYER_RADIUS,
        )
    }

    /// Eye-to-feet distance (meters).
    #[inline]
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Horizontal collision radius (meters).
    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Degrees, always within `[-PITCH_LIMIT_DEG, PITCH_LIMIT_DEG]`.
    #[inline]
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn set_pitch(&mut self, pitch_deg: f32) {
        self.pitch = clamp_pitch(pitch_deg);
    }

    #[inline]
    pub fn feet_y(&self) -> f32 {
        self.position.y - self.height
    }

    /// Switch between walking and noclip.
    ///
    /// Leaving noclip drops any vertical speed so the player does not resume a stale fall.
    pub fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            MovementMode::Walking => MovementMode::Noclip,
            MovementMode::Noclip => {
                self.velocity.y = 0.0;
                MovementMode::Walking
            }
        };
        debug!(mode = ?self.mode, "movement mode toggled");
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::spawn()
    }
}
