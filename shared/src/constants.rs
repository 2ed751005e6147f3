/// Downward acceleration applied while airborne (m/s^2, positive magnitude).
pub const GRAVITY_MPS2: f32 = 20.0;

/// Vertical velocity set on the frame a jump is accepted (m/s).
pub const JUMP_IMPULSE_MPS: f32 = 8.0;

/// Height of the infinite ground plane (meters).
pub const GROUND_LEVEL: f32 = 0.0;

/// Pitch is clamped to `[-PITCH_LIMIT_DEG, PITCH_LIMIT_DEG]` to keep the camera from flipping.
pub const PITCH_LIMIT_DEG: f32 = 89.0;

/// Eye-to-feet distance of the player (meters).
pub const PLAYER_HEIGHT: f32 = 1.8;

/// Horizontal collision radius of the player (meters).
pub const PLAYER_RADIUS: f32 = 0.3;

/// Eye position at startup.
pub const SPAWN_POSITION: [f32; 3] = [0.0, 1.8, 10.0];

/// Yaw at startup (degrees). -90 faces down -Z, toward the origin from the spawn point.
pub const SPAWN_YAW_DEG: f32 = -90.0;

/// Speed multiplier while sprinting on foot.
pub const WALK_SPRINT_MULTIPLIER: f32 = 2.0;

/// Noclip flies faster than walking; this scales the base move speed.
pub const NOCLIP_SPEED_MULTIPLIER: f32 = 1.5;

/// Speed multiplier while sprinting in noclip.
pub const NOCLIP_SPRINT_MULTIPLIER: f32 = 2.5;

/// Number of frame times kept for the debug graph (~2 seconds at 60 fps).
pub const FRAME_HISTORY_LEN: usize = 120;
