pub mod collision;
pub mod constants;
pub mod input;
pub mod look;
pub mod movement;
pub mod player;
pub mod scene;
pub mod settings;
pub mod stats;

pub use collision::{Obstacle, ObstacleKind, Vec2, Vec3};
pub use constants::{
    FRAME_HISTORY_LEN, GRAVITY_MPS2, GROUND_LEVEL, JUMP_IMPULSE_MPS, PITCH_LIMIT_DEG,
    PLAYER_HEIGHT, PLAYER_RADIUS,
};
pub use input::{FrameInput, MoveKeys, move_intent};
pub use look::{Pose, apply_look, clamp_pitch, flat_forward, forward, right_of};
pub use movement::{StepReport, step_player};
pub use player::{MovementMode, Player};
pub use scene::demo_obstacles;
pub use settings::{GameSettings, WindowModeSetting};
pub use stats::FrameStats;
