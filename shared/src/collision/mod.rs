/*!
Collision root module.

Player-vs-static-box collision for a single upright player. The player is treated as an
axis-aligned box (radius in X/Z, eye-to-feet height in Y); obstacles are axis-aligned boxes.
The code is split for clarity:

- types:    shared data types (Obstacle, math aliases)
- settings: tolerances for standing, ground bands and resting velocity
- push_out: horizontal overlap test and single-axis minimum-translation push-out
- ground:   standable surface detection (ground plane + obstacle tops)
*/

pub mod ground;
pub mod push_out;
pub mod settings;
pub mod types;

// Re-export commonly used types and functions.
pub use ground::find_ground;
pub use push_out::{
    HorizontalResolution, player_aabb, push_out_axis, resolve_horizontal, should_push_horizontally,
};
pub use types::{Obstacle, ObstacleKind, Point3, Vec2, Vec3};
