/*!
Collision tolerances for the player-vs-box resolver and ground detection.

Notes
- Distances are in meters, velocities in meters per second.
- These are practical world-space tolerances, not machine epsilons. They were tuned for a
  1.8m tall player and boxes of roughly 0.5m..2m.
*/

/// Feet within this distance below a box top count as "standing on it" and skip the
/// horizontal push-out. Keeps the player from being shoved sideways off a ledge they landed on.
pub const STANDING_TOLERANCE: f32 = 0.1;

/// How far below a box top the feet may be and still be caught by the box (meters).
/// Large enough to catch a fast fall within a single frame.
pub const GROUND_BAND_BELOW: f32 = 0.5;

/// How far above a surface the feet may hover and still be snapped down onto it (meters).
pub const GROUND_BAND_ABOVE: f32 = 0.05;

/// Vertical velocity at or below this counts as "not moving upward" (m/s).
/// A jump in progress is never snapped back to the ground.
pub const REST_VELOCITY_EPS: f32 = 0.01;
