use tracing::{debug, trace};

use crate::{
    collision::{Obstacle, find_ground, resolve_horizontal, settings::REST_VELOCITY_EPS},
    constants::{
        GRAVITY_MPS2, JUMP_IMPULSE_MPS, NOCLIP_SPEED_MULTIPLIER, NOCLIP_SPRINT_MULTIPLIER,
        WALK_SPRINT_MULTIPLIER,
    },
    input::{FrameInput, move_intent},
    look::{apply_look, flat_forward, forward, right_of},
    player::{MovementMode, Player},
    settings::GameSettings,
};

/// What happened during one `step_player()` call, for HUD/debug display.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepReport {
    /// Obstacles tested for horizontal overlap this frame.
    pub collision_checks: u32,
    /// Obstacles that pushed the player this frame.
    pub pushes: u32,
    /// The player went from airborne to grounded this frame.
    pub landed: bool,
}

/// Advance the player by one frame.
///
/// Order
/// - Noclip toggle (edge-triggered).
/// - Look update from the pointer delta.
/// - Mode-specific movement: intent, gravity/jump, horizontal collision, vertical integration,
///   grounding.
///
/// `obstacles` is read-only and its order is significant for push-out.
pub fn step_player(
    player: &mut Player,
    input: &FrameInput,
    obstacles: &[Obstacle],
    settings: &GameSettings,
) -> StepReport {
    if input.toggle_noclip_pressed {
        player.toggle_mode();
    }

    apply_look(player, input.pointer_delta, settings.mouse_sensitivity);

    match player.mode {
        MovementMode::Noclip => {
            step_noclip(player, input, settings.move_speed * NOCLIP_SPEED_MULTIPLIER);
            StepReport::default()
        }
        MovementMode::Walking => step_walking(player, input, obstacles, settings.move_speed),
    }
}

/// Free flight: full 3D view direction plus up/down keys, no collision.
fn step_noclip(player: &mut Player, input: &FrameInput, speed_mps: f32) {
    let dt = input.dt.max(0.0);

    let fwd = forward(player.yaw, player.pitch());
    let dir = move_intent(&input.keys, fwd, right_of(fwd), true);

    let speed = if input.keys.sprint {
        speed_mps * NOCLIP_SPRINT_MULTIPLIER
    } else {
        speed_mps
    };

    player.position += dir * speed * dt;
    player.velocity.fill(0.0);
    player.grounded = false;
}

/// Walking: planar intent snaps horizontal velocity, gravity and jump drive vertical velocity,
/// then collide horizontally, integrate vertically and look for ground.
fn step_walking(
    player: &mut Player,
    input: &FrameInput,
    obstacles: &[Obstacle],
    speed_mps: f32,
) -> StepReport {
    let dt = input.dt.max(0.0);
    let (radius, height) = (player.radius(), player.height());
    let was_grounded = player.grounded;

    // 1) Horizontal intent sets velocity directly (no acceleration or friction).
    let fwd = flat_forward(player.yaw);
    let dir = move_intent(&input.keys, fwd, right_of(fwd), false);
    let speed = if input.keys.sprint {
        speed_mps * WALK_SPRINT_MULTIPLIER
    } else {
        speed_mps
    };
    player.velocity.x = dir.x * speed;
    player.velocity.z = dir.z * speed;

    // 2) Gravity while airborne, then jump if standing.
    if !player.grounded {
        player.velocity.y -= GRAVITY_MPS2 * dt;
    }
    if input.jump_pressed && player.grounded {
        player.velocity.y = JUMP_IMPULSE_MPS;
        player.grounded = false;
        trace!("jump");
    }

    // 3) Horizontal move, resolved against each obstacle before any vertical displacement.
    let mut candidate = player.position;
    candidate.x += player.velocity.x * dt;
    candidate.z += player.velocity.z * dt;

    let horizontal = resolve_horizontal(candidate, radius, height, obstacles);
    candidate = horizontal.position;

    // 4) Vertical move.
    candidate.y += player.velocity.y * dt;

    // 5) Ground: highest standable surface, only while not moving upward.
    match find_ground(candidate, radius, height, player.velocity.y, obstacles) {
        Some(ground_y) if player.velocity.y <= REST_VELOCITY_EPS => {
            candidate.y = ground_y + height;
            player.velocity.y = 0.0;
            player.grounded = true;
        }
        _ => player.grounded = false,
    }

    player.position = candidate;

    let landed = !was_grounded && player.grounded;
    if landed {
        debug!(y = player.position.y, "landed");
    }

    StepReport {
        collision_checks: horizontal.checks,
        pushes: horizontal.pushes,
        landed,
    }
}
