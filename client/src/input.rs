use bevy::{input::mouse::AccumulatedMouseMotion, prelude::*};
use leafwing_input_manager::prelude::*;
use mavish_shared::{FrameInput, MoveKeys};

use crate::math::to_sim;

#[derive(Reflect, Actionlike, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PlayerAction {
    Forward,
    Back,
    Left,
    Right,
    /// Fly up in noclip (held).
    Up,
    /// Fly down in noclip (held).
    Down,
    Sprint,
    /// Shares a key with `Up`; only the press edge is used.
    Jump,
    ToggleNoclip,
    ToggleDebug,
    ToggleWindowMode,
    ToggleMenu,
    ToggleCursorLock,
}

pub(super) fn plugin(app: &mut App) {
    app.add_plugins(InputManagerPlugin::<PlayerAction>::default());

    app.register_type::<PlayerAction>();

    let input_map = InputMap::new([
        (PlayerAction::Forward, KeyCode::KeyW),
        (PlayerAction::Back, KeyCode::KeyS),
        (PlayerAction::Left, KeyCode::KeyA),
        (PlayerAction::Right, KeyCode::KeyD),
        (PlayerAction::Up, KeyCode::Space),
        (PlayerAction::Down, KeyCode::ShiftLeft),
        (PlayerAction::Sprint, KeyCode::ControlLeft),
        (PlayerAction::Jump, KeyCode::Space),
        (PlayerAction::ToggleNoclip, KeyCode::KeyV),
        (PlayerAction::ToggleDebug, KeyCode::F3),
        (PlayerAction::ToggleWindowMode, KeyCode::F11),
        (PlayerAction::ToggleMenu, KeyCode::Escape),
        (PlayerAction::ToggleCursorLock, KeyCode::Tab),
    ]);
    app.insert_resource(input_map);
    app.insert_resource(ActionState::<PlayerAction>::default());
}

/// Snapshot this frame's input for the movement step.
///
/// `look_enabled` gates the pointer delta so a free cursor does not turn the view.
pub fn sample_frame_input(
    actions: &ActionState<PlayerAction>,
    mouse: &AccumulatedMouseMotion,
    dt: f32,
    look_enabled: bool,
) -> FrameInput {
    let pointer_delta = if look_enabled {
        to_sim(mouse.delta)
    } else {
        to_sim(Vec2::ZERO)
    };

    FrameInput {
        dt,
        pointer_delta,
        keys: MoveKeys {
            forward: actions.pressed(&PlayerAction::Forward),
            back: actions.pressed(&PlayerAction::Back),
            left: actions.pressed(&PlayerAction::Left),
            right: actions.pressed(&PlayerAction::Right),
            up: actions.pressed(&PlayerAction::Up),
            down: actions.pressed(&PlayerAction::Down),
            sprint: actions.pressed(&PlayerAction::Sprint),
        },
        jump_pressed: actions.just_pressed(&PlayerAction::Jump),
        toggle_noclip_pressed: actions.just_pressed(&PlayerAction::ToggleNoclip),
    }
}
