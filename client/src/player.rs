use bevy::{
    input::mouse::AccumulatedMouseMotion,
    prelude::*,
    window::{CursorGrabMode, CursorOptions, PrimaryWindow},
};
use leafwing_input_manager::prelude::ActionState;
use mavish_shared::{Player, StepReport, step_player};

use crate::{
    FrameSet,
    hud::Stats,
    input::{PlayerAction, sample_frame_input},
    menu::GameState,
    settings::Settings,
    world::Obstacles,
};

/// The single locally simulated player.
#[derive(Resource, Default, Deref, DerefMut)]
pub struct LocalPlayer(pub Player);

/// Counters from the most recent movement step, for the debug overlay.
#[derive(Resource, Default, Deref)]
pub struct LastStep(pub StepReport);

pub(super) fn plugin(app: &mut App) {
    app.init_resource::<LocalPlayer>();
    app.init_resource::<LastStep>();
    app.add_systems(
        Update,
        step_local_player
            .in_set(FrameSet::Simulate)
            .run_if(in_state(GameState::Playing)),
    );
}

fn step_local_player(
    time: Res<Time>,
    actions: Res<ActionState<PlayerAction>>,
    mouse: Res<AccumulatedMouseMotion>,
    cursor: Single<&CursorOptions, With<PrimaryWindow>>,
    obstacles: Res<Obstacles>,
    settings: Res<Settings>,
    mut player: ResMut<LocalPlayer>,
    mut last_step: ResMut<LastStep>,
    mut stats: ResMut<Stats>,
) {
    let look_enabled = cursor.grab_mode != CursorGrabMode::None;
    let input = sample_frame_input(&actions, &mouse, time.delta_secs(), look_enabled);

    let report = step_player(&mut player, &input, &obstacles, &settings);

    stats.collision_checks = report.collision_checks;
    last_step.0 = report;
}
