use bevy::{
    prelude::*,
    window::{MonitorSelection, PrimaryWindow, VideoModeSelection, WindowMode, WindowPosition},
};
use leafwing_input_manager::prelude::ActionState;
use mavish_shared::{GameSettings, WindowModeSetting};

use crate::{FrameSet, input::PlayerAction};

/// The game's runtime settings as a Bevy resource.
#[derive(Resource, Default, Deref, DerefMut)]
pub struct Settings(pub GameSettings);

pub(super) fn plugin(app: &mut App) {
    app.init_resource::<Settings>();
    app.add_systems(Update, toggle_window_mode.in_set(FrameSet::Input));
    app.add_systems(Update, apply_window_mode.in_set(FrameSet::Present));
}

fn toggle_window_mode(actions: Res<ActionState<PlayerAction>>, mut settings: ResMut<Settings>) {
    if actions.just_pressed(&PlayerAction::ToggleWindowMode) {
        settings.toggle_borderless();
    }
}

/// Apply the requested window mode once, when it differs from what the window already has.
fn apply_window_mode(
    mut settings: ResMut<Settings>,
    mut window: Single<&mut Window, With<PrimaryWindow>>,
) {
    // Checked through a shared borrow so idle frames do not mark `Settings` changed.
    if !settings.has_window_mode_change() {
        return;
    }
    let Some(mode) = settings.take_window_mode_change() else {
        return;
    };

    info!("Applying window mode: {}", mode.label());

    match mode {
        WindowModeSetting::Windowed => {
            window.mode = WindowMode::Windowed;
            window.decorations = true;
            window.resizable = true;
            window
                .resolution
                .set(settings.default_width as f32, settings.default_height as f32);
            window.position = WindowPosition::Centered(MonitorSelection::Current);
        }
        WindowModeSetting::Borderless => {
            window.mode = WindowMode::BorderlessFullscreen(MonitorSelection::Current);
        }
        WindowModeSetting::Exclusive => {
            window.mode =
                WindowMode::Fullscreen(MonitorSelection::Current, VideoModeSelection::Current);
        }
    }
}
