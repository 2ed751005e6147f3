use bevy::{
    prelude::*,
    window::{CursorGrabMode, CursorOptions, PrimaryWindow},
};
use leafwing_input_manager::prelude::ActionState;

use crate::{FrameSet, input::PlayerAction, settings::Settings};

#[derive(States, Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    #[default]
    Playing,
    /// Settings menu is open; the player is frozen.
    Paused,
}

#[derive(Component)]
struct MenuRoot;

#[derive(Component)]
struct MenuText;

pub(super) fn plugin(app: &mut App) {
    app.init_state::<GameState>();
    app.add_systems(Startup, spawn_menu);
    app.add_systems(OnEnter(GameState::Paused), open_menu);
    app.add_systems(OnEnter(GameState::Playing), close_menu);
    app.add_systems(
        Update,
        (
            toggle_menu,
            toggle_cursor_lock.run_if(in_state(GameState::Playing)),
            adjust_settings.run_if(in_state(GameState::Paused)),
        )
            .in_set(FrameSet::Input),
    );
    app.add_systems(
        Update,
        update_menu_text
            .in_set(FrameSet::Present)
            .run_if(in_state(GameState::Paused)),
    );
}

fn set_cursor_locked(cursor: &mut CursorOptions, locked: bool) {
    if locked {
        cursor.grab_mode = CursorGrabMode::Locked;
        cursor.visible = false;
    } else {
        cursor.grab_mode = CursorGrabMode::None;
        cursor.visible = true;
    }
}

fn spawn_menu(mut commands: Commands) {
    commands.spawn((
        MenuRoot,
        Node {
            position_type: PositionType::Absolute,
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            ..default()
        },
        BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
        GlobalZIndex(10),
        Visibility::Hidden,
        children![(
            MenuText,
            Text::new(""),
            TextFont {
                font_size: 22.0,
                ..default()
            },
            TextColor(Color::WHITE),
        )],
    ));
}

fn toggle_menu(
    actions: Res<ActionState<PlayerAction>>,
    state: Res<State<GameState>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if !actions.just_pressed(&PlayerAction::ToggleMenu) {
        return;
    }

    let next = match state.get() {
        GameState::Playing => GameState::Paused,
        GameState::Paused => GameState::Playing,
    };
    debug!("Game state -> {next:?}");
    next_state.set(next);
}

fn open_menu(
    mut cursor: Single<&mut CursorOptions, With<PrimaryWindow>>,
    mut menu: Single<&mut Visibility, With<MenuRoot>>,
) {
    set_cursor_locked(&mut cursor, false);
    **menu = Visibility::Visible;
}

/// Also runs on startup, since `Playing` is the initial state.
fn close_menu(
    mut cursor: Single<&mut CursorOptions, With<PrimaryWindow>>,
    menu: Option<Single<&mut Visibility, With<MenuRoot>>>,
) {
    set_cursor_locked(&mut cursor, true);
    if let Some(mut menu) = menu {
        **menu = Visibility::Hidden;
    }
}

fn toggle_cursor_lock(
    actions: Res<ActionState<PlayerAction>>,
    mut cursor: Single<&mut CursorOptions, With<PrimaryWindow>>,
) {
    if actions.just_pressed(&PlayerAction::ToggleCursorLock) {
        let locked = cursor.grab_mode == CursorGrabMode::None;
        set_cursor_locked(&mut cursor, locked);
    }
}

fn adjust_settings(
    keys: Res<ButtonInput<KeyCode>>,
    mut settings: ResMut<Settings>,
    mut exit: MessageWriter<AppExit>,
) {
    if keys.just_pressed(KeyCode::BracketLeft) {
        settings.adjust_mouse_sensitivity(-0.01);
    }
    if keys.just_pressed(KeyCode::BracketRight) {
        settings.adjust_mouse_sensitivity(0.01);
    }
    if keys.just_pressed(KeyCode::Minus) {
        settings.adjust_fov(-5.0);
    }
    if keys.just_pressed(KeyCode::Equal) {
        settings.adjust_fov(5.0);
    }
    if keys.just_pressed(KeyCode::Comma) {
        settings.adjust_move_speed(-0.5);
    }
    if keys.just_pressed(KeyCode::Period) {
        settings.adjust_move_speed(0.5);
    }
    if keys.just_pressed(KeyCode::KeyM) {
        let next = settings.window_mode().next();
        settings.set_window_mode(next);
    }
    if keys.just_pressed(KeyCode::KeyF) {
        settings.show_fps = !settings.show_fps;
    }
    if keys.just_pressed(KeyCode::KeyQ) {
        info!("Exit requested from menu");
        exit.write(AppExit::Success);
    }
}

fn update_menu_text(settings: Res<Settings>, mut text: Single<&mut Text, With<MenuText>>) {
    text.0 = format!(
        "SETTINGS\n\n\
         Mouse sensitivity: {:.2}   [ / ]\n\
         Field of view: {:.0}   - / =\n\
         Move speed: {:.1}   , / .\n\
         Window mode: {}   M  (F11 toggles borderless)\n\
         Show FPS: {}   F\n\n\
         Esc  resume      Q  quit",
        settings.mouse_sensitivity,
        settings.fov_deg,
        settings.move_speed,
        settings.window_mode().label(),
        if settings.show_fps { "on" } else { "off" },
    );
}
