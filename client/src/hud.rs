use bevy::prelude::*;
use leafwing_input_manager::prelude::ActionState;
use mavish_shared::{
    FrameStats, MovementMode, Player, StepReport, constants::FRAME_HISTORY_LEN,
};

use crate::{
    FrameSet,
    input::PlayerAction,
    player::{LastStep, LocalPlayer},
    settings::Settings,
    world::Obstacles,
};

/// Frame-time statistics, recorded once per frame.
#[derive(Resource, Default, Deref, DerefMut)]
pub struct Stats(pub FrameStats);

#[derive(Resource, Default)]
struct DebugOverlay {
    visible: bool,
}

#[derive(Component)]
struct InfoText;

#[derive(Component)]
struct FpsText;

#[derive(Component)]
struct DebugRoot;

#[derive(Component)]
struct DebugText;

/// One bar of the frame-time graph; the index is into the history, oldest first.
#[derive(Component)]
struct GraphBar(usize);

const GRAPH_HEIGHT_PX: f32 = 50.0;
const BAR_WIDTH_PX: f32 = 2.0;
const GRAPH_SCALE_MS: f32 = 33.33;
const FRAME_MS_60: f32 = 16.67;

const PANEL_BG: Color = Color::srgba(0.0, 0.0, 0.0, 0.5);

pub(super) fn plugin(app: &mut App) {
    app.init_resource::<Stats>();
    app.init_resource::<DebugOverlay>();
    app.add_systems(Startup, spawn_hud);
    app.add_systems(
        Update,
        (record_frame, toggle_debug_overlay).in_set(FrameSet::Input),
    );
    app.add_systems(
        Update,
        (update_info_text, update_fps_text, update_debug_overlay).in_set(FrameSet::Present),
    );
}

fn text_bundle(font_size: f32, color: Color) -> (Text, TextFont, TextColor) {
    (
        Text::new(""),
        TextFont {
            font_size,
            ..default()
        },
        TextColor(color),
    )
}

fn spawn_hud(mut commands: Commands) {
    // Controls, mode and pose.
    commands.spawn((
        InfoText,
        text_bundle(16.0, Color::WHITE),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(10.0),
            left: Val::Px(10.0),
            padding: UiRect::all(Val::Px(8.0)),
            ..default()
        },
        BackgroundColor(PANEL_BG),
    ));

    commands.spawn((
        FpsText,
        text_bundle(18.0, Color::srgb(0.0, 0.89, 0.19)),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(10.0),
            right: Val::Px(10.0),
            ..default()
        },
    ));

    // Crosshair
    commands
        .spawn(Node {
            position_type: PositionType::Absolute,
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            ..default()
        })
        .with_children(|parent| {
            for (w, h) in [(20.0, 2.0), (2.0, 20.0)] {
                parent.spawn((
                    Node {
                        position_type: PositionType::Absolute,
                        width: Val::Px(w),
                        height: Val::Px(h),
                        ..default()
                    },
                    BackgroundColor(Color::WHITE),
                ));
            }
        });

    commands
        .spawn((
            DebugRoot,
            Node {
                position_type: PositionType::Absolute,
                bottom: Val::Px(10.0),
                left: Val::Px(10.0),
                padding: UiRect::all(Val::Px(8.0)),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(6.0),
                ..default()
            },
            BackgroundColor(PANEL_BG),
            Visibility::Hidden,
        ))
        .with_children(|parent| {
            parent.spawn((DebugText, text_bundle(14.0, Color::WHITE)));
            parent
                .spawn(Node {
                    width: Val::Px(BAR_WIDTH_PX * FRAME_HISTORY_LEN as f32),
                    height: Val::Px(GRAPH_HEIGHT_PX),
                    align_items: AlignItems::FlexEnd,
                    ..default()
                })
                .with_children(|graph| {
                    for i in 0..FRAME_HISTORY_LEN {
                        graph.spawn((
                            GraphBar(i),
                            Node {
                                width: Val::Px(BAR_WIDTH_PX),
                                height: Val::Px(0.0),
                                ..default()
                            },
                            BackgroundColor(Color::NONE),
                        ));
                    }
                });
        });
}

fn record_frame(time: Res<Time>, mut stats: ResMut<Stats>) {
    stats.record(time.delta_secs());
}

fn toggle_debug_overlay(
    actions: Res<ActionState<PlayerAction>>,
    mut overlay: ResMut<DebugOverlay>,
    mut root: Single<&mut Visibility, With<DebugRoot>>,
) {
    if actions.just_pressed(&PlayerAction::ToggleDebug) {
        overlay.visible = !overlay.visible;
        **root = if overlay.visible {
            Visibility::Visible
        } else {
            Visibility::Hidden
        };
    }
}

fn update_info_text(player: Res<LocalPlayer>, mut text: Single<&mut Text, With<InfoText>>) {
    if !player.is_changed() {
        return;
    }

    let mode = match player.mode {
        MovementMode::Walking => "WALKING",
        MovementMode::Noclip => "NOCLIP",
    };
    let vertical = match player.mode {
        MovementMode::Walking => "Space: Jump",
        MovementMode::Noclip => "Space/Shift: Up/Down",
    };
    let p = player.position;
    let v = player.velocity;

    text.0 = format!(
        "Mode: {mode}\n\
         WASD: Move   Ctrl: Sprint   {vertical}\n\
         V: Noclip   Tab: Cursor   Esc: Menu   F3: Debug   F11: Fullscreen\n\
         Pos: ({:.2}, {:.2}, {:.2})   Grounded: {}\n\
         Vel: ({:.2}, {:.2}, {:.2})",
        p.x,
        p.y,
        p.z,
        if player.grounded { "yes" } else { "no" },
        v.x,
        v.y,
        v.z,
    );
}

fn update_fps_text(
    stats: Res<Stats>,
    settings: Res<Settings>,
    mut fps: Single<(&mut Text, &mut Visibility), With<FpsText>>,
) {
    let (text, visibility) = &mut *fps;
    if !settings.show_fps {
        **visibility = Visibility::Hidden;
        return;
    }
    **visibility = Visibility::Visible;
    text.0 = format!("{:.0} FPS", stats.current_fps);
}

fn bar_color(ms: f32) -> Color {
    if ms > GRAPH_SCALE_MS {
        Color::srgb(0.9, 0.16, 0.22)
    } else if ms > FRAME_MS_60 {
        Color::srgb(0.99, 0.98, 0.0)
    } else {
        Color::srgb(0.0, 0.89, 0.19)
    }
}

fn debug_text(stats: &FrameStats, step: &StepReport, player: &Player, colliders: usize) -> String {
    format!(
        "Frame: {:.2} ms (avg {:.2}, min {:.2}, max {:.2})\n\
         FPS: {:.0} (avg {:.0}, min {:.0}, max {:.0})\n\
         Frames: {}   Time: {:.1}s\n\
         Yaw: {:.1}  Pitch: {:.1}\n\
         Colliders: {}   Collision checks: {}   Pushes: {}",
        stats.current_frame_ms,
        stats.avg_frame_ms,
        stats.min_frame_ms,
        stats.max_frame_ms,
        stats.current_fps,
        stats.avg_fps,
        stats.min_fps,
        stats.max_fps,
        stats.frame_count,
        stats.total_time,
        player.yaw,
        player.pitch(),
        colliders,
        stats.collision_checks,
        step.pushes,
    )
}

fn update_debug_overlay(
    overlay: Res<DebugOverlay>,
    stats: Res<Stats>,
    last_step: Res<LastStep>,
    player: Res<LocalPlayer>,
    obstacles: Res<Obstacles>,
    mut text: Single<&mut Text, With<DebugText>>,
    mut bars: Query<(&GraphBar, &mut Node, &mut BackgroundColor)>,
) {
    if !overlay.visible {
        return;
    }

    text.0 = debug_text(&stats, &last_step, &player, obstacles.len());

    let history: Vec<f32> = stats.history().collect();
    for (bar, mut node, mut color) in &mut bars {
        match history.get(bar.0) {
            Some(&ms) => {
                let h = (ms / GRAPH_SCALE_MS * GRAPH_HEIGHT_PX).min(GRAPH_HEIGHT_PX);
                node.height = Val::Px(h);
                color.0 = bar_color(ms);
            }
            None => {
                node.height = Val::Px(0.0);
                color.0 = Color::NONE;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_colour_thresholds() {
        assert_eq!(bar_color(10.0), Color::srgb(0.0, 0.89, 0.19));
        assert_eq!(bar_color(20.0), Color::srgb(0.99, 0.98, 0.0));
        assert_eq!(bar_color(50.0), Color::srgb(0.9, 0.16, 0.22));
    }

    #[test]
    fn debug_text_shows_orientation_and_colliders() {
        let mut stats = FrameStats::default();
        stats.record(0.016);
        stats.collision_checks = 37;
        let step = StepReport {
            collision_checks: 37,
            pushes: 2,
            landed: false,
        };
        let mut player = Player::spawn();
        player.set_pitch(-12.34);

        let text = debug_text(&stats, &step, &player, 37);
        assert!(text.contains("Yaw: -90.0  Pitch: -12.3"), "{text}");
        assert!(text.contains("Colliders: 37"), "{text}");
        assert!(text.contains("Pushes: 2"), "{text}");
    }
}
