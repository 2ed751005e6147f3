use bevy::prelude::*;
use mavish_shared::Pose;

use crate::{FrameSet, math::to_bevy, player::LocalPlayer, settings::Settings};

/// First-person camera, placed at the player's eye every frame.
#[derive(Component)]
pub struct PlayerCamera;

const NEAR_PLANE: f32 = 0.05;
const FAR_PLANE: f32 = 500.0;

pub(super) fn plugin(app: &mut App) {
    app.add_systems(Startup, add_camera);
    app.add_systems(
        Update,
        (follow_player, sync_fov).in_set(FrameSet::Present),
    );
}

fn add_camera(mut commands: Commands, settings: Res<Settings>, player: Res<LocalPlayer>) {
    let pose = Pose::from_player(&player);
    commands.spawn((
        PlayerCamera,
        Camera3d::default(),
        bevy::core_pipeline::tonemapping::Tonemapping::AcesFitted,
        Projection::Perspective(PerspectiveProjection {
            fov: settings.fov_deg.to_radians(),
            near: NEAR_PLANE,
            far: FAR_PLANE,
            ..default()
        }),
        Transform::from_translation(to_bevy(&pose.eye)).looking_at(to_bevy(&pose.target), Vec3::Y),
    ));
}

fn follow_player(
    player: Res<LocalPlayer>,
    mut camera: Single<&mut Transform, With<PlayerCamera>>,
) {
    if !player.is_changed() {
        return;
    }

    let pose = Pose::from_player(&player);
    **camera = Transform::from_translation(to_bevy(&pose.eye))
        .looking_at(to_bevy(&pose.target), Vec3::Y);
}

fn sync_fov(settings: Res<Settings>, mut projection: Single<&mut Projection, With<PlayerCamera>>) {
    if !settings.is_changed() {
        return;
    }

    if let Projection::Perspective(perspective) = &mut **projection {
        let fov = settings.fov_deg.to_radians();
        if perspective.fov != fov {
            perspective.fov = fov;
        }
    }
}
