use bevy::prelude::*;
use mavish_shared::{Obstacle, ObstacleKind, demo_obstacles};

use crate::{FrameSet, math::to_bevy};

/// Static obstacles, in resolver order. Immutable after startup.
#[derive(Resource, Deref)]
pub struct Obstacles(pub Vec<Obstacle>);

impl Obstacles {
    /// Keep only well-formed boxes; anything else is logged and dropped.
    fn validated(obstacles: Vec<Obstacle>) -> Self {
        let valid = obstacles
            .into_iter()
            .enumerate()
            .filter_map(|(idx, o)| match o.validate() {
                Ok(()) => Some(o),
                Err(err) => {
                    warn!("Skipping obstacle {idx}: {err}");
                    None
                }
            })
            .collect();
        Self(valid)
    }
}

const GROUND_SIZE: f32 = 50.0;

pub(super) fn plugin(app: &mut App) {
    app.insert_resource(ClearColor(Color::srgb_u8(80, 80, 80)));
    app.insert_resource(Obstacles::validated(demo_obstacles()));
    app.add_systems(Startup, setup);
    app.add_systems(Update, draw_world_gizmos.in_set(FrameSet::Present));
}

fn fill_color(kind: ObstacleKind) -> Color {
    match kind {
        ObstacleKind::Cube => Color::srgb_u8(230, 41, 55),
        ObstacleKind::Pillar => Color::srgb_u8(0, 121, 241),
    }
}

fn wire_color(kind: ObstacleKind) -> Color {
    match kind {
        ObstacleKind::Cube => Color::srgb_u8(190, 33, 55),
        ObstacleKind::Pillar => Color::srgb_u8(0, 82, 172),
    }
}

fn setup(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    obstacles: Res<Obstacles>,
) {
    info!("World setup: {} obstacles", obstacles.len());

    commands.spawn((
        // Ground
        Transform::from_xyz(0., 0., 0.),
        Mesh3d(meshes.add(Plane3d::default().mesh().size(GROUND_SIZE, GROUND_SIZE).build())),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb_u8(0, 117, 44),
            perceptual_roughness: 1.0,
            metallic: 0.0,
            ..default()
        })),
    ));

    for obstacle in obstacles.iter() {
        commands.spawn((
            Mesh3d(meshes.add(Cuboid::new(
                obstacle.size.x,
                obstacle.size.y,
                obstacle.size.z,
            ))),
            MeshMaterial3d(materials.add(fill_color(obstacle.kind))),
            Transform::from_translation(to_bevy(&obstacle.center)),
        ));
    }

    // light
    commands.spawn((
        DirectionalLight {
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(8.0, 16.0, 6.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

/// Box edges as 12 line segments.
fn draw_box_edges(gizmos: &mut Gizmos, obstacle: &Obstacle, color: Color) {
    let b = obstacle.bounds();
    let (lo, hi) = (b.mins, b.maxs);
    let corner = |x: bool, y: bool, z: bool| {
        Vec3::new(
            if x { hi.x } else { lo.x },
            if y { hi.y } else { lo.y },
            if z { hi.z } else { lo.z },
        )
    };

    for a in [false, true] {
        for c in [false, true] {
            gizmos.line(corner(false, a, c), corner(true, a, c), color);
            gizmos.line(corner(a, false, c), corner(a, true, c), color);
            gizmos.line(corner(a, c, false), corner(a, c, true), color);
        }
    }
}

fn draw_world_gizmos(mut gizmos: Gizmos, obstacles: Res<Obstacles>) {
    // Ground grid, 1m cells.
    let half = GROUND_SIZE / 2.0;
    let grid = Color::srgba(0.5, 0.5, 0.5, 0.6);
    for i in 0..=(GROUND_SIZE as i32) {
        let t = i as f32 - half;
        gizmos.line(Vec3::new(t, 0.01, -half), Vec3::new(t, 0.01, half), grid);
        gizmos.line(Vec3::new(-half, 0.01, t), Vec3::new(half, 0.01, t), grid);
    }

    for obstacle in obstacles.iter() {
        draw_box_edges(&mut gizmos, obstacle, wire_color(obstacle.kind));
    }

    // World axes.
    gizmos.line(Vec3::ZERO, Vec3::X * 5.0, Color::srgb(1.0, 0.0, 0.0));
    gizmos.line(Vec3::ZERO, Vec3::Y * 5.0, Color::srgb(0.0, 1.0, 0.0));
    gizmos.line(Vec3::ZERO, Vec3::Z * 5.0, Color::srgb(0.0, 0.0, 1.0));
}
