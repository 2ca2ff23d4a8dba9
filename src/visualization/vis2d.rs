//! Bevy 2D viewer for the orbital simulation.
//!
//! Startup spawns the camera, the one-time starfield, one circle mesh plus
//! name label per body, and the elapsed-time readout. Every frame the
//! physics step runs, the readout and body transforms are refreshed, and one
//! trail segment per orbiter is spawned from its previous position to its
//! current one. Trail segments are never despawned, so the accumulated
//! entities form the persistent orbit paths.

use bevy::math::primitives::Circle;
use bevy::prelude::*;
use bevy::sprite::{Anchor, MaterialMesh2dBundle, Mesh2dHandle};
use bevy::window::PrimaryWindow;

use rand::Rng;

use crate::simulation::scenario::Scenario;
use crate::simulation::states::BodyRole;

/// Component tagging each circle with its body index into Scenario.system.bodies
#[derive(Component)]
struct BodyIndex(pub usize);

/// Component tagging each name label with its body index
#[derive(Component)]
struct BodyLabel(pub usize);

/// Marker for the elapsed-time UI text
#[derive(Component)]
struct TimeReadout;

/// Simulation-space -> screen-space scale factor, computed once at startup
/// from the window size and the outermost orbit.
#[derive(Resource)]
struct ViewScale(pub f32);

// z-layers: stars behind trails behind bodies behind labels
const STAR_Z: f32 = 0.0;
const TRAIL_Z: f32 = 0.5;
const BODY_Z: f32 = 1.0;
const LABEL_Z: f32 = 2.0;

/// Label offset from the circle edge, in simulation units
const LABEL_OFFSET: f64 = 5.0;

pub fn run_2d(scenario: Scenario) {
    println!("run_2d: starting Bevy 2D viewer with {} bodies", scenario.system.bodies.len());

    App::new()
        .insert_resource(scenario)
        .add_plugins(DefaultPlugins)
        .add_systems(Startup, setup_system)
        .add_systems(
            Update,
            (
                physics_step_system,
                time_readout_system,
                sync_transforms_system,
                spawn_trail_segments_system,
            )
                .chain(),
        )
        .run();
}

/// Scale factor fitting the whole system within the smaller window
/// dimension with a 5% margin.
pub fn view_scale(width: f32, height: f32, max_extent: f32) -> f32 {
    width.min(height) / (2.0 * max_extent * 1.05)
}

/// Elapsed-time readout string: simulated time converted to Earth years,
/// two decimal places.
pub fn format_time_readout(t: f64, year_length: f64) -> String {
    format!("Time: {:.2} Earth Years", t / year_length)
}

/// Startup system: camera, starfield, one circle + label per body, readout
fn setup_system(
    mut commands: Commands,
    windows: Query<&Window, With<PrimaryWindow>>,
    scenario: Res<Scenario>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    let window = windows.single();
    let (width, height) = (window.resolution.width(), window.resolution.height());

    let scale = view_scale(width, height, scenario.system.max_extent() as f32);
    commands.insert_resource(ViewScale(scale));

    // 2D camera over black space
    commands.spawn(Camera2dBundle {
        camera: Camera {
            clear_color: ClearColorConfig::Custom(Color::BLACK),
            ..Default::default()
        },
        ..Default::default()
    });

    // One-time starfield: random white dots in window coordinates, drawn
    // behind everything and never touched again
    let mut rng = rand::thread_rng();
    for _ in 0..scenario.star_count {
        let x = rng.gen_range(-width / 2.0..width / 2.0);
        let y = rng.gen_range(-height / 2.0..height / 2.0);
        let radius = rng.gen::<f32>() * 1.5;
        let opacity = rng.gen::<f32>();

        commands.spawn(SpriteBundle {
            sprite: Sprite {
                color: Color::srgba(1.0, 1.0, 1.0, opacity),
                custom_size: Some(Vec2::splat(radius * 2.0)),
                ..Default::default()
            },
            transform: Transform::from_xyz(x, y, STAR_Z),
            ..Default::default()
        });
    }

    // One filled circle and one name label per body
    for (i, body) in scenario.system.bodies.iter().enumerate() {
        let radius_screen = body.radius as f32 * scale;
        let x = body.x.x as f32 * scale;
        let y = body.x.y as f32 * scale;
        let [r, g, b] = body.color;

        commands.spawn((
            MaterialMesh2dBundle {
                mesh: Mesh2dHandle(meshes.add(Circle::new(radius_screen))),
                material: materials.add(ColorMaterial::from(Color::srgb(r, g, b))),
                transform: Transform::from_xyz(x, y, BODY_Z),
                ..Default::default()
            },
            BodyIndex(i),
        ));

        commands.spawn((
            Text2dBundle {
                text: Text::from_section(
                    body.name.clone(),
                    TextStyle {
                        font_size: 12.0,
                        color: Color::WHITE,
                        ..Default::default()
                    },
                ),
                text_anchor: Anchor::CenterLeft,
                transform: Transform::from_xyz(
                    (body.x.x + body.radius + LABEL_OFFSET) as f32 * scale,
                    y,
                    LABEL_Z,
                ),
                ..Default::default()
            },
            BodyLabel(i),
        ));
    }

    // Elapsed-time readout, top-left corner
    commands.spawn((
        TextBundle::from_section(
            format_time_readout(scenario.system.t, scenario.parameters.year_length),
            TextStyle {
                font_size: 24.0,
                color: Color::WHITE,
                ..Default::default()
            },
        )
        .with_style(Style {
            position_type: PositionType::Absolute,
            top: Val::Px(10.0),
            left: Val::Px(10.0),
            ..Default::default()
        }),
        TimeReadout,
    ));
}

/// Per-frame physics integration
fn physics_step_system(mut scenario: ResMut<Scenario>) {
    scenario.step();
}

/// Refresh the elapsed-time readout from the simulation clock
fn time_readout_system(scenario: Res<Scenario>, mut query: Query<&mut Text, With<TimeReadout>>) {
    for mut text in &mut query {
        text.sections[0].value =
            format_time_readout(scenario.system.t, scenario.parameters.year_length);
    }
}

/// Move circles and labels to the bodies' current positions
fn sync_transforms_system(
    scenario: Res<Scenario>,
    scale: Res<ViewScale>,
    mut circles: Query<(&BodyIndex, &mut Transform)>,
    mut labels: Query<(&BodyLabel, &mut Transform), Without<BodyIndex>>,
) {
    let scale = scale.0;

    for (BodyIndex(i), mut transform) in &mut circles {
        if let Some(b) = scenario.system.bodies.get(*i) {
            transform.translation.x = b.x.x as f32 * scale;
            transform.translation.y = b.x.y as f32 * scale;
        }
    }

    for (BodyLabel(i), mut transform) in &mut labels {
        if let Some(b) = scenario.system.bodies.get(*i) {
            transform.translation.x = (b.x.x + b.radius + LABEL_OFFSET) as f32 * scale;
            transform.translation.y = b.x.y as f32 * scale;
        }
    }
}

/// Spawn one trail segment per orbiter from its previous position to its
/// current one. Segments are 1 px wide sprites in the body color and are
/// never despawned, so frame by frame they accumulate into the orbit paths.
fn spawn_trail_segments_system(
    mut commands: Commands,
    scenario: Res<Scenario>,
    scale: Res<ViewScale>,
) {
    let scale = scale.0;

    for body in &scenario.system.bodies {
        if body.role != BodyRole::Orbiter {
            continue;
        }

        let from = Vec2::new(body.prev_x.x as f32, body.prev_x.y as f32) * scale;
        let to = Vec2::new(body.x.x as f32, body.x.y as f32) * scale;
        let segment = to - from;
        let length = segment.length();
        if length <= f32::EPSILON {
            continue;
        }

        let midpoint = (from + to) / 2.0;
        let [r, g, b] = body.color;

        commands.spawn(SpriteBundle {
            sprite: Sprite {
                color: Color::srgb(r, g, b),
                custom_size: Some(Vec2::new(length, 1.0)),
                ..Default::default()
            },
            transform: Transform::from_xyz(midpoint.x, midpoint.y, TRAIL_Z)
                .with_rotation(Quat::from_rotation_z(segment.y.atan2(segment.x))),
            ..Default::default()
        });
    }
}
