use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use bevy::math::primitives::Circle;
use log::info;

use crate::simulation::command::Command;
use crate::simulation::controller::SimulationController;
use crate::simulation::states::BodyColor;
use crate::simulation::trajectory::TrajectoryRecorder;

#[derive(Component)]
struct BodyIndex(pub usize);

/// Trail history owned by the viewer, cleared whenever the controller resets
#[derive(Resource)]
struct Trails {
    recorder: TrajectoryRecorder,
    generation: u64,
}

const SCALE: f32 = 100.0; // pixels per simulation unit
const RADIUS_PER_MASS: f32 = 5.0; // pixels per unit mass
const MIN_RADIUS: f32 = 2.0;
const TRAIL_BRIGHTEN: u8 = 100;
const NUDGE_STEP: f64 = 0.1;
const SCALE_FACTOR: f64 = 2.0;

pub fn run_2d(controller: SimulationController) {
    info!("run_2d: starting Bevy 2D viewer with {} bodies", controller.bodies().len());
    info!("controls: space = pause, up/down = nudge speed, ]/[ = double/halve speed, r = reset");

    let trails = Trails {
        recorder: controller.recorder(),
        generation: controller.generation(),
    };

    App::new()
        .insert_resource(controller)
        .insert_resource(trails)
        .insert_resource(ClearColor(Color::BLACK))
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Three-Body Problem Simulation".into(),
                resolution: (800.0, 600.0).into(),
                ..Default::default()
            }),
            ..Default::default()
        }))
        .add_systems(Startup, setup_bodies_system)
        .add_systems(
            Update,
            (
                input_system,
                physics_step_system,
                sync_transforms_system,
                follow_center_of_mass_system,
                draw_trails_system,
            )
                .chain(),
        )
        .run();
}

fn to_color(c: BodyColor) -> Color {
    Color::srgb_u8(c.0, c.1, c.2)
}

fn setup_bodies_system(mut commands: Commands, controller: Res<SimulationController>, mut meshes: ResMut<Assets<Mesh>>, mut materials: ResMut<Assets<ColorMaterial>>) {
    // 2D camera
    commands.spawn(Camera2dBundle::default());

    for (i, body) in controller.bodies().iter().enumerate() {
        // Mass-scaled size with a floor so light bodies stay visible
        let radius_screen = (body.m as f32 * RADIUS_PER_MASS).max(MIN_RADIUS);
        let x = body.x.x as f32 * SCALE;
        let y = body.x.y as f32 * SCALE;

        commands.spawn((
            MaterialMesh2dBundle {
                mesh: Mesh2dHandle(meshes.add(Circle::new(radius_screen))),
                material: materials.add(ColorMaterial::from(to_color(body.color))),
                transform: Transform::from_xyz(x, y, 1.0),
                ..Default::default()
            },
            BodyIndex(i),
        ));
    }
}

fn input_system(keys: Res<ButtonInput<KeyCode>>, mut controller: ResMut<SimulationController>) {
    let bindings = [
        (KeyCode::Space, Command::TogglePause),
        (KeyCode::ArrowUp, Command::NudgeSpeed(NUDGE_STEP)),
        (KeyCode::ArrowDown, Command::NudgeSpeed(-NUDGE_STEP)),
        (KeyCode::BracketRight, Command::ScaleSpeed(SCALE_FACTOR)),
        (KeyCode::BracketLeft, Command::ScaleSpeed(1.0 / SCALE_FACTOR)),
        (KeyCode::KeyR, Command::Reset),
    ];

    for (key, command) in bindings {
        if keys.just_pressed(key) {
            controller.dispatch(command);
        }
    }
}

fn physics_step_system(mut controller: ResMut<SimulationController>, mut trails: ResMut<Trails>) {
    if trails.generation != controller.generation() {
        trails.recorder.clear();
        trails.generation = controller.generation();
    }

    if controller.step() {
        trails.recorder.record(controller.bodies());
    }
}

fn sync_transforms_system(controller: Res<SimulationController>, mut query: Query<(&BodyIndex, &mut Transform)>) {
    for (BodyIndex(i), mut transform) in &mut query {
        if let Some(b) = controller.bodies().get(*i) {
            transform.translation.x = (b.x.x as f32) * SCALE;
            transform.translation.y = (b.x.y as f32) * SCALE;
        }
    }
}

/// Keep the system centered on screen as it drifts
fn follow_center_of_mass_system(controller: Res<SimulationController>, mut cameras: Query<&mut Transform, With<Camera2d>>) {
    let com = controller.center_of_mass();
    for mut transform in &mut cameras {
        transform.translation.x = com.x as f32 * SCALE;
        transform.translation.y = com.y as f32 * SCALE;
    }
}

/// Brightened trail per body, fading out toward the oldest point
fn draw_trails_system(controller: Res<SimulationController>, trails: Res<Trails>, mut gizmos: Gizmos) {
    for (i, trail) in trails.recorder.trails().iter().enumerate() {
        let Some(body) = controller.bodies().get(i) else {
            continue;
        };
        let c = body.color.brightened(TRAIL_BRIGHTEN);
        let len = trail.len();

        for (j, (a, b)) in trail.iter().zip(trail.iter().skip(1)).enumerate() {
            let alpha = (255.0 * (j + 1) as f32 / len as f32) as u8;
            gizmos.line_2d(
                Vec2::new(a.x as f32, a.y as f32) * SCALE,
                Vec2::new(b.x as f32, b.y as f32) * SCALE,
                Color::srgba_u8(c.0, c.1, c.2, alpha),
            );
        }
    }
}
