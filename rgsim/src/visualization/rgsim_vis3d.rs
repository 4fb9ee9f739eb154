use bevy::prelude::*;

use crate::simulation::engine::Simulator;
use crate::simulation::scenario::{reset_to_default, Spawner};
use crate::simulation::states::{BodyKind, NVec3};

/// Distance of the camera from the origin along +Y and +Z
const CAMERA_DISTANCE: f32 = 100.0;

/// Viewer-only state: grid toggle and the random spawner
#[derive(Resource)]
struct ViewerState {
    show_grid: bool,
    spawner: Spawner,
}

/// Open a bevy window and drive `sim` once per frame
pub fn run_3d(sim: Simulator) {
    println!("run_3d: starting viewer with {} bodies, {} photons", sim.bodies().len(), sim.photons().len());

    let seed = sim.parameters().seed;
    App::new()
        .insert_resource(sim)
        .insert_resource(ViewerState {
            show_grid: true,
            spawner: Spawner::new(seed),
        })
        .add_plugins(DefaultPlugins)
        .add_systems(Startup, setup_3d)
        .add_systems(Update, (handle_keys, physics_step_3d, draw_bodies, draw_photons, draw_grid).chain())
        .run();
}

/// Startup system: camera above and behind the origin, plus one light
fn setup_3d(mut commands: Commands) {
    commands.spawn(Camera3dBundle {
        camera: Camera {
            clear_color: ClearColorConfig::Custom(Color::srgb(0.0, 0.0, 0.0)),
            ..Default::default()
        },
        transform: Transform::from_xyz(0.0, CAMERA_DISTANCE, CAMERA_DISTANCE)
            .looking_at(Vec3::ZERO, Vec3::Y),
        ..Default::default()
    });

    commands.spawn(DirectionalLightBundle {
        transform: Transform::from_xyz(1.0, 1.0, 1.0).looking_at(Vec3::ZERO, Vec3::Y),
        ..Default::default()
    });
}

/// Per-frame tick with the wall-clock frame time
fn physics_step_3d(mut sim: ResMut<Simulator>, time: Res<Time>) {
    sim.step(time.delta_seconds_f64());
}

/// R reset, C clear photons, P add photon, N add planet, G toggle grid
fn handle_keys(
    keys: Res<ButtonInput<KeyCode>>,
    mut sim: ResMut<Simulator>,
    mut viewer: ResMut<ViewerState>,
) {
    let result = if keys.just_pressed(KeyCode::KeyR) {
        reset_to_default(&mut sim).map(|_| ())
    } else if keys.just_pressed(KeyCode::KeyC) {
        sim.clear_photons();
        Ok(())
    } else if keys.just_pressed(KeyCode::KeyP) {
        viewer.spawner.spawn_edge_photon(&mut sim).map(|_| ())
    } else if keys.just_pressed(KeyCode::KeyN) {
        viewer.spawner.spawn_orbiting_body(&mut sim, 1.0, 0.5, BodyKind::Planet).map(|_| ())
    } else {
        if keys.just_pressed(KeyCode::KeyG) {
            viewer.show_grid = !viewer.show_grid;
        }
        Ok(())
    };

    if let Err(e) = result {
        warn!("input ignored: {e}");
    }
}

fn to_vec3(x: &NVec3) -> Vec3 {
    Vec3::new(x.x as f32, x.y as f32, x.z as f32)
}

fn body_color(kind: BodyKind) -> Color {
    match kind {
        BodyKind::Star => Color::srgb(1.0, 1.0, 0.0),
        BodyKind::Planet => Color::srgb(0.27, 0.53, 1.0),
        BodyKind::BlackHole => Color::srgb(0.4, 0.0, 1.0),
        BodyKind::Particle => Color::srgb(1.0, 1.0, 0.0),
    }
}

fn draw_bodies(sim: Res<Simulator>, mut gizmos: Gizmos) {
    for b in sim.bodies() {
        let centre = to_vec3(&b.x);
        gizmos.sphere(centre, Quat::IDENTITY, b.radius as f32, body_color(b.kind));

        // accretion ring for black holes
        if b.kind == BodyKind::BlackHole {
            gizmos.circle(centre, Dir3::Y, (b.radius * 2.0) as f32, Color::srgb(1.0, 0.4, 0.0));
        }
    }
}

fn draw_photons(sim: Res<Simulator>, mut gizmos: Gizmos) {
    for p in sim.photons() {
        gizmos.sphere(to_vec3(&p.x), Quat::IDENTITY, 0.05, Color::WHITE);
        gizmos.linestrip(p.trail.iter().map(to_vec3), Color::WHITE);
    }
}

/// Wireframe of the curvature field, split wherever a hole is hit
fn draw_grid(sim: Res<Simulator>, viewer: Res<ViewerState>, mut gizmos: Gizmos) {
    if !viewer.show_grid {
        return;
    }

    let field = sim.field();
    let n = field.samples_per_axis();
    let color = Color::srgb(0.4, 0.4, 0.4);
    // anything this deep is a hole sample; leave a gap there
    let cutoff = field.parameters().hole_depth + 1.0;

    let point = |row: usize, col: usize| -> Option<Vec3> {
        let h = field.height(row, col)?;
        if h < cutoff {
            return None;
        }
        let (x, z) = field.sample_xz(row, col)?;
        Some(Vec3::new(x as f32, h as f32, z as f32))
    };

    for i in 0..n {
        for j in 1..n {
            if let (Some(a), Some(b)) = (point(i, j - 1), point(i, j)) {
                gizmos.line(a, b, color);
            }
            if let (Some(a), Some(b)) = (point(j - 1, i), point(j, i)) {
                gizmos.line(a, b, color);
            }
        }
    }
}
