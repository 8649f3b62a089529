//! Bevy viewer: fixed-length glyphs coloured by |E| and a translucent reference cylinder.
//!
//! Arrow keys orbit the camera around the z-axis, `+`/`-` zoom.

use std::f32::consts::FRAC_PI_2;

use bevy::log::LogPlugin;
use bevy::prelude::*;
use tracing::info;

use crate::colormap::{bin_index, normalize, viridis};
use crate::config::DisplaySettings;
use crate::geometry::GeometryParameters;
use crate::math::R3;
use crate::simulation::FieldSolution;

/// Number of distinct glyph materials; magnitudes are quantized into this many colours.
const COLOR_BINS: usize = 64;
const ORBIT_SPEED: f32 = 1.2;
const ZOOM_SPEED: f32 = 1.5;

/// A field solution ready to be drawn.
#[derive(Debug, Clone)]
pub struct FieldPlot {
    solution: FieldSolution,
    geometry: GeometryParameters,
    display: DisplaySettings,
}

impl FieldPlot {
    /// Creates a plot of `solution` using the reference cylinder from `geometry`.
    #[must_use]
    pub fn new(solution: FieldSolution, geometry: GeometryParameters, display: DisplaySettings) -> Self {
        Self { solution, geometry, display }
    }

    /// Opens the viewer window and blocks until it is closed.
    pub fn render(self) {
        let title = self.display.window_title.clone();
        info!(glyphs = self.solution.len(), "opening viewer");
        App::new()
            .insert_resource(PlotScene::from(self))
            .insert_resource(ClearColor(Color::rgb(0.08, 0.08, 0.1)))
            .add_plugins(
                DefaultPlugins
                    .set(WindowPlugin {
                        primary_window: Some(Window {
                            title,
                            resolution: (1200.0, 800.0).into(),
                            present_mode: bevy::window::PresentMode::AutoVsync,
                            ..default()
                        }),
                        ..default()
                    })
                    .disable::<LogPlugin>(),
            )
            .add_systems(Startup, (spawn_camera, spawn_glyphs, spawn_reference_cylinder, spawn_legend))
            .add_systems(Update, (orbit_camera, draw_axes))
            .run();
    }
}

#[derive(Resource)]
struct PlotScene {
    solution: FieldSolution,
    geometry: GeometryParameters,
    display: DisplaySettings,
    range: (f64, f64),
}

impl From<FieldPlot> for PlotScene {
    fn from(plot: FieldPlot) -> Self {
        let range = plot.solution.magnitude_range();
        Self {
            solution: plot.solution,
            geometry: plot.geometry,
            display: plot.display,
            range,
        }
    }
}

impl PlotScene {
    /// Distance from the origin that frames the whole sampled region.
    fn view_distance(&self) -> f32 {
        (2.5 * self.geometry.sampling_radius.max(0.5 * self.geometry.length)) as f32
    }
}

#[derive(Component)]
struct OrbitCamera {
    azimuth: f32,
    elevation: f32,
    distance: f32,
}

impl OrbitCamera {
    fn transform(&self) -> Transform {
        let (sin_a, cos_a) = self.azimuth.sin_cos();
        let (sin_e, cos_e) = self.elevation.sin_cos();
        let eye = Vec3::new(cos_e * cos_a, cos_e * sin_a, sin_e) * self.distance;
        Transform::from_translation(eye).looking_at(Vec3::ZERO, Vec3::Z)
    }
}

fn to_vec3(v: &R3) -> Vec3 {
    Vec3::new(v.x as f32, v.y as f32, v.z as f32)
}

fn spawn_camera(mut commands: Commands, scene: Res<PlotScene>) {
    let orbit = OrbitCamera { azimuth: -FRAC_PI_2 / 2.0, elevation: 0.5, distance: scene.view_distance() };
    commands.spawn((
        Camera3dBundle {
            transform: orbit.transform(),
            projection: PerspectiveProjection { near: 1.0e-4, ..default() }.into(),
            ..default()
        },
        orbit,
    ));
}

fn spawn_glyphs(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    scene: Res<PlotScene>,
) {
    let length = scene.display.glyph_length as f32;
    let shaft = meshes.add(Cylinder::new(0.06 * length, length));
    let tip = meshes.add(Sphere::new(0.15 * length));

    let palette: Vec<Handle<StandardMaterial>> = (0..COLOR_BINS)
        .map(|bin| {
            let [r, g, b] = viridis((bin as f64 + 0.5) / COLOR_BINS as f64);
            materials.add(StandardMaterial { base_color: Color::rgb(r, g, b), unlit: true, ..default() })
        })
        .collect();

    let (lo, hi) = scene.range;
    for sample in scene.solution.samples() {
        let position = to_vec3(&sample.position);
        let direction = to_vec3(&sample.direction).normalize_or_zero();
        let rotation = if direction == Vec3::ZERO {
            Quat::IDENTITY
        } else {
            Quat::from_rotation_arc(Vec3::Y, direction)
        };
        let material = palette[bin_index(normalize(sample.magnitude, lo, hi), COLOR_BINS)].clone();

        // The shaft mesh is centred on its origin, so shift it half a glyph along the field.
        commands.spawn(PbrBundle {
            mesh: shaft.clone(),
            material: material.clone(),
            transform: Transform::from_translation(position + 0.5 * length * direction).with_rotation(rotation),
            ..default()
        });
        commands.spawn(PbrBundle {
            mesh: tip.clone(),
            material,
            transform: Transform::from_translation(position + length * direction),
            ..default()
        });
    }
}

fn spawn_reference_cylinder(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    scene: Res<PlotScene>,
) {
    let opacity = scene.display.cylinder_opacity as f32;
    if opacity <= 0.0 {
        return;
    }
    let cylinder = Cylinder::new(scene.geometry.sampling_radius as f32, scene.geometry.length as f32);
    commands.spawn(PbrBundle {
        mesh: meshes.add(cylinder),
        material: materials.add(StandardMaterial {
            base_color: Color::rgba(1.0, 1.0, 1.0, opacity),
            alpha_mode: AlphaMode::Blend,
            unlit: true,
            double_sided: true,
            cull_mode: None,
            ..default()
        }),
        // Bevy cylinders run along +Y; the capacitor axis is +Z.
        transform: Transform::from_rotation(Quat::from_rotation_x(FRAC_PI_2)),
        ..default()
    });
}

fn spawn_legend(mut commands: Commands, scene: Res<PlotScene>) {
    let (lo, hi) = scene.range;
    let text = format!(
        "|E| [V/m]\nmin {lo:.3e}   max {hi:.3e}\n{} samples, viridis\narrows: orbit   +/-: zoom",
        scene.solution.len()
    );
    commands.spawn(
        TextBundle::from_section(text, TextStyle { font_size: 20.0, color: Color::WHITE, ..default() })
            .with_style(Style {
                position_type: PositionType::Absolute,
                top: Val::Px(12.0),
                left: Val::Px(12.0),
                ..default()
            }),
    );
}

fn orbit_camera(
    keys: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
    mut query: Query<(&mut OrbitCamera, &mut Transform)>,
) {
    let dt = time.delta_seconds();
    for (mut orbit, mut transform) in &mut query {
        let mut changed = false;
        if keys.pressed(KeyCode::ArrowLeft) {
            orbit.azimuth -= ORBIT_SPEED * dt;
            changed = true;
        }
        if keys.pressed(KeyCode::ArrowRight) {
            orbit.azimuth += ORBIT_SPEED * dt;
            changed = true;
        }
        if keys.pressed(KeyCode::ArrowUp) {
            orbit.elevation = (orbit.elevation + ORBIT_SPEED * dt).min(1.5);
            changed = true;
        }
        if keys.pressed(KeyCode::ArrowDown) {
            orbit.elevation = (orbit.elevation - ORBIT_SPEED * dt).max(-1.5);
            changed = true;
        }
        if keys.pressed(KeyCode::Equal) || keys.pressed(KeyCode::NumpadAdd) {
            orbit.distance /= 1.0 + ZOOM_SPEED * dt;
            changed = true;
        }
        if keys.pressed(KeyCode::Minus) || keys.pressed(KeyCode::NumpadSubtract) {
            orbit.distance *= 1.0 + ZOOM_SPEED * dt;
            changed = true;
        }
        if changed {
            *transform = orbit.transform();
        }
    }
}

fn draw_axes(mut gizmos: Gizmos, scene: Res<PlotScene>) {
    if !scene.display.show_axes {
        return;
    }
    let len = 1.2 * scene.geometry.sampling_radius as f32;
    gizmos.line(Vec3::ZERO, Vec3::X * len, Color::RED);
    gizmos.line(Vec3::ZERO, Vec3::Y * len, Color::GREEN);
    gizmos.line(Vec3::ZERO, Vec3::Z * (0.6 * scene.geometry.length as f32), Color::BLUE);
}
