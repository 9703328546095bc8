//! Word rows: setup_scene, SceneSettings, and the marker components it spawns.

use std::f32::consts::PI;

use bevy::prelude::*;

use crate::camera::OrbitCamera;
use crate::glyph::{layout, letter_offsets, lookup};
use crate::render::UnitRendererResource;

/// A word drawn as one row of cube-letters.
#[derive(Clone, Debug)]
pub struct WordSpec {
    pub text: String,
    pub position: Vec3,
    pub rotation: Quat,
}

impl WordSpec {
    pub fn new(text: impl Into<String>, position: Vec3) -> Self {
        Self {
            text: text.into(),
            position,
            rotation: Quat::from_rotation_y(PI / 1.5),
        }
    }
}

#[derive(Clone, Debug)]
pub struct LightSettings {
    pub ambient_color: Color,
    pub ambient_brightness: f32,
    pub directional_color: Color,
    pub directional_illuminance: f32,
    pub directional_position: Vec3,
}

/// Everything `setup_scene` places.
#[derive(Resource, Clone, Debug)]
pub struct SceneSettings {
    pub words: Vec<WordSpec>,
    pub camera_eye: Vec3,
    pub camera_target: Vec3,
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
    pub orbit: OrbitCamera,
    pub lights: LightSettings,
}

impl Default for SceneSettings {
    fn default() -> Self {
        Self {
            words: vec![
                WordSpec::new("AYUSH", Vec3::new(-1.0, 1.5, 0.0)),
                WordSpec::new("DUBEY", Vec3::new(-1.0, -1.5, 0.0)),
            ],
            camera_eye: Vec3::new(10.047021, -0.127436, -11.137374),
            camera_target: Vec3::ZERO,
            fov_degrees: 50.0,
            orbit: OrbitCamera::default(),
            lights: LightSettings {
                ambient_color: Color::WHITE,
                ambient_brightness: 250.0,
                directional_color: Color::WHITE,
                directional_illuminance: 2_500.0,
                directional_position: Vec3::new(5.0, 5.0, 5.0),
            },
        }
    }
}

/// Root of one word; its transform carries the word's offset and rotation.
#[derive(Component, Debug)]
pub struct WordRow {
    pub index: usize,
    pub text: String,
}

/// Origin of one letter inside a word row.
#[derive(Component, Debug)]
pub struct GlyphLetter {
    pub letter: char,
    pub index: usize,
}

/// One cube of a letter, tagged with its grid cell.
#[derive(Component, Debug)]
pub struct LetterCube {
    pub letter: char,
    pub row: usize,
    pub col: usize,
}

/// Wireframe child of a `LetterCube`.
#[derive(Component)]
pub struct CubeOutline;

pub fn setup_scene(
    mut commands: Commands,
    settings: Res<SceneSettings>,
    renderer: Res<UnitRendererResource>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    // Placement from the configured eye, behaviour flags from `settings.orbit`.
    let start = OrbitCamera::from_eye(settings.camera_eye, settings.camera_target);
    let orbit = OrbitCamera {
        target: start.target,
        radius: start.radius,
        yaw: start.yaw,
        pitch: start.pitch,
        ..settings.orbit.clone()
    };
    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: settings.fov_degrees.to_radians(),
            ..default()
        }),
        orbit.transform(),
        orbit,
    ));

    let lights = &settings.lights;
    commands.insert_resource(AmbientLight {
        color: lights.ambient_color,
        brightness: lights.ambient_brightness,
    });
    commands.spawn((
        DirectionalLight {
            color: lights.directional_color,
            illuminance: lights.directional_illuminance,
            ..default()
        },
        Transform::from_translation(lights.directional_position).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    let assets = renderer.0.build_assets(&mut meshes, &mut materials);
    let mut cube_count = 0usize;
    for (index, word) in settings.words.iter().enumerate() {
        let letters: Vec<char> = word.text.chars().collect();
        commands
            .spawn((
                WordRow {
                    index,
                    text: word.text.clone(),
                },
                Transform::from_translation(word.position).with_rotation(word.rotation),
                Visibility::Visible,
            ))
            .with_children(|row| {
                for (letter_index, (&ch, x)) in
                    letters.iter().zip(letter_offsets(letters.len())).enumerate()
                {
                    row.spawn((
                        GlyphLetter {
                            letter: ch,
                            index: letter_index,
                        },
                        Transform::from_xyz(x, 0.0, 0.0),
                        Visibility::Visible,
                    ))
                    .with_children(|letter| {
                        for cube in layout(lookup(ch), Vec3::ZERO) {
                            renderer.0.spawn_unit(letter, &assets, &cube);
                            cube_count += 1;
                        }
                    });
                }
            });
    }
    info!(
        "scene ready: {} words, {cube_count} cubes",
        settings.words.len()
    );
}
