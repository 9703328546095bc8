//! Orbit camera: drag to rotate, right-drag to pan, wheel to zoom, slow auto-rotation.

use std::f32::consts::{PI, TAU};

use bevy::input::mouse::{AccumulatedMouseMotion, AccumulatedMouseScroll, MouseScrollUnit};
use bevy::prelude::*;

const ROTATE_SENSITIVITY: f32 = 0.005;
const PAN_SENSITIVITY: f32 = 0.001;
const ZOOM_STEP: f32 = 0.1;
const PIXELS_PER_LINE: f32 = 100.0;
const PITCH_LIMIT: f32 = PI / 2.0 - 0.01;

/// Rotates around `target` at `radius`. Yaw is measured from +Z towards +X.
#[derive(Component, Clone, Debug)]
pub struct OrbitCamera {
    pub target: Vec3,
    pub radius: f32,
    pub yaw: f32,
    pub pitch: f32,
    pub min_radius: f32,
    pub max_radius: f32,
    pub enable_zoom: bool,
    pub enable_pan: bool,
    pub enable_rotate: bool,
    /// Auto-rotation speed; 2.0 is one revolution every 30 seconds.
    pub auto_rotate_speed: Option<f32>,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            target: Vec3::ZERO,
            radius: 10.0,
            yaw: 0.0,
            pitch: 0.0,
            min_radius: 0.5,
            max_radius: 100.0,
            enable_zoom: true,
            enable_pan: true,
            enable_rotate: true,
            auto_rotate_speed: Some(2.0),
        }
    }
}

impl OrbitCamera {
    /// Orbit that starts with the camera at `eye`, looking at `target`.
    pub fn from_eye(eye: Vec3, target: Vec3) -> Self {
        let offset = eye - target;
        let radius = offset.length().max(f32::EPSILON);
        Self {
            target,
            radius,
            yaw: offset.x.atan2(offset.z),
            pitch: (offset.y / radius).clamp(-1.0, 1.0).asin(),
            ..default()
        }
    }

    pub fn eye(&self) -> Vec3 {
        let x = self.radius * self.pitch.cos() * self.yaw.sin();
        let y = self.radius * self.pitch.sin();
        let z = self.radius * self.pitch.cos() * self.yaw.cos();
        self.target + Vec3::new(x, y, z)
    }

    pub fn rotate(&mut self, delta_yaw: f32, delta_pitch: f32) {
        self.yaw = (self.yaw + delta_yaw).rem_euclid(TAU);
        self.pitch = (self.pitch + delta_pitch).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// Positive `delta` moves away from the target.
    pub fn zoom(&mut self, delta: f32) {
        self.radius = (self.radius * (1.0 + delta * ZOOM_STEP)).clamp(self.min_radius, self.max_radius);
    }

    /// Moves the target in the view plane, scaled by the orbit radius.
    pub fn pan(&mut self, delta_x: f32, delta_y: f32) {
        let forward = (self.target - self.eye()).normalize_or_zero();
        let right = forward.cross(Vec3::Y).normalize_or_zero();
        let up = right.cross(forward).normalize_or_zero();
        let speed = self.radius * PAN_SENSITIVITY;
        self.target += (-right * delta_x + up * delta_y) * speed;
    }

    /// Yaw advanced by auto-rotation over `dt` seconds. Positive speeds turn the eye
    /// from +Z towards -X.
    pub fn auto_rotate(&mut self, dt: f32) {
        if let Some(speed) = self.auto_rotate_speed {
            self.rotate(-TAU / 60.0 * speed * dt, 0.0);
        }
    }

    pub fn transform(&self) -> Transform {
        Transform::from_translation(self.eye()).looking_at(self.target, Vec3::Y)
    }
}

/// Set while the pointer is over an overlay, so drags don't reach the camera.
#[derive(Resource, Default)]
pub struct OrbitInputBlocked(pub bool);

/// Systems that write `OrbitInputBlocked`. Camera input reads it after this set runs.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct OrbitInputGate;

pub fn orbit_camera_plugin(app: &mut App) {
    app.init_resource::<OrbitInputBlocked>().add_systems(
        Update,
        (
            orbit_input_system.after(OrbitInputGate),
            orbit_auto_rotate_system,
            apply_orbit_system,
        )
            .chain(),
    );
}

fn orbit_input_system(
    buttons: Res<ButtonInput<MouseButton>>,
    motion: Res<AccumulatedMouseMotion>,
    scroll: Res<AccumulatedMouseScroll>,
    blocked: Res<OrbitInputBlocked>,
    mut orbits: Query<&mut OrbitCamera>,
) {
    if blocked.0 {
        return;
    }

    let scroll_lines = match scroll.unit {
        MouseScrollUnit::Line => scroll.delta.y,
        MouseScrollUnit::Pixel => scroll.delta.y / PIXELS_PER_LINE,
    };

    for mut orbit in &mut orbits {
        if orbit.enable_rotate && buttons.pressed(MouseButton::Left) {
            orbit.rotate(
                -motion.delta.x * ROTATE_SENSITIVITY,
                motion.delta.y * ROTATE_SENSITIVITY,
            );
        }
        if orbit.enable_pan && buttons.pressed(MouseButton::Right) {
            orbit.pan(motion.delta.x, motion.delta.y);
        }
        if orbit.enable_zoom && scroll_lines != 0.0 {
            orbit.zoom(-scroll_lines);
        }
    }
}

fn orbit_auto_rotate_system(time: Res<Time>, mut orbits: Query<&mut OrbitCamera>) {
    let dt = time.delta_secs();
    for mut orbit in &mut orbits {
        orbit.auto_rotate(dt);
    }
}

fn apply_orbit_system(mut cameras: Query<(&OrbitCamera, &mut Transform), Changed<OrbitCamera>>) {
    for (orbit, mut transform) in &mut cameras {
        *transform = orbit.transform();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: Vec3, b: Vec3) {
        assert!(a.distance(b) < 1e-4, "{a} != {b}");
    }

    #[test]
    fn from_eye_reproduces_eye() {
        let eye = Vec3::new(10.047021, -0.127436, -11.137374);
        let orbit = OrbitCamera::from_eye(eye, Vec3::ZERO);
        assert_close(orbit.eye(), eye);
        assert!((orbit.radius - eye.length()).abs() < 1e-4);
    }

    #[test]
    fn zoom_is_clamped() {
        let mut orbit = OrbitCamera::default();
        for _ in 0..200 {
            orbit.zoom(-1.0);
        }
        assert_eq!(orbit.radius, orbit.min_radius);
        for _ in 0..200 {
            orbit.zoom(5.0);
        }
        assert_eq!(orbit.radius, orbit.max_radius);
    }

    #[test]
    fn pitch_stays_below_the_poles() {
        let mut orbit = OrbitCamera::default();
        orbit.rotate(0.0, 10.0);
        assert!(orbit.pitch < PI / 2.0);
        orbit.rotate(0.0, -20.0);
        assert!(orbit.pitch > -PI / 2.0);
    }

    #[test]
    fn auto_rotation_completes_a_turn_in_thirty_seconds() {
        let mut orbit = OrbitCamera::default();
        orbit.auto_rotate(7.5);
        assert!((orbit.yaw - 3.0 * PI / 2.0).abs() < 1e-4);

        orbit.auto_rotate_speed = None;
        orbit.auto_rotate(7.5);
        assert!((orbit.yaw - 3.0 * PI / 2.0).abs() < 1e-4);
    }

    #[test]
    fn auto_rotation_moves_eye_towards_negative_x() {
        let mut orbit = OrbitCamera::from_eye(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO);
        orbit.auto_rotate(1.0);
        let eye = orbit.eye();
        assert!((eye.x + 10.0 * (TAU / 30.0).sin()).abs() < 1e-3, "{eye}");
        assert!((eye.length() - 10.0).abs() < 1e-4);
    }

    #[test]
    fn gated_input_is_blocked_in_the_same_frame() {
        let mut app = App::new();
        app.init_resource::<Time>()
            .init_resource::<ButtonInput<MouseButton>>()
            .init_resource::<AccumulatedMouseMotion>()
            .init_resource::<AccumulatedMouseScroll>()
            .add_systems(
                Update,
                (|mut blocked: ResMut<OrbitInputBlocked>| blocked.0 = true).in_set(OrbitInputGate),
            );
        orbit_camera_plugin(&mut app);

        let orbit = OrbitCamera {
            auto_rotate_speed: None,
            ..default()
        };
        let camera = app.world_mut().spawn((orbit, Transform::default())).id();
        app.world_mut()
            .resource_mut::<ButtonInput<MouseButton>>()
            .press(MouseButton::Left);
        app.world_mut().resource_mut::<AccumulatedMouseMotion>().delta = Vec2::new(200.0, 0.0);

        app.update();

        let orbit = app.world().get::<OrbitCamera>(camera).unwrap();
        assert_eq!(orbit.yaw, 0.0);
    }

    #[test]
    fn pan_keeps_radius() {
        let mut orbit = OrbitCamera::from_eye(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO);
        orbit.pan(100.0, 50.0);
        assert!(orbit.target != Vec3::ZERO);
        assert!((orbit.eye().distance(orbit.target) - 10.0).abs() < 1e-4);
        assert_eq!(orbit.target.z, 0.0);
    }

    #[test]
    fn transform_looks_at_target() {
        let orbit = OrbitCamera::from_eye(Vec3::new(3.0, 4.0, 5.0), Vec3::new(0.0, 1.0, 0.0));
        let transform = orbit.transform();
        let towards = (orbit.target - transform.translation).normalize();
        assert_close(*transform.forward(), towards);
    }
}
