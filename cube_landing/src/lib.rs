//! Cube-letter landing page: a name spelled in translucent cubes under an orbiting camera.
//!
//! Library root: glyph table and layout, scene composition, and the SDK builder.

mod camera;
pub mod config;
pub mod device;
pub mod environment;
pub mod glyph;
pub mod render;
pub mod scene;
mod ui;

pub mod prelude;
pub mod sdk;

pub use camera::{orbit_camera_plugin, OrbitCamera, OrbitInputBlocked, OrbitInputGate};
pub use device::{DeviceClass, DeviceClassFlag, DeviceClassProbe, FixedProbe, UserAgentProbe};
pub use glyph::{layout, lookup, word_layout, PlacedCube};
pub use ui::{SceneReadiness, ShellContent, SocialLink};
