//! Minimal prelude for SDK consumers.

pub use crate::config::LandingConfig;
pub use crate::device::{DeviceClass, DeviceClassProbe, FixedProbe, UserAgentProbe};
pub use crate::glyph::{layout, lookup, word_layout, PlacedCube};
pub use crate::render::{EdgedCubeRenderer, UnitRenderer};
pub use crate::scene::{SceneSettings, WordSpec};
pub use crate::sdk::LandingPageBuilder;
