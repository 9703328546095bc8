//! Unit renderer trait and the default edged-cube implementation.

mod edged_cubes;

use bevy::prelude::*;

use crate::glyph::PlacedCube;

pub use edged_cubes::{EdgedCubeRenderer, EdgedCubeSettings};

/// Mesh and material handles shared by every unit in the scene.
#[derive(Clone, Debug)]
pub struct UnitAssets {
    pub body_mesh: Handle<Mesh>,
    pub body_material: Handle<StandardMaterial>,
    pub outline_mesh: Handle<Mesh>,
    pub outline_material: Handle<StandardMaterial>,
}

/// Turns one placed cube into visible entities.
pub trait UnitRenderer: Send + Sync + 'static {
    fn setup(&self, _app: &mut App) {}

    fn build_assets(
        &self,
        meshes: &mut Assets<Mesh>,
        materials: &mut Assets<StandardMaterial>,
    ) -> UnitAssets;

    fn spawn_unit(&self, parent: &mut ChildBuilder, assets: &UnitAssets, cube: &PlacedCube)
        -> Entity;
}

#[derive(Resource)]
pub struct UnitRendererResource(pub Box<dyn UnitRenderer>);

impl UnitRendererResource {
    pub fn new(renderer: impl UnitRenderer) -> Self {
        Self(Box::new(renderer))
    }
}

impl Default for UnitRendererResource {
    fn default() -> Self {
        Self::new(EdgedCubeRenderer::default())
    }
}
