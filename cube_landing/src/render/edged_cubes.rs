use bevy::prelude::*;

use crate::glyph::PlacedCube;
use crate::render::{UnitAssets, UnitRenderer};
use crate::scene::{materials, CubeOutline, LetterCube};

#[derive(Clone, Debug)]
pub struct EdgedCubeSettings {
    pub size: f32,
    pub body_color: Color,
    pub edge_color: Color,
}

impl Default for EdgedCubeSettings {
    fn default() -> Self {
        Self {
            size: 0.5,
            // #0070f3
            body_color: Color::srgb_u8(0x00, 0x70, 0xf3),
            // #214dbd
            edge_color: Color::srgb_u8(0x21, 0x4d, 0xbd),
        }
    }
}

/// Translucent cube body with a wireframe outline of the same size.
#[derive(Default)]
pub struct EdgedCubeRenderer {
    pub settings: EdgedCubeSettings,
}

impl UnitRenderer for EdgedCubeRenderer {
    fn build_assets(
        &self,
        meshes: &mut Assets<Mesh>,
        materials_res: &mut Assets<StandardMaterial>,
    ) -> UnitAssets {
        let settings = &self.settings;
        UnitAssets {
            body_mesh: meshes.add(Cuboid::from_length(settings.size)),
            body_material: materials::cube_body_material(materials_res, settings.body_color),
            outline_mesh: meshes.add(materials::cube_edges_mesh(settings.size)),
            outline_material: materials::cube_outline_material(
                materials_res,
                settings.edge_color,
            ),
        }
    }

    fn spawn_unit(
        &self,
        parent: &mut ChildBuilder,
        assets: &UnitAssets,
        cube: &PlacedCube,
    ) -> Entity {
        parent
            .spawn((
                Mesh3d(assets.body_mesh.clone()),
                MeshMaterial3d(assets.body_material.clone()),
                Transform::from_translation(cube.position),
                Visibility::Visible,
                LetterCube {
                    letter: cube.letter,
                    row: cube.row,
                    col: cube.col,
                },
            ))
            .with_children(|outline| {
                outline.spawn((
                    Mesh3d(assets.outline_mesh.clone()),
                    MeshMaterial3d(assets.outline_material.clone()),
                    Transform::default(),
                    CubeOutline,
                ));
            })
            .id()
    }
}
