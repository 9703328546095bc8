//! Shared material and mesh helpers for the cube units.

use bevy::prelude::*;
use bevy::render::mesh::PrimitiveTopology;
use bevy::render::render_asset::RenderAssetUsages;

/// Translucent, highly reflective body of a cube.
pub fn cube_body_material(
    materials: &mut Assets<StandardMaterial>,
    color: Color,
) -> Handle<StandardMaterial> {
    let mut base = color.to_srgba();
    base.alpha = 0.9;
    materials.add(StandardMaterial {
        base_color: base.into(),
        perceptual_roughness: 0.1,
        metallic: 0.8,
        specular_transmission: 0.5,
        clearcoat: 1.0,
        alpha_mode: AlphaMode::Blend,
        ..default()
    })
}

pub fn cube_outline_material(
    materials: &mut Assets<StandardMaterial>,
    color: Color,
) -> Handle<StandardMaterial> {
    materials.add(StandardMaterial {
        base_color: color,
        unlit: true,
        ..default()
    })
}

/// The 12 edges of an axis-aligned cube of side `size`, centred on the origin.
pub fn cube_edges_mesh(size: f32) -> Mesh {
    let positions = cube_edge_segments(size);
    let normals = vec![[0.0, 1.0, 0.0]; positions.len()];
    Mesh::new(PrimitiveTopology::LineList, RenderAssetUsages::default())
        .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions)
        .with_inserted_attribute(Mesh::ATTRIBUTE_NORMAL, normals)
}

/// Line-list endpoints: each pair of corners that differ in exactly one axis.
fn cube_edge_segments(size: f32) -> Vec<[f32; 3]> {
    let h = size / 2.0;
    let corner = |i: u8| {
        [
            if i & 1 == 0 { -h } else { h },
            if i & 2 == 0 { -h } else { h },
            if i & 4 == 0 { -h } else { h },
        ]
    };

    let mut segments = Vec::with_capacity(24);
    for a in 0u8..8 {
        for bit in [1u8, 2, 4] {
            let b = a | bit;
            if b != a {
                segments.push(corner(a));
                segments.push(corner(b));
            }
        }
    }
    segments
}
