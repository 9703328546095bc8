//! Equirectangular panorama → six-face cubemap, sampled on the CPU.

use std::f32::consts::PI;

use bevy::prelude::*;
use bevy::render::render_asset::RenderAssetUsages;
use bevy::render::render_resource::{
    Extent3d, TextureDimension, TextureFormat, TextureViewDescriptor, TextureViewDimension,
};
use image::RgbaImage;

const MIN_FACE_SIZE: u32 = 16;
const MAX_FACE_SIZE: u32 = 1024;

/// RGBA8 faces in +X, -X, +Y, -Y, +Z, -Z order, each `face_size` square.
#[derive(Debug)]
pub struct CubemapFaces {
    pub face_size: u32,
    pub data: Vec<u8>,
}

impl CubemapFaces {
    /// Cube-view image usable by `Skybox` and `EnvironmentMapLight`.
    pub fn into_image(self) -> Image {
        let mut image = Image::new(
            Extent3d {
                width: self.face_size,
                height: self.face_size,
                depth_or_array_layers: 6,
            },
            TextureDimension::D2,
            self.data,
            TextureFormat::Rgba8UnormSrgb,
            RenderAssetUsages::RENDER_WORLD,
        );
        image.texture_view_descriptor = Some(TextureViewDescriptor {
            dimension: Some(TextureViewDimension::Cube),
            ..default()
        });
        image
    }
}

/// A quarter of the panorama width, kept within sane texture bounds.
pub fn face_size_for(panorama_width: u32, max_face_size: u32) -> u32 {
    (panorama_width / 4).clamp(MIN_FACE_SIZE, max_face_size.clamp(MIN_FACE_SIZE, MAX_FACE_SIZE))
}

pub fn equirect_to_cubemap(panorama: &RgbaImage, face_size: u32) -> CubemapFaces {
    let size = face_size.max(1);
    let mut data = Vec::with_capacity((size * size * 6 * 4) as usize);
    for face in 0..6 {
        for y in 0..size {
            for x in 0..size {
                let u = 2.0 * (x as f32 + 0.5) / size as f32 - 1.0;
                let v = 2.0 * (y as f32 + 0.5) / size as f32 - 1.0;
                let (s, t) = direction_to_equirect_uv(face_direction(face, u, v));
                data.extend_from_slice(&sample_bilinear(panorama, s, t));
            }
        }
    }
    CubemapFaces {
        face_size: size,
        data,
    }
}

/// View direction through point (`u`, `v`) in [-1, 1] on cube face `face`.
pub fn face_direction(face: usize, u: f32, v: f32) -> Vec3 {
    let dir = match face {
        0 => Vec3::new(1.0, -v, -u),
        1 => Vec3::new(-1.0, -v, u),
        2 => Vec3::new(u, 1.0, v),
        3 => Vec3::new(u, -1.0, -v),
        4 => Vec3::new(u, -v, 1.0),
        _ => Vec3::new(-u, -v, -1.0),
    };
    dir.normalize()
}

/// Panorama coordinates in [0, 1]: `s` wraps around the horizon, `t` = 0 at straight up.
pub fn direction_to_equirect_uv(dir: Vec3) -> (f32, f32) {
    let dir = dir.normalize_or_zero();
    let s = 0.5 + dir.x.atan2(-dir.z) / (2.0 * PI);
    let t = dir.y.clamp(-1.0, 1.0).acos() / PI;
    (s, t)
}

fn sample_bilinear(panorama: &RgbaImage, s: f32, t: f32) -> [u8; 4] {
    let (width, height) = panorama.dimensions();
    if width == 0 || height == 0 {
        return [0, 0, 0, 255];
    }

    let fx = s * width as f32 - 0.5;
    let fy = (t * height as f32 - 0.5).clamp(0.0, (height - 1) as f32);
    let x0 = fx.floor();
    let y0 = fy.floor();
    let (wx, wy) = (fx - x0, fy - y0);

    let wrap_x = |x: f32| (x as i64).rem_euclid(width as i64) as u32;
    let clamp_y = |y: f32| (y as u32).min(height - 1);
    let (xa, xb) = (wrap_x(x0), wrap_x(x0 + 1.0));
    let (ya, yb) = (clamp_y(y0), clamp_y(y0 + 1.0));

    let p00 = panorama.get_pixel(xa, ya).0;
    let p10 = panorama.get_pixel(xb, ya).0;
    let p01 = panorama.get_pixel(xa, yb).0;
    let p11 = panorama.get_pixel(xb, yb).0;

    let mut out = [0u8; 4];
    for (c, slot) in out.iter_mut().enumerate() {
        let top = p00[c] as f32 * (1.0 - wx) + p10[c] as f32 * wx;
        let bottom = p01[c] as f32 * (1.0 - wx) + p11[c] as f32 * wx;
        *slot = (top * (1.0 - wy) + bottom * wy).round().clamp(0.0, 255.0) as u8;
    }
    out
}
