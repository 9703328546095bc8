//! Environment backdrop: picks a panorama by device class, loads it off-thread,
//! and applies it to the camera as skybox and image-based lighting.

mod cubemap;
mod fetch;

use bevy::core_pipeline::Skybox;
use bevy::prelude::*;
use crossbeam_channel::{Receiver, TryRecvError};
use url::Url;

use crate::device::{DeviceClass, DeviceClassFlag};
use crate::ui::SceneReadiness;

pub use cubemap::{direction_to_equirect_uv, equirect_to_cubemap, face_direction, CubemapFaces};
pub use fetch::{load_background, spawn_background_fetch, BackgroundError, BackgroundResult};

pub const DESKTOP_BACKGROUND_URL: &str = "https://hebbkx1anhila5yf.public.blob.vercel-storage.com/dither_it_M3_Drone_Shot_equirectangular-jpg_San_Francisco_Big_City_1287677938_12251179%20(1)-NY2qcmpjkyG6rDp1cPGIdX0bHk3hMR.jpg";
pub const MOBILE_BACKGROUND_URL: &str =
    "https://hebbkx1anhila5yf.public.blob.vercel-storage.com/download3-7FArHVIJTFszlXm2045mQDPzsZqAyo.jpg";

const SKYBOX_BRIGHTNESS: f32 = 1000.0;
const ENVIRONMENT_INTENSITY: f32 = 900.0;

/// Background image per device class.
#[derive(Resource, Clone, Debug)]
pub struct BackgroundSettings {
    pub desktop: Url,
    pub mobile: Url,
    pub max_face_size: u32,
}

impl Default for BackgroundSettings {
    fn default() -> Self {
        Self {
            desktop: default_url(DESKTOP_BACKGROUND_URL),
            mobile: default_url(MOBILE_BACKGROUND_URL),
            max_face_size: 1024,
        }
    }
}

impl BackgroundSettings {
    pub fn url_for(&self, class: DeviceClass) -> &Url {
        match class {
            DeviceClass::Mobile => &self.mobile,
            DeviceClass::Desktop => &self.desktop,
        }
    }
}

fn default_url(raw: &'static str) -> Url {
    // Only called with the constants above.
    Url::parse(raw).unwrap_or_else(|err| panic!("invalid built-in background URL {raw}: {err}"))
}

#[derive(Default)]
enum LoadState {
    #[default]
    Idle,
    Pending(Receiver<BackgroundResult>),
    Applied,
    Failed,
}

/// Tracks the single background load of a session.
#[derive(Resource, Default)]
pub struct BackgroundLoader {
    state: LoadState,
}

impl BackgroundLoader {
    pub fn is_pending(&self) -> bool {
        matches!(self.state, LoadState::Pending(_))
    }

    pub fn is_applied(&self) -> bool {
        matches!(self.state, LoadState::Applied)
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.state, LoadState::Applied | LoadState::Failed)
    }
}

pub fn environment_plugin(app: &mut App) {
    app.init_resource::<BackgroundSettings>()
        .init_resource::<BackgroundLoader>()
        .init_resource::<SceneReadiness>()
        .add_systems(
            Update,
            (request_background_system, receive_background_system).chain(),
        );
}

/// Starts the fetch once the device class is known.
fn request_background_system(
    flag: Res<DeviceClassFlag>,
    settings: Res<BackgroundSettings>,
    mut loader: ResMut<BackgroundLoader>,
) {
    if !flag.is_resolved() || !matches!(loader.state, LoadState::Idle) {
        return;
    }
    let url = settings.url_for(flag.class()).clone();
    info!("loading background {url}");
    loader.state = LoadState::Pending(spawn_background_fetch(url, settings.max_face_size));
}

fn receive_background_system(
    mut commands: Commands,
    mut loader: ResMut<BackgroundLoader>,
    mut images: ResMut<Assets<Image>>,
    mut readiness: ResMut<SceneReadiness>,
    cameras: Query<Entity, With<Camera3d>>,
) {
    let LoadState::Pending(rx) = &loader.state else {
        return;
    };
    let result = match rx.try_recv() {
        Ok(result) => result,
        Err(TryRecvError::Empty) => return,
        Err(TryRecvError::Disconnected) => {
            warn!("background loader exited without a result");
            loader.state = LoadState::Failed;
            readiness.loaded = true;
            return;
        }
    };

    match result {
        Ok(faces) => {
            info!("background ready ({0}x{0} per face)", faces.face_size);
            let handle = images.add(faces.into_image());
            for camera in &cameras {
                commands.entity(camera).insert((
                    Skybox {
                        image: handle.clone(),
                        brightness: SKYBOX_BRIGHTNESS,
                        ..default()
                    },
                    EnvironmentMapLight {
                        diffuse_map: handle.clone(),
                        specular_map: handle.clone(),
                        intensity: ENVIRONMENT_INTENSITY,
                        ..default()
                    },
                ));
            }
            loader.state = LoadState::Applied;
        }
        Err(err) => {
            warn!("background unavailable, keeping clear color: {err}");
            loader.state = LoadState::Failed;
        }
    }
    readiness.loaded = true;
}
