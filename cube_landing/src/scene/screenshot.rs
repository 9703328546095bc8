//! Auto-screenshot: once the scene is ready, waits N frames, captures, then exits.

use std::path::PathBuf;

use bevy::prelude::*;
use bevy::render::view::screenshot::{save_to_disk, Screenshot};

use crate::ui::SceneReadiness;

/// Counts down frames after the scene is ready, takes a screenshot, then exits.
#[derive(Resource)]
pub struct ScreenshotMode {
    pub path: PathBuf,
    pub frames_remaining: u32,
    pub captured: bool,
}

impl ScreenshotMode {
    pub fn new(path: PathBuf, delay_frames: u32) -> Self {
        Self {
            path,
            frames_remaining: delay_frames,
            captured: false,
        }
    }

    /// Advances one frame. Returns true on the frame the capture should fire.
    fn tick(&mut self, ready: bool) -> bool {
        if self.captured || !ready {
            return false;
        }
        if self.frames_remaining > 0 {
            self.frames_remaining -= 1;
            return false;
        }
        self.captured = true;
        true
    }
}

pub fn auto_screenshot_system(
    mut commands: Commands,
    mut mode: ResMut<ScreenshotMode>,
    readiness: Res<SceneReadiness>,
    mut exit: EventWriter<AppExit>,
) {
    if mode.captured {
        exit.send(AppExit::Success);
        return;
    }

    if mode.tick(readiness.loaded) {
        info!("capturing screenshot to {}", mode.path.display());
        commands
            .spawn(Screenshot::primary_window())
            .observe(save_to_disk(mode.path.clone()));
    }
}

pub fn screenshot_plugin(app: &mut App) {
    app.init_resource::<SceneReadiness>()
        .add_systems(Update, auto_screenshot_system);
}
