//! SDK entry points and builder for composing the landing page app.

use std::path::PathBuf;

use bevy::prelude::*;
use url::Url;

use crate::camera::orbit_camera_plugin;
use crate::config::{ConfigError, LandingConfig};
use crate::device::{device_class_plugin, DeviceClassProbe, DeviceProbeResource, UserAgentProbe};
use crate::environment::{environment_plugin, BackgroundSettings};
use crate::render::{UnitRenderer, UnitRendererResource};
use crate::scene::{
    layout_dump_system, screenshot_plugin, setup_scene, LayoutDumpPath, SceneSettings,
    ScreenshotMode, WordSpec,
};
use crate::ui::{shell_plugin, SceneReadiness, ShellContent};

/// Config problems found before logging was up; reported on the first frame.
#[derive(Resource, Default)]
struct StartupConfigErrors(Vec<ConfigError>);

/// Builder for constructing the landing page app with customizable plugins.
pub struct LandingPageBuilder {
    window_title: String,
    window_resolution: (f32, f32),
    clear_color: Color,
    scene: SceneSettings,
    shell: ShellContent,
    background: BackgroundSettings,
    probe: Option<Box<dyn DeviceClassProbe>>,
    renderer: Option<Box<dyn UnitRenderer>>,
    screenshot: Option<(PathBuf, u32)>,
    layout_dump: Option<PathBuf>,
    config_errors: Vec<ConfigError>,
    enable_orbit_controls: bool,
    enable_overlay: bool,
    enable_background: bool,
}

impl Default for LandingPageBuilder {
    fn default() -> Self {
        Self {
            window_title: "Ayush Dubey".to_string(),
            window_resolution: (1280.0, 720.0),
            clear_color: Color::srgb(0.067, 0.094, 0.153),
            scene: SceneSettings::default(),
            shell: ShellContent::default(),
            background: BackgroundSettings::default(),
            probe: None,
            renderer: None,
            screenshot: None,
            layout_dump: None,
            config_errors: Vec::new(),
            enable_orbit_controls: true,
            enable_overlay: true,
            enable_background: true,
        }
    }
}

impl LandingPageBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply settings read from the environment.
    pub fn landing_config(mut self, config: LandingConfig) -> Self {
        if let Some(user_agent) = config.user_agent {
            self.probe = Some(Box::new(UserAgentProbe::new(user_agent)));
        }
        if let Some(url) = config.background_desktop {
            self.background.desktop = url;
        }
        if let Some(url) = config.background_mobile {
            self.background.mobile = url;
        }
        self.enable_background &= config.background_enabled;
        self.screenshot = config.screenshot.or(self.screenshot);
        self.layout_dump = config.layout_dump.or(self.layout_dump);
        self.config_errors.extend(config.errors);
        self
    }

    pub fn window_title(mut self, title: impl Into<String>) -> Self {
        self.window_title = title.into();
        self
    }

    pub fn window_resolution(mut self, width: f32, height: f32) -> Self {
        self.window_resolution = (width, height);
        self
    }

    pub fn clear_color(mut self, color: Color) -> Self {
        self.clear_color = color;
        self
    }

    /// Replace the word rows.
    pub fn words(mut self, words: Vec<WordSpec>) -> Self {
        self.scene.words = words;
        self
    }

    pub fn scene_settings(mut self, settings: SceneSettings) -> Self {
        self.scene = settings;
        self
    }

    pub fn shell_content(mut self, content: ShellContent) -> Self {
        self.shell = content;
        self
    }

    pub fn background_urls(mut self, desktop: Url, mobile: Url) -> Self {
        self.background.desktop = desktop;
        self.background.mobile = mobile;
        self
    }

    /// Provide a custom device-class probe.
    pub fn device_probe(mut self, probe: impl DeviceClassProbe) -> Self {
        self.probe = Some(Box::new(probe));
        self
    }

    /// Provide a custom unit renderer implementation.
    pub fn renderer(mut self, renderer: impl UnitRenderer) -> Self {
        self.renderer = Some(Box::new(renderer));
        self
    }

    /// Capture one screenshot `delay_frames` after the scene is ready, then exit.
    pub fn screenshot(mut self, path: impl Into<PathBuf>, delay_frames: u32) -> Self {
        self.screenshot = Some((path.into(), delay_frames));
        self
    }

    /// Write the cube layout as JSON at startup.
    pub fn layout_dump(mut self, path: impl Into<PathBuf>) -> Self {
        self.layout_dump = Some(path.into());
        self
    }

    pub fn disable_orbit_controls(mut self) -> Self {
        self.enable_orbit_controls = false;
        self
    }

    pub fn disable_overlay(mut self) -> Self {
        self.enable_overlay = false;
        self
    }

    pub fn disable_background(mut self) -> Self {
        self.enable_background = false;
        self
    }

    /// Build the Bevy app with the selected configuration and plugins.
    pub fn build(self) -> App {
        let mut app = App::new();
        app.add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: self.window_title.clone(),
                resolution: self.window_resolution.into(),
                ..default()
            }),
            ..default()
        }))
        .insert_resource(ClearColor(self.clear_color));

        self.install(&mut app);
        app
    }

    /// Registers resources and plugins on an existing app. `build` calls this after
    /// adding `DefaultPlugins`; tests call it on a bare app.
    pub fn install(self, app: &mut App) {
        let renderer = self
            .renderer
            .unwrap_or_else(|| Box::new(crate::render::EdgedCubeRenderer::default()));
        renderer.setup(app);

        app.insert_resource(self.scene)
            .insert_resource(UnitRendererResource(renderer))
            .insert_resource(StartupConfigErrors(self.config_errors))
            .add_systems(Startup, (log_config_errors_system, setup_scene));

        match self.probe {
            Some(probe) => app.insert_resource(DeviceProbeResource(probe)),
            None => app.init_resource::<DeviceProbeResource>(),
        };
        app.add_plugins(device_class_plugin);

        if self.enable_background {
            app.insert_resource(self.background)
                .add_plugins(environment_plugin);
        } else {
            app.insert_resource(SceneReadiness { loaded: true });
        }
        if self.enable_orbit_controls {
            app.add_plugins(orbit_camera_plugin);
        }
        if self.enable_overlay {
            app.insert_resource(self.shell).add_plugins(shell_plugin);
        }
        if let Some((path, delay)) = self.screenshot {
            app.insert_resource(ScreenshotMode::new(path, delay))
                .add_plugins(screenshot_plugin);
        }
        if let Some(path) = self.layout_dump {
            app.insert_resource(LayoutDumpPath(path))
                .add_systems(Startup, layout_dump_system.after(setup_scene));
        }
    }
}

fn log_config_errors_system(mut errors: ResMut<StartupConfigErrors>) {
    for err in errors.0.drain(..) {
        warn!("config: {err}, using default");
    }
}
