//! Coarse device-class detection, used to pick the background asset.

use bevy::prelude::*;

/// User-agent tokens that mark a mobile browser.
const MOBILE_TOKENS: &[&str] = &[
    "android",
    "webos",
    "iphone",
    "ipad",
    "ipod",
    "blackberry",
    "iemobile",
    "opera mini",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeviceClass {
    Mobile,
    Desktop,
}

impl DeviceClass {
    pub fn is_mobile(self) -> bool {
        self == Self::Mobile
    }
}

/// Source of the device class. Swap in a [`FixedProbe`] to pin the answer.
pub trait DeviceClassProbe: Send + Sync + 'static {
    fn detect(&self) -> DeviceClass;
}

/// Classifies a user-agent string.
pub struct UserAgentProbe {
    pub user_agent: String,
}

impl UserAgentProbe {
    pub fn new(user_agent: impl Into<String>) -> Self {
        Self {
            user_agent: user_agent.into(),
        }
    }
}

impl DeviceClassProbe for UserAgentProbe {
    fn detect(&self) -> DeviceClass {
        classify_user_agent(&self.user_agent)
    }
}

/// Classifies by compile target: Android and iOS builds are mobile.
pub struct PlatformProbe;

impl DeviceClassProbe for PlatformProbe {
    fn detect(&self) -> DeviceClass {
        if cfg!(any(target_os = "android", target_os = "ios")) {
            DeviceClass::Mobile
        } else {
            DeviceClass::Desktop
        }
    }
}

/// Always answers with the same class.
pub struct FixedProbe(pub DeviceClass);

impl DeviceClassProbe for FixedProbe {
    fn detect(&self) -> DeviceClass {
        self.0
    }
}

pub fn classify_user_agent(user_agent: &str) -> DeviceClass {
    let ua = user_agent.to_lowercase();
    if MOBILE_TOKENS.iter().any(|token| ua.contains(token)) {
        DeviceClass::Mobile
    } else {
        DeviceClass::Desktop
    }
}

#[derive(Resource)]
pub struct DeviceProbeResource(pub Box<dyn DeviceClassProbe>);

impl DeviceProbeResource {
    pub fn new(probe: impl DeviceClassProbe) -> Self {
        Self(Box::new(probe))
    }
}

impl Default for DeviceProbeResource {
    fn default() -> Self {
        Self::new(PlatformProbe)
    }
}

/// Mobile flag. Starts non-mobile and resolves exactly once.
#[derive(Resource, Debug, Default)]
pub struct DeviceClassFlag {
    pub is_mobile: bool,
    resolved: bool,
}

impl DeviceClassFlag {
    /// Records the detected class. Returns `false` if the flag was already resolved.
    pub fn resolve(&mut self, class: DeviceClass) -> bool {
        if self.resolved {
            return false;
        }
        self.is_mobile = class.is_mobile();
        self.resolved = true;
        true
    }

    pub fn is_resolved(&self) -> bool {
        self.resolved
    }

    pub fn class(&self) -> DeviceClass {
        if self.is_mobile {
            DeviceClass::Mobile
        } else {
            DeviceClass::Desktop
        }
    }
}

pub fn device_class_plugin(app: &mut App) {
    app.init_resource::<DeviceClassFlag>()
        .init_resource::<DeviceProbeResource>()
        .add_systems(Update, detect_device_class_system);
}

fn detect_device_class_system(probe: Res<DeviceProbeResource>, mut flag: ResMut<DeviceClassFlag>) {
    if flag.is_resolved() {
        return;
    }
    let class = probe.0.detect();
    if flag.resolve(class) {
        info!("device class: {class:?}");
    }
}
