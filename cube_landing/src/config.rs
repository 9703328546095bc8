//! Environment variables and their parsing.

use std::num::ParseIntError;
use std::path::{Path, PathBuf};

use url::Url;

pub const USER_AGENT_VAR: &str = "CUBENAME_USER_AGENT";
pub const BACKGROUND_DESKTOP_VAR: &str = "CUBENAME_BACKGROUND_DESKTOP";
pub const BACKGROUND_MOBILE_VAR: &str = "CUBENAME_BACKGROUND_MOBILE";
pub const NO_BACKGROUND_VAR: &str = "CUBENAME_NO_BACKGROUND";
pub const SCREENSHOT_VAR: &str = "CUBENAME_SCREENSHOT";
pub const SCREENSHOT_DELAY_VAR: &str = "CUBENAME_SCREENSHOT_DELAY";
pub const LAYOUT_DUMP_VAR: &str = "CUBENAME_LAYOUT_DUMP";

const DEFAULT_SCREENSHOT_DELAY: u32 = 120;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid URL in {var}: {value:?}: {source}")]
    InvalidUrl {
        var: &'static str,
        value: String,
        #[source]
        source: url::ParseError,
    },
    #[error("{var} path {value:?} cannot be expressed as a file URL")]
    InvalidPath { var: &'static str, value: String },
    #[error("invalid number in {var}: {value:?}: {source}")]
    InvalidNumber {
        var: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },
}

/// Settings read from the environment. Invalid values fall back to defaults and are
/// kept in `errors` for logging once the app is running.
#[derive(Debug)]
pub struct LandingConfig {
    pub user_agent: Option<String>,
    pub background_desktop: Option<Url>,
    pub background_mobile: Option<Url>,
    pub background_enabled: bool,
    pub screenshot: Option<(PathBuf, u32)>,
    pub layout_dump: Option<PathBuf>,
    pub errors: Vec<ConfigError>,
}

impl LandingConfig {
    pub fn from_env() -> Self {
        let mut errors = Vec::new();

        let background_desktop = keep_ok(url_var(BACKGROUND_DESKTOP_VAR), &mut errors);
        let background_mobile = keep_ok(url_var(BACKGROUND_MOBILE_VAR), &mut errors);
        let screenshot = non_empty_var(SCREENSHOT_VAR).map(|path| {
            let delay = keep_ok(u32_var(SCREENSHOT_DELAY_VAR), &mut errors)
                .unwrap_or(DEFAULT_SCREENSHOT_DELAY);
            (PathBuf::from(path), delay)
        });

        Self {
            user_agent: non_empty_var(USER_AGENT_VAR),
            background_desktop,
            background_mobile,
            background_enabled: std::env::var_os(NO_BACKGROUND_VAR).is_none(),
            screenshot,
            layout_dump: non_empty_var(LAYOUT_DUMP_VAR).map(PathBuf::from),
            errors,
        }
    }
}

fn keep_ok<T>(result: Result<Option<T>, ConfigError>, errors: &mut Vec<ConfigError>) -> Option<T> {
    result.unwrap_or_else(|err| {
        errors.push(err);
        None
    })
}

fn non_empty_var(var: &str) -> Option<String> {
    std::env::var(var).ok().filter(|value| !value.trim().is_empty())
}

/// Parses `var` as an absolute URL; a bare filesystem path becomes a `file://` URL.
pub fn url_var(var: &'static str) -> Result<Option<Url>, ConfigError> {
    let Some(raw) = non_empty_var(var) else {
        return Ok(None);
    };
    match Url::parse(&raw) {
        Ok(url) => Ok(Some(url)),
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            let path = std::path::absolute(&raw).unwrap_or_else(|_| PathBuf::from(&raw));
            file_url(var, &path, raw).map(Some)
        }
        Err(source) => Err(ConfigError::InvalidUrl {
            var,
            value: raw,
            source,
        }),
    }
}

fn file_url(var: &'static str, path: &Path, raw: String) -> Result<Url, ConfigError> {
    Url::from_file_path(path).map_err(|()| ConfigError::InvalidPath { var, value: raw })
}

pub fn u32_var(var: &'static str) -> Result<Option<u32>, ConfigError> {
    let Some(raw) = non_empty_var(var) else {
        return Ok(None);
    };
    raw.trim()
        .parse::<u32>()
        .map(Some)
        .map_err(|source| ConfigError::InvalidNumber {
            var,
            value: raw,
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Mutex, OnceLock};

    static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

    fn lock_env() -> std::sync::MutexGuard<'static, ()> {
        ENV_LOCK
            .get_or_init(|| Mutex::new(()))
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    struct EnvGuard {
        snapshot: Vec<(&'static str, Option<String>)>,
    }

    impl EnvGuard {
        fn capture(keys: &[&'static str]) -> Self {
            let snapshot = keys
                .iter()
                .map(|&key| (key, std::env::var(key).ok()))
                .collect();
            for key in keys {
                std::env::remove_var(key);
            }
            Self { snapshot }
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for (key, value) in &self.snapshot {
                match value {
                    Some(val) => std::env::set_var(key, val),
                    None => std::env::remove_var(key),
                }
            }
        }
    }

    const ENV_KEYS: [&str; 7] = [
        USER_AGENT_VAR,
        BACKGROUND_DESKTOP_VAR,
        BACKGROUND_MOBILE_VAR,
        NO_BACKGROUND_VAR,
        SCREENSHOT_VAR,
        SCREENSHOT_DELAY_VAR,
        LAYOUT_DUMP_VAR,
    ];

    #[test]
    fn empty_environment_gives_defaults() {
        let _lock = lock_env();
        let _guard = EnvGuard::capture(&ENV_KEYS);

        let config = LandingConfig::from_env();

        assert!(config.user_agent.is_none());
        assert!(config.background_desktop.is_none());
        assert!(config.background_enabled);
        assert!(config.screenshot.is_none());
        assert!(config.errors.is_empty());
    }

    #[test]
    fn overrides_are_parsed() {
        let _lock = lock_env();
        let _guard = EnvGuard::capture(&ENV_KEYS);

        std::env::set_var(USER_AGENT_VAR, "Mozilla/5.0 (iPad)");
        std::env::set_var(BACKGROUND_MOBILE_VAR, "https://example.com/sky.jpg");
        std::env::set_var(NO_BACKGROUND_VAR, "1");
        std::env::set_var(SCREENSHOT_VAR, "/tmp/shot.png");
        std::env::set_var(SCREENSHOT_DELAY_VAR, "30");

        let config = LandingConfig::from_env();

        assert_eq!(config.user_agent.as_deref(), Some("Mozilla/5.0 (iPad)"));
        assert_eq!(
            config.background_mobile.as_ref().map(Url::as_str),
            Some("https://example.com/sky.jpg")
        );
        assert!(!config.background_enabled);
        assert_eq!(
            config.screenshot,
            Some((PathBuf::from("/tmp/shot.png"), 30))
        );
    }

    #[test]
    fn bare_path_becomes_file_url() {
        let _lock = lock_env();
        let _guard = EnvGuard::capture(&ENV_KEYS);

        std::env::set_var(BACKGROUND_DESKTOP_VAR, "assets/sky.jpg");

        let url = url_var(BACKGROUND_DESKTOP_VAR).unwrap().unwrap();
        assert_eq!(url.scheme(), "file");
        assert!(url.path().ends_with("/assets/sky.jpg"));
    }

    #[test]
    fn relative_path_without_base_is_reported() {
        let err = file_url(
            BACKGROUND_MOBILE_VAR,
            Path::new("assets/sky.jpg"),
            "assets/sky.jpg".to_string(),
        )
        .unwrap_err();

        assert!(matches!(
            err,
            ConfigError::InvalidPath {
                var: BACKGROUND_MOBILE_VAR,
                ..
            }
        ));
        assert!(err.to_string().contains("assets/sky.jpg"));
    }

    #[test]
    fn invalid_values_fall_back_and_are_reported() {
        let _lock = lock_env();
        let _guard = EnvGuard::capture(&ENV_KEYS);

        std::env::set_var(BACKGROUND_DESKTOP_VAR, "https://exa mple.com/");
        std::env::set_var(SCREENSHOT_VAR, "/tmp/shot.png");
        std::env::set_var(SCREENSHOT_DELAY_VAR, "soon");

        let config = LandingConfig::from_env();

        assert!(config.background_desktop.is_none());
        assert_eq!(
            config.screenshot,
            Some((PathBuf::from("/tmp/shot.png"), DEFAULT_SCREENSHOT_DELAY))
        );
        assert_eq!(config.errors.len(), 2);
        assert!(matches!(
            config.errors[0],
            ConfigError::InvalidUrl {
                var: BACKGROUND_DESKTOP_VAR,
                ..
            }
        ));
        assert!(matches!(
            config.errors[1],
            ConfigError::InvalidNumber { .. }
        ));
    }
}
