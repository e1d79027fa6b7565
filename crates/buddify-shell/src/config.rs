//! Shell configuration read from `BUDDIFY_*` environment variables.

use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use buddify_core::{ConfigError, Route, SessionView};
use buddify_logging::{FileConfig, LogConfig};
use buddify_nav::NavConfig;

/// Desktop shell configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShellConfig {
    pub nav: NavConfig,
    /// Display name of the demo session.
    pub demo_user: String,
    pub demo_avatar: Option<String>,
    /// Start with the demo session already logged in.
    pub start_logged_in: bool,
    pub start_path: String,
    pub log_level: String,
    pub log_dir: Option<PathBuf>,
    pub pretty_logs: bool,
    pub window: WindowGeometry,
}

/// Optional window placement, set by tiling scripts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WindowGeometry {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            nav: NavConfig::default(),
            demo_user: "Buddy".to_string(),
            demo_avatar: None,
            start_logged_in: false,
            start_path: Route::Home.href().to_string(),
            log_level: "info".to_string(),
            log_dir: None,
            pretty_logs: true,
            window: WindowGeometry::default(),
        }
    }
}

impl ShellConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, falling back to defaults for
    /// unset keys.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(name) = lookup("BUDDIFY_USER").filter(|v| !v.trim().is_empty()) {
            config.demo_user = name;
        }
        config.demo_avatar = lookup("BUDDIFY_AVATAR_URL").filter(|v| !v.trim().is_empty());
        if let Some(url) = lookup("BUDDIFY_PLACEHOLDER_AVATAR") {
            config.nav = config.nav.with_placeholder_avatar(url);
        }
        if let Some(v) = lookup("BUDDIFY_LOGGED_IN") {
            config.start_logged_in = parse_flag("BUDDIFY_LOGGED_IN", &v)?;
        }
        if let Some(path) = lookup("BUDDIFY_START_PATH") {
            if !path.starts_with('/') {
                return Err(invalid("BUDDIFY_START_PATH", &path));
            }
            config.start_path = path;
        }
        if let Some(level) = lookup("BUDDIFY_LOG") {
            config.log_level = level;
        }
        config.log_dir = lookup("BUDDIFY_LOG_DIR").map(PathBuf::from);
        if let Some(v) = lookup("BUDDIFY_PRETTY_LOGS") {
            config.pretty_logs = parse_flag("BUDDIFY_PRETTY_LOGS", &v)?;
        }

        config.window = WindowGeometry {
            x: parse_opt(&lookup, "BUDDIFY_WIN_X")?,
            y: parse_opt(&lookup, "BUDDIFY_WIN_Y")?,
            width: parse_opt(&lookup, "BUDDIFY_WIN_W")?,
            height: parse_opt(&lookup, "BUDDIFY_WIN_H")?,
        };

        Ok(config)
    }

    /// Session the shell starts with.
    pub fn initial_session(&self) -> SessionView {
        if self.start_logged_in {
            self.demo_session()
        } else {
            SessionView::logged_out()
        }
    }

    /// Session published when the demo user signs in.
    pub fn demo_session(&self) -> SessionView {
        let session = SessionView::logged_in(self.demo_user.clone());
        match &self.demo_avatar {
            Some(url) => session.with_avatar(url.clone()),
            None => session,
        }
    }

    pub fn log_config(&self) -> LogConfig {
        let mut log = if self.pretty_logs {
            LogConfig::development()
        } else {
            LogConfig::default()
        };
        log.default_level = self.log_level.clone();
        log.file = self.log_dir.as_ref().map(|dir| FileConfig {
            directory: dir.clone(),
            ..FileConfig::default()
        });
        log
    }
}

fn invalid(key: &str, value: &str) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    }
}

fn parse_flag(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(invalid(key, value)),
    }
}

fn parse_opt<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
) -> Result<Option<T>, ConfigError> {
    lookup(key)
        .map(|v| v.trim().parse::<T>().map_err(|_| invalid(key, &v)))
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = ShellConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ShellConfig::default());
        assert!(!config.initial_session().is_logged_in);
    }

    #[test]
    fn test_demo_session_from_env() {
        let config = ShellConfig::from_lookup(lookup(&[
            ("BUDDIFY_USER", "ana"),
            ("BUDDIFY_AVATAR_URL", "https://x/a.png"),
            ("BUDDIFY_LOGGED_IN", "yes"),
            ("BUDDIFY_START_PATH", "/calendar"),
        ]))
        .unwrap();

        let session = config.initial_session();
        assert!(session.is_logged_in);
        assert_eq!(session.user_name.as_deref(), Some("ana"));
        assert_eq!(session.usable_avatar(), Some("https://x/a.png"));
        assert_eq!(config.start_path, "/calendar");
    }

    #[test]
    fn test_window_geometry() {
        let config = ShellConfig::from_lookup(lookup(&[
            ("BUDDIFY_WIN_W", "1200"),
            ("BUDDIFY_WIN_H", "800.5"),
        ]))
        .unwrap();
        assert_eq!(config.window.width, Some(1200.0));
        assert_eq!(config.window.height, Some(800.5));
        assert_eq!(config.window.x, None);
    }

    #[test]
    fn test_invalid_values_are_reported() {
        let err = ShellConfig::from_lookup(lookup(&[("BUDDIFY_WIN_X", "left")])).unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for BUDDIFY_WIN_X: left");

        let err = ShellConfig::from_lookup(lookup(&[("BUDDIFY_LOGGED_IN", "maybe")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));

        let err = ShellConfig::from_lookup(lookup(&[("BUDDIFY_START_PATH", "calendar")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn test_log_config() {
        let config = ShellConfig::from_lookup(lookup(&[
            ("BUDDIFY_LOG", "debug"),
            ("BUDDIFY_LOG_DIR", "/tmp/buddify-logs"),
            ("BUDDIFY_PRETTY_LOGS", "off"),
        ]))
        .unwrap();
        let log = config.log_config();
        assert_eq!(log.default_level, "debug");
        assert!(!log.console.pretty);
        assert_eq!(
            log.file.map(|f| f.directory),
            Some(PathBuf::from("/tmp/buddify-logs"))
        );
    }
}
