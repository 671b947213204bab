use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{RenderConfig, WindowConfig};

/// Optional overrides, looked up in the working directory.
pub const CONFIG_FILE: &str = "learngl.toml";

/// Core profile is only available from 3.3 onwards.
const MIN_GL_VERSION: (u8, u8) = (3, 3);

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window: WindowConfig,
    pub render: RenderConfig,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            render: RenderConfig::default(),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads `path` if it exists, otherwise returns the built-in defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        match fs::read_to_string(path.as_ref()) {
            Ok(source) => Self::from_toml_str(&source),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(err.into()),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window.width == 0 || self.window.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "window size must be non-zero, got {}x{}",
                self.window.width, self.window.height
            )));
        }

        if self.window.gl_version() < MIN_GL_VERSION {
            return Err(ConfigError::Invalid(format!(
                "OpenGL {}.{} has no core profile, need at least {}.{}",
                self.window.gl_major, self.window.gl_minor, MIN_GL_VERSION.0, MIN_GL_VERSION.1
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_match_tutorial_window() {
        let config = AppConfig::default();
        assert_eq!(config.window.width, 800);
        assert_eq!(config.window.height, 600);
        assert_eq!(config.window.title, "Learn OpenGL");
        assert_eq!(config.window.gl_version(), (3, 3));
        assert!(config.window.vsync);
        assert_eq!(config.render.clear_color, [0.2, 0.3, 0.3, 1.0]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = AppConfig::from_toml_str(
            r#"
            log_level = "debug"

            [window]
            title = "Hello Triangle"
            "#,
        )
        .unwrap();

        assert_eq!(config.log_level, "debug");
        assert_eq!(config.window.title, "Hello Triangle");
        assert_eq!(config.window.width, 800);
        assert_eq!(config.render, RenderConfig::default());
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(AppConfig::from_toml_str("").unwrap(), AppConfig::default());
    }

    #[test]
    fn test_rejects_zero_size() {
        let err = AppConfig::from_toml_str("[window]\nwidth = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_rejects_legacy_gl_version() {
        let err = AppConfig::from_toml_str("[window]\ngl_major = 2\ngl_minor = 1").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let config = AppConfig::from_toml_str("[window]\ngl_major = 4\ngl_minor = 1").unwrap();
        assert_eq!(config.window.gl_version(), (4, 1));
    }

    #[test]
    fn test_malformed_toml() {
        let err = AppConfig::from_toml_str("[window\nwidth = 1").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_or_default(dir.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[render]\nclear_color = [0.0, 0.0, 0.0, 1.0]").unwrap();

        let config = AppConfig::load_or_default(file.path()).unwrap();
        assert_eq!(config.render.clear_color, [0.0, 0.0, 0.0, 1.0]);
    }
}
