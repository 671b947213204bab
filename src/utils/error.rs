use thiserror::Error;

use crate::config::ConfigError;
use crate::render::shaders::ShaderError;

/// Fatal errors surfaced by a tutorial run.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to create window: {0}")]
    WindowCreation(String),

    #[error("OpenGL context error: {0}")]
    Context(#[from] glutin::error::Error),

    #[error("Event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error(transparent)]
    Shader(#[from] ShaderError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::shaders::ShaderStage;

    #[test]
    fn test_shader_error_is_transparent() {
        let err: AppError = ShaderError::Compilation {
            stage: ShaderStage::Fragment,
            log: "0:1: syntax error".to_string(),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "ERROR::SHADER::FRAGMENT::COMPILATION_FAILED\n0:1: syntax error"
        );
    }

    #[test]
    fn test_window_creation_message() {
        let err = AppError::WindowCreation("no display".to_string());
        assert_eq!(err.to_string(), "Failed to create window: no display");
    }

    #[test]
    fn test_config_error_converts() {
        let err: AppError = ConfigError::Invalid("width must be non-zero".to_string()).into();
        assert!(matches!(err, AppError::Config(_)));
    }
}
