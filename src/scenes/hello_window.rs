use super::Scene;
use crate::config::AppConfig;
use crate::utils::error::AppError;

/// An empty window: swap and poll, nothing else.
pub struct HelloWindow;

impl Scene for HelloWindow {
    const NAME: &'static str = "hello_window";
    const EXIT_ON_KEY: bool = false;
    const CLEARS: bool = false;

    fn create(_config: &AppConfig) -> Result<Self, AppError> {
        Ok(Self)
    }
}

/// Clears every frame and closes on Escape.
pub struct HelloWindowEsc;

impl Scene for HelloWindowEsc {
    const NAME: &'static str = "hello_window_esc";

    fn create(_config: &AppConfig) -> Result<Self, AppError> {
        Ok(Self)
    }
}
