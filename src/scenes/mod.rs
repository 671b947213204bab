pub mod hello_triangle;
pub mod hello_window;

pub use hello_triangle::{HelloTriangleEx1, HelloTriangleEx2};
pub use hello_window::{HelloWindow, HelloWindowEsc};

use crate::config::AppConfig;
use crate::utils::error::AppError;

/// One tutorial program. Created once the GL context is current and dropped
/// before the context goes away.
pub trait Scene: Sized {
    const NAME: &'static str;

    /// Whether holding the exit key closes the window.
    const EXIT_ON_KEY: bool = true;

    /// Whether the frame is cleared to the configured color before drawing.
    const CLEARS: bool = true;

    fn create(config: &AppConfig) -> Result<Self, AppError>;

    fn draw(&mut self) {}
}
