pub mod app;
pub mod config;
pub mod render;
pub mod scenes;
pub mod utils;
pub mod window;

pub use app::{main_with, run};
pub use config::{AppConfig, RenderConfig, WindowConfig};
pub use render::{Mesh, ShaderProgram, VertexLayout};
pub use scenes::{HelloTriangleEx1, HelloTriangleEx2, HelloWindow, HelloWindowEsc, Scene};
pub use utils::error::AppError;
pub use window::{GlWindow, InputState};
