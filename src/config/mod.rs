pub mod core;
pub mod rendering;
pub mod window;

pub use self::core::{AppConfig, ConfigError, CONFIG_FILE};
pub use rendering::RenderConfig;
pub use window::WindowConfig;
