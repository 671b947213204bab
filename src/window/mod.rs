pub mod gl_window;
pub mod input;

pub use gl_window::GlWindow;
pub use input::{InputState, EXIT_KEY};
