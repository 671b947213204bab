pub mod geometry;
pub mod mesh;
pub mod shaders;

pub use mesh::{Mesh, VertexLayout};
pub use shaders::{ShaderError, ShaderProgram, ShaderStage};

use crate::config::RenderConfig;

pub fn clear(config: &RenderConfig) {
    let [r, g, b, a] = config.clear_color;
    unsafe {
        gl::ClearColor(r, g, b, a);
        gl::Clear(gl::COLOR_BUFFER_BIT);
    }
}

pub fn set_viewport(width: u32, height: u32) {
    unsafe {
        gl::Viewport(0, 0, width as i32, height as i32);
    }
}
