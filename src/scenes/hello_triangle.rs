use super::Scene;
use crate::config::AppConfig;
use crate::render::geometry::{FIRST_TRIANGLE, SECOND_TRIANGLE, TWO_TRIANGLES};
use crate::render::{Mesh, ShaderProgram, VertexLayout};
use crate::utils::error::AppError;

/// Two triangles side by side, both stored in one VBO behind one VAO.
pub struct HelloTriangleEx1 {
    mesh: Mesh,
    program: ShaderProgram,
}

impl Scene for HelloTriangleEx1 {
    const NAME: &'static str = "hello_triangle_ex1";

    fn create(_config: &AppConfig) -> Result<Self, AppError> {
        let program = ShaderProgram::tutorial()?;
        let mesh = Mesh::upload(&TWO_TRIANGLES, VertexLayout::POSITION_3D_PACKED);
        Ok(Self { mesh, program })
    }

    fn draw(&mut self) {
        self.program.use_program();
        self.mesh.draw();
    }
}

/// The same two triangles, each with its own VAO and VBO.
pub struct HelloTriangleEx2 {
    meshes: [Mesh; 2],
    program: ShaderProgram,
}

impl Scene for HelloTriangleEx2 {
    const NAME: &'static str = "hello_triangle_ex2";

    fn create(_config: &AppConfig) -> Result<Self, AppError> {
        let program = ShaderProgram::tutorial()?;
        let meshes = [
            Mesh::upload(&FIRST_TRIANGLE, VertexLayout::POSITION_3D),
            Mesh::upload(&SECOND_TRIANGLE, VertexLayout::POSITION_3D_PACKED),
        ];
        Ok(Self { meshes, program })
    }

    fn draw(&mut self) {
        self.program.use_program();
        for mesh in &self.meshes {
            mesh.draw();
        }
    }
}
