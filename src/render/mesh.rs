use gl::types::*;
use std::mem;
use std::ptr;

/// Layout of a single float attribute bound at location 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexLayout {
    pub components: usize,
    /// Floats between consecutive vertices; 0 means tightly packed.
    pub stride_floats: usize,
}

impl VertexLayout {
    /// Three floats per vertex with the stride spelled out.
    pub const POSITION_3D: VertexLayout = VertexLayout {
        components: 3,
        stride_floats: 3,
    };

    /// Three floats per vertex, stride left for GL to derive.
    pub const POSITION_3D_PACKED: VertexLayout = VertexLayout {
        components: 3,
        stride_floats: 0,
    };

    pub fn stride_bytes(&self) -> GLsizei {
        (self.stride_floats * mem::size_of::<f32>()) as GLsizei
    }

    /// Effective distance between vertices, resolving the packed case.
    pub fn step(&self) -> usize {
        if self.stride_floats == 0 {
            self.components
        } else {
            self.stride_floats
        }
    }

    pub fn vertex_count(&self, vertices: &[f32]) -> usize {
        vertices.len() / self.step()
    }
}

/// Size in bytes handed to `glBufferData`.
pub fn buffer_size(vertices: &[f32]) -> GLsizeiptr {
    mem::size_of_val(vertices) as GLsizeiptr
}

/// One VAO with one static VBO.
pub struct Mesh {
    vao: GLuint,
    vbo: GLuint,
    vertex_count: GLsizei,
}

impl Mesh {
    pub fn upload(vertices: &[f32], layout: VertexLayout) -> Self {
        let mut vao = 0;
        let mut vbo = 0;

        unsafe {
            gl::GenVertexArrays(1, &mut vao);
            gl::GenBuffers(1, &mut vbo);

            gl::BindVertexArray(vao);
            gl::BindBuffer(gl::ARRAY_BUFFER, vbo);
            gl::BufferData(
                gl::ARRAY_BUFFER,
                buffer_size(vertices),
                vertices.as_ptr() as *const _,
                gl::STATIC_DRAW,
            );

            gl::VertexAttribPointer(
                0,
                layout.components as GLint,
                gl::FLOAT,
                gl::FALSE,
                layout.stride_bytes(),
                ptr::null(),
            );
            gl::EnableVertexAttribArray(0);

            // The attribute already captured the VBO.
            gl::BindBuffer(gl::ARRAY_BUFFER, 0);
            gl::BindVertexArray(0);
        }

        let vertex_count = layout.vertex_count(vertices) as GLsizei;
        log::debug!(
            "Uploaded mesh vao={} vbo={} ({} bytes, {} vertices)",
            vao,
            vbo,
            buffer_size(vertices),
            vertex_count
        );

        Self {
            vao,
            vbo,
            vertex_count,
        }
    }

    pub fn vertex_count(&self) -> GLsizei {
        self.vertex_count
    }

    pub fn draw(&self) {
        unsafe {
            gl::BindVertexArray(self.vao);
            gl::DrawArrays(gl::TRIANGLES, 0, self.vertex_count);
        }
    }
}

impl Drop for Mesh {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteVertexArrays(1, &self.vao);
            gl::DeleteBuffers(1, &self.vbo);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::geometry::{FIRST_TRIANGLE, SECOND_TRIANGLE, TWO_TRIANGLES};

    #[test]
    fn test_buffer_size_is_literal_byte_count() {
        assert_eq!(buffer_size(&TWO_TRIANGLES), 72);
        assert_eq!(buffer_size(&FIRST_TRIANGLE), 36);
        assert_eq!(buffer_size(&SECOND_TRIANGLE), 36);
        assert_eq!(buffer_size(&[]), 0);
    }

    #[test]
    fn test_stride() {
        assert_eq!(VertexLayout::POSITION_3D.stride_bytes(), 12);
        assert_eq!(VertexLayout::POSITION_3D_PACKED.stride_bytes(), 0);
    }

    #[test]
    fn test_vertex_count() {
        assert_eq!(VertexLayout::POSITION_3D_PACKED.vertex_count(&TWO_TRIANGLES), 6);
        assert_eq!(VertexLayout::POSITION_3D.vertex_count(&TWO_TRIANGLES), 6);
        assert_eq!(VertexLayout::POSITION_3D.vertex_count(&FIRST_TRIANGLE), 3);
    }

    #[test]
    fn test_interleaved_step() {
        let layout = VertexLayout {
            components: 3,
            stride_floats: 5,
        };
        assert_eq!(layout.stride_bytes(), 20);
        assert_eq!(layout.vertex_count(&[0.0; 20]), 4);
    }
}
