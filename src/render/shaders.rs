use gl::types::*;
use std::ffi::{CString, NulError};
use std::fmt;
use std::ptr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    pub fn gl_enum(self) -> GLenum {
        match self {
            ShaderStage::Vertex => gl::VERTEX_SHADER,
            ShaderStage::Fragment => gl::FRAGMENT_SHADER,
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderStage::Vertex => f.write_str("VERTEX"),
            ShaderStage::Fragment => f.write_str("FRAGMENT"),
        }
    }
}

#[derive(Debug, Error)]
pub enum ShaderError {
    #[error("ERROR::SHADER::{stage}::COMPILATION_FAILED\n{log}")]
    Compilation { stage: ShaderStage, log: String },
    #[error("ERROR::SHADER::PROGRAM::LINKING_FAILED\n{0}")]
    Linking(String),
    #[error("Null byte in shader source: {0}")]
    Nul(#[from] NulError),
}

/// GLSL used by the hello-triangle tutorials.
pub mod sources {
    /// Forwards `aPos` untouched.
    pub const VERTEX_SHADER: &str = r#"#version 330 core
layout (location = 0) in vec3 aPos;
void main()
{
    gl_Position = vec4(aPos.x, aPos.y, aPos.z, 1.0);
}
"#;

    /// Flat orange.
    pub const FRAGMENT_SHADER: &str = r#"#version 330 core
out vec4 FragColor;
void main()
{
    FragColor = vec4(1.0f, 0.5f, 0.2f, 1.0f);
}
"#;
}

/// A linked vertex + fragment program. Deleted on drop, so it must not outlive
/// the GL context it was created in.
pub struct ShaderProgram {
    id: GLuint,
}

impl ShaderProgram {
    pub fn from_sources(vertex_source: &str, fragment_source: &str) -> Result<Self, ShaderError> {
        let vertex_shader = Self::compile(vertex_source, ShaderStage::Vertex)?;
        let fragment_shader = match Self::compile(fragment_source, ShaderStage::Fragment) {
            Ok(shader) => shader,
            Err(err) => {
                unsafe { gl::DeleteShader(vertex_shader) };
                return Err(err);
            }
        };

        let program = unsafe { gl::CreateProgram() };
        unsafe {
            gl::AttachShader(program, vertex_shader);
            gl::AttachShader(program, fragment_shader);
            gl::LinkProgram(program);
            gl::DeleteShader(vertex_shader);
            gl::DeleteShader(fragment_shader);
        }

        let mut success = 1;
        unsafe {
            gl::GetProgramiv(program, gl::LINK_STATUS, &mut success);
        }

        if success == 0 {
            let mut len = 0;
            unsafe {
                gl::GetProgramiv(program, gl::INFO_LOG_LENGTH, &mut len);
            }

            let mut buffer = info_log_buffer(len);
            unsafe {
                gl::GetProgramInfoLog(
                    program,
                    len,
                    ptr::null_mut(),
                    buffer.as_mut_ptr() as *mut GLchar,
                );
                gl::DeleteProgram(program);
            }

            return Err(ShaderError::Linking(info_log_to_string(&buffer)));
        }

        log::info!("Shader program {} linked", program);
        Ok(ShaderProgram { id: program })
    }

    /// Program built from the tutorial's vertex and fragment sources.
    pub fn tutorial() -> Result<Self, ShaderError> {
        Self::from_sources(sources::VERTEX_SHADER, sources::FRAGMENT_SHADER)
    }

    fn compile(source: &str, stage: ShaderStage) -> Result<GLuint, ShaderError> {
        let c_str = CString::new(source.as_bytes())?;
        let shader = unsafe { gl::CreateShader(stage.gl_enum()) };

        unsafe {
            gl::ShaderSource(shader, 1, &c_str.as_ptr(), ptr::null());
            gl::CompileShader(shader);
        }

        let mut success = 1;
        unsafe {
            gl::GetShaderiv(shader, gl::COMPILE_STATUS, &mut success);
        }

        if success == 0 {
            let mut len = 0;
            unsafe {
                gl::GetShaderiv(shader, gl::INFO_LOG_LENGTH, &mut len);
            }

            let mut buffer = info_log_buffer(len);
            unsafe {
                gl::GetShaderInfoLog(shader, len, ptr::null_mut(), buffer.as_mut_ptr() as *mut GLchar);
                gl::DeleteShader(shader);
            }

            return Err(ShaderError::Compilation {
                stage,
                log: info_log_to_string(&buffer),
            });
        }

        Ok(shader)
    }

    pub fn id(&self) -> GLuint {
        self.id
    }

    pub fn use_program(&self) {
        unsafe {
            gl::UseProgram(self.id);
        }
    }
}

impl Drop for ShaderProgram {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteProgram(self.id);
        }
    }
}

fn info_log_buffer(len: GLint) -> Vec<u8> {
    vec![0; len.max(1) as usize]
}

/// Drivers NUL-terminate the log and often pad it with newlines.
fn info_log_to_string(buffer: &[u8]) -> String {
    let end = buffer.iter().position(|&b| b == 0).unwrap_or(buffer.len());
    String::from_utf8_lossy(&buffer[..end]).trim_end().to_string()
}
