use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
    pub gl_major: u8,
    pub gl_minor: u8,
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            title: "Learn OpenGL".to_string(),
            gl_major: 3,
            gl_minor: 3,
            vsync: true,
        }
    }
}

impl WindowConfig {
    pub fn gl_version(&self) -> (u8, u8) {
        (self.gl_major, self.gl_minor)
    }
}
