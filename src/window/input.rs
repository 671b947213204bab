use std::collections::HashSet;

use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Key that closes the window in every tutorial that polls input.
pub const EXIT_KEY: KeyCode = KeyCode::Escape;

/// Held-key state, queried once per frame like `glfwGetKey`.
#[derive(Debug, Default)]
pub struct InputState {
    held: HashSet<KeyCode>,
    should_close: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) {
        if pressed {
            self.held.insert(key);
        } else {
            self.held.remove(&key);
        }
    }

    pub fn handle_key_event(&mut self, event: &KeyEvent) {
        if let PhysicalKey::Code(key) = event.physical_key {
            self.handle_key(key, event.state == ElementState::Pressed);
        }
    }

    pub fn is_pressed(&self, key: KeyCode) -> bool {
        self.held.contains(&key)
    }

    /// Sets the close flag when `exit_key` is held. Returns the flag.
    pub fn process_input(&mut self, exit_key: KeyCode) -> bool {
        if !self.should_close && self.is_pressed(exit_key) {
            log::info!("Escape key pressed.");
            self.should_close = true;
        }
        self.should_close
    }

    pub fn should_close(&self) -> bool {
        self.should_close
    }

    /// Forgets held keys, e.g. after focus loss when releases never arrive.
    pub fn release_all(&mut self) {
        self.held.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_key_sets_close_flag() {
        let mut input = InputState::new();
        assert!(!input.process_input(EXIT_KEY));

        input.handle_key(KeyCode::Escape, true);
        assert!(input.process_input(EXIT_KEY));
        assert!(input.should_close());
    }

    #[test]
    fn test_close_flag_is_sticky() {
        let mut input = InputState::new();
        input.handle_key(KeyCode::Escape, true);
        input.process_input(EXIT_KEY);
        input.handle_key(KeyCode::Escape, false);

        assert!(!input.is_pressed(KeyCode::Escape));
        assert!(input.process_input(EXIT_KEY));
    }

    #[test]
    fn test_other_keys_do_not_close() {
        let mut input = InputState::new();
        input.handle_key(KeyCode::KeyQ, true);
        input.handle_key(KeyCode::Space, true);

        assert!(!input.process_input(EXIT_KEY));
        assert!(input.is_pressed(KeyCode::KeyQ));
    }

    #[test]
    fn test_released_before_poll_is_missed() {
        let mut input = InputState::new();
        input.handle_key(KeyCode::Escape, true);
        input.handle_key(KeyCode::Escape, false);
        assert!(!input.process_input(EXIT_KEY));
    }

    #[test]
    fn test_release_all() {
        let mut input = InputState::new();
        input.handle_key(KeyCode::Escape, true);
        input.release_all();
        assert!(!input.process_input(EXIT_KEY));
    }
}
