//! Keyboard state queried by game objects.

use std::collections::HashSet;

use winit::event::ElementState;
use winit::keyboard::{KeyCode, PhysicalKey};

/// Read-only key query handed to game objects each update.
pub trait Input {
    fn is_key_down(&self, key: KeyCode) -> bool;
}

/// Set of keys currently held, fed from window keyboard events.
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    pressed: HashSet<KeyCode>,
}

impl KeyboardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle_key(&mut self, key: PhysicalKey, state: ElementState) {
        let PhysicalKey::Code(code) = key else {
            return;
        };
        match state {
            ElementState::Pressed => self.press(code),
            ElementState::Released => self.release(code),
        }
    }

    pub fn press(&mut self, key: KeyCode) {
        self.pressed.insert(key);
    }

    pub fn release(&mut self, key: KeyCode) {
        self.pressed.remove(&key);
    }

    pub fn clear(&mut self) {
        self.pressed.clear();
    }
}

impl Input for KeyboardState {
    fn is_key_down(&self, key: KeyCode) -> bool {
        self.pressed.contains(&key)
    }
}
