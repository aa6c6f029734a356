use std::collections::HashSet;

use super::types::{InputEvent, Key, KeyState};

/// Current input state for a single window.
///
/// Frames poll this ("is the key held right now") instead of reacting to
/// individual events.
#[derive(Debug, Default)]
pub struct InputState {
    /// Set of currently held keys.
    pub keys_down: HashSet<Key>,
}

impl InputState {
    pub fn apply_event(&mut self, ev: &InputEvent) {
        match ev {
            // Release events for keys held during focus loss never arrive.
            InputEvent::Focused(false) => self.keys_down.clear(),
            InputEvent::Focused(true) => {}

            InputEvent::Key { key, state } => match state {
                KeyState::Pressed => {
                    self.keys_down.insert(*key);
                }
                KeyState::Released => {
                    self.keys_down.remove(key);
                }
            },
        }
    }

    pub fn key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }
}
