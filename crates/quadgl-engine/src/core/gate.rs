use crate::input::{InputState, Key};

/// Close condition checked by the render loop.
///
/// Once closed, the gate stays closed and refuses every later frame.
#[derive(Debug)]
pub struct FrameGate {
    exit_key: Option<Key>,
    close_requested: bool,
    frames: u64,
}

impl FrameGate {
    pub fn new(exit_key: Option<Key>) -> Self {
        Self {
            exit_key,
            close_requested: false,
            frames: 0,
        }
    }

    /// Polls the exit key. Held means close.
    pub fn process_input(&mut self, input: &InputState) {
        if let Some(key) = self.exit_key {
            if input.key_down(key) {
                if !self.close_requested {
                    log::debug!("{key} pressed, closing");
                }
                self.close_requested = true;
            }
        }
    }

    /// Sets the close flag (window system close request, app exit).
    pub fn request_close(&mut self) {
        self.close_requested = true;
    }

    #[inline]
    pub fn should_close(&self) -> bool {
        self.close_requested
    }

    /// Loop check at the top of a frame. Returns `false` once the close
    /// condition has been observed; no frame may be drawn after that.
    pub fn begin_frame(&mut self) -> bool {
        if self.close_requested {
            return false;
        }
        self.frames = self.frames.wrapping_add(1);
        true
    }

    /// Number of frames let through so far.
    #[inline]
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Default for FrameGate {
    fn default() -> Self {
        Self::new(Some(Key::Escape))
    }
}
