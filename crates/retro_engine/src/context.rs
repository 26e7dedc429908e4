//! Per-run frame context
//!
//! State that every actor may read or write during a tick. Only the frame
//! driving thread touches it; the last writer in a tick wins.

use crate::actor::ActorId;
use crate::debug::DebugOverlay;
use crate::foundation::math::Color;

/// Shared mutable state handed to actors
#[derive(Debug, Clone)]
pub struct FrameContext {
    /// Ambient light colour read by the renderer each frame
    pub ambient_light: Color,
    /// Actor whose view is rendered
    pub current_camera: Option<ActorId>,
    /// Whether the mouse cursor is shown
    pub cursor_visible: bool,
    /// Debug text overlay
    pub debug: DebugOverlay,
    frame_index: u64,
}

impl Default for FrameContext {
    fn default() -> Self {
        Self::new(Color::zeros(), DebugOverlay::new())
    }
}

impl FrameContext {
    /// Context with the given ambient light and overlay
    pub fn new(ambient_light: Color, debug: DebugOverlay) -> Self {
        Self {
            ambient_light,
            current_camera: None,
            cursor_visible: true,
            debug,
            frame_index: 0,
        }
    }

    /// Index of the current tick, starting at zero
    pub fn frame_index(&self) -> u64 {
        self.frame_index
    }

    pub(crate) fn advance_frame(&mut self) {
        self.frame_index += 1;
    }

    /// Post a debug message
    pub fn add_debug_message(&mut self, text: impl Into<String>, duration: f32, color: Color) {
        self.debug.append(text, duration, color);
    }
}
