//! Debug text overlay with time based expiry

use crate::foundation::math::{colors, Color};
use crate::render::RenderError;

/// Line drawn in place of the overlay when one of its lines fails to render
pub const DEFAULT_FALLBACK_MESSAGE: &str = "Debug output error: Attempted to draw illegal characters";

/// One overlay line
#[derive(Debug, Clone, PartialEq)]
pub struct DebugMessage {
    /// Text to draw; may contain characters the font cannot draw
    pub text: String,
    /// Seconds the message stays after its first frame; zero means one frame
    pub duration: f32,
    /// Display colour
    pub color: Color,
    /// Seconds the message has been on screen
    pub lifetime: f32,
}

impl DebugMessage {
    /// Create a message with zero accumulated lifetime
    ///
    /// Negative durations are clamped to zero.
    pub fn new(text: impl Into<String>, duration: f32, color: Color) -> Self {
        Self {
            text: text.into(),
            duration: duration.max(0.0),
            color,
            lifetime: 0.0,
        }
    }

    /// Add `elapsed_seconds` to the lifetime; returns true once expired
    pub fn tick(&mut self, elapsed_seconds: f32) -> bool {
        self.lifetime += elapsed_seconds;
        self.is_expired()
    }

    /// Whether the lifetime has run past the duration
    pub fn is_expired(&self) -> bool {
        self.lifetime > self.duration
    }
}

/// What happened during one overlay pass
#[derive(Debug, Clone, PartialEq)]
pub enum OverlayPass {
    /// Every line was drawn and the buffer aged
    Rendered {
        /// Lines drawn
        drawn: usize,
        /// Lines removed after aging
        expired: usize,
    },
    /// A line failed to draw; the buffer was cleared and the fallback drawn
    Recovered {
        /// The failure that triggered recovery
        error: RenderError,
        /// Lines discarded
        discarded: usize,
    },
}

/// Ordered buffer of debug messages
#[derive(Debug, Clone)]
pub struct DebugOverlay {
    messages: Vec<DebugMessage>,
    fallback_message: String,
}

impl Default for DebugOverlay {
    fn default() -> Self {
        Self::new()
    }
}

impl DebugOverlay {
    /// Create an empty overlay with the default fallback line
    pub fn new() -> Self {
        Self::with_fallback_message(DEFAULT_FALLBACK_MESSAGE)
    }

    /// Create an empty overlay with a custom fallback line
    pub fn with_fallback_message(fallback_message: impl Into<String>) -> Self {
        Self {
            messages: Vec::new(),
            fallback_message: fallback_message.into(),
        }
    }

    /// Post a message
    pub fn append(&mut self, text: impl Into<String>, duration: f32, color: Color) {
        self.messages.push(DebugMessage::new(text, duration, color));
    }

    /// Draw every message, then age all of them and drop the expired ones
    ///
    /// `render` receives the text, the message's current slot (its index,
    /// so lines move up as earlier ones expire) and its colour. If any line
    /// fails, the whole buffer is discarded and the fallback line is drawn
    /// once in slot 0. Only a failure of the fallback itself is returned.
    pub fn render_and_age<F>(&mut self, elapsed_seconds: f32, mut render: F) -> Result<OverlayPass, RenderError>
    where
        F: FnMut(&str, usize, Color) -> Result<(), RenderError>,
    {
        let drawn = self
            .messages
            .iter()
            .enumerate()
            .try_for_each(|(slot, message)| render(&message.text, slot, message.color));

        if let Err(error) = drawn {
            let discarded = self.messages.len();
            log::warn!("Debug overlay failed to render ({}), discarding {} message(s)", error, discarded);
            self.clear();
            render(&self.fallback_message, 0, colors::red())?;
            return Ok(OverlayPass::Recovered { error, discarded });
        }

        let drawn = self.messages.len();
        for message in &mut self.messages {
            message.tick(elapsed_seconds);
        }

        // Back to front so removal never shifts an index still to be visited.
        for index in (0..self.messages.len()).rev() {
            if self.messages[index].is_expired() {
                self.messages.remove(index);
            }
        }

        Ok(OverlayPass::Rendered {
            drawn,
            expired: drawn - self.messages.len(),
        })
    }

    /// Messages in slot order
    pub fn messages(&self) -> &[DebugMessage] {
        &self.messages
    }

    /// Number of messages
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether the buffer is empty
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Drop every message
    pub fn clear(&mut self) {
        self.messages.clear();
    }
}
