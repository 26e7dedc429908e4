//! Rendering interface
//!
//! The frame core does not own a graphics API. It talks to whatever
//! backend the host provides through [`RenderBackend`]: one frame bracket
//! per tick, text for the debug overlay, and the model draw calls actors
//! issue on their own.

pub mod headless;

pub use headless::{DrawCommand, HeadlessBackend};

use crate::actor::ActorId;
use crate::foundation::math::{Color, Vec2, Vec3};
use thiserror::Error;

/// Handle to a font loaded by the backend
#[derive(Debug, Clone, PartialEq)]
pub struct FontHandle {
    name: String,
    first_glyph: char,
    last_glyph: char,
}

impl FontHandle {
    /// Font covering the contiguous glyph range `first..=last`
    pub fn new(name: impl Into<String>, first_glyph: char, last_glyph: char) -> Self {
        Self {
            name: name.into(),
            first_glyph,
            last_glyph,
        }
    }

    /// Font covering printable ASCII, the default sprite font character set
    pub fn ascii(name: impl Into<String>) -> Self {
        Self::new(name, ' ', '~')
    }

    /// Asset name of the font
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the font has a glyph for `c`
    pub fn supports(&self, c: char) -> bool {
        (self.first_glyph..=self.last_glyph).contains(&c)
    }

    /// First character of `text` the font cannot draw
    pub fn first_unsupported(&self, text: &str) -> Option<char> {
        text.chars().find(|&c| !self.supports(c))
    }
}

/// Per-frame state handed to the backend when the draw phase opens
#[derive(Debug, Clone, PartialEq)]
pub struct FrameInfo {
    /// Index of the tick being drawn
    pub frame_index: u64,
    /// Colour to clear the target to
    pub clear_color: Color,
    /// Current ambient light
    pub ambient_light: Color,
    /// Actor used as the camera, if any
    pub camera: Option<ActorId>,
    /// Number of lights in the active light set
    pub active_lights: usize,
}

/// Rendering backend errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    /// Text contains a character the font has no glyph for
    #[error("Font '{font}' cannot draw character {character:?}")]
    UnsupportedCharacter {
        /// Font that was used
        font: String,
        /// Offending character
        character: char,
    },

    /// Requested font is not available
    #[error("Font not found: {0}")]
    FontNotFound(String),

    /// Draw call issued outside `begin_frame` / `end_frame`
    #[error("No frame in progress")]
    NoFrameInProgress,

    /// Any other backend failure
    #[error("Backend error: {0}")]
    Backend(String),
}

/// Narrow interface to the host's renderer
pub trait RenderBackend {
    /// Load a font once at startup
    fn load_font(&mut self, name: &str) -> Result<FontHandle, RenderError>;

    /// Open the draw phase of a frame (clear, set up state)
    fn begin_frame(&mut self, frame: &FrameInfo) -> Result<(), RenderError>;

    /// Draw one line of text in screen space
    fn draw_text(
        &mut self,
        font: &FontHandle,
        text: &str,
        position: Vec2,
        color: Color,
    ) -> Result<(), RenderError>;

    /// Draw a named model at a world position
    fn draw_model(&mut self, model: &str, position: Vec3, tint: Color) -> Result<(), RenderError>;

    /// Close the draw phase and present
    fn end_frame(&mut self) -> Result<(), RenderError>;
}
