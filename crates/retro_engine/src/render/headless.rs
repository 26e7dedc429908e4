//! Headless render backend
//!
//! Records every call instead of talking to a GPU. The demo runs on it and
//! tests inspect what was drawn.

use super::{FontHandle, FrameInfo, RenderBackend, RenderError};
use crate::foundation::math::{Color, Vec2, Vec3};

/// One recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Overlay or HUD text
    Text {
        /// Text drawn
        text: String,
        /// Screen position
        position: Vec2,
        /// Text colour
        color: Color,
    },
    /// Model drawn by an actor
    Model {
        /// Model asset name
        model: String,
        /// World position
        position: Vec3,
        /// Tint colour
        tint: Color,
    },
}

/// Backend that records draw calls of the last completed frame
#[derive(Debug, Default)]
pub struct HeadlessBackend {
    fonts: Vec<String>,
    current: Vec<DrawCommand>,
    last_frame: Vec<DrawCommand>,
    in_frame: bool,
    frames_presented: u64,
    last_info: Option<FrameInfo>,
}

impl HeadlessBackend {
    /// Backend that can load any font name
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend that only knows the given font names
    pub fn with_fonts(fonts: &[&str]) -> Self {
        Self {
            fonts: fonts.iter().map(|name| (*name).to_string()).collect(),
            ..Self::default()
        }
    }

    /// Draw calls of the last presented frame
    pub fn last_frame(&self) -> &[DrawCommand] {
        &self.last_frame
    }

    /// Text lines of the last presented frame, in draw order
    pub fn last_frame_text(&self) -> Vec<&str> {
        self.last_frame
            .iter()
            .filter_map(|command| match command {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                DrawCommand::Model { .. } => None,
            })
            .collect()
    }

    /// Frame state passed to the last `begin_frame`
    pub fn last_frame_info(&self) -> Option<&FrameInfo> {
        self.last_info.as_ref()
    }

    /// Number of frames closed with `end_frame`
    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    fn record(&mut self, command: DrawCommand) -> Result<(), RenderError> {
        if !self.in_frame {
            return Err(RenderError::NoFrameInProgress);
        }
        log::trace!("Headless draw: {:?}", command);
        self.current.push(command);
        Ok(())
    }
}

impl RenderBackend for HeadlessBackend {
    fn load_font(&mut self, name: &str) -> Result<FontHandle, RenderError> {
        if !self.fonts.is_empty() && !self.fonts.iter().any(|font| font == name) {
            return Err(RenderError::FontNotFound(name.to_string()));
        }
        log::info!("Loaded font '{}'", name);
        Ok(FontHandle::ascii(name))
    }

    fn begin_frame(&mut self, frame: &FrameInfo) -> Result<(), RenderError> {
        if self.in_frame {
            return Err(RenderError::Backend("begin_frame called twice".to_string()));
        }
        self.in_frame = true;
        self.current.clear();
        self.last_info = Some(frame.clone());
        Ok(())
    }

    fn draw_text(
        &mut self,
        font: &FontHandle,
        text: &str,
        position: Vec2,
        color: Color,
    ) -> Result<(), RenderError> {
        if let Some(character) = font.first_unsupported(text) {
            return Err(RenderError::UnsupportedCharacter {
                font: font.name().to_string(),
                character,
            });
        }
        self.record(DrawCommand::Text {
            text: text.to_string(),
            position,
            color,
        })
    }

    fn draw_model(&mut self, model: &str, position: Vec3, tint: Color) -> Result<(), RenderError> {
        self.record(DrawCommand::Model {
            model: model.to_string(),
            position,
            tint,
        })
    }

    fn end_frame(&mut self) -> Result<(), RenderError> {
        if !self.in_frame {
            return Err(RenderError::NoFrameInProgress);
        }
        self.in_frame = false;
        self.frames_presented += 1;
        self.last_frame = std::mem::take(&mut self.current);
        Ok(())
    }
}
