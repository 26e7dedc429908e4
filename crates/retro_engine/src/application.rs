//! Application trait and lifecycle management

use crate::engine::{Engine, EngineError};
use crate::render::RenderBackend;
use thiserror::Error;

/// Application lifecycle trait
///
/// Implement this trait to plug a game into [`Engine::run`].
pub trait Application {
    /// Load content and populate the world
    ///
    /// Called once before the first tick. This is where the level loader
    /// registers the initial batch of actors and picks the camera.
    fn load_content<R: RenderBackend>(&mut self, engine: &mut Engine<R>) -> Result<(), AppError>;

    /// Cleanup the application
    ///
    /// Called after the last tick of a run that ended normally.
    fn cleanup<R: RenderBackend>(&mut self, _engine: &mut Engine<R>) {}
}

/// Application-level errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Engine error propagated to application level
    #[error("Engine error: {0}")]
    Engine(#[from] EngineError),

    /// Asset or level loading error
    #[error("Asset error: {0}")]
    Asset(String),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),

    /// Custom application error
    #[error("Application error: {0}")]
    Custom(String),
}
