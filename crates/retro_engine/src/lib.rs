//! # Retro Engine
//!
//! The per-frame core of the RetroShooter game: a registry of actors that
//! are initialized once and then updated and drawn every frame in a stable
//! order, a set of active lights derived during the update pass, and an
//! on-screen debug overlay whose lines expire after a time budget.
//!
//! Rendering, input and timing are provided by the host through
//! [`render::RenderBackend`], [`input::InputSource`] and
//! [`foundation::time::TimeSource`].
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use retro_engine::prelude::*;
//!
//! struct Game;
//!
//! impl Application for Game {
//!     fn load_content<R: RenderBackend>(&mut self, engine: &mut Engine<R>) -> Result<(), AppError> {
//!         engine.add_debug_message("hello", 2.0, colors::white());
//!         Ok(())
//!     }
//! }
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut engine = Engine::new(
//!         EngineConfig::default(),
//!         HeadlessBackend::new(),
//!         Box::new(ScriptedInput::quit_after(60)),
//!         Box::new(Timer::new()),
//!     )?;
//!     engine.run(&mut Game)?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod foundation;
pub mod config;
pub mod actor;
pub mod lighting;
pub mod debug;
pub mod render;
pub mod input;

mod application;
mod context;
mod engine;

pub use application::{Application, AppError};
pub use context::FrameContext;
pub use engine::{Engine, EngineError, TickOutcome, CURSOR_HIDDEN_MESSAGE};

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        Application, AppError,
        Engine, EngineError, FrameContext, TickOutcome,
        actor::{Actor, ActorError, ActorId, Capabilities, Registration},
        config::{Config, EngineConfig},
        debug::DebugOverlay,
        foundation::{
            math::{colors, Color, Vec2, Vec3},
            time::{FixedTimeSource, Timer},
        },
        input::{InputSource, InputState, ScriptedInput},
        lighting::PointLight,
        render::{FontHandle, HeadlessBackend, RenderBackend, RenderError},
    };
}
