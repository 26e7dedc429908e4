//! Actors
//!
//! An actor is anything that takes part in the per-frame cycle. Behaviour
//! comes in facets: some actors only update, some only draw, some do both,
//! and light-emitting actors additionally expose their [`PointLight`].
//! The facets an actor has are declared once through
//! [`Actor::capabilities`] and cached by the registry.

pub mod registry;

pub use registry::{ActorEntry, ActorRegistry, Registration};

use crate::context::FrameContext;
use crate::lighting::PointLight;
use crate::render::{RenderBackend, RenderError};
use bitflags::bitflags;
use thiserror::Error;

/// Identity assigned to an actor when the registry accepts it
///
/// Identities start at zero, increase by one per accepted actor and are
/// never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ActorId(u32);

impl ActorId {
    pub(crate) fn new(id: u32) -> Self {
        Self(id)
    }

    /// Raw identity value
    pub fn id(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for ActorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

bitflags! {
    /// Per-frame facets an actor takes part in
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Capabilities: u8 {
        /// Receives `update` every frame
        const UPDATE = 0b0001;
        /// Receives `draw` every frame
        const DRAW = 0b0010;
        /// Emits light and is tracked by the active light set
        const LIGHT = 0b0100;
    }
}

/// Failure raised by an actor's own logic
#[derive(Error, Debug)]
pub enum ActorError {
    /// A draw call the actor issued failed
    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    /// Actor specific failure
    #[error("{0}")]
    Custom(String),
}

/// A unit of simulated and rendered behaviour
///
/// Only the facets listed in [`Actor::capabilities`] are ever called; the
/// default bodies make it possible to implement just the ones an actor uses.
pub trait Actor {
    /// Name used for uniqueness checks in the registry
    fn name(&self) -> &str;

    /// Facets this actor takes part in, read once at registration
    fn capabilities(&self) -> Capabilities;

    /// Called exactly once before the first update or draw
    fn init(&mut self, _ctx: &mut FrameContext) -> Result<(), ActorError> {
        Ok(())
    }

    /// Advance simulation by `elapsed_ms` whole milliseconds
    fn update(&mut self, _ctx: &mut FrameContext, _elapsed_ms: u32) -> Result<(), ActorError> {
        Ok(())
    }

    /// Issue draw calls for this frame
    fn draw(
        &mut self,
        _ctx: &mut FrameContext,
        _renderer: &mut dyn RenderBackend,
        _elapsed_ms: u32,
    ) -> Result<(), ActorError> {
        Ok(())
    }

    /// Light emitted by this actor, for actors with [`Capabilities::LIGHT`]
    fn light(&self) -> Option<&PointLight> {
        None
    }
}
