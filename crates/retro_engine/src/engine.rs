//! Core engine implementation
//!
//! [`Engine`] drives one tick at a time:
//!
//! 1. Pre-update: poll input, note a quit request, initialize actors that
//!    have not run `init` yet, read the frame time once.
//! 2. Update: every updatable actor in registry order, each followed by an
//!    active light refresh; then the cursor toggle.
//! 3. Draw: every drawable actor in the same order with the same frame
//!    time, then the debug overlay is drawn and aged.
//!
//! A quit request never cuts a tick short. The tick that sees it finishes
//! drawing and reports [`TickOutcome::Exit`].

use crate::{
    actor::{Actor, ActorError, ActorId, ActorRegistry, Capabilities, Registration},
    application::Application,
    config::{ConfigError, EngineConfig},
    context::FrameContext,
    debug::{DebugOverlay, OverlayPass},
    foundation::{
        math::{colors, Color, Vec2},
        time::{FrameTime, TimeSource},
    },
    input::{InputSource, KeyLatch},
    lighting::{ActiveLightSet, PointLight},
    render::{FontHandle, FrameInfo, RenderBackend, RenderError},
};
use thiserror::Error;

/// Shown while the cursor is hidden
pub const CURSOR_HIDDEN_MESSAGE: &str = "Mouse is hidden. Press SPACEBAR to show mouse";

/// Whether the loop should keep going after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Run another tick
    Continue,
    /// Quit was requested; this tick was the last one
    Exit,
}

/// Main engine struct
///
/// Owns the actor registry, the active light set and the frame context,
/// and talks to the host through the render backend, input source and time
/// source it was built with.
pub struct Engine<R: RenderBackend> {
    registry: ActorRegistry,
    lights: ActiveLightSet,
    context: FrameContext,
    renderer: R,
    input: Box<dyn InputSource>,
    time: Box<dyn TimeSource>,
    font: FontHandle,
    config: EngineConfig,
    cursor_toggle: KeyLatch,
    running: bool,
}

impl<R: RenderBackend> Engine<R> {
    /// Create a new engine instance
    ///
    /// Loads the overlay font from the backend; no tick runs yet.
    pub fn new(
        config: EngineConfig,
        mut renderer: R,
        input: Box<dyn InputSource>,
        time: Box<dyn TimeSource>,
    ) -> Result<Self, EngineError> {
        log::info!("Initializing engine...");

        let font = renderer
            .load_font(&config.overlay.font)
            .map_err(|e| EngineError::InitializationFailed(format!("Overlay font: {}", e)))?;
        let overlay = DebugOverlay::with_fallback_message(config.overlay.fallback_message.clone());
        let context = FrameContext::new(config.ambient_light, overlay);

        Ok(Self {
            registry: ActorRegistry::new(),
            lights: ActiveLightSet::new(),
            context,
            renderer,
            input,
            time,
            font,
            config,
            cursor_toggle: KeyLatch::default(),
            running: true,
        })
    }

    /// Register an actor
    ///
    /// A name that is already taken leaves the engine untouched and hands
    /// the actor back in [`Registration::Rejected`].
    pub fn add_actor(&mut self, actor: impl Actor + 'static) -> Registration {
        self.registry.add(Box::new(actor))
    }

    /// Register an already boxed actor
    pub fn add_boxed_actor(&mut self, actor: Box<dyn Actor>) -> Registration {
        self.registry.add(actor)
    }

    /// Identity the next accepted actor will receive
    pub fn next_actor_id(&self) -> ActorId {
        self.registry.next_identity()
    }

    /// Initialize every actor registered so far
    ///
    /// Called by [`Engine::run`] after content is loaded. Actors added later
    /// are initialized at the start of the next tick.
    pub fn start(&mut self) -> Result<(), EngineError> {
        let initialized = self.initialize_pending()?;
        log::info!("Engine started with {} actor(s)", initialized);
        Ok(())
    }

    fn initialize_pending(&mut self) -> Result<usize, EngineError> {
        let mut initialized = 0;
        for entry in self.registry.iter_mut().filter(|entry| !entry.is_initialized()) {
            if let Err(source) = entry.actor_mut().init(&mut self.context) {
                return Err(EngineError::actor(entry.name(), source));
            }
            entry.mark_initialized();
            initialized += 1;
        }
        Ok(initialized)
    }

    /// Run one full pre-update, update, draw cycle
    pub fn tick(&mut self) -> Result<TickOutcome, EngineError> {
        let input = self.input.poll();
        if input.quit_requested && self.running {
            log::info!("Quit requested, finishing frame {}", self.context.frame_index());
            self.running = false;
        }
        self.initialize_pending()?;

        let time = FrameTime::from_duration(self.time.frame_delta());
        let elapsed_ms = time.millis();

        self.update_actors(elapsed_ms)?;
        if self.cursor_toggle.pressed(input.toggle_cursor_held) {
            self.context.cursor_visible = !self.context.cursor_visible;
            log::debug!("Cursor visible: {}", self.context.cursor_visible);
        }

        self.draw_frame(time)?;

        log::trace!("Frame {} done in {} ms", self.context.frame_index(), elapsed_ms);
        self.context.advance_frame();

        Ok(if self.running {
            TickOutcome::Continue
        } else {
            TickOutcome::Exit
        })
    }

    fn update_actors(&mut self, elapsed_ms: u32) -> Result<(), EngineError> {
        for entry in self.registry.iter_mut() {
            if entry.capabilities().contains(Capabilities::UPDATE) {
                if let Err(source) = entry.actor_mut().update(&mut self.context, elapsed_ms) {
                    return Err(EngineError::actor(entry.name(), source));
                }
            }
            self.lights.refresh(entry);
        }
        Ok(())
    }

    fn draw_frame(&mut self, time: FrameTime) -> Result<(), EngineError> {
        let frame = FrameInfo {
            frame_index: self.context.frame_index(),
            clear_color: self.config.frame.clear_color,
            ambient_light: self.context.ambient_light,
            camera: self.context.current_camera,
            active_lights: self.lights.len(),
        };
        self.renderer.begin_frame(&frame)?;

        let elapsed_ms = time.millis();
        for entry in self.registry.iter_mut() {
            if !entry.capabilities().contains(Capabilities::DRAW) {
                continue;
            }
            if let Err(source) = entry.actor_mut().draw(&mut self.context, &mut self.renderer, elapsed_ms) {
                return Err(EngineError::actor(entry.name(), source));
            }
        }

        if self.config.overlay.show_frame_time {
            self.context.debug.append(elapsed_ms.to_string(), 0.0, colors::blue());
        }
        if !self.context.cursor_visible {
            self.context.debug.append(CURSOR_HIDDEN_MESSAGE, 0.0, colors::azure());
        }

        let line_height = self.config.overlay.line_height;
        let font = &self.font;
        let renderer = &mut self.renderer;
        let pass = self.context.debug.render_and_age(time.seconds(), |text, slot, color| {
            renderer.draw_text(font, text, Vec2::new(0.0, slot as f32 * line_height), color)
        })?;
        if let OverlayPass::Recovered { error, .. } = pass {
            log::debug!("Overlay recovered from: {}", error);
        }

        self.renderer.end_frame()?;
        Ok(())
    }

    /// Load content, start, and tick until quit or `frame.max_frames`
    ///
    /// Returns the number of ticks run.
    pub fn run<A: Application>(&mut self, app: &mut A) -> Result<u64, EngineError> {
        app.load_content(self)
            .map_err(|e| EngineError::ApplicationError(format!("Load content: {}", e)))?;
        self.start()?;

        log::info!("Starting main loop...");
        let max_frames = self.config.frame.max_frames;
        let mut frames = 0;
        loop {
            let outcome = self.tick()?;
            frames += 1;
            if outcome == TickOutcome::Exit {
                break;
            }
            if max_frames.is_some_and(|max| frames >= max) {
                log::info!("Reached frame limit of {}", frames);
                break;
            }
        }

        app.cleanup(self);
        log::info!("Engine shutdown complete after {} frame(s)", frames);
        Ok(frames)
    }

    /// Request engine shutdown after the current tick
    pub fn quit(&mut self) {
        log::info!("Engine shutdown requested");
        self.running = false;
    }

    /// Whether no quit has been requested
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Post a debug message
    pub fn add_debug_message(&mut self, text: impl Into<String>, duration: f32, color: Color) {
        self.context.add_debug_message(text, duration, color);
    }

    /// Lights in the active set with their data, in promotion order
    pub fn active_lights(&self) -> impl Iterator<Item = (ActorId, &PointLight)> + '_ {
        self.lights.iter().filter_map(move |id| {
            self.registry
                .get(id)
                .and_then(|entry| entry.actor().light())
                .map(|light| (id, light))
        })
    }

    /// Get the actor registry
    pub fn registry(&self) -> &ActorRegistry {
        &self.registry
    }

    /// Get the active light set
    pub fn lights(&self) -> &ActiveLightSet {
        &self.lights
    }

    /// Get the frame context
    pub fn context(&self) -> &FrameContext {
        &self.context
    }

    /// Get mutable access to the frame context
    pub fn context_mut(&mut self) -> &mut FrameContext {
        &mut self.context
    }

    /// Get the render backend
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Get the overlay font
    pub fn font(&self) -> &FontHandle {
        &self.font
    }

    /// Get the engine configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}

/// Engine-level errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// Initialization error
    #[error("Engine initialization failed: {0}")]
    InitializationFailed(String),

    /// An actor failed during init, update or draw
    #[error("Actor '{name}' failed: {source}")]
    Actor {
        /// Name of the failing actor
        name: String,
        /// What went wrong
        #[source]
        source: ActorError,
    },

    /// Rendering error outside the debug overlay
    #[error("Rendering error: {0}")]
    RenderError(#[from] RenderError),

    /// Application error
    #[error("Application error: {0}")]
    ApplicationError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ConfigError),
}

impl EngineError {
    fn actor(name: &str, source: ActorError) -> Self {
        Self::Actor {
            name: name.to_string(),
            source,
        }
    }
}
