//! Game actors used by the demo level

use retro_engine::prelude::*;

/// Static level geometry
pub struct Wall {
    name: String,
    position: Vec3,
}

impl Wall {
    /// Wall at `position`
    pub fn new(name: impl Into<String>, position: Vec3) -> Self {
        Self {
            name: name.into(),
            position,
        }
    }
}

impl Actor for Wall {
    fn name(&self) -> &str {
        &self.name
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities::DRAW
    }

    fn draw(
        &mut self,
        _ctx: &mut FrameContext,
        renderer: &mut dyn RenderBackend,
        _elapsed_ms: u32,
    ) -> Result<(), ActorError> {
        renderer.draw_model("wall", self.position, colors::white())?;
        Ok(())
    }
}

/// First person camera that walks forward
pub struct PlayerCamera {
    name: String,
    id: ActorId,
    position: Vec3,
    /// Units per second
    speed: f32,
}

impl PlayerCamera {
    /// Camera that will be registered as `id`
    ///
    /// `id` must be read from `Engine::next_actor_id` right before the
    /// camera is added.
    pub fn new(name: impl Into<String>, id: ActorId, speed: f32) -> Self {
        Self {
            name: name.into(),
            id,
            position: Vec3::zeros(),
            speed,
        }
    }
}

impl Actor for PlayerCamera {
    fn name(&self) -> &str {
        &self.name
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities::UPDATE
    }

    fn init(&mut self, ctx: &mut FrameContext) -> Result<(), ActorError> {
        ctx.add_debug_message(format!("Player {} spawned", self.id), 2.0, colors::white());
        Ok(())
    }

    fn update(&mut self, ctx: &mut FrameContext, elapsed_ms: u32) -> Result<(), ActorError> {
        self.position.z += self.speed * elapsed_ms as f32 / 1000.0;
        if ctx.frame_index() % 60 == 0 {
            ctx.add_debug_message(
                format!("pos {:.2} {:.2} {:.2}", self.position.x, self.position.y, self.position.z),
                0.5,
                colors::white(),
            );
        }
        Ok(())
    }
}

/// Flickering point light
pub struct Lamp {
    name: String,
    light: PointLight,
    base_intensity: f32,
    age_ms: u64,
}

impl Lamp {
    /// Lamp emitting `light`
    pub fn new(name: impl Into<String>, light: PointLight) -> Self {
        Self {
            name: name.into(),
            base_intensity: light.intensity,
            light,
            age_ms: 0,
        }
    }
}

impl Actor for Lamp {
    fn name(&self) -> &str {
        &self.name
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities::UPDATE | Capabilities::DRAW | Capabilities::LIGHT
    }

    fn update(&mut self, _ctx: &mut FrameContext, elapsed_ms: u32) -> Result<(), ActorError> {
        self.age_ms += u64::from(elapsed_ms);
        let phase = self.age_ms as f32 / 1000.0;
        self.light.intensity = self.base_intensity * (0.85 + 0.15 * (phase * 7.0).sin());
        Ok(())
    }

    fn draw(
        &mut self,
        _ctx: &mut FrameContext,
        renderer: &mut dyn RenderBackend,
        _elapsed_ms: u32,
    ) -> Result<(), ActorError> {
        renderer.draw_model("lamp", self.light.position, self.light.color)?;
        Ok(())
    }

    fn light(&self) -> Option<&PointLight> {
        Some(&self.light)
    }
}
