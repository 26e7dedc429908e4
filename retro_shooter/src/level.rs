//! Level files
//!
//! Levels are RON documents listing the actors to spawn. Names must be
//! unique; a repeated name is skipped by the registry like any other
//! duplicate.

use crate::actors::{Lamp, Wall};
use retro_engine::prelude::*;
use serde::Deserialize;
use thiserror::Error;

/// A parsed level
#[derive(Debug, Clone, Deserialize)]
pub struct Level {
    /// Display name
    pub name: String,
    /// Ambient light as RGBA, if the level sets one
    #[serde(default)]
    pub ambient: Option<[f32; 4]>,
    /// Actors in spawn order
    pub actors: Vec<ActorSpec>,
}

/// One actor entry in a level file
#[derive(Debug, Clone, Deserialize)]
pub enum ActorSpec {
    /// Static wall
    Wall {
        /// Unique actor name
        name: String,
        /// World position
        position: [f32; 3],
    },
    /// Point light
    Lamp {
        /// Unique actor name
        name: String,
        /// World position
        position: [f32; 3],
        /// RGB colour
        color: [f32; 3],
        /// Intensity multiplier
        intensity: f32,
        /// Reach in world units
        range: f32,
    },
}

/// What loading a level did
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LevelStats {
    /// Actors added to the registry
    pub spawned: usize,
    /// Entries skipped because the name was taken
    pub skipped: usize,
}

/// Level loading errors
#[derive(Error, Debug)]
pub enum LevelError {
    /// Could not read the file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// File is not a valid level
    #[error("Parse error: {0}")]
    Parse(#[from] ron::error::SpannedError),
}

impl Level {
    /// Parse a level from RON text
    pub fn parse(source: &str) -> Result<Self, LevelError> {
        Ok(ron::from_str(source)?)
    }

    /// Read and parse a level file
    pub fn load(path: &str) -> Result<Self, LevelError> {
        let source = std::fs::read_to_string(path)?;
        Self::parse(&source)
    }

    /// Register every actor of the level with the engine
    pub fn spawn_into<R: RenderBackend>(&self, engine: &mut Engine<R>) -> LevelStats {
        let mut stats = LevelStats::default();
        if let Some([r, g, b, a]) = self.ambient {
            engine.context_mut().ambient_light = Color::new(r, g, b, a);
        }

        for spec in &self.actors {
            let actor: Box<dyn Actor> = match spec {
                ActorSpec::Wall { name, position } => {
                    Box::new(Wall::new(name.clone(), Vec3::from(*position)))
                }
                ActorSpec::Lamp {
                    name,
                    position,
                    color,
                    intensity,
                    range,
                } => {
                    let [r, g, b] = *color;
                    let light = PointLight::new(
                        Vec3::from(*position),
                        Color::new(r, g, b, 1.0),
                        *intensity,
                        *range,
                    );
                    Box::new(Lamp::new(name.clone(), light))
                }
            };

            match engine.add_boxed_actor(actor) {
                Registration::Accepted(_) => stats.spawned += 1,
                Registration::Rejected(actor) => {
                    log::debug!("Level '{}': name '{}' already taken", self.name, actor.name());
                    stats.skipped += 1;
                }
            }
        }

        log::info!(
            "Loaded level '{}': {} actor(s) spawned, {} skipped",
            self.name,
            stats.spawned,
            stats.skipped
        );
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL_LEVEL: &str = r#"
        (
            name: "corridor",
            ambient: Some((0.1, 0.1, 0.15, 1.0)),
            actors: [
                Wall(name: "wall", position: (0.0, 0.0, 4.0)),
                Lamp(name: "lamp", position: (0.0, 2.0, 2.0), color: (1.0, 0.8, 0.6), intensity: 1.5, range: 6.0),
                Wall(name: "wall", position: (0.0, 0.0, 8.0)),
            ],
        )
    "#;

    fn engine() -> Engine<HeadlessBackend> {
        Engine::new(
            EngineConfig::default(),
            HeadlessBackend::new(),
            Box::new(ScriptedInput::default()),
            Box::new(FixedTimeSource::from_millis(16)),
        )
        .unwrap()
    }

    #[test]
    fn test_parse_level() {
        let level = Level::parse(SMALL_LEVEL).unwrap();
        assert_eq!(level.name, "corridor");
        assert_eq!(level.actors.len(), 3);
        assert!(matches!(level.actors[1], ActorSpec::Lamp { range, .. } if range == 6.0));
    }

    #[test]
    fn test_spawn_skips_duplicate_names() {
        let level = Level::parse(SMALL_LEVEL).unwrap();
        let mut engine = engine();
        let stats = level.spawn_into(&mut engine);

        assert_eq!(stats, LevelStats { spawned: 2, skipped: 1 });
        assert_eq!(engine.registry().len(), 2);
        assert_eq!(engine.next_actor_id().id(), 2);
        assert_eq!(engine.context().ambient_light, Color::new(0.1, 0.1, 0.15, 1.0));
    }

    #[test]
    fn test_lamp_becomes_active_light() {
        let level = Level::parse(SMALL_LEVEL).unwrap();
        let mut engine = engine();
        level.spawn_into(&mut engine);
        engine.start().unwrap();
        engine.tick().unwrap();

        let lights: Vec<_> = engine.active_lights().collect();
        assert_eq!(lights.len(), 1);
        assert_eq!(lights[0].1.range, 6.0);
    }

    #[test]
    fn test_shipped_level_parses() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/levels/test.ron");
        let level = Level::load(path).unwrap();
        assert!(!level.actors.is_empty());
    }

    #[test]
    fn test_invalid_level() {
        assert!(matches!(Level::parse("(name: 3)"), Err(LevelError::Parse(_))));
        assert!(matches!(Level::load("does/not/exist.ron"), Err(LevelError::Io(_))));
    }
}
