//! RetroShooter demo application
//!
//! Runs the game's frame loop headlessly: a wall and the player camera are
//! placed first, the test level adds the rest, and a scripted input hides
//! the cursor for a while before asking to quit.
//!
//! Usage: `retro_shooter [config.toml|config.ron]`

mod actors;
mod level;

use actors::{PlayerCamera, Wall};
use level::Level;
use retro_engine::foundation::logging;
use retro_engine::prelude::*;

const DEFAULT_LEVEL: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/levels/test.ron");

/// The game: owns nothing per frame, only loads the world
struct RetroShooter {
    level_path: String,
}

impl Application for RetroShooter {
    fn load_content<R: RenderBackend>(&mut self, engine: &mut Engine<R>) -> Result<(), AppError> {
        log::info!("Loading content...");

        let _ = engine.add_actor(Wall::new("wall", Vec3::zeros()));

        let player_id = engine.next_actor_id();
        match engine.add_actor(PlayerCamera::new("player", player_id, 1.5)) {
            Registration::Accepted(id) => engine.context_mut().current_camera = Some(id),
            Registration::Rejected(_) => {
                return Err(AppError::Custom("player name already taken".to_string()))
            }
        }

        let level = Level::load(&self.level_path).map_err(|e| AppError::Asset(e.to_string()))?;
        level.spawn_into(engine);
        Ok(())
    }

    fn cleanup<R: RenderBackend>(&mut self, engine: &mut Engine<R>) {
        for (id, light) in engine.active_lights() {
            log::info!(
                "Active light {} at ({:.1}, {:.1}, {:.1}) intensity {:.2}",
                id,
                light.position.x,
                light.position.y,
                light.position.z,
                light.intensity
            );
        }
    }
}

/// Hide the cursor for two seconds of the run, then quit
fn input_script(frames: usize) -> ScriptedInput {
    let script = (0..frames).map(|frame| match frame {
        60 | 61 | 180 => InputState::toggle_held(),
        f if f + 1 == frames => InputState::quit(),
        _ => InputState::default(),
    });
    ScriptedInput::new(script)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = match std::env::args().nth(1) {
        Some(path) => EngineConfig::load_from_file(&path)?,
        None => EngineConfig::default(),
    };
    logging::init_with_filter(&config.logging.level);

    let mut engine = Engine::new(
        config,
        HeadlessBackend::new(),
        Box::new(input_script(240)),
        Box::new(FixedTimeSource::from_millis(16)),
    )?;

    let mut game = RetroShooter {
        level_path: DEFAULT_LEVEL.to_string(),
    };
    let frames = engine.run(&mut game)?;

    log::info!(
        "Ran {} frame(s) with {} actor(s) and {} active light(s)",
        frames,
        engine.registry().len(),
        engine.lights().len()
    );
    Ok(())
}
