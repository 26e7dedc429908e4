//! Input side channels polled once per tick
//!
//! The frame core only needs two facts from the host's input layer: has
//! the player asked to quit, and is the cursor toggle key held.

use std::collections::VecDeque;

/// Input facts sampled at the start of a tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    /// Escape or gamepad back pressed
    pub quit_requested: bool,
    /// Cursor toggle key (space) currently held
    pub toggle_cursor_held: bool,
}

impl InputState {
    /// State with quit requested
    pub fn quit() -> Self {
        Self {
            quit_requested: true,
            ..Self::default()
        }
    }

    /// State with the cursor toggle key held
    pub fn toggle_held() -> Self {
        Self {
            toggle_cursor_held: true,
            ..Self::default()
        }
    }
}

/// Host input polled once per tick
pub trait InputSource {
    /// Sample the current input state
    fn poll(&mut self) -> InputState;
}

/// Press-edge detector for a held key
///
/// Fires once when the key goes down and re-arms when it is released.
#[derive(Debug, Default, Clone, Copy)]
pub struct KeyLatch {
    down: bool,
}

impl KeyLatch {
    /// Feed the current held state; returns true on the press edge
    pub fn pressed(&mut self, held: bool) -> bool {
        let edge = held && !self.down;
        self.down = held;
        edge
    }
}

/// Input source replaying a fixed script, one state per tick
///
/// After the script runs out it keeps returning the idle state.
#[derive(Debug, Default, Clone)]
pub struct ScriptedInput {
    script: VecDeque<InputState>,
}

impl ScriptedInput {
    /// Replay `script`
    pub fn new(script: impl IntoIterator<Item = InputState>) -> Self {
        Self {
            script: script.into_iter().collect(),
        }
    }

    /// Idle for `frames - 1` ticks, then request quit
    pub fn quit_after(frames: usize) -> Self {
        let idle = frames.saturating_sub(1);
        Self::new(
            std::iter::repeat(InputState::default())
                .take(idle)
                .chain(std::iter::once(InputState::quit())),
        )
    }

    /// Ticks left in the script
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> InputState {
        self.script.pop_front().unwrap_or_default()
    }
}
