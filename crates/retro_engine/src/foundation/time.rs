//! Time management utilities
//!
//! The frame loop reads the elapsed time exactly once per tick from a
//! [`TimeSource`] and derives both views of it from the same value:
//! whole milliseconds for actors and seconds for debug message aging.

use std::time::{Duration, Instant};

/// Supplies the elapsed duration of each frame
pub trait TimeSource {
    /// Time since the previous call (or since creation for the first call)
    fn frame_delta(&mut self) -> Duration;
}

/// Elapsed time of one tick, in the two units the frame loop consumes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameTime {
    millis: u32,
}

impl FrameTime {
    /// Truncate a duration to whole milliseconds.
    ///
    /// The sub-millisecond remainder is dropped and never carried into the
    /// next frame, so very long runs drift slightly behind wall time.
    pub fn from_duration(elapsed: Duration) -> Self {
        Self {
            millis: u32::try_from(elapsed.as_millis()).unwrap_or(u32::MAX),
        }
    }

    /// Whole milliseconds, passed to actor update and draw
    pub fn millis(&self) -> u32 {
        self.millis
    }

    /// The same value in seconds (`millis / 1000`), used for overlay aging
    pub fn seconds(&self) -> f32 {
        self.millis as f32 / 1000.0
    }
}

/// High-precision wall clock timer for frame timing
pub struct Timer {
    last_frame: Instant,
    total_time: Duration,
    frame_count: u64,
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

impl Timer {
    /// Create a new timer
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
            total_time: Duration::ZERO,
            frame_count: 0,
        }
    }

    /// Get the total elapsed time handed out so far
    pub fn total_time(&self) -> Duration {
        self.total_time
    }

    /// Get the number of frames measured
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}

impl TimeSource for Timer {
    fn frame_delta(&mut self) -> Duration {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;
        self.total_time += elapsed;
        self.frame_count += 1;
        elapsed
    }
}

/// Time source that reports the same delta every frame
///
/// Used for headless runs and tests where frame timing must be repeatable.
#[derive(Debug, Clone, Copy)]
pub struct FixedTimeSource {
    delta: Duration,
}

impl FixedTimeSource {
    /// Fixed delta of `delta`
    pub fn new(delta: Duration) -> Self {
        Self { delta }
    }

    /// Fixed delta of `millis` milliseconds
    pub fn from_millis(millis: u64) -> Self {
        Self::new(Duration::from_millis(millis))
    }
}

impl TimeSource for FixedTimeSource {
    fn frame_delta(&mut self) -> Duration {
        self.delta
    }
}
