//! Debug module for on-screen diagnostics
//!
//! Holds the transient text overlay: short messages any caller can post,
//! drawn top-down every frame and dropped once their lifetime runs out.

pub mod overlay;

pub use overlay::{DebugMessage, DebugOverlay, OverlayPass, DEFAULT_FALLBACK_MESSAGE};
