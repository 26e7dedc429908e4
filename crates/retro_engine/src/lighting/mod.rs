//! Lighting
//!
//! Light data carried by light-emitting actors, and the active light set
//! the renderer reads each frame.

pub mod active_set;

pub use active_set::ActiveLightSet;

use crate::foundation::math::{Color, Vec3};

/// Point light emitted by an actor
#[derive(Debug, Clone, PartialEq)]
pub struct PointLight {
    /// World position
    pub position: Vec3,
    /// RGB colour with alpha unused
    pub color: Color,
    /// Intensity multiplier
    pub intensity: f32,
    /// Maximum distance the light reaches
    pub range: f32,
}

impl PointLight {
    /// Create a point light
    pub fn new(position: Vec3, color: Color, intensity: f32, range: f32) -> Self {
        Self {
            position,
            color,
            intensity,
            range,
        }
    }

    /// Whether `point` lies within the light's range
    pub fn reaches(&self, point: &Vec3) -> bool {
        (self.position - point).norm() <= self.range
    }
}
