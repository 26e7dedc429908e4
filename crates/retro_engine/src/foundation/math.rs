//! Math utilities and types
//!
//! Vector aliases over `nalgebra` plus the handful of named colours the
//! frame loop and the debug overlay use.

pub use nalgebra::{Vector2, Vector3, Vector4};

/// 2D vector type (screen positions)
pub type Vec2 = Vector2<f32>;

/// 3D vector type (world positions)
pub type Vec3 = Vector3<f32>;

/// 4D vector type
pub type Vec4 = Vector4<f32>;

/// RGBA colour, each channel in `0.0..=1.0`
pub type Color = Vec4;

/// Named colours
pub mod colors {
    use super::Color;

    /// Opaque white, the default debug message colour
    pub fn white() -> Color {
        Color::new(1.0, 1.0, 1.0, 1.0)
    }

    /// Opaque black
    pub fn black() -> Color {
        Color::new(0.0, 0.0, 0.0, 1.0)
    }

    /// Opaque red, used for the overlay fallback message
    pub fn red() -> Color {
        Color::new(1.0, 0.0, 0.0, 1.0)
    }

    /// Opaque blue, used for the frame time line
    pub fn blue() -> Color {
        Color::new(0.0, 0.0, 1.0, 1.0)
    }

    /// Azure (240, 255, 255)
    pub fn azure() -> Color {
        Color::new(240.0 / 255.0, 1.0, 1.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_colors_are_opaque() {
        for color in [colors::white(), colors::black(), colors::red(), colors::blue(), colors::azure()] {
            assert_eq!(color.w, 1.0);
        }
    }

    #[test]
    fn test_azure_channels() {
        let azure = colors::azure();
        assert!(azure.x < 1.0);
        assert_eq!(azure.y, 1.0);
        assert_eq!(azure.z, 1.0);
    }
}
