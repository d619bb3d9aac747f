//! Layout pipeline turning a scene description into an ordered list of [`Instance`]s.
//!
//! Stages run in a fixed order: sampling (via the [`dispatch`] module), spacing for path
//! distributions, depth to scale, rotation, and an optional depth sort. The [`runner`]
//! module owns that order.
use glam::DVec2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub mod bounds;
pub mod config;
pub mod dispatch;
pub mod runner;
pub mod spacing;
pub mod transform;

/// One positioned, scaled and rotated copy of the scattered shape.
///
/// `x`/`y` are canvas units centered at the origin, `rotation` is in degrees and `depth`
/// is a normalized value in `[0, 1]` that feeds the scale mapping and the depth sort.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Instance {
    pub x: f64,
    pub y: f64,
    pub rotation: f64,
    pub depth: f64,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub scale: Option<f64>,
}

impl Instance {
    /// Unrotated, unscaled instance at `(x, y)`.
    pub fn new(x: f64, y: f64, depth: f64) -> Self {
        Self {
            x,
            y,
            rotation: 0.0,
            depth,
            scale: None,
        }
    }

    pub fn position(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    /// The scale to draw with; unscaled instances draw at 1.
    pub fn effective_scale(&self) -> f64 {
        self.scale.unwrap_or(1.0)
    }

    pub fn with_x(self, x: f64) -> Self {
        Self { x, ..self }
    }

    pub fn with_scale(self, scale: f64) -> Self {
        Self {
            scale: Some(scale),
            ..self
        }
    }

    pub fn with_rotation(self, rotation: f64) -> Self {
        Self { rotation, ..self }
    }
}

impl From<Instance> for mint::Point2<f64> {
    fn from(value: Instance) -> Self {
        mint::Point2 {
            x: value.x,
            y: value.y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builders_return_fresh_copies() {
        let base = Instance::new(1.0, 2.0, 0.5);
        let scaled = base.with_scale(2.0).with_rotation(45.0).with_x(-1.0);
        assert_eq!(base.scale, None);
        assert_eq!(base.rotation, 0.0);
        assert_eq!(scaled.scale, Some(2.0));
        assert_eq!(scaled.rotation, 45.0);
        assert_eq!(scaled.position(), DVec2::new(-1.0, 2.0));
        assert_eq!(scaled.depth, 0.5);
    }

    #[test]
    fn missing_scale_draws_at_one() {
        assert_eq!(Instance::new(0.0, 0.0, 0.0).effective_scale(), 1.0);
        assert_eq!(
            Instance::new(0.0, 0.0, 0.0)
                .with_scale(0.25)
                .effective_scale(),
            0.25
        );
    }

    #[test]
    fn converts_to_mint_point() {
        let p: mint::Point2<f64> = Instance::new(3.0, -4.0, 0.0).into();
        assert_eq!((p.x, p.y), (3.0, -4.0));
    }
}
