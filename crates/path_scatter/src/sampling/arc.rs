//! Circular arc between two angles.
use std::f64::consts::PI;

use glam::DVec2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::layout::Instance;
use crate::sampling::{sample_by_progress, Baseline, PathSampling};

/// Angle interpolated linearly from `start_angle` to `end_angle` (degrees).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcPath {
    #[cfg_attr(feature = "serde", serde(rename = "arcStartAngle"))]
    pub start_angle: f64,
    #[cfg_attr(feature = "serde", serde(rename = "arcEndAngle"))]
    pub end_angle: f64,
    #[cfg_attr(feature = "serde", serde(rename = "arcRadius"))]
    pub radius: f64,
}

impl Default for ArcPath {
    fn default() -> Self {
        Self {
            start_angle: 0.0,
            end_angle: 180.0,
            radius: 200.0,
        }
    }
}

/// `(deg * π) / 180`, rounded in that order.
#[inline]
fn degrees_to_radians(deg: f64) -> f64 {
    (deg * PI) / 180.0
}

impl PathSampling for ArcPath {
    fn sample(&self, count: usize, _baseline: &Baseline) -> Result<Vec<Instance>> {
        let start = degrees_to_radians(self.start_angle);
        let range = degrees_to_radians(self.end_angle) - start;
        Ok(sample_by_progress(count, |t| {
            let theta = start + t * range;
            DVec2::new(self.radius * theta.cos(), self.radius * theta.sin())
        }))
    }
}
