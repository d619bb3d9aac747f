//! Archimedean spiral around the origin.
use std::f64::consts::PI;

use glam::DVec2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::layout::Instance;
use crate::sampling::{sample_by_progress, Baseline, PathSampling};

/// Angle `t * turns * 2π`, radius `t * radius`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpiralPath {
    #[cfg_attr(feature = "serde", serde(rename = "spiralTurns"))]
    pub turns: f64,
    /// Radius reached at `t = 1`.
    #[cfg_attr(feature = "serde", serde(rename = "spiralRadius"))]
    pub radius: f64,
}

impl Default for SpiralPath {
    fn default() -> Self {
        Self {
            turns: 3.0,
            radius: 200.0,
        }
    }
}

impl PathSampling for SpiralPath {
    fn sample(&self, count: usize, _baseline: &Baseline) -> Result<Vec<Instance>> {
        Ok(sample_by_progress(count, |t| {
            let theta = t * self.turns * 2.0 * PI;
            let r = t * self.radius;
            DVec2::new(r * theta.cos(), r * theta.sin())
        }))
    }
}
