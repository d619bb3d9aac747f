//! Full ellipse centered on the origin.
use std::f64::consts::PI;

use glam::DVec2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::layout::Instance;
use crate::sampling::{sample_by_progress, Baseline, PathSampling};

/// Angle `t * 2π`; `x = radius_x cos`, `y = radius_y sin`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EllipsePath {
    #[cfg_attr(feature = "serde", serde(rename = "ellipseRadiusX"))]
    pub radius_x: f64,
    #[cfg_attr(feature = "serde", serde(rename = "ellipseRadiusY"))]
    pub radius_y: f64,
}

impl Default for EllipsePath {
    fn default() -> Self {
        Self {
            radius_x: 250.0,
            radius_y: 150.0,
        }
    }
}

impl PathSampling for EllipsePath {
    fn sample(&self, count: usize, _baseline: &Baseline) -> Result<Vec<Instance>> {
        Ok(sample_by_progress(count, |t| {
            let theta = t * 2.0 * PI;
            DVec2::new(self.radius_x * theta.cos(), self.radius_y * theta.sin())
        }))
    }
}
