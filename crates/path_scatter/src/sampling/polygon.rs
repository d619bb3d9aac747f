//! "Polygon" path: uniform angular steps on the circumscribed circle.
use std::f64::consts::PI;

use glam::DVec2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::layout::Instance;
use crate::sampling::{sample_by_progress, Baseline, PathSampling};

/// Points on the circumscribed circle of a regular polygon.
///
/// `sides` is carried for editors but does not move any point: instances are placed at
/// angle `t * 2π` on the circle, not on the polygon's edges or corners.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolygonPath {
    #[cfg_attr(feature = "serde", serde(rename = "polygonSides"))]
    pub sides: u32,
    #[cfg_attr(feature = "serde", serde(rename = "polygonRadius"))]
    pub radius: f64,
}

impl Default for PolygonPath {
    fn default() -> Self {
        Self {
            sides: 6,
            radius: 200.0,
        }
    }
}

impl PathSampling for PolygonPath {
    fn sample(&self, count: usize, _baseline: &Baseline) -> Result<Vec<Instance>> {
        Ok(sample_by_progress(count, |t| {
            let theta = t * 2.0 * PI;
            DVec2::new(self.radius * theta.cos(), self.radius * theta.sin())
        }))
    }
}
