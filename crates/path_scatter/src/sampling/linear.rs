//! Straight horizontal path along the baseline.
use glam::DVec2;

use crate::error::Result;
use crate::layout::Instance;
use crate::sampling::{sample_by_progress, Baseline, PathSampling};

/// Evenly spaced instances on the baseline, from `start_x` to `end_x`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LinearPath;

impl LinearPath {
    /// Infallible form of [`PathSampling::sample`]; also the fallback for other samplers.
    pub fn points(count: usize, baseline: &Baseline) -> Vec<Instance> {
        sample_by_progress(count, |t| DVec2::new(baseline.x_at(t), baseline.y))
    }
}

impl PathSampling for LinearPath {
    fn sample(&self, count: usize, baseline: &Baseline) -> Result<Vec<Instance>> {
        Ok(Self::points(count, baseline))
    }
}
