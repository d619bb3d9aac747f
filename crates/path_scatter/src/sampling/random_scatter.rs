//! Uniform random particle sampling over the canvas.
use rand::RngCore;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::layout::Instance;
use crate::rng::between;
use crate::sampling::{Canvas, ParticleSampling};

/// Independent uniform positions; overlaps are kept.
///
/// Each instance draws x, y and depth in that order.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RandomScatter {
    /// Approximate instances per density cell.
    pub density: f64,
}

impl RandomScatter {
    pub fn new(density: f64) -> Self {
        Self { density }
    }
}

impl ParticleSampling for RandomScatter {
    fn generate(&self, canvas: &Canvas, rng: &mut dyn RngCore) -> Vec<Instance> {
        let n = canvas.instance_count(self.density);
        if n == 0 {
            return Vec::new();
        }

        let half = canvas.half_extent();
        let mut out = Vec::with_capacity(n);
        for _ in 0..n {
            let x = between(-half.x, half.x, rng);
            let y = between(-half.y, half.y, rng);
            let depth = between(0.0, 1.0, rng);
            out.push(Instance::new(x, y, depth));
        }

        out
    }
}
