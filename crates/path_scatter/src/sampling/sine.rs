//! Sine wave along the baseline.
use std::f64::consts::PI;

use glam::DVec2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::layout::Instance;
use crate::sampling::{sample_by_progress, Baseline, PathSampling};

/// `x` runs along the baseline, `y = amplitude * sin(2π * frequency * t)`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SinePath {
    /// Full periods over the path.
    pub frequency: f64,
    pub amplitude: f64,
}

impl Default for SinePath {
    fn default() -> Self {
        Self {
            frequency: 1.0,
            amplitude: 50.0,
        }
    }
}

impl PathSampling for SinePath {
    fn sample(&self, count: usize, baseline: &Baseline) -> Result<Vec<Instance>> {
        Ok(sample_by_progress(count, |t| {
            let wave = (2.0 * PI * self.frequency * t).sin();
            DVec2::new(baseline.x_at(t), baseline.y + self.amplitude * wave)
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_have_extreme_depths() {
        let pts = SinePath::default().sample(9, &Baseline::default()).unwrap();
        assert_eq!(pts[0].depth, 0.0);
        assert_eq!(pts[8].depth, 1.0);
        assert_eq!(pts[0].x, -300.0);
        assert_eq!(pts[8].x, 300.0);
    }

    #[test]
    fn quarter_period_reaches_amplitude() {
        let pts = SinePath::default().sample(5, &Baseline::default()).unwrap();
        assert!((pts[1].y - 50.0).abs() < 1e-9);
        assert!(pts[2].y.abs() < 1e-9);
        assert!((pts[3].y + 50.0).abs() < 1e-9);
    }

    #[test]
    fn zero_amplitude_is_flat() {
        let sine = SinePath {
            frequency: 3.0,
            amplitude: 0.0,
        };
        let pts = sine.sample(17, &Baseline::default()).unwrap();
        assert!(pts.iter().all(|p| p.y == 0.0));
    }

    #[test]
    fn repeated_calls_are_identical() {
        let sine = SinePath {
            frequency: 2.5,
            amplitude: 80.0,
        };
        let a = sine.sample(33, &Baseline::default()).unwrap();
        let b = sine.sample(33, &Baseline::default()).unwrap();
        assert_eq!(a, b);
    }
}
