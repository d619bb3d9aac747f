//! Sampling strategies that produce raw instances.
//!
//! Path samplers are pure functions of their parameters and place `count` instances along
//! a curve with `depth` equal to the normalized progress. Particle samplers fill the canvas
//! from a density and draw positions and depths from an RNG.
use glam::DVec2;
use rand::RngCore;
use tracing::warn;

use crate::error::Result;
use crate::layout::Instance;

pub mod arc;
pub mod bezier;
pub mod ellipse;
pub mod grid_jitter;
pub mod linear;
pub mod parametric;
pub mod polygon;
pub mod random_scatter;
pub mod sine;
pub mod spiral;

pub use arc::ArcPath;
pub use bezier::BezierPath;
pub use ellipse::EllipsePath;
pub use grid_jitter::GridJitter;
pub use linear::LinearPath;
pub use parametric::ParametricPath;
pub use polygon::PolygonPath;
pub use random_scatter::RandomScatter;
pub use sine::SinePath;
pub use spiral::SpiralPath;

/// Largest number of instances any sampler emits; larger requests are clamped.
pub const MAX_INSTANCES: usize = 1_000_000;

/// Trait for samplers that place a fixed number of instances along a path.
pub trait PathSampling: Send + Sync {
    fn sample(&self, count: usize, baseline: &Baseline) -> Result<Vec<Instance>>;
}

/// Trait for samplers that fill a canvas from a density.
pub trait ParticleSampling: Send + Sync {
    fn generate(&self, canvas: &Canvas, rng: &mut dyn RngCore) -> Vec<Instance>;
}

/// Horizontal reference line for the linear and sine paths and for parametric fallbacks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Baseline {
    pub start_x: f64,
    pub end_x: f64,
    pub y: f64,
}

impl Default for Baseline {
    fn default() -> Self {
        Self {
            start_x: -300.0,
            end_x: 300.0,
            y: 0.0,
        }
    }
}

impl Baseline {
    /// X coordinate at normalized progress `t`.
    #[inline]
    pub fn x_at(&self, t: f64) -> f64 {
        self.start_x + t * (self.end_x - self.start_x)
    }
}

/// Particle canvas centered on the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Canvas {
    /// Width and height in canvas units.
    pub extent: DVec2,
    /// Side of the reference square that density is expressed against.
    pub density_cell: f64,
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            extent: DVec2::new(800.0, 600.0),
            density_cell: 100.0,
        }
    }
}

impl Canvas {
    pub fn new(extent: impl Into<DVec2>, density_cell: f64) -> Self {
        Self {
            extent: extent.into(),
            density_cell,
        }
    }

    /// `floor(density * area / density_cell^2)`, clamped to [`MAX_INSTANCES`].
    ///
    /// Zero for empty or non-finite canvases and for non-positive or non-finite densities.
    pub fn instance_count(&self, density: f64) -> usize {
        if !(self.extent.x > 0.0 && self.extent.y > 0.0 && self.density_cell > 0.0) {
            return 0;
        }
        let per_density = (self.extent.x * self.extent.y) / (self.density_cell * self.density_cell);
        let count = (density * per_density).floor();
        if !count.is_finite() || count < 1.0 {
            return 0;
        }
        if count > MAX_INSTANCES as f64 {
            warn!("Density {density} asks for {count} instances; clamping to {MAX_INSTANCES}.");
            return MAX_INSTANCES;
        }
        count as usize
    }

    pub fn half_extent(&self) -> DVec2 {
        self.extent * 0.5
    }
}

/// Normalized progress of index `i` out of `n`; a lone instance sits at the midpoint.
#[inline]
pub fn progress(i: usize, n: usize) -> f64 {
    if n > 1 {
        i as f64 / (n - 1) as f64
    } else {
        0.5
    }
}

/// Clamps a requested path instance count to [`MAX_INSTANCES`].
pub(crate) fn clamp_count(count: usize) -> usize {
    if count > MAX_INSTANCES {
        warn!("Path asks for {count} instances; clamping to {MAX_INSTANCES}.");
        MAX_INSTANCES
    } else {
        count
    }
}

/// Collects `count` instances from a point function of normalized progress.
#[inline]
pub(crate) fn sample_by_progress(count: usize, mut point: impl FnMut(f64) -> DVec2) -> Vec<Instance> {
    let count = clamp_count(count);
    (0..count)
        .map(|i| {
            let t = progress(i, count);
            let p = point(t);
            Instance::new(p.x, p.y, t)
        })
        .collect()
}
