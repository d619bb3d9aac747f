//! High-level runner for turning a [`Scene`] into a finished layout.
use glam::DVec2;
use tracing::debug;

use crate::error::{Error, Result};
use crate::layout::bounds::{compute_instance_bounds, Bounds};
use crate::layout::config::{Distribution, Scene};
use crate::layout::dispatch::sample_distribution;
use crate::layout::spacing::apply_spacing;
use crate::layout::transform::{apply_depth_to_scale, apply_rotation, sort_by_depth};
use crate::layout::Instance;
use crate::sampling::{Baseline, Canvas};

/// Canvas geometry shared by every scene a generator runs.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    /// Size of the particle canvas, centred on the origin.
    pub canvas_extent: DVec2,
    /// Side of the square that particle density is expressed against.
    pub density_cell: f64,
    /// Reference line for the linear and sine paths and parametric fallbacks.
    pub baseline: Baseline,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            canvas_extent: DVec2::new(800.0, 600.0),
            density_cell: 100.0,
            baseline: Baseline::default(),
        }
    }
}

impl LayoutConfig {
    /// Creates a new [`LayoutConfig`] with the given canvas extent.
    pub fn new(canvas_extent: impl Into<DVec2>) -> Self {
        Self {
            canvas_extent: canvas_extent.into(),
            ..Default::default()
        }
    }

    pub fn with_density_cell(mut self, density_cell: f64) -> Self {
        self.density_cell = density_cell;
        self
    }

    pub fn with_baseline(mut self, baseline: Baseline) -> Self {
        self.baseline = baseline;
        self
    }

    /// Validates the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if !(self.canvas_extent.x > 0.0 && self.canvas_extent.y > 0.0) {
            return Err(Error::InvalidConfig(
                "canvas_extent must be > 0 in both components".into(),
            ));
        }
        if !(self.density_cell > 0.0) {
            return Err(Error::InvalidConfig("density_cell must be > 0".into()));
        }
        let b = &self.baseline;
        if !(b.start_x.is_finite() && b.end_x.is_finite() && b.y.is_finite()) {
            return Err(Error::InvalidConfig("baseline must be finite".into()));
        }
        Ok(())
    }

    pub fn canvas(&self) -> Canvas {
        Canvas::new(self.canvas_extent, self.density_cell)
    }
}

/// Runs scenes through the fixed stage order
/// sample, spacing (paths only), depth to scale, rotation, optional depth sort.
///
/// Holds no state between calls; one generator can serve many scenes and threads.
#[derive(Debug, Clone, Default)]
pub struct LayoutGenerator {
    pub config: LayoutConfig,
}

impl LayoutGenerator {
    pub fn try_new(config: LayoutConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn new(config: LayoutConfig) -> Self {
        debug_assert!(
            config.canvas_extent.x > 0.0 && config.canvas_extent.y > 0.0,
            "canvas_extent must be > 0 in both components"
        );
        debug_assert!(config.density_cell > 0.0, "density_cell must be > 0");

        Self { config }
    }

    /// Produces the finished layout for `scene`.
    ///
    /// Fails only on sampler configuration errors, e.g. a Bezier path without exactly four
    /// control points. The seed is not range checked here; see [`Scene::validate`].
    pub fn generate(&self, scene: &Scene) -> Result<Vec<Instance>> {
        let instances = self.transformed(scene)?;
        if scene.transform.sort_by_depth {
            Ok(sort_by_depth(&instances))
        } else {
            Ok(instances)
        }
    }

    /// Bounds of the layout with each instance drawn at `base_shape_size * scale`.
    ///
    /// `None` when the scene produces no instances.
    pub fn bounds(&self, scene: &Scene, base_shape_size: f64) -> Result<Option<Bounds>> {
        // Sorting reorders but never moves instances.
        let instances = self.transformed(scene)?;
        Ok(compute_instance_bounds(&instances, base_shape_size))
    }

    fn transformed(&self, scene: &Scene) -> Result<Vec<Instance>> {
        let mut instances = sample_distribution(
            &scene.distribution,
            scene.rng.seed,
            &self.config.baseline,
            &self.config.canvas(),
        )?;

        if let Distribution::Path(path) = &scene.distribution {
            let positions: Vec<DVec2> = instances.iter().map(Instance::position).collect();
            let spaced = apply_spacing(&positions, path.spacing);
            instances = instances
                .iter()
                .zip(spaced)
                .map(|(inst, p)| inst.with_x(p.x))
                .collect();
        }

        let mode = match &scene.distribution {
            Distribution::Path(p) => p.path.shape.name(),
            Distribution::Particle(_) => "particle",
        };
        debug!(
            "Sampled {} instances from {} distribution (seed {}).",
            instances.len(),
            mode,
            scene.rng.seed
        );

        let scaled = apply_depth_to_scale(&instances, &scene.transform);
        Ok(apply_rotation(
            &scaled,
            &scene.transform.rotation,
            scene.rng.seed,
        ))
    }
}

/// Generates `scene` with the default canvas.
pub fn generate_layout(scene: &Scene) -> Result<Vec<Instance>> {
    LayoutGenerator::default().generate(scene)
}
