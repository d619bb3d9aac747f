//! Selects and runs the sampler for a distribution.
use tracing::warn;

use crate::error::Result;
use crate::layout::config::{Distribution, ParticleShape, PathConfig, PathShape};
use crate::layout::Instance;
use crate::rng::SeededRng;
use crate::sampling::{Baseline, Canvas, ParticleSampling};

/// Samples `path.instances` points along the configured shape.
///
/// Unknown shapes log a warning and sample the linear baseline.
pub fn sample_path(path: &PathConfig, baseline: &Baseline) -> Result<Vec<Instance>> {
    if path.shape == PathShape::Unknown {
        warn!("Unknown path type; using linear path.");
    }
    path.shape.sampler().sample(path.instances, baseline)
}

/// Runs the particle sampler with a fresh generator seeded from `seed`.
///
/// Unknown particle types log a warning and produce no instances.
pub fn sample_particles(particle: &ParticleShape, seed: u32, canvas: &Canvas) -> Vec<Instance> {
    let sampler: &dyn ParticleSampling = match particle {
        ParticleShape::Grid(grid) => grid,
        ParticleShape::Random(random) => random,
        ParticleShape::Unknown => {
            warn!("Unknown particle type; producing no instances.");
            return Vec::new();
        }
    };
    let mut rng = SeededRng::new(seed);
    sampler.generate(canvas, &mut rng)
}

/// Raw, untransformed instances for `distribution`.
pub fn sample_distribution(
    distribution: &Distribution,
    seed: u32,
    baseline: &Baseline,
    canvas: &Canvas,
) -> Result<Vec<Instance>> {
    match distribution {
        Distribution::Path(p) => sample_path(&p.path, baseline),
        Distribution::Particle(p) => Ok(sample_particles(&p.particle, seed, canvas)),
    }
}
