#![forbid(unsafe_code)]
//! path_scatter: Deterministic instance layouts along paths and over particle fields.
//!
//! Modules:
//! - rng: seeded LCG shared by every random draw
//! - sampling: path samplers (linear, sine, bezier, parametric, spiral, ellipse, polygon, arc)
//!   and particle samplers (jittered grid, random scatter)
//! - expr: small expression language for parametric paths
//! - layout: scene configuration, spacing, transforms, runner and view bounds
//!
//! For examples and docs, see README and docs.rs.
pub mod error;
pub mod expr;
pub mod layout;
pub mod rng;
pub mod sampling;

/// Convenient re-exports for common types. Import with `use path_scatter::prelude::*;`.
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::expr::{CompiledExpr, ExprError, Vars};
    pub use crate::layout::bounds::{
        clamp_view_to_overlay, compute_instance_bounds, fit_view, AspectRatio, Bounds, FitView,
        Orientation, Viewport, DEFAULT_BASE_SHAPE_SIZE,
    };
    pub use crate::layout::config::{
        Distribution, ParticleDistribution, ParticleShape, PathConfig, PathDistribution,
        PathShape, RngConfig, RotationConfig, Scene, TransformConfig,
    };
    pub use crate::layout::dispatch::{sample_distribution, sample_particles, sample_path};
    pub use crate::layout::runner::{generate_layout, LayoutConfig, LayoutGenerator};
    pub use crate::layout::spacing::{apply_spacing, Spacing};
    pub use crate::layout::transform::{apply_depth_to_scale, apply_rotation, sort_by_depth};
    pub use crate::layout::Instance;
    pub use crate::rng::{validate_seed, SeededRng, MAX_SEED};
    pub use crate::sampling::{
        ArcPath, Baseline, BezierPath, Canvas, EllipsePath, GridJitter, LinearPath,
        ParametricPath, ParticleSampling, PathSampling, PolygonPath, RandomScatter, SinePath,
        SpiralPath,
    };
}
