//! Scene configuration: distribution, transform and seed.
//!
//! With the `serde` feature these types read and write the preset JSON layout, e.g.
//!
//! ```json
//! {
//!   "rng": { "seed": 12345 },
//!   "distribution": {
//!     "mode": "path",
//!     "path": { "type": "sine", "instances": 10, "frequency": 2, "amplitude": 40 },
//!     "spacing": "ease-in"
//!   },
//!   "transform": {
//!     "depthRange": [0, 1],
//!     "scaleRange": [0.5, 1.5],
//!     "rotation": { "mode": "range", "min": 0, "max": 90 },
//!     "sortByDepth": true
//!   }
//! }
//! ```
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::layout::spacing::Spacing;
use crate::rng::validate_seed;
use crate::sampling::{
    ArcPath, BezierPath, EllipsePath, GridJitter, LinearPath, ParametricPath, PathSampling,
    PolygonPath, RandomScatter, SinePath, SpiralPath,
};

pub const DEFAULT_SEED: u32 = 12345;

/// Random stream settings of a scene.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RngConfig {
    /// Seed for every random draw; valid seeds are `0..=999999`.
    pub seed: u32,
}

impl Default for RngConfig {
    fn default() -> Self {
        Self { seed: DEFAULT_SEED }
    }
}

/// Everything needed to produce a layout.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    #[cfg_attr(feature = "serde", serde(default))]
    pub rng: RngConfig,
    pub distribution: Distribution,
    pub transform: TransformConfig,
}

impl Default for Scene {
    fn default() -> Self {
        Self {
            rng: RngConfig::default(),
            distribution: Distribution::Path(PathDistribution::default()),
            transform: TransformConfig::default(),
        }
    }
}

impl Scene {
    pub fn new(seed: u32, distribution: Distribution) -> Self {
        Self {
            rng: RngConfig { seed },
            distribution,
            transform: TransformConfig::default(),
        }
    }

    pub fn seed(&self) -> u32 {
        self.rng.seed
    }

    pub fn with_transform(mut self, transform: TransformConfig) -> Self {
        self.transform = transform;
        self
    }

    pub fn with_seed(mut self, seed: u32) -> Self {
        self.rng.seed = seed;
        self
    }

    /// Checks the seed range.
    pub fn validate(&self) -> Result<()> {
        if !validate_seed(self.rng.seed) {
            return Err(Error::InvalidSeed(self.rng.seed));
        }
        Ok(())
    }
}

/// How instances are placed: along a path, or as particles over the canvas.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(tag = "mode", rename_all = "lowercase")
)]
#[derive(Debug, Clone, PartialEq)]
pub enum Distribution {
    Path(PathDistribution),
    Particle(ParticleDistribution),
}

impl Distribution {
    pub fn path(shape: PathShape, instances: usize) -> Self {
        Distribution::Path(PathDistribution {
            path: PathConfig { instances, shape },
            spacing: Spacing::Linear,
        })
    }

    pub fn particle(particle: ParticleShape) -> Self {
        Distribution::Particle(ParticleDistribution { particle })
    }

    /// Sets the spacing of a path distribution; particle distributions are unchanged.
    pub fn with_spacing(self, spacing: Spacing) -> Self {
        match self {
            Distribution::Path(p) => Distribution::Path(PathDistribution { spacing, ..p }),
            other => other,
        }
    }
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathDistribution {
    pub path: PathConfig,
    #[cfg_attr(feature = "serde", serde(default))]
    pub spacing: Spacing,
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct PathConfig {
    /// Number of instances placed along the path.
    pub instances: usize,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub shape: PathShape,
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            instances: 10,
            shape: PathShape::Linear,
        }
    }
}

/// Path geometry with its parameters.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(tag = "type", rename_all = "lowercase")
)]
#[derive(Debug, Clone, Default, PartialEq)]
pub enum PathShape {
    #[default]
    Linear,
    Sine(SinePath),
    Bezier(BezierPath),
    Parametric(ParametricPath),
    Spiral(SpiralPath),
    Ellipse(EllipsePath),
    Polygon(PolygonPath),
    Arc(ArcPath),
    /// Unrecognized path type; sampled as [`PathShape::Linear`].
    #[cfg_attr(feature = "serde", serde(other))]
    Unknown,
}

impl PathShape {
    /// The sampler for this shape. Unknown shapes map to the linear sampler.
    pub fn sampler(&self) -> &dyn PathSampling {
        match self {
            PathShape::Linear | PathShape::Unknown => &LinearPath,
            PathShape::Sine(s) => s,
            PathShape::Bezier(s) => s,
            PathShape::Parametric(s) => s,
            PathShape::Spiral(s) => s,
            PathShape::Ellipse(s) => s,
            PathShape::Polygon(s) => s,
            PathShape::Arc(s) => s,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            PathShape::Linear => "linear",
            PathShape::Sine(_) => "sine",
            PathShape::Bezier(_) => "bezier",
            PathShape::Parametric(_) => "parametric",
            PathShape::Spiral(_) => "spiral",
            PathShape::Ellipse(_) => "ellipse",
            PathShape::Polygon(_) => "polygon",
            PathShape::Arc(_) => "arc",
            PathShape::Unknown => "unknown",
        }
    }
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleDistribution {
    pub particle: ParticleShape,
}

/// Particle sampler with its parameters.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(tag = "type", rename_all = "lowercase")
)]
#[derive(Debug, Clone, PartialEq)]
pub enum ParticleShape {
    Grid(GridJitter),
    Random(RandomScatter),
    /// Unrecognized particle type; produces no instances.
    #[cfg_attr(feature = "serde", serde(other))]
    Unknown,
}

/// Post-sampling transforms.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
#[derive(Debug, Clone, PartialEq)]
pub struct TransformConfig {
    /// Depth window mapped onto `scale_range`; may be degenerate.
    pub depth_range: (f64, f64),
    /// Scale at the low and high end of `depth_range`.
    pub scale_range: (f64, f64),
    pub rotation: RotationConfig,
    /// Stable ascending sort by depth after all other stages.
    pub sort_by_depth: bool,
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            depth_range: (0.0, 1.0),
            scale_range: (0.5, 1.5),
            rotation: RotationConfig::default(),
            sort_by_depth: false,
        }
    }
}

impl TransformConfig {
    pub fn with_depth_range(mut self, min: f64, max: f64) -> Self {
        self.depth_range = (min, max);
        self
    }

    pub fn with_scale_range(mut self, min: f64, max: f64) -> Self {
        self.scale_range = (min, max);
        self
    }

    pub fn with_rotation(mut self, rotation: RotationConfig) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_sort_by_depth(mut self, sort_by_depth: bool) -> Self {
        self.sort_by_depth = sort_by_depth;
        self
    }
}

pub const DEFAULT_ROTATION_MIN: f64 = 0.0;
pub const DEFAULT_ROTATION_MAX: f64 = 360.0;

/// Rotation in degrees: one fixed value, or a seeded draw per instance.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(tag = "mode", rename_all = "lowercase")
)]
#[derive(Debug, Clone, PartialEq)]
pub enum RotationConfig {
    Fixed {
        /// Defaults to 0.
        #[cfg_attr(feature = "serde", serde(default))]
        value: Option<f64>,
    },
    Range {
        /// Defaults to [`DEFAULT_ROTATION_MIN`].
        #[cfg_attr(feature = "serde", serde(default))]
        min: Option<f64>,
        /// Defaults to [`DEFAULT_ROTATION_MAX`].
        #[cfg_attr(feature = "serde", serde(default))]
        max: Option<f64>,
    },
}

impl Default for RotationConfig {
    fn default() -> Self {
        RotationConfig::Fixed { value: Some(0.0) }
    }
}

impl RotationConfig {
    pub fn fixed(value: f64) -> Self {
        RotationConfig::Fixed { value: Some(value) }
    }

    pub fn range(min: f64, max: f64) -> Self {
        RotationConfig::Range {
            min: Some(min),
            max: Some(max),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_shapes_sample_like_linear() {
        use crate::sampling::Baseline;

        let unknown = PathShape::Unknown.sampler().sample(4, &Baseline::default());
        let linear = PathShape::Linear.sampler().sample(4, &Baseline::default());
        assert_eq!(unknown.unwrap(), linear.unwrap());
    }

    #[test]
    fn scene_validation_checks_seed_range() {
        assert!(Scene::default().with_seed(0).validate().is_ok());
        assert!(Scene::default().with_seed(999_999).validate().is_ok());
        assert!(matches!(
            Scene::default().with_seed(1_000_000).validate(),
            Err(Error::InvalidSeed(1_000_000))
        ));
    }

    #[test]
    fn with_spacing_only_touches_paths() {
        let path = Distribution::path(PathShape::Linear, 3).with_spacing(Spacing::EaseIn);
        assert!(matches!(path, Distribution::Path(ref p) if p.spacing == Spacing::EaseIn));

        let particle = Distribution::particle(ParticleShape::Random(RandomScatter::new(1.0)));
        assert_eq!(particle.clone().with_spacing(Spacing::EaseOut), particle);
    }

    #[cfg(feature = "serde")]
    mod serde_layout {
        use glam::DVec2;

        use super::*;

        #[test]
        fn reads_preset_json() {
            let json = r#"{
                "rng": { "seed": 42 },
                "distribution": {
                    "mode": "path",
                    "path": { "type": "sine", "instances": 7, "amplitude": 20 },
                    "spacing": "ease-out"
                },
                "transform": {
                    "depthRange": [0, 1],
                    "scaleRange": [1, 2],
                    "rotation": { "mode": "range", "max": 90 },
                    "sortByDepth": true
                }
            }"#;
            let scene: Scene = serde_json::from_str(json).unwrap();
            assert_eq!(scene.seed(), 42);
            match &scene.distribution {
                Distribution::Path(p) => {
                    assert_eq!(p.path.instances, 7);
                    assert_eq!(
                        p.path.shape,
                        PathShape::Sine(SinePath {
                            frequency: 1.0,
                            amplitude: 20.0
                        })
                    );
                    assert_eq!(p.spacing, Spacing::EaseOut);
                }
                other => panic!("unexpected distribution: {other:?}"),
            }
            assert_eq!(
                scene.transform.rotation,
                RotationConfig::Range {
                    min: None,
                    max: Some(90.0)
                }
            );
            assert!(scene.transform.sort_by_depth);
        }

        #[test]
        fn seed_serializes_nested_under_rng() {
            let json = serde_json::to_value(Scene::default().with_seed(7)).unwrap();
            assert_eq!(json["rng"], serde_json::json!({ "seed": 7 }));
            assert!(json.get("seed").is_none());
        }

        #[test]
        fn reads_saved_bezier_preset() {
            let json = r#"{
                "rng": { "seed": 31337 },
                "distribution": {
                    "mode": "path",
                    "path": {
                        "type": "bezier",
                        "instances": 12,
                        "ctrlPoints": [
                            { "x": -300, "y": 0 },
                            { "x": -100, "y": -150 },
                            { "x": 100, "y": 150 },
                            { "x": 300, "y": 0 }
                        ]
                    },
                    "spacing": "linear"
                },
                "transform": {
                    "depthRange": [0, 1],
                    "scaleRange": [0.5, 1.5],
                    "rotation": { "mode": "fixed", "value": 0 },
                    "sortByDepth": false
                }
            }"#;
            let scene: Scene = serde_json::from_str(json).unwrap();
            assert_eq!(scene.seed(), 31337);
            let Distribution::Path(p) = &scene.distribution else {
                panic!("expected a path distribution");
            };
            let PathShape::Bezier(bezier) = &p.path.shape else {
                panic!("expected a bezier path");
            };
            assert_eq!(
                bezier.ctrl_points.as_deref(),
                Some(
                    &[
                        DVec2::new(-300.0, 0.0),
                        DVec2::new(-100.0, -150.0),
                        DVec2::new(100.0, 150.0),
                        DVec2::new(300.0, 0.0),
                    ][..]
                )
            );

            let saved = serde_json::to_value(&scene).unwrap();
            assert_eq!(saved["rng"]["seed"], 31337);
            assert_eq!(
                saved["distribution"]["path"]["ctrlPoints"][1],
                serde_json::json!({ "x": -100.0, "y": -150.0 })
            );
        }

        #[test]
        fn missing_rng_uses_default_seed() {
            let scene: Scene = serde_json::from_str(
                r#"{
                    "distribution": { "mode": "path", "path": { "type": "linear", "instances": 2 } },
                    "transform": {
                        "depthRange": [0, 1],
                        "scaleRange": [1, 1],
                        "rotation": { "mode": "fixed" },
                        "sortByDepth": false
                    }
                }"#,
            )
            .unwrap();
            assert_eq!(scene.seed(), DEFAULT_SEED);
        }

        #[test]
        fn unknown_type_tags_fall_back() {
            let path: PathConfig =
                serde_json::from_str(r#"{ "type": "zigzag", "instances": 3 }"#).unwrap();
            assert_eq!(path.shape, PathShape::Unknown);
            assert_eq!(path.instances, 3);

            let particle: ParticleShape =
                serde_json::from_str(r#"{ "type": "poisson", "density": 3 }"#).unwrap();
            assert_eq!(particle, ParticleShape::Unknown);
        }

        #[test]
        fn particle_distribution_round_trips() {
            let dist = Distribution::particle(ParticleShape::Grid(GridJitter::new(20.0, 0.3)));
            let json = serde_json::to_string(&dist).unwrap();
            assert!(json.contains(r#""mode":"particle""#));
            assert!(json.contains(r#""type":"grid""#));
            let back: Distribution = serde_json::from_str(&json).unwrap();
            assert_eq!(back, dist);
        }
    }
}
