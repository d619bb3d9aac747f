//! Cubic Bezier path.
use glam::DVec2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::layout::Instance;
use crate::sampling::{sample_by_progress, Baseline, PathSampling};

/// Control points of the default S-curve.
pub const DEFAULT_CONTROL_POINTS: [DVec2; 4] = [
    DVec2::new(-300.0, 0.0),
    DVec2::new(-100.0, -100.0),
    DVec2::new(100.0, 100.0),
    DVec2::new(300.0, 0.0),
];

/// Cubic Bezier through four control points (start, two handles, end).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BezierPath {
    /// Exactly four points; `None` selects [`DEFAULT_CONTROL_POINTS`].
    #[cfg_attr(
        feature = "serde",
        serde(
            rename = "ctrlPoints",
            with = "xy_points",
            skip_serializing_if = "Option::is_none"
        )
    )]
    pub ctrl_points: Option<Vec<DVec2>>,
}

impl BezierPath {
    pub fn new(ctrl_points: Vec<DVec2>) -> Self {
        Self {
            ctrl_points: Some(ctrl_points),
        }
    }

    fn control_points(&self) -> Result<[DVec2; 4]> {
        match self.ctrl_points.as_deref() {
            None => Ok(DEFAULT_CONTROL_POINTS),
            Some(&[p0, p1, p2, p3]) => Ok([p0, p1, p2, p3]),
            Some(points) => Err(Error::InvalidConfig(format!(
                "bezier path requires exactly 4 control points, got {}",
                points.len()
            ))),
        }
    }
}

/// Control points as `{ "x": .., "y": .. }` objects, the layout saved presets use.
#[cfg(feature = "serde")]
mod xy_points {
    use glam::DVec2;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Serialize, Deserialize)]
    struct XyPoint {
        x: f64,
        y: f64,
    }

    pub fn serialize<S: Serializer>(
        points: &Option<Vec<DVec2>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        points
            .as_ref()
            .map(|pts| pts.iter().map(|p| XyPoint { x: p.x, y: p.y }).collect::<Vec<_>>())
            .serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Vec<DVec2>>, D::Error> {
        let points = Option::<Vec<XyPoint>>::deserialize(deserializer)?;
        Ok(points.map(|pts| pts.into_iter().map(|p| DVec2::new(p.x, p.y)).collect()))
    }
}

/// `(1-t)³P₀ + 3(1-t)²tP₁ + 3(1-t)t²P₂ + t³P₃`
#[inline]
fn cubic(p: &[DVec2; 4], t: f64) -> DVec2 {
    let u = 1.0 - t;
    let t2 = t * t;
    let t3 = t2 * t;
    let u2 = u * u;
    let u3 = u2 * u;
    let axis = |c: fn(DVec2) -> f64| {
        u3 * c(p[0]) + 3.0 * u2 * t * c(p[1]) + 3.0 * u * t2 * c(p[2]) + t3 * c(p[3])
    };
    DVec2::new(axis(|v| v.x), axis(|v| v.y))
}

impl PathSampling for BezierPath {
    fn sample(&self, count: usize, _baseline: &Baseline) -> Result<Vec<Instance>> {
        let points = self.control_points()?;
        Ok(sample_by_progress(count, |t| cubic(&points, t)))
    }
}
