//! Path defined by user-supplied expressions `x(t)` and `y(t)`.
use glam::DVec2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::Result;
use crate::expr::{CompiledExpr, ExprError, Vars};
use crate::layout::Instance;
use crate::sampling::{clamp_count, progress, Baseline, LinearPath, PathSampling};

pub const DEFAULT_X_EXPR: &str = "t * 600 - 300";
pub const DEFAULT_Y_EXPR: &str = "Math.sin(t * 2 * Math.PI * frequency) * 50";

/// Parametric path evaluated by the sandboxed [`crate::expr`] language.
///
/// If either expression fails to compile the whole path degrades to [`LinearPath`]. If a
/// single point fails to evaluate, only that point falls back to the baseline at `t`.
///
/// A coordinate that evaluates to NaN or an infinity (`1 / t` at `t = 0`) counts as a
/// failed point and is replaced, rather than being emitted as a non-finite position.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
#[derive(Debug, Clone, PartialEq)]
pub struct ParametricPath {
    /// `x(t, frequency)`; `None` selects [`DEFAULT_X_EXPR`].
    #[cfg_attr(
        feature = "serde",
        serde(rename = "parametricX", skip_serializing_if = "Option::is_none")
    )]
    pub x: Option<String>,
    /// `y(t, frequency)`; `None` selects [`DEFAULT_Y_EXPR`].
    #[cfg_attr(
        feature = "serde",
        serde(rename = "parametricY", skip_serializing_if = "Option::is_none")
    )]
    pub y: Option<String>,
    pub frequency: f64,
}

impl Default for ParametricPath {
    fn default() -> Self {
        Self {
            x: None,
            y: None,
            frequency: 1.0,
        }
    }
}

impl ParametricPath {
    pub fn new(x: impl Into<String>, y: impl Into<String>) -> Self {
        Self {
            x: Some(x.into()),
            y: Some(y.into()),
            ..Default::default()
        }
    }

    pub fn with_frequency(mut self, frequency: f64) -> Self {
        self.frequency = frequency;
        self
    }

    fn compile(&self) -> std::result::Result<(CompiledExpr, CompiledExpr), ExprError> {
        let x = CompiledExpr::compile(self.x.as_deref().unwrap_or(DEFAULT_X_EXPR))?;
        let y = CompiledExpr::compile(self.y.as_deref().unwrap_or(DEFAULT_Y_EXPR))?;
        Ok((x, y))
    }
}

impl PathSampling for ParametricPath {
    fn sample(&self, count: usize, baseline: &Baseline) -> Result<Vec<Instance>> {
        let (fx, fy) = match self.compile() {
            Ok(pair) => pair,
            Err(e) => {
                warn!("Parametric expressions failed to compile: {e}; using linear path.");
                return Ok(LinearPath::points(count, baseline));
            }
        };

        let count = clamp_count(count);
        let mut out = Vec::with_capacity(count);
        for i in 0..count {
            let t = progress(i, count);
            let vars = Vars {
                t,
                frequency: self.frequency,
            };
            let p = match fx
                .eval(&vars)
                .and_then(|x| fy.eval(&vars).map(|y| DVec2::new(x, y)))
            {
                Ok(p) => p,
                Err(e) => {
                    warn!("Parametric evaluation failed at t={t}: {e}; using baseline point.");
                    DVec2::new(baseline.x_at(t), baseline.y)
                }
            };
            out.push(Instance::new(p.x, p.y, t));
        }
        Ok(out)
    }
}
