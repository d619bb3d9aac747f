//! Easing remap of path x positions.
use glam::DVec2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::sampling::progress;

/// Easing applied to the normalized position of each path instance.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "kebab-case")
)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Spacing {
    #[default]
    Linear,
    /// `t²`: dense at the start, sparse at the end.
    EaseIn,
    /// `1 - (1-t)²`: sparse at the start, dense at the end.
    EaseOut,
}

impl Spacing {
    #[inline]
    pub fn ease(self, t: f64) -> f64 {
        match self {
            Spacing::Linear => t,
            Spacing::EaseIn => t * t,
            Spacing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
        }
    }
}

/// Re-distributes x along the span between the first and last input x.
///
/// `y` is kept, `Linear` returns the input unchanged, and for two or more points the first
/// and last positions are preserved exactly.
pub fn apply_spacing(positions: &[DVec2], spacing: Spacing) -> Vec<DVec2> {
    let (Some(first), Some(last)) = (positions.first(), positions.last()) else {
        return Vec::new();
    };
    if spacing == Spacing::Linear {
        return positions.to_vec();
    }

    let n = positions.len();
    let start = first.x;
    let span = last.x - start;
    positions
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let x = if n > 1 && i == n - 1 {
                last.x
            } else {
                start + spacing.ease(progress(i, n)) * span
            };
            DVec2::new(x, p.y)
        })
        .collect()
}
