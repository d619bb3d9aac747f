//! Post-sampling stages: depth to scale, rotation, depth sort.
//!
//! Each stage takes a slice and returns a new vector; inputs are never modified.
use crate::layout::config::{
    RotationConfig, TransformConfig, DEFAULT_ROTATION_MAX, DEFAULT_ROTATION_MIN,
};
use crate::layout::Instance;
use crate::rng::SeededRng;

/// Linear map of `depth_range` onto `scale_range`, saturating outside the depth window.
///
/// A zero-width (or NaN-width) depth range uses a denominator of 1.
pub fn apply_depth_to_scale(instances: &[Instance], transform: &TransformConfig) -> Vec<Instance> {
    let (depth_min, depth_max) = transform.depth_range;
    let (scale_min, scale_max) = transform.scale_range;
    let width = depth_max - depth_min;
    let denom = if width == 0.0 || width.is_nan() {
        1.0
    } else {
        width
    };

    instances
        .iter()
        .map(|inst| {
            let normalized = ((inst.depth - depth_min) / denom).clamp(0.0, 1.0);
            inst.with_scale(scale_min + normalized * (scale_max - scale_min))
        })
        .collect()
}

/// Sets every rotation from `rotation`.
///
/// Range mode starts a fresh [`SeededRng`] from `seed` and takes one draw per instance in
/// order.
pub fn apply_rotation(instances: &[Instance], rotation: &RotationConfig, seed: u32) -> Vec<Instance> {
    match *rotation {
        RotationConfig::Fixed { value } => {
            let value = value.unwrap_or(0.0);
            instances.iter().map(|inst| inst.with_rotation(value)).collect()
        }
        RotationConfig::Range { min, max } => {
            let min = min.unwrap_or(DEFAULT_ROTATION_MIN);
            let max = max.unwrap_or(DEFAULT_ROTATION_MAX);
            let mut rng = SeededRng::new(seed);
            instances
                .iter()
                .map(|inst| inst.with_rotation(rng.between(min, max)))
                .collect()
        }
    }
}

/// Stable ascending sort by depth; ties keep their input order.
pub fn sort_by_depth(instances: &[Instance]) -> Vec<Instance> {
    let mut sorted = instances.to_vec();
    sorted.sort_by(|a, b| a.depth.total_cmp(&b.depth));
    sorted
}
