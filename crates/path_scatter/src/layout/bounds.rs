//! Content bounds of a layout and view fitting against a viewport.
use glam::DVec2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::layout::Instance;

/// Side length of the unscaled square each instance is drawn into.
pub const DEFAULT_BASE_SHAPE_SIZE: f64 = 50.0;

pub const MIN_ZOOM: f64 = 0.1;
pub const MAX_ZOOM: f64 = 10.0;
/// Lower limit used when even [`MIN_ZOOM`] cannot fit the content.
const FLOOR_ZOOM: f64 = 0.01;

/// Axis-aligned rectangle in canvas units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: DVec2,
    pub max: DVec2,
}

impl Bounds {
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    pub fn center(&self) -> DVec2 {
        (self.min + self.max) / 2.0
    }
}

/// Bounds of every instance drawn as a `base_shape_size * scale` square whose top-left
/// corner is at `(x, y)`, rotated about its centre by `rotation` degrees.
///
/// Returns `None` for an empty slice.
pub fn compute_instance_bounds(instances: &[Instance], base_shape_size: f64) -> Option<Bounds> {
    if instances.is_empty() {
        return None;
    }

    let mut min = DVec2::splat(f64::INFINITY);
    let mut max = DVec2::splat(f64::NEG_INFINITY);

    for inst in instances {
        let size = base_shape_size * inst.effective_scale();
        let origin = inst.position();
        let center = origin + DVec2::splat(size / 2.0);
        let angle = (inst.rotation * std::f64::consts::PI) / 180.0;
        let (sin, cos) = angle.sin_cos();

        let corners = [
            origin,
            origin + DVec2::new(size, 0.0),
            origin + DVec2::new(size, size),
            origin + DVec2::new(0.0, size),
        ];
        for corner in corners {
            let offset = corner - center;
            let rotated = DVec2::new(
                center.x + offset.x * cos - offset.y * sin,
                center.y + offset.x * sin + offset.y * cos,
            );
            min = min.min(rotated);
            max = max.max(rotated);
        }
    }

    Some(Bounds { min, max })
}

#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "lowercase")
)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AspectRatio {
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "16:9"))]
    Widescreen,
    #[cfg_attr(feature = "serde", serde(rename = "1:1"))]
    Square,
    #[cfg_attr(feature = "serde", serde(rename = "4:3"))]
    Standard,
}

impl AspectRatio {
    /// `(width, height)` ratio terms.
    pub fn terms(self) -> (f64, f64) {
        match self {
            AspectRatio::Widescreen => (16.0, 9.0),
            AspectRatio::Square => (1.0, 1.0),
            AspectRatio::Standard => (4.0, 3.0),
        }
    }
}

#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "lowercase")
)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Orientation {
    #[default]
    Landscape,
    Portrait,
}

/// Output frame the layout is fitted into.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub aspect: AspectRatio,
    pub orientation: Orientation,
    /// Length of the long side.
    pub width: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            aspect: AspectRatio::Widescreen,
            orientation: Orientation::Landscape,
            width: 1920.0,
        }
    }
}

impl Viewport {
    pub fn new(aspect: AspectRatio, orientation: Orientation, width: f64) -> Self {
        Self {
            aspect,
            orientation,
            width,
        }
    }

    /// Pixel size; landscape keeps `width` horizontal, portrait stands it up.
    pub fn size(&self) -> DVec2 {
        let (ratio_w, ratio_h) = self.aspect.terms();
        let short = (self.width * ratio_h) / ratio_w;
        match self.orientation {
            Orientation::Landscape => DVec2::new(self.width, short),
            Orientation::Portrait => DVec2::new(short, self.width),
        }
    }
}

/// Pan (in canvas units) and zoom of a view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitView {
    pub pan: DVec2,
    pub zoom: f64,
}

/// Centres `bounds` and zooms so the content fills `viewport_size`.
///
/// Zero content extents count as 1.
pub fn fit_view(bounds: &Bounds, viewport_size: DVec2) -> FitView {
    let width = or_one(bounds.width());
    let height = or_one(bounds.height());
    let zoom = (viewport_size.x / width).min(viewport_size.y / height);
    FitView {
        pan: -bounds.center(),
        zoom,
    }
}

/// Limits a user view so the content stays on the overlay.
///
/// Zoom is held to `[MIN_ZOOM, MAX_ZOOM]` and never exceeds the content-fit zoom. When
/// the content is too large to fit at [`MIN_ZOOM`], the fit zoom (at least 0.01) wins.
/// Pan is clamped so the content cannot leave the viewport. Without bounds only the zoom
/// range applies.
pub fn clamp_view_to_overlay(
    bounds: Option<&Bounds>,
    viewport_size: DVec2,
    view: FitView,
) -> FitView {
    let Some(bounds) = bounds else {
        return FitView {
            pan: view.pan,
            zoom: clamp(view.zoom, MIN_ZOOM, MAX_ZOOM),
        };
    };

    let half = viewport_size / 2.0;
    let content_w = bounds.width().max(1.0);
    let content_h = bounds.height().max(1.0);
    let fit_zoom = (viewport_size.x / content_w).min(viewport_size.y / content_h);
    let allowed_max = fit_zoom.min(MAX_ZOOM);

    let mut next = view.zoom;
    if !allowed_max.is_nan() && allowed_max > 0.0 {
        next = view.zoom.min(allowed_max);
    }
    let zoom = if allowed_max < MIN_ZOOM {
        allowed_max.max(FLOOR_ZOOM)
    } else {
        clamp(next, MIN_ZOOM, MAX_ZOOM)
    };

    let min_pan = -half / zoom - bounds.min;
    let max_pan = half / zoom - bounds.max;
    FitView {
        zoom,
        pan: DVec2::new(
            clamp(view.pan.x, min_pan.x, max_pan.x),
            clamp(view.pan.y, min_pan.y, max_pan.y),
        ),
    }
}

#[inline]
fn or_one(extent: f64) -> f64 {
    if extent == 0.0 || extent.is_nan() {
        1.0
    } else {
        extent
    }
}

/// Clamp that tolerates an inverted range by returning `max`.
#[inline]
fn clamp(value: f64, min: f64, max: f64) -> f64 {
    if min > max {
        return max;
    }
    max.min(min.max(value))
}
