use std::path::Path;

use anyhow::Context;
use glam::DVec2;
use image::{Rgb, RgbImage};
use path_scatter::layout::bounds::DEFAULT_BASE_SHAPE_SIZE;
use path_scatter::layout::Instance;
use tracing_subscriber::EnvFilter;

/// Installs a formatting subscriber; `RUST_LOG` overrides the default `info` level.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// How a layout is rasterized.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub image_size: (u32, u32),
    /// Canvas area mapped onto the image, centred on the origin.
    pub view_extent: DVec2,
    pub background: [u8; 3],
    /// Fill at depth 0.
    pub far_color: [u8; 3],
    /// Fill at depth 1.
    pub near_color: [u8; 3],
    pub base_shape_size: f64,
}

impl RenderConfig {
    pub fn new(image_size: (u32, u32), view_extent: DVec2) -> Self {
        Self {
            image_size,
            view_extent,
            background: [24, 24, 28],
            far_color: [70, 90, 140],
            near_color: [250, 210, 120],
            base_shape_size: DEFAULT_BASE_SHAPE_SIZE,
        }
    }

    pub fn with_background(mut self, background: [u8; 3]) -> Self {
        self.background = background;
        self
    }

    pub fn with_colors(mut self, far: [u8; 3], near: [u8; 3]) -> Self {
        self.far_color = far;
        self.near_color = near;
        self
    }

    pub fn with_base_shape_size(mut self, size: f64) -> Self {
        self.base_shape_size = size;
        self
    }

    fn pixels_per_unit(&self) -> f64 {
        let (w, h) = self.image_size;
        (f64::from(w) / self.view_extent.x).min(f64::from(h) / self.view_extent.y)
    }

    fn to_pixel(&self, p: DVec2) -> DVec2 {
        let (w, h) = self.image_size;
        DVec2::new(f64::from(w), f64::from(h)) / 2.0 + p * self.pixels_per_unit()
    }

    fn color_at(&self, depth: f64) -> Rgb<u8> {
        let t = depth.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (f64::from(a) + (f64::from(b) - f64::from(a)) * t).round() as u8;
        Rgb([
            mix(self.far_color[0], self.near_color[0]),
            mix(self.far_color[1], self.near_color[1]),
            mix(self.far_color[2], self.near_color[2]),
        ])
    }
}

/// Draws each instance as a rotated square in slice order and writes a PNG.
pub fn render_instances_to_png(
    instances: &[Instance],
    config: &RenderConfig,
    path: impl AsRef<Path>,
) -> anyhow::Result<()> {
    let (w, h) = config.image_size;
    let mut img = RgbImage::from_pixel(w, h, Rgb(config.background));
    let ppu = config.pixels_per_unit();

    for inst in instances {
        let size = config.base_shape_size * inst.effective_scale() * ppu;
        if size <= 0.0 {
            continue;
        }
        let center = config.to_pixel(inst.position()) + DVec2::splat(size / 2.0);
        let half = size / 2.0;
        let (sin, cos) = inst.rotation.to_radians().sin_cos();
        let color = config.color_at(inst.depth);
        let edge = Rgb(color.0.map(|c| c / 2));

        let reach = half * std::f64::consts::SQRT_2;
        let x0 = (center.x - reach).floor().max(0.0) as u32;
        let y0 = (center.y - reach).floor().max(0.0) as u32;
        let x1 = ((center.x + reach).ceil().max(0.0) as u32).min(w);
        let y1 = ((center.y + reach).ceil().max(0.0) as u32).min(h);

        for py in y0..y1 {
            for px in x0..x1 {
                let d = DVec2::new(f64::from(px) + 0.5, f64::from(py) + 0.5) - center;
                let local = DVec2::new(d.x * cos + d.y * sin, -d.x * sin + d.y * cos);
                let extent = local.abs().max_element();
                if extent <= half {
                    let fill = if half - extent < 1.0 { edge } else { color };
                    img.put_pixel(px, py, fill);
                }
            }
        }
    }

    let path = path.as_ref();
    img.save(path)
        .with_context(|| format!("writing {}", path.display()))?;
    tracing::info!("Wrote {} instances to {}.", instances.len(), path.display());
    Ok(())
}
