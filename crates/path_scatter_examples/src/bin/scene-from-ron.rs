use std::path::PathBuf;

use anyhow::Context;
use glam::DVec2;
use path_scatter::prelude::*;
use path_scatter_examples::{init_tracing, render_instances_to_png, RenderConfig};
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing();

    // Pass a path to load another scene file.
    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenes/wave.ron"));
    let source =
        std::fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
    let scene: Scene =
        ron::from_str(&source).with_context(|| format!("parsing {}", path.display()))?;
    scene.validate()?;

    let instances = generate_layout(&scene)?;
    info!(
        "Scene {} produced {} instances.",
        path.display(),
        instances.len()
    );

    let rc = RenderConfig::new((800, 600), DVec2::new(800.0, 600.0));
    render_instances_to_png(&instances, &rc, "scene-from-ron.png")?;

    Ok(())
}
