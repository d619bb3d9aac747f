use glam::DVec2;
use path_scatter::prelude::*;
use path_scatter_examples::{init_tracing, render_instances_to_png, RenderConfig};

fn main() -> anyhow::Result<()> {
    init_tracing();

    // Same density, same seed: a jittered lattice against uniform scatter.
    let density = 4.0;
    let seed = 12345;
    let transform = TransformConfig::default().with_scale_range(0.3, 0.6);

    let grid = Scene::new(
        seed,
        Distribution::particle(ParticleShape::Grid(GridJitter::new(density, 0.6))),
    )
    .with_transform(transform.clone());
    let random = Scene::new(
        seed,
        Distribution::particle(ParticleShape::Random(RandomScatter::new(density))),
    )
    .with_transform(transform);

    let generator = LayoutGenerator::default();
    let rc = RenderConfig::new((800, 600), DVec2::new(800.0, 600.0));

    render_instances_to_png(
        &generator.generate(&grid)?,
        &rc,
        "particles-grid-vs-random-grid.png",
    )?;
    render_instances_to_png(
        &generator.generate(&random)?,
        &rc,
        "particles-grid-vs-random-random.png",
    )?;

    Ok(())
}
