use glam::DVec2;
use path_scatter::prelude::*;
use path_scatter_examples::{init_tracing, render_instances_to_png, RenderConfig};

fn main() -> anyhow::Result<()> {
    init_tracing();

    // Deep-to-near scale and random rotation; sorting draws far instances first.
    let transform = TransformConfig::default()
        .with_depth_range(0.2, 0.9)
        .with_scale_range(0.4, 2.0)
        .with_rotation(RotationConfig::range(-30.0, 30.0));
    let scene = Scene::new(
        777,
        Distribution::particle(ParticleShape::Random(RandomScatter::new(2.0))),
    )
    .with_transform(transform.clone());

    let generator = LayoutGenerator::default();
    let unsorted = generator.generate(&scene)?;
    let sorted = generator.generate(
        &scene
            .clone()
            .with_transform(transform.with_sort_by_depth(true)),
    )?;

    // Frame the content the way the editor's fit-view would.
    let viewport = Viewport::new(AspectRatio::Standard, Orientation::Landscape, 800.0);
    let view_extent = match generator.bounds(&scene, DEFAULT_BASE_SHAPE_SIZE)? {
        Some(bounds) => viewport.size() / fit_view(&bounds, viewport.size()).zoom,
        None => DVec2::new(800.0, 600.0),
    };
    let size = viewport.size();
    let rc = RenderConfig::new((size.x as u32, size.y as u32), view_extent);

    render_instances_to_png(&unsorted, &rc, "transforms-depth-sort-unsorted.png")?;
    render_instances_to_png(&sorted, &rc, "transforms-depth-sort-sorted.png")?;

    Ok(())
}
