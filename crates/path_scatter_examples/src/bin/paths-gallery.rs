use glam::DVec2;
use path_scatter::prelude::*;
use path_scatter_examples::{init_tracing, render_instances_to_png, RenderConfig};

fn main() -> anyhow::Result<()> {
    init_tracing();

    // One image per path type, 24 instances each.
    let shapes = [
        PathShape::Linear,
        PathShape::Sine(SinePath {
            frequency: 2.0,
            amplitude: 80.0,
        }),
        PathShape::Bezier(BezierPath::default()),
        PathShape::Parametric(ParametricPath::new(
            "t * 600 - 300",
            "cos(t * 2 * PI * frequency) * 120 * (1 - t)",
        )),
        PathShape::Spiral(SpiralPath::default()),
        PathShape::Ellipse(EllipsePath::default()),
        PathShape::Polygon(PolygonPath::default()),
        PathShape::Arc(ArcPath::default()),
    ];

    let generator = LayoutGenerator::default();
    let rc = RenderConfig::new((800, 600), DVec2::new(900.0, 675.0)).with_base_shape_size(30.0);

    for shape in shapes {
        let name = shape.name();
        let scene = Scene::new(2025, Distribution::path(shape, 24)).with_transform(
            TransformConfig::default()
                .with_scale_range(0.6, 1.2)
                .with_rotation(RotationConfig::range(0.0, 90.0)),
        );
        let instances = generator.generate(&scene)?;
        render_instances_to_png(&instances, &rc, format!("paths-gallery-{name}.png"))?;
    }

    Ok(())
}
