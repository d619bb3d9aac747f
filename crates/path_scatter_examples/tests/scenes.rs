use std::path::PathBuf;

use path_scatter::prelude::*;

fn scene_files() -> Vec<PathBuf> {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenes");
    let mut files: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .filter(|p| p.extension().is_some_and(|ext| ext == "ron"))
        .collect();
    files.sort();
    files
}

#[test]
fn every_bundled_scene_loads_and_generates() {
    let files = scene_files();
    assert!(files.len() >= 2, "expected bundled scenes, found {files:?}");

    for path in files {
        let source = std::fs::read_to_string(&path).unwrap();
        let scene: Scene = ron::from_str(&source)
            .unwrap_or_else(|e| panic!("{} does not parse: {e}", path.display()));
        scene.validate().unwrap();
        let instances = generate_layout(&scene).unwrap();
        assert!(!instances.is_empty(), "{} produced no instances", path.display());
    }
}

#[test]
fn wave_scene_matches_its_description() {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenes/wave.ron");
    let scene: Scene = ron::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();

    assert_eq!(scene.seed(), 4242);
    let Distribution::Path(p) = &scene.distribution else {
        panic!("expected a path distribution");
    };
    assert_eq!(p.path.instances, 32);
    assert_eq!(
        p.path.shape,
        PathShape::Sine(SinePath {
            frequency: 1.5,
            amplitude: 120.0
        })
    );
    assert_eq!(p.spacing, Spacing::EaseIn);
    assert_eq!(scene.transform.scale_range, (0.4, 1.6));
    assert_eq!(scene.transform.rotation, RotationConfig::range(0.0, 90.0));
    assert!(scene.transform.sort_by_depth);
}
