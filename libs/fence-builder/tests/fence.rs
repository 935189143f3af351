use approx::assert_abs_diff_eq;
use fence_builder::{build_fence, FenceParams};
use fence_mesh::{Scene, Transform};
use glam::DVec3;

fn section_origins(scene: &Scene, fence: &fence_builder::Fence) -> Vec<f64> {
    fence
        .sections
        .iter()
        .map(|s| scene.world_transform(s.root).unwrap().translation.x)
        .collect()
}

#[test]
fn sections_are_spaced_by_measured_width() {
    let mut scene = Scene::new();
    let fence = build_fence(&mut scene, &FenceParams::default()).unwrap();
    assert_eq!(fence.sections.len(), 3);

    let origins = section_origins(&scene, &fence);
    assert_eq!(origins[0], 0.0);
    for i in 0..2 {
        let width = scene.dimensions(fence.sections[i].root).unwrap().0;
        assert_abs_diff_eq!(origins[i + 1] - origins[i], width + 0.2, epsilon = 1e-9);
    }
}

#[test]
fn sections_do_not_overlap() {
    for params in [FenceParams::default(), FenceParams::scalloped_preset()] {
        let mut scene = Scene::new();
        let fence = build_fence(&mut scene, &params).unwrap();
        let boxes: Vec<_> = fence
            .sections
            .iter()
            .map(|s| scene.bounding_box(s.root).unwrap())
            .collect();

        for (i, a) in boxes.iter().enumerate() {
            for b in &boxes[i + 1..] {
                assert!(!a.overlaps(b));
            }
        }
    }
}

#[test]
fn fence_is_placed_at_x_offset() {
    let params = FenceParams::default().nth_in_row(1);
    let mut scene = Scene::new();
    let fence = build_fence(&mut scene, &params).unwrap();

    assert_eq!(
        scene.world_transform(fence.root).unwrap().translation,
        DVec3::new(26.0, 0.0, 0.0)
    );
    assert_eq!(section_origins(&scene, &fence)[0], 26.0);
    let bb = scene.bounding_box(fence.root).unwrap();
    assert_abs_diff_eq!(bb.min.x, 26.0, epsilon = 1e-9);
    assert_eq!(scene.dimensions(fence.root).unwrap(), (25.9, 4.0, 0.15));
}

#[test]
fn empty_fence_has_zero_footprint_at_offset() {
    let params = FenceParams {
        num_fence_sections: 0,
        x_offset: 5.0,
        ..FenceParams::default()
    };
    let mut scene = Scene::new();
    let fence = build_fence(&mut scene, &params).unwrap();

    assert!(fence.sections.is_empty());
    assert!(scene.children(fence.root).unwrap().is_empty());
    let bb = scene.bounding_box(fence.root).unwrap();
    assert!(bb.is_degenerate());
    assert_eq!(bb.min, DVec3::new(5.0, 0.0, 0.0));
    assert_eq!(scene.dimensions(fence.root).unwrap(), (0.0, 0.0, 0.0));
}

#[test]
fn hierarchy_and_names() {
    let mut scene = Scene::new();
    let fence = build_fence(&mut scene, &FenceParams::default()).unwrap();

    assert_eq!(scene.name(fence.root).unwrap(), "fence");
    assert_eq!(scene.roots().collect::<Vec<_>>(), vec![fence.root]);

    let children = scene.children(fence.root).unwrap();
    let roots: Vec<_> = fence.sections.iter().map(|s| s.root).collect();
    assert_eq!(children, roots.as_slice());

    let names: Vec<_> = roots.iter().map(|&r| scene.name(r).unwrap().to_owned()).collect();
    assert_eq!(names, vec!["fenceSection1", "fenceSection2", "fenceSection3"]);

    let last = fence.pickets().last().unwrap();
    assert_eq!(scene.name(last).unwrap(), "picket30");
    assert_eq!(scene.find_by_name("crossSection6"), Some(fence.sections[2].cross_sections[1]));
    assert_eq!(scene.descendant_meshes(fence.root).unwrap().len(), 36);
}

#[test]
fn moving_the_fence_keeps_its_shape() {
    let mut scene = Scene::new();
    let fence = build_fence(&mut scene, &FenceParams::default()).unwrap();
    let before = scene.dimensions(fence.root).unwrap();

    scene.translate(fence.root, DVec3::new(3.0, 0.0, -1.0)).unwrap();
    assert_eq!(scene.dimensions(fence.root).unwrap(), before);

    let holder = scene.create_group("yard", Transform::from_xyz(0.0, 1.0, 0.0));
    let world = scene.bounding_box(fence.root).unwrap();
    scene.reparent(fence.root, holder).unwrap();
    let after = scene.bounding_box(fence.root).unwrap();
    assert!(world.min.abs_diff_eq(after.min, 1e-9));
    assert!(world.max.abs_diff_eq(after.max, 1e-9));
}

#[test]
fn flattened_fence_exports_buffers() {
    let mut scene = Scene::new();
    let fence = build_fence(&mut scene, &FenceParams::default()).unwrap();
    let mesh = scene.flatten(fence.root).unwrap();

    assert!(mesh.validate());
    assert_eq!(mesh.vertex_count(), 36 * 8);
    assert_eq!(mesh.vertices_f32().len(), 36 * 8 * 3);
    assert_eq!(mesh.indices_u32().len(), 36 * 12 * 3);
    assert_eq!(mesh.bounding_box().dimensions(), scene.dimensions(fence.root).unwrap());
}

#[test]
fn negative_section_spacing_overlaps_sections() {
    let params = FenceParams {
        section_spacing: -0.1,
        ..FenceParams::default()
    };
    let mut scene = Scene::new();
    let fence = build_fence(&mut scene, &params).unwrap();

    let origins = section_origins(&scene, &fence);
    assert_abs_diff_eq!(origins[1] - origins[0], 8.5 - 0.1, epsilon = 1e-9);
    assert_abs_diff_eq!(origins[2] - origins[1], 8.5 - 0.1, epsilon = 1e-9);
    let width = scene.dimensions(fence.root).unwrap().0;
    assert_abs_diff_eq!(width, 3.0 * 8.5 - 0.2, epsilon = 1e-9);
}
