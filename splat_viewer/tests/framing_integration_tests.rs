//! Integration tests for auto-framing over the headless engine
//!
//! These tests verify retry-until-ready framing, the fallback placement and
//! manual reframing with a real viewer and scene graph.
//!
//! Run with: cargo test --test framing_integration_tests

mod headless_test_utils;

use splat_viewer::glam::{Mat4, Vec3};
use splat_viewer::splatview::framing::{BoundingVolume, FramingSolution, AABB};
use splat_viewer::splatview::session::SessionCamera;
use splat_viewer::splatview::{ClearColor, Error, FramingConfig, LoadStatus, ViewerConfig};
use splat_viewer_headless::HeadlessNode;

use headless_test_utils::{assert_vec3_near, load_and_resolve, mount_viewer, FrameClock};

fn expected_solution(aabb: AABB) -> FramingSolution {
    FramingSolution::for_bounds(&BoundingVolume::from_aabb(aabb), &FramingConfig::default())
        .expect("Bounds should not be degenerate")
}

// ============================================================================
// RETRY-UNTIL-READY TESTS
// ============================================================================

#[test]
fn test_integration_streaming_scene_is_framed_once_bounds_arrive() {
    let mut viewer = mount_viewer(ViewerConfig::default());
    let mut clock = FrameClock::new();
    let bounds = AABB::from_center_size(Vec3::new(1.0, 0.0, 0.0), Vec3::splat(2.0));

    load_and_resolve(&mut viewer, "tiles.splat", vec![HeadlessNode::streaming(bounds, 4)]);

    // First frames: the node reports NaN bounds and framing keeps retrying
    clock.run(&mut viewer, 2);
    assert!(viewer.is_framing());
    assert!(viewer.session().clear_color().is_none());

    clock.run(&mut viewer, 4);
    assert!(!viewer.is_framing());

    let expected = expected_solution(bounds);
    let camera = viewer.session().headless_camera();
    assert_vec3_near(camera.target(), expected.target, 1e-4);
    assert_vec3_near(camera.position(), expected.position, 1e-3);
    assert_eq!(camera.fov(), 45.0);
    assert_eq!(viewer.session().clear_color(), Some(ClearColor::light()));
    assert_eq!(viewer.diagnostics().fallback_framings, 0);
}

#[test]
fn test_integration_clip_planes_follow_scene_scale() {
    let mut viewer = mount_viewer(ViewerConfig::default());
    let mut clock = FrameClock::new();
    let tiny = AABB::from_center_size(Vec3::ZERO, Vec3::splat(0.01));

    load_and_resolve(&mut viewer, "speck.ply", vec![HeadlessNode::bounded(tiny)]);
    clock.tick(&mut viewer);

    let camera = viewer.session().headless_camera();
    assert_eq!(camera.near(), 0.01);
    assert!(camera.far() >= camera.near() + 1.0);

    let huge = AABB::from_center_size(Vec3::ZERO, Vec3::splat(2000.0));
    load_and_resolve(&mut viewer, "city.ksplat", vec![HeadlessNode::bounded(huge)]);
    clock.tick(&mut viewer);

    let expected = expected_solution(huge);
    let camera = viewer.session().headless_camera();
    assert!((camera.near() - expected.distance * 0.001).abs() < 1e-3);
    assert!((camera.far() - expected.distance * 20.0).abs() < 1e-1);
}

// ============================================================================
// FALLBACK TESTS
// ============================================================================

#[test]
fn test_integration_empty_scene_gets_fallback_camera() {
    let mut viewer = mount_viewer(ViewerConfig::default().with_retry_ceiling(3));
    let mut clock = FrameClock::new();

    load_and_resolve(&mut viewer, "empty.splat", vec![HeadlessNode::group()]);
    clock.run(&mut viewer, 20);

    assert!(!viewer.is_framing());
    assert_eq!(viewer.status().status(), LoadStatus::Ready);

    let diagnostics = viewer.diagnostics();
    assert_eq!(diagnostics.fallback_framings, 1);
    assert_eq!(diagnostics.last_recovered, Some(Error::DegenerateScene { attempts: 4 }));

    let camera = viewer.session().headless_camera();
    assert_eq!(camera.position(), Vec3::new(3.0, 2.0, 3.0));
    assert_eq!(camera.target(), Vec3::ZERO);
    // Fallback never touches fov or background
    assert_eq!(camera.fov(), 50.0);
    assert!(viewer.session().clear_color().is_none());
}

#[test]
fn test_integration_point_sized_scene_is_not_framed() {
    let mut viewer = mount_viewer(ViewerConfig::default().with_retry_ceiling(2));
    let mut clock = FrameClock::new();

    load_and_resolve(
        &mut viewer,
        "dot.ply",
        vec![HeadlessNode::points(vec![Vec3::new(4.0, 4.0, 4.0)])],
    );
    clock.settle(&mut viewer);

    assert_eq!(viewer.diagnostics().fallback_framings, 1);
    assert_eq!(viewer.session().headless_camera().target(), Vec3::ZERO);
}

#[test]
fn test_integration_overflowing_scene_gets_fallback_camera() {
    let mut viewer = mount_viewer(ViewerConfig::default().with_retry_ceiling(2));
    let mut clock = FrameClock::new();
    let vast = AABB::new(Vec3::splat(-3.0e38), Vec3::splat(3.0e38));

    load_and_resolve(&mut viewer, "vast.ply", vec![HeadlessNode::bounded(vast)]);
    clock.settle(&mut viewer);

    assert!(!viewer.is_framing());
    assert_eq!(viewer.diagnostics().fallback_framings, 1);
    let camera = viewer.session().headless_camera();
    assert_eq!(camera.position(), Vec3::new(3.0, 2.0, 3.0));
    assert!(camera.near().is_finite() && camera.far().is_finite());
}

// ============================================================================
// MEASUREMENT TESTS
// ============================================================================

#[test]
fn test_integration_broken_node_does_not_block_framing() {
    let mut viewer = mount_viewer(ViewerConfig::default());
    let mut clock = FrameClock::new();
    let good = AABB::from_center_size(Vec3::ZERO, Vec3::new(2.0, 1.0, 2.0));

    load_and_resolve(
        &mut viewer,
        "partial.ksplat",
        vec![HeadlessNode::broken("chunk 7 truncated"), HeadlessNode::bounded(good)],
    );
    clock.tick(&mut viewer);

    assert!(!viewer.is_framing());
    let report = viewer.diagnostics().last_bounds.clone().expect("Bounds were measured");
    assert_eq!(report.failed, 1);
    assert_eq!(report.contributing, 1);
    assert_vec3_near(
        viewer.session().headless_camera().position(),
        expected_solution(good).position,
        1e-3,
    );
}

#[test]
fn test_integration_empty_sentinel_node_is_ignored() {
    let mut viewer = mount_viewer(ViewerConfig::default());
    let mut clock = FrameClock::new();
    let good = AABB::from_center_size(Vec3::ZERO, Vec3::splat(2.0));
    let sentinel = AABB::new(Vec3::splat(f32::MAX), Vec3::splat(-f32::MAX));

    load_and_resolve(
        &mut viewer,
        "mixed.ksplat",
        vec![HeadlessNode::bounded(good), HeadlessNode::bounded(sentinel)],
    );
    clock.tick(&mut viewer);

    assert!(!viewer.is_framing());
    let report = viewer.diagnostics().last_bounds.clone().expect("Bounds were measured");
    assert_eq!(report.contributing, 1);
    assert_eq!(report.empty_nodes, 1);
    assert_eq!(viewer.diagnostics().fallback_framings, 0);

    let camera = viewer.session().headless_camera();
    assert_vec3_near(camera.position(), expected_solution(good).position, 1e-3);
    assert!(camera.far().is_finite());
}

#[test]
fn test_integration_transformed_nodes_are_measured_in_world_space() {
    let mut viewer = mount_viewer(ViewerConfig::default());
    let mut clock = FrameClock::new();

    load_and_resolve(
        &mut viewer,
        "pair.splat",
        vec![
            HeadlessNode::sized(Vec3::splat(2.0)),
            HeadlessNode::sized(Vec3::splat(2.0)).at(Mat4::from_translation(Vec3::new(10.0, 0.0, 0.0))),
        ],
    );
    clock.tick(&mut viewer);

    let report = viewer.diagnostics().last_bounds.clone().expect("Bounds were measured");
    assert_eq!(report.volume.min(), Vec3::new(-1.0, -1.0, -1.0));
    assert_eq!(report.volume.max(), Vec3::new(11.0, 1.0, 1.0));
    assert_vec3_near(viewer.session().headless_camera().target(), Vec3::new(5.0, 0.0, 0.0), 1e-5);
}

// ============================================================================
// RESET VIEW TESTS
// ============================================================================

#[test]
fn test_integration_reset_view_follows_scene_changes() {
    let mut viewer = mount_viewer(ViewerConfig::default());
    let mut clock = FrameClock::new();

    load_and_resolve(&mut viewer, "room.splat", vec![HeadlessNode::sized(Vec3::splat(2.0))]);
    clock.settle(&mut viewer);
    assert_vec3_near(viewer.session().headless_camera().target(), Vec3::ZERO, 1e-5);

    viewer.session_mut().scene_mut().add_node(
        HeadlessNode::sized(Vec3::splat(2.0)).at(Mat4::from_translation(Vec3::new(0.0, 0.0, 10.0))),
    );
    viewer.reset_view();

    assert!(!viewer.is_framing());
    assert_vec3_near(viewer.session().headless_camera().target(), Vec3::new(0.0, 0.0, 5.0), 1e-5);
}

#[test]
fn test_integration_reframing_is_idempotent() {
    let mut viewer = mount_viewer(ViewerConfig::default());
    let mut clock = FrameClock::new();

    load_and_resolve(&mut viewer, "room.splat", vec![HeadlessNode::sized(Vec3::new(3.0, 2.0, 1.0))]);
    clock.settle(&mut viewer);

    let before = viewer.session().headless_camera().clone();
    viewer.reset_view();
    clock.run(&mut viewer, 2);
    let after = viewer.session().headless_camera();

    assert_vec3_near(after.position(), before.position(), 1e-5);
    assert_vec3_near(after.screen_up(), before.screen_up(), 1e-5);
    assert_eq!(after.near(), before.near());
    assert_eq!(after.far(), before.far());
}
