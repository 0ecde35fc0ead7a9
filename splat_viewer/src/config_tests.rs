use super::*;

// ============================================================================
// Tests: ClearColor
// ============================================================================

#[test]
fn test_clear_color_from_hex() {
    let color = ClearColor::from_hex(0xff8000, 0.5);
    assert_eq!(color.r, 1.0);
    assert!((color.g - 128.0 / 255.0).abs() < 1e-6);
    assert_eq!(color.b, 0.0);
    assert_eq!(color.a, 0.5);
}

#[test]
fn test_clear_color_light_tone() {
    let color = ClearColor::light();
    assert!((color.r - 245.0 / 255.0).abs() < 1e-6);
    assert!((color.g - 247.0 / 255.0).abs() < 1e-6);
    assert!((color.b - 251.0 / 255.0).abs() < 1e-6);
    assert_eq!(color.a, 1.0);
}

// ============================================================================
// Tests: Defaults
// ============================================================================

#[test]
fn test_framing_defaults() {
    let framing = FramingConfig::default();
    assert_eq!(framing.fov_degrees, 45.0);
    assert_eq!(framing.padding, 1.2);
    assert_eq!(framing.distance_scale, 2.0);
    assert_eq!(framing.view_direction, Vec3::new(-0.9, 0.6, -0.9));
    assert_eq!(framing.near_min, 0.01);
    assert_eq!(framing.far_ratio, 20.0);
}

#[test]
fn test_viewer_defaults() {
    let config = ViewerConfig::default();
    assert!(config.flip_roll);
    assert_eq!(config.retry_ceiling, 30);
    assert_eq!(config.settle_delay, Duration::from_millis(80));
    assert_eq!(config.up_axis_ratio, 1.5);
    assert_eq!(config.fallback_position, Vec3::new(3.0, 2.0, 3.0));
    assert_eq!(config.initial_position, Vec3::new(-2.2, 1.8, -1.6));
}

#[test]
fn test_builder_helpers() {
    let config = ViewerConfig::default()
        .with_flip_roll(false)
        .with_retry_ceiling(5)
        .with_settle_delay(Duration::from_millis(10));

    assert!(!config.flip_roll);
    assert_eq!(config.retry_ceiling, 5);
    assert_eq!(config.settle_delay, Duration::from_millis(10));
}

// ============================================================================
// Tests: BackendConfig
// ============================================================================

#[test]
fn test_backend_config_isolated_host() {
    let config = BackendConfig::for_host(&HostEnvironment { cross_origin_isolated: true });
    assert!(config.shared_memory_for_workers);
    assert!(config.gpu_accelerated_sort);
}

#[test]
fn test_backend_config_non_isolated_host_disables_shared_paths() {
    let config = BackendConfig::for_host(&HostEnvironment { cross_origin_isolated: false });
    assert!(!config.shared_memory_for_workers);
    assert!(!config.gpu_accelerated_sort);
    assert_eq!(BackendConfig::default(), config);
}
