// Host-side scenarios for initialization, resize, frame ticks and audio start-up.

use hearts_core::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::rc::Rc;
use std::time::Duration;

fn ready_app() -> AppContext {
    let mut app = AppContext::new(DemoConfig::default());
    let mut rng = StdRng::seed_from_u64(42);
    app.initialize(EnvironmentMap::fallback(), Viewport::new(800, 600, 1.0), &mut rng)
        .unwrap();
    app
}

#[test]
fn nothing_exists_before_the_environment_arrives() {
    let mut app = AppContext::new(DemoConfig::default());
    assert!(!app.is_ready());
    assert!(app.scene().is_none());
    assert!(!app.tick(Duration::from_millis(16)));
    assert!(!app.resize(1024, 768, 1.0));
    assert_eq!(app.frames(), 0);
}

#[test]
fn initialization_builds_one_field_of_700() {
    let app = ready_app();
    let scene = app.scene().unwrap();
    assert_eq!(scene.field.len(), INSTANCE_COUNT);
    // the field shares the scene's single mesh and material
    assert!(Rc::ptr_eq(scene.field.geometry(), &scene.geometry));
    assert!(Rc::ptr_eq(scene.field.material(), &scene.material));
    assert_eq!(Rc::strong_count(&scene.geometry), 2);
    assert_eq!(Rc::strong_count(&scene.material), 2);
}

#[test]
fn repeated_load_callbacks_do_not_reinitialize() {
    let mut app = ready_app();
    let first: Vec<_> = app.scene().unwrap().field.transforms().to_vec();
    let mut rng = StdRng::seed_from_u64(99);
    let again = app.initialize(EnvironmentMap::fallback(), Viewport::new(640, 480, 1.0), &mut rng);
    assert!(matches!(again, Err(SceneError::AlreadyInitialized)));
    let scene = app.scene().unwrap();
    assert_eq!(scene.field.transforms(), &first[..]);
    assert_eq!(scene.viewport, Viewport::new(800, 600, 1.0));
}

#[test]
fn scene_uses_the_documented_camera_fog_and_lights() {
    let app = ready_app();
    let scene = app.scene().unwrap();
    assert!((scene.camera.fovy_radians - 35f32.to_radians()).abs() < 1e-6);
    assert_eq!(scene.camera.znear, CAMERA_NEAR);
    assert_eq!(scene.camera.zfar, SPAWN_RADIUS * 3.0);
    assert!((scene.camera.eye.length() - CAMERA_DISTANCE).abs() < 1e-3);
    assert_eq!(scene.fog.density, FOG_DENSITY);
    assert_eq!(scene.fog.color, color::Rgb::from_hex(0xf5b1aa));
    assert!(scene.sun.position.y > 0.0);
    assert!(scene.ambient.intensity < scene.sun.intensity);
    assert!(scene.controls.enable_damping);
    assert_eq!(scene.controls.target, glam::Vec3::ZERO);
}

#[test]
fn each_tick_spins_the_field_by_a_fixed_step() {
    let mut app = ready_app();
    for dt in [5, 16, 33, 100] {
        app.tick(Duration::from_millis(dt));
    }
    let spin = app.scene().unwrap().field.rotation_y();
    assert!((spin - 4.0 * ROTATION_STEP_PER_TICK).abs() < 1e-6);
    assert_eq!(app.frames(), 4);
}

#[test]
fn time_scaled_spin_follows_the_clock() {
    let mut app = AppContext::new(DemoConfig::time_scaled());
    let mut rng = StdRng::seed_from_u64(1);
    app.initialize(EnvironmentMap::fallback(), Viewport::new(800, 600, 1.0), &mut rng)
        .unwrap();
    app.tick(Duration::from_secs(1));
    let spin = app.scene().unwrap().field.rotation_y();
    assert!((spin - ROTATION_RATE_PER_SEC).abs() < 1e-5);
}

#[test]
fn resize_updates_aspect_and_surface() {
    let mut app = ready_app();
    assert!(app.resize(1920, 1080, 1.0));
    let scene = app.scene().unwrap();
    assert!((scene.camera.aspect - 1920.0 / 1080.0).abs() < 1e-6);
    assert_eq!(scene.viewport.width, 1920);
    assert_eq!(scene.viewport.height, 1080);
    assert_eq!(scene.viewport.backing_size(), (1920, 1080));
    let expected = glam::Mat4::perspective_rh(
        35f32.to_radians(),
        1920.0 / 1080.0,
        CAMERA_NEAR,
        CAMERA_FAR,
    );
    assert!(scene.camera.projection_matrix().abs_diff_eq(expected, 1e-6));
}

#[test]
fn resize_with_same_size_is_idempotent() {
    let mut app = ready_app();
    assert!(app.resize(1920, 1080, 2.0));
    let camera = app.scene().unwrap().camera.clone();
    let viewport = app.scene().unwrap().viewport;
    assert!(!app.resize(1920, 1080, 2.0));
    let scene = app.scene().unwrap();
    assert_eq!(scene.camera, camera);
    assert_eq!(scene.viewport, viewport);
}

#[test]
fn autoplay_rejection_allows_exactly_one_retry() {
    let mut gate = AutoplayGate::default();
    assert!(gate.begin());
    assert!(gate.on_rejected());
    assert_eq!(gate.state(), PlaybackState::AwaitingGesture);
    assert!(gate.on_gesture());
    assert_eq!(gate.attempts(), 2);
    assert!(!gate.on_gesture());
    assert_eq!(gate.attempts(), 2);
    gate.on_started();
    assert_eq!(gate.state(), PlaybackState::Playing);
}

#[test]
fn environment_from_decoded_pixels_is_marked_loaded() {
    let env = EnvironmentMap::from_rgba(4, 2, vec![128; 32]).unwrap();
    assert_eq!(env.source(), EnvironmentSource::Loaded);
}

#[test]
fn config_tunables_reach_the_orbit_controls() {
    let config = DemoConfig {
        damping_factor: 0.2,
        rotate_speed: 0.5,
        zoom_speed: 2.0,
        ..DemoConfig::default()
    };
    let mut app = AppContext::new(config);
    let mut rng = StdRng::seed_from_u64(3);
    app.initialize(EnvironmentMap::fallback(), Viewport::new(800, 600, 1.0), &mut rng)
        .unwrap();
    let controls = &app.scene().unwrap().controls;
    assert_eq!(controls.damping_factor, 0.2);
    assert_eq!(controls.rotate_speed, 0.5);
    assert_eq!(controls.zoom_speed, 2.0);
    assert!(controls.enable_damping);
    assert_eq!(controls.max_distance, ORBIT_MAX_DISTANCE);
}
