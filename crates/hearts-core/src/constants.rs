use std::f32::consts::{FRAC_PI_2, SQRT_2};

// Shared scene tuning constants used by the web frontend and the tests.

// Field layout
pub const INSTANCE_COUNT: usize = 700;
pub const SPAWN_RADIUS: f32 = 50.0; // half-extent of the cube instances are scattered in

// External assets
pub const HDRI_URL: &str =
    "https://happy358.github.io/Images/HDR/kloofendal_48d_partly_cloudy_puresky_2k.jpg";
pub const AUDIO_FILE: &str = "/love.mp3";

// Atmosphere
pub const FOG_COLOR: u32 = 0xf5b1aa;
pub const FOG_DENSITY: f32 = 0.005;

// Camera
pub const CAMERA_FOV_DEG: f32 = 35.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = SPAWN_RADIUS * 3.0;
pub const CAMERA_DISTANCE: f32 = SPAWN_RADIUS * SQRT_2; // start distance, also max zoom

// Orbit limits
pub const ORBIT_MIN_DISTANCE: f32 = 0.1;
pub const ORBIT_MAX_DISTANCE: f32 = SPAWN_RADIUS * SQRT_2;
pub const ORBIT_MIN_POLAR: f32 = 0.0;
pub const ORBIT_MAX_POLAR: f32 = FRAC_PI_2;
pub const ORBIT_DAMPING_FACTOR: f32 = 0.05;

// Lights
pub const AMBIENT_COLOR: u32 = 0xffffff;
pub const AMBIENT_INTENSITY: f32 = 0.3;
pub const DIRECTIONAL_COLOR: u32 = 0xffffff;
pub const DIRECTIONAL_INTENSITY: f32 = 1.0;
pub const DIRECTIONAL_HEIGHT: f32 = SPAWN_RADIUS * 2.0;

// Material
pub const MATERIAL_COLOR: u32 = 0xff0000;
pub const MATERIAL_METALNESS: f32 = 0.0;
pub const MATERIAL_ROUGHNESS: f32 = 0.0;
pub const MATERIAL_TRANSMISSION: f32 = 0.8;
pub const MATERIAL_THICKNESS: f32 = 2.0;
pub const MATERIAL_CLEARCOAT: f32 = 1.0;
pub const MATERIAL_CLEARCOAT_ROUGHNESS: f32 = 0.0;
pub const MATERIAL_IOR: f32 = 1.5;
pub const MATERIAL_OPACITY: f32 = 0.9;

// Heart geometry
pub const HEART_CURVE_SEGMENTS: usize = 12; // samples per bezier segment
pub const HEART_DEPTH: f32 = 3.0;
pub const HEART_BEVEL_SIZE: f32 = 0.5;
pub const HEART_BEVEL_THICKNESS: f32 = 0.5;
pub const HEART_BEVEL_SEGMENTS: usize = 5;
pub const HEART_STEPS: usize = 3;
pub const HEART_SCALE: f32 = 0.15;

// Per-instance color sampling (HSL, all in 0..1)
pub const HEART_HUE: f32 = 0.0;
pub const HEART_SATURATION_MIN: f32 = 0.8;
pub const HEART_SATURATION_MAX: f32 = 1.0;
pub const HEART_LIGHTNESS_MIN: f32 = 0.4;
pub const HEART_LIGHTNESS_MAX: f32 = 0.6;

// Animation
pub const ROTATION_STEP_PER_TICK: f32 = 0.003; // radians added to the field each frame
pub const ROTATION_RATE_PER_SEC: f32 = ROTATION_STEP_PER_TICK * 60.0; // same speed at 60 Hz
