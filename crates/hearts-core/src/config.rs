use crate::constants::*;
use crate::field::RotationMode;

/// Tunables for one run of the demo.
#[derive(Clone, Debug)]
pub struct DemoConfig {
    pub instance_count: usize,
    pub rotation: RotationMode,
    pub damping_factor: f32,
    pub rotate_speed: f32,
    pub zoom_speed: f32,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            instance_count: INSTANCE_COUNT,
            rotation: RotationMode::FixedPerTick(ROTATION_STEP_PER_TICK),
            damping_factor: ORBIT_DAMPING_FACTOR,
            rotate_speed: 1.0,
            zoom_speed: 1.0,
        }
    }
}

impl DemoConfig {
    /// Same look, but the spin no longer depends on the display refresh rate.
    pub fn time_scaled() -> Self {
        Self {
            rotation: RotationMode::TimeScaled {
                radians_per_sec: ROTATION_RATE_PER_SEC,
            },
            ..Self::default()
        }
    }
}
