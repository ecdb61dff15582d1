use crate::color::Hsl;
use crate::constants::*;
use glam::{Mat4, Quat, Vec3};
use rand::Rng;
use std::f32::consts::TAU;

/// Placement of one heart inside the field.
///
/// Rotation is kept as the two sampled Euler angles (X then Y, no Z) so the
/// composed quaternion can always be rebuilt and the raw angles inspected.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation_x: f32,
    pub rotation_y: f32,
    pub scale: Vec3,
}

impl Transform {
    #[inline]
    pub fn rotation(&self) -> Quat {
        Quat::from_rotation_x(self.rotation_x) * Quat::from_rotation_y(self.rotation_y)
    }

    #[inline]
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation(), self.position)
    }
}

/// Random placement: each axis uniform in `[-SPAWN_RADIUS, SPAWN_RADIUS]`,
/// independent X/Y angles in `[0, 2π)`, unit scale.
pub fn sample_transform<R: Rng + ?Sized>(rng: &mut R) -> Transform {
    let mut axis = || rng.gen_range(-SPAWN_RADIUS..=SPAWN_RADIUS);
    let position = Vec3::new(axis(), axis(), axis());
    Transform {
        position,
        rotation_x: rng.gen_range(0.0..TAU),
        rotation_y: rng.gen_range(0.0..TAU),
        scale: Vec3::ONE,
    }
}

/// Random red variant: hue pinned, saturation and lightness jittered.
pub fn sample_color<R: Rng + ?Sized>(rng: &mut R) -> Hsl {
    Hsl::new(
        HEART_HUE,
        rng.gen_range(HEART_SATURATION_MIN..=HEART_SATURATION_MAX),
        rng.gen_range(HEART_LIGHTNESS_MIN..=HEART_LIGHTNESS_MAX),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn matrix_keeps_translation() {
        let t = Transform {
            position: Vec3::new(1.0, -2.0, 3.0),
            rotation_x: 0.4,
            rotation_y: 1.3,
            scale: Vec3::ONE,
        };
        let m = t.matrix();
        assert!((m.w_axis.truncate() - t.position).length() < 1e-6);
    }

    #[test]
    fn rotation_has_no_roll_component_when_angles_are_zero() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut t = sample_transform(&mut rng);
        t.rotation_x = 0.0;
        t.rotation_y = 0.0;
        assert!(t.rotation().abs_diff_eq(Quat::IDENTITY, 1e-6));
    }
}
