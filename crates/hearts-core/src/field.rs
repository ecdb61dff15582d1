use crate::color::Hsl;
use crate::extrude::MeshData;
use crate::material::PhysicalMaterial;
use crate::sampler::{sample_color, sample_transform, Transform};
use glam::Mat4;
use rand::Rng;
use std::rc::Rc;
use std::time::Duration;

/// Per-instance GPU record: column-major model matrix then linear color.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceRaw {
    pub model: [[f32; 4]; 4],
    pub color: [f32; 4],
}

/// Fixed-size batch of hearts sharing one mesh and one material.
///
/// Instance transforms and colors are written once in [`InstancedField::build`];
/// afterwards only the whole-field Y rotation changes.
pub struct InstancedField {
    geometry: Rc<MeshData>,
    material: Rc<PhysicalMaterial>,
    transforms: Vec<Transform>,
    colors: Vec<Hsl>,
    rotation_y: f32,
}

impl InstancedField {
    pub fn build<R: Rng + ?Sized>(
        geometry: Rc<MeshData>,
        material: Rc<PhysicalMaterial>,
        count: usize,
        rng: &mut R,
    ) -> Self {
        let mut transforms = Vec::with_capacity(count);
        let mut colors = Vec::with_capacity(count);
        for _ in 0..count {
            transforms.push(sample_transform(rng));
            colors.push(sample_color(rng));
        }
        Self {
            geometry,
            material,
            transforms,
            colors,
            rotation_y: 0.0,
        }
    }

    pub fn len(&self) -> usize {
        self.transforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }

    pub fn geometry(&self) -> &Rc<MeshData> {
        &self.geometry
    }

    pub fn material(&self) -> &Rc<PhysicalMaterial> {
        &self.material
    }

    pub fn transforms(&self) -> &[Transform] {
        &self.transforms
    }

    pub fn colors(&self) -> &[Hsl] {
        &self.colors
    }

    pub fn rotation_y(&self) -> f32 {
        self.rotation_y
    }

    pub fn rotate_y(&mut self, radians: f32) {
        self.rotation_y += radians;
    }

    /// Aggregate transform applied on top of every instance matrix.
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_rotation_y(self.rotation_y)
    }

    pub fn instance_data(&self) -> Vec<InstanceRaw> {
        self.transforms
            .iter()
            .zip(&self.colors)
            .map(|(t, c)| {
                let rgb = c.to_linear();
                InstanceRaw {
                    model: t.matrix().to_cols_array_2d(),
                    color: [rgb.r, rgb.g, rgb.b, 1.0],
                }
            })
            .collect()
    }
}

/// How the field's Y rotation advances each frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RotationMode {
    /// Constant step per frame; speed follows the display refresh rate.
    FixedPerTick(f32),
    /// Step scaled by elapsed time.
    TimeScaled { radians_per_sec: f32 },
}

impl RotationMode {
    pub fn step(&self, dt: Duration) -> f32 {
        match *self {
            RotationMode::FixedPerTick(step) => step,
            RotationMode::TimeScaled { radians_per_sec } => radians_per_sec * dt.as_secs_f32(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_step_ignores_elapsed_time() {
        let mode = RotationMode::FixedPerTick(0.003);
        assert_eq!(mode.step(Duration::from_millis(8)), 0.003);
        assert_eq!(mode.step(Duration::from_millis(100)), 0.003);
    }

    #[test]
    fn time_scaled_step_is_proportional() {
        let mode = RotationMode::TimeScaled {
            radians_per_sec: 0.18,
        };
        assert!((mode.step(Duration::from_millis(500)) - 0.09).abs() < 1e-6);
        assert_eq!(mode.step(Duration::ZERO), 0.0);
    }
}
