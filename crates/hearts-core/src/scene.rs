use crate::camera::{Camera, Viewport};
use crate::color::Rgb;
use crate::config::DemoConfig;
use crate::constants::*;
use crate::environment::EnvironmentMap;
use crate::error::SceneError;
use crate::extrude::MeshData;
use crate::field::{InstancedField, RotationMode};
use crate::heart::build_heart_geometry;
use crate::material::PhysicalMaterial;
use crate::orbit::OrbitControls;
use glam::Vec3;
use rand::Rng;
use std::rc::Rc;
use std::time::Duration;

/// Exponential-squared distance fog.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FogExp2 {
    pub color: Rgb,
    pub density: f32,
}

impl FogExp2 {
    /// Blend weight toward the fog color at `distance`.
    pub fn factor(&self, distance: f32) -> f32 {
        let d = self.density * distance;
        (1.0 - (-d * d).exp()).clamp(0.0, 1.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AmbientLight {
    pub color: Rgb,
    pub intensity: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DirectionalLight {
    pub color: Rgb,
    pub intensity: f32,
    pub position: Vec3,
    pub target: Vec3,
}

impl DirectionalLight {
    /// Unit vector from the lit surface toward the light.
    pub fn direction(&self) -> Vec3 {
        (self.position - self.target).normalize_or_zero()
    }
}

/// Everything needed to draw a frame, built once after the environment map
/// arrives and then mutated only by input, resize and the frame tick.
pub struct Scene {
    pub environment: EnvironmentMap,
    pub fog: FogExp2,
    pub viewport: Viewport,
    pub camera: Camera,
    pub ambient: AmbientLight,
    pub sun: DirectionalLight,
    pub material: Rc<PhysicalMaterial>,
    pub geometry: Rc<MeshData>,
    pub field: InstancedField,
    pub controls: OrbitControls,
    pub rotation: RotationMode,
}

impl Scene {
    pub fn assemble<R: Rng + ?Sized>(
        environment: EnvironmentMap,
        viewport: Viewport,
        config: &DemoConfig,
        rng: &mut R,
    ) -> Result<Self, SceneError> {
        let fog = FogExp2 {
            color: Rgb::from_hex(FOG_COLOR),
            density: FOG_DENSITY,
        };
        let mut camera = Camera::for_scene(viewport.aspect());
        let ambient = AmbientLight {
            color: Rgb::from_hex(AMBIENT_COLOR),
            intensity: AMBIENT_INTENSITY,
        };
        let sun = DirectionalLight {
            color: Rgb::from_hex(DIRECTIONAL_COLOR),
            intensity: DIRECTIONAL_INTENSITY,
            position: Vec3::new(0.0, DIRECTIONAL_HEIGHT, 0.0),
            target: Vec3::ZERO,
        };
        let material = Rc::new(PhysicalMaterial::default());
        let geometry = Rc::new(build_heart_geometry()?);
        let field = InstancedField::build(
            Rc::clone(&geometry),
            Rc::clone(&material),
            config.instance_count,
            rng,
        );

        let mut controls = OrbitControls::for_scene();
        controls.damping_factor = config.damping_factor;
        controls.rotate_speed = config.rotate_speed;
        controls.zoom_speed = config.zoom_speed;
        controls.update(&mut camera);

        log::info!(
            "[scene] assembled: instances={} triangles={} env={}x{} ({:?})",
            field.len(),
            geometry.triangle_count(),
            environment.width(),
            environment.height(),
            environment.source()
        );

        Ok(Self {
            environment,
            fog,
            viewport,
            camera,
            ambient,
            sun,
            material,
            geometry,
            field,
            controls,
            rotation: config.rotation,
        })
    }

    /// One frame of animation: settle the orbit damping, spin the field.
    pub fn tick(&mut self, dt: Duration) {
        self.controls.update(&mut self.camera);
        self.field.rotate_y(self.rotation.step(dt));
    }

    /// Track a new CSS viewport size. Returns false if nothing changed.
    pub fn resize(&mut self, width: u32, height: u32, pixel_ratio: f32) -> bool {
        let next = Viewport::new(width, height, pixel_ratio);
        if next == self.viewport {
            return false;
        }
        self.viewport = next;
        self.camera.set_aspect(next.aspect());
        self.camera.update_projection_matrix();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fog_is_clear_at_the_eye_and_thick_far_away() {
        let fog = FogExp2 {
            color: Rgb::WHITE,
            density: FOG_DENSITY,
        };
        assert_eq!(fog.factor(0.0), 0.0);
        assert!(fog.factor(CAMERA_FAR) > fog.factor(CAMERA_DISTANCE));
        assert!(fog.factor(1e6) > 0.999);
    }

    #[test]
    fn sun_shines_straight_down() {
        let sun = DirectionalLight {
            color: Rgb::WHITE,
            intensity: 1.0,
            position: Vec3::new(0.0, DIRECTIONAL_HEIGHT, 0.0),
            target: Vec3::ZERO,
        };
        assert_eq!(sun.direction(), Vec3::Y);
    }
}
