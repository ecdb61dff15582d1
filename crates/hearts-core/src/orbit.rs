//! Orbit camera controller.
//!
//! Input accumulates into a pending spherical delta and a zoom scale; each
//! [`OrbitControls::update`] applies them to the camera, clamps the polar
//! angle and distance, and (with damping) lets the remaining delta decay over
//! the following frames. Panning is not supported; the target stays fixed.

use crate::camera::Camera;
use crate::constants::*;
use glam::Vec3;
use std::f32::consts::{PI, TAU};

const POLAR_EPS: f32 = 1e-6;

/// Polar angle `phi` is measured from +Y, azimuth `theta` around Y from +Z.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Spherical {
    pub radius: f32,
    pub phi: f32,
    pub theta: f32,
}

impl Spherical {
    pub fn from_offset(v: Vec3) -> Self {
        let radius = v.length();
        if radius == 0.0 || !radius.is_finite() {
            return Self::default();
        }
        Self {
            radius,
            theta: v.x.atan2(v.z),
            phi: (v.y / radius).clamp(-1.0, 1.0).acos(),
        }
    }

    pub fn to_offset(self) -> Vec3 {
        let ring = self.phi.sin() * self.radius;
        Vec3::new(ring * self.theta.sin(), self.phi.cos() * self.radius, ring * self.theta.cos())
    }
}

#[derive(Clone, Debug)]
pub struct OrbitControls {
    pub target: Vec3,
    pub enable_damping: bool,
    pub damping_factor: f32,
    pub rotate_speed: f32,
    pub zoom_speed: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub min_polar_angle: f32,
    pub max_polar_angle: f32,
    spherical: Spherical,
    delta: Spherical,
    scale: f32,
}

impl Default for OrbitControls {
    fn default() -> Self {
        Self {
            target: Vec3::ZERO,
            enable_damping: false,
            damping_factor: ORBIT_DAMPING_FACTOR,
            rotate_speed: 1.0,
            zoom_speed: 1.0,
            min_distance: 0.0,
            max_distance: f32::INFINITY,
            min_polar_angle: 0.0,
            max_polar_angle: PI,
            spherical: Spherical::default(),
            delta: Spherical::default(),
            scale: 1.0,
        }
    }
}

impl OrbitControls {
    /// Controller configured for the hearts scene: damped, zoom limited to
    /// `[0.1, R·√2]`, never dipping below the horizon. Starts where
    /// [`Camera::for_scene`] puts the eye.
    pub fn for_scene() -> Self {
        Self {
            target: Vec3::ZERO,
            enable_damping: true,
            min_distance: ORBIT_MIN_DISTANCE,
            max_distance: ORBIT_MAX_DISTANCE,
            min_polar_angle: ORBIT_MIN_POLAR,
            max_polar_angle: ORBIT_MAX_POLAR,
            spherical: Spherical {
                radius: CAMERA_DISTANCE,
                phi: PI / 2.0,
                theta: 0.0,
            },
            ..Self::default()
        }
    }

    pub fn rotate_left(&mut self, angle: f32) {
        self.delta.theta -= angle;
    }

    pub fn rotate_up(&mut self, angle: f32) {
        self.delta.phi -= angle;
    }

    /// Pointer drag in CSS pixels; a full-height drag is one turn.
    pub fn handle_drag(&mut self, dx: f32, dy: f32, viewport_height: f32) {
        let h = viewport_height.max(1.0);
        self.rotate_left(TAU * dx * self.rotate_speed / h);
        self.rotate_up(TAU * dy * self.rotate_speed / h);
    }

    /// Wheel delta as reported by the browser; negative zooms in.
    pub fn handle_wheel(&mut self, delta_y: f32) {
        if delta_y == 0.0 || !delta_y.is_finite() {
            return;
        }
        let zoom = 0.95_f32.powf(self.zoom_speed * (delta_y * 0.01).abs());
        // huge deltas underflow `zoom` to 0; scale must stay finite and positive
        let next = if delta_y < 0.0 {
            self.scale * zoom
        } else {
            self.scale / zoom
        };
        self.scale = if next.is_nan() {
            1.0
        } else {
            next.clamp(f32::MIN_POSITIVE, f32::MAX)
        };
    }

    /// Apply pending input to `camera`. Returns true if the camera moved.
    pub fn update(&mut self, camera: &mut Camera) -> bool {
        let before = camera.eye;
        let mut s = Spherical::from_offset(camera.eye - self.target);

        if self.enable_damping {
            s.theta += self.delta.theta * self.damping_factor;
            s.phi += self.delta.phi * self.damping_factor;
        } else {
            s.theta += self.delta.theta;
            s.phi += self.delta.phi;
        }

        s.phi = s
            .phi
            .clamp(self.min_polar_angle, self.max_polar_angle)
            .clamp(POLAR_EPS, PI - POLAR_EPS);
        let radius = s.radius * self.scale;
        s.radius = if radius.is_finite() {
            radius.clamp(self.min_distance, self.max_distance)
        } else {
            self.max_distance
        };

        camera.eye = self.target + s.to_offset();
        camera.look_at(self.target);
        self.spherical = s;

        if self.enable_damping {
            self.delta.theta *= 1.0 - self.damping_factor;
            self.delta.phi *= 1.0 - self.damping_factor;
        } else {
            self.delta = Spherical::default();
        }
        self.scale = 1.0;

        camera.eye.distance_squared(before) > 1e-8
    }

    /// Polar angle after the last update.
    pub fn polar_angle(&self) -> f32 {
        self.spherical.phi
    }

    pub fn azimuth_angle(&self) -> f32 {
        self.spherical.theta
    }

    /// Camera-to-target distance after the last update.
    pub fn distance(&self) -> f32 {
        self.spherical.radius
    }
}
