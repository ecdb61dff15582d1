//! Perspective camera and drawing-surface size.
//!
//! Neither type touches platform APIs; the web frontend feeds them window
//! dimensions and reads back matrices and backing-store sizes.

use crate::constants::*;
use glam::{Mat4, Vec3};

/// Right-handed perspective camera looking at a target.
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
    projection: Mat4,
}

impl Camera {
    pub fn new(fovy_degrees: f32, aspect: f32, znear: f32, zfar: f32) -> Self {
        let mut camera = Self {
            eye: Vec3::ZERO,
            target: Vec3::NEG_Z,
            up: Vec3::Y,
            aspect,
            fovy_radians: fovy_degrees.to_radians(),
            znear,
            zfar,
            projection: Mat4::IDENTITY,
        };
        camera.update_projection_matrix();
        camera
    }

    /// Scene camera: 35° FOV, placed `CAMERA_DISTANCE` down +Z facing the origin.
    pub fn for_scene(aspect: f32) -> Self {
        let mut camera = Self::new(CAMERA_FOV_DEG, aspect, CAMERA_NEAR, CAMERA_FAR);
        camera.eye = Vec3::new(0.0, 0.0, CAMERA_DISTANCE);
        camera.look_at(Vec3::ZERO);
        camera
    }

    pub fn look_at(&mut self, target: Vec3) {
        self.target = target;
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
    }

    /// Recompute the cached projection after changing aspect, FOV or planes.
    pub fn update_projection_matrix(&mut self) {
        self.projection = Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar);
    }

    pub fn projection_matrix(&self) -> Mat4 {
        self.projection
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection * self.view_matrix()
    }
}

/// CSS size of the drawing surface plus the device pixel ratio.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
    pub pixel_ratio: f32,
}

impl Viewport {
    pub fn new(width: u32, height: u32, pixel_ratio: f32) -> Self {
        Self {
            width,
            height,
            pixel_ratio,
        }
    }

    pub fn aspect(&self) -> f32 {
        self.width.max(1) as f32 / self.height.max(1) as f32
    }

    /// Physical pixel size of the backing store, never zero.
    pub fn backing_size(&self) -> (u32, u32) {
        let px = |css: u32| ((css as f32 * self.pixel_ratio) as u32).max(1);
        (px(self.width), px(self.height))
    }
}
