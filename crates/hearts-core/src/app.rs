//! Application context: the one owner of all mutable demo state.

use crate::audio::AutoplayGate;
use crate::camera::Viewport;
use crate::config::DemoConfig;
use crate::environment::EnvironmentMap;
use crate::error::SceneError;
use crate::scene::Scene;
use rand::Rng;
use std::time::Duration;

pub enum Lifecycle {
    Uninitialized,
    Ready(Box<Scene>),
}

pub struct AppContext {
    pub config: DemoConfig,
    pub audio: AutoplayGate,
    lifecycle: Lifecycle,
    frames: u64,
}

impl AppContext {
    pub fn new(config: DemoConfig) -> Self {
        Self {
            config,
            audio: AutoplayGate::default(),
            lifecycle: Lifecycle::Uninitialized,
            frames: 0,
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.lifecycle, Lifecycle::Ready(_))
    }

    pub fn scene(&self) -> Option<&Scene> {
        match &self.lifecycle {
            Lifecycle::Ready(scene) => Some(&**scene),
            Lifecycle::Uninitialized => None,
        }
    }

    pub fn scene_mut(&mut self) -> Option<&mut Scene> {
        match &mut self.lifecycle {
            Lifecycle::Ready(scene) => Some(&mut **scene),
            Lifecycle::Uninitialized => None,
        }
    }

    /// One-shot transition to `Ready`. A second call allocates nothing and
    /// reports `AlreadyInitialized`.
    pub fn initialize<R: Rng + ?Sized>(
        &mut self,
        environment: EnvironmentMap,
        viewport: Viewport,
        rng: &mut R,
    ) -> Result<&mut Scene, SceneError> {
        if self.is_ready() {
            return Err(SceneError::AlreadyInitialized);
        }
        let scene = Scene::assemble(environment, viewport, &self.config, rng)?;
        self.lifecycle = Lifecycle::Ready(Box::new(scene));
        self.scene_mut().ok_or(SceneError::AlreadyInitialized)
    }

    /// Advance one frame. Does nothing until the scene exists.
    pub fn tick(&mut self, dt: Duration) -> bool {
        let Some(scene) = self.scene_mut() else {
            return false;
        };
        scene.tick(dt);
        self.frames += 1;
        true
    }

    pub fn resize(&mut self, width: u32, height: u32, pixel_ratio: f32) -> bool {
        self.scene_mut()
            .is_some_and(|scene| scene.resize(width, height, pixel_ratio))
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}
