//! Mount lifecycle for the hero scene.
//!
//! A [`FrameLoop`] turns frame timestamps into deltas while mounted and
//! yields nothing while unmounted, so an unmounted scene is never advanced.
//! [`Stage`] ties the loop to the scene loader and the orbit camera.

use crate::config::SceneConfig;

use super::camera::OrbitCamera;
use super::loader::{SceneLoader, SceneStatus};
use super::HeroScene;

/// Longest delta fed to the scene; larger gaps (stalls, debugger pauses)
/// are clamped.
pub const MAX_FRAME_DELTA: f32 = 0.1;

#[derive(Debug, Clone, Default)]
pub struct FrameLoop {
    mounted: bool,
    last: Option<f64>,
}

impl FrameLoop {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn mount(&mut self) {
        if !self.mounted {
            log::debug!("hero frame loop mounted");
            self.mounted = true;
            self.last = None;
        }
    }

    pub fn unmount(&mut self) {
        if self.mounted {
            log::debug!("hero frame loop unmounted");
            self.mounted = false;
            self.last = None;
        }
    }

    /// Delta since the previous call, or `None` while unmounted. The first
    /// frame after mounting yields zero so a remount never jumps.
    pub fn advance(&mut self, now: f64) -> Option<f32> {
        if !self.mounted {
            return None;
        }
        let dt = match self.last {
            Some(last) => ((now - last) as f32).clamp(0.0, MAX_FRAME_DELTA),
            None => 0.0,
        };
        self.last = Some(now);
        Some(dt)
    }
}

pub struct Stage {
    pub loader: SceneLoader,
    pub frame_loop: FrameLoop,
    pub camera: OrbitCamera,
}

impl Stage {
    pub fn new(loader: SceneLoader, config: &SceneConfig) -> Self {
        Self {
            loader,
            frame_loop: FrameLoop::new(),
            camera: OrbitCamera::new(
                config.camera_distance,
                config.fov_degrees,
                config.min_distance,
                config.max_distance,
            ),
        }
    }

    /// Start building the scene in the background.
    pub fn spawn(config: &SceneConfig, ctx: Option<egui::Context>) -> Self {
        Self::new(SceneLoader::spawn(config.clone(), ctx), config)
    }

    /// Run one frame. Mounts or unmounts according to `visible`, then
    /// advances the scene if it is ready and mounted. Returns true when
    /// another frame should be scheduled.
    pub fn frame(&mut self, now: f64, visible: bool) -> bool {
        if visible {
            self.frame_loop.mount();
        } else {
            self.frame_loop.unmount();
        }

        let status = self.loader.poll();
        match status {
            SceneStatus::Loading => visible,
            SceneStatus::Failed(_) => false,
            SceneStatus::Ready(scene) => match self.frame_loop.advance(now) {
                Some(dt) => {
                    scene.tick(dt);
                    true
                }
                None => false,
            },
        }
    }

    pub fn scene(&self) -> Option<&HeroScene> {
        self.loader.status().scene()
    }

    pub fn status(&self) -> &SceneStatus {
        self.loader.status()
    }

    /// Release the frame loop for good (app shutdown).
    pub fn unmount(&mut self) {
        self.frame_loop.unmount();
    }
}
