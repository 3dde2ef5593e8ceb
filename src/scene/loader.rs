//! Background scene construction.
//!
//! Mesh and starfield generation runs on a worker thread; the UI polls the
//! channel once per frame and shows a blank fallback until the scene is
//! ready, or an empty placeholder if construction failed.

use std::sync::mpsc;

use crate::config::SceneConfig;
use crate::error::Result;

use super::HeroScene;

pub enum SceneStatus {
    Loading,
    Ready(Box<HeroScene>),
    Failed(String),
}

impl SceneStatus {
    pub fn scene(&self) -> Option<&HeroScene> {
        match self {
            SceneStatus::Ready(scene) => Some(&**scene),
            _ => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, SceneStatus::Failed(_))
    }
}

pub struct SceneLoader {
    status: SceneStatus,
    rx: Option<mpsc::Receiver<Result<HeroScene>>>,
}

impl SceneLoader {
    /// Start building the scene. `ctx` is asked to repaint once the result
    /// is available.
    pub fn spawn(config: SceneConfig, ctx: Option<egui::Context>) -> Self {
        let (tx, rx) = mpsc::channel();
        let spawned = std::thread::Builder::new()
            .name("hero-scene".into())
            .spawn(move || {
                let result = HeroScene::build(&config);
                let _ = tx.send(result);
                if let Some(ctx) = ctx {
                    ctx.request_repaint();
                }
            });

        match spawned {
            Ok(_) => Self {
                status: SceneStatus::Loading,
                rx: Some(rx),
            },
            Err(e) => {
                log::warn!("could not start scene builder: {}", e);
                Self::failed(e.to_string())
            }
        }
    }

    /// A loader that already holds a scene.
    pub fn ready(scene: HeroScene) -> Self {
        Self {
            status: SceneStatus::Ready(Box::new(scene)),
            rx: None,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            status: SceneStatus::Failed(message.into()),
            rx: None,
        }
    }

    /// Collect the builder result if it has arrived.
    pub fn poll(&mut self) -> &mut SceneStatus {
        if let Some(rx) = &self.rx {
            match rx.try_recv() {
                Ok(Ok(scene)) => {
                    log::info!(
                        "hero scene ready: {} objects, {} stars",
                        scene.objects.len(),
                        scene.stars.stars.len()
                    );
                    self.status = SceneStatus::Ready(Box::new(scene));
                    self.rx = None;
                }
                Ok(Err(e)) => {
                    log::warn!("hero scene unavailable, showing placeholder: {}", e);
                    self.status = SceneStatus::Failed(e.to_string());
                    self.rx = None;
                }
                Err(mpsc::TryRecvError::Empty) => {}
                Err(mpsc::TryRecvError::Disconnected) => {
                    log::warn!("hero scene builder exited without a result");
                    self.status = SceneStatus::Failed("scene builder exited".into());
                    self.rx = None;
                }
            }
        }
        &mut self.status
    }

    pub fn status(&self) -> &SceneStatus {
        &self.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    fn wait(loader: &mut SceneLoader) -> &SceneStatus {
        let deadline = Instant::now() + Duration::from_secs(10);
        while matches!(loader.poll(), SceneStatus::Loading) && Instant::now() < deadline {
            std::thread::sleep(Duration::from_millis(5));
        }
        loader.status()
    }

    #[test]
    fn builds_in_background() {
        let config = SceneConfig {
            star_count: 200,
            ..Default::default()
        };
        let mut loader = SceneLoader::spawn(config, None);
        let scene = wait(&mut loader).scene().expect("scene should build");
        assert_eq!(scene.stars.stars.len(), 200);
    }

    #[test]
    fn failure_degrades_to_placeholder() {
        let config = SceneConfig {
            star_count: 0,
            ..Default::default()
        };
        let mut loader = SceneLoader::spawn(config, None);
        assert!(wait(&mut loader).is_failed());
    }

    #[test]
    fn prebuilt_loader_is_ready() {
        let scene = HeroScene::build(&SceneConfig::default()).unwrap();
        let mut loader = SceneLoader::ready(scene);
        assert!(loader.poll().scene().is_some());
    }
}
