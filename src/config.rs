//! Application configuration.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use url::Url;

use crate::error::{FolioError, Result};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FolioConfig {
    pub window: WindowConfig,
    pub scene: SceneConfig,
    pub site: SiteConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: f32,
    pub height: f32,
}

/// Tunables for the hero scene.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Number of point sprites in the starfield
    pub star_count: usize,
    /// Inner radius of the star shell
    pub star_radius: f32,
    /// Thickness of the star shell
    pub star_depth: f32,
    /// Closest the orbit camera may zoom
    pub min_distance: f32,
    /// Farthest the orbit camera may zoom
    pub max_distance: f32,
    /// Vertical field of view in degrees
    pub fov_degrees: f32,
    /// Initial camera distance from the origin
    pub camera_distance: f32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// TOML file replacing the builtin content
    pub content: Option<PathBuf>,
    /// Résumé opened by the footer link
    pub resume_path: PathBuf,
    /// Default log filter when RUST_LOG is unset
    pub log_level: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Portfolio".to_string(),
            width: 1280.0,
            height: 860.0,
        }
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            star_count: 4000,
            star_radius: 60.0,
            star_depth: 40.0,
            min_distance: 3.0,
            max_distance: 8.0,
            fov_degrees: 50.0,
            camera_distance: 6.0,
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            content: None,
            resume_path: PathBuf::from("assets/resume.pdf"),
            log_level: "info".to_string(),
        }
    }
}

impl FolioConfig {
    /// Parse and validate a config from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: FolioConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from `path`, or use defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let text = std::fs::read_to_string(path)?;
                Self::from_toml_str(&text)
            }
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        let s = &self.scene;
        if s.star_count == 0 {
            return Err(FolioError::config("scene.star_count must be at least 1"));
        }
        if s.star_radius <= 0.0 || s.star_depth < 0.0 {
            return Err(FolioError::config(
                "scene.star_radius must be positive and scene.star_depth non-negative",
            ));
        }
        if !(s.min_distance > 0.0 && s.min_distance <= s.max_distance) {
            return Err(FolioError::config(format!(
                "scene zoom range [{}, {}] is invalid",
                s.min_distance, s.max_distance
            )));
        }
        if !(s.fov_degrees > 0.0 && s.fov_degrees < 180.0) {
            return Err(FolioError::config(format!(
                "scene.fov_degrees {} must be in (0, 180)",
                s.fov_degrees
            )));
        }
        if s.camera_distance < s.min_distance || s.camera_distance > s.max_distance {
            return Err(FolioError::config(format!(
                "scene.camera_distance {} lies outside the zoom range",
                s.camera_distance
            )));
        }
        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            return Err(FolioError::config("window size must be positive"));
        }
        self.site.validate_resume()
    }
}

/// Schemes a résumé link may carry
const RESUME_SCHEMES: [&str; 3] = ["http", "https", "file"];

impl SiteConfig {
    /// Reject résumé paths that parse as a URL with a scheme other than
    /// http(s) or file. Plain paths pass.
    pub fn validate_resume(&self) -> Result<()> {
        let raw = self.resume_path.to_string_lossy();
        match Url::parse(&raw) {
            // Single-letter schemes are Windows drive prefixes.
            Ok(url) if url.scheme().len() > 1 && !RESUME_SCHEMES.contains(&url.scheme()) => {
                Err(FolioError::config(format!(
                    "site.resume_path {raw:?}: unsupported URL scheme {}",
                    url.scheme()
                )))
            }
            _ => Ok(()),
        }
    }

    /// URL the footer link opens. Remote résumés pass through; local paths
    /// resolve against the working directory.
    pub fn resume_url(&self) -> Result<Url> {
        self.validate_resume()?;
        let raw = self.resume_path.to_string_lossy();
        if let Ok(url) = Url::parse(&raw) {
            if matches!(url.scheme(), "http" | "https" | "file") {
                return Ok(url);
            }
        }
        let path = if self.resume_path.is_absolute() {
            self.resume_path.clone()
        } else {
            std::env::current_dir()?.join(&self.resume_path)
        };
        Url::from_file_path(&path)
            .map_err(|_| FolioError::config(format!("résumé path {} is not usable", path.display())))
    }

    /// Link target used in the static export.
    pub fn resume_href(&self) -> Result<String> {
        self.validate_resume()?;
        Ok(self.resume_path.to_string_lossy().replace('\\', "/"))
    }
}
