//! Hero scene: a floating torus knot, two spinning tetrahedra, a starfield
//! and three lights.
//!
//! Every object owns an explicit [`Pose`]. [`HeroScene::tick`] advances all
//! poses by an injected frame delta; the scene keeps its own elapsed time and
//! never reads a wall clock.

pub mod camera;
pub mod geometry;
pub mod loader;
pub mod math;
pub mod stage;
pub mod stars;

use crate::config::SceneConfig;
use crate::error::{FolioError, Result};

use geometry::Mesh;
use math::{add, rotate_euler, Vec3};
use stars::Starfield;

pub const OVERLAY_LABEL: &str = "Interactive Portfolio";
pub const OVERLAY_ANCHOR: Vec3 = [0.0, 1.9, 0.0];

const STAR_SEED: u64 = 0x5EED;

/// Elapsed-time oscillator that bobs and tilts an object around its rest pose.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatMotion {
    pub speed: f32,
    pub rotation_intensity: f32,
    pub float_intensity: f32,
}

impl FloatMotion {
    /// (tilt angles, vertical offset) at scene time `t`.
    pub fn sample(&self, t: f32) -> (Vec3, f32) {
        let phase = t / 4.0 * self.speed;
        let (s, c) = phase.sin_cos();
        let tilt = [
            c / 8.0 * self.rotation_intensity,
            s / 8.0 * self.rotation_intensity,
            s / 20.0 * self.rotation_intensity,
        ];
        (tilt, s / 10.0 * self.float_intensity)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pose {
    pub position: Vec3,
    /// Euler angles (x, y, z) in radians
    pub rotation: Vec3,
    /// Tilt from the float oscillator, applied outside `rotation`
    pub float_tilt: Vec3,
    /// Vertical bob from the float oscillator
    pub float_offset: f32,
}

impl Pose {
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Local-space point to world space.
    pub fn transform(&self, v: Vec3) -> Vec3 {
        let spun = add(rotate_euler(v, self.rotation), self.position);
        let tilted = rotate_euler(spun, self.float_tilt);
        add(tilted, [0.0, self.float_offset, 0.0])
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shading {
    Solid,
    Wireframe,
}

#[derive(Debug, Clone)]
pub struct SceneObject {
    pub name: &'static str,
    pub mesh: Mesh,
    pub pose: Pose,
    /// Rotation rate about (x, y, z) in rad/s
    pub angular_velocity: Vec3,
    pub float: Option<FloatMotion>,
    pub color: [f32; 3],
    pub shading: Shading,
}

impl SceneObject {
    fn advance(&mut self, dt: f32, elapsed: f32) {
        for axis in 0..3 {
            self.pose.rotation[axis] += self.angular_velocity[axis] * dt;
        }
        if let Some(float) = self.float {
            let (tilt, offset) = float.sample(elapsed);
            self.pose.float_tilt = tilt;
            self.pose.float_offset = offset;
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub position: Vec3,
    pub color: [f32; 3],
    pub intensity: f32,
}

#[derive(Debug, Clone)]
pub struct Lighting {
    pub ambient: f32,
    pub points: Vec<PointLight>,
}

impl Lighting {
    /// Lambert shading of a surface point; returns linear RGB in [0, 1].
    pub fn shade(&self, base: [f32; 3], point: Vec3, normal: Vec3) -> [f32; 3] {
        let mut light = [self.ambient; 3];
        for l in &self.points {
            let to_light = math::sub(l.position, point);
            let dist = math::length(to_light).max(1e-3);
            let lambert = math::dot(normal, math::scale(to_light, 1.0 / dist)).max(0.0);
            // Soft falloff keeps the lights readable across the small scene
            let k = l.intensity * lambert / (1.0 + 0.05 * dist * dist);
            for c in 0..3 {
                light[c] += l.color[c] * k;
            }
        }
        [
            (base[0] * light[0]).min(1.0),
            (base[1] * light[1]).min(1.0),
            (base[2] * light[2]).min(1.0),
        ]
    }
}

#[derive(Debug, Clone)]
pub struct HeroScene {
    pub objects: Vec<SceneObject>,
    pub stars: Starfield,
    pub lighting: Lighting,
    /// Scene time in seconds, advanced only by `tick`
    pub elapsed: f32,
}

fn rgb(hex: u32) -> [f32; 3] {
    [
        ((hex >> 16) & 0xFF) as f32 / 255.0,
        ((hex >> 8) & 0xFF) as f32 / 255.0,
        (hex & 0xFF) as f32 / 255.0,
    ]
}

impl HeroScene {
    /// Build the scene. Fails when the config would produce an empty or
    /// degenerate scene.
    pub fn build(config: &SceneConfig) -> Result<Self> {
        if config.star_count == 0 {
            return Err(FolioError::scene("starfield needs at least one star"));
        }
        if !(config.star_radius.is_finite() && config.star_radius > 0.0) {
            return Err(FolioError::scene(format!(
                "invalid star radius {}",
                config.star_radius
            )));
        }

        let knot = geometry::torus_knot(1.0, 0.3, 128, 16, 2, 3);
        let tetra = geometry::tetrahedron(0.7);
        if !knot.is_finite() || !tetra.is_finite() {
            return Err(FolioError::scene("mesh generation produced non-finite vertices"));
        }

        let objects = vec![
            SceneObject {
                name: "torus-knot",
                mesh: knot,
                pose: Pose::default(),
                angular_velocity: [0.2, 0.3, 0.0],
                float: Some(FloatMotion {
                    speed: 1.5,
                    rotation_intensity: 0.6,
                    float_intensity: 1.2,
                }),
                color: rgb(0x7c5cff),
                shading: Shading::Solid,
            },
            SceneObject {
                name: "tetra-solid",
                mesh: tetra.clone(),
                pose: Pose::at([-2.6, 1.2, -1.0]),
                angular_velocity: [0.4, 0.6, 0.0],
                float: None,
                color: rgb(0x22d3ee),
                shading: Shading::Solid,
            },
            SceneObject {
                name: "tetra-wire",
                mesh: tetra,
                pose: Pose::at([2.6, -1.1, -0.5]),
                angular_velocity: [-0.3, 0.5, 0.0],
                float: None,
                color: rgb(0xf472b6),
                shading: Shading::Wireframe,
            },
        ];

        let lighting = Lighting {
            ambient: 0.25,
            points: vec![
                PointLight {
                    position: [4.0, 4.0, 4.0],
                    color: rgb(0xff8a5b),
                    intensity: 1.4,
                },
                PointLight {
                    position: [-4.0, -2.0, -3.0],
                    color: rgb(0x5b8cff),
                    intensity: 1.1,
                },
            ],
        };

        let stars = Starfield::generate(
            config.star_count,
            config.star_radius,
            config.star_depth.max(0.0),
            STAR_SEED,
        );

        let mut scene = Self {
            objects,
            stars,
            lighting,
            elapsed: 0.0,
        };
        // Settle the float oscillators at t = 0.
        scene.tick(0.0);
        Ok(scene)
    }

    /// Advance every pose by `dt` seconds.
    pub fn tick(&mut self, dt: f32) {
        self.elapsed += dt;
        let elapsed = self.elapsed;
        for object in &mut self.objects {
            object.advance(dt, elapsed);
        }
        self.stars.advance(dt);
    }

    pub fn object(&self, name: &str) -> Option<&SceneObject> {
        self.objects.iter().find(|o| o.name == name)
    }

    pub fn poses(&self) -> Vec<Pose> {
        self.objects.iter().map(|o| o.pose).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scene() -> HeroScene {
        let config = SceneConfig {
            star_count: 100,
            ..Default::default()
        };
        HeroScene::build(&config).unwrap()
    }

    #[test]
    fn builds_expected_objects() {
        let s = scene();
        let names: Vec<_> = s.objects.iter().map(|o| o.name).collect();
        assert_eq!(names, ["torus-knot", "tetra-solid", "tetra-wire"]);
        assert_eq!(s.stars.stars.len(), 100);
        assert_eq!(s.lighting.points.len(), 2);
        assert_eq!(s.object("tetra-wire").unwrap().shading, Shading::Wireframe);
    }

    #[test]
    fn rotation_is_rate_times_delta() {
        let mut s = scene();
        let before = s.object("tetra-solid").unwrap().pose.rotation;
        s.tick(0.5);
        let after = s.object("tetra-solid").unwrap().pose.rotation;
        assert!((after[0] - before[0] - 0.2).abs() < 1e-6);
        assert!((after[1] - before[1] - 0.3).abs() < 1e-6);
    }

    #[test]
    fn rotation_is_frame_rate_independent() {
        let mut coarse = scene();
        let mut fine = scene();
        coarse.tick(1.0);
        for _ in 0..60 {
            fine.tick(1.0 / 60.0);
        }
        for (a, b) in coarse.poses().iter().zip(fine.poses()) {
            for axis in 0..3 {
                assert!((a.rotation[axis] - b.rotation[axis]).abs() < 1e-4);
            }
            assert!((a.float_offset - b.float_offset).abs() < 1e-4);
        }
    }

    #[test]
    fn tetrahedra_spin_at_distinct_rates() {
        let s = scene();
        let a = s.object("tetra-solid").unwrap().angular_velocity;
        let b = s.object("tetra-wire").unwrap().angular_velocity;
        assert_ne!(a, b);
        // Symmetric placement off-center
        let pa = s.object("tetra-solid").unwrap().pose.position;
        let pb = s.object("tetra-wire").unwrap().pose.position;
        assert!((pa[0] + pb[0]).abs() < 1e-6);
    }

    #[test]
    fn knot_floats_within_bounds() {
        let mut s = scene();
        for _ in 0..600 {
            s.tick(0.05);
            let pose = s.object("torus-knot").unwrap().pose;
            assert!(pose.float_offset.abs() <= 0.12 + 1e-6);
            assert!(pose.float_tilt[0].abs() <= 0.6 / 8.0 + 1e-6);
        }
    }

    #[test]
    fn zero_delta_changes_nothing() {
        let mut s = scene();
        s.tick(0.3);
        let before = s.poses();
        s.tick(0.0);
        assert_eq!(before, s.poses());
    }

    #[test]
    fn rejects_empty_starfield() {
        let config = SceneConfig {
            star_count: 0,
            ..Default::default()
        };
        assert!(matches!(HeroScene::build(&config), Err(FolioError::Scene { .. })));
    }

    #[test]
    fn warm_light_brightens_facing_surface() {
        let s = scene();
        let toward = s.lighting.shade([1.0, 1.0, 1.0], [0.0, 0.0, 0.0], math::normalize([1.0, 1.0, 1.0]));
        let away = s.lighting.shade([1.0, 1.0, 1.0], [0.0, 0.0, 0.0], math::normalize([-1.0, -1.0, -1.0]));
        assert!(toward[0] > away[0]);
        // Ambient floor
        assert!(away.iter().all(|c| *c >= 0.25 - 1e-6));
    }
}
