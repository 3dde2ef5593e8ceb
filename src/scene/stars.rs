//! Starfield backdrop: point sprites in a spherical shell around the camera.

use super::math::{rotate_euler, unit_hash, Vec3};

/// Yaw drift of the whole field (rad/s)
pub const DRIFT_SPEED: f32 = 0.02;
/// Sprite size multiplier
pub const SIZE_FACTOR: f32 = 4.0;

#[derive(Debug, Clone, Copy)]
pub struct Star {
    pub position: Vec3,
    /// Base sprite size before perspective
    pub size: f32,
    /// Opacity from depth inside the shell (outer stars are dimmer)
    pub fade: f32,
    /// Phase offset for twinkling
    pub phase: f32,
}

#[derive(Debug, Clone)]
pub struct Starfield {
    pub stars: Vec<Star>,
    /// Accumulated drift around the y axis
    pub yaw: f32,
    pub radius: f32,
    pub depth: f32,
}

impl Starfield {
    /// Scatter `count` stars between `radius` and `radius + depth`.
    ///
    /// Placement walks the shell from the outside in, so star density grows
    /// toward the inner radius.
    pub fn generate(count: usize, radius: f32, depth: f32, seed: u64) -> Self {
        let mut stars = Vec::with_capacity(count);
        let mut r = radius + depth;
        let increment = if count > 0 { depth / count as f32 } else { 0.0 };

        for i in 0..count {
            let s = seed.wrapping_mul(0x1000_0000).wrapping_add(i as u64 * 4);
            r -= increment * unit_hash(s);
            let polar = (1.0 - unit_hash(s + 1) * 2.0).acos();
            let azimuth = unit_hash(s + 2) * std::f32::consts::TAU;
            let position = [
                r * polar.sin() * azimuth.sin(),
                r * polar.cos(),
                r * polar.sin() * azimuth.cos(),
            ];
            let shell_t = if depth > 0.0 {
                ((r - radius) / depth).clamp(0.0, 1.0)
            } else {
                0.0
            };
            stars.push(Star {
                position,
                size: (0.5 + 0.5 * unit_hash(s + 3)) * SIZE_FACTOR,
                fade: 1.0 - 0.75 * shell_t,
                phase: unit_hash(s + 3) * std::f32::consts::TAU,
            });
        }

        Self {
            stars,
            yaw: 0.0,
            radius,
            depth,
        }
    }

    pub fn advance(&mut self, dt: f32) {
        self.yaw = (self.yaw + DRIFT_SPEED * dt) % std::f32::consts::TAU;
    }

    /// World-space position of a star after drift.
    pub fn world_position(&self, star: &Star) -> Vec3 {
        rotate_euler(star.position, [0.0, self.yaw, 0.0])
    }

    /// Twinkle multiplier in [0.7, 1.0] at scene time `t`.
    pub fn twinkle(star: &Star, t: f32) -> f32 {
        0.85 + 0.15 * (t * 1.5 + star.phase).sin()
    }
}
