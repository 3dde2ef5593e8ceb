//! Orbit camera: drag to rotate around a fixed target, pinch to zoom.

use super::math::{add, cross, dot, normalize, sub, Vec3};

/// Radians of orbit per pixel of drag
const ROTATE_SPEED: f32 = 0.008;
/// Keeps the camera off the poles
const MAX_ELEVATION: f32 = 1.55;
/// Near clip distance in view space
const NEAR: f32 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitCamera {
    /// Horizontal orbit angle in radians (0 = looking down -z from +z)
    pub azimuth: f32,
    /// Vertical orbit angle in radians (0 = level)
    pub elevation: f32,
    pub distance: f32,
    pub target: Vec3,
    /// Vertical field of view in radians
    pub fov: f32,
    min_distance: f32,
    max_distance: f32,
    enable_pan: bool,
}

/// A point projected into a viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projected {
    pub x: f32,
    pub y: f32,
    /// Distance along the view axis
    pub depth: f32,
}

impl OrbitCamera {
    /// Camera on the +z axis at `distance`, looking at the origin.
    /// `distance` is clamped into `[min_distance, max_distance]`.
    pub fn new(distance: f32, fov_degrees: f32, min_distance: f32, max_distance: f32) -> Self {
        Self {
            azimuth: 0.0,
            elevation: 0.0,
            distance: distance.clamp(min_distance, max_distance),
            target: [0.0, 0.0, 0.0],
            fov: fov_degrees.to_radians(),
            min_distance,
            max_distance,
            enable_pan: false,
        }
    }

    pub fn with_pan(mut self, enabled: bool) -> Self {
        self.enable_pan = enabled;
        self
    }

    pub fn zoom_range(&self) -> (f32, f32) {
        (self.min_distance, self.max_distance)
    }

    pub fn eye(&self) -> Vec3 {
        let (sa, ca) = self.azimuth.sin_cos();
        let (se, ce) = self.elevation.sin_cos();
        add(
            self.target,
            [
                self.distance * sa * ce,
                self.distance * se,
                self.distance * ca * ce,
            ],
        )
    }

    /// Rotate around the target by a pointer drag in pixels.
    pub fn orbit(&mut self, dx: f32, dy: f32) {
        self.azimuth -= dx * ROTATE_SPEED;
        self.elevation = (self.elevation + dy * ROTATE_SPEED).clamp(-MAX_ELEVATION, MAX_ELEVATION);
    }

    /// Zoom by a multiplicative factor (pinch or ctrl+wheel); above 1 moves
    /// closer.
    pub fn zoom_by(&mut self, factor: f32) {
        if factor > 0.0 && factor.is_finite() {
            self.distance = (self.distance / factor).clamp(self.min_distance, self.max_distance);
        }
    }

    /// Move the target in the view plane. Returns false when panning is
    /// disabled, in which case nothing changes.
    pub fn pan(&mut self, dx: f32, dy: f32) -> bool {
        if !self.enable_pan {
            return false;
        }
        let (right, up, _) = self.basis();
        let k = self.distance * 0.002;
        self.target = add(
            self.target,
            add(
                [right[0] * -dx * k, right[1] * -dx * k, right[2] * -dx * k],
                [up[0] * dy * k, up[1] * dy * k, up[2] * dy * k],
            ),
        );
        true
    }

    /// (right, up, forward) unit vectors.
    fn basis(&self) -> (Vec3, Vec3, Vec3) {
        let forward = normalize(sub(self.target, self.eye()));
        let right = normalize(cross(forward, [0.0, 1.0, 0.0]));
        let up = cross(right, forward);
        (right, up, forward)
    }

    /// Project a world-space point into a `width` x `height` viewport with the
    /// origin at its top-left corner. `None` when behind the near plane.
    pub fn project(&self, p: Vec3, width: f32, height: f32) -> Option<Projected> {
        let (right, up, forward) = self.basis();
        let rel = sub(p, self.eye());
        let vz = dot(rel, forward);
        if vz <= NEAR {
            return None;
        }
        let f = 1.0 / (self.fov * 0.5).tan();
        let aspect = width / height.max(1.0);
        let ndc_x = dot(rel, right) / vz * f / aspect;
        let ndc_y = -dot(rel, up) / vz * f;
        Some(Projected {
            x: width * 0.5 + ndc_x * width * 0.5,
            y: height * 0.5 + ndc_y * height * 0.5,
            depth: vz,
        })
    }
}
