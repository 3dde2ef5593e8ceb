//! Small vector helpers over `[f32; 3]`.

pub type Vec3 = [f32; 3];

#[inline]
pub fn add(a: Vec3, b: Vec3) -> Vec3 {
    [a[0] + b[0], a[1] + b[1], a[2] + b[2]]
}

#[inline]
pub fn sub(a: Vec3, b: Vec3) -> Vec3 {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

#[inline]
pub fn scale(a: Vec3, s: f32) -> Vec3 {
    [a[0] * s, a[1] * s, a[2] * s]
}

#[inline]
pub fn dot(a: Vec3, b: Vec3) -> f32 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

#[inline]
pub fn cross(a: Vec3, b: Vec3) -> Vec3 {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

#[inline]
pub fn length(a: Vec3) -> f32 {
    dot(a, a).sqrt()
}

/// Unit vector, or `a` unchanged when it is (nearly) zero.
#[inline]
pub fn normalize(a: Vec3) -> Vec3 {
    let len = length(a);
    if len > 1e-6 {
        scale(a, 1.0 / len)
    } else {
        a
    }
}

/// Rotate by Euler angles applied in X, Y, Z intrinsic order
/// (matrix `Rx * Ry * Rz`).
pub fn rotate_euler(v: Vec3, r: Vec3) -> Vec3 {
    let (sx, cx) = r[0].sin_cos();
    let (sy, cy) = r[1].sin_cos();
    let (sz, cz) = r[2].sin_cos();

    // Rz
    let v = [v[0] * cz - v[1] * sz, v[0] * sz + v[1] * cz, v[2]];
    // Ry
    let v = [v[0] * cy + v[2] * sy, v[1], -v[0] * sy + v[2] * cy];
    // Rx
    [v[0], v[1] * cx - v[2] * sx, v[1] * sx + v[2] * cx]
}

/// Deterministic hash to [0, 1).
pub fn unit_hash(seed: u64) -> f32 {
    // splitmix64 finaliser
    let mut z = seed.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^= z >> 31;
    (z >> 40) as f32 / (1u64 << 24) as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vec3, b: Vec3) -> bool {
        (0..3).all(|i| (a[i] - b[i]).abs() < 1e-5)
    }

    #[test]
    fn quarter_turns() {
        let half_pi = std::f32::consts::FRAC_PI_2;
        assert!(close(rotate_euler([1.0, 0.0, 0.0], [0.0, 0.0, half_pi]), [0.0, 1.0, 0.0]));
        assert!(close(rotate_euler([0.0, 0.0, 1.0], [0.0, half_pi, 0.0]), [1.0, 0.0, 0.0]));
        assert!(close(rotate_euler([0.0, 1.0, 0.0], [half_pi, 0.0, 0.0]), [0.0, 0.0, 1.0]));
    }

    #[test]
    fn rotation_preserves_length() {
        let v = [0.3, -1.2, 2.5];
        let r = rotate_euler(v, [0.7, -1.9, 2.2]);
        assert!((length(v) - length(r)).abs() < 1e-5);
    }

    #[test]
    fn hash_range_and_determinism() {
        for seed in 0..1000 {
            let h = unit_hash(seed);
            assert!((0.0..1.0).contains(&h));
            assert_eq!(h, unit_hash(seed));
        }
        assert_ne!(unit_hash(1), unit_hash(2));
    }

    #[test]
    fn cross_and_normalize() {
        assert!(close(cross([1.0, 0.0, 0.0], [0.0, 1.0, 0.0]), [0.0, 0.0, 1.0]));
        assert!(close(normalize([0.0, 3.0, 4.0]), [0.0, 0.6, 0.8]));
        assert!(close(normalize([0.0, 0.0, 0.0]), [0.0, 0.0, 0.0]));
    }
}
