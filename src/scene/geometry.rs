//! Parametric meshes for the hero scene.

use super::math::{add, cross, normalize, scale, sub, Vec3};

/// Indexed triangle mesh with a precomputed edge list for wireframe drawing.
#[derive(Debug, Clone)]
pub struct Mesh {
    pub vertices: Vec<Vec3>,
    pub triangles: Vec<[u32; 3]>,
    pub edges: Vec<[u32; 2]>,
}

impl Mesh {
    fn new(vertices: Vec<Vec3>, triangles: Vec<[u32; 3]>) -> Self {
        let edges = unique_edges(&triangles);
        Self {
            vertices,
            triangles,
            edges,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.vertices.iter().flatten().all(|c| c.is_finite())
    }
}

fn unique_edges(triangles: &[[u32; 3]]) -> Vec<[u32; 2]> {
    let mut edges: Vec<[u32; 2]> = triangles
        .iter()
        .flat_map(|t| [[t[0], t[1]], [t[1], t[2]], [t[2], t[0]]])
        .map(|[a, b]| if a < b { [a, b] } else { [b, a] })
        .collect();
    edges.sort_unstable();
    edges.dedup();
    edges
}

/// Torus knot winding `p` times around its axis and `q` times through the hole.
pub fn torus_knot(
    radius: f32,
    tube: f32,
    tubular_segments: usize,
    radial_segments: usize,
    p: u32,
    q: u32,
) -> Mesh {
    let (p, q) = (p as f32, q as f32);
    let curve = |u: f32| -> Vec3 {
        let qu_over_p = q / p * u;
        let cs = qu_over_p.cos();
        [
            radius * (2.0 + cs) * 0.5 * u.cos(),
            radius * (2.0 + cs) * 0.5 * u.sin(),
            radius * qu_over_p.sin() * 0.5,
        ]
    };

    let mut vertices = Vec::with_capacity((tubular_segments + 1) * (radial_segments + 1));
    for i in 0..=tubular_segments {
        let u = i as f32 / tubular_segments as f32 * p * std::f32::consts::TAU;
        let p1 = curve(u);
        let p2 = curve(u + 0.01);

        // Frenet-like frame around the curve
        let t = sub(p2, p1);
        let n = add(p2, p1);
        let b = normalize(cross(t, n));
        let n = normalize(cross(b, t));

        for j in 0..=radial_segments {
            let v = j as f32 / radial_segments as f32 * std::f32::consts::TAU;
            let cx = -tube * v.cos();
            let cy = tube * v.sin();
            vertices.push(add(p1, add(scale(n, cx), scale(b, cy))));
        }
    }

    let stride = (radial_segments + 1) as u32;
    let mut triangles = Vec::with_capacity(tubular_segments * radial_segments * 2);
    for j in 1..=tubular_segments as u32 {
        for i in 1..=radial_segments as u32 {
            let a = stride * (j - 1) + (i - 1);
            let b = stride * j + (i - 1);
            let c = stride * j + i;
            let d = stride * (j - 1) + i;
            triangles.push([a, b, d]);
            triangles.push([b, c, d]);
        }
    }

    Mesh::new(vertices, triangles)
}

/// Regular tetrahedron with circumradius `radius`, outward-facing winding.
pub fn tetrahedron(radius: f32) -> Mesh {
    let k = radius / 3f32.sqrt();
    let vertices = vec![
        [k, k, k],
        [-k, -k, k],
        [-k, k, -k],
        [k, -k, -k],
    ];
    let triangles = vec![[2, 1, 0], [0, 3, 2], [1, 3, 0], [2, 3, 1]];
    Mesh::new(vertices, triangles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::math::{dot, length};

    #[test]
    fn torus_knot_counts() {
        let m = torus_knot(1.0, 0.3, 128, 16, 2, 3);
        assert_eq!(m.vertices.len(), 129 * 17);
        assert_eq!(m.triangles.len(), 128 * 16 * 2);
        assert!(m.is_finite());
        let max = m.vertices.len() as u32;
        assert!(m.triangles.iter().flatten().all(|&i| i < max));
    }

    #[test]
    fn torus_knot_stays_within_bounds() {
        let m = torus_knot(1.0, 0.3, 64, 8, 2, 3);
        // Curve reaches at most 1.5 * radius from the axis, plus the tube.
        assert!(m.vertices.iter().all(|v| length(*v) <= 1.5 + 0.3 + 1e-3));
    }

    #[test]
    fn tetrahedron_is_regular() {
        let m = tetrahedron(0.7);
        assert_eq!(m.vertices.len(), 4);
        assert_eq!(m.edges.len(), 6);
        for v in &m.vertices {
            assert!((length(*v) - 0.7).abs() < 1e-5);
        }
    }

    #[test]
    fn tetrahedron_faces_point_outward() {
        let m = tetrahedron(1.0);
        for t in &m.triangles {
            let [a, b, c] = t.map(|i| m.vertices[i as usize]);
            let n = cross(sub(b, a), sub(c, a));
            let center = scale(add(add(a, b), c), 1.0 / 3.0);
            assert!(dot(n, center) > 0.0);
        }
    }
}
