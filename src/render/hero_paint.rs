//! Software rasterisation of the hero scene with egui's Painter.
//!
//! Solid meshes are flat-shaded per face with the scene lights, back-face
//! culled and depth-sorted (painter's algorithm) into a single `egui::Mesh`.
//! Wireframes become line segments, stars become small discs. Projection
//! runs data-parallel with rayon and is joined before anything is painted.

use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Shape, Stroke};
use rayon::prelude::*;

use super::theme::{color3, Theme};
use crate::scene::camera::OrbitCamera;
use crate::scene::math::{add, cross, dot, normalize, scale, sub, Vec3};
use crate::scene::stars::Starfield;
use crate::scene::{HeroScene, SceneObject, Shading, OVERLAY_ANCHOR, OVERLAY_LABEL};

/// Screen-space star disc
#[derive(Debug, Clone, Copy)]
pub struct StarSprite {
    pub pos: Pos2,
    pub radius: f32,
    pub alpha: f32,
}

/// Screen-space shaded triangle
#[derive(Debug, Clone, Copy)]
pub struct Face {
    pub points: [Pos2; 3],
    pub depth: f32,
    pub color: Color32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaintStats {
    pub stars: usize,
    pub faces: usize,
    pub edges: usize,
}

fn to_screen(rect: Rect, x: f32, y: f32) -> Pos2 {
    Pos2::new(rect.left() + x, rect.top() + y)
}

pub fn project_stars(scene: &HeroScene, camera: &OrbitCamera, rect: Rect) -> Vec<StarSprite> {
    let field = &scene.stars;
    let (w, h) = (rect.width(), rect.height());
    let t = scene.elapsed;
    field
        .stars
        .par_iter()
        .filter_map(|star| {
            let p = camera.project(field.world_position(star), w, h)?;
            if p.x < 0.0 || p.y < 0.0 || p.x > w || p.y > h {
                return None;
            }
            let radius = (star.size * 15.0 / p.depth).clamp(0.4, 2.5);
            Some(StarSprite {
                pos: to_screen(rect, p.x, p.y),
                radius,
                alpha: star.fade * Starfield::twinkle(star, t),
            })
        })
        .collect()
}

/// Shaded, culled faces of every solid object, sorted far to near.
pub fn build_faces(scene: &HeroScene, camera: &OrbitCamera, rect: Rect) -> Vec<Face> {
    let eye = camera.eye();
    let mut faces: Vec<Face> = scene
        .objects
        .iter()
        .filter(|o| o.shading == Shading::Solid)
        .flat_map(|object| object_faces(scene, object, camera, eye, rect))
        .collect();
    faces.sort_by(|a, b| b.depth.total_cmp(&a.depth));
    faces
}

fn object_faces(
    scene: &HeroScene,
    object: &SceneObject,
    camera: &OrbitCamera,
    eye: Vec3,
    rect: Rect,
) -> Vec<Face> {
    let world: Vec<Vec3> = object
        .mesh
        .vertices
        .par_iter()
        .map(|v| object.pose.transform(*v))
        .collect();
    let (w, h) = (rect.width(), rect.height());

    object
        .mesh
        .triangles
        .par_iter()
        .filter_map(|tri| {
            let [a, b, c] = tri.map(|i| world[i as usize]);
            let normal = normalize(cross(sub(b, a), sub(c, a)));
            let center = scale(add(add(a, b), c), 1.0 / 3.0);
            if dot(normal, sub(eye, center)) <= 0.0 {
                return None;
            }
            let pa = camera.project(a, w, h)?;
            let pb = camera.project(b, w, h)?;
            let pc = camera.project(c, w, h)?;
            let shade = scene.lighting.shade(object.color, center, normal);
            Some(Face {
                points: [
                    to_screen(rect, pa.x, pa.y),
                    to_screen(rect, pb.x, pb.y),
                    to_screen(rect, pc.x, pc.y),
                ],
                depth: (pa.depth + pb.depth + pc.depth) / 3.0,
                color: color3(shade),
            })
        })
        .collect()
}

/// Projected edges of every wireframe object.
pub fn build_edges(scene: &HeroScene, camera: &OrbitCamera, rect: Rect) -> Vec<([Pos2; 2], Color32)> {
    let (w, h) = (rect.width(), rect.height());
    let mut out = Vec::new();
    for object in scene.objects.iter().filter(|o| o.shading == Shading::Wireframe) {
        let color = color3(object.color);
        for [i, j] in &object.mesh.edges {
            let a = object.pose.transform(object.mesh.vertices[*i as usize]);
            let b = object.pose.transform(object.mesh.vertices[*j as usize]);
            if let (Some(pa), Some(pb)) = (camera.project(a, w, h), camera.project(b, w, h)) {
                out.push(([to_screen(rect, pa.x, pa.y), to_screen(rect, pb.x, pb.y)], color));
            }
        }
    }
    out
}

/// Paint the whole scene into `rect`.
pub fn paint_scene(
    painter: &Painter,
    rect: Rect,
    scene: &HeroScene,
    camera: &OrbitCamera,
    theme: &Theme,
) -> PaintStats {
    let (stars, (faces, edges)) = rayon::join(
        || project_stars(scene, camera, rect),
        || {
            (
                build_faces(scene, camera, rect),
                build_edges(scene, camera, rect),
            )
        },
    );

    for s in &stars {
        let a = (s.alpha.clamp(0.0, 1.0) * 255.0) as u8;
        painter.circle_filled(s.pos, s.radius, Color32::from_white_alpha(a));
    }

    let mut mesh = egui::Mesh::default();
    for face in &faces {
        let base = mesh.vertices.len() as u32;
        for p in face.points {
            mesh.colored_vertex(p, face.color);
        }
        mesh.add_triangle(base, base + 1, base + 2);
    }
    painter.add(Shape::mesh(mesh));

    for (seg, color) in &edges {
        painter.line_segment(*seg, Stroke::new(1.5, *color));
    }

    paint_overlay_label(painter, rect, camera, theme);

    PaintStats {
        stars: stars.len(),
        faces: faces.len(),
        edges: edges.len(),
    }
}

/// Flat label pinned to a fixed scene point; always faces the viewer.
fn paint_overlay_label(painter: &Painter, rect: Rect, camera: &OrbitCamera, theme: &Theme) {
    if let Some(p) = camera.project(OVERLAY_ANCHOR, rect.width(), rect.height()) {
        let pos = to_screen(rect, p.x, p.y);
        if !rect.contains(pos) {
            return;
        }
        let font = FontId::proportional(12.0);
        let galley = painter.layout_no_wrap(OVERLAY_LABEL.to_owned(), font.clone(), theme.text);
        let bg = Rect::from_center_size(pos, galley.size() + egui::vec2(16.0, 8.0));
        painter.rect_filled(bg, bg.height() * 0.5, Color32::from_black_alpha(140));
        painter.text(pos, Align2::CENTER_CENTER, OVERLAY_LABEL, font, theme.text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SceneConfig;

    fn setup() -> (HeroScene, OrbitCamera, Rect) {
        let config = SceneConfig {
            star_count: 500,
            ..Default::default()
        };
        let scene = HeroScene::build(&config).unwrap();
        let camera = OrbitCamera::new(6.0, 50.0, 3.0, 8.0);
        let rect = Rect::from_min_size(Pos2::new(0.0, 64.0), egui::vec2(1200.0, 640.0));
        (scene, camera, rect)
    }

    #[test]
    fn faces_are_sorted_far_to_near() {
        let (scene, camera, rect) = setup();
        let faces = build_faces(&scene, &camera, rect);
        assert!(!faces.is_empty());
        for w in faces.windows(2) {
            assert!(w[0].depth >= w[1].depth);
        }
    }

    #[test]
    fn back_faces_are_culled() {
        let (scene, camera, rect) = setup();
        let faces = build_faces(&scene, &camera, rect);
        let total: usize = scene
            .objects
            .iter()
            .filter(|o| o.shading == Shading::Solid)
            .map(|o| o.mesh.triangles.len())
            .sum();
        assert!(faces.len() < total);
    }

    #[test]
    fn wireframe_has_six_edges() {
        let (scene, camera, rect) = setup();
        assert_eq!(build_edges(&scene, &camera, rect).len(), 6);
    }

    #[test]
    fn stars_land_inside_rect() {
        let (scene, camera, rect) = setup();
        let stars = project_stars(&scene, &camera, rect);
        assert!(!stars.is_empty());
        assert!(stars.len() <= 500);
        for s in &stars {
            assert!(rect.expand(0.5).contains(s.pos));
            assert!(s.radius >= 0.4 && s.radius <= 2.5);
            assert!(s.alpha > 0.0 && s.alpha <= 1.0);
        }
    }

    #[test]
    fn projection_follows_pose_updates() {
        let (mut scene, camera, rect) = setup();
        let before = build_edges(&scene, &camera, rect);
        scene.tick(0.1);
        let after = build_edges(&scene, &camera, rect);
        assert_ne!(before[0].0, after[0].0);
    }
}
