//! Palette and the fixed full-viewport background layers.
//!
//! The three decoration layers (color wash, grid texture, vignette) are drawn
//! on egui's background layer, underneath every panel, and never sense
//! pointer input.

use egui::{Color32, Painter, Pos2, Rect, Stroke, Vec2};

/// Page palette. Read-only after startup.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub page_bg: Color32,
    pub card_bg: Color32,
    pub card_border: Color32,
    pub heading: Color32,
    pub text: Color32,
    pub muted: Color32,
    pub accent: Color32,
    pub accent_alt: Color32,
    pub pill_bg: Color32,
    pub pill_text: Color32,
    pub error: Color32,
}

impl Theme {
    pub const fn dark() -> Self {
        Self {
            page_bg: Color32::from_rgb(9, 10, 20),
            card_bg: Color32::from_rgb(18, 20, 36),
            card_border: Color32::from_rgb(44, 48, 78),
            heading: Color32::from_rgb(236, 238, 250),
            text: Color32::from_rgb(190, 194, 215),
            muted: Color32::from_rgb(128, 134, 165),
            accent: Color32::from_rgb(124, 92, 255),
            accent_alt: Color32::from_rgb(34, 211, 238),
            pill_bg: Color32::from_rgb(36, 32, 72),
            pill_text: Color32::from_rgb(196, 184, 255),
            error: Color32::from_rgb(248, 113, 113),
        }
    }
}

pub const THEME: Theme = Theme::dark();

/// Grid cell size in points
const GRID_SPACING: f32 = 48.0;
/// Number of rings used to fake a radial gradient
const GRADIENT_RINGS: usize = 24;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackgroundLayer {
    ColorWash,
    Grid,
    Vignette,
}

impl BackgroundLayer {
    /// Back to front.
    pub const ALL: [BackgroundLayer; 3] = [
        BackgroundLayer::ColorWash,
        BackgroundLayer::Grid,
        BackgroundLayer::Vignette,
    ];
}

/// Paint all decoration layers over `screen`.
pub fn paint_background(painter: &Painter, screen: Rect, theme: &Theme) {
    painter.rect_filled(screen, 0.0, theme.page_bg);
    for layer in BackgroundLayer::ALL {
        match layer {
            BackgroundLayer::ColorWash => paint_color_wash(painter, screen, theme),
            BackgroundLayer::Grid => paint_grid(painter, screen),
            BackgroundLayer::Vignette => paint_vignette(painter, screen),
        }
    }
}

fn paint_color_wash(painter: &Painter, screen: Rect, theme: &Theme) {
    let glows = [
        (
            Pos2::new(screen.left() + screen.width() * 0.2, screen.top()),
            screen.width() * 0.45,
            theme.accent,
        ),
        (
            Pos2::new(screen.right() - screen.width() * 0.15, screen.top() + screen.height() * 0.35),
            screen.width() * 0.35,
            theme.accent_alt,
        ),
    ];
    for (center, radius, color) in glows {
        for ring in 0..GRADIENT_RINGS {
            let t = ring as f32 / GRADIENT_RINGS as f32;
            let alpha = (6.0 * (1.0 - t)) as u8;
            let c = Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha);
            painter.circle_filled(center, radius * (1.0 - t), c);
        }
    }
}

fn paint_grid(painter: &Painter, screen: Rect) {
    let stroke = Stroke::new(1.0, Color32::from_rgba_unmultiplied(255, 255, 255, 8));
    for x in grid_lines(screen.left(), screen.right(), GRID_SPACING) {
        painter.line_segment([Pos2::new(x, screen.top()), Pos2::new(x, screen.bottom())], stroke);
    }
    for y in grid_lines(screen.top(), screen.bottom(), GRID_SPACING) {
        painter.line_segment([Pos2::new(screen.left(), y), Pos2::new(screen.right(), y)], stroke);
    }
}

fn paint_vignette(painter: &Painter, screen: Rect) {
    // Stacked inset borders darken toward the edges.
    let max_inset = screen.width().min(screen.height()) * 0.18;
    for ring in 0..GRADIENT_RINGS {
        let t = ring as f32 / GRADIENT_RINGS as f32;
        let inset = max_inset * t;
        let width = max_inset / GRADIENT_RINGS as f32 + 1.0;
        let alpha = (90.0 * (1.0 - t) * (1.0 - t)) as u8;
        let r = screen.shrink2(Vec2::splat(inset + width * 0.5));
        painter.rect_stroke(r, 0.0, Stroke::new(width, Color32::from_black_alpha(alpha)));
    }
}

/// Positions of grid lines spaced `spacing` apart covering `[start, end]`.
pub fn grid_lines(start: f32, end: f32, spacing: f32) -> impl Iterator<Item = f32> {
    let first = (start / spacing).floor() * spacing;
    let count = if spacing > 0.0 && end > first {
        ((end - first) / spacing).ceil() as usize + 1
    } else {
        0
    };
    (0..count).map(move |i| first + i as f32 * spacing)
}

/// RGB in [0, 1] to an opaque `Color32`.
pub fn color3(c: [f32; 3]) -> Color32 {
    Color32::from_rgb(
        (c[0].clamp(0.0, 1.0) * 255.0) as u8,
        (c[1].clamp(0.0, 1.0) * 255.0) as u8,
        (c[2].clamp(0.0, 1.0) * 255.0) as u8,
    )
}

/// Linear interpolation between two colors, `t` in [0, 1].
pub fn lerp_color(a: Color32, b: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let mix = |x: u8, y: u8| (x as f32 + (y as f32 - x as f32) * t) as u8;
    Color32::from_rgba_unmultiplied(
        mix(a.r(), b.r()),
        mix(a.g(), b.g()),
        mix(a.b(), b.b()),
        mix(a.a(), b.a()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_covers_range() {
        let lines: Vec<f32> = grid_lines(10.0, 200.0, 48.0).collect();
        assert_eq!(lines.first().copied(), Some(0.0));
        assert!(*lines.last().unwrap() >= 200.0);
        for w in lines.windows(2) {
            assert!((w[1] - w[0] - 48.0).abs() < 1e-4);
        }
    }

    #[test]
    fn grid_with_bad_spacing_is_empty() {
        assert_eq!(grid_lines(0.0, 100.0, 0.0).count(), 0);
    }

    #[test]
    fn color_conversion() {
        let c = color3([1.0, 0.0, 0.5]);
        assert_eq!(c.r(), 255);
        assert_eq!(c.g(), 0);
        assert_eq!(c.b(), 127);
        assert_eq!(color3([2.0, -1.0, 0.0]), Color32::from_rgb(255, 0, 0));
    }

    #[test]
    fn lerp_colors() {
        let a = Color32::from_rgb(0, 0, 0);
        let b = Color32::from_rgb(100, 200, 50);
        let mid = lerp_color(a, b, 0.5);
        assert_eq!(mid.r(), 50);
        assert_eq!(mid.g(), 100);
        assert_eq!(mid.b(), 25);
    }

    #[test]
    fn layers_in_back_to_front_order() {
        assert_eq!(
            BackgroundLayer::ALL,
            [BackgroundLayer::ColorWash, BackgroundLayer::Grid, BackgroundLayer::Vignette]
        );
    }
}
