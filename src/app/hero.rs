//! Hero rendering for `PortfolioApp`.
//!
//! A viewport-tall 3D backdrop with the owner's copy and two calls to action
//! laid over it. Pointer input on the backdrop drives the orbit camera.

use eframe::egui;

use folio::content::SectionId;
use folio::render::hero_paint::paint_scene;
use folio::render::section::column_margin;
use folio::render::theme::Theme;
use folio::scene::loader::SceneStatus;

use super::navigation::ScrollTarget;
use super::PortfolioApp;

const MIN_HERO_HEIGHT: f32 = 520.0;

impl PortfolioApp {
    /// Lay out the hero. Returns true when the scene wants another frame.
    pub fn draw_hero(&mut self, ui: &mut egui::Ui, now: f64) -> bool {
        let theme = self.theme;
        let height = ui.clip_rect().height().max(MIN_HERO_HEIGHT);
        let (rect, response) =
            ui.allocate_exact_size(egui::vec2(ui.available_width(), height), egui::Sense::drag());
        self.settle_scroll(ui, ScrollTarget::Top, rect);

        let visible = ui.is_rect_visible(rect);
        let repaint = self.stage.frame(now, visible);

        if matches!(self.stage.status(), SceneStatus::Ready(_)) {
            self.handle_camera_input(ui, &response);
        }

        if visible {
            let painter = ui.painter_at(rect);
            match self.stage.status() {
                SceneStatus::Ready(scene) => {
                    let stats = paint_scene(&painter, rect, scene, &self.stage.camera, &theme);
                    log::trace!(
                        "hero frame: {} stars, {} faces, {} edges",
                        stats.stars,
                        stats.faces,
                        stats.edges
                    );
                }
                SceneStatus::Failed(_) => paint_placeholder(&painter, rect, &theme),
                // Blank until the scene is ready.
                SceneStatus::Loading => {}
            }
        }

        self.draw_hero_copy(ui, rect);
        repaint
    }

    fn handle_camera_input(&mut self, ui: &egui::Ui, response: &egui::Response) {
        let camera = &mut self.stage.camera;
        if response.dragged_by(egui::PointerButton::Primary) {
            let d = response.drag_delta();
            camera.orbit(d.x, d.y);
        }
        if response.dragged_by(egui::PointerButton::Secondary)
            || response.dragged_by(egui::PointerButton::Middle)
        {
            let d = response.drag_delta();
            if !camera.pan(d.x, d.y) {
                log::trace!("pan ignored");
            }
        }
        if response.hovered() {
            let zoom = ui.input(|i| i.zoom_delta());
            if zoom != 1.0 {
                camera.zoom_by(zoom);
            }
        }
    }

    fn draw_hero_copy(&mut self, ui: &mut egui::Ui, rect: egui::Rect) {
        let theme = self.theme;
        let margin = column_margin(rect.width());
        let inner = egui::Rect::from_min_max(
            egui::pos2(rect.left() + margin, rect.top() + rect.height() * 0.3),
            egui::pos2(rect.right() - margin, rect.bottom()),
        );
        let mut copy = ui.new_child(
            egui::UiBuilder::new()
                .max_rect(inner)
                .layout(egui::Layout::top_down(egui::Align::Min)),
        );

        let profile = &self.portfolio.profile;
        let text = |t: egui::RichText| egui::Label::new(t).selectable(false);
        copy.add(text(
            egui::RichText::new(profile.role.to_uppercase())
                .size(13.0)
                .strong()
                .extra_letter_spacing(2.0)
                .color(theme.accent_alt),
        ));
        copy.add_space(8.0);
        copy.add(text(
            egui::RichText::new(&profile.name)
                .size(56.0)
                .strong()
                .color(theme.heading),
        ));
        copy.add_space(8.0);
        copy.set_max_width(inner.width().min(560.0));
        copy.add(text(egui::RichText::new(&profile.tagline).size(18.0).color(theme.text)).wrap());
        copy.add_space(24.0);

        let mut target = None;
        copy.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 12.0;
            if cta(ui, "View projects", theme.accent, theme.heading).clicked() {
                target = Some(SectionId::Projects);
            }
            if cta(ui, "Get in touch", theme.card_bg, theme.text).clicked() {
                target = Some(SectionId::Contact);
            }
        });
        if let Some(section) = target {
            self.go_to(section);
        }
    }
}

fn cta(ui: &mut egui::Ui, label: &str, fill: egui::Color32, color: egui::Color32) -> egui::Response {
    ui.add(
        egui::Button::new(egui::RichText::new(label).size(15.0).color(color))
            .fill(fill)
            .rounding(egui::Rounding::same(10.0))
            .min_size(egui::vec2(140.0, 42.0)),
    )
    .on_hover_cursor(egui::CursorIcon::PointingHand)
}

/// Static stand-in for a scene that failed to build.
fn paint_placeholder(painter: &egui::Painter, rect: egui::Rect, theme: &Theme) {
    painter.rect_filled(rect, 0.0, theme.card_bg.gamma_multiply(0.35));
}
