//! Navbar rendering for `PortfolioApp`.
//!
//! Owner name on the left, one link per nav entry on the right. The bar
//! lives in its own top panel so it stays visible above the scrolling page.

use eframe::egui;

use folio::render::widgets::nav_link;

use super::PortfolioApp;

impl PortfolioApp {
    /// Render the top navbar strip.
    pub fn draw_navbar(&mut self, ui: &mut egui::Ui) {
        let theme = self.theme;
        let mut clicked = None;

        ui.horizontal(|ui| {
            let name = ui
                .add(
                    egui::Label::new(
                        egui::RichText::new(&self.portfolio.profile.name)
                            .size(16.0)
                            .strong()
                            .color(theme.heading),
                    )
                    .sense(egui::Sense::click()),
                )
                .on_hover_cursor(egui::CursorIcon::PointingHand);
            if name.clicked() {
                self.scroll_to_top();
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.spacing_mut().item_spacing.x = 22.0;
                // Right-to-left layout: walk the links backwards to keep order.
                for link in self.portfolio.nav.iter().rev() {
                    let active = link.target().is_some() && link.target() == self.active;
                    if let Some(target) = nav_link(ui, link, active, &theme) {
                        clicked = Some(target);
                    }
                }
            });
        });

        if let Some(target) = clicked {
            self.go_to(target);
        }
    }
}
