//! Stateless building blocks: tag pill, stat card, nav link.

use egui::{Align2, FontId, Rounding, Sense, Stroke, Vec2};

use super::theme::{lerp_color, Theme};
use crate::content::{NavLink, SectionId, Stat};

const PILL_PADDING: Vec2 = Vec2::new(10.0, 4.0);
const PILL_FONT: f32 = 12.0;

/// Inline rounded badge holding one tag label.
pub fn tag_pill(ui: &mut egui::Ui, label: &str, theme: &Theme) -> egui::Response {
    let font = FontId::proportional(PILL_FONT);
    let galley = ui
        .painter()
        .layout_no_wrap(label.to_owned(), font.clone(), theme.pill_text);
    let size = galley.size() + PILL_PADDING * 2.0;
    let (rect, response) = ui.allocate_exact_size(size, Sense::hover());
    if ui.is_rect_visible(rect) {
        let painter = ui.painter();
        painter.rect(
            rect,
            Rounding::same(size.y * 0.5),
            theme.pill_bg,
            Stroke::new(1.0, theme.accent.linear_multiply(0.5)),
        );
        painter.text(rect.center(), Align2::CENTER_CENTER, label, font, theme.pill_text);
    }
    response
}

/// Bordered card with a short heading over a caption.
pub fn stat_card(ui: &mut egui::Ui, stat: &Stat, theme: &Theme) -> egui::Response {
    egui::Frame::none()
        .fill(theme.card_bg)
        .stroke(Stroke::new(1.0, theme.card_border))
        .rounding(Rounding::same(12.0))
        .inner_margin(egui::Margin::symmetric(16.0, 14.0))
        .show(ui, |ui| {
            ui.set_min_width(160.0);
            ui.label(
                egui::RichText::new(&stat.value)
                    .size(26.0)
                    .strong()
                    .color(theme.heading),
            );
            ui.label(egui::RichText::new(&stat.caption).size(13.0).color(theme.muted));
        })
        .response
}

/// Navbar entry. Returns the section to scroll to when clicked.
pub fn nav_link(ui: &mut egui::Ui, link: &NavLink, active: bool, theme: &Theme) -> Option<SectionId> {
    // Hover fades in over a few frames, keyed on last frame's hover state.
    let id = ui.id().with(&link.href);
    let was_hovered = ui.ctx().data(|d| d.get_temp::<bool>(id)).unwrap_or(false);
    let fade = ui.ctx().animate_bool(id.with("fade"), was_hovered);
    let color = if active {
        theme.heading
    } else {
        lerp_color(theme.muted, theme.heading, fade)
    };
    let response = ui
        .add(
            egui::Label::new(egui::RichText::new(&link.label).size(14.0).color(color))
                .selectable(false)
                .sense(Sense::click()),
        )
        .on_hover_cursor(egui::CursorIcon::PointingHand);
    ui.ctx().data_mut(|d| d.insert_temp(id, response.hovered()));
    if response.hovered() {
        let r = response.rect;
        ui.painter().line_segment(
            [r.left_bottom() + Vec2::new(0.0, 2.0), r.right_bottom() + Vec2::new(0.0, 2.0)],
            Stroke::new(1.5, theme.accent),
        );
    }
    if response.clicked() {
        link.target()
    } else {
        None
    }
}

/// Pill list for one project, in declared tag order. Returns the rect of
/// each pill as laid out.
pub fn tag_row(ui: &mut egui::Ui, tags: &[String], theme: &Theme) -> Vec<egui::Rect> {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing = Vec2::new(6.0, 6.0);
        tags.iter().map(|tag| tag_pill(ui, tag, theme).rect).collect()
    })
    .inner
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::theme::THEME;

    fn run_ui(mut f: impl FnMut(&mut egui::Ui)) {
        let ctx = egui::Context::default();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| f(ui));
        });
    }

    #[test]
    fn pill_is_wider_than_its_padding() {
        let mut size = Vec2::ZERO;
        run_ui(|ui| size = tag_pill(ui, "Rust", &THEME).rect.size());
        assert!(size.x > PILL_PADDING.x * 2.0);
        assert!(size.y > PILL_PADDING.y * 2.0);
    }

    #[test]
    fn tag_row_lays_out_pills_in_tag_order() {
        let tags: Vec<String> = ["a", "a much longer tag", "mid tag"].map(String::from).to_vec();
        let mut pills = Vec::new();
        run_ui(|ui| pills = tag_row(ui, &tags, &THEME));
        assert_eq!(pills.len(), 3);
        // Widths follow label length, so the i-th pill carries the i-th tag.
        assert!(pills[1].width() > pills[2].width());
        assert!(pills[2].width() > pills[0].width());
        assert!(pills[0].left() < pills[1].left() && pills[1].left() < pills[2].left());

        run_ui(|ui| pills = tag_row(ui, &[], &THEME));
        assert!(pills.is_empty());
    }

    #[test]
    fn nav_link_without_click_yields_nothing() {
        let link = NavLink { href: "#about".into(), label: "About".into() };
        let mut target = Some(SectionId::Contact);
        run_ui(|ui| target = nav_link(ui, &link, false, &THEME));
        assert_eq!(target, None);
    }

    #[test]
    fn stat_card_has_minimum_width() {
        let stat = Stat { value: "8+".into(), caption: "Years shipping".into() };
        let mut width = 0.0;
        run_ui(|ui| width = stat_card(ui, &stat, &THEME).rect.width());
        assert!(width >= 160.0);
    }
}
