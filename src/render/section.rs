//! Section shell: kicker + title heading block over a content block, each
//! revealed once when the section first scrolls into view.

use egui::{Rect, RichText, Vec2};

use super::reveal::{BlockStyle, RevealTracker, OFFSET};
use super::theme::Theme;
use crate::content::SectionId;

/// How far above the viewport bottom the section top must be to count as seen
const VIEWPORT_MARGIN: f32 = 80.0;
/// Content column width cap
pub const MAX_WIDTH: f32 = 1040.0;

pub struct SectionOutput<R> {
    pub inner: R,
    /// Full rect occupied by the section
    pub rect: Rect,
    /// True on the frame the entrance transition fired
    pub fired: bool,
    /// True while the transition is still running
    pub animating: bool,
}

/// Whether a section whose top edge sits at `top` counts as in view for a
/// viewport `clip`.
pub fn section_in_view(top: f32, bottom: f32, clip: Rect) -> bool {
    top < clip.bottom() - VIEWPORT_MARGIN.min(clip.height() * 0.25) && bottom > clip.top()
}

pub fn show_section<R>(
    ui: &mut egui::Ui,
    id: SectionId,
    tracker: &mut RevealTracker,
    now: f64,
    theme: &Theme,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> SectionOutput<R> {
    let heading_style = tracker.heading(now);
    let content_style = tracker.content(now);

    let top = ui.cursor().top();
    ui.add_space(48.0);

    animated_block(ui, heading_style, |ui| {
        ui.label(
            RichText::new(id.kicker().to_uppercase())
                .size(12.0)
                .strong()
                .extra_letter_spacing(2.0)
                .color(theme.accent_alt),
        );
        ui.add_space(4.0);
        ui.label(RichText::new(id.title()).size(32.0).strong().color(theme.heading));
    });

    ui.add_space(16.0);

    let inner = animated_block(ui, content_style, add_contents);

    ui.add_space(24.0);
    let bottom = ui.cursor().top();
    let rect = Rect::from_min_max(
        egui::pos2(ui.max_rect().left(), top),
        egui::pos2(ui.max_rect().right(), bottom),
    );

    let fired = tracker.observe(section_in_view(top, bottom, ui.clip_rect()), now);
    if fired {
        log::debug!("section #{} revealed", id.anchor());
    }

    SectionOutput {
        inner,
        rect,
        fired,
        animating: fired || tracker.is_animating(now),
    }
}

/// Lay out `add_contents` with the block's opacity and downward offset. The
/// block always reserves the full offset so layout height stays constant
/// while it animates.
fn animated_block<R>(
    ui: &mut egui::Ui,
    style: BlockStyle,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> R {
    ui.scope(|ui| {
        ui.set_opacity(style.opacity);
        ui.add_space(style.offset_y);
        let inner = add_contents(ui);
        ui.add_space(OFFSET - style.offset_y);
        inner
    })
    .inner
}

/// Horizontal padding that centres a `MAX_WIDTH` column in `available`.
pub fn column_margin(available: f32) -> f32 {
    ((available - MAX_WIDTH) * 0.5).max(24.0)
}

/// Size for a grid cell so that `columns` cells and gaps fill `width`.
pub fn cell_size(width: f32, columns: usize, gap: f32, height: f32) -> Vec2 {
    let columns = columns.max(1) as f32;
    Vec2::new(((width - gap * (columns - 1.0)) / columns).max(0.0), height)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clip() -> Rect {
        Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1000.0, 800.0))
    }

    #[test]
    fn in_view_rules() {
        assert!(section_in_view(100.0, 600.0, clip()));
        // Top edge only just peeking above the bottom margin
        assert!(!section_in_view(790.0, 1400.0, clip()));
        // Entirely scrolled past
        assert!(!section_in_view(-900.0, -100.0, clip()));
    }

    #[test]
    fn column_centres_wide_viewports() {
        assert_eq!(column_margin(1240.0), 100.0);
        assert_eq!(column_margin(600.0), 24.0);
    }

    #[test]
    fn cells_fill_width() {
        let s = cell_size(300.0, 3, 15.0, 40.0);
        assert_eq!(s, Vec2::new(90.0, 40.0));
        assert_eq!(cell_size(10.0, 0, 5.0, 1.0).x, 10.0);
    }
}
