//! Navigation methods for `PortfolioApp`.
//!
//! Nav clicks only record a [`ScrollTarget`]; the request is honoured after
//! the target has been laid out in the same frame, so the scroll always uses
//! its current rect.

use eframe::egui;

use folio::content::SectionId;

use super::PortfolioApp;

/// How far below the viewport top a section must start to count as active
const ACTIVE_LINE: f32 = 96.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollTarget {
    Top,
    Section(SectionId),
}

impl PortfolioApp {
    /// Smooth-scroll to a section on the next layout pass.
    pub fn go_to(&mut self, section: SectionId) {
        log::debug!("scrolling to #{}", section.anchor());
        self.pending_scroll = Some(ScrollTarget::Section(section));
    }

    pub fn scroll_to_top(&mut self) {
        self.pending_scroll = Some(ScrollTarget::Top);
    }

    /// Scroll to `rect` if `target` is the pending request.
    pub fn settle_scroll(&mut self, ui: &egui::Ui, target: ScrollTarget, rect: egui::Rect) {
        if self.pending_scroll == Some(target) {
            ui.scroll_to_rect(rect, Some(egui::Align::TOP));
            self.pending_scroll = None;
        }
    }

    /// Refresh the highlighted nav entry from this frame's section rects.
    pub fn track_active(&mut self, viewport: egui::Rect) {
        self.active = active_section(&self.section_rects, viewport.top() + ACTIVE_LINE);
    }

    /// Open the résumé in a new browser context. A missing local file is
    /// logged but still handed to the system opener.
    pub fn open_resume(&self, ctx: &egui::Context) {
        let site = &self.config.site;
        match site.resume_url() {
            Ok(url) => {
                if url.scheme() == "file" && !site.resume_path.exists() {
                    log::warn!("résumé not found at {}", site.resume_path.display());
                }
                log::info!("opening résumé {url}");
                ctx.open_url(egui::OpenUrl::new_tab(url.as_str()));
            }
            Err(e) => log::warn!("cannot open résumé: {e}"),
        }
    }
}

/// Last section whose top edge is above `line_y`.
pub fn active_section(rects: &[Option<egui::Rect>; 5], line_y: f32) -> Option<SectionId> {
    SectionId::ALL
        .into_iter()
        .filter(|id| rects[id.index()].is_some_and(|r| r.top() <= line_y))
        .last()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rects() -> [Option<egui::Rect>; 5] {
        let mut out = [None; 5];
        for (i, slot) in out.iter_mut().enumerate() {
            let top = 800.0 + i as f32 * 600.0;
            *slot = Some(egui::Rect::from_min_max(
                egui::pos2(0.0, top),
                egui::pos2(1000.0, top + 600.0),
            ));
        }
        out
    }

    #[test]
    fn nothing_active_over_hero() {
        assert_eq!(active_section(&rects(), 100.0), None);
    }

    #[test]
    fn active_follows_scroll_position() {
        assert_eq!(active_section(&rects(), 900.0), Some(SectionId::About));
        assert_eq!(active_section(&rects(), 1500.0), Some(SectionId::Projects));
        assert_eq!(active_section(&rects(), 10_000.0), Some(SectionId::Contact));
    }

    #[test]
    fn unlaid_sections_are_skipped() {
        let mut r = rects();
        r[SectionId::Skills.index()] = None;
        assert_eq!(active_section(&r, 2100.0), Some(SectionId::Projects));
    }
}
