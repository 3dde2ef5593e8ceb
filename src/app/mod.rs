//! `PortfolioApp`: the top-level egui application state.
//!
//! This module declares the `PortfolioApp` struct and its `eframe::App` impl.
//! Drawing is split across the sibling sub-modules:
//!
//! - `navbar`: fixed top bar with section links
//! - `navigation`: scroll-to-section requests and the active-link tracker
//! - `hero`: 3D scene viewport and hero copy
//! - `content`: the five sections and the footer

pub mod content;
pub mod hero;
pub mod navbar;
pub mod navigation;

use eframe::egui;

use navigation::ScrollTarget;

use folio::content::{Portfolio, SectionId};
use folio::form::ContactForm;
use folio::render::reveal::RevealTracker;
use folio::render::theme::{paint_background, Theme, THEME};
use folio::scene::stage::Stage;
use folio::FolioConfig;

// ─── Application state ───────────────────────────────────────────────────────

pub struct PortfolioApp {
    pub portfolio: Portfolio,
    pub config: FolioConfig,
    pub theme: Theme,
    pub year: i32,
    /// Hero scene loader, frame loop and orbit camera
    pub stage: Stage,
    /// One entrance transition per section, indexed by `SectionId::index`
    pub reveals: [RevealTracker; 5],
    /// Rect of each section as laid out this frame
    pub section_rects: [Option<egui::Rect>; 5],
    /// Where the next layout pass should scroll to
    pub pending_scroll: Option<ScrollTarget>,
    /// Section currently under the top of the viewport
    pub active: Option<SectionId>,
    pub form: ContactForm,
}

impl PortfolioApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        portfolio: Portfolio,
        config: FolioConfig,
        year: i32,
    ) -> Self {
        let theme = THEME;
        let mut visuals = egui::Visuals::dark();
        visuals.panel_fill = egui::Color32::TRANSPARENT;
        visuals.window_fill = theme.card_bg;
        visuals.extreme_bg_color = theme.card_bg;
        visuals.hyperlink_color = theme.accent_alt;
        visuals.selection.bg_fill = theme.accent;
        cc.egui_ctx.set_visuals(visuals);

        let stage = Stage::spawn(&config.scene, Some(cc.egui_ctx.clone()));

        Self {
            portfolio,
            config,
            theme,
            year,
            stage,
            reveals: Default::default(),
            section_rects: [None; 5],
            pending_scroll: None,
            active: None,
            form: ContactForm::new(),
        }
    }
}

impl eframe::App for PortfolioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = ctx.input(|i| i.time);

        // Decoration layers sit under every panel and never take input.
        let background = ctx.layer_painter(egui::LayerId::background());
        paint_background(&background, ctx.screen_rect(), &self.theme);

        egui::TopBottomPanel::top("navbar")
            .frame(
                egui::Frame::none()
                    .fill(self.theme.page_bg.gamma_multiply(0.85))
                    .inner_margin(egui::Margin::symmetric(24.0, 14.0)),
            )
            .show_separator_line(false)
            .show(ctx, |ui| {
                self.draw_navbar(ui);
            });

        let repaint = egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| self.draw_page(ui, now))
            .inner;

        if repaint {
            ctx.request_repaint();
        }
    }
}

impl Drop for PortfolioApp {
    fn drop(&mut self) {
        self.stage.unmount();
    }
}
