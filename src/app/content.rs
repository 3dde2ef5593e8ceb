//! Page body for `PortfolioApp`.
//!
//! The hero, the five sections in fixed order and the footer, all inside
//! one vertical scroll area. Section bodies are free functions over the
//! data they show so they can be laid out headlessly in tests.

use eframe::egui;

use folio::content::{ExperienceRole, Portfolio, Project, SectionId};
use folio::form::{ContactForm, Field, SubmitOutcome};
use folio::render::section::{cell_size, column_margin, show_section, MAX_WIDTH};
use folio::render::theme::Theme;
use folio::render::widgets::{stat_card, tag_row};

use super::navigation::ScrollTarget;
use super::PortfolioApp;

const GAP: f32 = 16.0;
/// Narrowest project card before the gallery drops a column
const MIN_CARD_WIDTH: f32 = 280.0;

impl PortfolioApp {
    /// Lay out the scrolling page. Returns true when any part of it is
    /// still animating.
    pub fn draw_page(&mut self, ui: &mut egui::Ui, now: f64) -> bool {
        let mut repaint = false;
        egui::ScrollArea::vertical()
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                repaint |= self.draw_hero(ui, now);

                let margin = column_margin(ui.available_width());
                egui::Frame::none()
                    .inner_margin(egui::Margin::symmetric(margin, 0.0))
                    .show(ui, |ui| {
                        ui.set_max_width(MAX_WIDTH);
                        for id in SectionId::ALL {
                            repaint |= self.draw_section(ui, id, now);
                        }
                        self.draw_footer(ui);
                    });

                self.track_active(ui.clip_rect());
            });
        repaint
    }

    fn draw_section(&mut self, ui: &mut egui::Ui, id: SectionId, now: f64) -> bool {
        let Self {
            portfolio,
            theme,
            reveals,
            form,
            ..
        } = self;
        let theme = *theme;

        let out = show_section(ui, id, &mut reveals[id.index()], now, &theme, |ui| match id {
            SectionId::About => {
                about_body(ui, portfolio, &theme);
            }
            SectionId::Projects => {
                projects_body(ui, &portfolio.projects, &theme);
            }
            SectionId::Skills => {
                skills_body(ui, &portfolio.skills, &theme);
            }
            SectionId::Experience => {
                experience_body(ui, &portfolio.roles, &theme);
            }
            SectionId::Contact => {
                contact_body(ui, form, &portfolio.profile.email, &theme);
            }
        });

        self.section_rects[id.index()] = Some(out.rect);
        self.settle_scroll(ui, ScrollTarget::Section(id), out.rect);
        out.animating
    }

    fn draw_footer(&mut self, ui: &mut egui::Ui) {
        let theme = self.theme;
        ui.add_space(48.0);
        let y = ui.cursor().top();
        ui.painter().hline(
            ui.max_rect().x_range(),
            y,
            egui::Stroke::new(1.0, theme.card_border),
        );
        ui.add_space(20.0);

        let mut open = false;
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new(format!(
                    "\u{a9} {} {}",
                    self.year, self.portfolio.profile.name
                ))
                .size(13.0)
                .color(theme.muted),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let link = ui
                    .add(
                        egui::Label::new(
                            egui::RichText::new("R\u{e9}sum\u{e9} \u{2197}")
                                .size(13.0)
                                .color(theme.accent_alt),
                        )
                        .sense(egui::Sense::click()),
                    )
                    .on_hover_cursor(egui::CursorIcon::PointingHand);
                open = link.clicked();
            });
        });
        ui.add_space(32.0);

        if open {
            self.open_resume(ui.ctx());
        }
    }
}

// ─── Section bodies ──────────────────────────────────────────────────────────

fn about_body(ui: &mut egui::Ui, portfolio: &Portfolio, theme: &Theme) -> usize {
    for para in &portfolio.profile.about {
        ui.label(egui::RichText::new(para).size(16.0).color(theme.text));
        ui.add_space(8.0);
    }
    ui.add_space(12.0);
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing = egui::vec2(GAP, GAP);
        for stat in &portfolio.profile.stats {
            stat_card(ui, stat, theme);
        }
    });
    portfolio.profile.stats.len()
}

/// Gallery columns that fit `width`.
fn gallery_columns(width: f32) -> usize {
    (((width + GAP) / (MIN_CARD_WIDTH + GAP)) as usize).clamp(1, 3)
}

/// Rects of one laid-out project card and its tag pills.
#[derive(Debug, Clone)]
pub struct CardLayout {
    pub rect: egui::Rect,
    pub pills: Vec<egui::Rect>,
}

/// One card per project, in list order.
fn projects_body(ui: &mut egui::Ui, projects: &[Project], theme: &Theme) -> Vec<CardLayout> {
    let width = ui.available_width();
    let columns = gallery_columns(width);
    let cell = cell_size(width, columns, GAP, 0.0);
    let mut cards = Vec::with_capacity(projects.len());

    for row in projects.chunks(columns) {
        ui.horizontal_top(|ui| {
            ui.spacing_mut().item_spacing.x = GAP;
            for project in row {
                let card = ui
                    .push_id(&project.title, |ui| {
                        ui.allocate_ui_with_layout(
                            cell,
                            egui::Layout::top_down(egui::Align::Min),
                            |ui| project_card(ui, project, cell.x, theme),
                        )
                    })
                    .inner;
                cards.push(CardLayout {
                    rect: card.response.rect,
                    pills: card.inner,
                });
            }
        });
        ui.add_space(GAP);
    }
    cards
}

fn project_card(ui: &mut egui::Ui, project: &Project, width: f32, theme: &Theme) -> Vec<egui::Rect> {
    let padding = 18.0;
    egui::Frame::none()
        .fill(theme.card_bg)
        .stroke(egui::Stroke::new(1.0, theme.card_border))
        .rounding(egui::Rounding::same(14.0))
        .inner_margin(egui::Margin::same(padding))
        .show(ui, |ui| {
            ui.set_width(width - padding * 2.0);
            let title = egui::RichText::new(&project.title)
                .size(18.0)
                .strong()
                .color(theme.heading);
            if project.href == "#" {
                ui.label(title);
            } else {
                ui.add(egui::Hyperlink::from_label_and_url(title, &project.href).open_in_new_tab(true));
            }
            ui.add_space(6.0);
            ui.label(egui::RichText::new(&project.description).size(14.0).color(theme.text));
            ui.add_space(12.0);
            tag_row(ui, &project.tags, theme)
        })
        .inner
}

/// Uniform grid of skill cells. Returns each cell's rect, in skill order.
fn skills_body(ui: &mut egui::Ui, skills: &[String], theme: &Theme) -> Vec<egui::Rect> {
    let columns = if ui.available_width() < 560.0 { 2 } else { 3 };
    let cell = cell_size(ui.available_width(), columns, 12.0, 44.0);
    let mut cells = Vec::with_capacity(skills.len());

    egui::Grid::new("skills_grid")
        .num_columns(columns)
        .spacing(egui::vec2(12.0, 12.0))
        .min_col_width(cell.x)
        .max_col_width(cell.x)
        .show(ui, |ui| {
            for (i, skill) in skills.iter().enumerate() {
                let (rect, _) = ui.allocate_exact_size(cell, egui::Sense::hover());
                let painter = ui.painter();
                painter.rect(
                    rect,
                    egui::Rounding::same(10.0),
                    theme.card_bg,
                    egui::Stroke::new(1.0, theme.card_border),
                );
                painter.text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    skill,
                    egui::FontId::proportional(15.0),
                    theme.text,
                );
                cells.push(rect);
                if (i + 1) % columns == 0 {
                    ui.end_row();
                }
            }
        });
    cells
}

fn experience_body(ui: &mut egui::Ui, roles: &[ExperienceRole], theme: &Theme) -> usize {
    for (i, role) in roles.iter().enumerate() {
        ui.push_id(i, |ui| {
            ui.horizontal_top(|ui| {
                let (marker, _) = ui.allocate_exact_size(egui::vec2(20.0, 20.0), egui::Sense::hover());
                let body = ui
                    .vertical(|ui| {
                        ui.label(egui::RichText::new(&role.period).size(12.0).color(theme.muted));
                        ui.horizontal_wrapped(|ui| {
                            ui.label(
                                egui::RichText::new(&role.title)
                                    .size(17.0)
                                    .strong()
                                    .color(theme.heading),
                            );
                            ui.label(egui::RichText::new("\u{b7}").color(theme.muted));
                            let org = egui::RichText::new(&role.org).size(17.0).color(theme.accent_alt);
                            if role.org_link == "#" {
                                ui.label(org);
                            } else {
                                ui.add(
                                    egui::Hyperlink::from_label_and_url(org, &role.org_link)
                                        .open_in_new_tab(true),
                                );
                            }
                        });
                        for point in &role.points {
                            ui.label(
                                egui::RichText::new(format!("\u{2022} {point}"))
                                    .size(14.0)
                                    .color(theme.text),
                            );
                        }
                    })
                    .response
                    .rect;

                let painter = ui.painter();
                if i + 1 < roles.len() {
                    painter.vline(
                        marker.center().x,
                        marker.center().y..=body.bottom() + 24.0,
                        egui::Stroke::new(2.0, theme.card_border),
                    );
                }
                painter.circle_filled(marker.center(), 5.0, theme.accent);
            });
        });
        ui.add_space(24.0);
    }
    roles.len()
}

/// Contact form with inline field errors. Returns true on the frame a
/// submit was accepted.
fn contact_body(ui: &mut egui::Ui, form: &mut ContactForm, email: &str, theme: &Theme) -> bool {
    ui.horizontal_wrapped(|ui| {
        ui.label(egui::RichText::new("Prefer email?").color(theme.text));
        ui.hyperlink_to(email, format!("mailto:{email}"));
    });
    ui.add_space(16.0);

    let errors: Vec<(Field, String)> = form
        .errors()
        .iter()
        .map(|e| (e.field(), e.to_string()))
        .collect();
    let error_for = |field: Field| {
        errors
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, msg)| msg.as_str())
    };

    let width = ui.available_width().min(560.0);
    form_field(ui, Field::Name, &mut form.name, false, error_for(Field::Name), width, theme);
    form_field(ui, Field::Email, &mut form.email, false, error_for(Field::Email), width, theme);
    form_field(ui, Field::Subject, &mut form.subject, false, None, width, theme);
    form_field(ui, Field::Message, &mut form.message, true, error_for(Field::Message), width, theme);
    ui.add_space(8.0);

    let fill = if form.sent() { theme.card_bg } else { theme.accent };
    let clicked = ui
        .add(
            egui::Button::new(egui::RichText::new(form.button_label()).size(15.0).color(theme.heading))
                .fill(fill)
                .rounding(egui::Rounding::same(10.0))
                .min_size(egui::vec2(160.0, 42.0)),
        )
        .clicked();

    if !clicked {
        return false;
    }
    match form.submit() {
        Ok(SubmitOutcome::Sent) => true,
        Ok(SubmitOutcome::AlreadySent) => {
            log::debug!("contact form already sent");
            false
        }
        Err(_) => false,
    }
}

fn form_field(
    ui: &mut egui::Ui,
    field: Field,
    value: &mut String,
    multiline: bool,
    error: Option<&str>,
    width: f32,
    theme: &Theme,
) {
    ui.label(egui::RichText::new(field.label()).size(13.0).color(theme.muted));
    let edit = if multiline {
        egui::TextEdit::multiline(value).desired_rows(5)
    } else {
        egui::TextEdit::singleline(value)
    };
    let edit = match field {
        Field::Email => edit.hint_text("you@example.com"),
        _ => edit,
    };
    ui.add(edit.desired_width(width).margin(egui::Margin::symmetric(10.0, 8.0)));
    if let Some(msg) = error {
        ui.label(egui::RichText::new(msg).size(12.0).color(theme.error));
    }
    ui.add_space(10.0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio::form::{SENT_LABEL, SUBMIT_LABEL};
    use folio::render::theme::THEME;

    /// Run `f` inside a central panel of a headless context `width` wide.
    fn layout<R>(width: f32, mut f: impl FnMut(&mut egui::Ui) -> R) -> R {
        let ctx = egui::Context::default();
        let input = egui::RawInput {
            screen_rect: Some(egui::Rect::from_min_size(
                egui::Pos2::ZERO,
                egui::vec2(width, 4000.0),
            )),
            ..Default::default()
        };
        let mut out = None;
        let _ = ctx.run(input, |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                out = Some(f(ui));
            });
        });
        out.expect("panel ran")
    }

    /// Row-major: each rect sits right of the previous one on the same row,
    /// or starts a lower row.
    fn in_reading_order(rects: &[egui::Rect]) -> bool {
        rects.windows(2).all(|w| {
            let same_row = (w[0].top() - w[1].top()).abs() < 1.0;
            (same_row && w[1].left() > w[0].right()) || w[1].top() > w[0].bottom()
        })
    }

    #[test]
    fn gallery_lays_out_one_card_per_project_in_order() {
        let portfolio = Portfolio::builtin();
        let cards = layout(1200.0, |ui| projects_body(ui, &portfolio.projects, &THEME));
        assert_eq!(cards.len(), portfolio.projects.len());

        let rects: Vec<egui::Rect> = cards.iter().map(|c| c.rect).collect();
        assert!(in_reading_order(&rects), "{rects:?}");
        // Three columns at this width: the fourth card wraps to a new row.
        assert!((rects[0].top() - rects[2].top()).abs() < 1.0);
        assert!(rects[3].top() > rects[0].bottom());

        for (card, project) in cards.iter().zip(&portfolio.projects) {
            assert_eq!(card.pills.len(), project.tags.len(), "{}", project.title);
            assert!(in_reading_order(&card.pills), "{}", project.title);
            for pill in &card.pills {
                assert!(card.rect.contains_rect(*pill));
            }
        }
    }

    #[test]
    fn card_pills_follow_declared_tag_order() {
        let project = Project {
            title: "Tag order".into(),
            description: "Tag widths differ".into(),
            tags: vec!["a".into(), "a much longer tag".into(), "mid tag".into()],
            href: "#".into(),
        };
        let cards = layout(1200.0, |ui| projects_body(ui, std::slice::from_ref(&project), &THEME));
        let pills = &cards[0].pills;
        assert_eq!(pills.len(), 3);
        assert!(pills[1].width() > pills[2].width());
        assert!(pills[2].width() > pills[0].width());
    }

    #[test]
    fn empty_gallery_renders_nothing() {
        assert!(layout(1200.0, |ui| projects_body(ui, &[], &THEME)).is_empty());
    }

    #[test]
    fn skills_grid_has_one_cell_per_skill() {
        let portfolio = Portfolio::builtin();

        let wide = layout(1200.0, |ui| skills_body(ui, &portfolio.skills, &THEME));
        assert_eq!(wide.len(), 9);
        assert!(in_reading_order(&wide), "{wide:?}");
        // 3 x 3: rows start at cells 0, 3 and 6.
        assert!((wide[0].top() - wide[2].top()).abs() < 1.0);
        assert!(wide[3].top() > wide[2].bottom());
        assert!(wide[6].top() > wide[5].bottom());

        let narrow = layout(400.0, |ui| skills_body(ui, &portfolio.skills, &THEME));
        assert_eq!(narrow.len(), 9);
        assert!(in_reading_order(&narrow));
        assert!(narrow[2].top() > narrow[1].bottom());
    }

    #[test]
    fn timeline_and_stats_cover_content() {
        let portfolio = Portfolio::builtin();
        let roles = layout(1000.0, |ui| experience_body(ui, &portfolio.roles, &THEME));
        assert_eq!(roles, portfolio.roles.len());
        let stats = layout(1000.0, |ui| about_body(ui, &portfolio, &THEME));
        assert_eq!(stats, portfolio.profile.stats.len());
    }

    #[test]
    fn gallery_columns_follow_width() {
        assert_eq!(gallery_columns(1040.0), 3);
        assert_eq!(gallery_columns(700.0), 2);
        assert_eq!(gallery_columns(320.0), 1);
        assert_eq!(gallery_columns(0.0), 1);
    }

    #[test]
    fn contact_form_without_click_keeps_state() {
        let mut form = ContactForm::new();
        let accepted = layout(800.0, |ui| contact_body(ui, &mut form, "me@example.com", &THEME));
        assert!(!accepted);
        assert!(!form.sent());
        assert_eq!(form.button_label(), SUBMIT_LABEL);

        form.name = "Ada".into();
        form.email = "ada@example.com".into();
        form.message = "Hello".into();
        assert_eq!(form.submit(), Ok(SubmitOutcome::Sent));
        layout(800.0, |ui| contact_body(ui, &mut form, "me@example.com", &THEME));
        assert_eq!(form.button_label(), SENT_LABEL);
    }
}
