//! View rendering (navigation bar, stars table)

use super::{App, CreateStarForm, Route};
use crate::page::StarRow;
use crate::theme;
use crate::ui::components::{color_swatch, error_banner, success_banner};
use crate::ui::pagination::pagination;
use eframe::egui;
use egui_extras::{Column, TableBuilder};

const ROW_HEIGHT: f32 = 32.0;
const HEADER_HEIGHT: f32 = 36.0;

impl App {
    pub(crate) fn render_nav_bar(&mut self, ctx: &egui::Context) {
        let mut target: Option<Route> = None;
        let mut refresh = false;

        egui::TopBottomPanel::top("nav_bar")
            .frame(
                egui::Frame::new()
                    .fill(theme::BG_ELEVATED)
                    .inner_margin(egui::Margin::symmetric(16, 10)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.add(egui::Label::new(
                        egui::RichText::new("STARS ADMIN")
                            .size(theme::FONT_SMALL)
                            .color(theme::TEXT_DIM),
                    ).selectable(false));
                    ui.add_space(theme::SPACING_LG);

                    let all_label = format!("{}  All stars", egui_phosphor::regular::STAR);
                    let all_button = if self.route == Route::AllStars {
                        theme::button_accent(all_label)
                    } else {
                        theme::button(all_label)
                    };
                    if ui.add(all_button).clicked() {
                        target = Some(Route::AllStars);
                    }

                    ui.separator();
                    ui.add(egui::Label::new(
                        egui::RichText::new("Universe").color(theme::TEXT_MUTED),
                    ).selectable(false));
                    let input = ui.add(
                        egui::TextEdit::singleline(&mut self.universe_input)
                            .hint_text("ID")
                            .desired_width(80.0),
                    );
                    let entered = input.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                    let parsed = Self::parse_universe_input(&self.universe_input);
                    let open = ui.add_enabled(parsed.is_some(), theme::button("Open")).clicked();
                    if open || entered {
                        target = parsed.map(Route::Universe);
                    }

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui
                            .add(theme::button(egui_phosphor::regular::ARROWS_CLOCKWISE))
                            .on_hover_text("Reload")
                            .clicked()
                        {
                            refresh = true;
                        }
                        ui.add(egui::Label::new(
                            egui::RichText::new(&self.api_base_url)
                                .size(theme::FONT_SMALL)
                                .color(theme::TEXT_DIM),
                        ).selectable(false));
                    });
                });
            });

        if let Some(route) = target {
            self.navigate(ctx, route);
        } else if refresh {
            let request = self.page.load_data(&mut self.flash);
            self.spawn_load(ctx, request);
        }
    }

    pub(crate) fn render_stars_page(&mut self, ui: &mut egui::Ui) {
        let ctx = ui.ctx().clone();
        let view = self.page.view();

        let mut delete_id: Option<u64> = None;
        let mut new_page: Option<u32> = None;
        let mut open_create = false;
        let mut dismiss_error = false;

        ui.horizontal(|ui| {
            ui.add(egui::Label::new(
                egui::RichText::new(&view.header)
                    .size(theme::FONT_TITLE)
                    .strong()
                    .color(theme::TEXT_PRIMARY),
            ).selectable(false));
            if view.loading {
                ui.add(egui::Spinner::new().size(14.0));
            }
            if view.show_create {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let label = format!("{}  Create Star", egui_phosphor::regular::PLUS);
                    if ui.add(theme::button_accent(label)).clicked() {
                        open_create = true;
                    }
                });
            }
        });
        ui.add_space(theme::SPACING_MD);

        if let Some(banner) = &view.banner {
            success_banner(ui, banner);
            ui.add_space(theme::SPACING_MD);
        }
        if let Some(error) = &view.error {
            dismiss_error = error_banner(ui, error);
            ui.add_space(theme::SPACING_MD);
        }

        let pagination_height = if view.show_pagination { 48.0 } else { 0.0 };
        let table_height = (ui.available_height() - pagination_height).max(ROW_HEIGHT);

        theme::card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            let mut table = TableBuilder::new(ui)
                .striped(false)
                .resizable(false)
                .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
                .min_scrolled_height(0.0)
                .max_scroll_height(table_height)
                .column(Column::exact(70.0))
                .column(Column::remainder().at_least(160.0).clip(true))
                .column(Column::remainder().at_least(120.0).clip(true));
            if view.show_delete {
                table = table.column(Column::exact(100.0));
            }

            table
                .header(HEADER_HEIGHT, |mut header| {
                    for title in ["#", "NAME", "UNIVERSE"] {
                        header.col(|ui| {
                            ui.add(egui::Label::new(
                                egui::RichText::new(title)
                                    .size(theme::FONT_SMALL)
                                    .color(theme::TEXT_DIM),
                            ).selectable(false));
                        });
                    }
                    if view.show_delete {
                        header.col(|_ui| {});
                    }
                })
                .body(|mut body| {
                    for star in &view.rows {
                        body.row(ROW_HEIGHT, |mut row| {
                            let (tint, text) = theme::star_colors(&star.color);
                            row.col(|ui| {
                                paint_tint(ui, tint);
                                color_swatch(ui, &star.color);
                                ui.label(egui::RichText::new(star.id.to_string()).color(theme::TEXT_MUTED));
                            });
                            row.col(|ui| {
                                paint_tint(ui, tint);
                                ui.label(egui::RichText::new(&star.name).color(text));
                            });
                            row.col(|ui| {
                                paint_tint(ui, tint);
                                ui.label(egui::RichText::new(&star.universe_name).color(theme::TEXT_SECONDARY));
                            });
                            if view.show_delete {
                                row.col(|ui| {
                                    paint_tint(ui, tint);
                                    if delete_button(ui, star) {
                                        delete_id = Some(star.id);
                                    }
                                });
                            }
                        });
                    }
                });

            if view.rows.is_empty() && !view.loading {
                ui.add_space(theme::SPACING_LG);
                ui.add(egui::Label::new(
                    egui::RichText::new("No stars found").color(theme::TEXT_DIM),
                ).selectable(false));
            }
        });

        if view.show_pagination {
            ui.add_space(theme::SPACING_MD);
            new_page = pagination(ui, view.page, view.max_pages);
        }

        if dismiss_error {
            self.page.dismiss_error();
        }
        if open_create {
            if let Some(universe_id) = self.page.scope() {
                self.create_form = Some(CreateStarForm::new(universe_id));
            }
        }
        if let Some(id) = delete_id {
            let request = self.page.delete_star(id);
            self.spawn_delete(&ctx, request);
        }
        if let Some(page) = new_page {
            if let Some(request) = self.page.change_page(page) {
                self.spawn_load(&ctx, request);
            }
        }
    }
}

fn paint_tint(ui: &mut egui::Ui, tint: egui::Color32) {
    let rect = ui.max_rect();
    ui.painter().rect_filled(rect, 0.0, tint);
}

fn delete_button(ui: &mut egui::Ui, star: &StarRow) -> bool {
    let label = format!("{}  Delete", egui_phosphor::regular::TRASH);
    ui.add(theme::button_danger(label))
        .on_hover_text(format!("Delete {}", star.name))
        .clicked()
}
