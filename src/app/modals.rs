//! Modal dialogs (create star)

use super::App;
use crate::error::{AppError, Result};
use crate::theme;
use crate::types::{NewStar, STAR_COLORS};
use eframe::egui;

/// State of the "Create Star" dialog for one universe
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateStarForm {
    pub universe_id: u64,
    pub name: String,
    pub color: String,
    pub submitting: bool,
    pub error: Option<String>,
}

impl CreateStarForm {
    pub fn new(universe_id: u64) -> Self {
        Self {
            universe_id,
            name: String::new(),
            color: STAR_COLORS[0].to_string(),
            submitting: false,
            error: None,
        }
    }

    /// Validate the inputs into a creation payload
    pub fn to_new_star(&self) -> Result<NewStar> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(AppError::Validation("Name must not be empty".into()));
        }
        if !STAR_COLORS.contains(&self.color.as_str()) {
            return Err(AppError::Validation(format!("Unknown colour {}", self.color)));
        }
        Ok(NewStar {
            name: name.to_string(),
            color: self.color.clone(),
            universe_id: self.universe_id,
        })
    }

    pub fn fail(&mut self, error: AppError) {
        self.submitting = false;
        self.error = Some(error.to_string());
    }
}

impl App {
    pub(crate) fn render_create_modal(&mut self, ctx: &egui::Context) {
        let Some(form) = self.create_form.as_mut() else {
            return;
        };

        let mut submit = false;
        let mut cancel = false;

        let modal_response = egui::Modal::new(egui::Id::new("create_star_modal"))
            .backdrop_color(egui::Color32::from_black_alpha(120))
            .frame(theme::modal_frame())
            .show(ctx, |ui| {
                ui.set_width(320.0);
                ui.add(egui::Label::new(
                    egui::RichText::new("Create Star").size(theme::FONT_HEADING).strong(),
                ).selectable(false));
                ui.add_space(theme::SPACING_SM);
                ui.separator();
                ui.add_space(theme::SPACING_SM);

                ui.label(egui::RichText::new("Name").color(theme::TEXT_MUTED).size(theme::FONT_LABEL));
                let name_response = ui.add_enabled(
                    !form.submitting,
                    egui::TextEdit::singleline(&mut form.name)
                        .hint_text("Star name...")
                        .desired_width(f32::INFINITY),
                );
                if name_response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    submit = true;
                }

                ui.add_space(theme::SPACING_MD);
                ui.label(egui::RichText::new("Colour").color(theme::TEXT_MUTED).size(theme::FONT_LABEL));
                ui.add_enabled_ui(!form.submitting, |ui| {
                    egui::ComboBox::from_id_salt("create_star_color")
                        .selected_text(form.color.clone())
                        .width(ui.available_width())
                        .show_ui(ui, |ui| {
                            for color in STAR_COLORS {
                                ui.selectable_value(&mut form.color, color.to_string(), color);
                            }
                        });
                });

                if let Some(error) = &form.error {
                    ui.add_space(theme::SPACING_MD);
                    ui.label(egui::RichText::new(error).color(theme::STATUS_ERROR));
                }

                ui.add_space(theme::SPACING_LG);
                ui.horizontal(|ui| {
                    let label = if form.submitting { "Creating..." } else { "Create" };
                    if ui.add_enabled(!form.submitting, theme::button_accent(label)).clicked() {
                        submit = true;
                    }
                    if ui.add(theme::button("Cancel")).clicked() {
                        cancel = true;
                    }
                });
            });

        let mut to_create = None;
        if submit && !form.submitting {
            match form.to_new_star() {
                Ok(star) => {
                    form.submitting = true;
                    form.error = None;
                    to_create = Some(star);
                }
                Err(e) => form.fail(e),
            }
        }
        let close = cancel || (modal_response.should_close() && !form.submitting);

        if let Some(star) = to_create {
            self.spawn_create(ctx, star);
        }
        if close {
            self.create_form = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_name_is_rejected() {
        let mut form = CreateStarForm::new(3);
        form.name = "   ".into();
        assert!(matches!(form.to_new_star(), Err(AppError::Validation(_))));
    }

    #[test]
    fn valid_form_builds_payload() {
        let mut form = CreateStarForm::new(3);
        form.name = " Betelgeuse ".into();
        form.color = "RED".into();
        assert_eq!(
            form.to_new_star().unwrap(),
            NewStar {
                name: "Betelgeuse".into(),
                color: "RED".into(),
                universe_id: 3,
            }
        );
    }

    #[test]
    fn failure_reenables_form() {
        let mut form = CreateStarForm::new(3);
        form.submitting = true;
        form.fail(AppError::Http { status: 409 });
        assert!(!form.submitting);
        assert_eq!(form.error.as_deref(), Some("Server responded with HTTP 409"));
    }
}
