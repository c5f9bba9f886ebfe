use eframe::{App, Frame, egui};
use egui::{Color32, RichText};
use rand::RngCore;

use crate::password::{MAX_LENGTH, MIN_LENGTH};
use crate::settings::AppSettings;
use crate::widget::{Action, GeneratorState, reduce};

/// The main eframe app struct
pub struct PassGenApp {
    // Current widget state, replaced on every action
    pub state: GeneratorState,
    // Value bound to the length input before it is dispatched
    pub length_input: i64,
    rng: Box<dyn RngCore>,
}

impl Default for PassGenApp {
    fn default() -> Self {
        Self::new(&AppSettings::default())
    }
}

impl PassGenApp {
    /// App backed by the thread-local generator.
    pub fn new(settings: &AppSettings) -> Self {
        Self::with_rng(settings, Box::new(rand::rng()))
    }

    /// App drawing randomness from `rng`, e.g. a CSPRNG.
    pub fn with_rng(settings: &AppSettings, rng: Box<dyn RngCore>) -> Self {
        let state = GeneratorState::new(settings.default_length, settings.assumed_alphabet_size);
        Self {
            length_input: state.length as i64,
            state,
            rng,
        }
    }

    pub fn dispatch(&mut self, action: Action) {
        self.state = reduce(&self.state, action, &mut *self.rng);
        self.length_input = self.state.length as i64;
    }

    fn show_generator_ui(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.heading(
                RichText::new("Password Generator")
                    .size(22.0)
                    .color(Color32::WHITE),
            );
        });
        ui.separator();

        ui.horizontal(|ui| {
            ui.label("Password Length:");
            let response = ui.add(
                egui::DragValue::new(&mut self.length_input)
                    .range(MIN_LENGTH as i64..=MAX_LENGTH as i64),
            );
            if response.changed() {
                self.dispatch(Action::SetLength(self.length_input));
            }
        });

        if ui.button("Generate Password").clicked() {
            self.dispatch(Action::Generate);
        }

        if let Some(message) = self.state.error_message() {
            ui.colored_label(Color32::RED, message);
        }

        let mut copy_request = None;
        if let Some(generated) = self.state.generated() {
            ui.separator();
            ui.group(|ui| {
                ui.label(RichText::new("Generated Password:").strong());
                ui.horizontal(|ui| {
                    ui.monospace(&generated.password);
                    if ui.small_button("Copy").clicked() {
                        copy_request = Some(generated.password.clone());
                    }
                });
                ui.add_space(4.0);
                ui.label(RichText::new("Estimated time to crack:").strong());
                ui.label(generated.crack_time.to_string());
                ui.label(format!("Entropy: {:.1} bits", generated.entropy_bits));
            });
        }
        if let Some(text) = copy_request {
            ui.ctx().copy_text(text);
        }
    }
}

impl App for PassGenApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            self.show_generator_ui(ui);
        });
    }
}

// ------------------ UNIT TESTS ------------------
#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn seeded_app() -> PassGenApp {
        PassGenApp::with_rng(&AppSettings::default(), Box::new(StdRng::seed_from_u64(5)))
    }

    #[test]
    fn test_passgen_app_default_state() {
        let app = PassGenApp::default();
        assert_eq!(app.state.length, 12);
        assert_eq!(app.length_input, 12);
        assert!(app.state.generated().is_none());
        assert!(app.state.error_message().is_none());
    }

    #[test]
    fn test_app_uses_configured_defaults() {
        let mut settings = AppSettings::default();
        settings.set_default_length(30);
        settings.set_assumed_alphabet_size(72);
        let app = PassGenApp::new(&settings);
        assert_eq!(app.state.length, 30);
        assert_eq!(app.state.assumed_alphabet_size, 72);
    }

    #[test]
    fn test_dispatch_syncs_input_with_clamped_length() {
        let mut app = seeded_app();
        app.dispatch(Action::SetLength(1000));
        assert_eq!(app.state.length, 100);
        assert_eq!(app.length_input, 100);
    }

    #[test]
    fn test_dispatch_generate() {
        let mut app = seeded_app();
        app.dispatch(Action::SetLength(16));
        app.dispatch(Action::Generate);
        let generated = app.state.generated().expect("password");
        assert_eq!(generated.password.len(), 16);
    }

    #[test]
    fn test_seeded_apps_agree() {
        let mut a = seeded_app();
        let mut b = seeded_app();
        a.dispatch(Action::Generate);
        b.dispatch(Action::Generate);
        assert_eq!(a.state, b.state);
    }
}
