use eframe::{CreationContext, NativeOptions, egui};
use passgen::app::PassGenApp;
use passgen::logging::init_logging;
use passgen::settings::AppSettings;

fn main() -> eframe::Result<()> {
    let (settings, load_error) = match AppSettings::load() {
        Ok(settings) => (settings, None),
        Err(e) => (AppSettings::default(), Some(e)),
    };
    init_logging(&settings.log_filter);
    if let Some(e) = load_error {
        tracing::warn!("falling back to default settings: {e}");
    }
    tracing::info!(
        default_length = settings.default_length,
        assumed_alphabet_size = settings.assumed_alphabet_size,
        "starting password generator"
    );

    let native_options = NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([420.0, 320.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Password Generator",
        native_options,
        Box::new(move |_cc: &CreationContext| Ok(Box::new(PassGenApp::new(&settings)))),
    )
}
