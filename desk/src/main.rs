//! Student Management System desk - binary entry point

use std::process::ExitCode;

use desk::app::App;
use desk::core::AppConfig;
use desk::ui::widgets::nav_bar::APP_TITLE;
use desk::ui::window::DeskWindow;
use desk::{debug, utils::runtime};

fn main() -> ExitCode {
    let _log_guard = debug::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Desk exited with an error");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::from_env()?;
    tracing::info!(
        api_url = %config.api_url,
        backend = ?config.backend,
        session_file = %config.session_file.display(),
        "Starting desk"
    );

    // Spawned tasks need a runtime context on the UI thread
    let _runtime_guard = runtime::get()?.enter();
    let app = App::new(&config)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_TITLE)
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([900.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(|cc| Ok(Box::new(DeskWindow::new(cc, app)))),
    )?;

    Ok(())
}
