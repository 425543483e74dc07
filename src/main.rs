//! Application entry point — Disposition Classifier.
//!
//! # Startup sequence
//!
//! 1. Initialise logging.
//! 2. Load [`AppConfig`] from disk (returns default on first run).
//! 3. Create [`tokio`] runtime (multi-thread, 2 workers).
//! 4. Build the classification client ([`ApiClassifier`]) from config.
//! 5. Create the submission channel and shared request state.
//! 6. Spawn the request orchestrator on the tokio runtime.
//! 7. Run [`eframe::run_native`] — blocks the main thread until the window
//!    is closed.

use std::sync::Arc;

use tokio::sync::mpsc;

use disposition_classifier::{
    app::DispositionApp,
    client::{ApiClassifier, Classifier},
    config::AppConfig,
    request::{new_shared_state, RequestOrchestrator},
    transcript::Transcript,
};

use eframe::egui;

// ---------------------------------------------------------------------------
// Native options builder
// ---------------------------------------------------------------------------

fn native_options(config: &AppConfig) -> eframe::NativeOptions {
    let (width, height) = config.ui.window_size;
    let mut vp = egui::ViewportBuilder::default()
        .with_inner_size([width, height])
        .with_min_inner_size([480.0, 360.0]);

    if let Some((x, y)) = config.ui.window_position {
        vp = vp.with_position(egui::pos2(x, y));
    }

    eframe::NativeOptions {
        viewport: vp,
        ..Default::default()
    }
}

// ---------------------------------------------------------------------------
// main
// ---------------------------------------------------------------------------

fn main() -> eframe::Result<()> {
    // 1. Logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Disposition Classifier starting up");

    // 2. Configuration
    let config = AppConfig::load().unwrap_or_else(|e| {
        log::warn!("Failed to load config ({e}); using defaults");
        AppConfig::default()
    });
    log::info!("Classification endpoint: {}", config.api.base_url);

    // 3. Tokio runtime (2 worker threads are plenty for one HTTP call at a
    //    time)
    let rt = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .expect("failed to create tokio runtime");

    // 4. Classification client
    let classifier: Arc<dyn Classifier> = Arc::new(ApiClassifier::from_config(&config.api));

    // 5. Channel + shared state
    let (submit_tx, submit_rx) = mpsc::channel::<Transcript>(16);
    let state = new_shared_state();

    // 6. Spawn the request orchestrator onto the tokio runtime
    let orchestrator = RequestOrchestrator::new(Arc::clone(&state), classifier);
    rt.spawn(orchestrator.run(submit_rx));

    // 7. Build the egui app and run it (blocks until the window is closed)
    let app = DispositionApp::new(submit_tx, Arc::clone(&state), config.clone());
    let options = native_options(&config);

    eframe::run_native(
        "Disposition Classifier",
        options,
        Box::new(move |_cc| Ok(Box::new(app))),
    )
}
