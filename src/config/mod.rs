//! Configuration module for the Disposition Classifier client.
//!
//! Provides `AppConfig` (top-level settings), sub-configs for the API
//! endpoint and the UI, `AppPaths` for cross-platform config directories,
//! and TOML persistence via `AppConfig::load` / `AppConfig::save`.

pub mod paths;
pub mod settings;

pub use paths::AppPaths;
pub use settings::{ApiConfig, AppConfig, UiConfig};
