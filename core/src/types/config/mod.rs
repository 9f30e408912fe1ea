mod app;
mod core;

pub use app::{AppConfig, AppConfigError, ShortcutsConfig, UpdateConfig};
pub use core::Config;
