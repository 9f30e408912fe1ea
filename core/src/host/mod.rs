//! Capabilities the embedding platform provides to the shortcut subsystem.
//!
//! On Android these are backed by `PackageManager` and `WindowManager`. Every
//! method takes `&self`: the platform services are shared handles, and the
//! subsystem only ever calls them from the UI thread.

use crate::types::AppId;
use error::BindError;

pub mod error {
    use thiserror::Error;

    /// The platform refused to register or clear a key binding.
    #[derive(Debug, Clone, PartialEq, Eq, Error)]
    #[error("key binding rejected: {0}")]
    pub struct BindError(pub String);
}

/// Opaque platform handle that starts an application (an intent URI on Android).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LaunchAction(pub String);

/// Display details the platform reports for an application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppInfo {
    pub label: String,
    pub icon: Option<String>,
}

pub trait PackageRegistry {
    /// Every installed application, in platform enumeration order.
    fn installed_apps(&self) -> Vec<AppId>;

    /// `None` if the application has no launch entry point or is gone.
    fn launch_action(&self, app: &AppId) -> Option<LaunchAction>;

    fn app_info(&self, app: &AppId) -> Option<AppInfo>;
}

pub trait KeyBinder {
    fn bind(&self, keycode: u32, action: &LaunchAction) -> Result<(), BindError>;

    fn unbind(&self, keycode: u32) -> Result<(), BindError>;
}

#[cfg(test)]
pub(crate) mod fake;
