//! Launchable application listing.

use crate::host::{LaunchAction, PackageRegistry};
use crate::types::AppId;

/// An application that can be assigned to a shortcut slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppCatalogEntry {
    pub id: AppId,
    pub label: String,
    pub icon: Option<String>,
}

/// Live view over the platform's installed applications.
///
/// Nothing is cached: every query goes back to the platform, so results
/// reflect installs and removals made between calls.
pub struct AppCatalog<'h, P: PackageRegistry + ?Sized> {
    packages: &'h P,
}

impl<'h, P: PackageRegistry + ?Sized> AppCatalog<'h, P> {
    pub fn new(packages: &'h P) -> Self {
        Self { packages }
    }

    /// Applications with a launch entry point, in platform order.
    pub fn list_launchable_apps(&self) -> Vec<AppCatalogEntry> {
        self.launchable_ids()
            .into_iter()
            .map(|id| self.describe(id))
            .collect()
    }

    pub fn launchable_ids(&self) -> Vec<AppId> {
        self.packages
            .installed_apps()
            .into_iter()
            .filter(|id| self.packages.launch_action(id).is_some())
            .collect()
    }

    pub fn contains(&self, app: &AppId) -> bool {
        self.packages.installed_apps().contains(app) && self.packages.launch_action(app).is_some()
    }

    /// `None` if `app` is no longer installed or launchable.
    pub fn entry(&self, app: &AppId) -> Option<AppCatalogEntry> {
        self.contains(app).then(|| self.describe(app.clone()))
    }

    pub fn launch_action(&self, app: &AppId) -> Option<LaunchAction> {
        self.packages.launch_action(app)
    }

    fn describe(&self, id: AppId) -> AppCatalogEntry {
        match self.packages.app_info(&id) {
            Some(info) => AppCatalogEntry {
                id,
                label: info.label,
                icon: info.icon,
            },
            None => {
                tracing::debug!("no label for {id}, falling back to its id");
                AppCatalogEntry {
                    label: id.to_string(),
                    id,
                    icon: None,
                }
            }
        }
    }
}
