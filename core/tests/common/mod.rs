#![allow(dead_code)]

use std::cell::RefCell;
use tempfile::TempDir;
use tvset_core::host::error::BindError;
use tvset_core::host::{AppInfo, KeyBinder, LaunchAction, PackageRegistry};
use tvset_core::{AppId, Config, ShortcutRegistry};

/// Platform stand-in: launchable packages plus the live key bindings.
#[derive(Default)]
pub struct TestHost {
    pub packages: RefCell<Vec<String>>,
    pub bindings: RefCell<Vec<(u32, LaunchAction)>>,
    pub calls: RefCell<usize>,
}

impl TestHost {
    pub fn with_packages(packages: &[&str]) -> Self {
        let host = Self::default();
        *host.packages.borrow_mut() = packages.iter().map(|p| p.to_string()).collect();
        host
    }

    pub fn uninstall(&self, package: &str) {
        self.packages.borrow_mut().retain(|p| p != package);
    }

    pub fn binding(&self, keycode: u32) -> Option<LaunchAction> {
        self.bindings
            .borrow()
            .iter()
            .find(|(k, _)| *k == keycode)
            .map(|(_, a)| a.clone())
    }

    pub fn call_count(&self) -> usize {
        *self.calls.borrow()
    }
}

impl PackageRegistry for TestHost {
    fn installed_apps(&self) -> Vec<AppId> {
        self.packages
            .borrow()
            .iter()
            .map(|p| AppId::try_from(p.as_str()).unwrap())
            .collect()
    }

    fn launch_action(&self, app: &AppId) -> Option<LaunchAction> {
        self.packages
            .borrow()
            .iter()
            .any(|p| p == app.as_str())
            .then(|| LaunchAction(format!("launch:{app}")))
    }

    fn app_info(&self, app: &AppId) -> Option<AppInfo> {
        Some(AppInfo {
            label: app.to_uppercase(),
            icon: None,
        })
    }
}

impl KeyBinder for TestHost {
    fn bind(&self, keycode: u32, action: &LaunchAction) -> Result<(), BindError> {
        *self.calls.borrow_mut() += 1;
        let mut bindings = self.bindings.borrow_mut();
        bindings.retain(|(k, _)| *k != keycode);
        bindings.push((keycode, action.clone()));
        Ok(())
    }

    fn unbind(&self, keycode: u32) -> Result<(), BindError> {
        *self.calls.borrow_mut() += 1;
        self.bindings.borrow_mut().retain(|(k, _)| *k != keycode);
        Ok(())
    }
}

pub fn config(temp_dir: &TempDir) -> Config {
    Config {
        base_path: temp_dir.path().to_path_buf(),
    }
}

pub fn open_registry(temp_dir: &TempDir) -> ShortcutRegistry {
    ShortcutRegistry::open(&config(temp_dir)).unwrap()
}

pub fn app(s: &str) -> AppId {
    AppId::try_from(s).unwrap()
}
