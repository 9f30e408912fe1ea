use super::*;
use std::cell::RefCell;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum BindCall {
    Bind(u32, LaunchAction),
    Unbind(u32),
}

struct FakeApp {
    id: AppId,
    label: Option<String>,
    launchable: bool,
}

/// In-memory platform: a mutable package list plus a log of binding calls.
#[derive(Default)]
pub(crate) struct FakeHost {
    apps: RefCell<Vec<FakeApp>>,
    calls: RefCell<Vec<BindCall>>,
    reject_bindings: RefCell<bool>,
}

pub(crate) fn app_id(s: &str) -> AppId {
    AppId::try_from(s).unwrap()
}

impl FakeHost {
    pub(crate) fn with_apps(ids: &[&str]) -> Self {
        let host = Self::default();
        for id in ids {
            host.install(id);
        }
        host
    }

    pub(crate) fn install(&self, id: &str) {
        self.apps.borrow_mut().push(FakeApp {
            id: app_id(id),
            label: Some(format!("{id} label")),
            launchable: true,
        });
    }

    pub(crate) fn install_service(&self, id: &str) {
        self.apps.borrow_mut().push(FakeApp {
            id: app_id(id),
            label: Some(format!("{id} label")),
            launchable: false,
        });
    }

    pub(crate) fn install_unlabeled(&self, id: &str) {
        self.apps.borrow_mut().push(FakeApp {
            id: app_id(id),
            label: None,
            launchable: true,
        });
    }

    pub(crate) fn uninstall(&self, id: &str) {
        self.apps.borrow_mut().retain(|app| app.id.as_str() != id);
    }

    pub(crate) fn reject_bindings(&self, reject: bool) {
        *self.reject_bindings.borrow_mut() = reject;
    }

    pub(crate) fn take_calls(&self) -> Vec<BindCall> {
        std::mem::take(&mut *self.calls.borrow_mut())
    }

    pub(crate) fn action_for(id: &str) -> LaunchAction {
        LaunchAction(format!("intent:#Intent;package={id};end"))
    }

    fn record(&self, call: BindCall) -> Result<(), BindError> {
        self.calls.borrow_mut().push(call);
        if *self.reject_bindings.borrow() {
            return Err(BindError("window manager unavailable".to_string()));
        }
        Ok(())
    }
}

impl PackageRegistry for FakeHost {
    fn installed_apps(&self) -> Vec<AppId> {
        self.apps.borrow().iter().map(|app| app.id.clone()).collect()
    }

    fn launch_action(&self, app: &AppId) -> Option<LaunchAction> {
        self.apps
            .borrow()
            .iter()
            .find(|a| &a.id == app && a.launchable)
            .map(|a| Self::action_for(a.id.as_str()))
    }

    fn app_info(&self, app: &AppId) -> Option<AppInfo> {
        self.apps
            .borrow()
            .iter()
            .find(|a| &a.id == app)
            .and_then(|a| a.label.clone())
            .map(|label| AppInfo {
                label,
                icon: Some(format!("icon://{app}")),
            })
    }
}

impl KeyBinder for FakeHost {
    fn bind(&self, keycode: u32, action: &LaunchAction) -> Result<(), BindError> {
        self.record(BindCall::Bind(keycode, action.clone()))
    }

    fn unbind(&self, keycode: u32) -> Result<(), BindError> {
        self.record(BindCall::Unbind(keycode))
    }
}
