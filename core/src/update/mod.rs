//! Update package handling: verify, then offer installation through a notification.

use crate::types::UpdateConfig;
use error::VerifyError;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

pub mod error {
    use thiserror::Error;

    /// The platform's signature check rejected the package.
    #[derive(Debug, Clone, PartialEq, Eq, Error)]
    #[error("package verification failed: {0}")]
    pub struct VerifyError(pub String);
}

pub trait PackageVerifier {
    fn verify(&self, package: &Path) -> Result<(), VerifyError>;
}

pub trait NotificationSink {
    fn create_channel(&self, channel: &NotificationChannel);
    fn notify(&self, id: u32, notification: &Notification);
    /// Short, transient message shown to the user.
    fn alert(&self, message: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Importance {
    Default,
    High,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationChannel {
    pub id: String,
    pub name: String,
    pub description: String,
    pub importance: Importance,
}

impl From<&UpdateConfig> for NotificationChannel {
    fn from(config: &UpdateConfig) -> Self {
        Self {
            id: config.channel_id.clone(),
            name: config.channel_id.clone(),
            description: config.channel_description.clone(),
            importance: Importance::High,
        }
    }
}

/// Action button that hands the package to the installer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallAction {
    pub label: String,
    pub package: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub channel_id: String,
    pub title: String,
    pub text: String,
    pub action: InstallAction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateOutcome {
    pub verified: bool,
}

pub struct UpdateNotifier {
    config: UpdateConfig,
}

impl UpdateNotifier {
    pub fn new(config: UpdateConfig) -> Self {
        Self { config }
    }

    /// Verifies `package` and posts the install notification.
    ///
    /// A package that fails verification is reported to the user with an
    /// alert, but the notification is still posted so they can decide.
    pub fn on_package_received<V, N>(&self, package: &Path, verifier: &V, sink: &N) -> UpdateOutcome
    where
        V: PackageVerifier + ?Sized,
        N: NotificationSink + ?Sized,
    {
        let verified = match verifier.verify(package) {
            Ok(()) => true,
            Err(e) => {
                warn!("{}: {e}", package.display());
                sink.alert(&self.config.corrupted_message);
                false
            }
        };

        sink.create_channel(&NotificationChannel::from(&self.config));

        let notification = Notification {
            channel_id: self.config.channel_id.clone(),
            title: self.config.title.clone(),
            text: self.config.text.clone(),
            action: InstallAction {
                label: self.config.action_label.clone(),
                package: package.to_path_buf(),
            },
        };
        sink.notify(self.config.notification_id, &notification);
        info!(
            "update notification posted for {} (verified: {verified})",
            package.display()
        );

        UpdateOutcome { verified }
    }
}

#[cfg(test)]
mod tests;
