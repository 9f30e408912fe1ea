//! Function-key shortcut table combining persistent storage and platform bindings.
//!
//! The store is authoritative. Platform key bindings are best effort: a
//! binding failure is logged and reported but never rolls back a write, and
//! bindings are re-derived from the store on every `initialize`.

use crate::catalog::AppCatalog;
use crate::host::error::BindError;
use crate::host::{KeyBinder, LaunchAction, PackageRegistry};
use crate::registry::db::Database;
use crate::types::{AppId, Config, NO_SHORTCUT, SLOT_COUNT, ShortcutSlot};
use error::ShortcutError;
use std::collections::HashSet;
use tracing::{debug, info, warn};

pub(crate) mod db;

pub mod error {
    use super::db::error::DatabaseError;
    use thiserror::Error;

    #[derive(Debug, Error)]
    pub enum ShortcutError {
        #[error("Database error: {0}")]
        Database(#[from] DatabaseError),
    }
}

/// What happened on the platform side of an assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindingOutcome {
    /// The key now launches the application.
    Bound(LaunchAction),
    /// The slot was set to "no shortcut" and the key was unbound.
    Cleared,
    /// The application no longer resolves to a launch action; the key was unbound.
    Unresolved,
    /// The platform rejected the call. The assignment is persisted regardless.
    Failed(BindError),
}

/// Result of re-deriving platform bindings from the store.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct InitReport {
    pub bound: Vec<ShortcutSlot>,
    /// Persisted apps that are no longer launchable. Left in the store, not bound.
    pub stale: Vec<ShortcutSlot>,
    pub failed: Vec<ShortcutSlot>,
}

pub struct ShortcutRegistry {
    db: Database,
    slots: [Option<AppId>; SLOT_COUNT],
}

impl ShortcutRegistry {
    /// Opens (or creates) the store and loads the persisted slots.
    ///
    /// No platform bindings are made until `initialize`.
    pub fn open(config: &Config) -> Result<Self, ShortcutError> {
        let db = Database::new(config)?;
        let slots = db.get_all()?;
        Ok(Self { db, slots })
    }

    /// Reloads the slots from the store and binds every one whose app is
    /// currently launchable.
    ///
    /// Slots whose app has disappeared stay persisted and are skipped, so
    /// `get` keeps returning the stale id until the slot is reassigned.
    pub fn initialize<P, K>(
        &mut self,
        catalog: &AppCatalog<'_, P>,
        binder: &K,
    ) -> Result<InitReport, ShortcutError>
    where
        P: PackageRegistry + ?Sized,
        K: KeyBinder + ?Sized,
    {
        self.slots = self.db.get_all()?;
        let launchable: HashSet<AppId> = catalog.launchable_ids().into_iter().collect();
        let mut report = InitReport::default();

        for slot in ShortcutSlot::ALL {
            let Some(app) = &self.slots[slot.index()] else {
                continue;
            };

            let action = launchable
                .contains(app)
                .then(|| catalog.launch_action(app))
                .flatten();
            let Some(action) = action else {
                debug!("{slot}: {app} is not launchable, leaving it unbound");
                report.stale.push(slot);
                continue;
            };

            match binder.bind(slot.keycode(), &action) {
                Ok(()) => report.bound.push(slot),
                Err(e) => {
                    warn!("{slot}: failed to bind {app}: {e}");
                    report.failed.push(slot);
                }
            }
        }

        info!(
            "shortcuts initialized: {} bound, {} stale, {} failed",
            report.bound.len(),
            report.stale.len(),
            report.failed.len()
        );
        Ok(report)
    }

    pub fn get(&self, slot: ShortcutSlot) -> Option<&AppId> {
        self.slots[slot.index()].as_ref()
    }

    pub fn assignments(&self) -> impl Iterator<Item = (ShortcutSlot, Option<&AppId>)> {
        ShortcutSlot::ALL
            .into_iter()
            .map(|slot| (slot, self.get(slot)))
    }

    /// Persists `app` for `slot`, then updates the platform binding.
    ///
    /// Only storage failures are returned as errors; the platform side is
    /// described by the returned outcome.
    pub fn assign<P, K>(
        &mut self,
        slot: ShortcutSlot,
        app: Option<AppId>,
        catalog: &AppCatalog<'_, P>,
        binder: &K,
    ) -> Result<BindingOutcome, ShortcutError>
    where
        P: PackageRegistry + ?Sized,
        K: KeyBinder + ?Sized,
    {
        self.db.set(slot, app.as_ref())?;

        let outcome = match &app {
            None => match binder.unbind(slot.keycode()) {
                Ok(()) => BindingOutcome::Cleared,
                Err(e) => BindingOutcome::Failed(e),
            },
            Some(id) => match catalog.launch_action(id) {
                Some(action) => match binder.bind(slot.keycode(), &action) {
                    Ok(()) => BindingOutcome::Bound(action),
                    Err(e) => BindingOutcome::Failed(e),
                },
                None => {
                    warn!("{slot}: {id} has no launch action, unbinding key");
                    match binder.unbind(slot.keycode()) {
                        Ok(()) => BindingOutcome::Unresolved,
                        Err(e) => BindingOutcome::Failed(e),
                    }
                }
            },
        };

        if let BindingOutcome::Failed(e) = &outcome {
            warn!("{slot}: platform binding failed, assignment kept: {e}");
        }

        match &app {
            Some(id) => info!("{slot} assigned to {id}"),
            None => info!("{slot} cleared"),
        }
        self.slots[slot.index()] = app;
        Ok(outcome)
    }

    /// Migrates a key-value preference dump written by older settings builds.
    ///
    /// Keys other than `shortcut_f7`..`shortcut_f10` are ignored. The
    /// `"No shortcut"` sentinel and empty values become "no shortcut"; values
    /// that are not valid ids are skipped. Platform bindings are untouched
    /// until the next `initialize`. Returns the number of slots written.
    pub fn import_preferences<I, K, V>(&mut self, entries: I) -> Result<usize, ShortcutError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut imported: Vec<(ShortcutSlot, Option<AppId>)> = Vec::new();

        for (key, value) in entries {
            let Some(slot) = ShortcutSlot::from_preference_key(key.as_ref()) else {
                debug!("ignoring preference {}", key.as_ref());
                continue;
            };

            let value = value.as_ref().trim();
            let app = if value.is_empty() || value == NO_SHORTCUT {
                None
            } else {
                match AppId::try_from(value) {
                    Ok(id) => Some(id),
                    Err(e) => {
                        warn!("{slot}: skipping invalid app id {value:?}: {e}");
                        continue;
                    }
                }
            };

            imported.retain(|(s, _)| *s != slot);
            imported.push((slot, app));
        }

        self.db.set_many(&imported)?;
        for (slot, app) in &imported {
            self.slots[slot.index()] = app.clone();
        }
        Ok(imported.len())
    }
}
