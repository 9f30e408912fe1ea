//! Single-choice app picker for a shortcut slot.

use crate::catalog::{AppCatalog, AppCatalogEntry};
use crate::host::{KeyBinder, PackageRegistry};
use crate::registry::error::ShortcutError;
use crate::registry::{BindingOutcome, ShortcutRegistry};
use crate::types::{AppId, ShortcutSlot};
use error::SelectionError;

pub mod error {
    use super::*;
    use thiserror::Error;

    #[derive(Debug, Error)]
    pub enum SelectionError {
        #[error("Registry error: {0}")]
        Registry(#[from] ShortcutError),

        #[error("No choice at index {index} (list has {len})")]
        IndexOutOfRange { index: usize, len: usize },
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Choice {
    NoShortcut,
    App(AppCatalogEntry),
}

impl Choice {
    pub fn app_id(&self) -> Option<&AppId> {
        match self {
            Choice::NoShortcut => None,
            Choice::App(entry) => Some(&entry.id),
        }
    }
}

/// Choices for one slot with exactly one of them selected.
#[derive(Debug, Clone)]
pub struct SelectionList {
    slot: ShortcutSlot,
    choices: Vec<Choice>,
    selected: usize,
    no_shortcut_label: String,
    stale: Option<AppId>,
}

impl SelectionList {
    pub fn slot(&self) -> ShortcutSlot {
        self.slot
    }

    /// `choices()[0]` is always `Choice::NoShortcut`.
    pub fn choices(&self) -> &[Choice] {
        &self.choices
    }

    pub fn len(&self) -> usize {
        self.choices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.choices.is_empty()
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected(&self) -> &Choice {
        &self.choices[self.selected]
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected == index
    }

    pub fn label(&self, index: usize) -> Option<&str> {
        self.choices.get(index).map(|choice| match choice {
            Choice::NoShortcut => self.no_shortcut_label.as_str(),
            Choice::App(entry) => entry.label.as_str(),
        })
    }

    /// The persisted app for this slot when it is missing from the catalog.
    pub fn stale(&self) -> Option<&AppId> {
        self.stale.as_ref()
    }

    fn select(&mut self, index: usize) -> Result<&Choice, SelectionError> {
        if index >= self.choices.len() {
            return Err(SelectionError::IndexOutOfRange {
                index,
                len: self.choices.len(),
            });
        }
        self.selected = index;
        Ok(&self.choices[index])
    }
}

pub struct SelectionController<'a, P: PackageRegistry + ?Sized, K: KeyBinder + ?Sized> {
    registry: &'a mut ShortcutRegistry,
    catalog: AppCatalog<'a, P>,
    binder: &'a K,
    no_shortcut_label: String,
}

impl<'a, P: PackageRegistry + ?Sized, K: KeyBinder + ?Sized> SelectionController<'a, P, K> {
    pub fn new(
        registry: &'a mut ShortcutRegistry,
        catalog: AppCatalog<'a, P>,
        binder: &'a K,
        no_shortcut_label: impl Into<String>,
    ) -> Self {
        Self {
            registry,
            catalog,
            binder,
            no_shortcut_label: no_shortcut_label.into(),
        }
    }

    pub fn registry(&self) -> &ShortcutRegistry {
        &*self.registry
    }

    /// Builds `[no shortcut] + catalog` with the slot's current app selected.
    ///
    /// An unassigned slot, or one whose app is no longer in the catalog,
    /// selects "no shortcut".
    pub fn present(&self, slot: ShortcutSlot) -> SelectionList {
        let current = self.registry.get(slot);

        let mut choices = vec![Choice::NoShortcut];
        choices.extend(
            self.catalog
                .list_launchable_apps()
                .into_iter()
                .map(Choice::App),
        );

        let selected = current
            .and_then(|id| choices.iter().position(|c| c.app_id() == Some(id)))
            .unwrap_or(0);
        let stale = current.filter(|_| selected == 0).cloned();
        if let Some(id) = &stale {
            tracing::debug!("{slot}: assigned app {id} is not in the catalog");
        }

        SelectionList {
            slot,
            choices,
            selected,
            no_shortcut_label: self.no_shortcut_label.clone(),
            stale,
        }
    }

    /// Moves the selection to `index`, then commits it to the registry.
    ///
    /// An out-of-range index leaves both the list and the registry unchanged.
    pub fn on_select(
        &mut self,
        list: &mut SelectionList,
        index: usize,
    ) -> Result<BindingOutcome, SelectionError> {
        let app = list.select(index)?.app_id().cloned();
        list.stale = None;

        let outcome = self
            .registry
            .assign(list.slot, app, &self.catalog, self.binder)?;
        Ok(outcome)
    }
}
