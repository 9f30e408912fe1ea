//! Database layer for shortcut storage.
//!
//! One redb table maps each slot's preference key (`shortcut_f7` ..
//! `shortcut_f10`) to a versioned assignment record.

use crate::registry::db::error::DatabaseError;
use crate::types::assignment::VersionedAssignment;
use crate::types::{AppId, Config, SLOT_COUNT, ShortcutSlot};
use redb::{ReadableDatabase, ReadableTable, TableDefinition};

pub mod error {
    use thiserror::Error;

    #[derive(Debug, Error)]
    pub enum DatabaseError {
        #[error("Database error: {0}")]
        Redb(#[from] redb::DatabaseError),

        #[error("Table error: {0}")]
        TableError(#[from] redb::TableError),

        #[error("Storage error: {0}")]
        StorageError(#[from] redb::StorageError),

        #[error("Transaction error: {0}")]
        TransactionError(#[from] redb::TransactionError),

        #[error("Commit error: {0}")]
        CommitError(#[from] redb::CommitError),
    }
}

/// Slot preference key → VersionedAssignment
const SHORTCUT_TABLE: TableDefinition<&str, VersionedAssignment> =
    TableDefinition::new("shortcuts");

pub struct Database {
    db: redb::Database,
}

impl Database {
    /// Creates or opens the database at `config.db_path()`.
    pub fn new(config: &Config) -> Result<Self, DatabaseError> {
        let db = redb::Database::create(config.db_path())?;

        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(SHORTCUT_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self { db })
    }

    /// Reads all slots in a single transaction, indexed by `ShortcutSlot::index`.
    ///
    /// A slot that was never written and one explicitly set to "no shortcut"
    /// both read as `None`.
    pub fn get_all(&self) -> Result<[Option<AppId>; SLOT_COUNT], DatabaseError> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(SHORTCUT_TABLE)?;

        let mut slots: [Option<AppId>; SLOT_COUNT] = Default::default();
        for slot in ShortcutSlot::ALL {
            slots[slot.index()] = table
                .get(slot.preference_key())?
                .and_then(|guard| guard.value().into_latest().app);
        }
        Ok(slots)
    }

    /// Writes the assignment for `slot`, overwriting any previous record.
    pub fn set(&mut self, slot: ShortcutSlot, app: Option<&AppId>) -> Result<(), DatabaseError> {
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(SHORTCUT_TABLE)?;
            table.insert(
                slot.preference_key(),
                VersionedAssignment::latest(app.cloned()),
            )?;
        }
        write_txn.commit()?;
        Ok(())
    }

    /// Writes several slots in one transaction.
    pub fn set_many(
        &mut self,
        entries: &[(ShortcutSlot, Option<AppId>)],
    ) -> Result<(), DatabaseError> {
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(SHORTCUT_TABLE)?;
            for (slot, app) in entries {
                table.insert(
                    slot.preference_key(),
                    VersionedAssignment::latest(app.clone()),
                )?;
            }
        }
        write_txn.commit()?;
        Ok(())
    }

    /// Returns the raw record for `slot`, distinguishing "never written" from
    /// an explicit "no shortcut".
    #[cfg(test)]
    pub(crate) fn record(
        &self,
        slot: ShortcutSlot,
    ) -> Result<Option<VersionedAssignment>, DatabaseError> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(SHORTCUT_TABLE)?;
        Ok(table.get(slot.preference_key())?.map(|guard| guard.value()))
    }
}
