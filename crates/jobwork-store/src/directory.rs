//! Supplier directory service
//!
//! Persists the ranked [`SupplierList`] under [`SUPPLIERS_KEY`] in an injected
//! [`KeyValueStore`] and serves prefix suggestions from it.
//!
//! # Degraded defaults
//!
//! Every operation comes in two forms. The `try_*` form reports what went
//! wrong as a [`DirectoryError`]. The plain form never fails: errors are
//! logged and replaced by a documented default, an empty `Vec` for reads and
//! nothing for writes. UI callers use the plain form so that a broken
//! suggestion store can never block saving a voucher.
//!
//! # Concurrency
//!
//! No cache is kept and no lock is taken. Each mutation is a read-modify-write
//! against the store, so two directories sharing one store can lose an
//! increment if their calls interleave.

use jobwork_domain::{
    Clock, KeyValueStore, SupplierList, SupplierRecord, SystemClock, SUPPLIERS_KEY,
};
use thiserror::Error;
use tracing::{debug, warn};

/// Why a directory operation could not complete
#[derive(Error, Debug)]
pub enum DirectoryError {
    /// No client-local store exists in this execution context
    #[error("Supplier storage is unavailable")]
    Unavailable,

    /// The stored document could not be parsed
    #[error("Malformed supplier document: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The store failed to read
    #[error("Supplier storage read failed: {0}")]
    Read(String),

    /// The store failed to write or delete
    #[error("Supplier storage write failed: {0}")]
    Write(String),
}

/// Ranked supplier-name directory over a client-local store
pub struct SupplierDirectory<S, C = SystemClock> {
    store: Option<S>,
    clock: C,
}

impl<S: KeyValueStore> SupplierDirectory<S, SystemClock> {
    /// Create a directory persisting into `store`
    pub fn new(store: S) -> Self {
        Self {
            store: Some(store),
            clock: SystemClock,
        }
    }

    /// Create a directory for a context without client-local storage
    ///
    /// Reads return empty results and writes do nothing.
    pub fn unavailable() -> Self {
        Self {
            store: None,
            clock: SystemClock,
        }
    }
}

impl<S: KeyValueStore, C: Clock> SupplierDirectory<S, C> {
    /// Replace the time source used to stamp `lastUsed`
    pub fn with_clock<C2: Clock>(self, clock: C2) -> SupplierDirectory<S, C2> {
        SupplierDirectory {
            store: self.store,
            clock,
        }
    }

    /// Whether a store is attached
    pub fn is_available(&self) -> bool {
        self.store.is_some()
    }

    /// The attached store, if any
    pub fn store(&self) -> Option<&S> {
        self.store.as_ref()
    }

    /// Read the stored directory
    ///
    /// An absent document is an empty list, not an error.
    pub fn try_list(&self) -> Result<SupplierList, DirectoryError> {
        let store = self.store.as_ref().ok_or(DirectoryError::Unavailable)?;
        let raw = store
            .get(SUPPLIERS_KEY)
            .map_err(|e| DirectoryError::Read(e.to_string()))?;

        match raw {
            Some(document) => Ok(serde_json::from_str(&document)?),
            None => Ok(SupplierList::new()),
        }
    }

    /// All records in rank order
    ///
    /// Degraded default: an empty `Vec` when the store is unavailable,
    /// unreadable or holds a malformed document.
    pub fn list(&self) -> Vec<SupplierRecord> {
        degrade("list", self.try_list().map(SupplierList::into_records))
    }

    /// Record one use of `name` and persist the re-ranked directory
    ///
    /// Returns `Ok(false)` without touching the store when the trimmed name
    /// is empty. A malformed stored document is treated as empty and is
    /// overwritten.
    pub fn try_record(&mut self, name: &str) -> Result<bool, DirectoryError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Ok(false);
        }

        let mut list = match self.try_list() {
            Ok(list) => list,
            Err(DirectoryError::Malformed(e)) => {
                warn!("Discarding malformed supplier document: {}", e);
                SupplierList::new()
            }
            Err(e) => return Err(e),
        };

        list.record_at(trimmed, self.clock.now());
        let document =
            serde_json::to_string(&list).map_err(|e| DirectoryError::Write(e.to_string()))?;

        let store = self.store.as_mut().ok_or(DirectoryError::Unavailable)?;
        store
            .set(SUPPLIERS_KEY, &document)
            .map_err(|e| DirectoryError::Write(e.to_string()))?;

        debug!("Recorded supplier '{}' ({} in directory)", trimmed, list.len());
        Ok(true)
    }

    /// Record one use of `name`
    ///
    /// Degraded default: nothing happens when the name is blank or the store
    /// is unavailable or fails to read or write.
    pub fn record(&mut self, name: &str) {
        degrade("record", self.try_record(name));
    }

    /// Names starting with `query`, case-insensitively, in rank order
    ///
    /// A blank query returns an empty list without reading the store.
    pub fn try_suggest(&self, query: &str) -> Result<Vec<String>, DirectoryError> {
        if query.trim().is_empty() {
            return Ok(Vec::new());
        }
        Ok(self.try_list()?.suggest(query))
    }

    /// At most ten supplier names matching the `query` prefix
    ///
    /// Degraded default: an empty `Vec`.
    pub fn suggest(&self, query: &str) -> Vec<String> {
        degrade("suggest", self.try_suggest(query))
    }

    /// Erase the persisted directory
    pub fn try_clear(&mut self) -> Result<(), DirectoryError> {
        let store = self.store.as_mut().ok_or(DirectoryError::Unavailable)?;
        store
            .delete(SUPPLIERS_KEY)
            .map_err(|e| DirectoryError::Write(e.to_string()))?;
        debug!("Cleared supplier directory");
        Ok(())
    }

    /// Erase the persisted directory
    ///
    /// Degraded default: nothing happens when the store is unavailable or the
    /// deletion fails.
    pub fn clear(&mut self) {
        degrade("clear", self.try_clear());
    }
}

/// Swap an error for the operation's default value, logging it
fn degrade<T: Default>(operation: &str, result: Result<T, DirectoryError>) -> T {
    match result {
        Ok(value) => value,
        Err(DirectoryError::Unavailable) => {
            debug!("Supplier {} skipped: storage unavailable", operation);
            T::default()
        }
        Err(e) => {
            warn!("Supplier {} failed: {}", operation, e);
            T::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;

    #[test]
    fn test_unavailable_directory_degrades() {
        let mut directory = SupplierDirectory::<MemoryStore>::unavailable();
        assert!(!directory.is_available());

        directory.record("Acme");
        directory.clear();
        assert!(directory.list().is_empty());
        assert!(directory.suggest("ac").is_empty());
        assert!(matches!(directory.try_list(), Err(DirectoryError::Unavailable)));
        assert!(matches!(directory.try_record("Acme"), Err(DirectoryError::Unavailable)));
    }

    #[test]
    fn test_blank_record_skips_store() {
        let mut directory = SupplierDirectory::new(MemoryStore::new());
        assert!(!directory.try_record("   ").unwrap());
        assert!(directory.store().unwrap().is_empty());
    }

    #[test]
    fn test_malformed_document() {
        let mut store = MemoryStore::new();
        store.set(SUPPLIERS_KEY, "{not json").unwrap();
        let mut directory = SupplierDirectory::new(store);

        assert!(matches!(directory.try_list(), Err(DirectoryError::Malformed(_))));
        assert!(directory.list().is_empty());

        // The next record replaces the broken document
        directory.record("Acme");
        let records = directory.list();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Acme");
    }

    #[test]
    fn test_wrong_shape_document_is_malformed() {
        let mut store = MemoryStore::new();
        store.set(SUPPLIERS_KEY, r#"{"name":"Acme"}"#).unwrap();
        let directory = SupplierDirectory::new(store);
        assert!(directory.list().is_empty());
    }
}
