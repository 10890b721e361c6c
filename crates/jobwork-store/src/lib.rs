//! Jobwork Storage Layer
//!
//! Implements the `KeyValueStore` trait on SQLite and in memory, and the
//! [`SupplierDirectory`] service that persists the ranked supplier list
//! through any such store.
//!
//! # Architecture
//!
//! - SQLite for durable client-local storage (one `kv` table)
//! - An in-memory store as a substitutable fake for tests
//! - The directory keeps no cache; every operation re-reads the store
//!
//! # Examples
//!
//! ```no_run
//! use jobwork_store::{SqliteKvStore, SupplierDirectory};
//!
//! let store = SqliteKvStore::new("suppliers.db").unwrap();
//! let mut directory = SupplierDirectory::new(store);
//! directory.record("Global Textiles");
//! assert_eq!(directory.suggest("glo"), vec!["Global Textiles"]);
//! ```

#![warn(missing_docs)]

pub mod directory;
pub mod memory;
pub mod sqlite;

pub use directory::{DirectoryError, SupplierDirectory};
pub use memory::MemoryStore;
pub use sqlite::SqliteKvStore;

use thiserror::Error;

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// I/O error while preparing the store location
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Backing storage lock was poisoned by a panicking writer
    #[error("Storage lock poisoned")]
    Poisoned,
}
