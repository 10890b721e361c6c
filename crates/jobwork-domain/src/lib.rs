//! Jobwork Domain Layer
//!
//! This crate contains the domain model for the job-work supplier directory.
//! It defines the value objects, ranking rules and trait interfaces that the
//! storage and CLI layers depend upon. It performs no I/O of its own.
//!
//! ## Key Concepts
//!
//! - **Supplier**: a named external party a job-work voucher is issued to
//! - **Supplier record**: a supplier name with its use count and last use time
//! - **Supplier list**: the ranked, deduplicated, capacity-bounded directory
//! - **Key-value store**: the client-local medium the directory persists into
//!
//! ## Architecture
//!
//! - Pure business logic only; time is passed in, never read
//! - Infrastructure implementations live in `jobwork-store`
//! - Trait definitions for all external interactions

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod format;
pub mod supplier;
pub mod traits;

// Re-exports for convenience
pub use format::{format_currency, format_quantity};
pub use supplier::{
    SupplierList, SupplierRecord, MAX_SUGGESTIONS, MAX_SUPPLIERS, SUPPLIERS_KEY,
};
pub use traits::{Clock, KeyValueStore, SystemClock};
