//! sahara-store
//!
//! The persistence boundary: an in-process record store with typed
//! collections, the cross-record uniqueness constraints the workflow engine
//! relies on, cascading deletion, and JSON snapshot load/save.
//!
//! All access goes through one `RwLock`, so a write — including its
//! precondition checks — is serialized against every other write. That is
//! what upholds the one-active-assignment-per-child invariant and the
//! one-entry-per-(assignment, task, date) key under concurrent callers.

pub mod error;
pub mod snapshot;
pub mod store;

pub use error::StoreError;
pub use store::RecordStore;
