//! sahara-core
//!
//! Pure domain types for the AutiSahara screening and therapy platform.
//! No I/O and no persistence — this is the shared vocabulary consumed by the
//! scoring engine, the record store, and the workflow crates, with TypeScript
//! bindings exported for the mobile and web frontends.

pub mod models;
