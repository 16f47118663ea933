//! sahara-audit
//!
//! Structured audit events for workflow mutations. Emitted via `tracing`, so
//! whatever subscriber the hosting process installs decides where they land.

pub mod events;

pub use events::AuditEvent;
