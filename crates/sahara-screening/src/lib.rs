//! sahara-screening
//!
//! The M-CHAT-R/F screening instrument and the medical-history specialist
//! flag. Pure rules — no persistence. The write paths in `sahara-therapy`
//! invoke these on every save so that derived fields are never stale.

pub mod error;
pub mod history;
pub mod mchat;

pub use error::ScreeningError;
pub use mchat::{AnswerSheet, ScreeningOutcome};
