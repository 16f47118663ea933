//! sahara-therapy
//!
//! The workflow engine: intake write paths (screening, medical history,
//! videos), the assessment case pipeline, curriculum assignment and the
//! day-by-day progression state machine, daily progress, checkpoint reviews,
//! and diagnosis reports.
//!
//! Everything here is actor-agnostic: the hosting HTTP layer resolves who is
//! calling and whether they may act on the given child or assignment before
//! delegating, and these functions only record which doctor (if any)
//! performed an action.

pub mod cases;
pub mod curriculum;
pub mod diagnosis;
pub mod error;
pub mod intake;
pub mod progress;
pub mod review;
pub mod seed;

pub use error::TherapyError;
