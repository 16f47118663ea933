use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Spectrum {
    None,
    Mild,
    Moderate,
    Severe,
}

/// A doctor's final diagnosis report for a child. Issuing one completes the
/// child's assessment case.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DiagnosisReport {
    pub id: Uuid,
    pub child_id: Uuid,
    pub doctor_id: Uuid,
    pub has_autism: bool,
    pub spectrum: Spectrum,
    pub detailed_report: String,
    pub next_steps: String,
    /// Parents only see reports the doctor chose to share.
    pub shared_with_parent: bool,
    pub created_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
}
