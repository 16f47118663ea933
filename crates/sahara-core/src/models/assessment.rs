use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum CaseStatus {
    /// Submitted by the parent, waiting for a doctor.
    Pending,
    /// A doctor has opened the case but not yet accepted it.
    InReview,
    /// Accepted by a doctor; therapy can be assigned.
    Accepted,
    /// A diagnosis report was issued.
    Completed,
}

/// The per-child case that moves through the doctor-review pipeline.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentCase {
    pub id: Uuid,
    pub child_id: Uuid,
    pub assigned_doctor: Option<Uuid>,
    pub status: CaseStatus,
    /// Parent declared the submitted information accurate.
    pub parent_confirmed: bool,
    pub submitted_at: Option<jiff::Timestamp>,
    pub reviewed_at: Option<jiff::Timestamp>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum VideoKind {
    Walking,
    Eating,
    Speaking,
    Behavior,
    Playing,
    Other,
}

/// An observation video uploaded by the parent for doctor review.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ObservationVideo {
    pub id: Uuid,
    pub child_id: Uuid,
    pub kind: VideoKind,
    pub url: String,
    pub description: Option<String>,
    pub uploaded_at: jiff::Timestamp,
}
