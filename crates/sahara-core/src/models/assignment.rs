use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AssignmentStatus {
    Active,
    Paused,
    /// Terminal. No transition leaves this state.
    Completed,
}

/// A curriculum assigned to a child, with day-by-day progress tracking.
///
/// Invariant: a child has at most one `Active` assignment at a time. The
/// store's uniqueness index enforces it; see `sahara-store`.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CurriculumAssignment {
    pub id: Uuid,
    pub child_id: Uuid,
    pub curriculum_id: Uuid,
    /// None when the system assigned the curriculum (pre-assessment program).
    pub assigned_by: Option<Uuid>,
    pub start_date: jiff::civil::Date,
    /// `start_date + duration_days`.
    pub end_date: jiff::civil::Date,
    /// 1-indexed, never exceeds the curriculum's duration.
    pub current_day: u16,
    pub status: AssignmentStatus,
    pub created_at: jiff::Timestamp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ProgressStatus {
    NotDone,
    DoneWithHelp,
    DoneWithoutHelp,
}

impl ProgressStatus {
    /// Whether the task was performed at all.
    pub fn is_done(self) -> bool {
        !matches!(self, ProgressStatus::NotDone)
    }
}

/// A parent's progress submission for one task on one calendar date.
///
/// Keyed by (assignment, task, date): resubmitting for the same key overwrites
/// this entry in place rather than creating a second one.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DailyProgressEntry {
    pub id: Uuid,
    pub assignment_id: Uuid,
    pub task_id: Uuid,
    /// The assignment's current day at submission time.
    pub day_number: u16,
    pub date: jiff::civil::Date,
    pub status: ProgressStatus,
    /// Video of the child doing the task.
    pub video_url: Option<String>,
    pub parent_notes: Option<String>,
    pub submitted_at: jiff::Timestamp,
}

/// A doctor's written assessment at a day milestone (e.g. day 15, 30, 45).
/// Append-only; reviews are never edited or recomputed.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CheckpointReview {
    pub id: Uuid,
    pub assignment_id: Uuid,
    pub doctor_id: Uuid,
    /// The day milestone this review covers.
    pub review_period: u16,
    pub observations: String,
    pub recommendations: String,
    pub spectrum_identified: Option<String>,
    pub reviewed_at: jiff::Timestamp,
}
