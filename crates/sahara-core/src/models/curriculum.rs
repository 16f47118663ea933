use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum CurriculumKind {
    /// Suitable for any child.
    General,
    /// Targets a specific spectrum presentation (see `spectrum_focus`).
    Specialized,
    /// The pre-assessment observation program, auto-assigned at case
    /// submission with no doctor.
    Assessment,
}

/// A therapy curriculum template: a fixed number of days, each with tasks.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Curriculum {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    /// Typically 15, 30, or 45.
    pub duration_days: u16,
    pub kind: CurriculumKind,
    /// Set for specialized curricula only.
    pub spectrum_focus: Option<String>,
    /// The doctor who authored the template. None for system-seeded ones.
    pub created_by: Option<Uuid>,
    pub created_at: jiff::Timestamp,
}

/// One task within a curriculum, pinned to a day.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CurriculumTask {
    pub id: Uuid,
    pub curriculum_id: Uuid,
    /// 1..=duration_days.
    pub day_number: u16,
    pub title: String,
    /// Why this task matters for the child, shown to parents.
    pub why_description: String,
    /// Step-by-step instructions for parents.
    pub instructions: String,
    pub demo_video_url: Option<String>,
    /// Position within the day.
    pub order_index: u16,
}
