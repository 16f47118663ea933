use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// Risk tier derived from the M-CHAT total score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RiskLevel {
    /// Score 0–2. No immediate concern.
    Low,
    /// Score 3–7. Follow-up recommended.
    Medium,
    /// Score 8–20. Priority for doctor review.
    High,
}

/// A completed M-CHAT screening for one child.
///
/// `total_score` and `risk_level` are derived fields. The write path recomputes
/// them from `answers` on every save; they are never accepted from a caller.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScreeningResponse {
    pub id: Uuid,
    pub child_id: Uuid,
    /// Answers to questions 1..=20, true = YES.
    pub answers: [bool; 20],
    pub total_score: u8,
    pub risk_level: RiskLevel,
    pub created_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
}
