//! Checkpoint reviews: a doctor's written assessment at day milestones.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sahara_audit::AuditEvent;
use sahara_core::models::assignment::CheckpointReview;
use sahara_store::RecordStore;

use crate::error::TherapyError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewDraft {
    /// The day milestone being reviewed (e.g. 15, 30, 45).
    pub review_period: u16,
    pub observations: String,
    pub recommendations: String,
    pub spectrum_identified: Option<String>,
}

/// Append a checkpoint review to an assignment. Permitted in any assignment
/// state — a doctor can still write up a completed or paused curriculum.
/// Reviews are immutable once written and never change assignment state.
pub fn add_checkpoint_review(
    store: &RecordStore,
    assignment_id: Uuid,
    doctor_id: Uuid,
    draft: ReviewDraft,
) -> Result<CheckpointReview, TherapyError> {
    store.assignment(assignment_id)?;

    if draft.review_period == 0 {
        return Err(TherapyError::Validation("review period must be at least day 1".into()));
    }
    if draft.observations.trim().is_empty() {
        return Err(TherapyError::Validation("observations are required".into()));
    }
    if draft.recommendations.trim().is_empty() {
        return Err(TherapyError::Validation("recommendations are required".into()));
    }

    let review = CheckpointReview {
        id: Uuid::new_v4(),
        assignment_id,
        doctor_id,
        review_period: draft.review_period,
        observations: draft.observations,
        recommendations: draft.recommendations,
        spectrum_identified: draft.spectrum_identified,
        reviewed_at: Timestamp::now(),
    };
    store.append_review(review.clone());

    AuditEvent::new("review.create", "review", review.id.to_string())
        .with_actor(doctor_id)
        .with_details(serde_json::json!({
            "assignment_id": assignment_id,
            "review_period": review.review_period,
        }))
        .emit();
    Ok(review)
}

/// Reviews for an assignment, newest first.
pub fn reviews_for(
    store: &RecordStore,
    assignment_id: Uuid,
) -> Result<Vec<CheckpointReview>, TherapyError> {
    store.assignment(assignment_id)?;
    Ok(store.reviews_for(assignment_id))
}
