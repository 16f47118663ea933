//! The assessment case pipeline: parent submits the completed intake for
//! review, a doctor accepts it, and issuing a diagnosis report completes it.

use jiff::Timestamp;
use jiff::civil::Date;
use uuid::Uuid;

use sahara_audit::AuditEvent;
use sahara_core::models::assessment::{AssessmentCase, CaseStatus};
use sahara_core::models::assignment::CurriculumAssignment;
use sahara_core::models::curriculum::CurriculumKind;
use sahara_store::RecordStore;

use crate::curriculum;
use crate::error::TherapyError;

/// Submit the child's case for doctor review. Upserts the case to `pending`
/// with the parent's declaration recorded.
///
/// If a pre-assessment curriculum is registered and the child has no active
/// assignment, it is auto-assigned starting today with no doctor. Losing that
/// assignment race to a concurrent assign is not an error — the child simply
/// keeps the curriculum it just got.
pub fn submit_for_review(
    store: &RecordStore,
    child_id: Uuid,
    today: Date,
) -> Result<(AssessmentCase, Option<CurriculumAssignment>), TherapyError> {
    let child = store.child(child_id)?;

    // A resubmission only refreshes the declaration: the doctor who already
    // picked up the case (and the review timestamp) stay in place.
    let previous = store.case_for(child_id).ok();
    let case = AssessmentCase {
        id: previous.as_ref().map_or_else(Uuid::new_v4, |c| c.id),
        child_id,
        assigned_doctor: previous.as_ref().and_then(|c| c.assigned_doctor),
        status: CaseStatus::Pending,
        parent_confirmed: true,
        submitted_at: Some(Timestamp::now()),
        reviewed_at: previous.as_ref().and_then(|c| c.reviewed_at),
    };
    store.put_case(case.clone());

    let auto_assigned = match store.curriculum_of_kind(CurriculumKind::Assessment) {
        Some(pre) if store.active_assignment_for(child_id).is_none() => {
            match curriculum::assign(store, child_id, pre.id, None, today) {
                Ok(assignment) => Some(assignment),
                Err(TherapyError::Conflict(_)) => None,
                Err(e) => return Err(e),
            }
        }
        _ => None,
    };

    AuditEvent::new("case.submit", "case", case.id.to_string())
        .with_actor(child.parent_id)
        .with_details(serde_json::json!({
            "auto_assigned": auto_assigned.as_ref().map(|a| a.id),
        }))
        .emit();
    Ok((case, auto_assigned))
}

/// A doctor accepts a pending case. Conflicts when the case was already
/// accepted or completed.
pub fn accept_case(
    store: &RecordStore,
    child_id: Uuid,
    doctor_id: Uuid,
) -> Result<AssessmentCase, TherapyError> {
    let mut case = store.case_for(child_id)?;
    if case.status != CaseStatus::Pending {
        return Err(TherapyError::Conflict(format!(
            "case for child {child_id} is not pending"
        )));
    }
    case.assigned_doctor = Some(doctor_id);
    case.status = CaseStatus::Accepted;
    case.reviewed_at = Some(Timestamp::now());
    store.put_case(case.clone());

    AuditEvent::new("case.accept", "case", case.id.to_string())
        .with_actor(doctor_id)
        .emit();
    Ok(case)
}

/// Cases waiting for a doctor, for the doctor dashboard.
pub fn pending_cases(store: &RecordStore) -> Vec<AssessmentCase> {
    store.cases_with_status(CaseStatus::Pending)
}

/// Cases the given doctor has accepted (or completed).
pub fn cases_for_doctor(store: &RecordStore, doctor_id: Uuid) -> Vec<AssessmentCase> {
    store.cases_for_doctor(doctor_id)
}
