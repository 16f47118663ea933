//! Diagnosis reports, the end of the case pipeline.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sahara_audit::AuditEvent;
use sahara_core::models::assessment::CaseStatus;
use sahara_core::models::report::{DiagnosisReport, Spectrum};
use sahara_store::RecordStore;

use crate::error::TherapyError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagnosisDraft {
    pub has_autism: bool,
    pub spectrum: Spectrum,
    pub detailed_report: String,
    pub next_steps: String,
    pub shared_with_parent: bool,
}

/// Issue a diagnosis report. Only the doctor who accepted the case may issue
/// one, and only for an accepted (or already completed) case. Issuing marks
/// the case completed.
pub fn issue_report(
    store: &RecordStore,
    child_id: Uuid,
    doctor_id: Uuid,
    draft: DiagnosisDraft,
) -> Result<DiagnosisReport, TherapyError> {
    let mut case = store.case_for(child_id)?;
    if case.assigned_doctor != Some(doctor_id) {
        return Err(TherapyError::Conflict(format!(
            "doctor {doctor_id} is not assigned to this case"
        )));
    }
    if !matches!(case.status, CaseStatus::Accepted | CaseStatus::Completed) {
        return Err(TherapyError::Conflict(format!(
            "case for child {child_id} has not been accepted"
        )));
    }
    if draft.detailed_report.trim().is_empty() {
        return Err(TherapyError::Validation("detailed report is required".into()));
    }

    let now = Timestamp::now();
    let report = DiagnosisReport {
        id: Uuid::new_v4(),
        child_id,
        doctor_id,
        has_autism: draft.has_autism,
        spectrum: draft.spectrum,
        detailed_report: draft.detailed_report,
        next_steps: draft.next_steps,
        shared_with_parent: draft.shared_with_parent,
        created_at: now,
        updated_at: now,
    };
    store.add_report(report.clone());

    case.status = CaseStatus::Completed;
    store.put_case(case);

    AuditEvent::new("diagnosis.issue", "report", report.id.to_string())
        .with_actor(doctor_id)
        .with_details(serde_json::json!({
            "has_autism": report.has_autism,
            "spectrum": report.spectrum,
        }))
        .emit();
    Ok(report)
}

/// Flip a report's `shared_with_parent` flag. Only the doctor who issued the
/// report may change its sharing.
pub fn toggle_report_share(
    store: &RecordStore,
    report_id: Uuid,
    doctor_id: Uuid,
) -> Result<DiagnosisReport, TherapyError> {
    let mut report = store.report(report_id)?;
    if report.doctor_id != doctor_id {
        return Err(TherapyError::Conflict(format!(
            "doctor {doctor_id} did not issue this report"
        )));
    }
    report.shared_with_parent = !report.shared_with_parent;
    report.updated_at = Timestamp::now();
    store.update_report(report.clone())?;

    AuditEvent::new("diagnosis.toggle_share", "report", report.id.to_string())
        .with_actor(doctor_id)
        .with_details(serde_json::json!({
            "shared_with_parent": report.shared_with_parent,
        }))
        .emit();
    Ok(report)
}

/// Reports for a child, newest first. Parents only see shared reports, so the
/// caller passes `include_unshared` according to the resolved role.
pub fn reports_for(
    store: &RecordStore,
    child_id: Uuid,
    include_unshared: bool,
) -> Result<Vec<DiagnosisReport>, TherapyError> {
    store.child(child_id)?;
    Ok(store
        .reports_for(child_id)
        .into_iter()
        .filter(|r| include_unshared || r.shared_with_parent)
        .collect())
}
