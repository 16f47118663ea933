//! Intake write paths: child registration, M-CHAT screening submission,
//! medical-history submission, and observation videos.
//!
//! Derived fields (screening score, risk level, specialist flag) are
//! recomputed here on every save — the stored values are overwritten
//! wholesale so a stale score can never be persisted.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sahara_audit::AuditEvent;
use sahara_core::models::assessment::{ObservationVideo, VideoKind};
use sahara_core::models::child::{Child, Gender};
use sahara_core::models::medical_history::MedicalHistory;
use sahara_core::models::screening::ScreeningResponse;
use sahara_screening::mchat::{self, AnswerSheet};
use sahara_screening::history;
use sahara_store::RecordStore;

use crate::error::TherapyError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewChild {
    pub parent_id: Uuid,
    pub full_name: String,
    pub date_of_birth: jiff::civil::Date,
    pub age_years: u8,
    pub age_months: u8,
    pub gender: Gender,
}

pub fn register_child(store: &RecordStore, new: NewChild) -> Result<Child, TherapyError> {
    if new.full_name.trim().is_empty() {
        return Err(TherapyError::Validation("child name is required".into()));
    }
    let now = Timestamp::now();
    let child = Child {
        id: Uuid::new_v4(),
        parent_id: new.parent_id,
        full_name: new.full_name,
        date_of_birth: new.date_of_birth,
        age_years: new.age_years,
        age_months: new.age_months,
        gender: new.gender,
        created_at: now,
        updated_at: now,
    };
    store.insert_child(child.clone());
    AuditEvent::new("child.register", "child", child.id.to_string())
        .with_actor(child.parent_id)
        .emit();
    Ok(child)
}

/// Submit (or resubmit) the child's M-CHAT screening. The sheet is complete by
/// construction; the score and risk tier are recomputed and overwrite whatever
/// was stored before.
pub fn submit_screening(
    store: &RecordStore,
    child_id: Uuid,
    sheet: &AnswerSheet,
) -> Result<ScreeningResponse, TherapyError> {
    store.child(child_id)?;

    let outcome = mchat::score(sheet);
    let now = Timestamp::now();
    let previous = store.screening_for(child_id).ok();

    let response = ScreeningResponse {
        id: previous.as_ref().map_or_else(Uuid::new_v4, |p| p.id),
        child_id,
        answers: sheet.as_array(),
        total_score: outcome.total_score,
        risk_level: outcome.risk_level,
        created_at: previous.as_ref().map_or(now, |p| p.created_at),
        updated_at: now,
    };
    store.put_screening(response.clone());

    AuditEvent::new("screening.submit", "screening", response.id.to_string())
        .with_details(serde_json::json!({
            "total_score": response.total_score,
            "risk_level": response.risk_level,
        }))
        .emit();
    Ok(response)
}

/// The caller-editable part of the medical-history form (A1–A4).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MedicalHistoryDraft {
    pub pregnancy_infection: bool,
    pub pregnancy_infection_desc: Option<String>,
    pub birth_complications: bool,
    pub birth_complications_desc: Option<String>,
    pub brain_injury_first_year: bool,
    pub brain_injury_desc: Option<String>,
    pub family_autism_history: bool,
}

/// Submit (or resubmit) the medical-history form. `requires_specialist` is
/// derived from the four flags here; there is no way for a caller to set it.
pub fn submit_medical_history(
    store: &RecordStore,
    child_id: Uuid,
    draft: MedicalHistoryDraft,
) -> Result<MedicalHistory, TherapyError> {
    store.child(child_id)?;

    let now = Timestamp::now();
    let previous = store.history_for(child_id).ok();

    let mut record = MedicalHistory {
        id: previous.as_ref().map_or_else(Uuid::new_v4, |p| p.id),
        child_id,
        pregnancy_infection: draft.pregnancy_infection,
        pregnancy_infection_desc: draft.pregnancy_infection_desc,
        birth_complications: draft.birth_complications,
        birth_complications_desc: draft.birth_complications_desc,
        brain_injury_first_year: draft.brain_injury_first_year,
        brain_injury_desc: draft.brain_injury_desc,
        family_autism_history: draft.family_autism_history,
        requires_specialist: false,
        created_at: previous.as_ref().map_or(now, |p| p.created_at),
        updated_at: now,
    };
    record.requires_specialist = history::requires_specialist(&record);
    store.put_history(record.clone());

    AuditEvent::new("medical_history.submit", "medical_history", record.id.to_string())
        .with_details(serde_json::json!({
            "requires_specialist": record.requires_specialist,
        }))
        .emit();
    Ok(record)
}

pub fn attach_video(
    store: &RecordStore,
    child_id: Uuid,
    kind: VideoKind,
    url: String,
    description: Option<String>,
) -> Result<ObservationVideo, TherapyError> {
    store.child(child_id)?;
    if url.trim().is_empty() {
        return Err(TherapyError::Validation("video url is required".into()));
    }

    let video = ObservationVideo {
        id: Uuid::new_v4(),
        child_id,
        kind,
        url,
        description,
        uploaded_at: Timestamp::now(),
    };
    store.add_video(video.clone());
    AuditEvent::new("video.attach", "video", video.id.to_string()).emit();
    Ok(video)
}

/// Delete an observation video. A video belonging to another child is treated
/// as not found, so a caller can never remove across children by guessing ids.
pub fn remove_video(
    store: &RecordStore,
    child_id: Uuid,
    video_id: Uuid,
) -> Result<(), TherapyError> {
    let video = store.video(video_id)?;
    if video.child_id != child_id {
        return Err(TherapyError::NotFound(format!("video {video_id} not found")));
    }
    store.remove_video(video_id)?;
    AuditEvent::new("video.remove", "video", video_id.to_string()).emit();
    Ok(())
}
