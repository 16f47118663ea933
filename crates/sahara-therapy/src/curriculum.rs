//! Curriculum templates and the progression state machine.
//!
//! States: active → paused → active, and active → completed. Completed is
//! terminal. `advance_day` deliberately does NOT require the day's tasks to
//! be done — the human-facing layer warns the user first, and the engine
//! always permits the advance.

use jiff::{Span, Timestamp};
use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sahara_audit::AuditEvent;
use sahara_core::models::assignment::{AssignmentStatus, CurriculumAssignment};
use sahara_core::models::curriculum::{Curriculum, CurriculumKind, CurriculumTask};
use sahara_store::RecordStore;

use crate::error::TherapyError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCurriculum {
    pub title: String,
    pub description: String,
    pub duration_days: u16,
    pub kind: CurriculumKind,
    pub spectrum_focus: Option<String>,
    /// None for system-seeded templates.
    pub created_by: Option<Uuid>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTask {
    pub day_number: u16,
    pub title: String,
    pub why_description: String,
    pub instructions: String,
    pub demo_video_url: Option<String>,
    pub order_index: u16,
}

pub fn register_curriculum(
    store: &RecordStore,
    new: NewCurriculum,
) -> Result<Curriculum, TherapyError> {
    if new.title.trim().is_empty() {
        return Err(TherapyError::Validation("curriculum title is required".into()));
    }
    if new.duration_days == 0 {
        return Err(TherapyError::Validation(
            "curriculum duration must be at least one day".into(),
        ));
    }

    let curriculum = Curriculum {
        id: Uuid::new_v4(),
        title: new.title,
        description: new.description,
        duration_days: new.duration_days,
        kind: new.kind,
        spectrum_focus: new.spectrum_focus,
        created_by: new.created_by,
        created_at: Timestamp::now(),
    };
    store.insert_curriculum(curriculum.clone());
    Ok(curriculum)
}

pub fn add_task(
    store: &RecordStore,
    curriculum_id: Uuid,
    new: NewTask,
) -> Result<CurriculumTask, TherapyError> {
    let curriculum = store.curriculum(curriculum_id)?;
    if new.day_number == 0 || new.day_number > curriculum.duration_days {
        return Err(TherapyError::Validation(format!(
            "day {} is outside the curriculum's 1..={} range",
            new.day_number, curriculum.duration_days
        )));
    }

    let task = CurriculumTask {
        id: Uuid::new_v4(),
        curriculum_id,
        day_number: new.day_number,
        title: new.title,
        why_description: new.why_description,
        instructions: new.instructions,
        demo_video_url: new.demo_video_url,
        order_index: new.order_index,
    };
    store.insert_task(task.clone())?;
    Ok(task)
}

/// Assign a curriculum to a child, starting at day 1.
///
/// Rejected with a conflict when the child already has an active assignment.
/// The check here gives the friendly message; the store's uniqueness index
/// repeats it atomically, so a racing second call still loses.
pub fn assign(
    store: &RecordStore,
    child_id: Uuid,
    curriculum_id: Uuid,
    assigned_by: Option<Uuid>,
    start_date: Date,
) -> Result<CurriculumAssignment, TherapyError> {
    let child = store.child(child_id)?;
    let curriculum = store.curriculum(curriculum_id)?;

    if store.active_assignment_for(child_id).is_some() {
        return Err(TherapyError::Conflict(format!(
            "child {} already has an active curriculum",
            child.id
        )));
    }

    let end_date = start_date
        .checked_add(Span::new().days(i64::from(curriculum.duration_days)))
        .map_err(|e| TherapyError::Validation(format!("invalid start date: {e}")))?;

    let assignment = CurriculumAssignment {
        id: Uuid::new_v4(),
        child_id,
        curriculum_id,
        assigned_by,
        start_date,
        end_date,
        current_day: 1,
        status: AssignmentStatus::Active,
        created_at: Timestamp::now(),
    };
    store.insert_assignment(assignment.clone())?;

    let mut event = AuditEvent::new("assignment.create", "assignment", assignment.id.to_string())
        .with_details(serde_json::json!({
            "child_id": child_id,
            "curriculum_id": curriculum_id,
            "duration_days": curriculum.duration_days,
        }));
    if let Some(doctor_id) = assigned_by {
        event = event.with_actor(doctor_id);
    }
    event.emit();

    Ok(assignment)
}

/// Advance an active assignment by one day.
///
/// At the final day this transitions to `completed` and leaves `current_day`
/// unchanged; afterwards the assignment is terminal and further calls
/// conflict. Unfinished tasks never block the advance.
pub fn advance_day(
    store: &RecordStore,
    assignment_id: Uuid,
) -> Result<CurriculumAssignment, TherapyError> {
    let mut assignment = store.assignment(assignment_id)?;
    match assignment.status {
        AssignmentStatus::Active => {}
        AssignmentStatus::Paused => {
            return Err(TherapyError::Conflict(format!(
                "assignment {assignment_id} is paused"
            )));
        }
        AssignmentStatus::Completed => {
            return Err(TherapyError::Conflict(format!(
                "assignment {assignment_id} is already completed"
            )));
        }
    }

    let curriculum = store.curriculum(assignment.curriculum_id)?;
    if assignment.current_day >= curriculum.duration_days {
        assignment.status = AssignmentStatus::Completed;
    } else {
        assignment.current_day += 1;
    }
    store.update_assignment(assignment.clone())?;

    AuditEvent::new("assignment.advance_day", "assignment", assignment.id.to_string())
        .with_details(serde_json::json!({
            "current_day": assignment.current_day,
            "status": assignment.status,
        }))
        .emit();
    Ok(assignment)
}

pub fn pause(
    store: &RecordStore,
    assignment_id: Uuid,
) -> Result<CurriculumAssignment, TherapyError> {
    let mut assignment = store.assignment(assignment_id)?;
    if assignment.status != AssignmentStatus::Active {
        return Err(TherapyError::Conflict(format!(
            "assignment {assignment_id} is not active"
        )));
    }
    assignment.status = AssignmentStatus::Paused;
    store.update_assignment(assignment.clone())?;
    AuditEvent::new("assignment.pause", "assignment", assignment.id.to_string()).emit();
    Ok(assignment)
}

/// Reactivate a paused assignment. Conflicts when another assignment for the
/// same child became active while this one was paused.
pub fn resume(
    store: &RecordStore,
    assignment_id: Uuid,
) -> Result<CurriculumAssignment, TherapyError> {
    let mut assignment = store.assignment(assignment_id)?;
    if assignment.status != AssignmentStatus::Paused {
        return Err(TherapyError::Conflict(format!(
            "assignment {assignment_id} is not paused"
        )));
    }
    assignment.status = AssignmentStatus::Active;
    store.update_assignment(assignment.clone())?;
    AuditEvent::new("assignment.resume", "assignment", assignment.id.to_string()).emit();
    Ok(assignment)
}
