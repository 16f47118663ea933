//! Daily progress submissions and the progress views the dashboards read.

use jiff::Timestamp;
use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sahara_audit::AuditEvent;
use sahara_core::models::assignment::{DailyProgressEntry, ProgressStatus};
use sahara_core::models::curriculum::CurriculumTask;
use sahara_store::RecordStore;

use crate::error::TherapyError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressSubmission {
    pub task_id: Uuid,
    /// The calendar date the task was attempted, supplied by the caller.
    pub date: Date,
    pub status: ProgressStatus,
    pub video_url: Option<String>,
    pub parent_notes: Option<String>,
}

/// Upsert a progress entry for (assignment, task, date). A resubmission for
/// the same key overwrites the earlier entry — last writer wins. The task may
/// belong to any day of the curriculum, not just the current one.
///
/// Returns the stored entry and whether it was newly created.
pub fn submit_progress(
    store: &RecordStore,
    assignment_id: Uuid,
    submission: ProgressSubmission,
) -> Result<(DailyProgressEntry, bool), TherapyError> {
    let assignment = store.assignment(assignment_id)?;
    let task = store.task(submission.task_id)?;
    if task.curriculum_id != assignment.curriculum_id {
        return Err(TherapyError::NotFound(format!(
            "task {} does not belong to the assigned curriculum",
            task.id
        )));
    }

    let entry = DailyProgressEntry {
        id: Uuid::new_v4(),
        assignment_id,
        task_id: task.id,
        day_number: assignment.current_day,
        date: submission.date,
        status: submission.status,
        video_url: submission.video_url,
        parent_notes: submission.parent_notes,
        submitted_at: Timestamp::now(),
    };
    let (stored, created) = store.upsert_progress(entry);

    AuditEvent::new("progress.submit", "progress", stored.id.to_string())
        .with_details(serde_json::json!({
            "assignment_id": assignment_id,
            "task_id": stored.task_id,
            "date": stored.date.to_string(),
            "status": stored.status,
            "created": created,
        }))
        .emit();
    Ok((stored, created))
}

/// One task of a day together with any progress logged for it on `date`.
#[derive(Debug, Clone, Serialize)]
pub struct TaskWithProgress {
    pub task: CurriculumTask,
    pub progress: Option<DailyProgressEntry>,
    pub is_completed: bool,
}

/// The tasks of a given day with progress for the given date attached, as the
/// parent's task screen renders them.
pub fn tasks_for_day(
    store: &RecordStore,
    assignment_id: Uuid,
    day: u16,
    date: Date,
) -> Result<Vec<TaskWithProgress>, TherapyError> {
    let assignment = store.assignment(assignment_id)?;
    let tasks = store.tasks_for_day(assignment.curriculum_id, day);

    Ok(tasks
        .into_iter()
        .map(|task| {
            let progress = store.progress_entry(assignment_id, task.id, date);
            let is_completed = progress.as_ref().is_some_and(|p| p.status.is_done());
            TaskWithProgress {
                task,
                progress,
                is_completed,
            }
        })
        .collect())
}

/// Convenience for the parent home screen: the current day's tasks.
pub fn today_tasks(
    store: &RecordStore,
    assignment_id: Uuid,
    today: Date,
) -> Result<Vec<TaskWithProgress>, TherapyError> {
    let assignment = store.assignment(assignment_id)?;
    tasks_for_day(store, assignment_id, assignment.current_day, today)
}

/// Progress entries of one day, for the history view.
#[derive(Debug, Clone, Serialize)]
pub struct DayProgress {
    pub day_number: u16,
    pub entries: Vec<DailyProgressEntry>,
}

/// All progress grouped by day number, most recent day first. Entries within
/// a day keep the store's newest-first ordering.
pub fn progress_history(
    store: &RecordStore,
    assignment_id: Uuid,
) -> Result<Vec<DayProgress>, TherapyError> {
    store.assignment(assignment_id)?;

    let mut days: Vec<DayProgress> = Vec::new();
    for entry in store.progress_for(assignment_id) {
        match days.iter_mut().find(|d| d.day_number == entry.day_number) {
            Some(day) => day.entries.push(entry),
            None => days.push(DayProgress {
                day_number: entry.day_number,
                entries: vec![entry],
            }),
        }
    }
    days.sort_by(|a, b| b.day_number.cmp(&a.day_number));
    Ok(days)
}

/// Aggregate counts for the doctor dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProgressStats {
    pub total_submitted: usize,
    pub done: usize,
    pub done_without_help: usize,
    /// Percentage of submitted entries that were done, one decimal place.
    pub completion_rate: f64,
}

pub fn progress_stats(
    store: &RecordStore,
    assignment_id: Uuid,
) -> Result<ProgressStats, TherapyError> {
    store.assignment(assignment_id)?;

    let entries = store.progress_for(assignment_id);
    let total_submitted = entries.len();
    let done = entries.iter().filter(|e| e.status.is_done()).count();
    let done_without_help = entries
        .iter()
        .filter(|e| e.status == ProgressStatus::DoneWithoutHelp)
        .count();
    let completion_rate = if total_submitted == 0 {
        0.0
    } else {
        (done as f64 / total_submitted as f64 * 1000.0).round() / 10.0
    };

    Ok(ProgressStats {
        total_submitted,
        done,
        done_without_help,
        completion_rate,
    })
}
