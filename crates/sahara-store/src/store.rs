use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use jiff::civil::Date;
use tracing::debug;
use uuid::Uuid;

use sahara_core::models::assessment::{AssessmentCase, CaseStatus, ObservationVideo};
use sahara_core::models::assignment::{
    AssignmentStatus, CheckpointReview, CurriculumAssignment, DailyProgressEntry,
};
use sahara_core::models::child::Child;
use sahara_core::models::curriculum::{Curriculum, CurriculumKind, CurriculumTask};
use sahara_core::models::medical_history::MedicalHistory;
use sahara_core::models::report::DiagnosisReport;
use sahara_core::models::screening::ScreeningResponse;

use crate::error::StoreError;

/// Uniqueness key for daily progress: one entry per task per calendar date
/// within an assignment.
pub(crate) type ProgressKey = (Uuid, Uuid, Date);

#[derive(Debug, Default)]
pub(crate) struct Collections {
    pub children: HashMap<Uuid, Child>,
    /// One screening per child, keyed by child id.
    pub screenings: HashMap<Uuid, ScreeningResponse>,
    /// One medical history per child, keyed by child id.
    pub histories: HashMap<Uuid, MedicalHistory>,
    pub curricula: HashMap<Uuid, Curriculum>,
    pub tasks: HashMap<Uuid, CurriculumTask>,
    pub assignments: HashMap<Uuid, CurriculumAssignment>,
    /// child id -> the id of its single active assignment.
    pub active_assignments: HashMap<Uuid, Uuid>,
    pub progress: HashMap<ProgressKey, DailyProgressEntry>,
    pub reviews: Vec<CheckpointReview>,
    /// One case per child, keyed by child id.
    pub cases: HashMap<Uuid, AssessmentCase>,
    pub videos: HashMap<Uuid, ObservationVideo>,
    pub reports: HashMap<Uuid, DiagnosisReport>,
}

/// The shared record store. Cheap to share by reference; interior mutability
/// behind one `RwLock` so precondition checks and the write they guard are
/// atomic with respect to other writers.
#[derive(Debug, Default)]
pub struct RecordStore {
    inner: RwLock<Collections>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_collections(inner: Collections) -> Self {
        Self {
            inner: RwLock::new(inner),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, Collections> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Collections> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn with_collections<R>(&self, f: impl FnOnce(&Collections) -> R) -> R {
        f(&self.read())
    }

    // ---- children ----

    pub fn insert_child(&self, child: Child) {
        debug!(child_id = %child.id, "insert child");
        self.write().children.insert(child.id, child);
    }

    pub fn child(&self, id: Uuid) -> Result<Child, StoreError> {
        self.read()
            .children
            .get(&id)
            .cloned()
            .ok_or(StoreError::not_found("child", id))
    }

    pub fn children_of_parent(&self, parent_id: Uuid) -> Vec<Child> {
        let mut children: Vec<Child> = self
            .read()
            .children
            .values()
            .filter(|c| c.parent_id == parent_id)
            .cloned()
            .collect();
        children.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        children
    }

    /// Delete a child and everything it owns: screening, medical history,
    /// case, videos, reports, assignments, and each assignment's progress
    /// entries and reviews.
    pub fn remove_child(&self, id: Uuid) -> Result<(), StoreError> {
        let mut inner = self.write();
        inner
            .children
            .remove(&id)
            .ok_or(StoreError::not_found("child", id))?;

        inner.screenings.remove(&id);
        inner.histories.remove(&id);
        inner.cases.remove(&id);
        inner.active_assignments.remove(&id);
        inner.videos.retain(|_, v| v.child_id != id);
        inner.reports.retain(|_, r| r.child_id != id);

        let assignment_ids: Vec<Uuid> = inner
            .assignments
            .values()
            .filter(|a| a.child_id == id)
            .map(|a| a.id)
            .collect();
        inner.assignments.retain(|_, a| a.child_id != id);
        inner
            .progress
            .retain(|(assignment_id, _, _), _| !assignment_ids.contains(assignment_id));
        inner
            .reviews
            .retain(|r| !assignment_ids.contains(&r.assignment_id));

        debug!(child_id = %id, assignments = assignment_ids.len(), "removed child cascade");
        Ok(())
    }

    // ---- screenings ----

    /// Insert or replace the child's screening. One per child.
    pub fn put_screening(&self, screening: ScreeningResponse) {
        debug!(child_id = %screening.child_id, score = screening.total_score, "put screening");
        self.write()
            .screenings
            .insert(screening.child_id, screening);
    }

    pub fn screening_for(&self, child_id: Uuid) -> Result<ScreeningResponse, StoreError> {
        self.read()
            .screenings
            .get(&child_id)
            .cloned()
            .ok_or(StoreError::NotFoundForChild {
                entity: "screening",
                child_id,
            })
    }

    // ---- medical histories ----

    pub fn put_history(&self, history: MedicalHistory) {
        debug!(child_id = %history.child_id, flagged = history.requires_specialist, "put medical history");
        self.write().histories.insert(history.child_id, history);
    }

    pub fn history_for(&self, child_id: Uuid) -> Result<MedicalHistory, StoreError> {
        self.read()
            .histories
            .get(&child_id)
            .cloned()
            .ok_or(StoreError::NotFoundForChild {
                entity: "medical history",
                child_id,
            })
    }

    // ---- curricula & tasks ----

    pub fn insert_curriculum(&self, curriculum: Curriculum) {
        debug!(curriculum_id = %curriculum.id, title = %curriculum.title, "insert curriculum");
        self.write().curricula.insert(curriculum.id, curriculum);
    }

    pub fn curriculum(&self, id: Uuid) -> Result<Curriculum, StoreError> {
        self.read()
            .curricula
            .get(&id)
            .cloned()
            .ok_or(StoreError::not_found("curriculum", id))
    }

    pub fn curricula(&self) -> Vec<Curriculum> {
        let mut all: Vec<Curriculum> = self.read().curricula.values().cloned().collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        all
    }

    /// The oldest registered curriculum of the given kind, if any. Picking by
    /// `created_at` keeps the result stable when several are registered.
    pub fn curriculum_of_kind(&self, kind: CurriculumKind) -> Option<Curriculum> {
        self.read()
            .curricula
            .values()
            .filter(|c| c.kind == kind)
            .min_by_key(|c| c.created_at)
            .cloned()
    }

    pub fn insert_task(&self, task: CurriculumTask) -> Result<(), StoreError> {
        let mut inner = self.write();
        if !inner.curricula.contains_key(&task.curriculum_id) {
            return Err(StoreError::not_found("curriculum", task.curriculum_id));
        }
        inner.tasks.insert(task.id, task);
        Ok(())
    }

    pub fn task(&self, id: Uuid) -> Result<CurriculumTask, StoreError> {
        self.read()
            .tasks
            .get(&id)
            .cloned()
            .ok_or(StoreError::not_found("task", id))
    }

    /// All tasks of a curriculum, ordered by day then position within the day.
    pub fn tasks_for(&self, curriculum_id: Uuid) -> Vec<CurriculumTask> {
        let mut tasks: Vec<CurriculumTask> = self
            .read()
            .tasks
            .values()
            .filter(|t| t.curriculum_id == curriculum_id)
            .cloned()
            .collect();
        tasks.sort_by_key(|t| (t.day_number, t.order_index));
        tasks
    }

    pub fn tasks_for_day(&self, curriculum_id: Uuid, day: u16) -> Vec<CurriculumTask> {
        let mut tasks: Vec<CurriculumTask> = self
            .read()
            .tasks
            .values()
            .filter(|t| t.curriculum_id == curriculum_id && t.day_number == day)
            .cloned()
            .collect();
        tasks.sort_by_key(|t| t.order_index);
        tasks
    }

    // ---- assignments ----

    /// Insert an assignment. When it is `Active`, the child's active slot must
    /// be free; the check and the insert happen under one write lock, so a
    /// racing second `assign` sees the conflict rather than a second slot.
    pub fn insert_assignment(&self, assignment: CurriculumAssignment) -> Result<(), StoreError> {
        let mut inner = self.write();
        if assignment.status == AssignmentStatus::Active
            && inner.active_assignments.contains_key(&assignment.child_id)
        {
            return Err(StoreError::ActiveAssignmentExists {
                child_id: assignment.child_id,
            });
        }
        if assignment.status == AssignmentStatus::Active {
            inner
                .active_assignments
                .insert(assignment.child_id, assignment.id);
        }
        debug!(assignment_id = %assignment.id, child_id = %assignment.child_id, "insert assignment");
        inner.assignments.insert(assignment.id, assignment);
        Ok(())
    }

    pub fn assignment(&self, id: Uuid) -> Result<CurriculumAssignment, StoreError> {
        self.read()
            .assignments
            .get(&id)
            .cloned()
            .ok_or(StoreError::not_found("assignment", id))
    }

    pub fn active_assignment_for(&self, child_id: Uuid) -> Option<CurriculumAssignment> {
        let inner = self.read();
        let id = inner.active_assignments.get(&child_id)?;
        inner.assignments.get(id).cloned()
    }

    pub fn assignments_for(&self, child_id: Uuid) -> Vec<CurriculumAssignment> {
        let mut all: Vec<CurriculumAssignment> = self
            .read()
            .assignments
            .values()
            .filter(|a| a.child_id == child_id)
            .cloned()
            .collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        all
    }

    /// Replace an existing assignment, keeping the active-slot index in sync.
    /// Reactivating (e.g. `resume`) conflicts if another assignment of the
    /// same child took the slot in the meantime.
    pub fn update_assignment(&self, assignment: CurriculumAssignment) -> Result<(), StoreError> {
        let mut inner = self.write();
        if !inner.assignments.contains_key(&assignment.id) {
            return Err(StoreError::not_found("assignment", assignment.id));
        }

        let current_active = inner.active_assignments.get(&assignment.child_id).copied();
        match current_active {
            Some(active_id) if active_id != assignment.id => {
                if assignment.status == AssignmentStatus::Active {
                    return Err(StoreError::ActiveAssignmentExists {
                        child_id: assignment.child_id,
                    });
                }
            }
            Some(_) if assignment.status != AssignmentStatus::Active => {
                inner.active_assignments.remove(&assignment.child_id);
            }
            None if assignment.status == AssignmentStatus::Active => {
                inner
                    .active_assignments
                    .insert(assignment.child_id, assignment.id);
            }
            _ => {}
        }

        inner.assignments.insert(assignment.id, assignment);
        Ok(())
    }

    // ---- daily progress ----

    /// Upsert a progress entry by its (assignment, task, date) key. A
    /// resubmission keeps the original entry id and overwrites the rest —
    /// last writer wins. Returns the stored entry and whether it was new.
    pub fn upsert_progress(
        &self,
        mut entry: DailyProgressEntry,
    ) -> (DailyProgressEntry, bool) {
        let key: ProgressKey = (entry.assignment_id, entry.task_id, entry.date);
        let mut inner = self.write();
        let created = match inner.progress.get(&key) {
            Some(existing) => {
                entry.id = existing.id;
                false
            }
            None => true,
        };
        debug!(assignment_id = %entry.assignment_id, task_id = %entry.task_id, date = %entry.date, created, "upsert progress");
        inner.progress.insert(key, entry.clone());
        (entry, created)
    }

    /// All progress for an assignment, newest date first, then newest
    /// submission first.
    pub fn progress_for(&self, assignment_id: Uuid) -> Vec<DailyProgressEntry> {
        let mut entries: Vec<DailyProgressEntry> = self
            .read()
            .progress
            .values()
            .filter(|e| e.assignment_id == assignment_id)
            .cloned()
            .collect();
        entries.sort_by(|a, b| b.date.cmp(&a.date).then(b.submitted_at.cmp(&a.submitted_at)));
        entries
    }

    pub fn progress_entry(
        &self,
        assignment_id: Uuid,
        task_id: Uuid,
        date: Date,
    ) -> Option<DailyProgressEntry> {
        self.read()
            .progress
            .get(&(assignment_id, task_id, date))
            .cloned()
    }

    // ---- checkpoint reviews ----

    pub fn append_review(&self, review: CheckpointReview) {
        debug!(assignment_id = %review.assignment_id, period = review.review_period, "append review");
        self.write().reviews.push(review);
    }

    pub fn reviews_for(&self, assignment_id: Uuid) -> Vec<CheckpointReview> {
        let mut reviews: Vec<CheckpointReview> = self
            .read()
            .reviews
            .iter()
            .filter(|r| r.assignment_id == assignment_id)
            .cloned()
            .collect();
        reviews.sort_by(|a, b| b.reviewed_at.cmp(&a.reviewed_at));
        reviews
    }

    // ---- assessment cases ----

    /// Insert or replace the child's case. One per child.
    pub fn put_case(&self, case: AssessmentCase) {
        debug!(child_id = %case.child_id, status = ?case.status, "put case");
        self.write().cases.insert(case.child_id, case);
    }

    pub fn case_for(&self, child_id: Uuid) -> Result<AssessmentCase, StoreError> {
        self.read()
            .cases
            .get(&child_id)
            .cloned()
            .ok_or(StoreError::NotFoundForChild {
                entity: "assessment case",
                child_id,
            })
    }

    pub fn cases_with_status(&self, status: CaseStatus) -> Vec<AssessmentCase> {
        self.read()
            .cases
            .values()
            .filter(|c| c.status == status)
            .cloned()
            .collect()
    }

    pub fn cases_for_doctor(&self, doctor_id: Uuid) -> Vec<AssessmentCase> {
        self.read()
            .cases
            .values()
            .filter(|c| c.assigned_doctor == Some(doctor_id))
            .cloned()
            .collect()
    }

    // ---- videos ----

    pub fn add_video(&self, video: ObservationVideo) {
        self.write().videos.insert(video.id, video);
    }

    pub fn video(&self, id: Uuid) -> Result<ObservationVideo, StoreError> {
        self.read()
            .videos
            .get(&id)
            .cloned()
            .ok_or(StoreError::not_found("video", id))
    }

    pub fn remove_video(&self, id: Uuid) -> Result<ObservationVideo, StoreError> {
        debug!(video_id = %id, "remove video");
        self.write()
            .videos
            .remove(&id)
            .ok_or(StoreError::not_found("video", id))
    }

    pub fn videos_for(&self, child_id: Uuid) -> Vec<ObservationVideo> {
        let mut videos: Vec<ObservationVideo> = self
            .read()
            .videos
            .values()
            .filter(|v| v.child_id == child_id)
            .cloned()
            .collect();
        videos.sort_by(|a, b| b.uploaded_at.cmp(&a.uploaded_at));
        videos
    }

    // ---- diagnosis reports ----

    pub fn add_report(&self, report: DiagnosisReport) {
        debug!(child_id = %report.child_id, "add diagnosis report");
        self.write().reports.insert(report.id, report);
    }

    pub fn report(&self, id: Uuid) -> Result<DiagnosisReport, StoreError> {
        self.read()
            .reports
            .get(&id)
            .cloned()
            .ok_or(StoreError::not_found("report", id))
    }

    pub fn update_report(&self, report: DiagnosisReport) -> Result<(), StoreError> {
        let mut inner = self.write();
        if !inner.reports.contains_key(&report.id) {
            return Err(StoreError::not_found("report", report.id));
        }
        inner.reports.insert(report.id, report);
        Ok(())
    }

    pub fn reports_for(&self, child_id: Uuid) -> Vec<DiagnosisReport> {
        let mut reports: Vec<DiagnosisReport> = self
            .read()
            .reports
            .values()
            .filter(|r| r.child_id == child_id)
            .cloned()
            .collect();
        reports.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        reports
    }
}
